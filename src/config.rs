use std::net::{Ipv4Addr, SocketAddr};

use anyhow::{bail, Context, Result};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub seed: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)), seed: false }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(addr) = lookup("TODO_API_ADDR") {
            config.addr = addr.parse().with_context(|| format!("invalid TODO_API_ADDR `{addr}`"))?;
        }
        if let Some(seed) = lookup("TODO_API_SEED") {
            config.seed = parse_flag(&seed).with_context(|| format!("invalid TODO_API_SEED `{seed}`"))?;
        }
        Ok(config)
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("expected a boolean, got `{other}`"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.addr.to_string(), "0.0.0.0:8080");
        assert!(!config.seed);
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[("TODO_API_ADDR", "127.0.0.1:3000"), ("TODO_API_SEED", "Yes")]).unwrap();
        assert_eq!(config.addr.to_string(), "127.0.0.1:3000");
        assert!(config.seed);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(load(&[("TODO_API_ADDR", "localhost")]).is_err());
        let err = load(&[("TODO_API_SEED", "maybe")]).unwrap_err();
        assert!(format!("{err:#}").contains("TODO_API_SEED"));
    }
}
