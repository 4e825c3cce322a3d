use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TodoId(pub String);

impl TodoId {
    pub fn as_str(&self) -> &str { &self.0 }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self { Self(s.to_string()) }
}

impl From<String> for TodoId {
    fn from(s: String) -> Self { Self(s) }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
    pub detail: String,
}

impl Todo {
    pub fn new(id: impl Into<TodoId>, title: impl Into<String>, done: bool, detail: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), done, detail: detail.into() }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateTodo {
    #[serde(deserialize_with = "null_as_default")]
    pub id: TodoId,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub done: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub detail: String,
}

impl From<CreateTodo> for Todo {
    fn from(input: CreateTodo) -> Self {
        Self { id: input.id, title: input.title, done: input.done, detail: input.detail }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTodo {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub done: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub detail: String,
}

impl UpdateTodo {
    pub fn apply_to(self, todo: &mut Todo) {
        todo.title = self.title;
        todo.done = self.done;
        todo.detail = self.detail;
    }
}
