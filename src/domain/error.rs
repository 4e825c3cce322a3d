use thiserror::Error;

use super::todo::TodoId;

pub type TodoResult<T> = std::result::Result<T, TodoError>;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    #[error("todo already exists: {0}")]
    Conflict(TodoId),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("repository error: {0}")]
    Repository(#[from] anyhow::Error),
}

impl TodoError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        TodoError::InvalidInput(msg.into())
    }
}
