use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task title cannot be empty")]
    EmptyTitle,

    #[error("Task not found: {0}")]
    NotFound(u32),

    #[error("No task ids left; the highest id is already {}", u32::MAX)]
    IdExhausted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid tasks file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to replace tasks file: {0}")]
    Persist(String),
}

pub type Result<T> = std::result::Result<T, TaskError>;
