use std::path::PathBuf;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from I/O operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The configured traffic directory is missing or is not a directory
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The traffic index has never been built successfully
    #[error("Traffic index not initialized")]
    NotInitialized,

    /// Error from query parameters
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

/// Result type for application
pub type AppResult<T> = Result<T, AppError>;
