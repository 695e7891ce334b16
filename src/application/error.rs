//! Application-level errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("configuration error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
