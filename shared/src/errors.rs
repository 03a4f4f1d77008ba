//! Error types for the Workout Tracker application

use thiserror::Error;

/// Errors raised by domain logic shared between server and client builds
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    /// The message without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            DomainError::Validation(msg) => msg,
        }
    }
}
