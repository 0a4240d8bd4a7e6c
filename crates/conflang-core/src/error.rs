//! Error types for conflang Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Name does not satisfy the identifier grammar
    #[error("Недопустимое имя: {0}")]
    InvalidIdentifier(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
