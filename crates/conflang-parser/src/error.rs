//! Parser error types

use thiserror::Error;

/// Parser error
#[derive(Error, Debug)]
pub enum ParseError {
    /// YAML parsing error
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Explicit tag outside the core schema (e.g. `!!python/str`)
    #[error("unsupported tag {tag} at line {line}")]
    UnsupportedTag { tag: String, line: usize },
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
