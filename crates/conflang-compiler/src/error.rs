//! Translator error types

use conflang_core::CoreError;
use conflang_parser::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Message for a document whose root is not a mapping
pub const ROOT_NOT_MAPPING: &str = "Корневой элемент должен быть словарём.";

/// Translator error
///
/// Every failure surfaces as this one type; the variants only distinguish
/// the cause.
#[derive(Error, Debug)]
pub enum ConfigLanguageError {
    /// Name does not satisfy the identifier grammar
    #[error("Недопустимое имя: {name}")]
    InvalidIdentifier { name: String },

    /// Value is not a number, string or sequence of valid values
    #[error("Недопустимое значение: {value}")]
    InvalidValue { value: String },

    /// Nesting exceeds the configured depth limit
    #[error("Недопустимое значение: превышена глубина вложенности {depth}")]
    TooDeep { depth: usize },

    /// Document shape is not translatable
    #[error("{0}")]
    InvalidDocument(String),

    /// Source text is not valid YAML
    #[error("Ошибка разбора YAML: {0}")]
    Parse(#[source] ParseError),

    /// Source file could not be read
    #[error("Не удалось прочитать файл {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<CoreError> for ConfigLanguageError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidIdentifier(name) => ConfigLanguageError::InvalidIdentifier { name },
        }
    }
}

impl From<ParseError> for ConfigLanguageError {
    fn from(err: ParseError) -> Self {
        match err {
            // Explicit non-native tags are an invalid value, not a syntax error
            ParseError::UnsupportedTag { tag, .. } => ConfigLanguageError::InvalidValue { value: tag },
            other => ConfigLanguageError::Parse(other),
        }
    }
}

/// Result type for translator operations
pub type Result<T> = std::result::Result<T, ConfigLanguageError>;
