//! Name and value validation
//!
//! Names must satisfy the identifier grammar. Values must be numbers,
//! strings, or sequences whose elements are themselves valid values.

use crate::error::{ConfigLanguageError, Result};
use conflang_core::{Identifier, Node};

/// Default limit on mapping and sequence nesting
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Validator for names and values
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    /// Deepest nesting level accepted
    max_depth: usize,
}

impl Validator {
    /// Create a new validator with the default depth limit
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Validate a constant or structure name
    pub fn validate_name(&self, name: &str) -> Result<Identifier> {
        Ok(Identifier::new(name)?)
    }

    /// Validate a constant value
    pub fn validate_value(&self, value: &Node) -> Result<()> {
        self.validate_value_at(value, 1)
    }

    /// Validate a value found at nesting level `depth`
    pub fn validate_value_at(&self, value: &Node, depth: usize) -> Result<()> {
        self.check_depth(depth)?;

        match value {
            Node::Number(_) | Node::String(_) => Ok(()),
            Node::Sequence(items) => items
                .iter()
                .try_for_each(|item| self.validate_value_at(item, depth + 1)),
            Node::Mapping(_) | Node::Unsupported(_) => Err(ConfigLanguageError::InvalidValue {
                value: value.to_string(),
            }),
        }
    }

    /// Fail once `depth` exceeds the configured limit
    pub fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            log::debug!("nesting depth {} exceeds limit {}", depth, self.max_depth);
            return Err(ConfigLanguageError::TooDeep { depth });
        }
        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
