//! Identifier type
//!
//! An identifier starts with an underscore or an uppercase ASCII letter and
//! continues with underscores, ASCII letters of either case, or digits.

use crate::error::{CoreError, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

static IDENTIFIER_RE: OnceLock<Regex> = OnceLock::new();

fn identifier_regex() -> &'static Regex {
    IDENTIFIER_RE.get_or_init(|| {
        Regex::new(r"^[_A-Z][_a-zA-Z0-9]*$").expect("identifier pattern is a valid regex")
    })
}

/// A validated constant or structure name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Validate `name` and wrap it
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if Self::is_valid(&name) {
            Ok(Self(name))
        } else {
            log::trace!("rejected identifier {:?}", name);
            Err(CoreError::InvalidIdentifier(name))
        }
    }

    /// Check whether `name` satisfies the identifier grammar
    pub fn is_valid(name: &str) -> bool {
        identifier_regex().is_match(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = CoreError;

    fn try_from(name: &str) -> Result<Self> {
        Self::new(name)
    }
}

impl TryFrom<String> for Identifier {
    type Error = CoreError;

    fn try_from(name: String) -> Result<Self> {
        Self::new(name)
    }
}
