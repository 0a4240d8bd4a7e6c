//! conflang Parser - YAML to tree parser for the conflang translator
//!
//! This crate turns YAML source text into the `conflang_core::Node` tree
//! the translator walks. YAML itself is handled by `serde_yaml`.

pub mod error;
pub mod tag_scanner;
pub mod yaml_parser;

// Re-export main parser types
pub use error::{ParseError, Result};
pub use yaml_parser::YamlParser;
