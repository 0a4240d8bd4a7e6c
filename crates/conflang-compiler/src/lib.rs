//! conflang Compiler - YAML tree to constant declarations
//!
//! This crate translates a parsed YAML tree into the conflang text format:
//! structural comment blocks for mappings and `def <Name> := <Value>`
//! declarations for scalars and sequences.

pub mod emitter;
pub mod error;
pub mod output;
pub mod translator;
pub mod validator;
pub mod walker;

// Re-export main types
pub use emitter::Emitter;
pub use error::{ConfigLanguageError, Result};
pub use output::Output;
pub use translator::{Translator, TranslatorOptions};
pub use validator::Validator;
pub use walker::Walker;
