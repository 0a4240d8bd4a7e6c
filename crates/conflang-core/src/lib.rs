//! conflang Core - Core types shared by the conflang translator crates
//!
//! This crate provides the fundamental types used across the workspace:
//! - `Node`, the closed tree a YAML document is converted into
//! - `Number`, numeric scalars with their canonical text form
//! - `Identifier`, names that satisfy the constant naming grammar
//! - Error types

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use types::{Identifier, Node, Number};
