//! Type system for conflang
//!
//! This module contains the data model the translator operates on:
//! - Tree nodes
//! - Numeric scalars
//! - Identifiers

pub mod identifier;
pub mod node;
pub mod number;

pub use identifier::Identifier;
pub use node::Node;
pub use number::Number;
