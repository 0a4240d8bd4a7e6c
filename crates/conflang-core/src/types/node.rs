//! Tree node types
//!
//! The `Node` enum is the shape a parsed YAML document is reduced to before
//! translation. Mapping entries keep document order. Scalars the translator
//! cannot express (booleans, nulls, tagged values) are kept as `Unsupported`
//! so they are rejected at the point the traversal reaches them.

use super::number::Number;
use std::fmt;

/// Parsed document node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Ordered key/value pairs
    Mapping(Vec<(String, Node)>),
    /// Ordered list of nodes
    Sequence(Vec<Node>),
    /// Integer or float scalar
    Number(Number),
    /// String scalar
    String(String),
    /// Any other scalar, holding its source rendering
    Unsupported(String),
}

impl Node {
    /// Build a mapping node from `(key, node)` pairs
    pub fn mapping<K: Into<String>>(entries: impl IntoIterator<Item = (K, Node)>) -> Self {
        Node::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a sequence node
    pub fn sequence(items: impl IntoIterator<Item = Node>) -> Self {
        Node::Sequence(items.into_iter().collect())
    }

    /// Build a string node
    pub fn string(s: impl Into<String>) -> Self {
        Node::String(s.into())
    }

    /// Build a number node
    pub fn number(n: impl Into<Number>) -> Self {
        Node::Number(n.into())
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }

    pub fn as_mapping(&self) -> Option<&[(String, Node)]> {
        match self {
            Node::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Get a mapping value by key
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_mapping()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Short name of the node shape, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Mapping(_) => "mapping",
            Node::Sequence(_) => "sequence",
            Node::Number(_) => "number",
            Node::String(_) => "string",
            Node::Unsupported(_) => "unsupported",
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Mapping(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
            Node::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Node::Number(n) => write!(f, "{}", n),
            Node::String(s) => f.write_str(s),
            Node::Unsupported(raw) => f.write_str(raw),
        }
    }
}

impl From<Number> for Node {
    fn from(n: Number) -> Self {
        Node::Number(n)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::String(s)
    }
}
