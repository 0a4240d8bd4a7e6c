//! YAML Parser
//!
//! Parses YAML content into the `Node` tree consumed by the translator.

use crate::error::{ParseError, Result};
use crate::tag_scanner;
use conflang_core::{Node, Number};
use serde_yaml::Value as YamlValue;

/// YAML parser utilities
pub struct YamlParser;

impl YamlParser {
    /// Parse YAML string into a node tree
    ///
    /// Mapping entries keep their document order. Booleans, nulls and tagged
    /// values become `Node::Unsupported`. Explicit `!!` tags outside the core
    /// schema are rejected up front because `serde_yaml` would otherwise
    /// resolve them to plain strings.
    pub fn parse(yaml_str: &str) -> Result<Node> {
        if let Some(found) = tag_scanner::find_unsupported_tag(yaml_str) {
            return Err(ParseError::UnsupportedTag {
                tag: found.tag,
                line: found.line,
            });
        }

        let value = Self::parse_value(yaml_str)?;
        let node = Self::to_node(&value);
        log::trace!("parsed YAML document with root kind {}", node.kind());
        Ok(node)
    }

    /// Parse YAML string into a raw YAML value
    pub fn parse_value(yaml_str: &str) -> Result<YamlValue> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// Convert a YAML value into a node
    pub fn to_node(value: &YamlValue) -> Node {
        match value {
            YamlValue::Mapping(mapping) => Node::Mapping(
                mapping
                    .iter()
                    .map(|(key, value)| (Self::key_to_string(key), Self::to_node(value)))
                    .collect(),
            ),
            YamlValue::Sequence(items) => Node::Sequence(items.iter().map(Self::to_node).collect()),
            YamlValue::Number(n) => Node::Number(Self::to_number(n)),
            YamlValue::String(s) => Node::String(s.clone()),
            YamlValue::Null | YamlValue::Bool(_) | YamlValue::Tagged(_) => {
                Node::Unsupported(Self::to_string(value))
            }
        }
    }

    /// Convert a YAML number, preferring the integer representations
    pub fn to_number(n: &serde_yaml::Number) -> Number {
        if let Some(i) = n.as_i64() {
            Number::Int(i)
        } else if let Some(u) = n.as_u64() {
            Number::UInt(u)
        } else {
            Number::Float(n.as_f64().unwrap_or(f64::NAN))
        }
    }

    /// Render a mapping key as text
    ///
    /// Non-string keys keep their textual form so they fail identifier
    /// validation rather than disappearing.
    pub fn key_to_string(key: &YamlValue) -> String {
        match key {
            YamlValue::String(s) => s.clone(),
            other => Self::to_string(other),
        }
    }

    /// Parse a YAML value to a compact string representation
    pub fn to_string(value: &YamlValue) -> String {
        match value {
            YamlValue::Null => "null".to_string(),
            YamlValue::Bool(b) => b.to_string(),
            YamlValue::Number(n) => Self::to_number(n).to_string(),
            YamlValue::String(s) => s.clone(),
            YamlValue::Sequence(_) | YamlValue::Mapping(_) => Self::to_node(value).to_string(),
            YamlValue::Tagged(tagged) => format!("{} {}", tagged.tag, Self::to_string(&tagged.value)),
        }
    }
}
