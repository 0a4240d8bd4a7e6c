//! Tree walker
//!
//! Pre-order recursive descent over the node tree. A mapping emits its
//! structural comment block before any of its children; children are
//! visited in key order. The first error aborts the walk.

use crate::emitter::Emitter;
use crate::error::{ConfigLanguageError, Result};
use crate::output::Output;
use crate::validator::Validator;
use conflang_core::Node;

/// Recursive walker driving the validator and emitter
#[derive(Debug, Clone, Copy, Default)]
pub struct Walker {
    validator: Validator,
    emitter: Emitter,
}

impl Walker {
    pub fn new(validator: Validator) -> Self {
        Self {
            validator,
            emitter: Emitter::new(validator),
        }
    }

    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    /// Process a named node at the top nesting level
    pub fn process_node(&self, output: &mut Output, name: &str, node: &Node) -> Result<()> {
        self.process_node_at(output, name, node, 1)
    }

    /// Process a named node found at nesting level `depth`
    pub fn process_node_at(
        &self,
        output: &mut Output,
        name: &str,
        node: &Node,
        depth: usize,
    ) -> Result<()> {
        self.validator.validate_name(name)?;
        self.validator.check_depth(depth)?;

        match node {
            Node::Mapping(entries) => {
                log::trace!("enter structure {} ({} entries)", name, entries.len());
                output.push_structure_comment(name);
                for (key, value) in entries {
                    self.process_node_at(output, key, value, depth + 1)?;
                }
                Ok(())
            }
            Node::Sequence(_) | Node::Number(_) | Node::String(_) => {
                self.emitter.translate_constant_at(output, name, node, depth)
            }
            Node::Unsupported(raw) => Err(ConfigLanguageError::InvalidValue { value: raw.clone() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(name: &str, node: &Node) -> Result<Vec<String>> {
        let mut output = Output::new();
        Walker::default().process_node(&mut output, name, node)?;
        Ok(output.lines().to_vec())
    }

    #[test]
    fn test_scalar_node() {
        assert_eq!(walk("Port", &Node::number(80i64)).unwrap(), vec!["def Port := 80"]);
    }

    #[test]
    fn test_sequence_node() {
        let node = Node::sequence([Node::string("/"), Node::string("/api")]);
        assert_eq!(walk("Routes", &node).unwrap(), vec!["def Routes := [ \"/\" \"/api\" ]"]);
    }

    #[test]
    fn test_mapping_comment_precedes_children() {
        let node = Node::mapping([
            ("Name", Node::string("TestDB")),
            ("MaxConnections", Node::number(100i64)),
        ]);

        assert_eq!(
            walk("Database", &node).unwrap(),
            vec![
                "%{\nЭто структура Database\n%}",
                "def Name := \"TestDB\"",
                "def MaxConnections := 100",
            ]
        );
    }

    #[test]
    fn test_nested_mappings_in_order() {
        let node = Node::mapping([
            ("Inner", Node::mapping([("Value", Node::number(1i64))])),
            ("After", Node::number(2i64)),
        ]);

        assert_eq!(
            walk("Outer", &node).unwrap(),
            vec![
                "%{\nЭто структура Outer\n%}",
                "%{\nЭто структура Inner\n%}",
                "def Value := 1",
                "def After := 2",
            ]
        );
    }

    #[test]
    fn test_empty_mapping_emits_only_comment() {
        let node = Node::mapping(Vec::<(String, Node)>::new());
        assert_eq!(walk("Empty", &node).unwrap(), vec!["%{\nЭто структура Empty\n%}"]);
    }

    #[test]
    fn test_structure_name_is_validated() {
        let node = Node::mapping([("Value", Node::number(1i64))]);
        assert!(matches!(
            walk("server", &node),
            Err(ConfigLanguageError::InvalidIdentifier { name }) if name == "server"
        ));
    }

    #[test]
    fn test_unsupported_node() {
        assert!(matches!(
            walk("Enabled", &Node::Unsupported("false".to_string())),
            Err(ConfigLanguageError::InvalidValue { value }) if value == "false"
        ));
    }

    #[test]
    fn test_first_error_wins() {
        let node = Node::mapping([
            ("bad", Node::number(1i64)),
            ("Flag", Node::Unsupported("true".to_string())),
        ]);
        assert!(matches!(
            walk("Root", &node),
            Err(ConfigLanguageError::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_mapping_depth_limit() {
        let walker = Walker::new(Validator::with_max_depth(2));
        let node = Node::mapping([("Inner", Node::mapping([("Value", Node::number(1i64))]))]);

        let mut output = Output::new();
        assert!(matches!(
            walker.process_node(&mut output, "Outer", &node),
            Err(ConfigLanguageError::TooDeep { depth: 3 })
        ));
    }

    #[test]
    fn test_emitter_accessor_supports_evaluation() {
        let walker = Walker::default();
        let mut output = Output::new();
        walker.emitter().translate_evaluation(&mut output, "Port").unwrap();
        assert_eq!(output.into_text(), "!( Port )");
    }
}
