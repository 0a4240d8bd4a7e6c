//! Declaration emitter
//!
//! Formats values and writes constant declarations and evaluations:
//!
//! ```text
//! def <Name> := <Value>
//! def <Name> := [ <Value> <Value> ... ]
//! !( <Name> )
//! ```

use crate::error::Result;
use crate::output::Output;
use crate::validator::Validator;
use conflang_core::Node;

/// Emitter for constant declarations
#[derive(Debug, Clone, Copy, Default)]
pub struct Emitter {
    validator: Validator,
}

impl Emitter {
    pub fn new(validator: Validator) -> Self {
        Self { validator }
    }

    /// Format a single value
    ///
    /// Strings are wrapped in double quotes as-is; interior quotes are not
    /// escaped. Numbers use their canonical text form.
    pub fn format_value(value: &Node) -> String {
        match value {
            Node::String(s) => format!("\"{}\"", s),
            Node::Number(n) => n.to_string(),
            Node::Sequence(items) => Self::format_sequence(items),
            Node::Mapping(_) | Node::Unsupported(_) => value.to_string(),
        }
    }

    /// Format a sequence as `[ v1 v2 ... ]`
    ///
    /// The empty sequence keeps both padding spaces: `[  ]`.
    pub fn format_sequence(items: &[Node]) -> String {
        let rendered: Vec<String> = items.iter().map(Self::format_value).collect();
        format!("[ {} ]", rendered.join(" "))
    }

    /// Emit `def <name> := <value>`
    pub fn translate_constant(&self, output: &mut Output, name: &str, value: &Node) -> Result<()> {
        self.translate_constant_at(output, name, value, 1)
    }

    /// Emit a constant whose value sits at nesting level `depth`
    pub fn translate_constant_at(
        &self,
        output: &mut Output,
        name: &str,
        value: &Node,
        depth: usize,
    ) -> Result<()> {
        let name = self.validator.validate_name(name)?;
        self.validator.validate_value_at(value, depth)?;

        let rendered = match value {
            Node::Sequence(items) => Self::format_sequence(items),
            other => Self::format_value(other),
        };

        log::trace!("emit constant {}", name);
        output.push_line(format!("def {} := {}", name, rendered));
        Ok(())
    }

    /// Emit `!( <name> )`
    pub fn translate_evaluation(&self, output: &mut Output, name: &str) -> Result<()> {
        let name = self.validator.validate_name(name)?;
        output.push_line(format!("!( {} )", name));
        Ok(())
    }
}
