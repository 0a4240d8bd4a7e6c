//! Output accumulator
//!
//! Lines are appended in traversal order and joined with `\n` once the
//! whole document has been translated. A fresh `Output` is created for every
//! translation, so nothing leaks between calls.

/// Marker text of a structural comment block
pub const STRUCTURE_MARKER: &str = "Это структура";

/// Append-only list of emitted lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    lines: Vec<String>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one output unit
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append the `%{ ... %}` comment block for a structure as one unit
    pub fn push_structure_comment(&mut self, name: &str) {
        self.push_line(format!("%{{\n{} {}\n%}}", STRUCTURE_MARKER, name));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join all lines into the final document text
    pub fn into_text(self) -> String {
        self.lines.join("\n")
    }
}
