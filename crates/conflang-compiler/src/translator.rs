//! Main translator
//!
//! Provides the entry points that turn YAML text (or an already parsed
//! tree) into conflang text.

use crate::error::{ConfigLanguageError, Result, ROOT_NOT_MAPPING};
use crate::output::Output;
use crate::validator::{Validator, DEFAULT_MAX_DEPTH};
use crate::walker::Walker;
use conflang_core::Node;
use conflang_parser::YamlParser;
use std::path::Path;

/// Translator options
#[derive(Debug, Clone)]
pub struct TranslatorOptions {
    /// Deepest mapping/sequence nesting accepted
    pub max_depth: usize,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// The YAML to conflang translator
///
/// Holds only options; every call builds its own output, so one instance
/// can be reused and shared across threads.
#[derive(Debug, Clone)]
pub struct Translator {
    /// Translator options
    options: TranslatorOptions,
    /// Tree walker
    walker: Walker,
}

impl Translator {
    /// Create a new translator with default options
    pub fn new() -> Self {
        Self::with_options(TranslatorOptions::default())
    }

    /// Create a new translator with custom options
    pub fn with_options(options: TranslatorOptions) -> Self {
        let walker = Walker::new(Validator::with_max_depth(options.max_depth));
        Self { options, walker }
    }

    pub fn options(&self) -> &TranslatorOptions {
        &self.options
    }

    /// Translate YAML source text
    ///
    /// # Example
    ///
    /// ```
    /// use conflang_compiler::Translator;
    ///
    /// let text = Translator::new().translate("Port: 8080\n").unwrap();
    /// assert_eq!(text, "def Port := 8080");
    /// ```
    pub fn translate(&self, source: &str) -> Result<String> {
        let root = YamlParser::parse(source).map_err(|e| {
            log::debug!("YAML front end rejected input: {}", e);
            ConfigLanguageError::from(e)
        })?;
        self.translate_node(&root)
    }

    /// Translate an already parsed document
    pub fn translate_node(&self, root: &Node) -> Result<String> {
        let entries = root
            .as_mapping()
            .ok_or_else(|| ConfigLanguageError::InvalidDocument(ROOT_NOT_MAPPING.to_string()))?;

        let mut output = Output::new();
        for (key, value) in entries {
            self.walker.process_node(&mut output, key, value)?;
        }

        log::debug!(
            "translated {} top-level entries into {} output units",
            entries.len(),
            output.len()
        );
        Ok(output.into_text())
    }

    /// Read and translate a YAML file
    pub fn translate_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigLanguageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.translate(&source)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}
