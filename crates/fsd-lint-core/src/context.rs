//! Import edges and the per-edge context handed to rules.

use serde::{Deserialize, Serialize};

use crate::layer::Layer;
use crate::path::{self, ImportTarget, ProjectPath};

/// One import statement found by the host: which file imports what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportEdge {
    /// Path of the importing file, in host-OS form.
    pub file: String,
    /// Raw import specifier, as written in the source.
    #[serde(rename = "import", alias = "specifier")]
    pub specifier: String,
    /// Line of the import statement (1-indexed).
    #[serde(default = "default_position")]
    pub line: usize,
    /// Column of the specifier literal (1-indexed).
    #[serde(default = "default_position")]
    pub column: usize,
}

fn default_position() -> usize {
    1
}

impl ImportEdge {
    /// Creates an edge positioned at line 1, column 1.
    #[must_use]
    pub fn new(file: impl Into<String>, specifier: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            specifier: specifier.into(),
            line: 1,
            column: 1,
        }
    }

    /// Sets the source position.
    #[must_use]
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    /// Builds the rule context for this edge.
    #[must_use]
    pub fn context(&self) -> ImportContext<'_> {
        ImportContext::new(&self.file, &self.specifier)
    }
}

/// Context provided to rules for a single import edge.
///
/// The importing file is classified once here; the import target is
/// classified per rule because each rule may carry its own alias.
#[derive(Debug, Clone)]
pub struct ImportContext<'a> {
    specifier: &'a str,
    normalized_file: String,
    current: Option<ProjectPath>,
}

impl<'a> ImportContext<'a> {
    /// Creates a context for `file` importing `specifier`.
    #[must_use]
    pub fn new(file: &'a str, specifier: &'a str) -> Self {
        Self {
            specifier,
            normalized_file: path::normalize_separators(file),
            current: ProjectPath::from_file(file),
        }
    }

    /// The importing file's path with `/` separators.
    #[must_use]
    pub fn normalized_file(&self) -> &str {
        &self.normalized_file
    }

    /// The raw import specifier.
    #[must_use]
    pub fn specifier(&self) -> &str {
        self.specifier
    }

    /// Whether the raw specifier is relative.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        path::is_relative(self.specifier)
    }

    /// The importing file relative to the source root, `None` when the file
    /// lies outside any `src` directory.
    #[must_use]
    pub fn current(&self) -> Option<&ProjectPath> {
        self.current.as_ref()
    }

    /// The importing file's layer, if recognized.
    #[must_use]
    pub fn current_layer(&self) -> Option<Layer> {
        self.current.as_ref().and_then(ProjectPath::layer)
    }

    /// Classifies the import target with the given alias.
    #[must_use]
    pub fn target(&self, alias: &str) -> ImportTarget {
        ImportTarget::classify(self.specifier, alias)
    }
}
