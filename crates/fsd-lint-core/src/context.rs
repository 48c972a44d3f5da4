//! Context types for rule execution.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::config::FsdConfig;
use crate::layer::LayerOrder;
use crate::probe::FileProbe;
use crate::resolve::ImportResolution;
use crate::structure::ParsedFileStructure;
use crate::types::Location;

/// Module syntax of an import reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportSyntax {
    /// ESM `import … from '…'` or `export … from '…'`.
    Import,
    /// CommonJS `require('…')`.
    Require,
}

impl fmt::Display for ImportSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Import => write!(f, "import"),
            Self::Require => write!(f, "require"),
        }
    }
}

/// A statically literal import specifier supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRef {
    /// Literal specifier text, without quotes.
    pub specifier: String,
    /// ESM or CommonJS.
    pub syntax: ImportSyntax,
    /// Span of the specifier text inside the quotes.
    pub location: Location,
}

impl ImportRef {
    /// Creates an import reference.
    #[must_use]
    pub fn new(specifier: impl Into<String>, syntax: ImportSyntax, location: Location) -> Self {
        Self {
            specifier: specifier.into(),
            syntax,
            location,
        }
    }
}

/// Context provided to every rule for the file being linted.
#[derive(Clone, Copy)]
pub struct FileContext<'a> {
    /// Path as supplied by the host.
    pub path: &'a Path,
    /// Classification of the file.
    pub structure: &'a ParsedFileStructure,
    /// Architecture configuration.
    pub config: &'a FsdConfig,
    /// Effective layer levels.
    pub layer_order: &'a LayerOrder,
    /// File existence capability.
    pub probe: &'a dyn FileProbe,
}

impl FileContext<'_> {
    /// Location covering the start of the file.
    #[must_use]
    pub fn file_location(&self) -> Location {
        Location::new(self.path.to_path_buf(), 1, 1)
    }
}

impl fmt::Debug for FileContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileContext")
            .field("path", &self.path)
            .field("structure", &self.structure)
            .finish_non_exhaustive()
    }
}

/// Context provided to import rules for one specifier.
#[derive(Debug, Clone, Copy)]
pub struct ImportContext<'a> {
    /// The importing file.
    pub file: &'a FileContext<'a>,
    /// The specifier as supplied by the host.
    pub import: &'a ImportRef,
    /// How the specifier resolved.
    pub resolution: &'a ImportResolution,
    /// Classification of the resolved target.
    pub imported: &'a ParsedFileStructure,
}

impl ImportContext<'_> {
    /// Classification of the importing file.
    #[must_use]
    pub fn current(&self) -> &ParsedFileStructure {
        self.file.structure
    }
}
