//! Language-agnostic extraction types and trait.
//!
//! `LanguageExtractor` is the extension point for adding new source
//! dialects. Implement it to teach fsd-lint how to find statically literal
//! import specifiers in a file.

use std::path::{Path, PathBuf};

use fsd_lint_core::{ImportRef, ImportSyntax, Location};
use thiserror::Error;

/// Errors raised while extracting imports from one file.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The grammar could not be loaded into the parser.
    #[error("failed to load {language} grammar: {message}")]
    Language {
        /// Language identifier.
        language: &'static str,
        /// Underlying tree-sitter error.
        message: String,
    },

    /// The parser produced no tree.
    #[error("failed to parse {language} source")]
    Parse {
        /// Language identifier.
        language: &'static str,
    },

    /// No extractor handles this file extension.
    #[error("unsupported file type: {path}")]
    Unsupported {
        /// The offending path.
        path: PathBuf,
    },
}

/// A single statically literal specifier extracted from source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportInfo {
    /// Specifier text without quotes.
    pub specifier: String,
    /// ESM or CommonJS.
    pub syntax: ImportSyntax,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column of the first character inside the quotes (1-indexed).
    pub column: usize,
    /// Byte offset of the first character inside the quotes.
    pub offset: usize,
    /// Length of the specifier in bytes.
    pub length: usize,
}

impl ImportInfo {
    /// Converts to the core's import reference for `path`.
    #[must_use]
    pub fn to_import_ref(&self, path: &Path) -> ImportRef {
        ImportRef::new(
            self.specifier.clone(),
            self.syntax,
            Location::new(path.to_path_buf(), self.line, self.column)
                .with_span(self.offset, self.length),
        )
    }
}

/// Result of analyzing a single source file with Tree-sitter.
#[derive(Debug, Clone, Default)]
pub struct FileAnalysis {
    /// Path of the analyzed file.
    pub file_path: PathBuf,
    /// All literal specifiers, in source order.
    pub imports: Vec<ImportInfo>,
    /// Import-like expressions whose specifier is not a plain literal.
    pub skipped_dynamic: usize,
    /// Whether the syntax tree contains error nodes.
    pub has_syntax_errors: bool,
}

impl FileAnalysis {
    /// Import references ready for the linter.
    #[must_use]
    pub fn import_refs(&self) -> Vec<ImportRef> {
        self.imports
            .iter()
            .map(|i| i.to_import_ref(&self.file_path))
            .collect()
    }
}

/// Trait for language-specific Tree-sitter extraction.
///
/// Implement this to add support for a new dialect.
/// The extractor receives raw source text and returns a [`FileAnalysis`].
pub trait LanguageExtractor: Send + Sync {
    /// Language identifier (e.g., `"javascript"`, `"tsx"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this extractor handles, without the dot.
    fn extensions(&self) -> &'static [&'static str];

    /// Extracts literal import specifiers from `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or parsing fails.
    fn analyze(&self, path: &Path, source: &str) -> Result<FileAnalysis, ExtractError>;
}
