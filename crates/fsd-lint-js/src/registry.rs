//! Extension-based dispatch to the right extractor.

use std::path::Path;

use crate::extractor::{ExtractError, FileAnalysis, LanguageExtractor};
use crate::javascript::{Dialect, JsExtractor};

/// Picks an extractor by file extension.
pub struct ExtractorRegistry {
    extractors: Vec<Box<dyn LanguageExtractor>>,
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorRegistry {
    /// Registry with the JavaScript, TypeScript and TSX extractors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            extractors: vec![
                Box::new(JsExtractor::new(Dialect::JavaScript)),
                Box::new(JsExtractor::new(Dialect::TypeScript)),
                Box::new(JsExtractor::new(Dialect::Tsx)),
            ],
        }
    }

    /// Adds an extractor. Later registrations win for shared extensions.
    #[must_use]
    pub fn with_extractor<E: LanguageExtractor + 'static>(mut self, extractor: E) -> Self {
        self.extractors.insert(0, Box::new(extractor));
        self
    }

    /// Extractor for `path`, if its extension is handled.
    #[must_use]
    pub fn for_path(&self, path: &Path) -> Option<&dyn LanguageExtractor> {
        let ext = path.extension()?.to_str()?;
        self.extractors
            .iter()
            .find(|e| e.extensions().contains(&ext))
            .map(|e| &**e)
    }

    /// Whether some extractor handles `path`.
    #[must_use]
    pub fn supports(&self, path: &Path) -> bool {
        self.for_path(path).is_some()
    }

    /// Every handled extension.
    #[must_use]
    pub fn extensions(&self) -> Vec<&'static str> {
        self.extractors
            .iter()
            .flat_map(|e| e.extensions().iter().copied())
            .collect()
    }

    /// Analyzes `source` with the extractor for `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Unsupported`] for unknown extensions, or the
    /// extractor's own error.
    pub fn analyze(&self, path: &Path, source: &str) -> Result<FileAnalysis, ExtractError> {
        let extractor = self.for_path(path).ok_or_else(|| ExtractError::Unsupported {
            path: path.to_path_buf(),
        })?;
        tracing::trace!("{}: using {} extractor", path.display(), extractor.language_id());
        extractor.analyze(path, source)
    }
}
