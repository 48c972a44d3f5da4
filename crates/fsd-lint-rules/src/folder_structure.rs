//! Rule checking that a file sits in a well-formed layer/slice layout.
//!
//! # Detected Patterns
//!
//! - Files with no recognizable source root.
//! - A layer directory that is not one of the six canonical names
//!   (with `strict_layer_structure`).
//! - A module in `shared`, `entities`, `features` or `widgets` without an
//!   `index.js` / `index.ts` (with `require_public_api`).
//!
//! The module directory is `<layer>/<slice>`. In `shared` the first level
//! is a segment such as `ui` or `lib`, so the module directory is
//! `shared/<segment>/<module>`, cut at the file's own directory.

use std::path::PathBuf;

use fsd_lint_core::utils::SegmentPath;
use fsd_lint_core::{
    AnchorKind, FileContext, FileRule, Finding, Layer, ParsedFileStructure, Severity,
};

/// Rule code for folder-structure.
pub const CODE: &str = "FSD004";

/// Rule name for folder-structure.
pub const NAME: &str = "folder-structure";

/// Public API file names probed for, in order.
pub const INDEX_FILES: [&str; 2] = ["index.js", "index.ts"];

/// Validates the directory layout around a file.
#[derive(Debug, Clone)]
pub struct FolderStructure {
    /// Severity level.
    pub severity: Severity,
}

impl Default for FolderStructure {
    fn default() -> Self {
        Self::new()
    }
}

impl FolderStructure {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn finding(&self, ctx: &FileContext<'_>, anchor: AnchorKind, message: String) -> Finding {
        Finding::new(CODE, NAME, self.severity, ctx.file_location(), message).with_anchor(anchor)
    }
}

/// Directory expected to hold the module's public API, if the file has one.
#[must_use]
pub fn module_directory(structure: &ParsedFileStructure) -> Option<SegmentPath> {
    let layer = structure.layer?;
    let layer_index = usize::try_from(structure.layer_index).ok()?;
    let file_dir_len = structure.full_path.len().checked_sub(1)?;

    let depth = if layer == Layer::Shared { 3 } else { 2 };
    let len = (layer_index + depth).min(file_dir_len);
    if len < layer_index + 2 {
        return None;
    }
    Some(structure.full_path.prefix(len))
}

impl FileRule for FolderStructure {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Validates layer names and public API files"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_file(&self, ctx: &FileContext<'_>) -> Vec<Finding> {
        let structure = ctx.structure;

        if !structure.has_root() {
            return vec![self.finding(
                ctx,
                AnchorKind::File,
                "File is not under a recognized source root".to_string(),
            )];
        }
        if structure.is_root_file {
            return vec![];
        }

        let mut findings = Vec::new();

        if ctx.config.strict_layer_structure && structure.layer.is_none() {
            if let Some(found) = &structure.layer_segment {
                findings.push(self.finding(
                    ctx,
                    AnchorKind::Directory,
                    format!(
                        "Unknown layer '{found}'; expected one of: {}",
                        Layer::valid_names()
                    ),
                ));
            }
        }

        if ctx.config.require_public_api {
            if let Some(finding) = self.check_public_api(ctx) {
                findings.push(finding);
            }
        }

        findings
    }
}

impl FolderStructure {
    fn check_public_api(&self, ctx: &FileContext<'_>) -> Option<Finding> {
        let structure = ctx.structure;
        if !structure.layer?.requires_public_api() {
            return None;
        }
        let dir = module_directory(structure)?;
        let dir_path = PathBuf::from(dir.to_string());
        if INDEX_FILES.iter().any(|name| ctx.probe.exists(&dir_path.join(name))) {
            return None;
        }

        let layer_index = usize::try_from(structure.layer_index).ok()?;
        let module = dir.segments().get(layer_index..)?.join("/");
        tracing::debug!("no public API file in {dir}");
        Some(self.finding(
            ctx,
            AnchorKind::File,
            format!("Module '{module}' has no public API (expected index.js or index.ts in {dir})"),
        ))
    }
}
