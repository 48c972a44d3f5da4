//! Rule requiring imports to go through a slice's public API.
//!
//! # Rationale
//!
//! A slice exposes one entry point, its `index` file. Reaching past it into
//! `model/`, `ui/` or `lib/` couples the importer to internals the slice is
//! free to move.
//!
//! # Detected Patterns
//!
//! ```ignore
//! import { User } from '@/entities/user/model/user';  // reported
//! import { User } from '@/entities/user';             // ok
//! import { User } from '@/entities/user/index';       // ok
//! ```
//!
//! Imports inside the same slice are exempt, as are imports between two
//! files of `shared` or two files of `app`.
//!
//! # Autofix
//!
//! The suggestion keeps the original specifier style (relative, alias, `@/`
//! or bare). It is applied automatically only when the rewritten specifier
//! provably resolves to the slice directory.

use fsd_lint_core::utils::is_index_file;
use fsd_lint_core::{Finding, ImportContext, ImportRule, Layer, Severity};

use crate::suggestion::public_api_suggestion;

/// Rule code for public-api-only.
pub const CODE: &str = "FSD003";

/// Rule name for public-api-only.
pub const NAME: &str = "public-api-only";

/// Forbids imports of slice internals.
#[derive(Debug, Clone)]
pub struct PublicApiOnly {
    /// Severity level.
    pub severity: Severity,
}

impl Default for PublicApiOnly {
    fn default() -> Self {
        Self::new()
    }
}

impl PublicApiOnly {
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
}

fn is_exempt(ctx: &ImportContext<'_>) -> bool {
    let current = ctx.current();
    let imported = ctx.imported;

    if current.same_slice(imported) {
        return true;
    }
    let both_in = |layer| current.layer == Some(layer) && imported.layer == Some(layer);
    if both_in(Layer::Shared) || both_in(Layer::App) {
        return true;
    }
    is_index_file(&imported.file_name)
}

impl ImportRule for PublicApiOnly {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires imports to target a slice's public API"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_import(&self, ctx: &ImportContext<'_>) -> Vec<Finding> {
        let imported = ctx.imported;
        let (Some(layer), Some(slice)) = (imported.layer, imported.slice.as_deref()) else {
            return vec![];
        };
        if is_exempt(ctx) {
            return vec![];
        }
        let internal = imported.internal_path();
        if internal.is_empty() {
            return vec![];
        }

        let mut finding = Finding::new(
            CODE,
            NAME,
            self.severity,
            ctx.import.location.clone(),
            format!(
                "'{}' reaches into '{layer}/{slice}' internals ('{}'); import its public API",
                ctx.import.specifier,
                internal.join("/")
            ),
        );
        if let Some(suggestion) = public_api_suggestion(ctx) {
            finding = finding.with_suggestion(suggestion);
        }
        vec![finding]
    }
}
