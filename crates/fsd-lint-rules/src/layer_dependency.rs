//! Rule forbidding imports from a higher layer.
//!
//! # Rationale
//!
//! Layers are ordered `shared < entities < features < widgets < pages < app`.
//! A module may depend on layers below it, never on layers above it.
//!
//! # Detected Patterns
//!
//! ```ignore
//! // src/entities/user/model/user.ts
//! import { LoginForm } from '@/features/auth';   // entities -> features
//! ```
//!
//! Files or targets without a canonical layer are skipped.

use fsd_lint_core::{Finding, ImportContext, ImportRule, Severity, Suggestion};

/// Rule code for layer-dependency.
pub const CODE: &str = "FSD001";

/// Rule name for layer-dependency.
pub const NAME: &str = "layer-dependency";

/// Forbids a lower layer from importing a higher one.
#[derive(Debug, Clone)]
pub struct LayerDependency {
    /// Severity level.
    pub severity: Severity,
}

impl Default for LayerDependency {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerDependency {
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

impl ImportRule for LayerDependency {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids importing from a higher layer"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_import(&self, ctx: &ImportContext<'_>) -> Vec<Finding> {
        let (Some(current), Some(imported)) = (ctx.current().layer, ctx.imported.layer) else {
            return vec![];
        };

        let order = ctx.file.layer_order;
        let current_level = order.level(current);
        let imported_level = order.level(imported);
        if current_level >= imported_level {
            return vec![];
        }

        vec![Finding::new(
            CODE,
            NAME,
            self.severity,
            ctx.import.location.clone(),
            format!(
                "Layer '{current}' (level {current_level}) must not {} '{}' from higher layer '{imported}' (level {imported_level})",
                ctx.import.syntax, ctx.import.specifier
            ),
        )
        .with_suggestion(Suggestion::new(format!(
            "Move the shared code into '{current}' or a layer below it"
        )))]
    }
}
