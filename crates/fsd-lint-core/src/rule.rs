//! Rule traits for defining lint rules.

use crate::context::{FileContext, ImportContext};
use crate::types::{Finding, Severity};

/// A rule evaluated once per import specifier.
///
/// Rules are pure: the same context always yields the same findings.
///
/// # Example
///
/// ```ignore
/// use fsd_lint_core::{Finding, ImportContext, ImportRule};
///
/// pub struct NoAppImports;
///
/// impl ImportRule for NoAppImports {
///     fn name(&self) -> &'static str { "no-app-imports" }
///     fn code(&self) -> &'static str { "FSD100" }
///
///     fn check_import(&self, ctx: &ImportContext<'_>) -> Vec<Finding> {
///         if ctx.imported.layer == Some(Layer::App) {
///             vec![Finding::new(
///                 self.code(),
///                 self.name(),
///                 self.default_severity(),
///                 ctx.import.location.clone(),
///                 "app is not importable",
///             )]
///         } else {
///             vec![]
///         }
///     }
/// }
/// ```
pub trait ImportRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "layer-dependency").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "FSD001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for findings from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks one import and returns any findings.
    fn check_import(&self, ctx: &ImportContext<'_>) -> Vec<Finding>;
}

/// Type alias for boxed `ImportRule` trait objects.
pub type ImportRuleBox = Box<dyn ImportRule>;

/// A rule evaluated once per file, independent of its imports.
///
/// Useful for conventions about where a file lives and how it is named.
pub trait FileRule: Send + Sync {
    /// Returns the kebab-case name of this rule.
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "FSD004").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for findings from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks the file and returns any findings.
    fn check_file(&self, ctx: &FileContext<'_>) -> Vec<Finding>;
}

/// Type alias for boxed `FileRule` trait objects.
pub type FileRuleBox = Box<dyn FileRule>;
