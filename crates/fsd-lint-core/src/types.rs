//! Core types for lint findings and results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for lint findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path as supplied by the host.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset in file.
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// What part of the source a finding is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorKind {
    /// The specifier literal of an import or require.
    ImportSource,
    /// The file as a whole.
    File,
    /// A directory segment of the file's path.
    Directory,
}

/// A suggested fix for a finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
    /// Replacement text and where it goes.
    pub replacement: Option<Replacement>,
    /// Whether the replacement may be applied without review.
    pub automatic: bool,
}

impl Suggestion {
    /// Creates a new suggestion without a fix.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: None,
            automatic: false,
        }
    }

    /// Creates a suggestion whose replacement is applied automatically.
    #[must_use]
    pub fn with_fix(message: impl Into<String>, replacement: Replacement) -> Self {
        Self {
            message: message.into(),
            replacement: Some(replacement),
            automatic: true,
        }
    }

    /// Creates a suggestion whose replacement is shown but not applied.
    #[must_use]
    pub fn with_manual_fix(message: impl Into<String>, replacement: Replacement) -> Self {
        Self {
            message: message.into(),
            replacement: Some(replacement),
            automatic: false,
        }
    }
}

/// A text replacement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Replacement {
    /// Location to replace.
    pub location: Location,
    /// New text to insert.
    pub new_text: String,
}

impl Replacement {
    /// Creates a new replacement.
    #[must_use]
    pub fn new(location: Location, new_text: impl Into<String>) -> Self {
        Self {
            location,
            new_text: new_text.into(),
        }
    }
}

/// A rule finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Rule code (e.g., "FSD001").
    pub code: String,
    /// Rule name (e.g., "layer-dependency").
    pub rule: String,
    /// Severity of this finding.
    pub severity: Severity,
    /// Primary location of the finding.
    pub location: Location,
    /// What the finding is attached to.
    pub anchor: AnchorKind,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<Suggestion>,
}

impl Finding {
    /// Creates a new finding anchored at an import specifier.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            anchor: AnchorKind::ImportSource,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Sets the anchor kind.
    #[must_use]
    pub fn with_anchor(mut self, anchor: AnchorKind) -> Self {
        self.anchor = anchor;
        self
    }

    /// Adds a suggestion to this finding.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Whether a host may apply this finding's fix automatically.
    #[must_use]
    pub fn is_fixable(&self) -> bool {
        self.suggestion
            .as_ref()
            .is_some_and(|s| s.automatic && s.replacement.is_some())
    }

    /// Suggested replacement text, automatic or not.
    #[must_use]
    pub fn suggested_replacement(&self) -> Option<&str> {
        self.suggestion
            .as_ref()
            .and_then(|s| s.replacement.as_ref())
            .map(|r| r.new_text.as_str())
    }

    /// Formats the finding for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at {}:{}:{}\n",
            self.code,
            self.rule,
            self.location.file.display(),
            self.location.line,
            self.location.column,
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        if let Some(suggestion) = &self.suggestion {
            let marker = if self.is_fixable() { " (fixable)" } else { "" };
            let _ = writeln!(output, "  = help: {}{marker}", suggestion.message);
        }
        output
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.message
        )
    }
}

/// Result of linting a set of files.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All findings.
    pub findings: Vec<Finding>,
    /// Number of files checked.
    pub files_checked: usize,
    /// Number of automatic fixes written back.
    #[serde(default)]
    pub fixes_applied: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    /// Counts findings by severity.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |severity: Severity| {
            self.findings
                .iter()
                .filter(|f| f.severity == severity)
                .count()
        };
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// Number of findings a host could fix automatically.
    #[must_use]
    pub fn fixable_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_fixable()).count()
    }

    /// Sorts findings by file, then line, then column.
    pub fn sort(&mut self) {
        self.findings.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_finding(severity: Severity) -> Finding {
        Finding::new(
            "FSD003",
            "public-api-only",
            severity,
            Location::new(PathBuf::from("src/features/auth/ui/form.tsx"), 3, 22),
            "internal import",
        )
    }

    #[test]
    fn new_finding_anchors_at_import_source() {
        let f = make_finding(Severity::Error);
        assert_eq!(f.anchor, AnchorKind::ImportSource);
        assert!(!f.is_fixable());
        assert!(f.suggested_replacement().is_none());
    }

    #[test]
    fn automatic_suggestion_is_fixable() {
        let loc = Location::new(PathBuf::from("a.ts"), 1, 1).with_span(20, 10);
        let f = make_finding(Severity::Error).with_suggestion(Suggestion::with_fix(
            "use the public API",
            Replacement::new(loc, "entities/user"),
        ));
        assert!(f.is_fixable());
        assert_eq!(f.suggested_replacement(), Some("entities/user"));
        assert!(f.format().contains("(fixable)"));
    }

    #[test]
    fn manual_suggestion_is_not_fixable_but_visible() {
        let loc = Location::new(PathBuf::from("a.ts"), 1, 1);
        let f = make_finding(Severity::Error).with_suggestion(Suggestion::with_manual_fix(
            "use the public API",
            Replacement::new(loc, "../../entities/user"),
        ));
        assert!(!f.is_fixable());
        assert_eq!(f.suggested_replacement(), Some("../../entities/user"));
        assert!(!f.format().contains("(fixable)"));
    }

    #[test]
    fn display_is_single_line() {
        let f = make_finding(Severity::Warning);
        assert_eq!(
            f.to_string(),
            "src/features/auth/ui/form.tsx:3:22: warning [FSD003] internal import"
        );
    }

    #[test]
    fn counts_by_severity() {
        let mut result = LintResult::new();
        result.findings.push(make_finding(Severity::Error));
        result.findings.push(make_finding(Severity::Warning));
        result.findings.push(make_finding(Severity::Warning));
        assert_eq!(result.count_by_severity(), (1, 2, 0));
        assert!(result.has_errors());
    }

    #[test]
    fn sort_orders_by_position() {
        let mut result = LintResult::new();
        let mut late = make_finding(Severity::Error);
        late.location.line = 9;
        result.findings.push(late);
        result.findings.push(make_finding(Severity::Error));
        result.sort();
        assert_eq!(result.findings[0].location.line, 3);
    }
}
