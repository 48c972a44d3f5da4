//! Rule requiring kebab-case directory and file names under the source root.
//!
//! Only the part of a file name before its first dot is checked, so
//! `use-input.test.ts` and `types.d.ts` pass. `index.*` files are ignored.

use fsd_lint_core::utils::{is_index_file, is_kebab_case, stem_before_first_dot};
use fsd_lint_core::{AnchorKind, FileContext, FileRule, Finding, Severity};

/// Rule code for naming-convention.
pub const CODE: &str = "FSD005";

/// Rule name for naming-convention.
pub const NAME: &str = "naming-convention";

/// Requires kebab-case names.
#[derive(Debug, Clone)]
pub struct NamingConvention {
    /// Severity level.
    pub severity: Severity,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::new()
    }
}

impl NamingConvention {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl FileRule for NamingConvention {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires kebab-case directory and file names"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_file(&self, ctx: &FileContext<'_>) -> Vec<Finding> {
        let structure = ctx.structure;
        if !structure.has_root() {
            return vec![];
        }

        let mut findings: Vec<Finding> = structure
            .directories_under_root()
            .iter()
            .filter(|dir| !is_kebab_case(dir))
            .map(|dir| {
                Finding::new(
                    CODE,
                    NAME,
                    self.severity,
                    ctx.file_location(),
                    format!("Directory '{dir}' should be kebab-case"),
                )
                .with_anchor(AnchorKind::Directory)
            })
            .collect();

        let file_name = structure.file_name.as_str();
        let stem = stem_before_first_dot(file_name);
        if !is_index_file(file_name) && !stem.is_empty() && !is_kebab_case(stem) {
            findings.push(
                Finding::new(
                    CODE,
                    NAME,
                    self.severity,
                    ctx.file_location(),
                    format!("File name '{file_name}' should be kebab-case"),
                )
                .with_anchor(AnchorKind::File),
            );
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::run_file;
    use fsd_lint_core::{FsdConfig, StaticProbe};

    fn check(file: &str) -> Vec<Finding> {
        run_file(
            NamingConvention::new(),
            FsdConfig::default(),
            StaticProbe::new(),
            file,
        )
    }

    #[test]
    fn kebab_case_names_pass() {
        for name in ["button.js", "use-input.ts", "index.js", "use-input.test.ts", "types.d.ts"] {
            let file = format!("/p/src/shared/ui/button/{name}");
            assert!(check(&file).is_empty(), "{name}");
        }
    }

    #[test]
    fn bad_file_names_produce_one_finding() {
        for name in ["Button.js", "ApiUtils.js"] {
            let findings = check(&format!("/p/src/shared/ui/button/{name}"));
            assert_eq!(findings.len(), 1, "{name}");
            assert_eq!(findings[0].anchor, AnchorKind::File);
            assert_eq!(findings[0].severity, Severity::Warning);
        }
    }

    #[test]
    fn bad_directory_produces_one_finding() {
        let findings = check("/p/src/shared/ui/BadFolder/button.js");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].anchor, AnchorKind::Directory);
        insta::assert_snapshot!(findings[0].message, @"Directory 'BadFolder' should be kebab-case");
    }

    #[test]
    fn directories_above_the_root_are_ignored() {
        assert!(check("/Users/Me/MyProject/src/entities/user/model.ts").is_empty());
    }

    #[test]
    fn unrooted_and_dotfiles_are_skipped() {
        assert!(check("/p/scripts/BuildAll.js").is_empty());
        assert!(check("/p/src/shared/config/.eslintrc.js").is_empty());
    }
}
