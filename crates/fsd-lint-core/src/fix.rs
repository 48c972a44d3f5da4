//! Applies automatic replacements to source text.

use crate::types::{Finding, Replacement};

/// Outcome of applying fixes to one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    /// Source text after all non-conflicting replacements.
    pub output: String,
    /// Number of replacements written.
    pub applied: usize,
    /// Number of replacements dropped because their span overlapped an
    /// earlier one or fell outside the text.
    pub skipped: usize,
}

impl FixOutcome {
    /// Whether the text changed.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.applied > 0
    }
}

/// Applies every automatic replacement carried by `findings` to `source`.
///
/// Replacements are applied back to front so earlier offsets stay valid.
/// When two spans overlap, the one starting first wins.
#[must_use]
pub fn apply_fixes(source: &str, findings: &[Finding]) -> FixOutcome {
    let mut replacements: Vec<&Replacement> = findings
        .iter()
        .filter(|f| f.is_fixable())
        .filter_map(|f| f.suggestion.as_ref()?.replacement.as_ref())
        .collect();
    replacements.sort_by_key(|r| (r.location.offset, r.location.length));

    let mut accepted: Vec<&Replacement> = Vec::with_capacity(replacements.len());
    let mut skipped = 0;
    let mut cursor = 0;
    for r in replacements {
        let start = r.location.offset;
        let end = start + r.location.length;
        let in_bounds = end <= source.len()
            && source.is_char_boundary(start)
            && source.is_char_boundary(end);
        if !in_bounds || start < cursor {
            tracing::debug!(
                "skipping replacement at {}..{} in {}",
                start,
                end,
                r.location.file.display()
            );
            skipped += 1;
            continue;
        }
        cursor = end;
        accepted.push(r);
    }

    let mut output = source.to_string();
    for r in accepted.iter().rev() {
        let start = r.location.offset;
        output.replace_range(start..start + r.location.length, &r.new_text);
    }

    FixOutcome {
        output,
        applied: accepted.len(),
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Location, Severity, Suggestion};
    use std::path::PathBuf;

    fn finding(offset: usize, length: usize, text: &str, automatic: bool) -> Finding {
        let loc = Location::new(PathBuf::from("a.ts"), 1, offset + 1).with_span(offset, length);
        let replacement = Replacement::new(loc.clone(), text);
        let suggestion = if automatic {
            Suggestion::with_fix("fix", replacement)
        } else {
            Suggestion::with_manual_fix("fix", replacement)
        };
        Finding::new("FSD003", "public-api-only", Severity::Error, loc, "msg")
            .with_suggestion(suggestion)
    }

    #[test]
    fn rewrites_specifier_inside_quotes() {
        let source = "import { a } from '@/entities/user/model/a';\n";
        let start = source.find('@').unwrap();
        let len = "@/entities/user/model/a".len();
        let out = apply_fixes(source, &[finding(start, len, "@/entities/user", true)]);
        assert_eq!(out.output, "import { a } from '@/entities/user';\n");
        assert_eq!(out.applied, 1);
        assert!(out.changed());
    }

    #[test]
    fn applies_multiple_fixes_back_to_front() {
        let source = "'aaa' 'bbb'";
        let out = apply_fixes(
            source,
            &[finding(1, 3, "x", true), finding(7, 3, "yyyy", true)],
        );
        assert_eq!(out.output, "'x' 'yyyy'");
        assert_eq!(out.applied, 2);
    }

    #[test]
    fn manual_suggestions_are_left_alone() {
        let out = apply_fixes("'aaa'", &[finding(1, 3, "x", false)]);
        assert_eq!(out.output, "'aaa'");
        assert!(!out.changed());
    }

    #[test]
    fn overlapping_and_out_of_range_spans_are_skipped() {
        let out = apply_fixes(
            "'aaaa'",
            &[
                finding(1, 4, "x", true),
                finding(2, 2, "y", true),
                finding(40, 2, "z", true),
            ],
        );
        assert_eq!(out.output, "'x'");
        assert_eq!(out.applied, 1);
        assert_eq!(out.skipped, 2);
    }
}
