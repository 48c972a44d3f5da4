//! Output formatting for lint results.

use anyhow::Result;
use fsd_lint_core::{Finding, LintResult, Severity};

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => {
            for finding in &result.findings {
                println!("{finding}");
            }
        }
    }
    Ok(())
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31merror\x1b[0m",
        Severity::Warning => "\x1b[33mwarning\x1b[0m",
        Severity::Info => "\x1b[34minfo\x1b[0m",
    }
}

fn print_finding(finding: &Finding) {
    println!(
        "{} {} at {}:{}:{}",
        finding.code,
        finding.rule,
        finding.location.file.display(),
        finding.location.line,
        finding.location.column,
    );
    println!("  {}: {}", severity_label(finding.severity), finding.message);
    if let Some(suggestion) = &finding.suggestion {
        let marker = if finding.is_fixable() { " (fixable)" } else { "" };
        println!("  = help: {}{marker}", suggestion.message);
    }
    println!();
}

fn print_text(result: &LintResult) {
    result.findings.iter().for_each(print_finding);

    let (errors, warnings, infos) = result.count_by_severity();
    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{summary_color}Found {errors} error(s), {warnings} warning(s), {infos} info(s) in {} file(s)\x1b[0m",
        result.files_checked
    );

    if result.fixes_applied > 0 {
        println!("Applied {} fix(es)", result.fixes_applied);
    }
    let fixable = result.fixable_count();
    if fixable > 0 {
        println!("{fixable} finding(s) can be fixed with --fix");
    }
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}
