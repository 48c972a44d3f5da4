//! List rules command implementation.

use fsd_lint_core::Config;
use fsd_lint_rules::{all_rules, Preset, RuleKind};

/// Runs the list-rules command.
pub fn run() {
    let config = Config::default();

    println!("Available rules:\n");
    println!(
        "{:<8} {:<22} {:<8} {:<7} Description",
        "Code", "Name", "Default", "Scope"
    );
    println!("{}", "-".repeat(90));

    for rule in all_rules(&config).describe() {
        let scope = match rule.kind {
            RuleKind::Import => "import",
            RuleKind::File => "file",
        };
        println!(
            "{:<8} {:<22} {:<8} {:<7} {}",
            rule.code,
            rule.name,
            rule.severity.to_string(),
            scope,
            rule.description
        );
    }

    let codes = |preset: Preset| {
        preset
            .rules(&config)
            .describe()
            .iter()
            .map(|r| r.code)
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("\nPresets:");
    println!("  recommended  - {} (default)", codes(Preset::Recommended));
    println!("  minimal      - {} (import boundaries only)", codes(Preset::Minimal));

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  fsd-lint check --rules layer-dependency,public-api-only");
    println!("  fsd-lint check --rules FSD001,FSD003");
}
