//! Check command implementation.

use anyhow::{bail, Context, Result};
use fsd_lint_core::{apply_fixes, Config, Finding, LintError, LintResult, Linter};
use fsd_lint_js::ExtractorRegistry;
use fsd_lint_rules::{all_rules, Preset, RuleSet};
use std::path::{Path, PathBuf};

use crate::config_resolver::{self, ConfigSource};
use crate::OutputFormat;

/// Exit code for configuration problems.
const CONFIG_ERROR_EXIT: i32 = 2;

/// Options for a check run.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated rule names or codes. Overrides the preset.
    pub rules: Option<String>,
    /// Extra exclude patterns on top of the configured ones.
    pub exclude: Vec<String>,
    /// Write automatic fixes back to disk.
    pub fix: bool,
    /// Preset name.
    pub preset: String,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            rules: None,
            exclude: Vec::new(),
            fix: false,
            preset: "recommended".to_string(),
        }
    }
}

/// Runs the check command.
pub fn run(path: &Path, options: &CheckOptions, source: &ConfigSource) -> Result<()> {
    let config = match config_resolver::load(source) {
        Ok(config) => config,
        Err(e) => exit_with_diagnostic(e),
    };

    let result = match lint(path, config, options) {
        Ok(result) => result,
        Err(e) => match e.downcast::<LintError>() {
            Ok(lint_error) => exit_with_diagnostic(lint_error),
            Err(other) => return Err(other),
        },
    };

    super::output::print(&result, options.format)?;

    // Exit with error code if there are errors
    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Lints every supported file under `path`.
///
/// With `options.fix`, fixable findings are written back and the file is
/// linted again, so the result only holds what is left.
///
/// # Errors
///
/// Returns a [`LintError`] for an unusable configuration, or an I/O error
/// from discovery or writing fixes.
pub fn lint(path: &Path, config: Config, options: &CheckOptions) -> Result<LintResult> {
    let root = std::path::absolute(path.join(&config.analyzer.root))
        .with_context(|| format!("Failed to resolve {}", path.display()))?;
    let exclude: Vec<String> = config
        .analyzer
        .exclude
        .iter()
        .chain(&options.exclude)
        .cloned()
        .collect();
    let respect_gitignore = config.analyzer.respect_gitignore;

    let rules = select_rules(&config, options)?;
    let linter = rules.register(Linter::builder().config(config)).build()?;
    let registry = ExtractorRegistry::new();

    let files = discover_files(&root, &exclude, respect_gitignore, &registry)?;
    tracing::info!(
        "Analyzing {} files under {} with {} rules",
        files.len(),
        root.display(),
        linter.rule_count()
    );

    let mut result = LintResult::new();
    for file in &files {
        let source = match std::fs::read_to_string(file) {
            Ok(source) => source,
            Err(e) => {
                tracing::warn!("Skipping {}: {e}", file.display());
                continue;
            }
        };
        let analysis = match registry.analyze(file, &source) {
            Ok(analysis) => analysis,
            Err(e) => {
                tracing::warn!("Skipping {}: {e}", file.display());
                continue;
            }
        };
        if analysis.skipped_dynamic > 0 {
            tracing::debug!(
                "{}: {} dynamic import(s) not checked",
                file.display(),
                analysis.skipped_dynamic
            );
        }

        let mut findings = linter.lint_file(file, &analysis.import_refs())?;
        if options.fix && findings.iter().any(Finding::is_fixable) {
            let outcome = apply_fixes(&source, &findings);
            if outcome.changed() {
                std::fs::write(file, &outcome.output)
                    .with_context(|| format!("Failed to write fixes to {}", file.display()))?;
                tracing::info!("Fixed {} import(s) in {}", outcome.applied, file.display());
                result.fixes_applied += outcome.applied;

                let fixed = registry
                    .analyze(file, &outcome.output)
                    .with_context(|| format!("Failed to re-read {}", file.display()))?;
                findings = linter.lint_file(file, &fixed.import_refs())?;
            }
        }

        result.findings.extend(findings);
        result.files_checked += 1;
    }

    result.sort();
    Ok(result)
}

/// Picks the rule set: the `--rules` filter if given, else the preset.
fn select_rules(config: &Config, options: &CheckOptions) -> Result<RuleSet> {
    let Some(filter) = &options.rules else {
        let Some(preset) = Preset::from_name(&options.preset) else {
            bail!(
                "Unknown preset '{}'; expected 'recommended' or 'minimal'",
                options.preset
            );
        };
        return Ok(preset.rules(config));
    };

    let mut rules = all_rules(config);
    let known = rules.describe();
    let mut names = Vec::new();
    for wanted in filter.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match known
            .iter()
            .find(|info| info.name == wanted || info.code.eq_ignore_ascii_case(wanted))
        {
            Some(info) => names.push(info.name.to_string()),
            None => tracing::warn!("Unknown rule: {}", wanted),
        }
    }
    rules.retain_named(&names);
    Ok(rules)
}

fn discover_files(
    root: &Path,
    exclude: &[String],
    respect_gitignore: bool,
    registry: &ExtractorRegistry,
) -> Result<Vec<PathBuf>> {
    let patterns: Vec<glob::Pattern> = exclude
        .iter()
        .filter_map(|raw| match glob::Pattern::new(raw) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                tracing::warn!("Ignoring invalid exclude pattern '{raw}': {e}");
                None
            }
        })
        .collect();

    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .hidden(false)
        .git_ignore(respect_gitignore)
        .filter_entry(|entry| entry.file_name() != ".git");

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || !registry.supports(path) {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(path);
        if patterns
            .iter()
            .any(|p| p.matches_path(rel) || p.matches_path(path))
        {
            tracing::debug!("Excluding: {}", path.display());
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

/// Renders a configuration diagnostic and exits.
fn exit_with_diagnostic<E>(error: E) -> !
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
    eprintln!("{:?}", miette::Report::new(error));
    std::process::exit(CONFIG_ERROR_EXIT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn codes(result: &LintResult) -> Vec<&str> {
        result.findings.iter().map(|f| f.code.as_str()).collect()
    }

    #[test]
    fn reports_findings_across_the_tree() {
        let project = TempDir::new().unwrap();
        let root = project.path();
        write(root, "src/entities/user/index.js", "import { login } from '../../features/auth';\n");
        write(root, "src/features/auth/index.js", "export * from './ui/login-form';\n");
        write(root, "src/features/auth/ui/login-form.js", "export const login = 1;\n");

        let result = lint(root, Config::default(), &CheckOptions::default()).unwrap();
        assert_eq!(result.files_checked, 3);
        assert_eq!(codes(&result), ["FSD001"]);
        assert!(result.has_errors());
        assert!(result.findings[0]
            .location
            .file
            .ends_with("src/entities/user/index.js"));
    }

    #[test]
    fn skips_excluded_and_unsupported_files() {
        let project = TempDir::new().unwrap();
        let root = project.path();
        write(root, "node_modules/pkg/index.js", "require('../../src/app');\n");
        write(root, "src/legacy/OldThing.js", "");
        write(root, "src/app/styles.css", "body {}\n");
        write(root, "src/app/index.ts", "import './styles.css';\n");

        let options = CheckOptions {
            exclude: vec!["**/legacy/**".to_string()],
            ..CheckOptions::default()
        };
        let result = lint(root, Config::default(), &options).unwrap();
        assert_eq!(result.files_checked, 1);
        assert!(result.findings.is_empty(), "{:?}", result.findings);
    }

    #[test]
    fn fix_rewrites_deep_imports() {
        let project = TempDir::new().unwrap();
        let root = project.path();
        write(root, "src/entities/user/index.js", "export * from './model/user';\n");
        write(root, "src/entities/user/model/user.js", "export const user = {};\n");
        write(root, "src/pages/home/index.js", "export * from './ui/page';\n");
        write(
            root,
            "src/pages/home/ui/page.js",
            "import { user } from '../../../entities/user/model/user';\n",
        );

        let options = CheckOptions {
            fix: true,
            ..CheckOptions::default()
        };
        let result = lint(root, Config::default(), &options).unwrap();
        assert_eq!(result.fixes_applied, 1);
        assert!(result.findings.is_empty(), "{:?}", result.findings);

        let fixed = fs::read_to_string(root.join("src/pages/home/ui/page.js")).unwrap();
        assert_eq!(fixed, "import { user } from '../../../entities/user';\n");
    }

    #[test]
    fn without_fix_the_deep_import_is_reported() {
        let project = TempDir::new().unwrap();
        let root = project.path();
        write(root, "src/entities/user/index.js", "");
        write(root, "src/pages/home/index.js", "");
        write(
            root,
            "src/pages/home/ui/page.js",
            "import { user } from '../../../entities/user/model/user';\n",
        );

        let result = lint(root, Config::default(), &CheckOptions::default()).unwrap();
        assert_eq!(codes(&result), ["FSD003"]);
        assert_eq!(result.fixable_count(), 1);
        assert_eq!(result.fixes_applied, 0);
    }

    #[test]
    fn rules_filter_accepts_names_and_codes() {
        let project = TempDir::new().unwrap();
        let root = project.path();
        write(root, "src/shared/ui/MyButton.js", "import '../../app/store';\n");

        let options = CheckOptions {
            rules: Some("fsd005, not-a-rule".to_string()),
            ..CheckOptions::default()
        };
        let result = lint(root, Config::default(), &options).unwrap();
        assert_eq!(codes(&result), ["FSD005"]);

        let options = CheckOptions {
            rules: Some("layer-dependency".to_string()),
            ..CheckOptions::default()
        };
        let result = lint(root, Config::default(), &options).unwrap();
        assert_eq!(codes(&result), ["FSD001"]);
    }

    #[test]
    fn minimal_preset_skips_file_rules() {
        let project = TempDir::new().unwrap();
        let root = project.path();
        write(root, "src/shared/ui/MyButton.js", "");

        let options = CheckOptions {
            preset: "minimal".to_string(),
            ..CheckOptions::default()
        };
        let result = lint(root, Config::default(), &options).unwrap();
        assert!(result.findings.is_empty());

        let options = CheckOptions {
            preset: "strict".to_string(),
            ..CheckOptions::default()
        };
        assert!(lint(root, Config::default(), &options).is_err());
    }

    #[test]
    fn relative_src_root_is_a_lint_error() {
        let project = TempDir::new().unwrap();
        write(project.path(), "src/app/index.js", "");

        let mut config = Config::default();
        config.fsd.src_root_dir = Some("src".to_string());
        let err = lint(project.path(), config, &CheckOptions::default()).unwrap_err();
        assert!(err.downcast_ref::<LintError>().is_some());
    }
}
