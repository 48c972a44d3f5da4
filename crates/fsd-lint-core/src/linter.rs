//! Linter: classifies a file, resolves its imports and runs the rules.

use std::path::Path;

use miette::Diagnostic;
use thiserror::Error;
use tracing::debug;

use crate::config::{Config, ConfigError};
use crate::context::{FileContext, ImportContext, ImportRef};
use crate::layer::LayerOrder;
use crate::probe::{FileProbe, FsProbe};
use crate::resolve::{ImportResolver, ResolutionKind};
use crate::rule::{FileRule, FileRuleBox, ImportRule, ImportRuleBox};
use crate::structure::ParsedFileStructure;
use crate::types::Finding;

/// Errors that can occur while linting.
#[derive(Debug, Error, Diagnostic)]
pub enum LintError {
    /// The configuration cannot produce a trustworthy classification.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    config: Option<Config>,
    import_rules: Vec<ImportRuleBox>,
    file_rules: Vec<FileRuleBox>,
    probe: Option<Box<dyn FileProbe>>,
    resolver: Option<ImportResolver>,
}

impl LinterBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Adds a per-import rule.
    #[must_use]
    pub fn import_rule<R: ImportRule + 'static>(mut self, rule: R) -> Self {
        self.import_rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed per-import rule.
    #[must_use]
    pub fn import_rule_box(mut self, rule: ImportRuleBox) -> Self {
        self.import_rules.push(rule);
        self
    }

    /// Adds a per-file rule.
    #[must_use]
    pub fn file_rule<R: FileRule + 'static>(mut self, rule: R) -> Self {
        self.file_rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed per-file rule.
    #[must_use]
    pub fn file_rule_box(mut self, rule: FileRuleBox) -> Self {
        self.file_rules.push(rule);
        self
    }

    /// Replaces the filesystem probe (default: [`FsProbe`]).
    #[must_use]
    pub fn probe<P: FileProbe + 'static>(mut self, probe: P) -> Self {
        self.probe = Some(Box::new(probe));
        self
    }

    /// Replaces the specifier resolver (default: [`ImportResolver::new`]).
    #[must_use]
    pub fn resolver(mut self, resolver: ImportResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Builds the linter.
    ///
    /// # Errors
    ///
    /// Returns an error if the architecture configuration is invalid.
    pub fn build(self) -> Result<Linter, LintError> {
        let config = self.config.unwrap_or_default();
        config.fsd.validate()?;
        let layer_order = config.fsd.layer_order()?;

        Ok(Linter {
            config,
            layer_order,
            import_rules: self.import_rules,
            file_rules: self.file_rules,
            probe: self.probe.unwrap_or_else(|| Box::new(FsProbe)),
            resolver: self.resolver.unwrap_or_default(),
        })
    }
}

/// Runs registered rules over files supplied by a host.
///
/// Use [`Linter::builder()`] to construct an instance. A `Linter` holds no
/// per-file state; every call starts from scratch.
pub struct Linter {
    config: Config,
    layer_order: LayerOrder,
    import_rules: Vec<ImportRuleBox>,
    file_rules: Vec<FileRuleBox>,
    probe: Box<dyn FileProbe>,
    resolver: ImportResolver,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.import_rules.len() + self.file_rules.len()
    }

    /// Classifies a path under this linter's configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured source root is not absolute.
    pub fn classify(&self, path: &Path) -> Result<ParsedFileStructure, LintError> {
        Ok(ParsedFileStructure::parse(
            &path.to_string_lossy(),
            self.config.fsd.src_root_dir.as_deref(),
        )?)
    }

    /// Lints one file: file rules first, then every import in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration makes classification
    /// impossible. Rule violations are never errors.
    pub fn lint_file(&self, path: &Path, imports: &[ImportRef]) -> Result<Vec<Finding>, LintError> {
        if !self.config.fsd.enabled {
            debug!("fsd-lint disabled, skipping {}", path.display());
            return Ok(Vec::new());
        }

        let structure = self.classify(path)?;
        let ctx = self.file_context(path, &structure);
        let mut findings = Vec::new();

        for rule in &self.file_rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }
            let rule_findings = rule.check_file(&ctx);
            findings.extend(self.apply_severity_override(rule.name(), rule_findings));
        }

        for import in imports {
            findings.extend(self.check_import(&ctx, import)?);
        }

        debug!(
            "{}: {} finding(s) over {} import(s)",
            path.display(),
            findings.len(),
            imports.len()
        );
        Ok(findings)
    }

    /// Lints a single import of `path` with the import rules only.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration makes classification
    /// impossible.
    pub fn lint_import(&self, path: &Path, import: &ImportRef) -> Result<Vec<Finding>, LintError> {
        if !self.config.fsd.enabled {
            return Ok(Vec::new());
        }
        let structure = self.classify(path)?;
        let ctx = self.file_context(path, &structure);
        self.check_import(&ctx, import)
    }

    fn file_context<'a>(
        &'a self,
        path: &'a Path,
        structure: &'a ParsedFileStructure,
    ) -> FileContext<'a> {
        FileContext {
            path,
            structure,
            config: &self.config.fsd,
            layer_order: &self.layer_order,
            probe: self.probe.as_ref(),
        }
    }

    fn check_import(
        &self,
        file: &FileContext<'_>,
        import: &ImportRef,
    ) -> Result<Vec<Finding>, LintError> {
        let resolution =
            self.resolver
                .resolve(&import.specifier, &file.structure.full_path, &self.config.fsd);
        let imported = match resolution.kind {
            ResolutionKind::Bare => ParsedFileStructure::parse_bare(&resolution.resolved),
            _ => ParsedFileStructure::parse(
                &resolution.resolved,
                self.config.fsd.src_root_dir.as_deref(),
            )?,
        };

        let ctx = ImportContext {
            file,
            import,
            resolution: &resolution,
            imported: &imported,
        };

        let mut findings = Vec::new();
        for rule in &self.import_rules {
            if !self.config.is_rule_enabled(rule.name()) {
                continue;
            }
            let rule_findings = rule.check_import(&ctx);
            findings.extend(self.apply_severity_override(rule.name(), rule_findings));
        }
        Ok(findings)
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(&self, rule_name: &str, mut findings: Vec<Finding>) -> Vec<Finding> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for f in &mut findings {
                f.severity = severity;
            }
        }
        findings
    }
}
