//! Rule presets and registration.

use fsd_lint_core::{Config, FileRuleBox, ImportRuleBox, LinterBuilder, Severity};

use crate::{
    FolderStructure, LayerDependency, NamingConvention, PublicApiOnly, SameLayerIsolation,
};

/// Preset configurations for fsd-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Every rule.
    Recommended,
    /// Import boundary rules only, for gradual adoption.
    Minimal,
}

impl Preset {
    /// Looks a preset up by its lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "recommended" => Some(Self::Recommended),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }

    /// Returns the rules for this preset, configured from `config`.
    #[must_use]
    pub fn rules(self, config: &Config) -> RuleSet {
        match self {
            Self::Recommended => recommended_rules(config),
            Self::Minimal => minimal_rules(config),
        }
    }
}

/// Whether a rule runs per import or per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Evaluated for every import specifier.
    Import,
    /// Evaluated once for the file.
    File,
}

/// Metadata about a registered rule, for listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleInfo {
    /// Rule code.
    pub code: &'static str,
    /// Rule name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Default severity.
    pub severity: Severity,
    /// Evaluation granularity.
    pub kind: RuleKind,
}

/// A set of import and file rules.
#[derive(Default)]
pub struct RuleSet {
    /// Per-import rules.
    pub import_rules: Vec<ImportRuleBox>,
    /// Per-file rules.
    pub file_rules: Vec<FileRuleBox>,
}

impl RuleSet {
    /// Number of rules in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.import_rules.len() + self.file_rules.len()
    }

    /// Whether the set holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keeps only the rules whose name is in `names`.
    pub fn retain_named(&mut self, names: &[String]) {
        self.import_rules
            .retain(|r| names.iter().any(|n| n == r.name()));
        self.file_rules.retain(|r| names.iter().any(|n| n == r.name()));
    }

    /// Describes every rule in the set, import rules first.
    #[must_use]
    pub fn describe(&self) -> Vec<RuleInfo> {
        let imports = self.import_rules.iter().map(|r| RuleInfo {
            code: r.code(),
            name: r.name(),
            description: r.description(),
            severity: r.default_severity(),
            kind: RuleKind::Import,
        });
        let files = self.file_rules.iter().map(|r| RuleInfo {
            code: r.code(),
            name: r.name(),
            description: r.description(),
            severity: r.default_severity(),
            kind: RuleKind::File,
        });
        imports.chain(files).collect()
    }

    /// Registers every rule with a linter builder.
    #[must_use]
    pub fn register(self, mut builder: LinterBuilder) -> LinterBuilder {
        for rule in self.import_rules {
            builder = builder.import_rule_box(rule);
        }
        for rule in self.file_rules {
            builder = builder.file_rule_box(rule);
        }
        builder
    }
}

/// Returns the recommended set of rules.
///
/// Includes:
/// - `layer-dependency` (FSD001) - Forbids importing from a higher layer
/// - `same-layer-isolation` (FSD002) - Forbids sibling slice imports
/// - `public-api-only` (FSD003) - Requires imports through `index`
/// - `folder-structure` (FSD004) - Validates layer names and public API files
/// - `naming-convention` (FSD005) - Requires kebab-case names
#[must_use]
pub fn recommended_rules(config: &Config) -> RuleSet {
    let mut set = minimal_rules(config);
    set.file_rules = vec![
        Box::new(FolderStructure::new()),
        Box::new(NamingConvention::new()),
    ];
    set
}

/// Returns the minimal set of rules: the three import boundary rules.
#[must_use]
pub fn minimal_rules(config: &Config) -> RuleSet {
    RuleSet {
        import_rules: vec![
            Box::new(LayerDependency::new()),
            Box::new(SameLayerIsolation::from_config(
                config.rule_config(crate::same_layer_isolation::NAME),
            )),
            Box::new(PublicApiOnly::new()),
        ],
        file_rules: vec![],
    }
}

/// Returns all available rules.
#[must_use]
pub fn all_rules(config: &Config) -> RuleSet {
    recommended_rules(config)
}
