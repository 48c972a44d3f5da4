//! Configuration types for fsd-lint.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use crate::layer::LayerOrder;
use crate::utils::paths::is_absolute_path;

/// Top-level configuration for fsd-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// File discovery configuration (consumed by hosts such as the CLI).
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Architecture model configuration.
    #[serde(default)]
    pub fsd: FsdConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<crate::Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Gets the configuration table for a rule, if present.
    #[must_use]
    pub fn rule_config(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.rules.get(rule_name)
    }
}

/// Host-side discovery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: vec![
                "**/node_modules/**".to_string(),
                "**/dist/**".to_string(),
                "**/build/**".to_string(),
            ],
            respect_gitignore: true,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

/// Architecture model configuration, supplied once per lint run.
///
/// Keys are accepted in snake_case and in the camelCase spelling used by
/// JavaScript hosts (`srcRootDir`, `pathAliases`, …).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FsdConfig {
    /// Master switch. When off, no rule produces findings.
    pub enabled: bool,

    /// Require an `index.{js,ts}` public entry in every module directory.
    #[serde(alias = "requirePublicApi")]
    pub require_public_api: bool,

    /// Reject layer directories that are not one of the canonical names.
    #[serde(alias = "strictLayerStructure")]
    pub strict_layer_structure: bool,

    /// Absolute source root. When unset, the rightmost `src` segment of each
    /// path is used.
    #[serde(alias = "srcRootDir")]
    pub src_root_dir: Option<String>,

    /// Alias prefix → absolute target directory.
    #[serde(alias = "pathAliases")]
    pub path_aliases: BTreeMap<String, String>,

    /// Layer name → level overrides.
    #[serde(alias = "layerLevels")]
    pub layer_levels: BTreeMap<String, u32>,
}

impl Default for FsdConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            require_public_api: true,
            strict_layer_structure: true,
            src_root_dir: None,
            path_aliases: BTreeMap::new(),
            layer_levels: BTreeMap::new(),
        }
    }
}

impl FsdConfig {
    /// Sets the source root.
    #[must_use]
    pub fn with_src_root(mut self, dir: impl Into<String>) -> Self {
        self.src_root_dir = Some(dir.into());
        self
    }

    /// Adds a path alias.
    #[must_use]
    pub fn with_alias(mut self, prefix: impl Into<String>, target: impl Into<String>) -> Self {
        self.path_aliases.insert(prefix.into(), target.into());
        self
    }

    /// Sets whether public entries are required.
    #[must_use]
    pub fn with_require_public_api(mut self, required: bool) -> Self {
        self.require_public_api = required;
        self
    }

    /// Returns the source root after checking it is absolute.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RelativeSrcRoot`] for a relative root.
    pub fn checked_src_root(&self) -> Result<Option<&str>, ConfigError> {
        match self.src_root_dir.as_deref() {
            Some(dir) if !is_absolute_path(dir) => Err(ConfigError::RelativeSrcRoot {
                path: dir.to_string(),
            }),
            other => Ok(other),
        }
    }

    /// Builds the layer ordering including overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an override names an unknown layer.
    pub fn layer_order(&self) -> Result<LayerOrder, ConfigError> {
        LayerOrder::with_overrides(&self.layer_levels)
    }

    /// Validates config consistency.
    ///
    /// # Errors
    ///
    /// Returns error describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.checked_src_root()?;

        for (alias, target) in &self.path_aliases {
            if alias.is_empty() {
                return Err(ConfigError::EmptyAlias);
            }
            if !is_absolute_path(target) {
                return Err(ConfigError::RelativeAliasTarget {
                    alias: alias.clone(),
                    target: target.clone(),
                });
            }
        }

        self.layer_order()?;
        Ok(())
    }
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<crate::Severity>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Gets a string array option, or `None` when the key is absent.
    #[must_use]
    pub fn get_str_array(&self, key: &str) -> Option<Vec<String>> {
        self.options.get(key).and_then(|v| v.as_array()).map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    #[diagnostic(code(fsd::config::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    #[diagnostic(code(fsd::config::parse))]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// `src_root_dir` is not absolute.
    #[error("src_root_dir must be an absolute path, got '{path}'")]
    #[diagnostic(
        code(fsd::config::src_root),
        help("a relative root would silently misclassify every file; use an absolute path")
    )]
    RelativeSrcRoot {
        /// The offending value.
        path: String,
    },

    /// An alias target is not absolute.
    #[error("path alias '{alias}' must map to an absolute directory, got '{target}'")]
    #[diagnostic(code(fsd::config::alias_target))]
    RelativeAliasTarget {
        /// Alias prefix.
        alias: String,
        /// The offending target.
        target: String,
    },

    /// An alias prefix is empty.
    #[error("path alias prefixes must not be empty")]
    #[diagnostic(code(fsd::config::alias_prefix))]
    EmptyAlias,

    /// A layer level override names an unknown layer.
    #[error("unknown layer '{name}' in layer_levels")]
    #[diagnostic(
        code(fsd::config::layer_levels),
        help("valid layers: shared, entities, features, widgets, pages, app")
    )]
    UnknownLayer {
        /// The unknown name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.analyzer.respect_gitignore);
        assert!(config.fsd.enabled);
        assert!(config.fsd.require_public_api);
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[analyzer]
root = "./web"
exclude = ["**/generated/**"]

[fsd]
require_public_api = false
src_root_dir = "/project/src"

[fsd.path_aliases]
"@/" = "/project/src/"
"@shared/" = "/project/src/shared/"

[rules.naming-convention]
enabled = true
severity = "info"

[rules.same-layer-isolation]
layers = ["features", "widgets"]
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.root, PathBuf::from("./web"));
        assert!(!config.fsd.require_public_api);
        assert_eq!(config.fsd.path_aliases.len(), 2);
        assert!(config.is_rule_enabled("naming-convention"));
        assert_eq!(
            config.rule_severity("naming-convention"),
            Some(Severity::Info)
        );

        let isolation = config.rule_config("same-layer-isolation").unwrap();
        assert_eq!(
            isolation.get_str_array("layers"),
            Some(vec!["features".to_string(), "widgets".to_string()])
        );
        assert!(config.fsd.validate().is_ok());
    }

    #[test]
    fn accepts_camel_case_keys() {
        let toml = r#"
[fsd]
requirePublicApi = false
strictLayerStructure = false
srcRootDir = "/project/src"

[fsd.pathAliases]
"@/" = "/project/src/"
"#;
        let config = Config::parse(toml).expect("Failed to parse");
        assert!(!config.fsd.require_public_api);
        assert!(!config.fsd.strict_layer_structure);
        assert_eq!(config.fsd.src_root_dir.as_deref(), Some("/project/src"));
        assert_eq!(config.fsd.path_aliases.len(), 1);
    }

    #[test]
    fn disabled_rule_is_reported_disabled() {
        let config = Config::parse("[rules.public-api-only]\nenabled = false\n").unwrap();
        assert!(!config.is_rule_enabled("public-api-only"));
        assert!(config.is_rule_enabled("layer-dependency"));
    }

    #[test]
    fn relative_src_root_is_rejected() {
        let fsd = FsdConfig::default().with_src_root("src");
        let err = fsd.validate().unwrap_err();
        assert!(matches!(err, ConfigError::RelativeSrcRoot { .. }));
    }

    #[test]
    fn relative_alias_target_is_rejected() {
        let fsd = FsdConfig::default().with_alias("@/", "./src");
        assert!(matches!(
            fsd.validate(),
            Err(ConfigError::RelativeAliasTarget { .. })
        ));
    }

    #[test]
    fn empty_alias_is_rejected() {
        let fsd = FsdConfig::default().with_alias("", "/project/src");
        assert!(matches!(fsd.validate(), Err(ConfigError::EmptyAlias)));
    }

    #[test]
    fn unknown_layer_level_is_rejected() {
        let mut fsd = FsdConfig::default();
        fsd.layer_levels.insert("processes".into(), 4);
        assert!(matches!(
            fsd.validate(),
            Err(ConfigError::UnknownLayer { .. })
        ));
    }
}
