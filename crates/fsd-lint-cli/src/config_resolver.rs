//! Configuration file resolution and loading.
//!
//! The configuration file is picked in this order:
//!
//! 1. `--config` flag (explicit path)
//! 2. `{project}/fsd-lint.toml` or `{project}/.fsd-lint.toml`
//! 3. `$FSD_LINT_CONFIG_DIR/config.toml`, else `~/.fsd-lint/config.toml`
//! 4. No config found → defaults
//!
//! Relative `src_root_dir` and alias targets in a loaded file are anchored
//! at the directory holding that file. The core only accepts absolute
//! paths.

use std::path::{Path, PathBuf};

use fsd_lint_core::{Config, ConfigError};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the project directory.
    Project(PathBuf),
    /// Loaded from the global config directory.
    Global(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` if the config was loaded from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["fsd-lint.toml", ".fsd-lint.toml"];

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration file path.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(project_dir, explicit, global_config_dir())
}

/// Accepts `global_dir` as a parameter so tests need no env vars.
fn resolve_inner(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    let project = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.exists());
    if let Some(candidate) = project {
        tracing::debug!("Found project config: {}", candidate.display());
        return ConfigSource::Project(candidate);
    }

    if let Some(candidate) = global_dir.map(|dir| dir.join(GLOBAL_CONFIG_NAME)) {
        if candidate.exists() {
            tracing::debug!("Found global config: {}", candidate.display());
            return ConfigSource::Global(candidate);
        }
    }

    ConfigSource::Default
}

/// Returns the global config directory path.
///
/// Resolution: `$FSD_LINT_CONFIG_DIR` > `~/.fsd-lint/`
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("FSD_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".fsd-lint"))
}

/// Loads the configuration named by `source`.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file cannot be read or parsed.
pub fn load(source: &ConfigSource) -> Result<Config, ConfigError> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }

    let mut config = Config::from_file(path)?;
    let base = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let base = std::path::absolute(&base).unwrap_or(base);
    anchor_relative_paths(&mut config, &base);
    Ok(config)
}

/// Rewrites relative `src_root_dir` and alias targets against `base`.
pub fn anchor_relative_paths(config: &mut Config, base: &Path) {
    let anchor = |raw: &str| -> Option<String> {
        if fsd_lint_core::utils::is_absolute_path(raw) {
            return None;
        }
        let anchored = base.join(raw).to_string_lossy().into_owned();
        tracing::debug!("anchoring '{raw}' at {}: {anchored}", base.display());
        Some(anchored)
    };

    if let Some(root) = config.fsd.src_root_dir.as_deref().and_then(anchor) {
        config.fsd.src_root_dir = Some(root);
    }
    for target in config.fsd.path_aliases.values_mut() {
        if let Some(anchored) = anchor(target.as_str()) {
            *target = anchored;
        }
    }
}
