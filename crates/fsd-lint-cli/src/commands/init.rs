//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const CONFIG_FILE: &str = "fsd-lint.toml";

const DEFAULT_CONFIG: &str = r#"# fsd-lint configuration

[analyzer]
# Directory to walk, relative to the checked path
root = "."

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
]

# Respect .gitignore files
respect_gitignore = true

[fsd]
enabled = true

# Require index.js / index.ts in every slice and shared segment
require_public_api = true

# Report directories under the source root that are not FSD layers
strict_layer_structure = true

# Source root. Relative paths are resolved from this file's directory.
# When unset, the last `src` directory in each file path is used.
# src_root_dir = "src"

# Alias prefix -> target directory, relative to this file or absolute
# [fsd.path_aliases]
# "@/" = "src/"

# Override layer levels (lower may not import higher)
# [fsd.layer_levels]
# widgets = 4

# Each rule can be enabled/disabled and have its severity overridden

# [rules.layer-dependency]
# severity = "warning"

# [rules.same-layer-isolation]
# layers = ["features", "widgets", "pages"]

# [rules.naming-convention]
# enabled = false
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new(CONFIG_FILE), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to describe your source root and aliases");
    println!("  2. Run: fsd-lint check");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
