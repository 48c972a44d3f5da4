//! # fsd-lint-rules
//!
//! Built-in Feature-Sliced Design rules for fsd-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | FSD001 | `layer-dependency` | Forbids importing from a higher layer |
//! | FSD002 | `same-layer-isolation` | Forbids imports between sibling slices |
//! | FSD003 | `public-api-only` | Requires imports to target a slice's public API (autofix) |
//! | FSD004 | `folder-structure` | Validates layer names and public API files |
//! | FSD005 | `naming-convention` | Requires kebab-case directory and file names |
//!
//! ## Usage
//!
//! ```ignore
//! use fsd_lint_core::Linter;
//! use fsd_lint_rules::{LayerDependency, PublicApiOnly};
//!
//! let linter = Linter::builder()
//!     .import_rule(LayerDependency::new())
//!     .import_rule(PublicApiOnly::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod folder_structure;
pub mod layer_dependency;
pub mod naming_convention;
pub mod public_api_only;
pub mod same_layer_isolation;

mod presets;
mod suggestion;

#[cfg(test)]
mod test_support;

pub use folder_structure::{module_directory, FolderStructure};
pub use layer_dependency::LayerDependency;
pub use naming_convention::NamingConvention;
pub use presets::{
    all_rules, minimal_rules, recommended_rules, Preset, RuleInfo, RuleKind, RuleSet,
};
pub use public_api_only::PublicApiOnly;
pub use same_layer_isolation::SameLayerIsolation;

/// Re-export core types for convenience.
pub use fsd_lint_core::{FileRule, Finding, ImportRule, Severity};
