//! # fsd-lint-core
//!
//! Core engine for Feature-Sliced Design linting.
//!
//! This crate knows nothing about JavaScript syntax. A host hands it a file
//! path plus the literal import specifiers found in that file, and it
//! answers with [`Finding`]s. It includes:
//!
//! - [`ParsedFileStructure`] for mapping a path onto layer and slice
//! - [`ImportResolver`] for turning specifiers into comparable paths
//! - [`ImportRule`] and [`FileRule`] traits for the checks themselves
//! - [`Linter`] for running the registered rules over one file
//! - [`apply_fixes`] for writing automatic replacements back
//!
//! ## Example
//!
//! ```ignore
//! use fsd_lint_core::{Config, ImportRef, Linter};
//!
//! let linter = Linter::builder()
//!     .config(Config::from_file("fsd-lint.toml".as_ref())?)
//!     .import_rule(LayerDependency::new())
//!     .build()?;
//!
//! let findings = linter.lint_file(path, &imports)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod fix;
mod layer;
mod linter;
mod probe;
mod resolve;
mod rule;
mod structure;
mod types;

/// Utility modules for rule implementations.
pub mod utils;

pub use config::{AnalyzerConfig, Config, ConfigError, FsdConfig, RuleConfig};
pub use context::{FileContext, ImportContext, ImportRef, ImportSyntax};
pub use fix::{apply_fixes, FixOutcome};
pub use layer::{Layer, LayerOrder};
pub use linter::{LintError, Linter, LinterBuilder};
pub use probe::{FileProbe, FsProbe, StaticProbe};
pub use resolve::{
    resolve_import, AliasMatcher, BareMatcher, ImportResolution, ImportResolver, RelativeMatcher,
    ResolutionKind, ResolveContext, RootAliasMatcher, SpecifierMatcher, ROOT_ALIAS,
};
pub use rule::{FileRule, FileRuleBox, ImportRule, ImportRuleBox};
pub use structure::{ParsedFileStructure, SRC_SEGMENT};
pub use types::{
    AnchorKind, Finding, LintResult, Location, Replacement, Severity, Suggestion,
};
