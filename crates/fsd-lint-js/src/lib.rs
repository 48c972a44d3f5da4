//! # fsd-lint-js
//!
//! Tree-sitter based host adapter for fsd-lint.
//!
//! The core engine never parses source code. This crate finds the
//! statically literal import specifiers in JavaScript and TypeScript files,
//! together with the byte span of each specifier inside its quotes, and
//! hands them over as [`fsd_lint_core::ImportRef`]s. It provides:
//!
//! - [`LanguageExtractor`] trait for pluggable dialects
//! - [`JsExtractor`] for JavaScript, TypeScript and TSX
//! - [`ExtractorRegistry`] for picking an extractor by file extension

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod extractor;
pub mod javascript;
pub mod registry;

pub use extractor::{ExtractError, FileAnalysis, ImportInfo, LanguageExtractor};
pub use javascript::{Dialect, JsExtractor};
pub use registry::ExtractorRegistry;
