//! Utility functions for rule implementations.

pub mod naming;
pub mod paths;

// Re-export commonly used utilities for rule implementations
#[doc(inline)]
pub use naming::{is_index_file, is_kebab_case, stem_before_first_dot};
#[doc(inline)]
pub use paths::{is_absolute_path, normalize_separators, SegmentPath};
