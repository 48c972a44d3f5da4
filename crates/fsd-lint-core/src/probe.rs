//! File existence capability.
//!
//! The only I/O a rule may perform goes through [`FileProbe`], so the path
//! and resolution core stays pure and rules can be tested against an
//! in-memory file set.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Answers "does this file exist?".
///
/// Implementations must never fail: any error means "absent".
pub trait FileProbe: Send + Sync {
    /// Whether a regular file exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        match std::fs::metadata(path) {
            Ok(meta) => meta.is_file(),
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::debug!("probe failed for {}: {e}", path.display());
                }
                false
            }
        }
    }
}

/// Probe over a fixed set of paths.
#[derive(Debug, Default, Clone)]
pub struct StaticProbe {
    files: HashSet<PathBuf>,
}

impl StaticProbe {
    /// Creates an empty probe.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }
}

impl FileProbe for StaticProbe {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains(path)
    }
}
