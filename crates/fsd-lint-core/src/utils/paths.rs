//! Segment-level path algebra.
//!
//! Paths enter as strings using either separator and leave as `/`-joined
//! strings. Everything in between operates on [`SegmentPath`], never on raw
//! joined text.

use std::fmt;

/// A normalized path: ordered segments plus an absolute marker.
///
/// `.` segments are dropped and `..` segments are folded at construction.
/// A leading `..` is kept only for relative paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SegmentPath {
    absolute: bool,
    segments: Vec<String>,
}

impl SegmentPath {
    /// Parses and normalizes a raw path string.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let p = SegmentPath::parse(r"C:\project\src\..\src\app\index.ts");
    /// assert_eq!(p.to_string(), "C:/project/src/app/index.ts");
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let normalized = normalize_separators(raw);
        let absolute = is_absolute_str(&normalized);
        let mut path = Self {
            absolute,
            segments: Vec::new(),
        };
        path.push_all(&normalized);
        path
    }

    /// Whether the path is rooted (`/…` or a drive prefix such as `C:/…`).
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Returns the ordered segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Last segment, if any.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Path without its last segment.
    #[must_use]
    pub fn parent(&self) -> Self {
        let end = self.segments.len().saturating_sub(1);
        self.prefix(end)
    }

    /// The first `count` segments (clamped to the path length).
    #[must_use]
    pub fn prefix(&self, count: usize) -> Self {
        let end = count.min(self.segments.len());
        Self {
            absolute: self.absolute,
            segments: self.segments[..end].to_vec(),
        }
    }

    /// Appends `tail` segment by segment, folding `.` and `..`.
    ///
    /// `tail` is always treated as relative to `self`, so a leading
    /// separator in `tail` does not reset the path.
    #[must_use]
    pub fn join(&self, tail: &str) -> Self {
        let mut joined = self.clone();
        joined.push_all(&normalize_separators(tail));
        joined
    }

    /// Segment-wise prefix test. Absoluteness must agree.
    #[must_use]
    pub fn starts_with(&self, base: &Self) -> bool {
        self.absolute == base.absolute
            && base.segments.len() <= self.segments.len()
            && self
                .segments
                .iter()
                .zip(&base.segments)
                .all(|(a, b)| a == b)
    }

    /// Segments remaining after `base`, if `base` is a prefix of `self`.
    #[must_use]
    pub fn strip_prefix(&self, base: &Self) -> Option<&[String]> {
        if self.starts_with(base) {
            Some(&self.segments[base.segments.len()..])
        } else {
            None
        }
    }

    /// Index of the rightmost segment equal to `name`.
    #[must_use]
    pub fn rposition(&self, name: &str) -> Option<usize> {
        self.segments.iter().rposition(|s| s == name)
    }

    /// Relative path text from directory `from` to `self`.
    ///
    /// Returns `"."` when both paths are equal. The result carries no `./`
    /// prefix; callers that need one add it themselves.
    #[must_use]
    pub fn relative_from(&self, from: &Self) -> String {
        let common = self
            .segments
            .iter()
            .zip(&from.segments)
            .take_while(|(a, b)| a == b)
            .count();

        let ups = from.segments.len() - common;
        let mut parts: Vec<&str> = std::iter::repeat("..").take(ups).collect();
        parts.extend(self.segments[common..].iter().map(String::as_str));

        if parts.is_empty() {
            ".".to_string()
        } else {
            parts.join("/")
        }
    }

    fn push_all(&mut self, normalized: &str) {
        for segment in normalized.split('/') {
            self.push(segment);
        }
    }

    fn push(&mut self, segment: &str) {
        match segment {
            "" | "." => {}
            ".." => {
                let can_pop = self
                    .segments
                    .last()
                    .is_some_and(|last| last != ".." && !(self.absolute && is_drive(last)));
                if can_pop {
                    self.segments.pop();
                } else if !self.absolute {
                    self.segments.push("..".to_string());
                }
                // `..` above an absolute root stays at the root
            }
            other => self.segments.push(other.to_string()),
        }
    }
}

impl fmt::Display for SegmentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let drive_rooted = self.segments.first().is_some_and(|s| is_drive(s));
        if self.absolute && !drive_rooted {
            f.write_str("/")?;
        }
        f.write_str(&self.segments.join("/"))
    }
}

/// Replaces every `\` with `/`.
#[must_use]
pub fn normalize_separators(raw: &str) -> String {
    raw.replace('\\', "/")
}

/// Whether a raw path string is absolute on any supported platform.
#[must_use]
pub fn is_absolute_path(raw: &str) -> bool {
    is_absolute_str(&normalize_separators(raw))
}

fn is_absolute_str(normalized: &str) -> bool {
    if normalized.starts_with('/') {
        return true;
    }
    let bytes = normalized.as_bytes();
    bytes.len() >= 2
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes.len() == 2 || bytes[2] == b'/')
}

fn is_drive(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
