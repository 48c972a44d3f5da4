//! Path structure parser: maps a path onto the layer/slice model.
//!
//! ```text
//! /project/src/features/auth/ui/login-form.tsx
//!          ^^^ ^^^^^^^^ ^^^^ ^^^^^^^^^^^^^^^^^
//!          src  layer   slice  internal path
//! ```

use crate::config::ConfigError;
use crate::layer::Layer;
use crate::utils::paths::{is_absolute_path, SegmentPath};

/// Name of the conventional source root directory.
pub const SRC_SEGMENT: &str = "src";

/// Classification of one path within the layered architecture.
///
/// Invariant: `layer_index == src_index + 1`. `src_index` is `-1` when no
/// root was recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFileStructure {
    /// Canonical layer, when the layer slot holds one of the six names.
    pub layer: Option<Layer>,
    /// Raw segment in the layer slot (absent for root files).
    pub layer_segment: Option<String>,
    /// Segment immediately after the layer.
    pub slice: Option<String>,
    /// Last segment of the path.
    pub file_name: String,
    /// Normalized segments.
    pub full_path: SegmentPath,
    /// Index of the layer slot.
    pub layer_index: isize,
    /// Index of the source root segment, or `-1`.
    pub src_index: isize,
    /// The path sits directly inside the source root.
    pub is_root_file: bool,
}

impl ParsedFileStructure {
    /// Parses a file or resolved import path.
    ///
    /// With `src_root_dir` set and the path under it, the root's last segment
    /// anchors the layer slot. Otherwise the rightmost `src` segment does.
    /// Paths with neither are unclassifiable, relative or not. Bare
    /// specifiers go through [`ParsedFileStructure::parse_bare`] instead.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RelativeSrcRoot`] if `src_root_dir` is not
    /// absolute.
    pub fn parse(path: &str, src_root_dir: Option<&str>) -> Result<Self, ConfigError> {
        let full_path = SegmentPath::parse(path);

        let configured_root = match src_root_dir {
            Some(dir) if !is_absolute_path(dir) => {
                return Err(ConfigError::RelativeSrcRoot {
                    path: dir.to_string(),
                })
            }
            Some(dir) => Some(SegmentPath::parse(dir)),
            None => None,
        };

        let src_index = configured_root
            .as_ref()
            .filter(|root| !root.is_empty() && full_path.starts_with(root))
            .map(|root| root.len() - 1)
            .or_else(|| full_path.rposition(SRC_SEGMENT))
            .map_or(-1, to_isize);

        Ok(Self::from_indices(full_path, src_index, false))
    }

    /// Parses a bare specifier such as `entities/user` or `react-dom/client`.
    ///
    /// Only the first segment can name a layer. The specifier is never
    /// searched for a `src` segment, so `pkg/src/features/x` stays outside
    /// the architecture.
    #[must_use]
    pub fn parse_bare(specifier: &str) -> Self {
        Self::from_indices(SegmentPath::parse(specifier), -1, true)
    }

    fn from_indices(full_path: SegmentPath, src_index: isize, first_segment_layer: bool) -> Self {
        let file_name = full_path.file_name().unwrap_or_default().to_string();
        let layer_index = src_index + 1;
        let classifiable = src_index >= 0 || first_segment_layer;
        let last = to_isize(full_path.len()) - 1;
        let is_root_file = src_index >= 0
            && layer_index == last
            && Layer::from_segment(&file_name).is_none();

        let segment_at = |index: isize| -> Option<String> {
            usize::try_from(index)
                .ok()
                .and_then(|i| full_path.segments().get(i))
                .cloned()
        };

        let (layer_segment, slice) = if classifiable && !is_root_file {
            (segment_at(layer_index), segment_at(layer_index + 1))
        } else {
            (None, None)
        };
        let layer = layer_segment.as_deref().and_then(Layer::from_segment);

        Self {
            layer,
            layer_segment,
            slice,
            file_name,
            full_path,
            layer_index,
            src_index,
            is_root_file,
        }
    }

    /// Whether a source root was recognized.
    #[must_use]
    pub fn has_root(&self) -> bool {
        self.src_index >= 0
    }

    /// Whether both structures share layer and slice.
    #[must_use]
    pub fn same_slice(&self, other: &Self) -> bool {
        self.layer.is_some()
            && self.layer == other.layer
            && self.slice.is_some()
            && self.slice == other.slice
    }

    /// Path of the slice directory (`…/<layer>/<slice>`).
    #[must_use]
    pub fn slice_root(&self) -> Option<SegmentPath> {
        self.slice.as_ref()?;
        Some(self.full_path.prefix(self.index_after_slice()))
    }

    /// Segments strictly after the slice segment.
    #[must_use]
    pub fn internal_path(&self) -> &[String] {
        if self.slice.is_none() {
            return &[];
        }
        let start = self.index_after_slice().min(self.full_path.len());
        &self.full_path.segments()[start..]
    }

    /// Directory segments below the source root, excluding the file name.
    #[must_use]
    pub fn directories_under_root(&self) -> &[String] {
        let Ok(start) = usize::try_from(self.layer_index) else {
            return &[];
        };
        let end = self.full_path.len().saturating_sub(1);
        if !self.has_root() || start >= end {
            return &[];
        }
        &self.full_path.segments()[start..end]
    }

    fn index_after_slice(&self) -> usize {
        usize::try_from(self.layer_index + 2).unwrap_or(0)
    }
}

fn to_isize(value: usize) -> isize {
    isize::try_from(value).unwrap_or(isize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(path: &str) -> ParsedFileStructure {
        ParsedFileStructure::parse(path, None).expect("no root configured")
    }

    #[test]
    fn classifies_canonical_layer_and_slice() {
        for layer in Layer::ALL {
            let s = parse(&format!("/project/src/{layer}/my-slice/ui/view.tsx"));
            assert_eq!(s.layer, Some(layer));
            assert_eq!(s.slice.as_deref(), Some("my-slice"));
            assert_eq!(s.layer_index, s.src_index + 1);
            assert_eq!(s.src_index, 1);
        }
    }

    #[test]
    fn rightmost_src_wins() {
        let s = parse("/repo/src/vendor/lib/src/entities/user/index.ts");
        assert_eq!(s.src_index, 4);
        assert_eq!(s.layer, Some(Layer::Entities));
        assert_eq!(s.slice.as_deref(), Some("user"));
    }

    #[test]
    fn configured_root_takes_precedence() {
        let s = ParsedFileStructure::parse(
            "/repo/web/src/app/src/features/x/index.ts",
            Some("/repo/web/src"),
        )
        .unwrap();
        assert_eq!(s.src_index, 2);
        assert_eq!(s.layer_segment.as_deref(), Some("app"));
        assert_eq!(s.layer, Some(Layer::App));
        assert_eq!(s.slice.as_deref(), Some("src"));
    }

    #[test]
    fn configured_root_may_have_any_name() {
        let s = ParsedFileStructure::parse("/repo/client/pages/home/ui.tsx", Some("/repo/client"))
            .unwrap();
        assert_eq!(s.layer, Some(Layer::Pages));
        assert_eq!(s.slice.as_deref(), Some("home"));
    }

    #[test]
    fn relative_src_root_is_config_error() {
        let err = ParsedFileStructure::parse("/p/src/app/index.ts", Some("src")).unwrap_err();
        assert!(matches!(err, ConfigError::RelativeSrcRoot { .. }));
    }

    #[test]
    fn absolute_path_without_root_is_unclassified() {
        let s = parse("/project/config/webpack.config.js");
        assert_eq!(s.src_index, -1);
        assert_eq!(s.layer_index, 0);
        assert!(!s.has_root());
        assert!(s.layer.is_none());
        assert!(s.layer_segment.is_none());
    }

    #[test]
    fn bare_specifier_uses_first_segment() {
        let s = ParsedFileStructure::parse_bare("entities/user/model/user");
        assert_eq!(s.layer, Some(Layer::Entities));
        assert_eq!(s.slice.as_deref(), Some("user"));
        assert_eq!(s.internal_path(), &["model", "user"]);
        assert_eq!(s.layer_index, s.src_index + 1);
    }

    #[test]
    fn package_specifier_is_not_a_layer() {
        for spec in [
            "react",
            "@mui/material/Button",
            "lodash/fp",
            "@acme/kit/src/features/toggle/ui/toggle",
            "kit/src/entities/user/model",
        ] {
            let s = ParsedFileStructure::parse_bare(spec);
            assert!(s.layer.is_none(), "{spec}");
            assert_eq!(s.src_index, -1, "{spec}");
        }
    }

    #[test]
    fn relative_path_without_root_is_unclassified() {
        let s = parse("entities/user/model.ts");
        assert!(!s.has_root());
        assert!(s.layer.is_none());
        assert!(s.layer_segment.is_none());
        assert!(s.slice.is_none());
    }

    #[test]
    fn layer_directory_is_not_a_root_file() {
        let s = parse("/project/src/features");
        assert!(!s.is_root_file);
        assert_eq!(s.layer, Some(Layer::Features));
        assert!(s.slice.is_none());
    }

    #[test]
    fn root_file_is_exempt_from_layer_slot() {
        let s = parse("/project/src/main.tsx");
        assert!(s.is_root_file);
        assert!(s.layer.is_none());
        assert!(s.layer_segment.is_none());
        assert_eq!(s.file_name, "main.tsx");
    }

    #[test]
    fn unknown_layer_keeps_raw_segment() {
        let s = parse("/project/src/components/button/index.js");
        assert!(s.layer.is_none());
        assert_eq!(s.layer_segment.as_deref(), Some("components"));
    }

    #[test]
    fn slice_root_and_internal_path() {
        let s = parse("/p/src/entities/user/model/user.ts");
        assert_eq!(
            s.slice_root().map(|p| p.to_string()).as_deref(),
            Some("/p/src/entities/user")
        );
        assert_eq!(s.internal_path(), &["model", "user.ts"]);

        let root = parse("/p/src/entities/user");
        assert!(root.internal_path().is_empty());
    }

    #[test]
    fn directories_under_root_exclude_file() {
        let s = parse("/p/src/shared/ui/BadFolder/button.js");
        assert_eq!(s.directories_under_root(), &["shared", "ui", "BadFolder"]);
        assert!(parse("/p/src/main.ts").directories_under_root().is_empty());
        assert!(parse("/p/lib/x/y.ts").directories_under_root().is_empty());
    }

    #[test]
    fn same_slice_requires_both_parts() {
        let a = parse("/p/src/features/auth/ui/form.tsx");
        let b = parse("/p/src/features/auth/model/store.ts");
        let c = parse("/p/src/features/cart/index.ts");
        assert!(a.same_slice(&b));
        assert!(!a.same_slice(&c));
    }

    #[test]
    fn backslash_paths_are_normalized() {
        let s = parse(r"C:\work\src\widgets\header\ui\Header.tsx");
        assert_eq!(s.layer, Some(Layer::Widgets));
        assert_eq!(s.slice.as_deref(), Some("header"));
    }
}
