//! Rewrites an internal import into one that targets the slice's public API,
//! in the same style as the original specifier.

use fsd_lint_core::utils::SegmentPath;
use fsd_lint_core::{ImportContext, ImportResolver, Layer, Replacement, ResolutionKind, Suggestion};

/// Builds the public-API suggestion for an import that reaches into a slice.
///
/// The replacement is marked automatic only when re-resolving the new text
/// from the same file lands on the slice directory.
pub(crate) fn public_api_suggestion(ctx: &ImportContext<'_>) -> Option<Suggestion> {
    let imported = ctx.imported;
    let layer = imported.layer?;
    let slice = imported.slice.as_deref()?;
    let slice_root = imported.slice_root()?;
    let current_dir = ctx.current().full_path.parent();

    let (text, automatic) = match ctx.resolution.kind {
        ResolutionKind::Relative => (relative_specifier(&slice_root, &current_dir), true),
        ResolutionKind::Alias | ResolutionKind::AtAlias => {
            let prefix = ctx.resolution.alias_prefix.as_deref()?;
            let target = ctx.resolution.alias_target.as_ref()?;
            match slice_root.strip_prefix(target) {
                Some(rest) if !rest.is_empty() => (alias_specifier(prefix, rest, layer), true),
                _ => (relative_specifier(&slice_root, &current_dir), false),
            }
        }
        ResolutionKind::Bare => (format!("{layer}/{slice}"), true),
    };

    let automatic = automatic && resolves_to(ctx, &text, &slice_root);
    let replacement = Replacement::new(ctx.import.location.clone(), text.clone());
    let message = format!("Import from the public API instead: '{text}'");

    Some(if automatic {
        Suggestion::with_fix(message, replacement)
    } else {
        Suggestion::with_manual_fix(message, replacement)
    })
}

/// `./`-prefixed relative path from `from_dir` to `target`.
fn relative_specifier(target: &SegmentPath, from_dir: &SegmentPath) -> String {
    let rel = target.relative_from(from_dir);
    if rel.starts_with('.') {
        rel
    } else {
        format!("./{rel}")
    }
}

/// `prefix` followed by `rest`, dropping a leading layer segment the prefix
/// already names (`@entities/` + `entities/user` gives `@entities/user`).
fn alias_specifier(prefix: &str, rest: &[String], layer: Layer) -> String {
    let trimmed = prefix.trim_end_matches('/');
    let rest = match rest.split_first() {
        Some((first, tail)) if first == layer.as_str() && trimmed.ends_with(layer.as_str()) => {
            tail
        }
        _ => rest,
    };

    if rest.is_empty() {
        return trimmed.to_string();
    }
    let joined = rest.join("/");
    if prefix.ends_with('/') {
        format!("{prefix}{joined}")
    } else {
        format!("{prefix}/{joined}")
    }
}

fn resolves_to(ctx: &ImportContext<'_>, text: &str, slice_root: &SegmentPath) -> bool {
    let resolution =
        ImportResolver::new().resolve(text, &ctx.current().full_path, ctx.file.config);
    let same = resolution.kind == ctx.resolution.kind
        && SegmentPath::parse(&resolution.resolved) == *slice_root;
    if !same {
        tracing::debug!(
            "suggestion '{text}' does not resolve to {slice_root}, withholding automatic fix"
        );
    }
    same
}
