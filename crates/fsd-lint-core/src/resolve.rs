//! Import specifier resolution.
//!
//! A specifier is resolved by an ordered list of [`SpecifierMatcher`]s; the
//! first matcher that accepts it wins:
//!
//! | Order | Matcher | Accepts |
//! |-------|---------|---------|
//! | 1 | [`RelativeMatcher`] | `./x`, `../x` |
//! | 2 | [`AliasMatcher`] | configured alias prefixes, longest first |
//! | 3 | [`RootAliasMatcher`] | `@/x` when no configured alias matched |
//! | 4 | [`BareMatcher`] | everything else |

use serde::Serialize;
use std::fmt;

use crate::config::FsdConfig;
use crate::structure::SRC_SEGMENT;
use crate::utils::paths::SegmentPath;

/// Conventional alias for the source root.
pub const ROOT_ALIAS: &str = "@/";

/// How a specifier was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolutionKind {
    /// Dot-prefixed, resolved against the importing file's directory.
    Relative,
    /// A configured path alias.
    Alias,
    /// The conventional `@/` root alias.
    AtAlias,
    /// Anything else; kept as literal text.
    Bare,
}

impl fmt::Display for ResolutionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relative => write!(f, "relative"),
            Self::Alias => write!(f, "alias"),
            Self::AtAlias => write!(f, "@/ alias"),
            Self::Bare => write!(f, "bare"),
        }
    }
}

/// Outcome of resolving one specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResolution {
    /// Which strategy matched.
    pub kind: ResolutionKind,
    /// Alias prefix that matched (`Alias` and `AtAlias` only).
    pub alias_prefix: Option<String>,
    /// Directory the alias maps to (`Alias` and `AtAlias` only).
    pub alias_target: Option<SegmentPath>,
    /// Resolved path; the literal specifier for `Bare`.
    pub resolved: String,
}

impl ImportResolution {
    fn bare(specifier: &str) -> Self {
        Self {
            kind: ResolutionKind::Bare,
            alias_prefix: None,
            alias_target: None,
            resolved: specifier.to_string(),
        }
    }

    fn aliased(kind: ResolutionKind, prefix: &str, target: SegmentPath, rest: &str) -> Self {
        let resolved = target.join(rest).to_string();
        Self {
            kind,
            alias_prefix: Some(prefix.to_string()),
            alias_target: Some(target),
            resolved,
        }
    }
}

/// Inputs shared by all matchers.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    /// Normalized path of the importing file.
    pub current_file: &'a SegmentPath,
    /// Architecture configuration.
    pub config: &'a FsdConfig,
}

/// One resolution strategy.
pub trait SpecifierMatcher: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    /// Resolves `specifier` if this strategy applies to it.
    fn try_resolve(&self, specifier: &str, ctx: &ResolveContext<'_>) -> Option<ImportResolution>;
}

/// `./x` and `../x`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RelativeMatcher;

impl SpecifierMatcher for RelativeMatcher {
    fn name(&self) -> &'static str {
        "relative"
    }

    fn try_resolve(&self, specifier: &str, ctx: &ResolveContext<'_>) -> Option<ImportResolution> {
        if !specifier.starts_with('.') {
            return None;
        }
        let resolved = ctx.current_file.parent().join(specifier).to_string();
        Some(ImportResolution {
            kind: ResolutionKind::Relative,
            alias_prefix: None,
            alias_target: None,
            resolved,
        })
    }
}

/// Configured path aliases. The longest matching prefix wins, so
/// `@shared/` outranks `@/`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AliasMatcher;

impl SpecifierMatcher for AliasMatcher {
    fn name(&self) -> &'static str {
        "alias"
    }

    fn try_resolve(&self, specifier: &str, ctx: &ResolveContext<'_>) -> Option<ImportResolution> {
        let (prefix, target) = ctx
            .config
            .path_aliases
            .iter()
            .filter(|(prefix, _)| !prefix.is_empty() && specifier.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())?;

        Some(ImportResolution::aliased(
            ResolutionKind::Alias,
            prefix,
            SegmentPath::parse(target),
            &specifier[prefix.len()..],
        ))
    }
}

/// `@/x`, rooted at the configured source root or, failing that, at the
/// rightmost `src` directory of the importing file.
#[derive(Debug, Default, Clone, Copy)]
pub struct RootAliasMatcher;

impl RootAliasMatcher {
    fn root(ctx: &ResolveContext<'_>) -> Option<SegmentPath> {
        if let Some(dir) = ctx.config.src_root_dir.as_deref() {
            return Some(SegmentPath::parse(dir));
        }
        let src = ctx.current_file.rposition(SRC_SEGMENT)?;
        Some(ctx.current_file.prefix(src + 1))
    }
}

impl SpecifierMatcher for RootAliasMatcher {
    fn name(&self) -> &'static str {
        "root-alias"
    }

    fn try_resolve(&self, specifier: &str, ctx: &ResolveContext<'_>) -> Option<ImportResolution> {
        let rest = specifier.strip_prefix(ROOT_ALIAS)?;
        let root = Self::root(ctx)?;
        Some(ImportResolution::aliased(
            ResolutionKind::AtAlias,
            ROOT_ALIAS,
            root,
            rest,
        ))
    }
}

/// Package names and other non-relative, non-aliased text.
#[derive(Debug, Default, Clone, Copy)]
pub struct BareMatcher;

impl SpecifierMatcher for BareMatcher {
    fn name(&self) -> &'static str {
        "bare"
    }

    fn try_resolve(&self, specifier: &str, _ctx: &ResolveContext<'_>) -> Option<ImportResolution> {
        Some(ImportResolution::bare(specifier))
    }
}

/// Ordered matcher chain.
pub struct ImportResolver {
    matchers: Vec<Box<dyn SpecifierMatcher>>,
}

impl Default for ImportResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ImportResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.matchers.iter().map(|m| m.name()))
            .finish()
    }
}

impl ImportResolver {
    /// The standard chain: relative, alias, `@/`, bare.
    #[must_use]
    pub fn new() -> Self {
        Self::with_matchers(vec![
            Box::new(RelativeMatcher),
            Box::new(AliasMatcher),
            Box::new(RootAliasMatcher),
            Box::new(BareMatcher),
        ])
    }

    /// A custom chain. Specifiers no matcher accepts resolve as bare.
    #[must_use]
    pub fn with_matchers(matchers: Vec<Box<dyn SpecifierMatcher>>) -> Self {
        Self { matchers }
    }

    /// Resolves `specifier` as imported from `current_file`.
    #[must_use]
    pub fn resolve(
        &self,
        specifier: &str,
        current_file: &SegmentPath,
        config: &FsdConfig,
    ) -> ImportResolution {
        let ctx = ResolveContext {
            current_file,
            config,
        };
        for matcher in &self.matchers {
            if let Some(resolution) = matcher.try_resolve(specifier, &ctx) {
                tracing::trace!(
                    specifier,
                    matcher = matcher.name(),
                    resolved = %resolution.resolved,
                    "resolved import specifier"
                );
                return resolution;
            }
        }
        ImportResolution::bare(specifier)
    }
}

/// Resolves `specifier` with the standard chain.
#[must_use]
pub fn resolve_import(specifier: &str, current_file: &str, config: &FsdConfig) -> ImportResolution {
    ImportResolver::new().resolve(specifier, &SegmentPath::parse(current_file), config)
}
