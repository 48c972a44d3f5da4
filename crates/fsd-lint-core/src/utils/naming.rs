//! Naming helpers shared by structure and naming rules.

/// Checks whether `name` is kebab-case.
///
/// Lowercase ASCII letters and digits in hyphen-separated groups. The first
/// character must be a letter; empty groups (leading, trailing, or doubled
/// hyphens) are rejected.
///
/// # Examples
///
/// ```ignore
/// assert!(is_kebab_case("use-input"));
/// assert!(!is_kebab_case("ApiUtils"));
/// assert!(!is_kebab_case("bad--name"));
/// ```
#[must_use]
pub fn is_kebab_case(name: &str) -> bool {
    if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
        return false;
    }
    name.split('-').all(|group| {
        !group.is_empty()
            && group
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    })
}

/// Portion of a file name before its first dot.
///
/// `button.test.js` → `button`, `types.d.ts` → `types`, `.eslintrc` → ``.
#[must_use]
pub fn stem_before_first_dot(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

/// Whether a file name is a public entry (`index` with or without a JS/TS
/// extension).
#[must_use]
pub fn is_index_file(file_name: &str) -> bool {
    matches!(
        file_name,
        "index" | "index.js" | "index.ts" | "index.jsx" | "index.tsx"
    )
}
