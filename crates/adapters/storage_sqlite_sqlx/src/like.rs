//! `LIKE` pattern building for case-insensitive substring search.
//!
//! Searchable columns have a `*_fold` copy holding [`fold`] of the value.
//! Patterns from [`contains`] are folded the same way and must be matched
//! against those copies, in statements declaring `ESCAPE '\'`.

/// Unicode lower-case form stored in the `*_fold` columns.
pub(crate) fn fold(value: Option<&str>) -> Option<String> {
    value.map(str::to_lowercase)
}

/// Pattern matching any folded value containing `term`, with `%`, `_` and
/// `\` in the term matched literally.
pub(crate) fn contains(term: &str) -> String {
    let term = term.to_lowercase();
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
