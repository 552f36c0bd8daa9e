//! Search term helpers.

/// Build an `ILIKE` pattern matching `term` as a case-insensitive substring.
///
/// - Surrounding whitespace is trimmed.
/// - Empty input returns `None` (no filter).
/// - `\`, `%`, and `_` are escaped so they match literally.
///
/// # Examples
///
/// ```
/// use catalog_core::search::like_pattern;
/// assert_eq!(like_pattern("pen"), Some("%pen%".to_string()));
/// assert_eq!(like_pattern("50%"), Some("%50\\%%".to_string()));
/// assert_eq!(like_pattern("  "), None);
/// ```
pub fn like_pattern(term: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }

    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}
