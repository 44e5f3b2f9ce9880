//! Name joining, clamping, and word-form helpers.
//!
//! Every function here is pure and total: no error conditions, no locale
//! handling, no trimming beyond what is documented.

use std::cmp;

/// Joins optional name parts into a single display string.
///
/// `first` contributes as-is. `middle` and `last`, when present and
/// non-empty, each contribute a single leading space followed by the part.
/// An absent or empty part contributes nothing.
///
/// Note the asymmetry: when `first` is missing but `middle` is present, the
/// result begins with a space. Callers that care should trim before testing
/// for emptiness.
///
/// # Example
///
/// ```rust
/// use wording::format_name;
///
/// assert_eq!(format_name(Some("John"), Some("Q"), Some("Doe")), "John Q Doe");
/// assert_eq!(format_name(Some("John"), None, Some("Doe")), "John Doe");
/// assert_eq!(format_name(None, None, None), "");
/// assert_eq!(format_name(None, Some("Middle"), None), " Middle");
/// ```
pub fn format_name(first: Option<&str>, middle: Option<&str>, last: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(first) = first {
        out.push_str(first);
    }
    for part in [middle, last] {
        match part {
            Some(part) if !part.is_empty() => {
                out.push(' ');
                out.push_str(part);
            }
            _ => {}
        }
    }
    out
}

/// Constrains `value` into the closed interval `[min, max]`.
///
/// Computed as `max(min, min(value, max))`. Unlike [`Ord::clamp`] this never
/// panics: when `min > max` the result is whatever the two nested
/// comparisons produce (namely `min`), with no special guard.
///
/// # Example
///
/// ```rust
/// use wording::clamp;
///
/// assert_eq!(clamp(5, 0, 10), 5);
/// assert_eq!(clamp(-5, 0, 10), 0);
/// assert_eq!(clamp(15, 0, 10), 10);
/// ```
pub fn clamp<T: Ord>(value: T, min: T, max: T) -> T {
    cmp::max(min, cmp::min(value, max))
}

/// Returns `singular` when `count` is exactly 1, otherwise `plural`.
///
/// Zero and negative counts both select the plural form.
///
/// # Example
///
/// ```rust
/// use wording::pluralize;
///
/// assert_eq!(pluralize(1, "click", "clicks"), "click");
/// assert_eq!(pluralize(0, "click", "clicks"), "clicks");
/// assert_eq!(pluralize(-3, "click", "clicks"), "clicks");
/// ```
pub fn pluralize<'a>(count: i32, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Uppercases the first character and lowercases the rest.
///
/// An empty string comes back empty.
///
/// # Example
///
/// ```rust
/// use wording::capitalize;
///
/// assert_eq!(capitalize("hELLO"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.extend(chars.flat_map(char::to_lowercase));
            out
        }
        None => String::new(),
    }
}

/// Shortens `s` to at most `max_len` characters, ending with `"..."`.
///
/// See [`truncate_with`] for a custom suffix.
pub fn truncate(s: &str, max_len: usize) -> String {
    truncate_with(s, max_len, "...")
}

/// Shortens `s` to at most `max_len` characters, ending with `suffix`.
///
/// Strings that already fit are returned unchanged. The suffix counts
/// against the budget, so the kept prefix is `max_len - suffix` characters.
/// Lengths are measured in `char`s, not bytes.
///
/// # Example
///
/// ```rust
/// use wording::truncate_with;
///
/// assert_eq!(truncate_with("hello world", 8, "..."), "hello...");
/// assert_eq!(truncate_with("hello", 10, "..."), "hello");
/// ```
pub fn truncate_with(s: &str, max_len: usize, suffix: &str) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let keep = max_len.saturating_sub(suffix.chars().count());
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(suffix);
    out
}
