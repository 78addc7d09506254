//! URL-safe slug generation for category names.

/// Generate a URL-safe slug from a category name.
///
/// Converts text to lowercase, spells out `&` as `and`, and collapses every
/// run of characters outside `[a-z0-9/]` into a single hyphen, with no
/// leading or trailing hyphens.
///
/// # Examples
///
/// ```
/// use apidb::slugify;
///
/// assert_eq!(slugify("Animals"), "animals");
/// assert_eq!(slugify("Animals & Nature"), "animals-and-nature");
/// assert_eq!(slugify("News/Media"), "news/media");
/// ```
pub fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace('&', "and")
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '/'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
