//! Slug derivation

/// Derive a URL-safe slug from free text
///
/// Lower-cases ASCII letters, collapses every run of characters outside
/// `[a-z0-9]` into a single hyphen and trims hyphens from both ends.
/// Non-ASCII characters count as separators.
///
/// # Examples
/// ```
/// use artpipe_common::slugify;
///
/// assert_eq!(slugify("Composer & Autoload"), "composer-autoload");
/// assert_eq!(slugify("  PHP 8 en pratique!  "), "php-8-en-pratique");
/// assert_eq!(slugify("---"), "");
/// ```
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_hyphen = false;

    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
