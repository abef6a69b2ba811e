//! Slug normalization for path segments.

use unicode_normalization::UnicodeNormalization;

/// Normalizes free text into a slug usable as a single path segment.
///
/// - `allow_unicode = true`: NFKC, non-ASCII letters and digits kept.
/// - `allow_unicode = false`: NFKD, then every non-ASCII code point dropped
///   (so `é` becomes `e`).
///
/// Anything that is not alphanumeric, whitespace, `_` or `-` is removed. Runs
/// of whitespace and hyphens become one space, and leading/trailing spaces,
/// hyphens and underscores are trimmed. Case is preserved.
///
/// The result never contains `/`, `\` or NUL and `slugify(slugify(x)) == slugify(x)`.
pub fn slugify(value: &str, allow_unicode: bool) -> String {
    let normalized: String = if allow_unicode {
        value.nfkc().collect()
    } else {
        value.nfkd().filter(char::is_ascii).collect()
    };

    let mut out = String::with_capacity(normalized.len());
    let mut pending_sep = false;
    for c in normalized.chars() {
        if c.is_whitespace() || c == '-' {
            pending_sep = true;
        } else if c == '_' || is_kept(c, allow_unicode) {
            if pending_sep && !out.is_empty() {
                out.push(' ');
            }
            pending_sep = false;
            out.push(c);
        }
    }
    let trimmed = out.trim_matches(|c: char| c == ' ' || c == '_');

    if allow_unicode {
        // Dropping a character can leave two composable neighbours.
        trimmed.nfkc().collect()
    } else {
        trimmed.to_string()
    }
}

fn is_kept(c: char, allow_unicode: bool) -> bool {
    if allow_unicode {
        c.is_alphanumeric()
    } else {
        c.is_ascii_alphanumeric()
    }
}
