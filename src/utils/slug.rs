//! URL slug checks for content entries.
//!
//! Entry slugs come from file stems and end up verbatim in links such as
//! `/blog/<slug>/`, so they must already be URL-safe.

/// Whether `slug` is non-empty lowercase ASCII alphanumerics joined by
/// single `-` or `_`, with no leading or trailing separator.
pub fn is_url_safe(slug: &str) -> bool {
    let bytes = slug.as_bytes();
    let (Some(first), Some(last)) = (bytes.first(), bytes.last()) else {
        return false;
    };
    if !first.is_ascii_alphanumeric() || !last.is_ascii_alphanumeric() {
        return false;
    }
    bytes.windows(2).all(|w| !(is_separator(w[0]) && is_separator(w[1])))
        && bytes
            .iter()
            .all(|&b| b.is_ascii_lowercase() || b.is_ascii_digit() || is_separator(b))
}

/// Derive a URL-safe slug from arbitrary text.
///
/// Non-ASCII is transliterated (`"Café Ünïcode"` → `"cafe-unicode"`),
/// everything that is not alphanumeric collapses into a single `-`.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode::deunicode(text);
    let mut out = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

#[inline]
const fn is_separator(b: u8) -> bool {
    b == b'-' || b == b'_'
}
