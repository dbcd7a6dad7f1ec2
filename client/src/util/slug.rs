//! URL slug normalization for categories and shops.

#[cfg(test)]
#[path = "slug_test.rs"]
mod slug_test;

/// Lower-case, collapse every run of non-alphanumerics into `-`, and trim
/// leading/trailing dashes.
pub fn slugify(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_dash = false;
    for ch in raw.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch);
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Use the given slug when it normalizes to something, otherwise derive one
/// from the name.
pub fn slug_or_from_name(slug: &str, name: &str) -> String {
    let normalized = slugify(slug);
    if normalized.is_empty() { slugify(name) } else { normalized }
}
