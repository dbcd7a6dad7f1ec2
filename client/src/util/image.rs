//! Image URL resolution for product photos, logos and slides.
//!
//! The backend stores uploads as paths relative to its own origin
//! (`/uploads/abc.jpg`), while seeded data may hold absolute URLs.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Scheme + host of a URL, without path.
fn origin(base: &str) -> &str {
    let Some(scheme_end) = base.find("://") else {
        return base.trim_end_matches('/');
    };
    let after_scheme = scheme_end + 3;
    match base[after_scheme..].find('/') {
        Some(path_start) => &base[..after_scheme + path_start],
        None => base.trim_end_matches('/'),
    }
}

/// Resolve a stored image reference against `api_base`.
pub fn resolve_image_url_with(api_base: &str, raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return PLACEHOLDER_IMAGE.to_owned();
    };
    if raw.starts_with("http://")
        || raw.starts_with("https://")
        || raw.starts_with("data:")
        || raw.starts_with("blob:")
        || raw.starts_with("//")
    {
        return raw.to_owned();
    }
    format!("{}/{}", origin(api_base), raw.trim_start_matches('/'))
}

/// Resolve against the configured API base URL.
pub fn resolve_image_url(raw: Option<&str>) -> String {
    resolve_image_url_with(crate::net::api::api_base_url(), raw)
}
