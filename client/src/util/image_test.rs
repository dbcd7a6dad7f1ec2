use super::*;

#[test]
fn relative_paths_join_api_origin() {
    assert_eq!(
        resolve_image_url_with("https://api.lapak.id/api", Some("/uploads/a.jpg")),
        "https://api.lapak.id/uploads/a.jpg"
    );
    assert_eq!(
        resolve_image_url_with("http://localhost:4000/api/", Some("uploads/b.png")),
        "http://localhost:4000/uploads/b.png"
    );
}

#[test]
fn absolute_and_inline_urls_pass_through() {
    for raw in ["https://cdn.test/x.jpg", "http://cdn.test/y.jpg", "data:image/png;base64,AAAA", "blob:abc"] {
        assert_eq!(resolve_image_url_with("http://api.test/api", Some(raw)), raw);
    }
}

#[test]
fn missing_images_use_placeholder() {
    assert_eq!(resolve_image_url_with("http://api.test", None), PLACEHOLDER_IMAGE);
    assert_eq!(resolve_image_url_with("http://api.test", Some("   ")), PLACEHOLDER_IMAGE);
}

#[test]
fn base_without_path_is_its_own_origin() {
    assert_eq!(resolve_image_url_with("http://api.test", Some("/u/c.jpg")), "http://api.test/u/c.jpg");
}
