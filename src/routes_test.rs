use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

fn test_app(site_root: PathBuf) -> Router {
    let options = LeptosOptions::builder().output_name("lapak").site_root("target/site").build();
    app(options, site_root)
}

fn temp_site(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("lapak-routes-{name}-{}", std::process::id()));
    std::fs::create_dir_all(root.join("pkg")).unwrap();
    root
}

#[tokio::test]
async fn healthz_returns_ok() {
    let response = test_app(temp_site("healthz"))
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn pkg_serves_compiled_assets() {
    let root = temp_site("pkg");
    std::fs::write(root.join("pkg").join("lapak.css"), "body { margin: 0; }").unwrap();

    let response = test_app(root)
        .oneshot(Request::builder().uri("/pkg/lapak.css").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/css"), "{content_type}");
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let response = test_app(temp_site("missing"))
        .oneshot(Request::builder().uri("/pkg/nope.wasm").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
