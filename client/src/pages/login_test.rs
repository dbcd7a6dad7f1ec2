use super::*;

#[test]
fn safe_next_accepts_local_paths() {
    assert_eq!(safe_next(Some("/orders".to_owned())).as_deref(), Some("/orders"));
    assert_eq!(safe_next(Some("/merchant/orders?tab=paid".to_owned())).as_deref(), Some("/merchant/orders?tab=paid"));
}

#[test]
fn safe_next_rejects_foreign_targets() {
    assert_eq!(safe_next(None), None);
    assert_eq!(safe_next(Some(String::new())), None);
    assert_eq!(safe_next(Some("https://evil.test/".to_owned())), None);
    assert_eq!(safe_next(Some("//evil.test/path".to_owned())), None);
    assert_eq!(safe_next(Some("orders".to_owned())), None);
}
