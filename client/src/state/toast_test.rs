use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "Tersimpan");
    let b = state.push(ToastKind::Error, "Gagal");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn push_evicts_oldest_beyond_limit() {
    let mut state = ToastState::default();
    for i in 0..(MAX_TOASTS + 2) {
        state.push(ToastKind::Info, format!("pesan {i}"));
    }
    assert_eq!(state.items.len(), MAX_TOASTS);
    assert_eq!(state.items[0].message, "pesan 2");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a");
    let b = state.push(ToastKind::Info, "b");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn kind_classes_are_distinct() {
    assert_ne!(ToastKind::Success.class(), ToastKind::Error.class());
    assert!(ToastKind::Info.class().starts_with("toast "));
}
