use super::*;
use crate::net::types::ShopRef;

fn merchant() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Pak Budi".to_owned(),
        email: "budi@example.com".to_owned(),
        avatar: None,
        phone: None,
        role: Role::Merchant,
        shop: Some(ShopRef { id: "s-9".to_owned(), name: "Toko Budi".to_owned(), ..ShopRef::default() }),
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.role().is_none());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

// =============================================================
// Accessors
// =============================================================

#[test]
fn merchant_exposes_shop_and_role() {
    let state = AuthState { user: Some(merchant()), loading: false };
    assert_eq!(state.role(), Some(Role::Merchant));
    assert_eq!(state.shop_id(), Some("s-9"));
    assert_eq!(state.user_id(), Some("u-1"));
}

#[test]
fn blank_shop_id_is_treated_as_missing() {
    let mut user = merchant();
    user.shop = Some(ShopRef::default());
    let state = AuthState { user: Some(user), loading: false };
    assert_eq!(state.shop_id(), None);
}
