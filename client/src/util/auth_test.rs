use super::*;
use crate::net::types::User;

fn user_with(role: Role) -> User {
    User {
        id: "u1".to_owned(),
        name: "Siti".to_owned(),
        email: "siti@example.com".to_owned(),
        avatar: None,
        phone: None,
        role,
        shop: None,
    }
}

fn signed_in(role: Role) -> AuthState {
    AuthState { user: Some(user_with(role)), loading: false }
}

#[test]
fn loading_session_is_pending() {
    let state = AuthState { user: None, loading: true };
    assert_eq!(access_for(&state, Requirement::AnyUser), Access::Pending);
}

#[test]
fn anonymous_user_is_sent_to_login() {
    let state = AuthState { user: None, loading: false };
    assert_eq!(access_for(&state, Requirement::Role(Role::Admin)), Access::Login);
}

#[test]
fn wrong_role_is_forbidden() {
    assert_eq!(access_for(&signed_in(Role::Buyer), Requirement::Role(Role::Merchant)), Access::Forbidden);
    assert_eq!(access_for(&signed_in(Role::Merchant), Requirement::Role(Role::Admin)), Access::Forbidden);
}

#[test]
fn matching_role_and_any_user_allow() {
    assert_eq!(access_for(&signed_in(Role::Admin), Requirement::Role(Role::Admin)), Access::Allow);
    assert_eq!(access_for(&signed_in(Role::Buyer), Requirement::AnyUser), Access::Allow);
}

#[test]
fn requirements_follow_route_prefix() {
    assert_eq!(requirement_for_path("/admin/categories"), Some(Requirement::Role(Role::Admin)));
    assert_eq!(requirement_for_path("/merchant"), Some(Requirement::Role(Role::Merchant)));
    assert_eq!(requirement_for_path("/orders/o-1"), Some(Requirement::AnyUser));
    assert_eq!(requirement_for_path("/nearby"), None);
    assert_eq!(requirement_for_path("/"), None);
}

#[test]
fn login_redirect_encodes_next_path() {
    assert_eq!(login_redirect_path("/merchant/orders"), "/login?next=%2Fmerchant%2Forders");
}

#[test]
fn role_homes() {
    assert_eq!(home_for_role(Role::Admin), "/admin");
    assert_eq!(home_for_role(Role::Merchant), "/merchant");
    assert_eq!(home_for_role(Role::Buyer), "/");
}
