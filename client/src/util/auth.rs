//! Route access rules and the shared unauthenticated redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin and merchant areas are gated by role; buyer pages only need a
//! session. The backend still authorizes every call, these checks only keep
//! users away from screens they cannot use.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// What a route needs from the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    AnyUser,
    Role(Role),
}

/// Outcome of checking a session against a [`Requirement`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Session still loading; render nothing decisive yet.
    Pending,
    Allow,
    /// No session; send to the login page.
    Login,
    /// Logged in with the wrong role.
    Forbidden,
}

pub fn access_for(state: &AuthState, requirement: Requirement) -> Access {
    if state.loading {
        return Access::Pending;
    }
    let Some(user) = state.user.as_ref() else {
        return Access::Login;
    };
    match requirement {
        Requirement::AnyUser => Access::Allow,
        Requirement::Role(role) if user.role == role => Access::Allow,
        Requirement::Role(_) => Access::Forbidden,
    }
}

/// Requirement implied by a route path, if it is protected.
pub fn requirement_for_path(path: &str) -> Option<Requirement> {
    let first = path.trim_start_matches('/').split('/').next().unwrap_or_default();
    match first {
        "admin" => Some(Requirement::Role(Role::Admin)),
        "merchant" => Some(Requirement::Role(Role::Merchant)),
        "orders" | "profile" => Some(Requirement::AnyUser),
        _ => None,
    }
}

/// Landing route after login for each role.
pub fn home_for_role(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::Merchant => "/merchant",
        Role::Buyer => "/",
    }
}

/// `/login?next=...` with the return path percent-encoded.
pub fn login_redirect_path(current: &str) -> String {
    let mut encoded = String::with_capacity(current.len());
    for byte in current.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    format!("/login?next={encoded}")
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, requirement: Requirement, current_path: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if access_for(&state, requirement) == Access::Login {
            navigate(&login_redirect_path(&current_path), NavigateOptions::default());
        }
    });
}
