//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Populated once at startup from `/users/me` (the backend session cookie is
//! set by the Google OAuth callback). Used by route guards and role-aware
//! navigation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::{Role, User};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Shop id of a logged-in merchant.
    pub fn shop_id(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|u| u.shop.as_ref())
            .map(|s| s.id.as_str())
            .filter(|id| !id.is_empty())
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }
}

/// Load the session user into `auth`. A failed lookup means "logged out".
pub fn load_session(auth: RwSignal<AuthState>) {
    auth.update(|a| a.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = match crate::net::api::fetch_current_user().await {
            Ok(user) => Some(user),
            Err(e) => {
                leptos::logging::log!("no active session: {e}");
                None
            }
        };
        auth.update(|a| {
            a.user = user;
            a.loading = false;
        });
    });
}

/// End the backend session and clear local state.
pub fn sign_out(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = crate::net::api::logout().await {
            leptos::logging::warn!("logout failed: {e}");
        }
        auth.update(|a| a.user = None);
        if let Some(w) = web_sys::window() {
            let _ = w.location().set_href("/login");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    auth.update(|a| a.user = None);
}
