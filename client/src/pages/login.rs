//! Login page: Google OAuth through the backend.
//!
//! The backend sets the session cookie on its OAuth callback and redirects
//! back here; once `/users/me` resolves, the user is forwarded to `next` or to
//! their role's landing page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api::google_login_url;
use crate::state::auth::AuthState;
use crate::util::auth::home_for_role;

/// Only same-site absolute paths are accepted as a post-login target.
fn safe_next(raw: Option<String>) -> Option<String> {
    raw.filter(|n| n.starts_with('/') && !n.starts_with("//"))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        if let Some(user) = state.user {
            let next = safe_next(query.get_untracked().get("next"));
            let target = next.unwrap_or_else(|| home_for_role(user.role).to_owned());
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let href = google_login_url();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Lapak"</h1>
                <p class="login-card__subtitle">"Belanja dari toko-toko di sekitar Anda"</p>
                <a
                    href=href.clone()
                    class="login-button login-button--google"
                    on:click=move |ev| {
                        ev.prevent_default();
                        #[cfg(feature = "hydrate")]
                        {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href(&href);
                            }
                        }
                    }
                >
                    "Masuk dengan Google"
                </a>
                <p class="login-card__hint">
                    "Dengan masuk, Anda menyetujui syarat dan ketentuan Lapak."
                </p>
            </div>
        </div>
    }
}
