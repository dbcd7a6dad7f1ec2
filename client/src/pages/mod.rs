//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch on mount, modal state,
//! submit, toast, refetch) and delegates rendering details to `components`
//! and rules to `state`.

pub mod admin;
pub mod home;
pub mod login;
pub mod merchant;
pub mod nearby;
pub mod orders;
pub mod product_detail;
pub mod profile;

use leptos::prelude::*;

use crate::net::api::ApiError;

/// Fetch into `target` in the browser. Failures are logged and stored in
/// `error`; the previous value of `target` is kept.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub(crate) fn load_into<T, F, Fut>(
    target: RwSignal<T>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    fallback: &'static str,
    fetch: F,
) where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    loading.set(true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match fetch().await {
            Ok(value) => {
                target.set(value);
                error.set(None);
            }
            Err(e) => {
                leptos::logging::warn!("{fallback}: {e}");
                error.set(Some(e.user_message(fallback)));
            }
        }
        loading.set(false);
    });
}

/// Inline error banner with a retry button.
#[component]
pub(crate) fn ErrorBanner(error: RwSignal<Option<String>>, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-banner" role="alert">
                <span>{move || error.get().unwrap_or_default()}</span>
                <button class="btn" on:click=move |_| on_retry.run(())>"Coba lagi"</button>
            </div>
        </Show>
    }
}
