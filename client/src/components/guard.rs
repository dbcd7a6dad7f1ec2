//! Route guard wrapping protected pages.
//!
//! Anonymous users are redirected to `/login?next=...`; users with the wrong
//! role see a forbidden notice instead of the page.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::util::auth::{Access, Requirement, access_for, install_unauth_redirect};

#[component]
pub fn RequireAccess(requirement: Requirement, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let location = use_location();
    let current = location.pathname.get_untracked();
    install_unauth_redirect(auth, requirement, current, navigate);

    let access = move || access_for(&auth.get(), requirement);

    view! {
        {move || match access() {
            Access::Allow => children().into_any(),
            Access::Pending | Access::Login => {
                view! { <div class="page-loading">"Memuat sesi..."</div> }.into_any()
            }
            Access::Forbidden => {
                view! {
                    <div class="page-forbidden">
                        <h2>"Akses ditolak"</h2>
                        <p>"Akun Anda tidak memiliki izin untuk membuka halaman ini."</p>
                        <a class="btn" href="/">"Kembali ke beranda"</a>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
