//! Top navigation with role-aware links and the session menu.

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::auth::{AuthState, sign_out};
use crate::util::image::resolve_image_url;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let role = move || auth.get().role();
    let user_name = move || auth.get().user.map(|u| u.name).unwrap_or_default();
    let avatar = move || resolve_image_url(auth.get().user.and_then(|u| u.avatar).as_deref());

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"Lapak"</a>
            <div class="navbar__links">
                <a href="/nearby">"Terdekat"</a>
                <Show when=move || role().is_some()>
                    <a href="/orders">"Pesanan Saya"</a>
                </Show>
                <Show when=move || role() == Some(Role::Merchant)>
                    <a href="/merchant">"Toko Saya"</a>
                    <a href="/merchant/products">"Produk"</a>
                    <a href="/merchant/orders">"Pesanan Masuk"</a>
                </Show>
                <Show when=move || role() == Some(Role::Admin)>
                    <a href="/admin">"Admin"</a>
                </Show>
            </div>
            <div class="navbar__session">
                <Show
                    when=move || role().is_some()
                    fallback=move || {
                        view! {
                            <Show when=move || !auth.get().loading>
                                <a class="btn btn--primary" href="/login">"Masuk"</a>
                            </Show>
                        }
                    }
                >
                    <a class="navbar__profile" href="/profile">
                        <img class="navbar__avatar" src=avatar alt=""/>
                        <span>{user_name}</span>
                    </a>
                    <button class="btn" on:click=move |_| sign_out(auth)>"Keluar"</button>
                </Show>
            </div>
        </nav>
    }
}

/// Secondary tab strip for the admin area.
#[component]
pub fn AdminNav() -> impl IntoView {
    view! {
        <nav class="subnav">
            <a href="/admin">"Ringkasan"</a>
            <a href="/admin/shops">"Toko"</a>
            <a href="/admin/categories">"Kategori"</a>
            <a href="/admin/carousel">"Carousel"</a>
        </nav>
    }
}
