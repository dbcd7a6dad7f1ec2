//! Merchant area: shop dashboard, product catalogue and incoming orders.

pub mod dashboard;
pub mod orders;
pub mod products;

use leptos::prelude::*;

/// Secondary tab strip for the merchant area.
#[component]
pub fn MerchantNav() -> impl IntoView {
    view! {
        <nav class="subnav">
            <a href="/merchant">"Ringkasan"</a>
            <a href="/merchant/products">"Produk"</a>
            <a href="/merchant/orders">"Pesanan"</a>
        </nav>
    }
}
