//! Merchant dashboard with order and catalogue summary cards.

use leptos::prelude::*;

use super::MerchantNav;
use crate::net::api;
use crate::net::types::{Order, Product};
use crate::pages::{ErrorBanner, load_into};
use crate::state::auth::AuthState;
use crate::state::orders::OrderStats;
use crate::state::products::out_of_stock;
use crate::util::format::format_rupiah;

#[component]
pub fn MerchantDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let orders = RwSignal::new(Vec::<Order>::new());
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let reload = Callback::new(move |()| {
        load_into(orders, loading, error, "Gagal memuat pesanan toko", api::fetch_shop_orders);
        load_into(products, loading, error, "Gagal memuat produk", api::fetch_my_products);
    });
    reload.run(());

    let stats = Memo::new(move |_| OrderStats::from_orders(&orders.get()));
    let shop_name = move || {
        auth.get().user.and_then(|u| u.shop).map(|s| s.name).unwrap_or_else(|| "Toko Anda".to_owned())
    };

    view! {
        <div class="dashboard-page">
            <MerchantNav/>
            <header class="page-header">
                <h1>{shop_name}</h1>
            </header>
            <ErrorBanner error=error on_retry=reload/>
            <div class="stat-grid">
                <StatCard label="Pendapatan" value=Signal::derive(move || format_rupiah(stats.get().revenue))/>
                <StatCard label="Total Pesanan" value=Signal::derive(move || stats.get().total.to_string())/>
                <StatCard label="Menunggu Pembayaran" value=Signal::derive(move || stats.get().pending.to_string())/>
                <StatCard label="Sedang Diproses" value=Signal::derive(move || stats.get().in_progress.to_string())/>
                <StatCard label="Selesai" value=Signal::derive(move || stats.get().completed.to_string())/>
                <StatCard label="Produk" value=Signal::derive(move || products.get().len().to_string())/>
                <StatCard label="Stok Habis" value=Signal::derive(move || out_of_stock(&products.get()).to_string())/>
            </div>
            <div class="dashboard-page__links">
                <a class="btn btn--primary" href="/merchant/orders">"Kelola Pesanan"</a>
                <a class="btn" href="/merchant/products">"Kelola Produk"</a>
            </div>
        </div>
    }
}

/// One summary number with its caption.
#[component]
pub fn StatCard(#[prop(into)] label: String, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <strong class="stat-card__value">{move || value.get()}</strong>
        </div>
    }
}
