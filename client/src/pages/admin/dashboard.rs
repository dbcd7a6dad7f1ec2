//! Admin overview counters.

use leptos::prelude::*;

use crate::components::navbar::AdminNav;
use crate::net::api;
use crate::net::types::{Carousel, Category, Shop, ShopStatus};
use crate::pages::merchant::dashboard::StatCard;
use crate::pages::{ErrorBanner, load_into};
use crate::state::categories::flatten_tree;
use crate::state::shops::count_with_status;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let shops = RwSignal::new(Vec::<Shop>::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let slides = RwSignal::new(Vec::<Carousel>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let aux_loading = RwSignal::new(false);
    let aux_error = RwSignal::new(None::<String>);

    let reload = Callback::new(move |()| {
        load_into(shops, loading, error, "Gagal memuat data toko", api::fetch_admin_shops);
        load_into(categories, aux_loading, aux_error, "Gagal memuat kategori", api::fetch_all_categories);
        load_into(slides, aux_loading, aux_error, "Gagal memuat carousel", api::fetch_carousel_admin);
    });
    reload.run(());

    let count = move |status: ShopStatus| Signal::derive(move || shops.with(|s| count_with_status(s, status)).to_string());

    view! {
        <div class="dashboard-page">
            <AdminNav/>
            <h1>"Ringkasan Admin"</h1>
            <ErrorBanner error=error on_retry=reload/>
            <ErrorBanner error=aux_error on_retry=reload/>
            <div class="stat-grid">
                <StatCard label="Total toko" value=Signal::derive(move || shops.with(Vec::len).to_string())/>
                <StatCard label="Menunggu verifikasi" value=count(ShopStatus::Pending)/>
                <StatCard label="Toko aktif" value=count(ShopStatus::Active)/>
                <StatCard label="Ditangguhkan" value=count(ShopStatus::Suspended)/>
                <StatCard
                    label="Kategori"
                    value=Signal::derive(move || categories.with(|c| flatten_tree(c).len()).to_string())
                />
                <StatCard
                    label="Slide aktif"
                    value=Signal::derive(move || slides.with(|s| s.iter().filter(|c| c.is_active).count()).to_string())
                />
            </div>
            <Show when=move || shops.with(|s| count_with_status(s, ShopStatus::Pending) > 0)>
                <a class="callout" href="/admin/shops">"Ada toko yang menunggu verifikasi. Tinjau sekarang."</a>
            </Show>
        </div>
    }
}
