//! Public landing page: carousel, categories, products and shops.

use leptos::prelude::*;

use super::{ErrorBanner, load_into};
use crate::components::product_card::ProductCard;
use crate::net::api;
use crate::net::types::{Carousel, Category, Product, Shop};
use crate::state::carousel::visible_slides;
use crate::util::image::resolve_image_url;

const SLIDE_INTERVAL_MS: u64 = 5_000;

#[component]
pub fn HomePage() -> impl IntoView {
    let slides = RwSignal::new(Vec::<Carousel>::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let products = RwSignal::new(Vec::<Product>::new());
    let shops = RwSignal::new(Vec::<Shop>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let side_loading = RwSignal::new(false);
    let side_error = RwSignal::new(None::<String>);
    let active_slide = RwSignal::new(0_usize);

    let reload = Callback::new(move |()| {
        load_into(products, loading, error, "Gagal memuat produk", api::fetch_public_products);
        load_into(slides, side_loading, side_error, "Gagal memuat carousel", || async {
            api::fetch_carousel().await.map(|s| visible_slides(&s))
        });
        load_into(categories, side_loading, side_error, "Gagal memuat kategori", api::fetch_categories);
        load_into(shops, side_loading, side_error, "Gagal memuat toko", api::fetch_public_shops);
    });
    reload.run(());

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(SLIDE_INTERVAL_MS)).await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
                let count = slides.get_untracked().len();
                if count > 1 {
                    active_slide.update(|i| *i = (*i + 1) % count);
                }
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = SLIDE_INTERVAL_MS;

    view! {
        <div class="home-page">
            <section class="hero">
                <For
                    each=move || slides.get().into_iter().enumerate()
                    key=|(_, slide)| slide.id.clone()
                    children=move |(index, slide)| {
                        let image = resolve_image_url(Some(slide.image.as_str()));
                        let href = slide.link.clone().unwrap_or_else(|| "/nearby".to_owned());
                        view! {
                            <a class="hero__slide" class:hero__slide--active=move || active_slide.get() == index href=href>
                                <img src=image alt=slide.title.clone()/>
                                <div class="hero__caption">
                                    <h2>{slide.title.clone()}</h2>
                                    {slide.subtitle.clone().map(|s| view! { <p>{s}</p> })}
                                </div>
                            </a>
                        }
                    }
                />
                <a class="btn btn--primary hero__cta" href="/nearby">"Cari produk di sekitar Anda"</a>
            </section>

            <section class="home-section">
                <h2>"Kategori"</h2>
                <div class="chip-row">
                    <For
                        each=move || categories.get()
                        key=|c| c.id.clone()
                        children=|c| view! { <span class="chip">{c.name}</span> }
                    />
                </div>
            </section>

            <section class="home-section">
                <h2>"Produk Terbaru"</h2>
                <ErrorBanner error=error on_retry=reload/>
                <Show when=move || loading.get() && products.get().is_empty()>
                    <div class="page-loading">"Memuat produk..."</div>
                </Show>
                <div class="product-grid">
                    <For
                        each=move || products.get()
                        key=|p| p.id.clone()
                        children=|p| view! { <ProductCard product=p/> }
                    />
                </div>
            </section>

            <section class="home-section">
                <h2>"Toko Pilihan"</h2>
                <div class="shop-grid">
                    <For
                        each=move || shops.get()
                        key=|s| s.id.clone()
                        children=|s| {
                            let logo = resolve_image_url(s.logo.as_deref());
                            view! {
                                <div class="shop-tile">
                                    <img class="shop-tile__logo" src=logo alt=""/>
                                    <span class="shop-tile__name">{s.name}</span>
                                    <span class="shop-tile__address">{s.address.unwrap_or_default()}</span>
                                </div>
                            }
                        }
                    />
                </div>
            </section>
        </div>
    }
}
