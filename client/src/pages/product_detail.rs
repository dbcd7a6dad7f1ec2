//! Product detail page with gallery, shop info and share.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::ErrorBanner;
use crate::net::types::Product;
use crate::state::toast::{ToastKind, ToastState, show_toast};
use crate::util::format::{format_distance, format_rupiah};
use crate::util::image::resolve_image_url;

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let product = RwSignal::new(None::<Product>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let selected_image = RwSignal::new(0_usize);

    let product_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let reload = Callback::new(move |()| {
        let id = product_id();
        selected_image.set(0);
        super::load_into(product, loading, error, "Gagal memuat produk", move || async move {
            crate::net::api::fetch_product(&id).await.map(Some)
        });
    });
    Effect::new(move || {
        let _ = product_id();
        reload.run(());
    });

    let on_share = move |_| {
        let Some(p) = product.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::util::share::{current_origin, product_link, share_link};
            let url = product_link(&current_origin(), &p.id);
            let outcome = share_link(&p.name, &url).await;
            if let Some(message) = outcome.toast_message() {
                let kind = if outcome == crate::util::share::ShareOutcome::Failed { ToastKind::Error } else { ToastKind::Success };
                show_toast(toasts, kind, message);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = p;
            show_toast(toasts, ToastKind::Info, "Bagikan hanya tersedia di browser.");
        }
    };

    view! {
        <div class="product-detail">
            <ErrorBanner error=error on_retry=reload/>
            <Show when=move || loading.get() && product.get().is_none()>
                <div class="page-loading">"Memuat produk..."</div>
            </Show>
            {move || {
                product
                    .get()
                    .map(|p| {
                        let images: Vec<String> = if p.images.is_empty() {
                            vec![resolve_image_url(None)]
                        } else {
                            p.images.iter().map(|i| resolve_image_url(Some(i.as_str()))).collect()
                        };
                        let main_images = images.clone();
                        let main = move || {
                            main_images.get(selected_image.get()).cloned().unwrap_or_else(|| resolve_image_url(None))
                        };
                        let shop = p.shop.clone();
                        let category = p.category.clone().map(|c| c.name);
                        let in_stock = p.stock > 0;
                        view! {
                            <div class="product-detail__gallery">
                                <img class="product-detail__main-image" src=main alt=p.name.clone()/>
                                <div class="product-detail__thumbs">
                                    {images
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, src)| {
                                            view! {
                                                <button
                                                    class="product-detail__thumb"
                                                    class:product-detail__thumb--active=move || selected_image.get() == index
                                                    on:click=move |_| selected_image.set(index)
                                                >
                                                    <img src=src alt=""/>
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                            <div class="product-detail__info">
                                <h1>{p.name.clone()}</h1>
                                {category.map(|c| view! { <span class="chip">{c}</span> })}
                                <p class="product-detail__price">{format_rupiah(p.price)}</p>
                                <p class="product-detail__stock" class:product-detail__stock--empty=!in_stock>
                                    {if in_stock { format!("Stok: {}", p.stock) } else { "Stok habis".to_owned() }}
                                </p>
                                {p.distance.map(|d| view! { <p class="product-detail__distance">{format_distance(d)}</p> })}
                                <p class="product-detail__description">{p.description.clone().unwrap_or_default()}</p>
                                {shop
                                    .map(|s| {
                                        view! {
                                            <div class="product-detail__shop">
                                                <img src=resolve_image_url(s.logo.as_deref()) alt=""/>
                                                <div>
                                                    <strong>{s.name}</strong>
                                                    <span>{s.address.unwrap_or_default()}</span>
                                                </div>
                                            </div>
                                        }
                                    })}
                                <button class="btn" on:click=on_share>"Bagikan"</button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
