//! Product tile used on the home, nearby and shop listings.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::util::format::{format_distance, format_rupiah};
use crate::util::image::resolve_image_url;

#[component]
pub fn ProductCard(product: Product, #[prop(optional)] show_distance: bool) -> impl IntoView {
    let href = format!("/products/{}", product.id);
    let image = resolve_image_url(product.cover_image());
    let shop_name = product.shop.as_ref().map(|s| s.name.clone()).unwrap_or_default();
    let distance = product.distance.filter(|_| show_distance).map(format_distance);
    let sold_out = product.stock <= 0;

    view! {
        <a class="product-card" class:product-card--sold-out=sold_out href=href>
            <img class="product-card__image" src=image alt=product.name.clone() loading="lazy"/>
            <div class="product-card__body">
                <span class="product-card__name">{product.name}</span>
                <span class="product-card__price">{format_rupiah(product.price)}</span>
                <span class="product-card__shop">{shop_name}</span>
                {distance.map(|d| view! { <span class="product-card__distance">{d}</span> })}
                <Show when=move || sold_out>
                    <span class="product-card__badge">"Stok habis"</span>
                </Show>
            </div>
        </a>
    }
}
