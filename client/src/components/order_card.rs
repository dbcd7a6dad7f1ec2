//! Order summary card shared by the merchant and buyer order lists.
//!
//! The card renders only the actions [`available_actions`] allows for the
//! order's current status and hands the chosen one back to the page, which
//! owns confirmation, uploads and refetching.

use leptos::prelude::*;

use crate::components::status_badge::OrderStatusBadge;
use crate::net::types::Order;
use crate::state::orders::{ActionKind, OrderAction, Viewer, available_actions};
use crate::util::format::{format_datetime, format_rupiah};
use crate::util::image::resolve_image_url;

#[component]
pub fn OrderCard(
    order: Order,
    viewer: Viewer,
    on_action: Callback<(Order, OrderAction)>,
    #[prop(into, optional)] busy: Signal<bool>,
) -> impl IntoView {
    let actions = available_actions(viewer, order.payment_status);
    let counterpart = match viewer {
        Viewer::Merchant => order.buyer.as_ref().map(|b| format!("Pembeli: {}", b.name)),
        Viewer::Buyer => order.shop.as_ref().map(|s| format!("Toko: {}", s.name)),
    };
    let address = order.address.as_ref().map(crate::net::types::Address::one_line).filter(|a| !a.is_empty());
    let proof = order.payment_proof.clone().map(|p| resolve_image_url(Some(p.as_str())));
    let items = order.items.clone();

    let buttons = actions
        .into_iter()
        .map(|action| {
            let order = order.clone();
            let class = match action.kind() {
                ActionKind::Advance => "btn btn--primary",
                ActionKind::Abort => "btn btn--danger",
            };
            view! {
                <button class=class disabled=move || busy.get() on:click=move |_| on_action.run((order.clone(), action))>
                    {action.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <article class="order-card">
            <header class="order-card__header">
                <span class="order-card__number">{format!("#{}", order.display_number())}</span>
                <OrderStatusBadge status=order.payment_status/>
            </header>
            <div class="order-card__meta">
                <span>{format_datetime(&order.created_at)}</span>
                {counterpart.map(|c| view! { <span>{c}</span> })}
            </div>
            <ul class="order-card__items">
                {items
                    .into_iter()
                    .map(|item| {
                        let name = item.product.as_ref().map(|p| p.name.clone()).unwrap_or_else(|| item.product_id.clone());
                        view! {
                            <li class="order-card__item">
                                <span>{format!("{name} × {}", item.quantity)}</span>
                                <span>{format_rupiah(item.subtotal())}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            {address.map(|a| view! { <p class="order-card__address">{a}</p> })}
            {proof.map(|src| {
                view! {
                    <a class="order-card__proof" href=src target="_blank" rel="noopener">
                        "Lihat bukti pembayaran"
                    </a>
                }
            })}
            <footer class="order-card__footer">
                <div class="order-card__total">
                    <span>"Total"</span>
                    <strong>{format_rupiah(order.total_amount)}</strong>
                </div>
                <div class="order-card__actions">{buttons}</div>
            </footer>
        </article>
    }
}
