//! Status pills for orders and shops.

use leptos::prelude::*;

use crate::net::types::{PaymentStatus, ShopStatus};
use crate::util::status::{order_status_class, order_status_label, shop_status_class, shop_status_label};

#[component]
pub fn OrderStatusBadge(status: PaymentStatus) -> impl IntoView {
    view! { <span class=order_status_class(status)>{order_status_label(status)}</span> }
}

#[component]
pub fn ShopStatusBadge(status: ShopStatus) -> impl IntoView {
    view! { <span class=shop_status_class(status)>{shop_status_label(status)}</span> }
}
