//! Incoming orders for the merchant's shop with live notifications.

use leptos::prelude::*;

use super::MerchantNav;
use crate::components::modal::ConfirmDialog;
use crate::components::order_card::OrderCard;
use crate::net::api;
use crate::net::notify::{ConnectionStatus, NotifyScope, OrderEvent};
use crate::net::types::{Order, PaymentStatus};
use crate::pages::orders::{ConnectionIndicator, StatusTabs, run_order_action, start_notifier_when_ready};
use crate::pages::{ErrorBanner, load_into};
use crate::state::auth::AuthState;
use crate::state::orders::{OrderAction, Viewer, filter_orders};
use crate::state::toast::{ToastKind, ToastState, show_toast};
use crate::util::format::format_rupiah;

#[component]
pub fn MerchantOrdersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let orders = RwSignal::new(Vec::<Order>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let tab = RwSignal::new(None::<PaymentStatus>);
    let live = RwSignal::new(ConnectionStatus::default());
    let confirm = RwSignal::new(None::<(Order, OrderAction)>);

    let reload = Callback::new(move |()| {
        load_into(orders, loading, error, "Gagal memuat pesanan toko", api::fetch_shop_orders);
    });
    reload.run(());

    // New orders only carry a summary over the socket; refetch for full rows.
    let on_event = Callback::new(move |event: OrderEvent| match event {
        OrderEvent::NewOrder(order) => {
            show_toast(
                toasts,
                ToastKind::Info,
                format!("Pesanan baru #{} · {}", order.display_number(), format_rupiah(order.total_amount)),
            );
            reload.run(());
        }
        OrderEvent::OrderUpdated(_) => reload.run(()),
    });
    start_notifier_when_ready(
        move || auth.with(|a| a.shop_id().map(|id| NotifyScope::Shop(id.to_owned()))),
        live,
        on_event,
    );

    let on_action = Callback::new(move |(order, action): (Order, OrderAction)| {
        if action.confirm_prompt().is_some() {
            confirm.set(Some((order, action)));
        } else {
            run_order_action(order.id, action, busy, toasts, reload);
        }
    });
    let on_confirm = Callback::new(move |()| {
        if let Some((order, action)) = confirm.get_untracked() {
            confirm.set(None);
            run_order_action(order.id, action, busy, toasts, reload);
        }
    });

    let visible = move || filter_orders(&orders.get(), tab.get());

    view! {
        <div class="orders-page">
            <MerchantNav/>
            <header class="page-header">
                <h1>"Pesanan Masuk"</h1>
                <ConnectionIndicator status=live/>
            </header>
            <StatusTabs tab=tab orders=orders/>
            <ErrorBanner error=error on_retry=reload/>
            <Show when=move || loading.get() && orders.get().is_empty()>
                <div class="page-loading">"Memuat pesanan..."</div>
            </Show>
            <Show when=move || !loading.get() && visible().is_empty()>
                <div class="empty-state">"Tidak ada pesanan dengan status ini."</div>
            </Show>
            <div class="order-list">
                <For
                    each=visible
                    key=|o| (o.id.clone(), o.payment_status)
                    children=move |o| view! { <OrderCard order=o viewer=Viewer::Merchant on_action=on_action busy=busy/> }
                />
            </div>
            {move || {
                confirm
                    .get()
                    .map(|(order, action)| {
                        view! {
                            <ConfirmDialog
                                message=format!(
                                    "{} (#{})",
                                    action.confirm_prompt().unwrap_or_default(),
                                    order.display_number(),
                                )
                                confirm_label=action.label()
                                danger=true
                                on_confirm=on_confirm
                                on_cancel=Callback::new(move |()| confirm.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}
