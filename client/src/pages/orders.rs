//! Buyer order history with payment-proof upload, cancel and receive.
//!
//! SYSTEM CONTEXT
//! ==============
//! Also hosts the pieces the merchant order page shares: running an order
//! action with toast + refetch, and starting the live notifier once the
//! session scope is known.

use leptos::prelude::*;

use super::{ErrorBanner, load_into};
use crate::components::modal::{ConfirmDialog, Modal};
use crate::components::order_card::OrderCard;
use crate::components::status_badge::OrderStatusBadge;
use crate::net::api;
use crate::net::notify::{ConnectionStatus, NotifierHandle, NotifyScope, OrderEvent, spawn_order_notifier};
use crate::net::types::{Order, PaymentStatus};
use crate::state::auth::AuthState;
use crate::state::orders::{OrderAction, OrderStats, Viewer, apply_event, filter_orders, send_action};
use crate::state::toast::{ToastKind, ToastState, show_toast};
use crate::util::format::{format_datetime, format_rupiah};
use crate::util::status::order_status_label;

/// Run a non-upload action, toast the outcome and refetch.
pub(crate) fn run_order_action(
    order_id: String,
    action: OrderAction,
    busy: RwSignal<bool>,
    toasts: RwSignal<ToastState>,
    reload: Callback<()>,
) {
    busy.set(true);
    leptos::task::spawn_local(async move {
        match send_action(&order_id, action.request()).await {
            Ok(_) => show_toast(toasts, ToastKind::Success, action.success_message()),
            Err(e) => {
                leptos::logging::warn!("order action {action:?} on {order_id} failed: {e}");
                show_toast(toasts, ToastKind::Error, e.user_message("Gagal memperbarui pesanan"));
            }
        }
        busy.set(false);
        reload.run(());
    });
}

/// Start the live notifier once `scope` resolves; stop it on unmount.
pub(crate) fn start_notifier_when_ready(
    scope: impl Fn() -> Option<NotifyScope> + Send + Sync + 'static,
    status: RwSignal<ConnectionStatus>,
    on_event: Callback<OrderEvent>,
) {
    let handle = StoredValue::new(None::<NotifierHandle>);
    Effect::new(move || {
        if handle.with_value(Option::is_some) {
            return;
        }
        if let Some(scope) = scope() {
            handle.set_value(Some(spawn_order_notifier(scope, status, on_event)));
        }
    });
    on_cleanup(move || {
        if let Some(h) = handle.get_value() {
            h.stop();
        }
    });
}

/// Status tabs shared by both order pages.
#[component]
pub(crate) fn StatusTabs(tab: RwSignal<Option<PaymentStatus>>, orders: RwSignal<Vec<Order>>) -> impl IntoView {
    let count = move |status: Option<PaymentStatus>| {
        orders.with(|list| status.map_or(list.len(), |s| OrderStats::count_for(list, s)))
    };
    let options = std::iter::once(None).chain(PaymentStatus::ALL.into_iter().map(Some)).collect::<Vec<_>>();

    view! {
        <div class="tabs" role="tablist">
            {options
                .into_iter()
                .map(|status| {
                    let label = status.map_or("Semua", order_status_label);
                    view! {
                        <button
                            class="tabs__tab"
                            class:tabs__tab--active=move || tab.get() == status
                            on:click=move |_| tab.set(status)
                        >
                            {label}
                            <span class="tabs__count">{move || count(status)}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub(crate) fn ConnectionIndicator(status: RwSignal<ConnectionStatus>) -> impl IntoView {
    view! {
        <span
            class="live-indicator"
            class:live-indicator--on=move || status.get() == ConnectionStatus::Connected
        >
            {move || status.get().label()}
        </span>
    }
}

#[component]
pub fn BuyerOrdersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let orders = RwSignal::new(Vec::<Order>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let tab = RwSignal::new(None::<PaymentStatus>);
    let live = RwSignal::new(ConnectionStatus::default());
    let confirm = RwSignal::new(None::<(Order, OrderAction)>);
    let upload_for = RwSignal::new(None::<Order>);
    let detail = RwSignal::new(None::<Order>);
    let proof_input = NodeRef::<leptos::html::Input>::new();

    let reload = Callback::new(move |()| {
        load_into(orders, loading, error, "Gagal memuat pesanan", api::fetch_my_orders);
    });
    reload.run(());

    let on_event = Callback::new(move |event: OrderEvent| {
        let number = event.order().display_number().to_owned();
        let status = order_status_label(event.order().payment_status);
        orders.update(|list| apply_event(list, &event));
        show_toast(toasts, ToastKind::Info, format!("Pesanan #{number}: {status}"));
    });
    start_notifier_when_ready(
        move || auth.with(|a| a.user_id().map(|id| NotifyScope::Buyer(id.to_owned()))),
        live,
        on_event,
    );

    let on_action = Callback::new(move |(order, action): (Order, OrderAction)| match action {
        OrderAction::UploadProof => upload_for.set(Some(order)),
        _ if action.confirm_prompt().is_some() => confirm.set(Some((order, action))),
        _ => run_order_action(order.id, action, busy, toasts, reload),
    });

    let on_confirm = Callback::new(move |()| {
        if let Some((order, action)) = confirm.get_untracked() {
            confirm.set(None);
            run_order_action(order.id, action, busy, toasts, reload);
        }
    });

    let on_upload = Callback::new(move |()| {
        let Some(order) = upload_for.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = proof_input.get_untracked().and_then(|i| i.files()).and_then(|f| f.get(0)) else {
                show_toast(toasts, ToastKind::Error, "Pilih file bukti pembayaran terlebih dahulu");
                return;
            };
            busy.set(true);
            leptos::task::spawn_local(async move {
                match api::upload_payment_proof(&order.id, &file).await {
                    Ok(_) => {
                        upload_for.set(None);
                        show_toast(toasts, ToastKind::Success, OrderAction::UploadProof.success_message());
                    }
                    Err(e) => {
                        leptos::logging::warn!("proof upload for {} failed: {e}", order.id);
                        show_toast(toasts, ToastKind::Error, e.user_message("Gagal mengunggah bukti pembayaran"));
                    }
                }
                busy.set(false);
                reload.run(());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (order, proof_input);
    });

    let open_detail = move |id: String| {
        leptos::task::spawn_local(async move {
            match api::fetch_order(&id).await {
                Ok(order) => detail.set(Some(order)),
                Err(e) => show_toast(toasts, ToastKind::Error, e.user_message("Gagal memuat detail pesanan")),
            }
        });
    };

    let visible = move || filter_orders(&orders.get(), tab.get());

    view! {
        <div class="orders-page">
            <header class="page-header">
                <h1>"Pesanan Saya"</h1>
                <ConnectionIndicator status=live/>
            </header>
            <StatusTabs tab=tab orders=orders/>
            <ErrorBanner error=error on_retry=reload/>
            <Show when=move || loading.get() && orders.get().is_empty()>
                <div class="page-loading">"Memuat pesanan..."</div>
            </Show>
            <Show when=move || !loading.get() && visible().is_empty()>
                <div class="empty-state">"Belum ada pesanan di sini."</div>
            </Show>
            <div class="order-list">
                <For
                    each=visible
                    key=|o| (o.id.clone(), o.payment_status)
                    children=move |o| {
                        let id = o.id.clone();
                        view! {
                            <div class="order-list__item">
                                <OrderCard order=o viewer=Viewer::Buyer on_action=on_action busy=busy/>
                                <button class="btn btn--link" on:click=move |_| open_detail(id.clone())>
                                    "Lihat detail"
                                </button>
                            </div>
                        }
                    }
                />
            </div>

            {move || {
                confirm
                    .get()
                    .map(|(_, action)| {
                        view! {
                            <ConfirmDialog
                                message=action.confirm_prompt().unwrap_or_default()
                                confirm_label=action.label()
                                danger=true
                                on_confirm=on_confirm
                                on_cancel=Callback::new(move |()| confirm.set(None))
                            />
                        }
                    })
            }}

            <Show when=move || upload_for.get().is_some()>
                <Modal title="Unggah Bukti Pembayaran" on_close=Callback::new(move |()| upload_for.set(None))>
                    <p>
                        {move || {
                            upload_for
                                .get()
                                .map(|o| format!("Pesanan #{} · {}", o.display_number(), format_rupiah(o.total_amount)))
                                .unwrap_or_default()
                        }}
                    </p>
                    <input type="file" accept="image/*" node_ref=proof_input/>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| upload_for.set(None)>"Batal"</button>
                        <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| on_upload.run(())>
                            "Unggah"
                        </button>
                    </div>
                </Modal>
            </Show>

            {move || {
                detail
                    .get()
                    .map(|o| {
                        view! {
                            <Modal title=format!("Pesanan #{}", o.display_number()) on_close=Callback::new(move |()| detail.set(None))>
                                <OrderDetail order=o/>
                            </Modal>
                        }
                    })
            }}
        </div>
    }
}

/// Full breakdown shown in the detail modal.
#[component]
fn OrderDetail(order: Order) -> impl IntoView {
    let subtotal: f64 = order.items.iter().map(crate::net::types::OrderItem::subtotal).sum();
    view! {
        <div class="order-detail">
            <div class="order-detail__row">
                <span>"Status"</span>
                <OrderStatusBadge status=order.payment_status/>
            </div>
            <div class="order-detail__row">
                <span>"Tanggal"</span>
                <span>{format_datetime(&order.created_at)}</span>
            </div>
            <div class="order-detail__row">
                <span>"Subtotal"</span>
                <span>{format_rupiah(subtotal)}</span>
            </div>
            <div class="order-detail__row">
                <span>"Ongkos kirim"</span>
                <span>{format_rupiah(order.shipping_cost)}</span>
            </div>
            <div class="order-detail__row order-detail__row--total">
                <span>"Total"</span>
                <strong>{format_rupiah(order.total_amount)}</strong>
            </div>
            {order.notes.map(|n| view! { <p class="order-detail__notes">{n}</p> })}
        </div>
    }
}
