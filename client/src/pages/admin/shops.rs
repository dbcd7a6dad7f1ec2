//! Shop moderation: approve, reject, suspend and reactivate.

use leptos::prelude::*;

use crate::components::modal::ConfirmDialog;
use crate::components::navbar::AdminNav;
use crate::components::status_badge::ShopStatusBadge;
use crate::net::api;
use crate::net::types::{Shop, ShopStatus};
use crate::pages::{ErrorBanner, load_into};
use crate::state::shops::{ShopAction, count_with_status, filter_shops, replace_shop, shop_actions};
use crate::state::toast::{ToastKind, ToastState, show_toast};
use crate::util::format::format_date;
use crate::util::status::shop_status_label;

#[component]
pub fn AdminShopsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let shops = RwSignal::new(Vec::<Shop>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let tab = RwSignal::new(Some(ShopStatus::Pending));
    let query = RwSignal::new(String::new());
    let busy = RwSignal::new(None::<String>);
    let confirm = RwSignal::new(None::<(Shop, ShopAction)>);

    let reload = Callback::new(move |()| {
        load_into(shops, loading, error, "Gagal memuat daftar toko", api::fetch_admin_shops);
    });
    reload.run(());

    let run_action = move |shop: Shop, action: ShopAction| {
        busy.set(Some(shop.id.clone()));
        leptos::task::spawn_local(async move {
            match api::update_shop_status(&shop.id, action.target()).await {
                Ok(updated) => {
                    shops.update(|list| replace_shop(list, updated));
                    show_toast(toasts, ToastKind::Success, action.success_message());
                }
                Err(e) => {
                    leptos::logging::warn!("shop {} -> {:?} failed: {e}", shop.id, action.target());
                    show_toast(toasts, ToastKind::Error, e.user_message("Gagal memperbarui status toko"));
                }
            }
            busy.set(None);
        });
    };

    let on_action = Callback::new(move |(shop, action): (Shop, ShopAction)| {
        if action.is_destructive() {
            confirm.set(Some((shop, action)));
        } else {
            run_action(shop, action);
        }
    });
    let on_confirm = Callback::new(move |()| {
        if let Some((shop, action)) = confirm.get_untracked() {
            confirm.set(None);
            run_action(shop, action);
        }
    });

    let visible = move || filter_shops(&shops.get(), tab.get(), &query.get());
    let tabs = std::iter::once(None).chain(ShopStatus::ALL.into_iter().map(Some)).collect::<Vec<_>>();

    view! {
        <div class="moderation-page">
            <AdminNav/>
            <h1>"Moderasi Toko"</h1>
            <div class="tabs" role="tablist">
                {tabs
                    .into_iter()
                    .map(|status| {
                        let label = status.map_or("Semua", shop_status_label);
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || tab.get() == status
                                on:click=move |_| tab.set(status)
                            >
                                {label}
                                <span class="tabs__count">
                                    {move || shops.with(|s| status.map_or(s.len(), |st| count_with_status(s, st)))}
                                </span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <input
                class="search-input"
                type="search"
                placeholder="Cari nama toko, slug atau pemilik"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <ErrorBanner error=error on_retry=reload/>
            <Show when=move || !loading.get() && visible().is_empty()>
                <div class="empty-state">"Tidak ada toko di kategori ini."</div>
            </Show>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Toko"</th>
                        <th>"Pemilik"</th>
                        <th>"Produk"</th>
                        <th>"Terdaftar"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=visible
                        key=|s| (s.id.clone(), s.status)
                        children=move |shop| {
                            let row_id = shop.id.clone();
                            let owner = shop
                                .owner
                                .as_ref()
                                .map(|o| match &o.email {
                                    Some(email) => format!("{} ({email})", o.name),
                                    None => o.name.clone(),
                                })
                                .unwrap_or_default();
                            let buttons = shop_actions(shop.status)
                                .into_iter()
                                .map(|action| {
                                    let target = shop.clone();
                                    let row_id = row_id.clone();
                                    view! {
                                        <button
                                            class="btn"
                                            class:btn--danger=action.is_destructive()
                                            disabled=move || busy.get().as_deref() == Some(row_id.as_str())
                                            on:click=move |_| on_action.run((target.clone(), action))
                                        >
                                            {action.label()}
                                        </button>
                                    }
                                })
                                .collect_view();
                            view! {
                                <tr>
                                    <td>
                                        <strong>{shop.name.clone()}</strong>
                                        <div class="table__sub">{shop.address.clone().unwrap_or_default()}</div>
                                    </td>
                                    <td>{owner}</td>
                                    <td>{shop.count.as_ref().map_or(0, |c| c.products)}</td>
                                    <td>{shop.created_at.as_deref().map(format_date).unwrap_or_default()}</td>
                                    <td><ShopStatusBadge status=shop.status/></td>
                                    <td class="table__actions">{buttons}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            {move || {
                confirm
                    .get()
                    .map(|(shop, action)| {
                        view! {
                            <ConfirmDialog
                                message=format!("{} toko \"{}\"?", action.label(), shop.name)
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
