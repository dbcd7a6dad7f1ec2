//! Profile page: account details and saved addresses.

use leptos::prelude::*;

use super::{ErrorBanner, load_into};
use crate::components::modal::{ConfirmDialog, Modal};
use crate::net::api;
use crate::net::types::Address;
use crate::state::auth::AuthState;
use crate::state::profile::{ProfileForm, sort_addresses, validate_address};
use crate::state::toast::{ToastKind, ToastState, show_toast};
use crate::util::image::resolve_image_url;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(ProfileForm::default());
    let saving = RwSignal::new(false);

    let addresses = RwSignal::new(Vec::<Address>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let editing = RwSignal::new(None::<Address>);
    let deleting = RwSignal::new(None::<Address>);

    Effect::new(move || {
        if let Some(user) = auth.get().user {
            form.set(ProfileForm::from_user(&user));
        }
    });

    let reload = Callback::new(move |()| {
        load_into(addresses, loading, error, "Gagal memuat alamat", || async {
            api::fetch_addresses().await.map(|mut list| {
                sort_addresses(&mut list);
                list
            })
        });
    });
    reload.run(());

    let on_save_profile = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let update = match form.get_untracked().validate() {
            Ok(update) => update,
            Err(message) => {
                show_toast(toasts, ToastKind::Error, message);
                return;
            }
        };
        saving.set(true);
        leptos::task::spawn_local(async move {
            match api::update_profile(&update).await {
                Ok(user) => {
                    auth.update(|a| a.user = Some(user));
                    show_toast(toasts, ToastKind::Success, "Profil diperbarui");
                }
                Err(e) => {
                    leptos::logging::warn!("profile update failed: {e}");
                    show_toast(toasts, ToastKind::Error, e.user_message("Gagal memperbarui profil"));
                }
            }
            saving.set(false);
        });
    };

    let on_save_address = Callback::new(move |()| {
        let Some(draft) = editing.get_untracked() else {
            return;
        };
        let address = match validate_address(&draft) {
            Ok(address) => address,
            Err(message) => {
                show_toast(toasts, ToastKind::Error, message);
                return;
            }
        };
        saving.set(true);
        leptos::task::spawn_local(async move {
            let result = if address.id.is_empty() {
                api::create_address(&address).await
            } else {
                api::update_address(&address.id, &address).await
            };
            match result {
                Ok(_) => {
                    editing.set(None);
                    show_toast(toasts, ToastKind::Success, "Alamat disimpan");
                    reload.run(());
                }
                Err(e) => {
                    leptos::logging::warn!("address save failed: {e}");
                    show_toast(toasts, ToastKind::Error, e.user_message("Gagal menyimpan alamat"));
                }
            }
            saving.set(false);
        });
    });

    let on_delete_address = Callback::new(move |()| {
        let Some(address) = deleting.get_untracked() else {
            return;
        };
        deleting.set(None);
        leptos::task::spawn_local(async move {
            match api::delete_address(&address.id).await {
                Ok(()) => {
                    show_toast(toasts, ToastKind::Success, "Alamat dihapus");
                    reload.run(());
                }
                Err(e) => show_toast(toasts, ToastKind::Error, e.user_message("Gagal menghapus alamat")),
            }
        });
    });

    let user = move || auth.get().user;

    view! {
        <div class="profile-page">
            <section class="profile-card">
                <img class="profile-card__avatar" src=move || resolve_image_url(user().and_then(|u| u.avatar).as_deref()) alt=""/>
                <div>
                    <h1>{move || user().map(|u| u.name).unwrap_or_default()}</h1>
                    <p>{move || user().map(|u| u.email).unwrap_or_default()}</p>
                    <span class="chip">{move || user().map(|u| u.role.label()).unwrap_or_default()}</span>
                </div>
            </section>

            <form class="form" on:submit=on_save_profile>
                <label class="form__field">
                    "Nama"
                    <input
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Nomor telepon"
                    <input
                        type="tel"
                        prop:value=move || form.get().phone
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                    "Simpan Profil"
                </button>
            </form>

            <section class="address-section">
                <header class="page-header">
                    <h2>"Alamat Pengiriman"</h2>
                    <button class="btn" on:click=move |_| editing.set(Some(Address::default()))>
                        "Tambah Alamat"
                    </button>
                </header>
                <ErrorBanner error=error on_retry=reload/>
                <Show when=move || !loading.get() && addresses.get().is_empty()>
                    <div class="empty-state">"Belum ada alamat tersimpan."</div>
                </Show>
                <For
                    each=move || addresses.get()
                    key=|a| a.id.clone()
                    children=move |a| {
                        let for_edit = a.clone();
                        let for_delete = a.clone();
                        view! {
                            <div class="address-card" class:address-card--default=a.is_default>
                                <strong>{a.label.clone()}</strong>
                                <span>{format!("{} · {}", a.recipient_name, a.phone)}</span>
                                <span>{a.one_line()}</span>
                                <div class="address-card__actions">
                                    <button class="btn" on:click=move |_| editing.set(Some(for_edit.clone()))>"Ubah"</button>
                                    <button class="btn btn--danger" on:click=move |_| deleting.set(Some(for_delete.clone()))>
                                        "Hapus"
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </section>

            <Show when=move || editing.get().is_some()>
                <Modal title="Alamat" on_close=Callback::new(move |()| editing.set(None))>
                    <AddressFields draft=editing/>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| editing.set(None)>"Batal"</button>
                        <button class="btn btn--primary" disabled=move || saving.get() on:click=move |_| on_save_address.run(())>
                            "Simpan"
                        </button>
                    </div>
                </Modal>
            </Show>

            {move || {
                deleting
                    .get()
                    .map(|a| {
                        view! {
                            <ConfirmDialog
                                message=format!("Hapus alamat \"{}\"?", a.label)
                                confirm_label="Hapus"
                                danger=true
                                on_confirm=on_delete_address
                                on_cancel=Callback::new(move |()| deleting.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

/// Text inputs bound to the address draft.
#[component]
fn AddressFields(draft: RwSignal<Option<Address>>) -> impl IntoView {
    let field = move |label: &'static str, get: fn(&Address) -> String, set: fn(&mut Address, String)| {
        view! {
            <label class="form__field">
                {label}
                <input
                    prop:value=move || draft.get().as_ref().map(get).unwrap_or_default()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| {
                            if let Some(d) = d.as_mut() {
                                set(d, value);
                            }
                        });
                    }
                />
            </label>
        }
    };

    view! {
        <div class="form">
            {field("Label (mis. Rumah)", |a| a.label.clone(), |a, v| a.label = v)}
            {field("Nama penerima", |a| a.recipient_name.clone(), |a, v| a.recipient_name = v)}
            {field("Nomor telepon", |a| a.phone.clone(), |a, v| a.phone = v)}
            {field("Alamat lengkap", |a| a.street.clone(), |a, v| a.street = v)}
            {field("Kota", |a| a.city.clone(), |a, v| a.city = v)}
            {field("Provinsi", |a| a.province.clone(), |a, v| a.province = v)}
            {field("Kode pos", |a| a.postal_code.clone(), |a, v| a.postal_code = v)}
            <label class="form__checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || draft.get().is_some_and(|d| d.is_default)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        draft.update(|d| {
                            if let Some(d) = d.as_mut() {
                                d.is_default = checked;
                            }
                        });
                    }
                />
                "Jadikan alamat utama"
            </label>
        </div>
    }
}
