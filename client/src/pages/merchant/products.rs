//! Merchant product catalogue: list, search, create, edit, delete.

use leptos::prelude::*;

use super::MerchantNav;
use crate::components::modal::{ConfirmDialog, Modal};
use crate::net::api;
use crate::net::types::{Category, Product};
use crate::pages::{ErrorBanner, load_into};
use crate::state::categories::flatten_tree;
use crate::state::products::{ProductForm, search_products};
use crate::state::toast::{ToastKind, ToastState, show_toast};
use crate::util::format::format_rupiah;
use crate::util::image::resolve_image_url;

/// Modal target: `None` id means a new product.
#[derive(Clone, Debug, PartialEq)]
struct Editing {
    id: Option<String>,
}

#[component]
pub fn MerchantProductsPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let products = RwSignal::new(Vec::<Product>::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let cat_loading = RwSignal::new(false);
    let cat_error = RwSignal::new(None::<String>);
    let query = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<Editing>);
    let form = RwSignal::new(ProductForm::default());
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let deleting = RwSignal::new(None::<Product>);

    let reload = Callback::new(move |()| {
        load_into(products, loading, error, "Gagal memuat produk", api::fetch_my_products);
    });
    reload.run(());
    load_into(categories, cat_loading, cat_error, "Gagal memuat kategori", api::fetch_categories);

    let open_new = move |_| {
        form.set(ProductForm::default());
        form_error.set(None);
        editing.set(Some(Editing { id: None }));
    };
    let open_edit = move |product: Product| {
        form.set(ProductForm::from_product(&product));
        form_error.set(None);
        editing.set(Some(Editing { id: Some(product.id) }));
    };

    let on_submit = Callback::new(move |()| {
        let payload = match form.get_untracked().validate() {
            Ok(payload) => payload,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        let id = editing.get_untracked().and_then(|e| e.id);
        saving.set(true);
        leptos::task::spawn_local(async move {
            let result = match id.as_deref() {
                Some(id) => api::update_product(id, &payload).await,
                None => api::create_product(&payload).await,
            };
            match result {
                Ok(_) => {
                    editing.set(None);
                    show_toast(toasts, ToastKind::Success, "Produk disimpan");
                    reload.run(());
                }
                Err(e) => {
                    leptos::logging::warn!("product save failed: {e}");
                    form_error.set(Some(e.user_message("Gagal menyimpan produk")));
                }
            }
            saving.set(false);
        });
    });

    let on_delete = Callback::new(move |()| {
        let Some(product) = deleting.get_untracked() else {
            return;
        };
        deleting.set(None);
        leptos::task::spawn_local(async move {
            match api::delete_product(&product.id).await {
                Ok(()) => {
                    show_toast(toasts, ToastKind::Success, "Produk dihapus");
                    reload.run(());
                }
                Err(e) => show_toast(toasts, ToastKind::Error, e.user_message("Gagal menghapus produk")),
            }
        });
    });

    let visible = move || search_products(&products.get(), &query.get());
    let category_rows = Memo::new(move |_| flatten_tree(&categories.get()));

    view! {
        <div class="catalog-page">
            <MerchantNav/>
            <header class="page-header">
                <h1>"Produk Saya"</h1>
                <button class="btn btn--primary" on:click=open_new>"Tambah Produk"</button>
            </header>
            <input
                class="search-input"
                type="search"
                placeholder="Cari produk atau kategori"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <ErrorBanner error=error on_retry=reload/>
            <Show when=move || !loading.get() && visible().is_empty()>
                <div class="empty-state">"Belum ada produk."</div>
            </Show>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Produk"</th>
                        <th>"Kategori"</th>
                        <th>"Harga"</th>
                        <th>"Stok"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=visible
                        key=|p| p.id.clone()
                        children=move |p| {
                            let for_edit = p.clone();
                            let for_delete = p.clone();
                            view! {
                                <tr>
                                    <td class="table__product">
                                        <img src=resolve_image_url(p.cover_image()) alt=""/>
                                        <span>{p.name.clone()}</span>
                                    </td>
                                    <td>{p.category.as_ref().map(|c| c.name.clone()).unwrap_or_default()}</td>
                                    <td>{format_rupiah(p.price)}</td>
                                    <td class:table__cell--warn={p.stock <= 0}>{p.stock}</td>
                                    <td>{if p.is_active { "Aktif" } else { "Nonaktif" }}</td>
                                    <td class="table__actions">
                                        <button class="btn" on:click=move |_| open_edit(for_edit.clone())>"Ubah"</button>
                                        <button class="btn btn--danger" on:click=move |_| deleting.set(Some(for_delete.clone()))>
                                            "Hapus"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || editing.get().is_some()>
                <Modal
                    title={if editing.get_untracked().is_some_and(|e| e.id.is_some()) { "Ubah Produk" } else { "Tambah Produk" }}
                    on_close=Callback::new(move |()| editing.set(None))
                >
                    <form
                        class="form"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            on_submit.run(());
                        }
                    >
                        <label class="form__field">
                            "Nama produk"
                            <input
                                prop:value=move || form.get().name
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </label>
                        <label class="form__field">
                            "Kategori"
                            <select on:change=move |ev| form.update(|f| f.category_id = event_target_value(&ev))>
                                <option value="" selected=move || form.get().category_id.is_empty()>"Pilih kategori"</option>
                                <For
                                    each=move || category_rows.get()
                                    key=|row| row.category.id.clone()
                                    children=move |row| {
                                        let id = row.category.id.clone();
                                        let selected_id = id.clone();
                                        let label = format!("{}{}", "· ".repeat(row.depth), row.category.name);
                                        view! {
                                            <option value=id selected=move || form.get().category_id == selected_id>
                                                {label}
                                            </option>
                                        }
                                    }
                                />
                            </select>
                        </label>
                        <div class="form__row">
                            <label class="form__field">
                                "Harga (Rp)"
                                <input
                                    inputmode="decimal"
                                    prop:value=move || form.get().price
                                    on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                                />
                            </label>
                            <label class="form__field">
                                "Stok"
                                <input
                                    type="number"
                                    min="0"
                                    step="1"
                                    prop:value=move || form.get().stock
                                    on:input=move |ev| form.update(|f| f.stock = event_target_value(&ev))
                                />
                            </label>
                        </div>
                        <label class="form__field">
                            "Deskripsi"
                            <textarea
                                prop:value=move || form.get().description
                                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label class="form__field">
                            "URL gambar (satu per baris)"
                            <textarea
                                prop:value=move || form.get().images
                                on:input=move |ev| form.update(|f| f.images = event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label class="form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || form.get().is_active
                                on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                            />
                            "Tampilkan di toko"
                        </label>
                        <Show when=move || form_error.get().is_some()>
                            <p class="form__error">{move || form_error.get().unwrap_or_default()}</p>
                        </Show>
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| editing.set(None)>"Batal"</button>
                            <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                                "Simpan"
                            </button>
                        </div>
                    </form>
                </Modal>
            </Show>

            {move || {
                deleting
                    .get()
                    .map(|p| {
                        view! {
                            <ConfirmDialog
                                message=format!("Hapus produk \"{}\"?", p.name)
                                confirm_label="Hapus"
                                danger=true
                                on_confirm=on_delete
                                on_cancel=Callback::new(move |()| deleting.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}
