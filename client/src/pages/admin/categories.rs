//! Category tree management.
//!
//! SYSTEM CONTEXT
//! ==============
//! The tree is flattened into indented rows once per fetch. Deleting a
//! category that still has subcategories or products is refused locally so
//! the backend never sees the request.

use leptos::prelude::*;

use crate::components::modal::{ConfirmDialog, Modal};
use crate::components::navbar::AdminNav;
use crate::net::api;
use crate::net::types::Category;
use crate::pages::{ErrorBanner, load_into};
use crate::state::categories::{CategoryForm, CategoryRow, delete_block_reason, filter_rows, flatten_tree, parent_options};
use crate::state::toast::{ToastKind, ToastState, show_toast};
use crate::util::slug::slugify;

#[derive(Clone, Debug, PartialEq)]
struct Editing {
    id: Option<String>,
}

#[component]
pub fn AdminCategoriesPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let categories = RwSignal::new(Vec::<Category>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let query = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<Editing>);
    let form = RwSignal::new(CategoryForm::default());
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let deleting = RwSignal::new(None::<CategoryRow>);

    let reload = Callback::new(move |()| {
        load_into(categories, loading, error, "Gagal memuat kategori", api::fetch_all_categories);
    });
    reload.run(());

    let rows = Memo::new(move |_| flatten_tree(&categories.get()));
    let visible = move || filter_rows(&rows.get(), &query.get());
    let parents = Memo::new(move |_| {
        let editing_id = editing.get().and_then(|e| e.id);
        parent_options(&rows.get(), editing_id.as_deref())
    });

    let open_new = move |parent: Option<String>| {
        form.set(CategoryForm {
            parent_id: parent.unwrap_or_default(),
            ..CategoryForm::default()
        });
        form_error.set(None);
        editing.set(Some(Editing { id: None }));
    };
    let open_edit = move |category: Category| {
        form.set(CategoryForm::from_category(&category));
        form_error.set(None);
        editing.set(Some(Editing { id: Some(category.id) }));
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
                Some(id) => api::update_category(id, &payload).await,
                None => api::create_category(&payload).await,
            };
            match result {
                Ok(_) => {
                    editing.set(None);
                    show_toast(toasts, ToastKind::Success, "Kategori disimpan");
                    reload.run(());
                }
                Err(e) => {
                    leptos::logging::warn!("category save failed: {e}");
                    form_error.set(Some(e.user_message("Gagal menyimpan kategori")));
                }
            }
            saving.set(false);
        });
    });

    let request_delete = move |row: CategoryRow| match delete_block_reason(&row) {
        Some(reason) => show_toast(toasts, ToastKind::Error, reason),
        None => deleting.set(Some(row)),
    };

    let on_delete = Callback::new(move |()| {
        let Some(row) = deleting.get_untracked() else {
            return;
        };
        deleting.set(None);
        leptos::task::spawn_local(async move {
            match api::delete_category(&row.category.id).await {
                Ok(()) => {
                    show_toast(toasts, ToastKind::Success, "Kategori dihapus");
                    reload.run(());
                }
                Err(e) => show_toast(toasts, ToastKind::Error, e.user_message("Gagal menghapus kategori")),
            }
        });
    });

    view! {
        <div class="catalog-page">
            <AdminNav/>
            <header class="page-header">
                <h1>"Kategori"</h1>
                <button class="btn btn--primary" on:click=move |_| open_new(None)>"Tambah Kategori"</button>
            </header>
            <input
                class="search-input"
                type="search"
                placeholder="Cari kategori"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <ErrorBanner error=error on_retry=reload/>
            <Show when=move || !loading.get() && visible().is_empty()>
                <div class="empty-state">"Tidak ada kategori."</div>
            </Show>
            <ul class="tree">
                <For
                    each=visible
                    key=|row| (row.category.id.clone(), row.category.count.products, row.child_ids.len())
                    children=move |row| {
                        let for_edit = row.category.clone();
                        let for_child = row.category.id.clone();
                        let for_delete = row.clone();
                        view! {
                            <li class="tree__row" style=format!("padding-left: {}rem", row.depth as f32 * 1.5)>
                                <div class="tree__label">
                                    <strong>{row.category.name.clone()}</strong>
                                    <span class="tree__slug">{format!("/{}", row.category.slug)}</span>
                                </div>
                                <span class="tree__meta">
                                    {format!(
                                        "{} produk · {} subkategori",
                                        row.category.count.products,
                                        row.child_ids.len(),
                                    )}
                                </span>
                                <div class="table__actions">
                                    <button class="btn" on:click=move |_| open_new(Some(for_child.clone()))>"+ Sub"</button>
                                    <button class="btn" on:click=move |_| open_edit(for_edit.clone())>"Ubah"</button>
                                    <button class="btn btn--danger" on:click=move |_| request_delete(for_delete.clone())>
                                        "Hapus"
                                    </button>
                                </div>
                            </li>
                        }
                    }
                />
            </ul>

            <Show when=move || editing.get().is_some()>
                <Modal
                    title={if editing.get_untracked().is_some_and(|e| e.id.is_some()) { "Ubah Kategori" } else { "Tambah Kategori" }}
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
                            "Nama"
                            <input
                                prop:value=move || form.get().name
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </label>
                        <label class="form__field">
                            "Slug"
                            <input
                                placeholder=move || slugify(&form.get().name)
                                prop:value=move || form.get().slug
                                on:input=move |ev| form.update(|f| f.slug = event_target_value(&ev))
                            />
                        </label>
                        <label class="form__field">
                            "Induk"
                            <select on:change=move |ev| form.update(|f| f.parent_id = event_target_value(&ev))>
                                <option value="" selected=move || form.get().parent_id.is_empty()>"(Kategori utama)"</option>
                                <For
                                    each=move || parents.get()
                                    key=|row| row.category.id.clone()
                                    children=move |row| {
                                        let id = row.category.id.clone();
                                        let selected_id = id.clone();
                                        let label = format!("{}{}", "· ".repeat(row.depth), row.category.name);
                                        view! {
                                            <option value=id selected=move || form.get().parent_id == selected_id>
                                                {label}
                                            </option>
                                        }
                                    }
                                />
                            </select>
                        </label>
                        <label class="form__field">
                            "Deskripsi"
                            <textarea
                                prop:value=move || form.get().description
                                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label class="form__field">
                            "URL gambar"
                            <input
                                prop:value=move || form.get().image
                                on:input=move |ev| form.update(|f| f.image = event_target_value(&ev))
                            />
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
                    .map(|row| {
                        view! {
                            <ConfirmDialog
                                message=format!("Hapus kategori \"{}\"?", row.category.name)
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
