//! Homepage carousel slides.

use leptos::prelude::*;

use crate::components::modal::{ConfirmDialog, Modal};
use crate::components::navbar::AdminNav;
use crate::net::api;
use crate::net::types::Carousel;
use crate::pages::{ErrorBanner, load_into};
use crate::state::carousel::{CarouselForm, sorted_slides, toggled};
use crate::state::toast::{ToastKind, ToastState, show_toast};
use crate::util::image::resolve_image_url;

#[component]
pub fn AdminCarouselPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let slides = RwSignal::new(Vec::<Carousel>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    // Outer `Some` means the modal is open; inner id is set when editing.
    let editing = RwSignal::new(None::<Option<String>>);
    let form = RwSignal::new(CarouselForm::default());
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let deleting = RwSignal::new(None::<Carousel>);

    let reload = Callback::new(move |()| {
        load_into(slides, loading, error, "Gagal memuat carousel", || async {
            api::fetch_carousel_admin().await.map(|list| sorted_slides(&list))
        });
    });
    reload.run(());

    let open_new = move |_| {
        let next_order = slides.with(|s| s.iter().map(|c| c.order).max().map_or(0, |o| o + 1));
        form.set(CarouselForm {
            order: next_order.to_string(),
            ..CarouselForm::default()
        });
        form_error.set(None);
        editing.set(Some(None));
    };
    let open_edit = move |slide: Carousel| {
        form.set(CarouselForm::from_slide(&slide));
        form_error.set(None);
        editing.set(Some(Some(slide.id)));
    };

    let on_submit = Callback::new(move |()| {
        let payload = match form.get_untracked().validate() {
            Ok(payload) => payload,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        let id = editing.get_untracked().flatten();
        saving.set(true);
        leptos::task::spawn_local(async move {
            let result = match id.as_deref() {
                Some(id) => api::update_carousel(id, &payload).await,
                None => api::create_carousel(&payload).await,
            };
            match result {
                Ok(_) => {
                    editing.set(None);
                    show_toast(toasts, ToastKind::Success, "Slide disimpan");
                    reload.run(());
                }
                Err(e) => {
                    leptos::logging::warn!("carousel save failed: {e}");
                    form_error.set(Some(e.user_message("Gagal menyimpan slide")));
                }
            }
            saving.set(false);
        });
    });

    let toggle = move |slide: Carousel| {
        leptos::task::spawn_local(async move {
            match api::update_carousel(&slide.id, &toggled(&slide)).await {
                Ok(_) => reload.run(()),
                Err(e) => show_toast(toasts, ToastKind::Error, e.user_message("Gagal mengubah status slide")),
            }
        });
    };

    let on_delete = Callback::new(move |()| {
        let Some(slide) = deleting.get_untracked() else {
            return;
        };
        deleting.set(None);
        leptos::task::spawn_local(async move {
            match api::delete_carousel(&slide.id).await {
                Ok(()) => {
                    show_toast(toasts, ToastKind::Success, "Slide dihapus");
                    reload.run(());
                }
                Err(e) => show_toast(toasts, ToastKind::Error, e.user_message("Gagal menghapus slide")),
            }
        });
    });

    view! {
        <div class="catalog-page">
            <AdminNav/>
            <header class="page-header">
                <h1>"Carousel Beranda"</h1>
                <button class="btn btn--primary" on:click=open_new>"Tambah Slide"</button>
            </header>
            <ErrorBanner error=error on_retry=reload/>
            <Show when=move || !loading.get() && slides.get().is_empty()>
                <div class="empty-state">"Belum ada slide."</div>
            </Show>
            <div class="slide-list">
                <For
                    each=move || slides.get()
                    key=|s| (s.id.clone(), s.is_active, s.order)
                    children=move |slide| {
                        let for_toggle = slide.clone();
                        let for_edit = slide.clone();
                        let for_delete = slide.clone();
                        view! {
                            <div class="slide-row" class:slide-row--inactive=!slide.is_active>
                                <img class="slide-row__thumb" src=resolve_image_url(Some(slide.image.as_str())) alt=""/>
                                <div class="slide-row__text">
                                    <strong>{slide.title.clone()}</strong>
                                    <span>{slide.subtitle.clone().unwrap_or_default()}</span>
                                    <span class="slide-row__order">{format!("Urutan {}", slide.order)}</span>
                                </div>
                                <label class="form__checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=slide.is_active
                                        on:change=move |_| toggle(for_toggle.clone())
                                    />
                                    "Aktif"
                                </label>
                                <div class="table__actions">
                                    <button class="btn" on:click=move |_| open_edit(for_edit.clone())>"Ubah"</button>
                                    <button class="btn btn--danger" on:click=move |_| deleting.set(Some(for_delete.clone()))>
                                        "Hapus"
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || editing.get().is_some()>
                <Modal
                    title={if editing.get_untracked().flatten().is_some() { "Ubah Slide" } else { "Tambah Slide" }}
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
                            "Judul"
                            <input
                                prop:value=move || form.get().title
                                on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                            />
                        </label>
                        <label class="form__field">
                            "Subjudul"
                            <input
                                prop:value=move || form.get().subtitle
                                on:input=move |ev| form.update(|f| f.subtitle = event_target_value(&ev))
                            />
                        </label>
                        <label class="form__field">
                            "URL gambar"
                            <input
                                prop:value=move || form.get().image
                                on:input=move |ev| form.update(|f| f.image = event_target_value(&ev))
                            />
                        </label>
                        <label class="form__field">
                            "Tautan"
                            <input
                                placeholder="/nearby"
                                prop:value=move || form.get().link
                                on:input=move |ev| form.update(|f| f.link = event_target_value(&ev))
                            />
                        </label>
                        <label class="form__field">
                            "Urutan"
                            <input
                                type="number"
                                step="1"
                                prop:value=move || form.get().order
                                on:input=move |ev| form.update(|f| f.order = event_target_value(&ev))
                            />
                        </label>
                        <label class="form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || form.get().is_active
                                on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                            />
                            "Tampilkan di beranda"
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
                    .map(|s| {
                        view! {
                            <ConfirmDialog
                                message=format!("Hapus slide \"{}\"?", s.title)
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
