//! Modal shell and confirmation dialog used by every CRUD page.

use leptos::prelude::*;

/// Backdrop + dialog frame. Clicking the backdrop or pressing Escape closes.
#[component]
pub fn Modal(#[prop(into)] title: String, on_close: Callback<()>, children: Children) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog"
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="dialog__header">
                    <h2 class="dialog__title">{title}</h2>
                    <button class="dialog__close" on:click=move |_| on_close.run(()) title="Tutup" aria-label="Tutup">
                        "✕"
                    </button>
                </div>
                <div class="dialog__body">{children()}</div>
            </div>
        </div>
    }
}

/// Yes/no prompt for destructive actions.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] message: String,
    #[prop(into, default = "Ya, lanjutkan".to_owned())] confirm_label: String,
    #[prop(optional)] danger: bool,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title="Konfirmasi" on_close=on_cancel>
            <p class="dialog__message">{message}</p>
            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_cancel.run(())>
                    "Batal"
                </button>
                <button
                    class="btn btn--primary"
                    class:btn--danger=danger
                    on:click=move |_| on_confirm.run(())
                >
                    {confirm_label}
                </button>
            </div>
        </Modal>
    }
}
