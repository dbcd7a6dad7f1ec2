//! Sharing product and shop links through the Web Share API, with a
//! clipboard fallback for browsers that lack it.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

/// What happened when the user pressed "share".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
    Failed,
}

impl ShareOutcome {
    /// Toast text for the outcome; a completed native share needs none.
    pub fn toast_message(self) -> Option<&'static str> {
        match self {
            Self::Shared => None,
            Self::Copied => Some("Tautan disalin ke clipboard."),
            Self::Failed => Some("Gagal membagikan tautan."),
        }
    }
}

/// Absolute link to a product page on the given site origin.
pub fn product_link(origin: &str, product_id: &str) -> String {
    format!("{}/products/{product_id}", origin.trim_end_matches('/'))
}

/// Share `url` natively when possible, otherwise copy it.
#[cfg(feature = "hydrate")]
pub async fn share_link(title: &str, url: &str) -> ShareOutcome {
    use js_sys::Reflect;
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::JsValue;

    let Some(window) = web_sys::window() else {
        return ShareOutcome::Failed;
    };
    let navigator = window.navigator();

    let share_fn = Reflect::get(&navigator, &JsValue::from_str("share"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
    if let Some(share_fn) = share_fn {
        let data = js_sys::Object::new();
        let _ = Reflect::set(&data, &JsValue::from_str("title"), &JsValue::from_str(title));
        let _ = Reflect::set(&data, &JsValue::from_str("url"), &JsValue::from_str(url));
        if let Ok(promise) = share_fn.call1(&navigator, &data) {
            if let Ok(promise) = promise.dyn_into::<js_sys::Promise>() {
                if wasm_bindgen_futures::JsFuture::from(promise).await.is_ok() {
                    return ShareOutcome::Shared;
                }
            }
        }
    }

    if let Some(clipboard) = navigator.clipboard() {
        if wasm_bindgen_futures::JsFuture::from(clipboard.write_text(url)).await.is_ok() {
            return ShareOutcome::Copied;
        }
    }
    ShareOutcome::Failed
}

/// Origin of the current page, e.g. `https://lapak.id`.
#[cfg(feature = "hydrate")]
pub fn current_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}
