//! Browser geolocation as a one-shot async call.
//!
//! The position is read through `navigator.geolocation.getCurrentPosition`
//! with high accuracy and a 10 s timeout. Position objects are read with
//! `Reflect` so the code does not depend on which `web-sys` position type
//! names a given browser binding exposes.

#[cfg(test)]
#[path = "geolocation_test.rs"]
mod geolocation_test;

/// A device position in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

/// Why a position could not be obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeoError {
    #[error("geolocation is not supported")]
    Unsupported,
    #[error("geolocation permission denied")]
    PermissionDenied,
    #[error("position unavailable")]
    Unavailable,
    #[error("geolocation timed out")]
    Timeout,
}

impl GeoError {
    /// Map a `GeolocationPositionError.code`.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            3 => Self::Timeout,
            _ => Self::Unavailable,
        }
    }

    /// Indonesian message shown to the user.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::Unsupported => "Browser Anda tidak mendukung geolokasi.",
            Self::PermissionDenied => {
                "Izin lokasi ditolak. Aktifkan akses lokasi di pengaturan browser untuk mencari toko terdekat."
            }
            Self::Unavailable => "Lokasi Anda tidak dapat ditentukan. Coba lagi beberapa saat.",
            Self::Timeout => "Waktu permintaan lokasi habis. Coba lagi.",
        }
    }
}

/// Ask the browser for the current position.
#[cfg(feature = "hydrate")]
pub async fn current_position() -> Result<Coords, GeoError> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use js_sys::Reflect;
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    type Reply = futures::channel::oneshot::Sender<Result<Coords, GeoError>>;

    let window = web_sys::window().ok_or(GeoError::Unsupported)?;
    let navigator = window.navigator();
    if !Reflect::has(&navigator, &JsValue::from_str("geolocation")).unwrap_or(false) {
        return Err(GeoError::Unsupported);
    }
    let geolocation = navigator.geolocation().map_err(|_| GeoError::Unsupported)?;

    let (tx, rx) = futures::channel::oneshot::channel();
    let reply: Rc<RefCell<Option<Reply>>> = Rc::new(RefCell::new(Some(tx)));

    let reply_ok = reply.clone();
    let on_success = Closure::<dyn FnMut(JsValue)>::new(move |position: JsValue| {
        let result = read_coords(&position).ok_or(GeoError::Unavailable);
        if let Some(tx) = reply_ok.borrow_mut().take() {
            let _ = tx.send(result);
        }
    });
    let reply_err = reply;
    let on_error = Closure::<dyn FnMut(JsValue)>::new(move |error: JsValue| {
        let code = Reflect::get(&error, &JsValue::from_str("code"))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let err = GeoError::from_code(code as u16);
        if let Some(tx) = reply_err.borrow_mut().take() {
            let _ = tx.send(Err(err));
        }
    });

    let options = js_sys::Object::new();
    let _ = Reflect::set(&options, &JsValue::from_str("enableHighAccuracy"), &JsValue::TRUE);
    let _ = Reflect::set(&options, &JsValue::from_str("timeout"), &JsValue::from_f64(10_000.0));
    let _ = Reflect::set(&options, &JsValue::from_str("maximumAge"), &JsValue::from_f64(0.0));

    geolocation
        .get_current_position_with_error_callback_and_options(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
            options.unchecked_ref(),
        )
        .map_err(|_| GeoError::Unsupported)?;

    let result = rx.await.unwrap_or(Err(GeoError::Unavailable));
    drop(on_success);
    drop(on_error);
    result
}

#[cfg(feature = "hydrate")]
fn read_coords(position: &wasm_bindgen::JsValue) -> Option<Coords> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let coords = Reflect::get(position, &JsValue::from_str("coords")).ok()?;
    let lat = Reflect::get(&coords, &JsValue::from_str("latitude")).ok()?.as_f64()?;
    let lng = Reflect::get(&coords, &JsValue::from_str("longitude")).ok()?.as_f64()?;
    Some(Coords { lat, lng })
}
