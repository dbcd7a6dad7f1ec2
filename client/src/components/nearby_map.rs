//! Leaflet map for nearby search results.
//!
//! DESIGN
//! ======
//! Leaflet is loaded by the HTML shell from a CDN and only exists in the
//! browser, so all interop is gated behind `hydrate` and goes through
//! `Reflect` on `window.L`. What to draw (centre, zoom, radius circle, shop
//! pins) is computed by [`map_plan`] as plain data. Each change rebuilds the
//! map from the plan; the previous Leaflet instance is removed first.

#[cfg(test)]
#[path = "nearby_map_test.rs"]
mod nearby_map_test;

use leptos::prelude::*;

use crate::state::nearby::ShopMarker;
use crate::util::format::format_distance;
use crate::util::geolocation::Coords;

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

/// A pin with its popup content. Leaflet renders popup strings as HTML, so
/// `popup` is already escaped.
#[derive(Clone, Debug, PartialEq)]
pub struct MapPin {
    pub lat: f64,
    pub lng: f64,
    pub popup: String,
}

/// Everything the map draws for one scan.
#[derive(Clone, Debug, PartialEq)]
pub struct MapPlan {
    pub center: Coords,
    pub zoom: u8,
    pub radius_m: f64,
    pub user_popup: String,
    pub pins: Vec<MapPin>,
}

/// Zoom level that keeps the whole radius circle in view.
pub fn zoom_for_radius(radius_km: f64) -> u8 {
    if radius_km <= 1.5 {
        15
    } else if radius_km <= 3.0 {
        14
    } else if radius_km <= 4.5 {
        13
    } else {
        12
    }
}

/// Build the plan, or `None` before a position is known.
pub fn map_plan(origin: Option<Coords>, radius_km: f64, markers: &[ShopMarker]) -> Option<MapPlan> {
    let center = origin?;
    let pins = markers
        .iter()
        .map(|m| MapPin {
            lat: m.lat,
            lng: m.lng,
            popup: match m.distance {
                Some(d) => format!("{} · {}", escape_html(&m.name), format_distance(d)),
                None => escape_html(&m.name),
            },
        })
        .collect();
    Some(MapPlan {
        center,
        zoom: zoom_for_radius(radius_km),
        radius_m: radius_km * 1000.0,
        user_popup: "Lokasi Anda".to_owned(),
        pins,
    })
}

/// Escape text for insertion into an HTML string.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[component]
pub fn NearbyMap(
    #[prop(into)] origin: Signal<Option<Coords>>,
    #[prop(into)] radius_km: Signal<f64>,
    #[prop(into)] markers: Signal<Vec<ShopMarker>>,
) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let plan = Memo::new(move |_| map_plan(origin.get(), radius_km.get(), &markers.get()));
    let has_plan = move || plan.get().is_some();

    #[cfg(feature = "hydrate")]
    {
        let instance = StoredValue::new_local(None::<wasm_bindgen::JsValue>);
        Effect::new(move || {
            let current = plan.get();
            let Some(element) = container.get() else {
                return;
            };
            if let Some(previous) = instance.get_value() {
                let _ = leaflet::call(&previous, "remove", &[]);
                instance.set_value(None);
            }
            let Some(current) = current else {
                return;
            };
            match leaflet::render(&element, &current) {
                Ok(map) => instance.set_value(Some(map)),
                Err(e) => leptos::logging::warn!("map render failed: {e:?}"),
            }
        });
        on_cleanup(move || {
            if let Some(map) = instance.get_value() {
                let _ = leaflet::call(&map, "remove", &[]);
            }
        });
    }

    view! {
        <div class="nearby-map">
            <div class="nearby-map__canvas" node_ref=container></div>
            <Show when=move || !has_plan()>
                <div class="nearby-map__placeholder">"Peta muncul setelah lokasi Anda ditemukan."</div>
            </Show>
        </div>
    }
}

#[cfg(feature = "hydrate")]
mod leaflet {
    use js_sys::{Array, Function, Object, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    use super::{MapPlan, TILE_ATTRIBUTION, TILE_URL};

    fn global() -> Result<JsValue, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let l = Reflect::get(&window, &JsValue::from_str("L"))?;
        if l.is_undefined() {
            return Err(JsValue::from_str("Leaflet not loaded"));
        }
        Ok(l)
    }

    /// Invoke `target[name](...args)`.
    pub(super) fn call(target: &JsValue, name: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
        let method: Function = Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
        let list = Array::new();
        for arg in args {
            list.push(arg);
        }
        method.apply(target, &list)
    }

    fn lat_lng(lat: f64, lng: f64) -> JsValue {
        Array::of2(&JsValue::from_f64(lat), &JsValue::from_f64(lng)).into()
    }

    fn options(pairs: &[(&str, JsValue)]) -> Result<JsValue, JsValue> {
        let obj = Object::new();
        for (key, value) in pairs {
            Reflect::set(&obj, &JsValue::from_str(key), value)?;
        }
        Ok(obj.into())
    }

    /// Build a fresh map inside `element` and return the Leaflet map object.
    pub(super) fn render(element: &web_sys::HtmlDivElement, plan: &MapPlan) -> Result<JsValue, JsValue> {
        let l = global()?;
        let map = call(&l, "map", &[element.clone().into()])?;
        call(
            &map,
            "setView",
            &[lat_lng(plan.center.lat, plan.center.lng), JsValue::from_f64(f64::from(plan.zoom))],
        )?;

        let tiles = call(
            &l,
            "tileLayer",
            &[JsValue::from_str(TILE_URL), options(&[("attribution", JsValue::from_str(TILE_ATTRIBUTION))])?],
        )?;
        call(&tiles, "addTo", &[map.clone()])?;

        let circle = call(
            &l,
            "circle",
            &[
                lat_lng(plan.center.lat, plan.center.lng),
                options(&[
                    ("radius", JsValue::from_f64(plan.radius_m)),
                    ("color", JsValue::from_str("#2f855a")),
                    ("fillOpacity", JsValue::from_f64(0.08)),
                ])?,
            ],
        )?;
        call(&circle, "addTo", &[map.clone()])?;

        let user = call(
            &l,
            "circleMarker",
            &[
                lat_lng(plan.center.lat, plan.center.lng),
                options(&[("radius", JsValue::from_f64(8.0)), ("color", JsValue::from_str("#2b6cb0"))])?,
            ],
        )?;
        call(&user, "bindPopup", &[JsValue::from_str(&plan.user_popup)])?;
        call(&user, "addTo", &[map.clone()])?;

        for pin in &plan.pins {
            let marker = call(&l, "marker", &[lat_lng(pin.lat, pin.lng)])?;
            call(&marker, "bindPopup", &[JsValue::from_str(&pin.popup)])?;
            call(&marker, "addTo", &[map.clone()])?;
        }
        Ok(map)
    }
}
