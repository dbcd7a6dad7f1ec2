//! Nearby radius search page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Asks the browser for the device position, queries `/products/nearby`,
//! holds the response through a short analysis animation, then shows the
//! list beside a Leaflet map. Lifecycle and filtering rules live in
//! `state::nearby`; this page only drives them.

use leptos::prelude::*;

use crate::components::nearby_map::NearbyMap;
use crate::components::product_card::ProductCard;
use crate::state::nearby::{
    MAX_RADIUS_KM, MIN_RADIUS_KM, NearbyState, PriceRange, RADIUS_STEP_KM, ScanPhase, SortKey,
};
use crate::util::format::format_distance;

#[component]
pub fn NearbyPage() -> impl IntoView {
    let state = RwSignal::new(NearbyState::default());
    let min_price = RwSignal::new(String::new());
    let max_price = RwSignal::new(String::new());

    let phase = Memo::new(move |_| state.with(|s| s.phase));
    let scanning = move || phase.get().is_scanning();
    let visible = Memo::new(move |_| state.with(NearbyState::visible_products));
    let markers = Memo::new(move |_| state.with(NearbyState::markers));
    let origin = Signal::derive(move || state.with(|s| s.origin));
    let radius = Signal::derive(move || state.with(|s| s.radius_km));
    let map_radius = Signal::derive(move || state.with(NearbyState::map_radius_km));
    let total_found = move || state.with(|s| s.products.len());

    let on_scan = move |_| {
        if scanning() {
            return;
        }
        let mut seq = 0;
        state.update(|s| seq = s.begin_scan());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(run_scan(state, seq));
        #[cfg(not(feature = "hydrate"))]
        let _ = seq;
    };

    let apply_price = move || {
        let range = PriceRange {
            min: PriceRange::parse_bound(&min_price.get_untracked()),
            max: PriceRange::parse_bound(&max_price.get_untracked()),
        };
        state.update(|s| s.price = range);
    };

    view! {
        <div class="nearby-page">
            <header class="nearby-page__header">
                <h1>"Produk di Sekitar Anda"</h1>
                <p>"Temukan produk dari toko terdekat dalam radius pilihan Anda."</p>
            </header>

            <section class="nearby-controls">
                <label class="nearby-controls__radius">
                    <span>{move || format!("Radius: {}", format_distance(radius.get()))}</span>
                    <input
                        type="range"
                        min=MIN_RADIUS_KM.to_string()
                        max=MAX_RADIUS_KM.to_string()
                        step=RADIUS_STEP_KM.to_string()
                        prop:value=move || radius.get().to_string()
                        disabled=scanning
                        on:input=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                state.update(|s| s.set_radius(v));
                            }
                        }
                    />
                </label>
                <button class="btn btn--primary" on:click=on_scan disabled=scanning>
                    {move || if scanning() { "Memindai..." } else { "Pindai Sekitar" }}
                </button>
            </section>

            <Show when=scanning>
                <div class="scan-progress" role="status">
                    <span class="scan-progress__pulse"></span>
                    <span>{move || phase.get().label()}</span>
                </div>
            </Show>

            <Show when=move || phase.get() == ScanPhase::Failed>
                <div class="error-banner" role="alert">
                    {move || state.with(|s| s.error.clone().unwrap_or_default())}
                </div>
            </Show>

            <div class="nearby-layout">
                <NearbyMap origin=origin radius_km=map_radius markers=markers/>

                <section class="nearby-results">
                    <div class="nearby-filters">
                        <select
                            on:change=move |ev| {
                                if let Some(key) = SortKey::parse(&event_target_value(&ev)) {
                                    state.update(|s| s.sort = key);
                                }
                            }
                        >
                            {SortKey::ALL
                                .into_iter()
                                .map(|key| {
                                    view! {
                                        <option value=key.as_str() selected=move || state.with(|s| s.sort == key)>
                                            {key.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                        <input
                            type="text"
                            inputmode="numeric"
                            placeholder="Harga min"
                            prop:value=move || min_price.get()
                            on:input=move |ev| min_price.set(event_target_value(&ev))
                            on:change=move |_| apply_price()
                        />
                        <input
                            type="text"
                            inputmode="numeric"
                            placeholder="Harga maks"
                            prop:value=move || max_price.get()
                            on:input=move |ev| max_price.set(event_target_value(&ev))
                            on:change=move |_| apply_price()
                        />
                    </div>

                    <Show when=move || phase.get() == ScanPhase::Done>
                        <p class="nearby-results__summary">
                            {move || format!("{} dari {} produk ditampilkan", visible.get().len(), total_found())}
                        </p>
                    </Show>
                    <Show when=move || phase.get() == ScanPhase::Done && visible.get().is_empty()>
                        <div class="empty-state">"Tidak ada produk yang cocok di radius ini."</div>
                    </Show>
                    <div class="product-grid">
                        <For
                            each=move || visible.get()
                            key=|p| p.id.clone()
                            children=|p| view! { <ProductCard product=p show_distance=true/> }
                        />
                    </div>
                </section>
            </div>
        </div>
    }
}

/// Locate, fetch, pause for analysis, publish. Every step is discarded if a
/// newer scan has started.
#[cfg(feature = "hydrate")]
async fn run_scan(state: RwSignal<NearbyState>, seq: u64) {
    use crate::net::api;
    use crate::state::nearby::ANALYSIS_DELAY_MS;
    use crate::util::geolocation::current_position;

    let position = current_position().await;
    if let Err(e) = &position {
        leptos::logging::warn!("geolocation failed: {e}");
    }
    let mut query = None;
    state.update(|s| query = s.located(seq, position));
    let Some(query) = query else {
        return;
    };

    let result = api::fetch_nearby_products(&query).await;
    if let Err(e) = &result {
        leptos::logging::warn!("nearby request failed: {e}");
    }
    let mut proceed = false;
    state.update(|s| proceed = s.fetched(seq, result));
    if !proceed {
        return;
    }

    gloo_timers::future::sleep(std::time::Duration::from_millis(ANALYSIS_DELAY_MS)).await;
    state.update(|s| s.finish_analysis(seq));
}
