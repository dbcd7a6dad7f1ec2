//! Nearby radius search: scan lifecycle, post-filters and map markers.
//!
//! DESIGN
//! ======
//! A scan runs `Locating -> Fetching -> Analyzing -> Done`. Each scan bumps
//! `scan_seq`; completions carrying an older sequence are ignored, so a new
//! scan always replaces whatever an earlier one was doing. Any failure moves
//! straight to `Failed` with a user-facing message and no retry.
//!
//! Filtering and sorting only touch the fetched list. Distance comes from the
//! backend; nothing here computes geometry.

#[cfg(test)]
#[path = "nearby_test.rs"]
mod nearby_test;

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::net::api::{ApiError, NearbyQuery};
use crate::net::types::Product;
use crate::util::format::parse_rupiah;
use crate::util::geolocation::{Coords, GeoError};

pub const MIN_RADIUS_KM: f64 = 1.0;
pub const MAX_RADIUS_KM: f64 = 6.0;
pub const RADIUS_STEP_KM: f64 = 0.5;
pub const DEFAULT_RADIUS_KM: f64 = 2.0;
/// Simulated "analysis" pause between the response and the result list.
pub const ANALYSIS_DELAY_MS: u64 = 2_000;

const FETCH_FAILED: &str = "Gagal memuat produk terdekat. Coba lagi.";

/// Clamp a radius into range and snap it to the nearest step.
pub fn normalize_radius(raw: f64) -> f64 {
    if !raw.is_finite() {
        return DEFAULT_RADIUS_KM;
    }
    let clamped = raw.clamp(MIN_RADIUS_KM, MAX_RADIUS_KM);
    let snapped = (clamped / RADIUS_STEP_KM).round() * RADIUS_STEP_KM;
    snapped.clamp(MIN_RADIUS_KM, MAX_RADIUS_KM)
}

/// Post-fetch ordering of the result list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Distance,
    PriceLow,
    PriceHigh,
}

impl SortKey {
    pub const ALL: [Self; 3] = [Self::Distance, Self::PriceLow, Self::PriceHigh];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::PriceLow => "price_low",
            Self::PriceHigh => "price_high",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == raw)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Distance => "Terdekat",
            Self::PriceLow => "Harga terendah",
            Self::PriceHigh => "Harga tertinggi",
        }
    }
}

/// Inclusive price bounds; either side may be open.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }

    /// Parse a bound typed into a price input. Blank or invalid means open.
    pub fn parse_bound(raw: &str) -> Option<f64> {
        parse_rupiah(raw).filter(|v| *v >= 0.0)
    }
}

/// Stable sort by the selected key. Missing distances go last.
pub fn sort_products(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::Distance => products.sort_by(|a, b| match (a.distance, b.distance) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
        SortKey::PriceLow => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceHigh => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
}

/// Apply the price filter then the sort to a copy of `products`.
pub fn apply_filters(products: &[Product], price: PriceRange, sort: SortKey) -> Vec<Product> {
    let mut out: Vec<Product> = products.iter().filter(|p| price.contains(p.price)).cloned().collect();
    sort_products(&mut out, sort);
    out
}

/// One map pin per shop.
#[derive(Clone, Debug, PartialEq)]
pub struct ShopMarker {
    pub slug: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub distance: Option<f64>,
}

/// One marker per distinct shop slug; the first product seen for a shop
/// supplies its position. Shops without coordinates get no marker.
pub fn shop_markers(products: &[Product]) -> Vec<ShopMarker> {
    let mut seen = HashSet::new();
    let mut markers = Vec::new();
    for product in products {
        let Some(shop) = product.shop.as_ref() else {
            continue;
        };
        let key = if shop.slug.is_empty() { shop.id.as_str() } else { shop.slug.as_str() };
        if key.is_empty() || !seen.insert(key.to_owned()) {
            continue;
        }
        let (Some(lat), Some(lng)) = (shop.latitude, shop.longitude) else {
            continue;
        };
        markers.push(ShopMarker {
            slug: key.to_owned(),
            name: shop.name.clone(),
            lat,
            lng,
            distance: product.distance,
        });
    }
    markers
}

/// Where a scan is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanPhase {
    #[default]
    Idle,
    Locating,
    Fetching,
    Analyzing,
    Done,
    Failed,
}

impl ScanPhase {
    pub fn is_scanning(self) -> bool {
        matches!(self, Self::Locating | Self::Fetching | Self::Analyzing)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Locating => "Mendeteksi lokasi Anda...",
            Self::Fetching => "Mencari produk di sekitar...",
            Self::Analyzing => "Menganalisis hasil...",
            Self::Done => "Pencarian selesai",
            Self::Failed => "Pencarian gagal",
        }
    }
}

/// Page state for `/nearby`.
#[derive(Clone, Debug)]
pub struct NearbyState {
    pub radius_km: f64,
    pub phase: ScanPhase,
    pub origin: Option<Coords>,
    /// Radius the current results were fetched with; the slider may move on.
    pub scanned_radius_km: Option<f64>,
    pub products: Vec<Product>,
    pub error: Option<String>,
    pub sort: SortKey,
    pub price: PriceRange,
    pub scan_seq: u64,
    /// Fetched results held back until the analysis delay elapses.
    pending: Vec<Product>,
}

impl Default for NearbyState {
    fn default() -> Self {
        Self {
            radius_km: DEFAULT_RADIUS_KM,
            phase: ScanPhase::Idle,
            origin: None,
            scanned_radius_km: None,
            products: Vec::new(),
            error: None,
            sort: SortKey::default(),
            price: PriceRange::default(),
            scan_seq: 0,
            pending: Vec::new(),
        }
    }
}

impl NearbyState {
    pub fn set_radius(&mut self, raw: f64) {
        self.radius_km = normalize_radius(raw);
    }

    /// Reset everything from the previous scan and enter `Locating`.
    pub fn begin_scan(&mut self) -> u64 {
        self.scan_seq += 1;
        self.phase = ScanPhase::Locating;
        self.origin = None;
        self.scanned_radius_km = None;
        self.products.clear();
        self.pending.clear();
        self.error = None;
        self.scan_seq
    }

    /// Record the geolocation outcome. Returns the query to issue, or `None`
    /// when the position failed or the scan was superseded.
    pub fn located(&mut self, seq: u64, position: Result<Coords, GeoError>) -> Option<NearbyQuery> {
        if seq != self.scan_seq {
            return None;
        }
        match position {
            Ok(coords) => {
                self.origin = Some(coords);
                self.scanned_radius_km = Some(self.radius_km);
                self.phase = ScanPhase::Fetching;
                Some(NearbyQuery { lat: coords.lat, lng: coords.lng, radius_km: self.radius_km })
            }
            Err(e) => {
                self.fail(e.user_message().to_owned());
                None
            }
        }
    }

    /// Record the nearby response. Returns `true` when the analysis delay
    /// should run.
    pub fn fetched(&mut self, seq: u64, result: Result<Vec<Product>, ApiError>) -> bool {
        if seq != self.scan_seq {
            return false;
        }
        match result {
            Ok(products) => {
                self.pending = products;
                self.phase = ScanPhase::Analyzing;
                true
            }
            Err(e) => {
                self.fail(e.user_message(FETCH_FAILED));
                false
            }
        }
    }

    /// Publish the held-back results.
    pub fn finish_analysis(&mut self, seq: u64) {
        if seq != self.scan_seq || self.phase != ScanPhase::Analyzing {
            return;
        }
        self.products = std::mem::take(&mut self.pending);
        self.phase = ScanPhase::Done;
    }

    fn fail(&mut self, message: String) {
        self.phase = ScanPhase::Failed;
        self.error = Some(message);
        self.pending.clear();
    }

    pub fn visible_products(&self) -> Vec<Product> {
        apply_filters(&self.products, self.price, self.sort)
    }

    /// Radius for the map overlay: the scanned one once a position is known.
    pub fn map_radius_km(&self) -> f64 {
        self.scanned_radius_km.unwrap_or(self.radius_km)
    }

    pub fn markers(&self) -> Vec<ShopMarker> {
        shop_markers(&self.visible_products())
    }
}
