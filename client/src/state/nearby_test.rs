use super::*;
use crate::net::types::ShopRef;

fn shop(slug: &str, lat: f64, lng: f64) -> ShopRef {
    ShopRef {
        id: format!("id-{slug}"),
        name: format!("Toko {slug}"),
        slug: slug.to_owned(),
        latitude: Some(lat),
        longitude: Some(lng),
        ..ShopRef::default()
    }
}

fn product(id: &str, price: f64, distance: Option<f64>, shop_ref: Option<ShopRef>) -> Product {
    Product {
        id: id.to_owned(),
        name: format!("Produk {id}"),
        slug: id.to_owned(),
        description: None,
        price,
        stock: 5,
        images: Vec::new(),
        is_active: true,
        category: None,
        shop: shop_ref,
        distance,
    }
}

fn sample() -> Vec<Product> {
    vec![
        product("a", 30_000.0, Some(2.5), Some(shop("warung-sari", -6.2, 106.8))),
        product("b", 12_000.0, None, Some(shop("warung-sari", -6.2, 106.8))),
        product("c", 45_000.0, Some(0.4), Some(shop("kopi-nusa", -6.21, 106.81))),
        product("d", 12_000.0, Some(1.1), Some(shop("roti-bu-ani", -6.22, 106.82))),
        product("e", 8_000.0, Some(5.0), Some(shop("kopi-nusa", -6.21, 106.81))),
    ]
}

fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}

// =============================================================
// Radius
// =============================================================

#[test]
fn radius_clamps_out_of_range() {
    assert_eq!(normalize_radius(0.2), MIN_RADIUS_KM);
    assert_eq!(normalize_radius(12.0), MAX_RADIUS_KM);
    assert_eq!(normalize_radius(-3.0), MIN_RADIUS_KM);
}

#[test]
fn radius_snaps_to_half_km() {
    assert_eq!(normalize_radius(2.2), 2.0);
    assert_eq!(normalize_radius(2.3), 2.5);
    assert_eq!(normalize_radius(4.74), 4.5);
    assert_eq!(normalize_radius(3.5), 3.5);
}

#[test]
fn radius_non_finite_falls_back_to_default() {
    assert_eq!(normalize_radius(f64::NAN), DEFAULT_RADIUS_KM);
    assert_eq!(normalize_radius(f64::INFINITY), DEFAULT_RADIUS_KM);
}

// =============================================================
// Sorting and filtering
// =============================================================

#[test]
fn sort_by_price_low_is_ascending() {
    let sorted = apply_filters(&sample(), PriceRange::default(), SortKey::PriceLow);
    assert!(sorted.windows(2).all(|w| w[0].price <= w[1].price));
    assert_eq!(ids(&sorted), vec!["e", "b", "d", "a", "c"]);
}

#[test]
fn sort_by_price_high_is_descending() {
    let sorted = apply_filters(&sample(), PriceRange::default(), SortKey::PriceHigh);
    assert!(sorted.windows(2).all(|w| w[0].price >= w[1].price));
    assert_eq!(ids(&sorted)[0], "c");
}

#[test]
fn sort_is_stable_for_equal_prices() {
    let sorted = apply_filters(&sample(), PriceRange::default(), SortKey::PriceHigh);
    let b = sorted.iter().position(|p| p.id == "b");
    let d = sorted.iter().position(|p| p.id == "d");
    assert!(b < d);
}

#[test]
fn sort_by_distance_puts_missing_last() {
    let sorted = apply_filters(&sample(), PriceRange::default(), SortKey::Distance);
    assert_eq!(ids(&sorted), vec!["c", "d", "a", "e", "b"]);
}

#[test]
fn price_range_filters_inclusive() {
    let range = PriceRange { min: Some(12_000.0), max: Some(30_000.0) };
    let filtered = apply_filters(&sample(), range, SortKey::PriceLow);
    assert_eq!(ids(&filtered), vec!["b", "d", "a"]);
}

#[test]
fn price_range_open_sides() {
    assert!(PriceRange { min: None, max: Some(10.0) }.contains(0.0));
    assert!(!PriceRange { min: Some(5.0), max: None }.contains(4.99));
    assert!(PriceRange::default().contains(1e9));
}

#[test]
fn price_bound_parsing_ignores_separators() {
    assert_eq!(PriceRange::parse_bound("15.000"), Some(15_000.0));
    assert_eq!(PriceRange::parse_bound("Rp 1.500.000"), Some(1_500_000.0));
    assert_eq!(PriceRange::parse_bound("Rp 20000"), Some(20_000.0));
    assert_eq!(PriceRange::parse_bound("12.500,50"), Some(12_500.5));
    assert_eq!(PriceRange::parse_bound("-5"), None);
    assert_eq!(PriceRange::parse_bound(""), None);
    assert_eq!(PriceRange::parse_bound("abc"), None);
}

#[test]
fn sort_key_round_trips_wire_names() {
    for key in SortKey::ALL {
        assert_eq!(SortKey::parse(key.as_str()), Some(key));
    }
    assert_eq!(SortKey::parse("rating"), None);
}

// =============================================================
// Markers
// =============================================================

#[test]
fn markers_one_per_distinct_shop_slug() {
    let products = sample();
    let markers = shop_markers(&products);
    assert_eq!(products.len(), 5);
    assert_eq!(markers.len(), 3);
    let slugs: Vec<&str> = markers.iter().map(|m| m.slug.as_str()).collect();
    assert_eq!(slugs, vec!["warung-sari", "kopi-nusa", "roti-bu-ani"]);
}

#[test]
fn marker_uses_first_product_for_shop() {
    let markers = shop_markers(&sample());
    let kopi = markers.iter().find(|m| m.slug == "kopi-nusa").map(|m| m.distance);
    assert_eq!(kopi, Some(Some(0.4)));
}

#[test]
fn products_without_shop_or_coordinates_have_no_marker() {
    let mut no_coords = shop("tanpa-peta", 0.0, 0.0);
    no_coords.latitude = None;
    let products = vec![product("x", 1.0, None, None), product("y", 1.0, None, Some(no_coords))];
    assert!(shop_markers(&products).is_empty());
}

// =============================================================
// Scan lifecycle
// =============================================================

#[test]
fn map_radius_stays_at_scanned_value_when_slider_moves() {
    let mut state = NearbyState::default();
    assert_eq!(state.map_radius_km(), DEFAULT_RADIUS_KM);

    state.set_radius(3.0);
    let seq = state.begin_scan();
    state.located(seq, Ok(Coords { lat: -6.2, lng: 106.8 }));
    state.set_radius(5.5);
    assert_eq!(state.radius_km, 5.5);
    assert_eq!(state.map_radius_km(), 3.0);

    state.begin_scan();
    assert_eq!(state.scanned_radius_km, None);
    assert_eq!(state.map_radius_km(), 5.5);
}

#[test]
fn successful_scan_publishes_after_analysis() {
    let mut state = NearbyState::default();
    state.set_radius(3.2);
    let seq = state.begin_scan();
    assert_eq!(state.phase, ScanPhase::Locating);

    let query = state.located(seq, Ok(Coords { lat: -6.2, lng: 106.8 }));
    assert_eq!(query, Some(NearbyQuery { lat: -6.2, lng: 106.8, radius_km: 3.0 }));
    assert_eq!(state.phase, ScanPhase::Fetching);

    assert!(state.fetched(seq, Ok(sample())));
    assert_eq!(state.phase, ScanPhase::Analyzing);
    assert!(state.products.is_empty());

    state.finish_analysis(seq);
    assert_eq!(state.phase, ScanPhase::Done);
    assert_eq!(state.visible_products().len(), 5);
    assert_eq!(state.markers().len(), 3);
}

#[test]
fn permission_denied_never_produces_query() {
    let mut state = NearbyState::default();
    let seq = state.begin_scan();
    let query = state.located(seq, Err(GeoError::PermissionDenied));
    assert!(query.is_none());
    assert_eq!(state.phase, ScanPhase::Failed);
    assert!(!state.phase.is_scanning());
    assert_eq!(state.error.as_deref(), Some(GeoError::PermissionDenied.user_message()));
}

#[test]
fn unsupported_geolocation_reports_browser_message() {
    let mut state = NearbyState::default();
    let seq = state.begin_scan();
    assert!(state.located(seq, Err(GeoError::Unsupported)).is_none());
    assert_eq!(state.error.as_deref(), Some("Browser Anda tidak mendukung geolokasi."));
}

#[test]
fn request_error_prefers_server_message() {
    let mut state = NearbyState::default();
    let seq = state.begin_scan();
    state.located(seq, Ok(Coords { lat: 0.0, lng: 0.0 }));
    let err = ApiError::Status { status: 400, message: Some("Radius tidak valid".to_owned()) };
    assert!(!state.fetched(seq, Err(err)));
    assert_eq!(state.phase, ScanPhase::Failed);
    assert_eq!(state.error.as_deref(), Some("Radius tidak valid"));
}

#[test]
fn request_error_without_message_uses_generic_text() {
    let mut state = NearbyState::default();
    let seq = state.begin_scan();
    state.located(seq, Ok(Coords { lat: 0.0, lng: 0.0 }));
    state.fetched(seq, Err(ApiError::Decode("bad".to_owned())));
    assert_eq!(state.error.as_deref(), Some(FETCH_FAILED));
}

#[test]
fn new_scan_replaces_previous_results_and_ignores_stale_completions() {
    let mut state = NearbyState::default();
    let first = state.begin_scan();
    state.located(first, Ok(Coords { lat: 1.0, lng: 1.0 }));
    state.fetched(first, Ok(sample()));
    state.finish_analysis(first);
    assert_eq!(state.products.len(), 5);

    let second = state.begin_scan();
    assert!(state.products.is_empty());
    assert!(state.origin.is_none());
    assert!(state.located(first, Ok(Coords { lat: 9.0, lng: 9.0 })).is_none());
    assert!(!state.fetched(first, Ok(sample())));
    state.finish_analysis(first);
    assert!(state.products.is_empty());
    assert_eq!(state.phase, ScanPhase::Locating);
    assert!(second > first);
}
