use super::*;

fn marker(slug: &str, distance: Option<f64>) -> ShopMarker {
    ShopMarker { slug: slug.to_owned(), name: format!("Toko {slug}"), lat: -6.9, lng: 107.6, distance }
}

#[test]
fn no_plan_without_origin() {
    assert!(map_plan(None, 2.0, &[marker("a", None)]).is_none());
}

#[test]
fn plan_has_one_pin_per_marker_and_radius_in_meters() {
    let origin = Some(Coords { lat: -6.91, lng: 107.61 });
    let plan = map_plan(origin, 2.5, &[marker("a", Some(0.3)), marker("b", None)]);
    assert!(plan.as_ref().is_some_and(|p| p.pins.len() == 2 && p.radius_m == 2500.0));
    assert!(plan.as_ref().is_some_and(|p| p.pins[0].popup == "Toko a · 300 m"));
    assert!(plan.is_some_and(|p| p.pins[1].popup == "Toko b" && p.zoom == 14));
}

#[test]
fn zoom_widens_with_radius() {
    assert_eq!(zoom_for_radius(1.0), 15);
    assert_eq!(zoom_for_radius(3.0), 14);
    assert_eq!(zoom_for_radius(4.5), 13);
    assert_eq!(zoom_for_radius(6.0), 12);
}

#[test]
fn shop_names_are_escaped_in_popups() {
    let origin = Some(Coords { lat: -6.91, lng: 107.61 });
    let hostile = ShopMarker {
        slug: "x".to_owned(),
        name: "<img src=x onerror=alert(1)>".to_owned(),
        lat: -6.9,
        lng: 107.6,
        distance: Some(1.2),
    };
    let plan = map_plan(origin, 2.0, &[hostile]).unwrap();
    let popup = &plan.pins[0].popup;
    assert!(!popup.contains('<') && !popup.contains('>'), "{popup}");
    assert_eq!(popup, "&lt;img src=x onerror=alert(1)&gt; · 1,2 km");
}

#[test]
fn escape_html_covers_attribute_quotes() {
    assert_eq!(escape_html(r#"Toko "Bu" Ani's & Co"#), "Toko &quot;Bu&quot; Ani&#39;s &amp; Co");
    assert_eq!(escape_html("Warung Sederhana"), "Warung Sederhana");
}
