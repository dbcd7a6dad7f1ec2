use super::*;

#[test]
fn rupiah_groups_thousands() {
    assert_eq!(format_rupiah(0.0), "Rp 0");
    assert_eq!(format_rupiah(950.0), "Rp 950");
    assert_eq!(format_rupiah(15_000.0), "Rp 15.000");
    assert_eq!(format_rupiah(1_234_567.0), "Rp 1.234.567");
}

#[test]
fn rupiah_rounds_and_signs() {
    assert_eq!(format_rupiah(999.6), "Rp 1.000");
    assert_eq!(format_rupiah(-2500.0), "-Rp 2.500");
    assert_eq!(format_rupiah(f64::NAN), "Rp 0");
}

#[test]
fn distance_uses_metres_below_one_km() {
    assert_eq!(format_distance(0.25), "250 m");
    assert_eq!(format_distance(1.0), "1,0 km");
    assert_eq!(format_distance(3.46), "3,5 km");
    assert_eq!(format_distance(-1.0), "-");
}

#[test]
fn date_uses_indonesian_months() {
    assert_eq!(format_date("2026-08-17T00:00:00.000Z"), "17 Agu 2026");
    assert_eq!(format_date("2026-05-01"), "1 Mei 2026");
}

#[test]
fn datetime_includes_time_when_present() {
    assert_eq!(format_datetime("2026-12-24T19:05:00Z"), "24 Des 2026, 19:05");
    assert_eq!(format_datetime("2026-12-24"), "24 Des 2026");
}

#[test]
fn unparseable_dates_pass_through() {
    assert_eq!(format_date("kemarin"), "kemarin");
    assert_eq!(format_date("2026-13-01"), "2026-13-01");
    assert_eq!(format_datetime(""), "");
}

#[test]
fn rupiah_input_reads_indonesian_separators() {
    assert_eq!(parse_rupiah("15.000"), Some(15_000.0));
    assert_eq!(parse_rupiah("Rp 1.500.000"), Some(1_500_000.0));
    assert_eq!(parse_rupiah("Rp2.500,75"), Some(2_500.75));
    assert_eq!(parse_rupiah(" 42 "), Some(42.0));
    assert_eq!(parse_rupiah(""), None);
    assert_eq!(parse_rupiah("gratis"), None);
}
