use super::*;

#[test]
fn slugify_lowercases_and_dashes() {
    assert_eq!(slugify("Makanan & Minuman"), "makanan-minuman");
    assert_eq!(slugify("  Kopi  Susu  "), "kopi-susu");
    assert_eq!(slugify("--Sayur--Segar--"), "sayur-segar");
}

#[test]
fn slugify_drops_non_ascii() {
    assert_eq!(slugify("Café Ümit 2"), "caf-mit-2");
    assert_eq!(slugify("!!!"), "");
}

#[test]
fn slug_falls_back_to_name() {
    assert_eq!(slug_or_from_name("", "Oleh-oleh Khas"), "oleh-oleh-khas");
    assert_eq!(slug_or_from_name("  ", "Batik"), "batik");
    assert_eq!(slug_or_from_name("Custom Slug", "Batik"), "custom-slug");
}
