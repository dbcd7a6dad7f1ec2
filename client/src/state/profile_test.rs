use super::*;

fn address() -> Address {
    Address {
        label: " Rumah ".to_owned(),
        recipient_name: "Siti".to_owned(),
        phone: "0812-3456-7890".to_owned(),
        street: "Jl. Melati 5".to_owned(),
        city: "Bandung".to_owned(),
        province: "Jawa Barat".to_owned(),
        postal_code: "40115".to_owned(),
        ..Address::default()
    }
}

#[test]
fn profile_requires_name() {
    let form = ProfileForm { name: " ".to_owned(), phone: String::new() };
    assert_eq!(form.validate(), Err("Nama wajib diisi".to_owned()));
}

#[test]
fn profile_blank_phone_is_omitted() {
    let form = ProfileForm { name: "Siti ".to_owned(), phone: "  ".to_owned() };
    assert_eq!(form.validate(), Ok(ProfileUpdate { name: "Siti".to_owned(), phone: None }));
}

#[test]
fn profile_rejects_bad_phone() {
    let form = ProfileForm { name: "Siti".to_owned(), phone: "12ab".to_owned() };
    assert!(form.validate().is_err());
}

#[test]
fn phone_shapes() {
    assert!(is_phone("+62 812 3456 789"));
    assert!(is_phone("081234567890"));
    assert!(!is_phone("1234"));
    assert!(!is_phone("0812+3456"));
    assert!(!is_phone(""));
}

#[test]
fn address_is_trimmed_and_accepted() {
    let out = validate_address(&address());
    assert!(out.is_ok_and(|a| a.label == "Rumah"));
}

#[test]
fn address_required_fields() {
    let mut a = address();
    a.city = " ".to_owned();
    assert_eq!(validate_address(&a), Err("Alamat dan kota wajib diisi".to_owned()));
    let mut a = address();
    a.recipient_name.clear();
    assert!(validate_address(&a).is_err());
    let mut a = address();
    a.postal_code = "401".to_owned();
    assert_eq!(validate_address(&a), Err("Kode pos harus 5 digit".to_owned()));
}

#[test]
fn default_address_sorts_first() {
    let mut list = vec![
        Address { label: "A".to_owned(), ..Address::default() },
        Address { label: "Z".to_owned(), is_default: true, ..Address::default() },
        Address { label: "B".to_owned(), ..Address::default() },
    ];
    sort_addresses(&mut list);
    let labels: Vec<&str> = list.iter().map(|a| a.label.as_str()).collect();
    assert_eq!(labels, vec!["Z", "A", "B"]);
}
