use super::*;
use crate::net::types::CategoryRef;

fn filled() -> ProductForm {
    ProductForm {
        name: "Kopi Gayo 250g".to_owned(),
        description: " Biji sangrai medium ".to_owned(),
        price: "85.000".to_owned(),
        stock: "12".to_owned(),
        category_id: "cat-1".to_owned(),
        images: "/uploads/a.jpg\n\n  https://cdn.example.com/b.jpg  ".to_owned(),
        is_active: true,
    }
}

#[test]
fn valid_form_builds_payload() {
    let payload = filled().validate();
    assert!(payload.as_ref().is_ok_and(|p| p.price == 85_000.0 && p.stock == 12));
    assert!(payload.as_ref().is_ok_and(|p| p.description == "Biji sangrai medium"));
    assert!(payload.is_ok_and(|p| p.images == vec!["/uploads/a.jpg", "https://cdn.example.com/b.jpg"]));
}

#[test]
fn requires_name_and_category() {
    let form = ProductForm { name: "  ".to_owned(), ..filled() };
    assert_eq!(form.validate(), Err("Nama produk wajib diisi".to_owned()));
    let form = ProductForm { category_id: String::new(), ..filled() };
    assert_eq!(form.validate(), Err("Pilih kategori produk".to_owned()));
}

#[test]
fn price_must_be_positive_number() {
    assert!(ProductForm { price: "0".to_owned(), ..filled() }.validate().is_err());
    assert!(ProductForm { price: "-5".to_owned(), ..filled() }.validate().is_err());
    assert!(ProductForm { price: "mahal".to_owned(), ..filled() }.validate().is_err());
    let decimal = ProductForm { price: "Rp 12.500,50".to_owned(), ..filled() }.validate();
    assert!(decimal.is_ok_and(|p| p.price == 12_500.5));
}

#[test]
fn stock_must_be_non_negative_integer() {
    assert!(ProductForm { stock: "0".to_owned(), ..filled() }.validate().is_ok());
    assert_eq!(
        ProductForm { stock: "-1".to_owned(), ..filled() }.validate(),
        Err("Stok tidak boleh negatif".to_owned())
    );
    assert_eq!(
        ProductForm { stock: "1.5".to_owned(), ..filled() }.validate(),
        Err("Stok harus berupa bilangan bulat".to_owned())
    );
}

#[test]
fn form_from_existing_product() {
    let product = Product {
        id: "p1".to_owned(),
        name: "Roti Sobek".to_owned(),
        slug: "roti-sobek".to_owned(),
        description: None,
        price: 18_000.0,
        stock: 4,
        images: vec!["/a.jpg".to_owned(), "/b.jpg".to_owned()],
        is_active: false,
        category: Some(CategoryRef { id: "c2".to_owned(), name: "Roti".to_owned(), slug: "roti".to_owned() }),
        shop: None,
        distance: None,
    };
    let form = ProductForm::from_product(&product);
    assert_eq!(form.price, "18000");
    assert_eq!(form.images, "/a.jpg\n/b.jpg");
    assert_eq!(form.category_id, "c2");
    assert!(!form.is_active);
    assert!(form.validate().is_ok_and(|p| p.price == 18_000.0));

    let found = search_products(std::slice::from_ref(&product), "roti");
    assert_eq!(found.len(), 1);
    assert!(search_products(&[product], "kopi").is_empty());
}

#[test]
fn default_form_starts_active_with_zero_stock() {
    let form = ProductForm::default();
    assert!(form.is_active);
    assert_eq!(form.stock, "0");
}
