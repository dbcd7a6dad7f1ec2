//! Merchant product management: form validation and list search.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::net::types::{Product, ProductPayload};
use crate::util::format::parse_rupiah;

/// Local state of the product modal. Numeric fields stay as typed text
/// until validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub category_id: String,
    /// One image URL per line.
    pub images: String,
    pub is_active: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            stock: "0".to_owned(),
            category_id: String::new(),
            images: String::new(),
            is_active: true,
        }
    }
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: format_plain(product.price),
            stock: product.stock.to_string(),
            category_id: product.category.as_ref().map(|c| c.id.clone()).unwrap_or_default(),
            images: product.images.join("\n"),
            is_active: product.is_active,
        }
    }

    pub fn validate(&self) -> Result<ProductPayload, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Nama produk wajib diisi".to_owned());
        }
        let category_id = self.category_id.trim();
        if category_id.is_empty() {
            return Err("Pilih kategori produk".to_owned());
        }
        let price = parse_rupiah(&self.price).ok_or_else(|| "Harga harus berupa angka".to_owned())?;
        if price <= 0.0 {
            return Err("Harga harus lebih dari 0".to_owned());
        }
        let stock: i64 = self.stock.trim().parse().map_err(|_| "Stok harus berupa bilangan bulat".to_owned())?;
        if stock < 0 {
            return Err("Stok tidak boleh negatif".to_owned());
        }
        Ok(ProductPayload {
            name: name.to_owned(),
            description: self.description.trim().to_owned(),
            price,
            stock,
            category_id: category_id.to_owned(),
            images: self.images.lines().map(str::trim).filter(|l| !l.is_empty()).map(str::to_owned).collect(),
            is_active: self.is_active,
        })
    }
}

fn format_plain(price: f64) -> String {
    if price.fract() == 0.0 { format!("{price:.0}") } else { price.to_string().replace('.', ",") }
}

/// Case-insensitive search over name and category.
pub fn search_products(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    products
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.category.as_ref().is_some_and(|c| c.name.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Count of listings with no stock left.
pub fn out_of_stock(products: &[Product]) -> usize {
    products.iter().filter(|p| p.stock <= 0).count()
}
