//! Marketplace DTOs mirrored from the backend's JSON responses.
//!
//! DESIGN
//! ======
//! Every entity is a flat record with read-only nested references; the REST
//! API is the source of truth and nothing here carries lifecycle logic beyond
//! display helpers. The backend serialises decimals and identifiers
//! inconsistently (numbers or strings), so the lenient deserializers below
//! accept both.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// USERS
// =============================================================================

/// Account role as reported by `/users/me`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[serde(alias = "ADMIN")]
    Admin,
    #[serde(alias = "MERCHANT", alias = "seller", alias = "SELLER")]
    Merchant,
    #[default]
    #[serde(alias = "BUYER", alias = "customer", alias = "CUSTOMER", alias = "user", alias = "USER")]
    Buyer,
}

impl Role {
    /// Indonesian display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Merchant => "Penjual",
            Self::Buyer => "Pembeli",
        }
    }
}

/// The logged-in user and their profile fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
    /// Merchant's own shop, when the account owns one.
    #[serde(default)]
    pub shop: Option<ShopRef>,
}

/// Minimal user reference embedded in orders and shops.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Profile update payload for `PUT /users/me`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A saved shipping address.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub longitude: Option<f64>,
}

impl Address {
    /// Single-line rendering used on order cards.
    pub fn one_line(&self) -> String {
        [self.street.as_str(), self.city.as_str(), self.province.as_str(), self.postal_code.as_str()]
            .into_iter()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// =============================================================================
// SHOPS
// =============================================================================

/// Merchant storefront moderation status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopStatus {
    #[default]
    #[serde(alias = "PENDING")]
    Pending,
    #[serde(alias = "ACTIVE")]
    Active,
    #[serde(alias = "SUSPENDED")]
    Suspended,
    #[serde(alias = "REJECTED")]
    Rejected,
}

impl ShopStatus {
    pub const ALL: [Self; 4] = [Self::Pending, Self::Active, Self::Suspended, Self::Rejected];

    /// Wire value used in query strings and status updates.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Rejected => "rejected",
        }
    }
}

/// A merchant storefront.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub status: ShopStatus,
    #[serde(default)]
    pub owner: Option<UserRef>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, rename = "_count")]
    pub count: Option<ShopCount>,
}

/// Aggregate counts the backend attaches to shop listings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopCount {
    #[serde(default)]
    pub products: u32,
}

/// Shop reference embedded in products, orders and users.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopRef {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub longitude: Option<f64>,
}

/// Body for `PATCH /shops/admin/:id/status`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShopStatusUpdate {
    pub status: ShopStatus,
}

// =============================================================================
// CATEGORIES
// =============================================================================

/// A product category; `children` is populated by `/categories/all`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub children: Vec<Category>,
    #[serde(default, rename = "_count")]
    pub count: CategoryCount,
}

/// Linked-record counts used by the delete guard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    #[serde(default)]
    pub products: u32,
    #[serde(default)]
    pub children: u32,
}

/// Category reference embedded in products.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

/// Body for `POST /categories` and `PUT /categories/:id`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub parent_id: Option<String>,
}

// =============================================================================
// PRODUCTS
// =============================================================================

/// A product listing. `distance` is only present on nearby results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "deserialize_i64")]
    pub stock: i64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub shop: Option<ShopRef>,
    /// Kilometres from the requested point, computed by the backend.
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub distance: Option<f64>,
}

impl Product {
    /// First image path, if any.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Minimal product reference embedded in order items.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Body for `POST /products` and `PUT /products/:id`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub category_id: String,
    pub images: Vec<String>,
    pub is_active: bool,
}

// =============================================================================
// ORDERS
// =============================================================================

/// Order payment/fulfilment status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    #[serde(alias = "PENDING")]
    Pending,
    #[serde(alias = "PAID")]
    Paid,
    #[serde(alias = "PROCESSING")]
    Processing,
    #[serde(alias = "SHIPPED")]
    Shipped,
    #[serde(alias = "COMPLETED")]
    Completed,
    #[serde(alias = "FAILED")]
    Failed,
    #[serde(alias = "CANCELLED", alias = "canceled", alias = "CANCELED")]
    Cancelled,
}

impl PaymentStatus {
    pub const ALL: [Self; 7] = [
        Self::Pending,
        Self::Paid,
        Self::Processing,
        Self::Shipped,
        Self::Completed,
        Self::Failed,
        Self::Cancelled,
    ];

    /// Wire value used in status updates.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether the order can no longer change.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }
}

/// A purchase record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub order_number: String,
    #[serde(default, alias = "status")]
    pub payment_status: PaymentStatus,
    #[serde(default, deserialize_with = "deserialize_f64")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "deserialize_f64")]
    pub shipping_cost: f64,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub shop: Option<ShopRef>,
    #[serde(default)]
    pub buyer: Option<UserRef>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub payment_proof: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

impl Order {
    /// Display number, falling back to the id when the backend omits one.
    pub fn display_number(&self) -> &str {
        if self.order_number.is_empty() { &self.id } else { &self.order_number }
    }

    /// Total quantity across all line items.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

/// One line of an order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub product_id: String,
    #[serde(default)]
    pub product: Option<ProductRef>,
    #[serde(deserialize_with = "deserialize_i64")]
    pub quantity: i64,
    #[serde(deserialize_with = "deserialize_f64")]
    pub price: f64,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let quantity = self.quantity as f64;
        self.price * quantity
    }
}

// =============================================================================
// CAROUSEL
// =============================================================================

/// Homepage hero slide.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carousel {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "deserialize_i64")]
    pub order: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Body for `POST /carousel` and `PUT /carousel/:id`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselPayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub order: i64,
    pub is_active: bool,
}

// =============================================================================
// LENIENT DESERIALIZERS
// =============================================================================

fn default_true() -> bool {
    true
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(D::Error::custom("expected string or numeric id")),
    }
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = deserialize_id(deserializer)?;
    Ok(if id.is_empty() { None } else { Some(id) })
}

fn number_from_value<E: serde::de::Error>(value: &serde_json::Value) -> Result<Option<f64>, E> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(n) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| E::custom("number out of range")),
        serde_json::Value::String(s) if s.trim().is_empty() => Ok(None),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| E::custom(format!("expected numeric string, got {s:?}"))),
        _ => Err(E::custom("expected number")),
    }
}

fn deserialize_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(number_from_value::<D::Error>(&value)?.unwrap_or(0.0))
}

fn deserialize_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    number_from_value::<D::Error>(&value)
}

fn deserialize_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if let Some(int) = value.as_i64() {
        return Ok(int);
    }
    let Some(float) = number_from_value::<D::Error>(&value)? else {
        return Ok(0);
    };
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    if float.is_finite() && float.fract() == 0.0 && float >= i64::MIN as f64 && float <= i64::MAX as f64 {
        return Ok(float as i64);
    }
    Err(D::Error::custom("expected integer-compatible number"))
}
