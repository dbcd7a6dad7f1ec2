//! REST API client for the marketplace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sent with browser
//! credentials so the backend session cookie travels along.
//! Server-side (SSR): every call resolves to `ApiError::Unavailable`; pages
//! fetch on mount in the browser only.
//!
//! ERROR HANDLING
//! ==============
//! Calls return `Result<_, ApiError>`. Pages turn the error into an Indonesian
//! toast via [`ApiError::user_message`] and keep their previous state; the raw
//! error is logged to the console here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    Address, Carousel, CarouselPayload, Category, CategoryPayload, Order, PaymentStatus, Product, ProductPayload,
    ProfileUpdate, Shop, ShopStatus, ShopStatusUpdate, User,
};

/// Backend base URL used when `LAPAK_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:4000/api";

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Human-readable Indonesian message, preferring the server's own text.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            Self::Status { status: 401, .. } => "Sesi Anda telah berakhir, silakan masuk kembali.".to_owned(),
            Self::Status { status: 403, .. } => "Anda tidak memiliki akses untuk tindakan ini.".to_owned(),
            Self::Status { status: 404, .. } => "Data tidak ditemukan.".to_owned(),
            Self::Network(_) => "Tidak dapat terhubung ke server. Periksa koneksi Anda.".to_owned(),
            _ => fallback.to_owned(),
        }
    }
}

/// Configured API base URL without a trailing slash.
pub fn api_base_url() -> &'static str {
    option_env!("LAPAK_API_URL").unwrap_or(DEFAULT_API_URL).trim_end_matches('/')
}

/// Absolute URL for an API path such as `/products/public`.
pub fn endpoint(path: &str) -> String {
    join_url(api_base_url(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Browser URL that starts the Google OAuth flow on the backend.
pub fn google_login_url() -> String {
    endpoint("/auth/google")
}

/// Query for `GET /products/nearby`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lng: f64,
    pub radius_km: f64,
}

impl NearbyQuery {
    pub fn path(&self) -> String {
        format!("/products/nearby?lat={}&lng={}&radius={}", self.lat, self.lng, self.radius_km)
    }
}

/// Extract the backend's error text. NestJS-style validation errors carry an
/// array of messages; those are joined.
#[cfg(any(test, feature = "hydrate"))]
fn error_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("message").or_else(|| value.get("error"))?;
    match message {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        serde_json::Value::Array(items) => {
            let joined = items
                .iter()
                .filter_map(serde_json::Value::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            if joined.is_empty() { None } else { Some(joined) }
        }
        _ => None,
    }
}

/// Decode a response body, accepting either the bare payload or a
/// `{ "data": ... }` envelope.
#[cfg(any(test, feature = "hydrate"))]
fn parse_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status { status, message: error_message_from_body(body) });
    }
    let value: serde_json::Value = if body.trim().is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?
    };
    if let Some(data) = value.get("data") {
        if let Ok(parsed) = serde_json::from_value::<T>(data.clone()) {
            return Ok(parsed);
        }
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Check a response that carries no payload of interest.
#[cfg(any(test, feature = "hydrate"))]
fn expect_success(status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status { status, message: error_message_from_body(body) })
    }
}

#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    #[cfg(feature = "hydrate")]
    fn builder(self, url: &str) -> gloo_net::http::RequestBuilder {
        use gloo_net::http::Request;
        let builder = match self {
            Self::Get => Request::get(url),
            Self::Post => Request::post(url),
            Self::Put => Request::put(url),
            Self::Patch => Request::patch(url),
            Self::Delete => Request::delete(url),
        };
        builder.credentials(web_sys::RequestCredentials::Include)
    }
}

#[cfg(feature = "hydrate")]
async fn read_body(resp: gloo_net::http::Response) -> Result<(u16, String), ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    Ok((status, body))
}

#[cfg(feature = "hydrate")]
fn log_failure<T>(verb: Verb, path: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(e) = &result {
        leptos::logging::warn!("{verb:?} {path} failed: {e}");
    }
    result
}

async fn request<T, B>(verb: Verb, path: &str, body: Option<&B>) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(path);
        let result = async {
            let builder = verb.builder(&url);
            let resp = match body {
                Some(body) => builder
                    .json(body)
                    .map_err(|e| ApiError::Decode(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;
            let (status, text) = read_body(resp).await?;
            parse_response::<T>(status, &text)
        }
        .await;
        log_failure(verb, path, result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, body);
        Err(ApiError::Unavailable)
    }
}

async fn request_empty<B>(verb: Verb, path: &str, body: Option<&B>) -> Result<(), ApiError>
where
    B: Serialize,
{
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(path);
        let result = async {
            let builder = verb.builder(&url);
            let resp = match body {
                Some(body) => builder
                    .json(body)
                    .map_err(|e| ApiError::Decode(e.to_string()))?
                    .send()
                    .await,
                None => builder.send().await,
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;
            let (status, text) = read_body(resp).await?;
            expect_success(status, &text)
        }
        .await;
        log_failure(verb, path, result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, body);
        Err(ApiError::Unavailable)
    }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    request::<T, ()>(Verb::Get, path, None).await
}

// =============================================================================
// AUTH + PROFILE
// =============================================================================

/// Fetch the logged-in user from `/users/me`.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    get_json("/users/me").await
}

/// Update name/phone via `PUT /users/me`.
pub async fn update_profile(update: &ProfileUpdate) -> Result<User, ApiError> {
    request(Verb::Put, "/users/me", Some(update)).await
}

/// End the backend session via `POST /auth/logout`.
pub async fn logout() -> Result<(), ApiError> {
    request_empty::<()>(Verb::Post, "/auth/logout", None).await
}

pub async fn fetch_addresses() -> Result<Vec<Address>, ApiError> {
    get_json("/addresses").await
}

pub async fn create_address(address: &Address) -> Result<Address, ApiError> {
    request(Verb::Post, "/addresses", Some(address)).await
}

pub async fn update_address(id: &str, address: &Address) -> Result<Address, ApiError> {
    request(Verb::Put, &format!("/addresses/{id}"), Some(address)).await
}

pub async fn delete_address(id: &str) -> Result<(), ApiError> {
    request_empty::<()>(Verb::Delete, &format!("/addresses/{id}"), None).await
}

// =============================================================================
// PRODUCTS
// =============================================================================

/// Products within `radius_km` of a point, with backend-computed distances.
pub async fn fetch_nearby_products(query: &NearbyQuery) -> Result<Vec<Product>, ApiError> {
    get_json(&query.path()).await
}

pub async fn fetch_public_products() -> Result<Vec<Product>, ApiError> {
    get_json("/products/public").await
}

/// Products owned by the logged-in merchant.
pub async fn fetch_my_products() -> Result<Vec<Product>, ApiError> {
    get_json("/products/my-products").await
}

pub async fn fetch_product(id: &str) -> Result<Product, ApiError> {
    get_json(&format!("/products/{id}")).await
}

pub async fn create_product(payload: &ProductPayload) -> Result<Product, ApiError> {
    request(Verb::Post, "/products", Some(payload)).await
}

pub async fn update_product(id: &str, payload: &ProductPayload) -> Result<Product, ApiError> {
    request(Verb::Put, &format!("/products/{id}"), Some(payload)).await
}

pub async fn delete_product(id: &str) -> Result<(), ApiError> {
    request_empty::<()>(Verb::Delete, &format!("/products/{id}"), None).await
}

// =============================================================================
// CATEGORIES
// =============================================================================

/// Top-level categories for public browsing.
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    get_json("/categories").await
}

/// Every category including children and counts, for the admin tree.
pub async fn fetch_all_categories() -> Result<Vec<Category>, ApiError> {
    get_json("/categories/all").await
}

pub async fn create_category(payload: &CategoryPayload) -> Result<Category, ApiError> {
    request(Verb::Post, "/categories", Some(payload)).await
}

pub async fn update_category(id: &str, payload: &CategoryPayload) -> Result<Category, ApiError> {
    request(Verb::Put, &format!("/categories/{id}"), Some(payload)).await
}

pub async fn delete_category(id: &str) -> Result<(), ApiError> {
    request_empty::<()>(Verb::Delete, &format!("/categories/{id}"), None).await
}

// =============================================================================
// CAROUSEL
// =============================================================================

/// Active slides for the homepage.
pub async fn fetch_carousel() -> Result<Vec<Carousel>, ApiError> {
    get_json("/carousel").await
}

/// All slides including inactive ones.
pub async fn fetch_carousel_admin() -> Result<Vec<Carousel>, ApiError> {
    get_json("/carousel/admin").await
}

pub async fn create_carousel(payload: &CarouselPayload) -> Result<Carousel, ApiError> {
    request(Verb::Post, "/carousel", Some(payload)).await
}

pub async fn update_carousel(id: &str, payload: &CarouselPayload) -> Result<Carousel, ApiError> {
    request(Verb::Put, &format!("/carousel/{id}"), Some(payload)).await
}

pub async fn delete_carousel(id: &str) -> Result<(), ApiError> {
    request_empty::<()>(Verb::Delete, &format!("/carousel/{id}"), None).await
}

// =============================================================================
// SHOPS
// =============================================================================

pub async fn fetch_public_shops() -> Result<Vec<Shop>, ApiError> {
    get_json("/shops/public").await
}

pub async fn fetch_admin_shops() -> Result<Vec<Shop>, ApiError> {
    get_json("/shops/admin/all").await
}

pub async fn update_shop_status(id: &str, status: ShopStatus) -> Result<Shop, ApiError> {
    request(Verb::Patch, &format!("/shops/admin/{id}/status"), Some(&ShopStatusUpdate { status })).await
}

// =============================================================================
// ORDERS
// =============================================================================

/// Orders placed by the logged-in buyer.
pub async fn fetch_my_orders() -> Result<Vec<Order>, ApiError> {
    get_json("/orders/my-orders").await
}

/// Orders received by the logged-in merchant's shop.
pub async fn fetch_shop_orders() -> Result<Vec<Order>, ApiError> {
    get_json("/orders/shop").await
}

pub async fn fetch_order(id: &str) -> Result<Order, ApiError> {
    get_json(&format!("/orders/{id}")).await
}

pub async fn update_order_status(id: &str, status: PaymentStatus) -> Result<Order, ApiError> {
    let body = serde_json::json!({ "status": status });
    request(Verb::Patch, &format!("/orders/{id}/status"), Some(&body)).await
}

/// Accept or reject the buyer's payment proof.
pub async fn verify_payment(id: &str, approved: bool) -> Result<Order, ApiError> {
    let body = serde_json::json!({ "approved": approved });
    request(Verb::Post, &format!("/orders/{id}/verify-payment"), Some(&body)).await
}

pub async fn cancel_order(id: &str, reason: Option<&str>) -> Result<Order, ApiError> {
    let body = serde_json::json!({ "reason": reason });
    request(Verb::Post, &format!("/orders/{id}/cancel"), Some(&body)).await
}

/// Buyer confirms the parcel arrived.
pub async fn receive_order(id: &str) -> Result<Order, ApiError> {
    request::<Order, ()>(Verb::Post, &format!("/orders/{id}/receive"), None).await
}

/// Upload a payment-proof image as multipart form data.
#[cfg(feature = "hydrate")]
pub async fn upload_payment_proof(id: &str, file: &web_sys::File) -> Result<Order, ApiError> {
    let path = format!("/orders/{id}/upload-proof");
    let url = endpoint(&path);
    let result = async {
        let form = web_sys::FormData::new().map_err(|e| ApiError::Decode(format!("{e:?}")))?;
        form.append_with_blob_and_filename("proof", file, &file.name())
            .map_err(|e| ApiError::Decode(format!("{e:?}")))?;
        let resp = Verb::Post
            .builder(&url)
            .body(form)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let (status, text) = read_body(resp).await?;
        parse_response::<Order>(status, &text)
    }
    .await;
    log_failure(Verb::Post, &path, result)
}
