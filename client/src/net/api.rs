//! REST API helpers for communicating with the storefront backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` instead of panicking so a failed
//! request degrades to a status line on the page without crashing hydration.
//! When the backend answers with a JSON `{"error": "..."}` body, that message
//! is surfaced verbatim as [`ApiError::Rejected`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    Address, CheckoutRequest, LoginRequest, NewAddress, OrderSummary, Product, RegisterRequest,
    SalesReportRecord, StockReportRecord, User,
};

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, bad body).
    #[error("network error: {0}")]
    Network(String),
    /// Non-success status without a readable error body.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The backend refused the request with a message for the user.
    #[error("{0}")]
    Rejected(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Error body the backend sends alongside 4xx responses.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// Map a non-success response to an [`ApiError`].
#[cfg(any(test, feature = "hydrate"))]
fn classify_failure(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.error.trim().is_empty() => ApiError::Rejected(parsed.error),
        _ => ApiError::Status(status),
    }
}

/// Outcome of a request whose success carries no body worth reading
/// (`204 No Content` and friends).
#[cfg(any(test, feature = "hydrate"))]
fn acknowledge(status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(classify_failure(status, body))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn products_endpoint(category: Option<&str>) -> String {
    match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(c) => format!("/api/products?category={}", urlencoding::encode(c)),
        None => "/api/products".to_owned(),
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(classify_failure(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_ack<B: serde::Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = if resp.ok() { String::new() } else { resp.text().await.unwrap_or_default() };
    acknowledge(status, &body)
}

// =============================================================================
// AUTH
// =============================================================================

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<User>("/api/auth/me").await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the credentials are refused.
pub async fn login(request: &LoginRequest) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/auth/login", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/auth/register`. The backend signs the
/// new account in and returns it.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the account is refused.
pub async fn register(request: &RegisterRequest) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/auth/register", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Ask for a password-reset email via `POST /api/auth/password-reset`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn request_password_reset(email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        post_ack("/api/auth/password-reset", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Unavailable)
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// List products, optionally narrowed to one category.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_products(category: Option<&str>) -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&products_endpoint(category)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = category;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// ACCOUNT
// =============================================================================

/// List the shopper's saved addresses.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_addresses() -> Result<Vec<Address>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/addresses").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Save a new delivery address.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the address is refused.
pub async fn create_address(address: &NewAddress) -> Result<Address, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/addresses", address).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = address;
        Err(ApiError::Unavailable)
    }
}

/// List the shopper's past orders, newest first.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_orders() -> Result<Vec<OrderSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/orders").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Submit the cart as an order.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the order is refused.
pub async fn place_order(request: &CheckoutRequest) -> Result<OrderSummary, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/orders", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// REPORTS
// =============================================================================

/// Daily sales aggregates.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_sales_report() -> Result<Vec<SalesReportRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/reports/sales").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Current stock positions.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails.
pub async fn fetch_stock_report() -> Result<Vec<StockReportRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/reports/stock").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
