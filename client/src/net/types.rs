//! Shared REST DTOs for the storefront/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads field-for-field so serde
//! round-trips stay lossless. Money is always integer cents; formatting is a
//! view concern (`util::format`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// IDENTITY
// =============================================================================

/// Role attached to an account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Customer,
    /// Store staff; may open the sales and stock reports.
    Staff,
}

/// An authenticated shopper as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Sign-in email address.
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
}

impl User {
    #[must_use]
    pub fn is_staff(&self) -> bool {
        self.role == UserRole::Staff
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

// =============================================================================
// CATALOG
// =============================================================================

/// A product listed in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Aisle the product is shelved under (e.g. `"produce"`, `"dairy"`).
    pub category: String,
    /// Selling unit shown next to the price (e.g. `"1 kg"`, `"each"`).
    pub unit: String,
    pub price_cents: i64,
    pub image_url: Option<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

// =============================================================================
// ACCOUNT
// =============================================================================

/// A saved delivery address.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: String,
    /// Short name picked by the shopper (e.g. `"Home"`).
    pub label: String,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub postcode: String,
    pub phone: Option<String>,
}

/// Body of `POST /api/addresses`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewAddress {
    pub label: String,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub postcode: String,
    pub phone: Option<String>,
}

/// Fulfilment stage of an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Packing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Human-readable label for order lists.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Packing => "Packing",
            Self::OutForDelivery => "Out for delivery",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// One row of the order history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: String,
    /// ISO-8601 timestamp as sent by the backend.
    pub placed_at: String,
    pub status: OrderStatus,
    pub total_cents: i64,
    pub item_count: u32,
}

/// A single product/quantity pair in a checkout request.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: u32,
}

/// Body of `POST /api/orders`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CheckoutRequest {
    pub address_id: String,
    pub delivery_slot: String,
    pub items: Vec<OrderItem>,
    pub note: Option<String>,
}

// =============================================================================
// REPORTS
// =============================================================================

/// Daily sales aggregate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalesReportRecord {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub orders: u32,
    pub items_sold: u32,
    pub revenue_cents: i64,
}

/// Stock position of one product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockReportRecord {
    pub product_id: String,
    pub product_name: String,
    pub category: String,
    pub on_hand: u32,
    pub reorder_level: u32,
}

/// Coarse stock classification derived from a [`StockReportRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum StockLevel {
    Out,
    Low,
    Healthy,
}

impl StockReportRecord {
    #[must_use]
    pub fn level(&self) -> StockLevel {
        if self.on_hand == 0 {
            StockLevel::Out
        } else if self.on_hand <= self.reorder_level {
            StockLevel::Low
        } else {
            StockLevel::Healthy
        }
    }
}

impl StockLevel {
    /// CSS modifier used by the stock table.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Out => "stock--out",
            Self::Low => "stock--low",
            Self::Healthy => "stock--ok",
        }
    }
}
