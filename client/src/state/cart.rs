//! Shopping cart state.
//!
//! DESIGN
//! ======
//! The cart lives entirely in the browser until checkout submits it. Lines are
//! kept in insertion order so the cart page lists items the way they were
//! added; each product appears at most once.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{OrderItem, Product};

/// Largest quantity a single line may hold.
pub const MAX_LINE_QUANTITY: u32 = 99;
/// Flat delivery charge below the free-delivery threshold.
pub const DELIVERY_FEE_CENTS: i64 = 499;
/// Subtotal at or above which delivery is free.
pub const FREE_DELIVERY_THRESHOLD_CENTS: i64 = 5_000;

/// One product and how many of it the shopper wants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    #[must_use]
    pub fn line_total_cents(&self) -> i64 {
        self.product.price_cents * i64::from(self.quantity)
    }
}

/// Cart contents shared through context.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    pub lines: Vec<CartLine>,
}

impl CartState {
    /// Add `quantity` of `product`, merging with an existing line.
    ///
    /// Returns `false` (and leaves the cart unchanged) for out-of-stock
    /// products or a zero quantity. Quantities saturate at
    /// [`MAX_LINE_QUANTITY`].
    pub fn add(&mut self, product: &Product, quantity: u32) -> bool {
        if !product.in_stock || quantity == 0 {
            return false;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity).min(MAX_LINE_QUANTITY);
            line.product = product.clone();
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: quantity.min(MAX_LINE_QUANTITY),
            });
        }
        true
    }

    /// Set the quantity of `product_id`; zero removes the line.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity.min(MAX_LINE_QUANTITY);
        }
    }

    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Re-establish the line invariants on a cart that did not come from
    /// [`add`](Self::add): one line per product (first position wins, later
    /// duplicates merge into it), quantities capped at [`MAX_LINE_QUANTITY`],
    /// and no zero-quantity lines.
    #[must_use]
    pub fn normalized(self) -> Self {
        let mut lines: Vec<CartLine> = Vec::with_capacity(self.lines.len());
        for line in self.lines {
            match lines.iter_mut().find(|l| l.product.id == line.product.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity).min(MAX_LINE_QUANTITY);
                }
                None => lines.push(CartLine { quantity: line.quantity.min(MAX_LINE_QUANTITY), ..line }),
            }
        }
        lines.retain(|l| l.quantity > 0);
        Self { lines }
    }

    /// Total units across all lines (what the header badge shows).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().fold(0, |acc, l| acc.saturating_add(l.quantity))
    }

    #[must_use]
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.lines
            .iter()
            .find(|l| l.product.id == product_id)
            .map_or(0, |l| l.quantity)
    }

    #[must_use]
    pub fn subtotal_cents(&self) -> i64 {
        self.lines.iter().map(CartLine::line_total_cents).sum()
    }

    /// Delivery charge for the current subtotal. An empty cart costs nothing.
    #[must_use]
    pub fn delivery_fee_cents(&self) -> i64 {
        let subtotal = self.subtotal_cents();
        if self.is_empty() || subtotal >= FREE_DELIVERY_THRESHOLD_CENTS {
            0
        } else {
            DELIVERY_FEE_CENTS
        }
    }

    #[must_use]
    pub fn total_cents(&self) -> i64 {
        self.subtotal_cents() + self.delivery_fee_cents()
    }

    /// Order items for a checkout request.
    #[must_use]
    pub fn order_items(&self) -> Vec<OrderItem> {
        self.lines
            .iter()
            .map(|l| OrderItem { product_id: l.product.id.clone(), quantity: l.quantity })
            .collect()
    }
}
