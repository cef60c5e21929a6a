//! Cart persistence across reloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cart is mirrored into `localStorage` as JSON so a reload or a new tab
//! keeps the shopper's lines. Anything read back is untrusted (older builds,
//! hand edits), so it is normalized before the app installs it. Outside the
//! browser both directions are no-ops.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use crate::state::cart::CartState;

/// `localStorage` key for the serialized cart.
pub const CART_STORAGE_KEY: &str = "freshcart_cart";

/// Decode a stored cart and restore its line invariants. Unreadable JSON
/// counts as no cart.
pub fn decode_cart(raw: &str) -> Option<CartState> {
    match serde_json::from_str::<CartState>(raw) {
        Ok(cart) => Some(cart.normalized()),
        Err(e) => {
            log::warn!("discarding unreadable {CART_STORAGE_KEY}: {e}");
            None
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Restore the saved cart, if any.
pub fn load_cart() -> Option<CartState> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(CART_STORAGE_KEY).ok().flatten()?;
        decode_cart(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Mirror `cart` into storage; an empty cart removes the key.
pub fn save_cart(cart: &CartState) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let written = if cart.is_empty() {
            storage.remove_item(CART_STORAGE_KEY)
        } else {
            match serde_json::to_string(cart) {
                Ok(raw) => storage.set_item(CART_STORAGE_KEY, &raw),
                Err(e) => {
                    log::warn!("cart not serializable: {e}");
                    return;
                }
            }
        };
        if written.is_err() {
            log::warn!("failed to persist {CART_STORAGE_KEY}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = cart;
    }
}
