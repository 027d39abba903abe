//! Normalized, display-ready cart item.

use crate::entry::CartEntry;
use crate::ids::{EntryId, ProductId};
use crate::price::format_grouped;
use serde::{Deserialize, Serialize};

/// A flattened cart line, ready for display and aggregation.
///
/// Items are only ever created from a server-confirmed [`CartEntry`];
/// there is no way to fabricate one locally ahead of confirmation.
/// The store keeps `quantity >= 1` for every item it holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Cart-entry identifier, carried over unchanged.
    pub id: EntryId,
    /// Product this item refers to.
    pub product_id: ProductId,
    /// Product display name.
    pub title: String,
    /// Unit price in whole currency units.
    pub unit_price: u64,
    /// Formatted unit price (thousands-grouped, no fractional part).
    pub display_price: String,
    /// Product image URL.
    pub image_url: String,
    /// Quantity.
    pub quantity: u32,
    /// Seller display name.
    pub shop_name: String,
}

impl CartItem {
    /// Line subtotal (unit price times quantity).
    pub fn subtotal(&self) -> u64 {
        self.unit_price * u64::from(self.quantity)
    }
}

impl From<CartEntry> for CartItem {
    fn from(entry: CartEntry) -> Self {
        let product = entry.product;
        Self {
            id: entry.id,
            product_id: entry.product_id,
            title: product.name,
            unit_price: product.price,
            display_price: format_grouped(product.price),
            image_url: product.image_url,
            quantity: entry.quantity,
            shop_name: product.seller.username,
        }
    }
}

/// Project server entries into display items.
///
/// Lines below the quantity floor are dropped rather than held; a
/// zero-quantity item cannot exist locally.
pub fn project(entries: Vec<CartEntry>) -> Vec<CartItem> {
    entries
        .into_iter()
        .filter(|entry| entry.quantity >= 1)
        .map(CartItem::from)
        .collect()
}
