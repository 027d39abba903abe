//! Domain types for the Trolley cart client.
//!
//! This crate holds the pure data model shared by everything that talks
//! about carts:
//!
//! - **Entry**: the raw remote cart line, exactly as the server sends it
//! - **Item**: the flattened, display-ready projection of an entry
//! - **Aggregate**: total amount and item count, derived on every read
//! - **Price**: whole-unit price display formatting
//!
//! No I/O and no async live here; the stateful client is in
//! `trolley-client`.
//!
//! # Example
//!
//! ```rust
//! use trolley_core::prelude::*;
//!
//! let entry: CartEntry = serde_json::from_str(r#"{
//!     "id": "c1",
//!     "productId": "p1",
//!     "quantity": 2,
//!     "product": {
//!         "name": "Shoe",
//!         "price": 100000,
//!         "imageUrl": "u",
//!         "seller": {"id": "s1", "username": "ShoeShop"}
//!     }
//! }"#).unwrap();
//!
//! let item = CartItem::from(entry);
//! assert_eq!(item.display_price, "100,000");
//! assert_eq!(total_amount(&[item]), 200000);
//! ```

pub mod aggregate;
pub mod entry;
pub mod ids;
pub mod item;
pub mod price;

pub use entry::{CartEntry, ProductInfo, SellerInfo};
pub use ids::*;
pub use item::{project, CartItem};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::aggregate::{item_count, total_amount};
    pub use crate::entry::{CartEntry, ProductInfo, SellerInfo};
    pub use crate::ids::*;
    pub use crate::item::{project, CartItem};
    pub use crate::price::format_grouped;
}
