//! Raw remote cart entry shape.
//!
//! `CartEntry` mirrors the cart service's wire format exactly, nested
//! product and seller objects included. It is the source of truth for
//! everything the client holds locally; display types are projections
//! of it (see [`crate::item`]).

use crate::ids::{EntryId, ProductId, SellerId};
use serde::{Deserialize, Serialize};

/// One cart line as the server represents it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    /// Stable cart-entry identifier.
    pub id: EntryId,
    /// Product this entry refers to.
    pub product_id: ProductId,
    /// Quantity, at least 1 per the remote contract.
    pub quantity: u32,
    /// Nested product data.
    pub product: ProductInfo,
}

/// Product data nested inside a cart entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    /// Product display name.
    pub name: String,
    /// Unit price in whole currency units.
    pub price: u64,
    /// Product image URL.
    pub image_url: String,
    /// Nested seller data.
    pub seller: SellerInfo,
}

/// Seller data nested inside a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SellerInfo {
    /// Seller identifier.
    pub id: SellerId,
    /// Seller display name.
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_shape() {
        let raw = r#"{
            "id": "c1",
            "productId": "p1",
            "quantity": 2,
            "product": {
                "name": "Shoe",
                "price": 100000,
                "imageUrl": "https://cdn.example.com/shoe.png",
                "seller": {"id": "s1", "username": "ShoeShop"}
            }
        }"#;

        let entry: CartEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.id.as_str(), "c1");
        assert_eq!(entry.product_id.as_str(), "p1");
        assert_eq!(entry.quantity, 2);
        assert_eq!(entry.product.name, "Shoe");
        assert_eq!(entry.product.price, 100000);
        assert_eq!(entry.product.seller.username, "ShoeShop");
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let entry = CartEntry {
            id: EntryId::new("c1"),
            product_id: ProductId::new("p1"),
            quantity: 1,
            product: ProductInfo {
                name: "Shoe".to_string(),
                price: 100000,
                image_url: "u".to_string(),
                seller: SellerInfo {
                    id: SellerId::new("s1"),
                    username: "ShoeShop".to_string(),
                },
            },
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["productId"], "p1");
        assert_eq!(json["product"]["imageUrl"], "u");
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let raw = r#"{"id": "c1", "quantity": 1}"#;
        assert!(serde_json::from_str::<CartEntry>(raw).is_err());
    }
}
