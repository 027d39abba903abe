//! Aggregate derivations over the item list.
//!
//! Totals are always recomputed from the items on every read and never
//! stored, so they cannot drift from the list they describe. Carts are
//! small; linear recomputation is cheaper than keeping a cache honest.

use crate::item::CartItem;

/// Total amount: sum of unit price times quantity across all items.
pub fn total_amount(items: &[CartItem]) -> u64 {
    items.iter().map(CartItem::subtotal).sum()
}

/// Item count: sum of quantities across all items.
pub fn item_count(items: &[CartItem]) -> u32 {
    items.iter().map(|item| item.quantity).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{EntryId, ProductId};
    use crate::price::format_grouped;

    fn item(id: &str, unit_price: u64, quantity: u32) -> CartItem {
        CartItem {
            id: EntryId::new(id),
            product_id: ProductId::new(format!("p-{id}")),
            title: format!("Item {id}"),
            unit_price,
            display_price: format_grouped(unit_price),
            image_url: String::new(),
            quantity,
            shop_name: "Shop".to_string(),
        }
    }

    #[test]
    fn test_empty_cart() {
        assert_eq!(total_amount(&[]), 0);
        assert_eq!(item_count(&[]), 0);
    }

    #[test]
    fn test_single_item() {
        let items = vec![item("c1", 100000, 1)];
        assert_eq!(total_amount(&items), 100000);
        assert_eq!(item_count(&items), 1);
    }

    #[test]
    fn test_quantities_weight_both_aggregates() {
        let items = vec![item("c1", 1000, 2), item("c2", 2500, 3)];
        assert_eq!(total_amount(&items), 2 * 1000 + 3 * 2500);
        assert_eq!(item_count(&items), 5);
    }
}
