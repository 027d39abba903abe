//! Patch-or-resync decisions for mutation responses.
//!
//! The remote contract does not guarantee a uniform response on every
//! call path: a create may or may not echo the full cart, an update may
//! or may not echo the changed entry. Each decision function inspects
//! what actually came back and picks the cheapest commit that still
//! converges to server truth. A full resync is always the fallback,
//! never an error.

use trolley_core::{project, CartEntry, CartItem, EntryId};

/// How the store should commit a mutation's response.
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciliation {
    /// Replace local items wholesale with this projection.
    Replace(Vec<CartItem>),
    /// Patch only the quantity of the matching local item. Every other
    /// field keeps its local value; the server's echo is not trusted
    /// beyond quantity.
    PatchQuantity { entry_id: EntryId, quantity: u32 },
    /// The response was insufficient to patch locally; re-derive state
    /// from a full list call.
    Resync,
}

/// Decide how to commit a create response.
///
/// The server is supposed to return the post-mutation full cart. When it
/// does, that collection supersedes local state; when the payload was
/// absent or unusable the gateway has already degraded it to empty, and
/// an empty cart right after a successful add cannot be the truth.
pub fn after_create(entries: Vec<CartEntry>) -> Reconciliation {
    let items = project(entries);
    if items.is_empty() {
        Reconciliation::Resync
    } else {
        Reconciliation::Replace(items)
    }
}

/// Decide how to commit an update-quantity response.
///
/// An echoed entry patches the matching local item's quantity. No echo,
/// an echo for an entry not held locally, or an echo carrying a
/// below-floor quantity all force a resync.
pub fn after_quantity_update(
    items: &[CartItem],
    updated: Option<CartEntry>,
) -> Reconciliation {
    match updated {
        Some(entry) if entry.quantity >= 1 && items.iter().any(|item| item.id == entry.id) => {
            Reconciliation::PatchQuantity {
                entry_id: entry.id,
                quantity: entry.quantity,
            }
        }
        _ => Reconciliation::Resync,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trolley_core::{ProductInfo, SellerInfo};

    fn entry(id: &str, quantity: u32) -> CartEntry {
        CartEntry {
            id: EntryId::new(id),
            product_id: trolley_core::ProductId::new(format!("p-{id}")),
            quantity,
            product: ProductInfo {
                name: "Shoe".to_string(),
                price: 100000,
                image_url: "u".to_string(),
                seller: SellerInfo {
                    id: trolley_core::SellerId::new("s1"),
                    username: "ShoeShop".to_string(),
                },
            },
        }
    }

    #[test]
    fn test_create_with_collection_replaces() {
        let decision = after_create(vec![entry("c1", 1), entry("c2", 2)]);
        match decision {
            Reconciliation::Replace(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].title, "Shoe");
            }
            other => panic!("expected replace, got {other:?}"),
        }
    }

    #[test]
    fn test_create_without_collection_resyncs() {
        assert_eq!(after_create(Vec::new()), Reconciliation::Resync);
    }

    #[test]
    fn test_update_echo_patches_matching_item() {
        let items = vec![CartItem::from(entry("c1", 1))];
        let decision = after_quantity_update(&items, Some(entry("c1", 3)));
        assert_eq!(
            decision,
            Reconciliation::PatchQuantity {
                entry_id: EntryId::new("c1"),
                quantity: 3,
            }
        );
    }

    #[test]
    fn test_update_without_echo_resyncs() {
        let items = vec![CartItem::from(entry("c1", 1))];
        assert_eq!(after_quantity_update(&items, None), Reconciliation::Resync);
    }

    #[test]
    fn test_update_echo_for_unknown_entry_resyncs() {
        let items = vec![CartItem::from(entry("c1", 1))];
        let decision = after_quantity_update(&items, Some(entry("c9", 3)));
        assert_eq!(decision, Reconciliation::Resync);
    }

    #[test]
    fn test_update_echo_below_floor_resyncs() {
        let items = vec![CartItem::from(entry("c1", 1))];
        let decision = after_quantity_update(&items, Some(entry("c1", 0)));
        assert_eq!(decision, Reconciliation::Resync);
    }
}
