//! Response-envelope decoding.
//!
//! The cart service is not consistent about how it wraps payloads: the
//! same endpoint may return a bare collection, or an object carrying the
//! collection under a `data` field, or nothing usable at all. All shape
//! recognition lives here, in one decoder, so the rest of the client
//! never inspects raw JSON. Anything unrecognized decodes to `None`
//! ("no usable payload") rather than an error; callers fall back to an
//! empty list or a forced resync.

use serde_json::Value;
use trolley_core::CartEntry;

/// Field under which wrapped payloads carry their data.
const DATA_FIELD: &str = "data";

/// Decode a list-bearing payload into cart entries.
///
/// Recognizes a bare JSON array, or an object with the array under
/// `data`. Returns `None` for any other shape, and for arrays whose
/// elements do not all deserialize as entries.
pub fn entry_list(value: &Value) -> Option<Vec<CartEntry>> {
    let collection = match value {
        Value::Array(_) => value,
        Value::Object(map) => map.get(DATA_FIELD)?,
        _ => return None,
    };
    let raw_entries = collection.as_array()?;

    let mut entries = Vec::with_capacity(raw_entries.len());
    for raw in raw_entries {
        entries.push(serde_json::from_value(raw.clone()).ok()?);
    }
    Some(entries)
}

/// Decode a single-entry payload.
///
/// Recognizes a bare entry object, or an object with the entry under
/// `data`. Returns `None` for any other shape.
pub fn single_entry(value: &Value) -> Option<CartEntry> {
    let raw = match value {
        Value::Object(map) if map.contains_key(DATA_FIELD) => map.get(DATA_FIELD)?,
        _ => value,
    };
    serde_json::from_value(raw.clone()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_entry(id: &str, quantity: u32) -> Value {
        json!({
            "id": id,
            "productId": format!("p-{id}"),
            "quantity": quantity,
            "product": {
                "name": "Shoe",
                "price": 100000,
                "imageUrl": "u",
                "seller": {"id": "s1", "username": "ShoeShop"}
            }
        })
    }

    #[test]
    fn test_bare_list() {
        let entries = entry_list(&json!([raw_entry("c1", 1), raw_entry("c2", 2)])).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].quantity, 2);
    }

    #[test]
    fn test_wrapped_list() {
        let entries = entry_list(&json!({"data": [raw_entry("c1", 1)]})).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id.as_str(), "c1");
    }

    #[test]
    fn test_empty_list_is_usable() {
        assert_eq!(entry_list(&json!([])).unwrap().len(), 0);
        assert_eq!(entry_list(&json!({"data": []})).unwrap().len(), 0);
    }

    #[test]
    fn test_unrecognized_list_shapes_degrade() {
        assert!(entry_list(&json!("nope")).is_none());
        assert!(entry_list(&json!(42)).is_none());
        assert!(entry_list(&json!({"items": []})).is_none());
        assert!(entry_list(&json!({"data": "nope"})).is_none());
        assert!(entry_list(&json!({"data": null})).is_none());
    }

    #[test]
    fn test_list_with_bad_element_degrades() {
        let payload = json!([raw_entry("c1", 1), {"id": "c2"}]);
        assert!(entry_list(&payload).is_none());
    }

    #[test]
    fn test_bare_entry() {
        let entry = single_entry(&raw_entry("c1", 3)).unwrap();
        assert_eq!(entry.id.as_str(), "c1");
        assert_eq!(entry.quantity, 3);
    }

    #[test]
    fn test_wrapped_entry() {
        let entry = single_entry(&json!({"data": raw_entry("c1", 3)})).unwrap();
        assert_eq!(entry.quantity, 3);
    }

    #[test]
    fn test_unrecognized_entry_shapes_degrade() {
        assert!(single_entry(&json!(null)).is_none());
        assert!(single_entry(&json!({"id": "c1"})).is_none());
        assert!(single_entry(&json!({"data": null})).is_none());
        assert!(single_entry(&json!([raw_entry("c1", 1)])).is_none());
    }
}
