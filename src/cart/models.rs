//! Cart Domain Models
//!
//! This module contains the data structures exchanged by the cart service:
//! the `Item` and `Cart` records and the request/response payload of every
//! service operation.

use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// A single product line within a cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Item identifier (expected, but not enforced, to be unique within a cart)
    pub id: String,

    /// Display name of the product
    pub name: String,

    /// Number of units; the sign is not checked
    pub quantity: i32,

    /// Unit price; the sign is not checked
    pub price: f64,
}

/// A named collection of items associated with one identifier
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Cart identifier
    pub id: String,

    /// Items in insertion order
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Cart {
    /// Creates a cart holding exactly one item
    pub fn with_item(id: impl Into<String>, item: Item) -> Self {
        Self {
            id: id.into(),
            items: vec![item],
        }
    }
}

// =============================================================================
// Operation Payloads
// =============================================================================

/// Input for the AddItem operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub cart_id: String,
    pub item: Item,
}

/// Output of the AddItem operation; a cart always exists afterwards
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddItemResponse {
    pub cart: Cart,
}

/// Input for the GetCart operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCartRequest {
    pub cart_id: String,
}

/// Output of the GetCart operation (`null` cart when unknown)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetCartResponse {
    pub cart: Option<Cart>,
}

/// Input for the RemoveItem operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveItemRequest {
    pub cart_id: String,
    pub item_id: String,
}

/// Output of the RemoveItem operation (`null` cart when unknown)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoveItemResponse {
    pub cart: Option<Cart>,
}

/// Input for the ClearCart operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearCartRequest {
    pub cart_id: String,
}

/// Output of the ClearCart operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClearCartResponse {
    pub cart: Option<Cart>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cart_wire_shape() {
        let cart = Cart::with_item(
            "1",
            Item {
                id: "1".into(),
                name: "apple".into(),
                quantity: 1,
                price: 10.0,
            },
        );

        let value = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "1",
                "items": [{ "id": "1", "name": "apple", "quantity": 1, "price": 10.0 }]
            })
        );
    }

    #[test]
    fn test_absent_cart_serializes_as_null() {
        let value = serde_json::to_value(GetCartResponse { cart: None }).unwrap();
        assert_eq!(value, json!({ "cart": null }));
    }

    #[test]
    fn test_requests_use_camel_case() {
        let req: RemoveItemRequest =
            serde_json::from_value(json!({ "cartId": "c", "itemId": "i" })).unwrap();
        assert_eq!(req.cart_id, "c");
        assert_eq!(req.item_id, "i");
    }

    #[test]
    fn test_negative_values_are_accepted() {
        let item: Item = serde_json::from_value(
            json!({ "id": "x", "name": "refund", "quantity": -2, "price": -3.5 }),
        )
        .unwrap();
        assert_eq!(item.quantity, -2);
        assert_eq!(item.price, -3.5);
    }
}
