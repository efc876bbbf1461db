//! Cart Service Contract
//!
//! `CartService` is the request handler seen by every transport. Operations
//! the handler does not back keep their default body, which fails fast with
//! [`ServiceError::Unimplemented`].

use super::{helpers::format_item_summary, models::*, state::AppState};
use crate::error::ServiceError;
use tracing::debug;

/// Operations exposed by the cart service
pub trait CartService {
    /// Creates the cart on first use; an existing cart is returned unchanged.
    fn add_item(&self, request: AddItemRequest) -> Result<AddItemResponse, ServiceError>;

    /// Looks up a cart; unknown ids yield `cart: None`.
    fn get_cart(&self, request: GetCartRequest) -> Result<GetCartResponse, ServiceError>;

    /// Removes every item with the given id; unknown carts yield `cart: None`.
    fn remove_item(&self, request: RemoveItemRequest) -> Result<RemoveItemResponse, ServiceError>;

    /// Empties a cart.
    fn clear_cart(&self, _request: ClearCartRequest) -> Result<ClearCartResponse, ServiceError> {
        Err(ServiceError::Unimplemented("ClearCart"))
    }
}

impl CartService for AppState {
    fn add_item(&self, request: AddItemRequest) -> Result<AddItemResponse, ServiceError> {
        let cart = self.store.add_item(&request.cart_id, request.item);
        debug!(cart_id = %cart.id, items = %format_item_summary(&cart.items), "AddItem");

        Ok(AddItemResponse { cart })
    }

    fn get_cart(&self, request: GetCartRequest) -> Result<GetCartResponse, ServiceError> {
        let cart = self.store.get_cart(&request.cart_id);
        debug!(cart_id = %request.cart_id, found = cart.is_some(), "GetCart");

        Ok(GetCartResponse { cart })
    }

    fn remove_item(&self, request: RemoveItemRequest) -> Result<RemoveItemResponse, ServiceError> {
        let cart = self.store.remove_item(&request.cart_id, &request.item_id);
        debug!(
            cart_id = %request.cart_id,
            item_id = %request.item_id,
            found = cart.is_some(),
            "RemoveItem"
        );

        Ok(RemoveItemResponse { cart })
    }
}
