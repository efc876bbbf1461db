//! Cart Helpers
//!
//! Small formatting helpers used when logging cart contents.

use super::models::Item;

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"2x Apple @ 1.50, 1x Banana @ 0.25"`.
pub fn format_item_summary(items: &[Item]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {} @ {:.2}", i.quantity, i.name, i.price))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sum of `quantity * price` over all items
pub fn cart_total(items: &[Item]) -> f64 {
    items.iter().map(|i| f64::from(i.quantity) * i.price).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: i32, price: f64) -> Item {
        Item {
            id: name.to_lowercase(),
            name: name.into(),
            quantity,
            price,
        }
    }

    #[test]
    fn test_format_item_summary() {
        let items = vec![item("Apple", 2, 1.5), item("Banana", 1, 0.25)];
        assert_eq!(format_item_summary(&items), "2x Apple @ 1.50, 1x Banana @ 0.25");
        assert_eq!(format_item_summary(&[]), "");
    }

    #[test]
    fn test_cart_total() {
        let items = vec![item("Apple", 2, 1.5), item("Refund", -1, 0.5)];
        assert_eq!(cart_total(&items), 2.5);
    }
}
