//! Cart and item types.

use crate::error::StorefrontError;
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// An item in the cart.
///
/// Items carry no identity beyond their position in the cart: two items
/// with the same name and price are distinct entries, each independently
/// removable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price captured at add time.
    pub price: Price,
}

impl CartItem {
    /// Create a new cart item.
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// A shopping cart.
///
/// Holds an ordered list of items; insertion order is display order.
/// The displayed total is the item subtotal plus a fixed base amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    /// Items in the cart.
    pub items: Vec<CartItem>,
    /// Fixed amount added on top of the item subtotal.
    pub base_amount: Price,
}

impl Cart {
    /// Create a new empty cart with a zero base amount.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            base_amount: Price::zero(),
        }
    }

    /// Set the fixed base amount.
    pub fn with_base_amount(mut self, base_amount: Price) -> Self {
        self.base_amount = base_amount;
        self
    }

    /// Add an item to the cart from catalog display strings.
    ///
    /// Parses `price_text` via [`Price::parse`]. Returns an error if the
    /// name is blank or the price text is not a valid non-negative number;
    /// the cart is left unchanged in both cases. On success, returns the
    /// position of the appended item.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        price_text: &str,
    ) -> Result<usize, StorefrontError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StorefrontError::EmptyName);
        }

        let price = Price::parse(price_text)?;
        self.items.push(CartItem::new(name, price));
        Ok(self.items.len() - 1)
    }

    /// Remove the item at `position`.
    ///
    /// Out-of-range positions are ignored. Returns whether an item was
    /// removed; relative order of the remaining items is preserved.
    pub fn remove_item(&mut self, position: usize) -> bool {
        if position >= self.items.len() {
            return false;
        }
        self.items.remove(position);
        true
    }

    /// Get the item at `position`.
    pub fn get_item(&self, position: usize) -> Option<&CartItem> {
        self.items.get(position)
    }

    /// Checkout precondition: the cart must hold at least one item.
    pub fn ensure_checkout_ready(&self) -> Result<(), StorefrontError> {
        if self.items.is_empty() {
            return Err(StorefrontError::EmptyCart);
        }
        Ok(())
    }

    /// Get the number of items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of item prices, excluding the base amount.
    pub fn items_subtotal(&self) -> Price {
        Price::sum(self.items.iter().map(|i| &i.price))
    }

    /// Displayed total: item subtotal plus the base amount.
    pub fn total(&self) -> Price {
        self.items_subtotal() + self.base_amount
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::zero());
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        let position = cart.add_item("Wireless Headphones", "$89.99").unwrap();

        assert_eq!(position, 0);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total().amount_cents, 8999);
    }

    #[test]
    fn test_add_item_parses_grouped_price() {
        let mut cart = Cart::new();
        cart.add_item("Gaming Laptop", "$1,299.00").unwrap();
        assert_eq!(cart.items[0].price.amount_cents, 129900);
    }

    #[test]
    fn test_add_item_invalid_price_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add_item("Wireless Headphones", "$89.99").unwrap();

        let result = cart.add_item("Mystery Box", "$oops");
        assert!(matches!(result, Err(StorefrontError::InvalidPrice(_))));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total().amount_cents, 8999);
    }

    #[test]
    fn test_add_item_blank_name_rejected() {
        let mut cart = Cart::new();
        let result = cart.add_item("   ", "$5.00");
        assert!(matches!(result, Err(StorefrontError::EmptyName)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_duplicate_items_are_distinct_entries() {
        let mut cart = Cart::new();
        cart.add_item("Coffee Mug", "$12.00").unwrap();
        cart.add_item("Coffee Mug", "$12.00").unwrap();

        assert_eq!(cart.len(), 2);
        assert!(cart.remove_item(1));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_item_preserves_order() {
        let mut cart = Cart::new();
        cart.add_item("First", "$1.00").unwrap();
        cart.add_item("Second", "$2.00").unwrap();
        cart.add_item("Third", "$3.00").unwrap();

        assert!(cart.remove_item(1));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items[0].name, "First");
        assert_eq!(cart.items[1].name, "Third");
    }

    #[test]
    fn test_remove_item_out_of_range_is_noop() {
        let mut cart = Cart::new();
        cart.add_item("Only", "$1.00").unwrap();

        assert!(!cart.remove_item(1));
        assert!(!cart.remove_item(99));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_checkout_ready_requires_items() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.ensure_checkout_ready(),
            Err(StorefrontError::EmptyCart)
        );

        cart.add_item("Notebook", "$4.50").unwrap();
        assert!(cart.ensure_checkout_ready().is_ok());
    }

    #[test]
    fn test_total_includes_base_amount() {
        let mut cart = Cart::new().with_base_amount(Price::new(500));
        cart.add_item("Notebook", "$4.50").unwrap();

        assert_eq!(cart.items_subtotal().amount_cents, 450);
        assert_eq!(cart.total().amount_cents, 950);
    }

    #[test]
    fn test_empty_cart_total_is_base_amount() {
        let cart = Cart::new().with_base_amount(Price::new(500));
        assert_eq!(cart.total().amount_cents, 500);
    }
}
