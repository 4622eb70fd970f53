//! Storefront error types.

use thiserror::Error;

/// Errors that can occur in storefront widget operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorefrontError {
    /// Price text could not be parsed into a non-negative finite amount.
    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    /// Product name was empty or whitespace.
    #[error("Product name is empty")]
    EmptyName,

    /// Checkout attempted with no items in the cart.
    #[error("Cart is empty")]
    EmptyCart,
}
