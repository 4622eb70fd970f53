//! Page effects produced by the engine.
//!
//! Effects describe what the host must do to the page after a state
//! transition; the engine itself never touches the page.

use serde::{Deserialize, Serialize};
use vitrine_core::carousel::CarouselLayout;

/// A side effect for the host to apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Cart state changed; rebuild the cart panel, the order summary, and
    /// the item-count display.
    CartChanged,
    /// Carousel state changed; apply the new track offset and rebuild the
    /// indicator dots.
    CarouselChanged(CarouselLayout),
    /// Show a user-facing acknowledgment.
    Notice(Notice),
    /// Scroll the page to the checkout section.
    ScrollToCheckout,
}

/// User-facing acknowledgments shown as blocking messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// An item was added to the cart.
    ItemAdded { name: String },
    /// An add failed because the catalog price text did not parse.
    /// Carries the offending input so the host can log it.
    AddFailed { name: String, raw_price: String },
    /// Checkout was attempted with an empty cart.
    EmptyCartWarning,
    /// Checkout is proceeding with items present.
    CheckoutConfirmed,
}

impl Notice {
    /// The message text shown to the user.
    pub fn message(&self) -> String {
        match self {
            Notice::ItemAdded { name } => {
                format!("\"{name}\" has been added to the cart.")
            }
            Notice::AddFailed { .. } => {
                "There was a problem adding the product. Please try again.".to_string()
            }
            Notice::EmptyCartWarning => {
                "Your cart is empty. Please add some products before continuing.".to_string()
            }
            Notice::CheckoutConfirmed => "Redirecting to checkout...".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_added_message_includes_name() {
        let notice = Notice::ItemAdded {
            name: "Gaming Laptop".to_string(),
        };
        assert_eq!(
            notice.message(),
            "\"Gaming Laptop\" has been added to the cart."
        );
    }

    #[test]
    fn test_add_failed_message_stays_generic() {
        // The offending input goes to the host's log, not the user.
        let notice = Notice::AddFailed {
            name: "Gaming Laptop".to_string(),
            raw_price: "not-a-price".to_string(),
        };
        assert_eq!(
            notice.message(),
            "There was a problem adding the product. Please try again."
        );
    }
}
