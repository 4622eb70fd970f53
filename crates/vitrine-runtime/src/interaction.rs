//! User interactions dispatched to the engine.

use serde::{Deserialize, Serialize};
use vitrine_core::carousel::Viewport;

/// A user interaction on the storefront page.
///
/// Carousel interactions carry the viewport measurements taken by the
/// host at event time, since slide widths are only knowable from the
/// rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interaction {
    /// An add-to-cart control was clicked on a product card.
    AddToCart {
        /// Product display name from the card.
        name: String,
        /// Price text from the card, parsed at add time.
        price_text: String,
    },
    /// The remove control on a cart row was clicked.
    RemoveFromCart {
        /// Position of the row in the cart.
        position: usize,
    },
    /// The checkout button was clicked.
    Checkout,
    /// The carousel next arrow was clicked.
    CarouselNext { viewport: Viewport },
    /// The carousel previous arrow was clicked.
    CarouselPrev { viewport: Viewport },
    /// An indicator dot was clicked.
    CarouselJump { group: usize, viewport: Viewport },
    /// The window was resized; coalesced through the debouncer.
    Resize { viewport: Viewport },
}
