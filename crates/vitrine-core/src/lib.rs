//! Storefront widget domain types and logic for Vitrine.
//!
//! This crate provides the state machines behind the storefront page
//! widgets:
//!
//! - **Cart**: ordered item list with positional removal and totals
//! - **Price**: cents-based amounts, catalog price parsing, grouped display
//! - **Carousel**: responsive slide window with wrap-around navigation
//! - **Catalog**: static product entries and carousel slides
//!
//! All state transitions are synchronous and run to completion; timing
//! concerns (auto-advance, resize debouncing) live in `vitrine-runtime`.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_core::prelude::*;
//!
//! // Build a cart and add a catalog entry to it
//! let mut cart = Cart::new();
//! cart.add_item("Gaming Laptop", "$1,299.00")?;
//! println!("Total: {}", cart.total().display());
//!
//! // Drive the carousel over ten slides on a desktop viewport
//! let mut carousel = Carousel::new(10, 1280);
//! carousel.next(1280);
//! let layout = carousel.recompute_layout(Viewport::new(1280, 300));
//! ```

pub mod breakpoints;
pub mod carousel;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod price;

pub use carousel::{Carousel, CarouselLayout, Viewport};
pub use cart::{Cart, CartItem};
pub use catalog::{Catalog, CatalogEntry, Slide};
pub use config::WidgetConfig;
pub use error::StorefrontError;
pub use price::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::breakpoints;
    pub use crate::carousel::{Carousel, CarouselLayout, Viewport};
    pub use crate::cart::{Cart, CartItem};
    pub use crate::catalog::{Catalog, CatalogEntry, Slide};
    pub use crate::config::WidgetConfig;
    pub use crate::error::StorefrontError;
    pub use crate::price::{format_amount, format_cents, Price};
}
