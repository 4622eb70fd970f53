//! Public SDK for the Vitrine storefront widgets.
//!
//! This crate re-exports the whole stack:
//!
//! ```ignore
//! use vitrine_sdk::prelude::*;
//!
//! let viewport = Viewport::new(1280, 300);
//! let mut engine = StorefrontEngine::new(WidgetConfig::default(), 10, viewport, now_ms());
//!
//! for effect in engine.dispatch(Interaction::Checkout, now_ms()) {
//!     match effect {
//!         Effect::CartChanged => cart_panel.set_inner_html(&render_cart_panel(engine.cart())),
//!         Effect::Notice(notice) => alert(&notice.message()),
//!         _ => {}
//!     }
//! }
//! ```

pub use vitrine_core;
pub use vitrine_render;
pub use vitrine_runtime;

/// Prelude for convenient imports.
pub mod prelude {
    pub use vitrine_core::prelude::*;
    pub use vitrine_render::*;
    pub use vitrine_runtime::prelude::*;
}
