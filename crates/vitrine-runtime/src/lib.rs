//! Event-driven runtime for Vitrine storefront widgets.
//!
//! The runtime turns host events into state changes and state changes
//! into [`Effect`]s the host applies to its UI. Everything runs on one
//! thread: the host dispatches [`Interaction`]s as they happen and calls
//! [`StorefrontEngine::tick`] on a short cadence so the auto-advance
//! timer and the resize debouncer can fire. All deadlines are plain
//! millisecond timestamps supplied by the host, which keeps the engine
//! free of platform clocks and lets tests drive time directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_core::carousel::Viewport;
//! use vitrine_core::config::WidgetConfig;
//! use vitrine_runtime::{Interaction, StorefrontEngine};
//!
//! let viewport = Viewport::new(1280, 300);
//! let mut engine = StorefrontEngine::new(WidgetConfig::default(), 10, viewport, now_ms());
//!
//! let effects = engine.dispatch(
//!     Interaction::AddToCart {
//!         name: "Wireless Headphones".to_string(),
//!         price_text: "$89.99".to_string(),
//!     },
//!     now_ms(),
//! );
//! for effect in effects {
//!     apply(effect);
//! }
//!
//! // somewhere in the host's main loop
//! for effect in engine.tick(now_ms()) {
//!     apply(effect);
//! }
//! ```

pub mod effect;
pub mod engine;
pub mod interaction;
pub mod log;
pub mod metrics;
pub mod timer;

pub use effect::{Effect, Notice};
pub use engine::StorefrontEngine;
pub use interaction::Interaction;
pub use log::{LogFormat, LogLevel, SessionId, WidgetLogger};
pub use metrics::SessionMetrics;
pub use timer::{AutoAdvanceTimer, Debouncer};

/// Convenience re-exports for hosts embedding the runtime.
pub mod prelude {
    pub use crate::effect::{Effect, Notice};
    pub use crate::engine::StorefrontEngine;
    pub use crate::interaction::Interaction;
    pub use crate::metrics::SessionMetrics;
    pub use vitrine_core::prelude::*;
}
