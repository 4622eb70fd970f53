//! Rendering for Vitrine storefront pages.
//!
//! Widget renderers are pure `&state -> String` functions; calling one
//! always rebuilds its panel in full. The crate also carries the page
//! plumbing for the streamed storefront:
//! - `render_cart_panel` / `render_order_summary` - the two cart views
//! - `render_slides` / `render_track_style` / `render_indicators` - carousel
//! - `PageShell` - shell template abstraction
//! - `PageStream` - shell-first streaming over any byte sink

mod cart_panel;
mod carousel_view;
mod escape;
mod page;
mod section;
mod stream;
mod summary;

pub use cart_panel::*;
pub use carousel_view::*;
pub use escape::*;
pub use page::*;
pub use section::*;
pub use stream::*;
pub use summary::*;
