//! Vitrine Example Storefront
//!
//! Demonstrates the widget engine driven from a browser host:
//! - DOM events dispatched as interactions
//! - Engine timers driven from a single platform interval
//! - Effects applied as alerts, scrolls, and signal-driven re-renders

mod app;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
