//! Storefront engine: owns widget state and turns interactions into effects.

use vitrine_core::carousel::{Carousel, CarouselLayout, Viewport};
use vitrine_core::cart::Cart;
use vitrine_core::config::WidgetConfig;

use crate::effect::{Effect, Notice};
use crate::interaction::Interaction;
use crate::metrics::SessionMetrics;
use crate::timer::{AutoAdvanceTimer, Debouncer};

/// Single-threaded driver for the storefront widgets.
///
/// Every dispatched interaction runs to completion before the next is
/// processed. The only asynchronous re-entries are the auto-advance tick
/// and the debounced resize, both delivered through [`StorefrontEngine::tick`];
/// the host is expected to call `tick` on a short cadence with its clock.
#[derive(Debug)]
pub struct StorefrontEngine {
    config: WidgetConfig,
    cart: Cart,
    carousel: Carousel,
    /// Most recent measurements supplied by the host; reused for ticks,
    /// which have no event of their own to measure from.
    viewport: Viewport,
    auto_advance: AutoAdvanceTimer,
    resize_debounce: Debouncer<Viewport>,
    metrics: SessionMetrics,
}

impl StorefrontEngine {
    /// Create an engine over `slide_count` carousel slides.
    ///
    /// The cart starts empty with the configured base amount. The
    /// auto-advance timer starts immediately, but only when there is at
    /// least one slide.
    pub fn new(config: WidgetConfig, slide_count: usize, viewport: Viewport, now_ms: u64) -> Self {
        let mut auto_advance = AutoAdvanceTimer::new(config.auto_advance_ms);
        if slide_count > 0 {
            auto_advance.start(now_ms);
        }

        Self {
            cart: Cart::new().with_base_amount(config.base_amount()),
            carousel: Carousel::new(slide_count, viewport.width),
            resize_debounce: Debouncer::new(config.resize_debounce_ms),
            auto_advance,
            viewport,
            metrics: SessionMetrics::new(),
            config,
        }
    }

    /// Dispatch a user interaction, returning the effects to apply.
    pub fn dispatch(&mut self, interaction: Interaction, now_ms: u64) -> Vec<Effect> {
        match interaction {
            Interaction::AddToCart { name, price_text } => self.add_to_cart(name, &price_text),
            Interaction::RemoveFromCart { position } => self.remove_from_cart(position),
            Interaction::Checkout => self.checkout(),
            Interaction::CarouselNext { viewport } => self.next_slide(viewport, now_ms),
            Interaction::CarouselPrev { viewport } => self.prev_slide(viewport, now_ms),
            Interaction::CarouselJump { group, viewport } => {
                self.jump_to_group(group, viewport, now_ms)
            }
            Interaction::Resize { viewport } => {
                self.metrics.record_resize_event();
                self.resize_debounce.trigger(viewport, now_ms);
                Vec::new()
            }
        }
    }

    /// Advance timers: fire the debounced resize and the auto-advance
    /// tick once their deadlines pass.
    pub fn tick(&mut self, now_ms: u64) -> Vec<Effect> {
        let mut effects = Vec::new();

        if let Some(viewport) = self.resize_debounce.poll(now_ms) {
            self.viewport = viewport;
            if self.carousel.has_slides() {
                self.auto_advance.restart(now_ms);
                effects.extend(self.relayout());
            }
        }

        if self.auto_advance.poll(now_ms) {
            self.carousel.next(self.viewport.width);
            self.metrics.record_auto_advance();
            effects.extend(self.relayout());
        }

        effects
    }

    /// Compute the carousel layout for the most recent measurements.
    ///
    /// Used for the initial render; returns `None` when there are no
    /// slides.
    pub fn carousel_layout(&mut self) -> Option<CarouselLayout> {
        self.carousel.recompute_layout(self.viewport)
    }

    /// The cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The carousel state.
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// The widget configuration.
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// The most recent host-supplied measurements.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Counters accumulated this session.
    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    fn add_to_cart(&mut self, name: String, price_text: &str) -> Vec<Effect> {
        match self.cart.add_item(name.clone(), price_text) {
            Ok(_) => {
                self.metrics.record_item_added();
                vec![
                    Effect::CartChanged,
                    Effect::Notice(Notice::ItemAdded { name }),
                ]
            }
            Err(_) => {
                self.metrics.record_add_failure();
                vec![Effect::Notice(Notice::AddFailed {
                    name,
                    raw_price: price_text.to_string(),
                })]
            }
        }
    }

    fn remove_from_cart(&mut self, position: usize) -> Vec<Effect> {
        if self.cart.remove_item(position) {
            self.metrics.record_item_removed();
            vec![Effect::CartChanged]
        } else {
            Vec::new()
        }
    }

    fn checkout(&mut self) -> Vec<Effect> {
        match self.cart.ensure_checkout_ready() {
            Err(_) => {
                self.metrics.record_checkout_attempt(false);
                vec![Effect::Notice(Notice::EmptyCartWarning)]
            }
            Ok(()) => {
                self.metrics.record_checkout_attempt(true);
                vec![
                    Effect::Notice(Notice::CheckoutConfirmed),
                    Effect::ScrollToCheckout,
                ]
            }
        }
    }

    fn next_slide(&mut self, viewport: Viewport, now_ms: u64) -> Vec<Effect> {
        if !self.carousel.has_slides() {
            return Vec::new();
        }
        self.carousel.next(viewport.width);
        self.after_manual_navigation(viewport, now_ms)
    }

    fn prev_slide(&mut self, viewport: Viewport, now_ms: u64) -> Vec<Effect> {
        if !self.carousel.has_slides() {
            return Vec::new();
        }
        self.carousel.prev(viewport.width);
        self.after_manual_navigation(viewport, now_ms)
    }

    fn jump_to_group(&mut self, group: usize, viewport: Viewport, now_ms: u64) -> Vec<Effect> {
        if !self.carousel.has_slides() || !self.carousel.jump_to_group(group) {
            return Vec::new();
        }
        self.after_manual_navigation(viewport, now_ms)
    }

    /// Manual navigation always restarts the auto-advance clock, so the
    /// next automatic tick is a full period after the interaction.
    fn after_manual_navigation(&mut self, viewport: Viewport, now_ms: u64) -> Vec<Effect> {
        self.viewport = viewport;
        self.auto_advance.restart(now_ms);
        self.metrics.record_manual_navigation();
        self.relayout()
    }

    fn relayout(&mut self) -> Vec<Effect> {
        match self.carousel.recompute_layout(self.viewport) {
            Some(layout) => {
                self.metrics.record_layout_recompute();
                vec![Effect::CarouselChanged(layout)]
            }
            None => Vec::new(),
        }
    }
}
