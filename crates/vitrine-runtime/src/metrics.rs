//! Widget session metrics.

use serde::Serialize;

/// Interaction counters for a single widget session.
///
/// Owned by the engine and updated as interactions are dispatched;
/// hosts read a snapshot for logging or display.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionMetrics {
    /// Items successfully added to the cart.
    pub items_added: u64,
    /// Add attempts aborted by invalid catalog data.
    pub add_failures: u64,
    /// Items removed from the cart.
    pub items_removed: u64,
    /// Checkout attempts, including those blocked on an empty cart.
    pub checkout_attempts: u64,
    /// Checkout attempts that proceeded.
    pub checkout_confirmations: u64,
    /// Manual carousel navigations (arrows and indicator dots).
    pub manual_navigations: u64,
    /// Automatic carousel advances.
    pub auto_advances: u64,
    /// Raw resize events before debouncing.
    pub resize_events: u64,
    /// Layout recomputations actually performed.
    pub layout_recomputes: u64,
}

impl SessionMetrics {
    /// Create zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful add-to-cart.
    pub fn record_item_added(&mut self) {
        self.items_added += 1;
    }

    /// Record an aborted add-to-cart.
    pub fn record_add_failure(&mut self) {
        self.add_failures += 1;
    }

    /// Record an item removal.
    pub fn record_item_removed(&mut self) {
        self.items_removed += 1;
    }

    /// Record a checkout attempt and whether it proceeded.
    pub fn record_checkout_attempt(&mut self, confirmed: bool) {
        self.checkout_attempts += 1;
        if confirmed {
            self.checkout_confirmations += 1;
        }
    }

    /// Record a manual carousel navigation.
    pub fn record_manual_navigation(&mut self) {
        self.manual_navigations += 1;
    }

    /// Record an automatic carousel advance.
    pub fn record_auto_advance(&mut self) {
        self.auto_advances += 1;
    }

    /// Record a raw resize event.
    pub fn record_resize_event(&mut self) {
        self.resize_events += 1;
    }

    /// Record a performed layout recomputation.
    pub fn record_layout_recompute(&mut self) {
        self.layout_recomputes += 1;
    }

    /// Format as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Format as a human-readable summary.
    pub fn to_summary(&self) -> String {
        let mut lines = Vec::new();

        lines.push("Session:".to_string());
        lines.push(format!(
            "  Cart: {} added, {} removed, {} add failures",
            self.items_added, self.items_removed, self.add_failures
        ));
        lines.push(format!(
            "  Checkout: {} attempts, {} confirmed",
            self.checkout_attempts, self.checkout_confirmations
        ));
        lines.push(format!(
            "  Carousel: {} manual, {} auto, {} layouts",
            self.manual_navigations, self.auto_advances, self.layout_recomputes
        ));
        lines.push(format!("  Resize events: {}", self.resize_events));

        lines.join("\n")
    }
}
