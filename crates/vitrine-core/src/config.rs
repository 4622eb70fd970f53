//! Widget configuration.

use crate::price::Price;
use serde::{Deserialize, Serialize};

/// Timing and pricing settings for the storefront widgets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Milliseconds between automatic carousel advances.
    #[serde(default = "default_auto_advance_ms")]
    pub auto_advance_ms: u64,
    /// Quiet window for coalescing resize events, in milliseconds.
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
    /// Fixed amount (in cents) added on top of the cart item subtotal.
    #[serde(default)]
    pub base_amount_cents: i64,
}

fn default_auto_advance_ms() -> u64 {
    3000
}

fn default_resize_debounce_ms() -> u64 {
    250
}

impl WidgetConfig {
    /// Create a configuration with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the auto-advance period.
    pub fn with_auto_advance_ms(mut self, ms: u64) -> Self {
        self.auto_advance_ms = ms;
        self
    }

    /// Set the resize debounce quiet window.
    pub fn with_resize_debounce_ms(mut self, ms: u64) -> Self {
        self.resize_debounce_ms = ms;
        self
    }

    /// Set the fixed base amount in cents.
    pub fn with_base_amount_cents(mut self, cents: i64) -> Self {
        self.base_amount_cents = cents;
        self
    }

    /// The base amount as a price.
    pub fn base_amount(&self) -> Price {
        Price::new(self.base_amount_cents)
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: default_auto_advance_ms(),
            resize_debounce_ms: default_resize_debounce_ms(),
            base_amount_cents: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.auto_advance_ms, 3000);
        assert_eq!(config.resize_debounce_ms, 250);
        assert_eq!(config.base_amount_cents, 0);
        assert!(config.base_amount().is_zero());
    }

    #[test]
    fn test_config_deserializes_with_missing_fields() {
        let config: WidgetConfig = serde_json::from_str(r#"{"auto_advance_ms":5000}"#).unwrap();
        assert_eq!(config.auto_advance_ms, 5000);
        assert_eq!(config.resize_debounce_ms, 250);
        assert_eq!(config.base_amount_cents, 0);
    }

    #[test]
    fn test_config_builder() {
        let config = WidgetConfig::new()
            .with_auto_advance_ms(1000)
            .with_base_amount_cents(500);
        assert_eq!(config.auto_advance_ms, 1000);
        assert_eq!(config.base_amount().amount_cents, 500);
    }
}
