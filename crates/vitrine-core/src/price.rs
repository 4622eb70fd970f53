//! Price type and display formatting.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues in cart totals.

use crate::error::StorefrontError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Cents per currency unit.
const CENTS_PER_UNIT: i64 = 100;

/// The currency symbol displayed across the storefront.
pub const CURRENCY_SYMBOL: &str = "$";

/// A monetary value.
///
/// Amounts are stored in cents. Parsing rejects negative and non-finite
/// input, so prices that enter through [`Price::parse`] are always >= 0.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct Price {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Price {
    /// Create a new Price from cents.
    pub fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Price from a decimal amount, rounding half away from zero.
    ///
    /// ```
    /// use vitrine_core::price::Price;
    /// let price = Price::from_decimal(49.99);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * CENTS_PER_UNIT as f64).round() as i64)
    }

    /// Create a zero amount.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Parse a catalog price string (e.g., "$1,299.00").
    ///
    /// Strips one leading currency symbol and any digit-group separators,
    /// then parses the remainder as a decimal number. Fails with
    /// [`StorefrontError::InvalidPrice`] when the result is not a finite,
    /// non-negative number.
    pub fn parse(text: &str) -> Result<Self, StorefrontError> {
        let trimmed = text.trim();
        let bare = trimmed.strip_prefix(CURRENCY_SYMBOL).unwrap_or(trimmed);
        let value = bare
            .replace(',', "")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .ok_or_else(|| StorefrontError::InvalidPrice(text.to_string()))?;
        Ok(Self::from_decimal(value))
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Format as a display string with symbol (e.g., "$1,234.50").
    pub fn display(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "1,234.50").
    pub fn display_amount(&self) -> String {
        format_cents(self.amount_cents)
    }

    /// Sum an iterator of Price values.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Price>) -> Price {
        iter.fold(Price::zero(), |acc, p| acc + *p)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        Price::new(self.amount_cents + other.amount_cents)
    }
}

impl Sub for Price {
    type Output = Price;

    fn sub(self, other: Price) -> Price {
        Price::new(self.amount_cents - other.amount_cents)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Format a decimal amount with two decimals and thousands grouping.
///
/// Rounds half away from zero to two decimal places first, so
/// `format_amount(999.999)` renders as "1,000.00".
pub fn format_amount(value: f64) -> String {
    format_cents((value * CENTS_PER_UNIT as f64).round() as i64)
}

/// Format an amount in cents with two decimals and thousands grouping.
///
/// ```
/// use vitrine_core::price::format_cents;
/// assert_eq!(format_cents(123450), "1,234.50");
/// assert_eq!(format_cents(0), "0.00");
/// ```
pub fn format_cents(amount_cents: i64) -> String {
    let magnitude = amount_cents.unsigned_abs();
    let units = (magnitude / CENTS_PER_UNIT as u64).to_string();
    let cents = magnitude % CENTS_PER_UNIT as u64;

    let mut grouped = String::with_capacity(units.len() + units.len() / 3 + 4);
    if amount_cents < 0 {
        grouped.push('-');
    }
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(&format!("{cents:02}"));
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Construction Tests ===

    #[test]
    fn test_price_from_cents() {
        let p = Price::new(4999);
        assert_eq!(p.amount_cents, 4999);
    }

    #[test]
    fn test_price_from_decimal() {
        assert_eq!(Price::from_decimal(49.99).amount_cents, 4999);
        assert_eq!(Price::from_decimal(0.0).amount_cents, 0);
        assert_eq!(Price::from_decimal(0.005).amount_cents, 1);
    }

    #[test]
    fn test_price_to_decimal() {
        let p = Price::new(4999);
        assert!((p.to_decimal() - 49.99).abs() < 0.001);
    }

    // === Parsing Tests ===

    #[test]
    fn test_parse_with_symbol() {
        assert_eq!(Price::parse("$19.99").unwrap().amount_cents, 1999);
    }

    #[test]
    fn test_parse_with_grouping() {
        assert_eq!(Price::parse("$1,299.00").unwrap().amount_cents, 129900);
        assert_eq!(Price::parse("$12,345,678.90").unwrap().amount_cents, 1234567890);
    }

    #[test]
    fn test_parse_without_symbol() {
        assert_eq!(Price::parse("249.50").unwrap().amount_cents, 24950);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Price::parse("  $5.00 ").unwrap().amount_cents, 500);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Price::parse("").is_err());
        assert!(Price::parse("$").is_err());
        assert!(Price::parse("free").is_err());
        assert!(Price::parse("$12.5x").is_err());
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert!(Price::parse("-5.00").is_err());
        assert!(Price::parse("$-5.00").is_err());
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(Price::parse("inf").is_err());
        assert!(Price::parse("NaN").is_err());
    }

    // === Formatting Tests ===

    #[test]
    fn test_format_no_separator_below_thousand() {
        assert_eq!(format_cents(99999), "999.99");
        assert_eq!(format_cents(100), "1.00");
    }

    #[test]
    fn test_format_grouping() {
        assert_eq!(format_cents(123450), "1,234.50");
        assert_eq!(format_cents(123456789012), "1,234,567,890.12");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_cents(0), "0.00");
    }

    #[test]
    fn test_format_rounding_crosses_group_boundary() {
        assert_eq!(format_amount(999.999), "1,000.00");
    }

    #[test]
    fn test_format_amount_matches_display() {
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(Price::from_decimal(1234.5).display(), "$1,234.50");
    }

    // === Arithmetic Tests ===

    #[test]
    fn test_price_addition() {
        let a = Price::new(1000);
        let b = Price::new(500);
        assert_eq!((a + b).amount_cents, 1500);
    }

    #[test]
    fn test_price_subtraction() {
        let a = Price::new(1000);
        let b = Price::new(300);
        assert_eq!((a - b).amount_cents, 700);
    }

    #[test]
    fn test_price_sum() {
        let prices = vec![Price::new(100), Price::new(250), Price::new(50)];
        assert_eq!(Price::sum(prices.iter()).amount_cents, 400);
    }
}
