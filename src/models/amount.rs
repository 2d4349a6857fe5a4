//! Amount type for representing income and expense values
//!
//! Amounts are stored as SQLite `REAL`, so the wrapper holds an `f64`. Parsing
//! guarantees the value is finite; arithmetic on finite values is left to the
//! caller.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Currency symbols accepted (and ignored) in front of a number
const CURRENCY_SYMBOLS: [&str; 4] = ["$", "₹", "€", "£"];

/// Errors produced by [`Amount::parse`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
    NotFinite(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "no amount given"),
            Self::InvalidFormat(s) => write!(f, "'{}' is not a number", s),
            Self::NotFinite(s) => write!(f, "'{}' is not a finite number", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

/// A monetary amount in the user's currency
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw floating point value
    pub const fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Parse an amount from user input
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "₹ 1200", "1e3", " 7 ".
    /// Rejects empty strings, non-numeric text, NaN and infinities. A minus
    /// sign must be followed directly by the number or currency symbol.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };

        if negative && rest.starts_with(char::is_whitespace) {
            return Err(AmountParseError::InvalidFormat(trimmed.to_string()));
        }

        let rest = CURRENCY_SYMBOLS
            .iter()
            .find_map(|symbol| rest.strip_prefix(symbol))
            .unwrap_or(rest)
            .trim_start();

        if rest.is_empty() || (negative && rest.starts_with(['-', '+'])) {
            return Err(AmountParseError::InvalidFormat(trimmed.to_string()));
        }

        let value: f64 = rest
            .parse()
            .map_err(|_| AmountParseError::InvalidFormat(trimmed.to_string()))?;

        if !value.is_finite() {
            return Err(AmountParseError::NotFinite(trimmed.to_string()));
        }

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with a leading currency symbol and two fraction digits
    ///
    /// The sign follows the symbol (`₹-12.50`).
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Avoid rendering "-0.00" for tiny negatives and negative zero
        let rounded = (self.0 * 100.0).round() / 100.0;
        let value = if rounded == 0.0 { 0.0 } else { self.0 };
        match f.width() {
            Some(width) => write!(f, "{:>width$.2}", value, width = width),
            None => write!(f, "{:.2}", value),
        }
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Mul<f64> for Amount {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self(self.0 * factor)
    }
}

impl Div<f64> for Amount {
    type Output = Self;

    fn div(self, divisor: f64) -> Self {
        Self(self.0 / divisor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(Amount::parse("10.50").unwrap().value(), 10.5);
        assert_eq!(Amount::parse("  7 ").unwrap().value(), 7.0);
        assert_eq!(Amount::parse("1e3").unwrap().value(), 1000.0);
        assert_eq!(Amount::parse("0").unwrap().value(), 0.0);
    }

    #[test]
    fn test_parse_negative_and_symbols() {
        assert_eq!(Amount::parse("-10.50").unwrap().value(), -10.5);
        assert_eq!(Amount::parse("$12").unwrap().value(), 12.0);
        assert_eq!(Amount::parse("₹ 1200.25").unwrap().value(), 1200.25);
        assert_eq!(Amount::parse("-€3").unwrap().value(), -3.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Amount::parse(""), Err(AmountParseError::Empty));
        assert_eq!(Amount::parse("   "), Err(AmountParseError::Empty));
        assert!(matches!(
            Amount::parse("abc"),
            Err(AmountParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Amount::parse("--5"),
            Err(AmountParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Amount::parse("$"),
            Err(AmountParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_rejects_space_after_minus() {
        assert!(matches!(
            Amount::parse("- 5"),
            Err(AmountParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Amount::parse("-\t$5"),
            Err(AmountParseError::InvalidFormat(_))
        ));
        assert_eq!(Amount::parse("-$ 5").unwrap().value(), -5.0);
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(matches!(
            Amount::parse("inf"),
            Err(AmountParseError::NotFinite(_))
        ));
        assert!(matches!(
            Amount::parse("NaN"),
            Err(AmountParseError::NotFinite(_))
        ));
    }

    #[test]
    fn test_display_two_digits() {
        assert_eq!(Amount::new(400.0).to_string(), "400.00");
        assert_eq!(Amount::new(133.333_333).to_string(), "133.33");
        assert_eq!(Amount::new(-0.001).to_string(), "0.00");
        assert_eq!(format!("{:8}", Amount::new(5.5)), "    5.50");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Amount::new(2600.0).format_with_symbol("₹"), "₹2600.00");
        assert_eq!(Amount::new(-12.5).format_with_symbol("$"), "$-12.50");
        assert_eq!(Amount::new(-0.001).format_with_symbol("₹"), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let total = Amount::new(100.0) + Amount::new(250.5) + Amount::new(49.5);
        assert_eq!(total.value(), 400.0);
        assert_eq!((Amount::new(1000.0) * 3.0 - total).value(), 2600.0);
        assert_eq!((total / 4.0).value(), 100.0);
    }
}
