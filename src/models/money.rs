//! Money type for representing expense amounts
//!
//! Internally stores amounts in cents (i64) so that the fixed two-decimal
//! storage format round-trips exactly. Parsing tolerates both `.` and `,`
//! as decimal separator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expenses::models::Money;
    /// let amount = Money::from_cents(350); // 3.50
    /// assert_eq!(amount.to_fixed(), "3.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "3.50", "-3.50", "$3.50", "3,50", "1.234,56", "1,234.56" and
    /// plain integers. When both separators appear the last one is the decimal
    /// separator. A single separator kind is decimal when it appears once and
    /// grouping when it repeats. Extra fractional digits round half away from zero.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let s = s.trim();
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let s = s.strip_prefix('$').unwrap_or(s).trim_start();

        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
            return Err(invalid());
        }

        let decimal_sep = match (s.rfind('.'), s.rfind(',')) {
            (Some(dot), Some(comma)) => Some(if dot > comma { '.' } else { ',' }),
            (Some(_), None) if s.matches('.').count() == 1 => Some('.'),
            (None, Some(_)) if s.matches(',').count() == 1 => Some(','),
            _ => None,
        };

        let (whole, fraction) = match decimal_sep {
            Some(sep) => {
                let idx = s.rfind(sep).ok_or_else(invalid)?;
                (&s[..idx], &s[idx + 1..])
            }
            None => (s, ""),
        };

        if fraction.contains(|c: char| c == '.' || c == ',')
            || decimal_sep.is_some_and(|sep| whole.contains(sep))
        {
            return Err(invalid());
        }

        let digits: String = whole.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let whole_value: i64 = if digits.is_empty() {
            0
        } else {
            digits.parse().map_err(|_| invalid())?
        };

        let frac_digits: Vec<i64> = fraction
            .chars()
            .map(|c| i64::from(c as u8 - b'0'))
            .collect();
        let mut cents_part = frac_digits.first().copied().unwrap_or(0) * 10
            + frac_digits.get(1).copied().unwrap_or(0);
        if frac_digits.get(2).copied().unwrap_or(0) >= 5 {
            cents_part += 1;
        }

        let cents = whole_value
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents_part))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Render as a fixed two-decimal string without currency symbol ("3.50")
    pub fn to_fixed(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.dollars().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl std::str::FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Saturates at the `i64` bounds instead of overflowing
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(Money::from_cents(350).to_fixed(), "3.50");
        assert_eq!(Money::from_cents(-5).to_fixed(), "-0.05");
        assert_eq!(Money::from_cents(120000).to_fixed(), "1200.00");
    }

    #[test]
    fn test_parse_period_decimal() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse(" 0.05 ").unwrap().cents(), 5);
    }

    #[test]
    fn test_parse_comma_decimal() {
        assert_eq!(Money::parse("3,50").unwrap().cents(), 350);
        assert_eq!(Money::parse("-3,5").unwrap().cents(), -350);
    }

    #[test]
    fn test_parse_grouping() {
        assert_eq!(Money::parse("1.234,56").unwrap().cents(), 123456);
        assert_eq!(Money::parse("1,234.56").unwrap().cents(), 123456);
        assert_eq!(Money::parse("1,234,567").unwrap().cents(), 123456700);
        assert_eq!(Money::parse("1.234.567").unwrap().cents(), 123456700);
    }

    #[test]
    fn test_parse_rounds_extra_digits() {
        assert_eq!(Money::parse("3.333").unwrap().cents(), 333);
        assert_eq!(Money::parse("3.335").unwrap().cents(), 334);
        assert_eq!(Money::parse("-3.335").unwrap().cents(), -334);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12a").is_err());
        assert!(Money::parse("-").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("1.234,56.7").is_err());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_sum_of_huge_amounts_saturates() {
        let huge = Money::parse("92233720368547758").unwrap();
        let total: Money = vec![huge, huge].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);

        let owed = Money::parse("-92233720368547758").unwrap();
        let total: Money = vec![owed, owed].into_iter().sum();
        assert_eq!(total.cents(), i64::MIN);
    }
}
