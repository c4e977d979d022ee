//! Money type for representing monetary values.
//!
//! Amounts are stored in cents to keep cart and checkout arithmetic exact.
//! Rounding to two decimals happens only when formatting for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Currencies the storefront sells in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    CRC,
    EUR,
    MXN,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::CRC => "CRC",
            Currency::EUR => "EUR",
            Currency::MXN => "MXN",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::CRC => "\u{20a1}",
            Currency::EUR => "\u{20ac}",
            Currency::MXN => "MX$",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "CRC" => Some(Currency::CRC),
            "EUR" => Some(Currency::EUR),
            "MXN" => Some(Currency::MXN),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency, stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a major-unit amount.
    ///
    /// ```
    /// use vitrina_commerce::money::{Currency, Money};
    /// let price = Money::from_major(79.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 7999);
    /// ```
    pub fn from_major(amount: f64, currency: Currency) -> Self {
        Self::new((amount * 100.0).round() as i64, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a major-unit value.
    pub fn to_major(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.to_major())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        format!("{:.2}", self.to_major())
    }

    /// Try to add another Money value, returning None if currencies don't match.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_cents.checked_add(other.amount_cents)?,
            self.currency,
        ))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_cents.checked_sub(other.amount_cents)?,
            self.currency,
        ))
    }

    /// Multiply by a scalar with overflow checking.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        Some(Money::new(
            self.amount_cents.checked_mul(factor)?,
            self.currency,
        ))
    }

    /// Multiply by a decimal factor, rounding to the nearest cent.
    pub fn multiply_decimal(&self, factor: f64) -> Money {
        let new_amount = (self.amount_cents as f64 * factor).round() as i64;
        Money::new(new_amount, self.currency)
    }

    /// Calculate a percentage of this amount.
    pub fn percentage(&self, percent: f64) -> Money {
        self.multiply_decimal(percent / 100.0)
    }

    /// The smaller of two amounts in the same currency.
    pub fn min(&self, other: &Money) -> Money {
        if other.amount_cents < self.amount_cents {
            *other
        } else {
            *self
        }
    }

    /// Clamp a negative amount to zero.
    pub fn clamp_non_negative(&self) -> Money {
        Money::new(self.amount_cents.max(0), self.currency)
    }

    /// Sum an iterator of Money values with overflow checking.
    pub fn try_sum<'a>(
        iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        let mut acc = Money::zero(currency);
        for m in iter {
            acc = acc.try_add(m)?;
        }
        Some(acc)
    }
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics on currency mismatch. Use `try_add` for fallible addition.
    fn add(self, other: Money) -> Money {
        self.try_add(&other).expect("currency mismatch in addition")
    }
}

impl Sub for Money {
    type Output = Money;

    /// # Panics
    /// Panics on currency mismatch. Use `try_subtract` for fallible subtraction.
    fn sub(self, other: Money) -> Money {
        self.try_subtract(&other)
            .expect("currency mismatch in subtraction")
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_major() {
        let m = Money::from_major(79.99, Currency::USD);
        assert_eq!(m.amount_cents, 7999);

        let m = Money::from_major(0.0, Currency::CRC);
        assert!(m.is_zero());
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(7999, Currency::USD);
        assert_eq!(m.display(), "$79.99");
        assert_eq!(m.display_amount(), "79.99");

        let m = Money::new(500, Currency::EUR);
        assert_eq!(m.display(), "\u{20ac}5.00");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(1000, Currency::USD);
        let b = Money::new(500, Currency::USD);
        assert_eq!((a + b).amount_cents, 1500);
    }

    #[test]
    fn test_money_try_add_mismatch() {
        let usd = Money::new(1000, Currency::USD);
        let crc = Money::new(1000, Currency::CRC);
        assert!(usd.try_add(&crc).is_none());
    }

    #[test]
    fn test_money_percentage_rounds_to_cent() {
        // 8% of $79.99 is $6.3992, which rounds to $6.40.
        let m = Money::new(7999, Currency::USD);
        assert_eq!(m.percentage(8.0).amount_cents, 640);

        // 20% of $100.00 is exact.
        let m = Money::new(10000, Currency::USD);
        assert_eq!(m.percentage(20.0).amount_cents, 2000);
    }

    #[test]
    fn test_money_min_and_clamp() {
        let total = Money::new(5000, Currency::USD);
        let balance = Money::new(8000, Currency::USD);
        assert_eq!(balance.min(&total).amount_cents, 5000);
        assert_eq!(total.min(&balance).amount_cents, 5000);

        let negative = Money::new(-100, Currency::USD);
        assert!(negative.clamp_non_negative().is_zero());
    }

    #[test]
    fn test_money_try_sum() {
        let values = [
            Money::new(100, Currency::USD),
            Money::new(250, Currency::USD),
        ];
        let sum = Money::try_sum(values.iter(), Currency::USD).unwrap();
        assert_eq!(sum.amount_cents, 350);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("CRC"), Some(Currency::CRC));
        assert_eq!(Currency::from_code("JPY"), None);
    }
}
