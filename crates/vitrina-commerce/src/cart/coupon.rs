//! Coupon policy table.
//!
//! Codes are matched case-insensitively against a table injected at
//! construction time, so a backend validation service can replace the
//! built-in demo table without changing the checkout contract. No expiry
//! and no usage limits: codes are valid for the whole session.

use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// The coupon lookup table.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponBook {
    entries: Vec<(String, f64)>,
}

impl CouponBook {
    /// Create a coupon book from code/percent pairs.
    ///
    /// Codes are normalized to uppercase on insertion.
    pub fn new<S: Into<String>>(entries: impl IntoIterator<Item = (S, f64)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(code, percent)| (code.into().to_uppercase(), percent))
                .collect(),
        }
    }

    /// The demo table: DEMO10 (10% off) and DEMO20 (20% off).
    pub fn demo() -> Self {
        Self::new([("DEMO10", 10.0), ("DEMO20", 20.0)])
    }

    /// An empty book that rejects every code.
    pub fn empty() -> Self {
        Self::new(Vec::<(String, f64)>::new())
    }

    /// Redeem a code, matching case-insensitively.
    ///
    /// Empty input and unknown codes are distinct errors so the form can
    /// show the right message.
    pub fn redeem(&self, code: &str) -> Result<AppliedCoupon, CommerceError> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(CommerceError::EmptyCouponCode);
        }
        let normalized = trimmed.to_uppercase();
        self.entries
            .iter()
            .find(|(code, _)| *code == normalized)
            .map(|(code, percent)| AppliedCoupon {
                code: code.clone(),
                percent: *percent,
            })
            .ok_or(CommerceError::InvalidCouponCode(normalized))
    }
}

impl Default for CouponBook {
    fn default() -> Self {
        Self::demo()
    }
}

/// A coupon that has been applied at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppliedCoupon {
    /// The normalized code.
    pub code: String,
    /// Percentage off the subtotal (0.0 - 100.0).
    pub percent: f64,
}

impl AppliedCoupon {
    /// The discount this coupon takes off a subtotal.
    pub fn discount(&self, subtotal: Money) -> Money {
        subtotal.percentage(self.percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_redeem_known_code() {
        let book = CouponBook::demo();
        let coupon = book.redeem("DEMO20").unwrap();
        assert_eq!(coupon.code, "DEMO20");
        assert_eq!(coupon.percent, 20.0);
    }

    #[test]
    fn test_redeem_is_case_insensitive() {
        let book = CouponBook::demo();
        assert!(book.redeem("demo10").is_ok());
        assert!(book.redeem("  Demo20  ").is_ok());
    }

    #[test]
    fn test_empty_and_unknown_codes_differ() {
        let book = CouponBook::demo();
        assert_eq!(book.redeem("   "), Err(CommerceError::EmptyCouponCode));
        assert_eq!(
            book.redeem("SAVE50"),
            Err(CommerceError::InvalidCouponCode("SAVE50".to_string()))
        );
    }

    #[test]
    fn test_discount_amount() {
        let book = CouponBook::demo();
        let coupon = book.redeem("DEMO20").unwrap();
        let subtotal = Money::new(10000, Currency::USD);
        assert_eq!(coupon.discount(subtotal).amount_cents, 2000);
    }

    #[test]
    fn test_injected_table_replaces_demo() {
        let book = CouponBook::new([("VIP50", 50.0)]);
        assert!(book.redeem("VIP50").is_ok());
        assert!(book.redeem("DEMO10").is_err());
    }
}
