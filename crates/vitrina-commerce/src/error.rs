//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in commerce operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Coupon input was empty.
    #[error("Enter a coupon code")]
    EmptyCouponCode,

    /// Coupon code is not in the policy table.
    #[error("Invalid coupon code: {0}")]
    InvalidCouponCode(String),

    /// Shipping option not in the offered list.
    #[error("Unknown shipping option: {0}")]
    UnknownShippingOption(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
