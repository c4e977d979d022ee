//! Checkout module.
//!
//! Contains shipping options, address validation, and the checkout form
//! state machine.

mod address;
mod form;
mod shipping;

pub use address::{looks_like_email, AddressFields, FieldErrors, ShippingAddress};
pub use form::{CheckoutForm, CheckoutPhase};
pub use shipping::ShippingOption;
