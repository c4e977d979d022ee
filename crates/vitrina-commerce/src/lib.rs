//! Commerce domain types and logic for the Vitrina storefront.
//!
//! This crate holds everything the storefront computes locally:
//!
//! - **Catalog**: immutable product records, brands, brand filtering
//! - **Cart**: line items, totals, the coupon policy table
//! - **Checkout**: shipping options, address validation, the form state
//!   machine
//! - **Payment**: method selection, wallet credit, the handler seam
//!
//! # Example
//!
//! ```rust
//! use vitrina_commerce::prelude::*;
//!
//! let catalog = Catalog::demo();
//! let product = catalog.products().first().unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add_item(product, 1);
//!
//! let form = CheckoutForm::default();
//! let totals = form.totals(&cart).unwrap();
//! assert_eq!(totals.subtotal, cart.total());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod payment;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Brand, BrandFilter, Catalog, Product, ProductKind};

    // Cart
    pub use crate::cart::{
        AppliedCoupon, Cart, CheckoutTotals, CouponBook, LineItem, TAX_RATE_PERCENT,
    };

    // Checkout
    pub use crate::checkout::{
        AddressFields, CheckoutForm, CheckoutPhase, FieldErrors, ShippingAddress, ShippingOption,
    };

    // Payment
    pub use crate::payment::{
        PaymentError, PaymentHandler, PaymentMethod, PaymentMethodId, PaymentPhase, PaymentSession,
    };
}
