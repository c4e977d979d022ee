//! Shipping method options.

use crate::ids::ShippingOptionId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shipping method the customer can pick at checkout.
///
/// The list is fixed and externally supplied; the checkout form holds a
/// selection into it, defaulting to the first entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingOption {
    /// Unique identifier.
    pub id: ShippingOptionId,
    /// Display name.
    pub name: String,
    /// Shipping price.
    pub price: Money,
    /// Estimated delivery window, free text (e.g. "5-7").
    pub days: String,
}

impl ShippingOption {
    /// Create a shipping option.
    pub fn new(
        id: impl Into<ShippingOptionId>,
        name: impl Into<String>,
        price: Money,
        days: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            days: days.into(),
        }
    }

    /// The default storefront menu: free, standard, and express.
    pub fn defaults() -> Vec<ShippingOption> {
        let usd = |amount| Money::from_major(amount, Currency::USD);
        vec![
            ShippingOption::new("free", "Env\u{ed}o Gratis (7-10 d\u{ed}as)", usd(0.0), "7-10"),
            ShippingOption::new(
                "standard",
                "Env\u{ed}o Est\u{e1}ndar (5-7 d\u{ed}as)",
                usd(10.0),
                "5-7",
            ),
            ShippingOption::new(
                "express",
                "Env\u{ed}o Express (2-3 d\u{ed}as)",
                usd(25.0),
                "2-3",
            ),
        ]
    }

    /// Check if this option is free.
    pub fn is_free(&self) -> bool {
        self.price.is_zero()
    }
}
