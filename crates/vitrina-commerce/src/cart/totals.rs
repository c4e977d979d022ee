//! Checkout totals calculation.

use crate::cart::{AppliedCoupon, Cart};
use crate::checkout::ShippingOption;
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Sales tax rate applied to the discounted subtotal.
pub const TAX_RATE_PERCENT: f64 = 8.0;

/// The derived totals handed from checkout to payment.
///
/// Never stored: recomputed from the cart and the current selections
/// whenever an input changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CheckoutTotals {
    /// Sum of line price times quantity.
    pub subtotal: Money,
    /// Coupon discount taken off the subtotal.
    pub discount: Money,
    /// Tax on the discounted subtotal.
    pub tax: Money,
    /// Shipping cost; zero when every line is digital.
    pub shipping: Money,
    /// Final amount: subtotal - discount + tax + shipping.
    pub total: Money,
}

impl CheckoutTotals {
    /// Compute totals for a cart with the current coupon and shipping
    /// selections.
    ///
    /// Shipping is forced to zero when the cart is all-digital, regardless
    /// of the selected option. The discount is capped at the subtotal so
    /// the total can never go negative.
    pub fn compute(
        cart: &Cart,
        coupon: Option<&AppliedCoupon>,
        shipping_option: &ShippingOption,
    ) -> Result<Self, CommerceError> {
        let currency = cart.currency;

        let mut subtotal = Money::zero(currency);
        for item in &cart.items {
            let line = item
                .price
                .try_multiply(item.quantity)
                .ok_or(CommerceError::Overflow)?;
            if line.currency != currency {
                return Err(currency_mismatch(&subtotal, &line));
            }
            subtotal = subtotal.try_add(&line).ok_or(CommerceError::Overflow)?;
        }

        let discount = coupon
            .map(|c| c.discount(subtotal))
            .unwrap_or_else(|| Money::zero(currency))
            .min(&subtotal);

        let taxable = subtotal
            .try_subtract(&discount)
            .ok_or(CommerceError::Overflow)?;
        let tax = taxable.percentage(TAX_RATE_PERCENT);

        let shipping = if cart.all_digital() {
            Money::zero(currency)
        } else {
            shipping_option.price
        };
        if shipping.currency != currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: currency.code().to_string(),
                got: shipping.currency.code().to_string(),
            });
        }

        let total = taxable
            .try_add(&tax)
            .and_then(|t| t.try_add(&shipping))
            .ok_or(CommerceError::Overflow)?;

        Ok(Self {
            subtotal,
            discount,
            tax,
            shipping,
            total,
        })
    }

    /// Check if a coupon discount is in effect.
    pub fn has_discount(&self) -> bool {
        self.discount.is_positive()
    }

    /// Check if shipping is free (or suppressed).
    pub fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

fn currency_mismatch(expected: &Money, got: &Money) -> CommerceError {
    CommerceError::CurrencyMismatch {
        expected: expected.currency.code().to_string(),
        got: got.currency.code().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Brand, Product, ProductKind};
    use crate::cart::CouponBook;
    use crate::ids::ShippingOptionId;
    use crate::money::Currency;

    fn product(id: &str, price: f64) -> Product {
        Product::new(
            id,
            format!("Product {}", id),
            Money::from_major(price, Currency::USD),
            format!("/images/{}.jpg", id),
            Brand::Nike,
        )
    }

    fn shipping(id: &str, price: f64) -> ShippingOption {
        ShippingOption {
            id: ShippingOptionId::new(id),
            name: format!("Shipping {}", id),
            price: Money::from_major(price, Currency::USD),
            days: "5-7".to_string(),
        }
    }

    #[test]
    fn test_single_item_with_paid_shipping() {
        // $79.99 x 1, no coupon, $18.99 shipping, 8% tax.
        let mut cart = Cart::new();
        cart.add_item(&product("a", 79.99), 1);

        let totals = CheckoutTotals::compute(&cart, None, &shipping("standard", 18.99)).unwrap();

        assert_eq!(totals.subtotal.display(), "$79.99");
        assert_eq!(totals.tax.display(), "$6.40");
        assert_eq!(totals.shipping.display(), "$18.99");
        assert_eq!(totals.total.display(), "$105.38");
    }

    #[test]
    fn test_coupon_applies_before_tax() {
        // DEMO10 on $100.00 with free shipping.
        let mut cart = Cart::new();
        cart.add_item(&product("a", 100.0), 1);
        let coupon = CouponBook::demo().redeem("DEMO10").unwrap();

        let totals =
            CheckoutTotals::compute(&cart, Some(&coupon), &shipping("free", 0.0)).unwrap();

        assert_eq!(totals.discount.display(), "$10.00");
        assert_eq!(totals.tax.display(), "$7.20");
        assert_eq!(totals.shipping.amount_cents, 0);
        assert_eq!(totals.total.display(), "$97.20");
    }

    #[test]
    fn test_demo20_discount_is_exact() {
        let mut cart = Cart::new();
        cart.add_item(&product("a", 45.50), 2);
        let coupon = CouponBook::demo().redeem("DEMO20").unwrap();

        let totals =
            CheckoutTotals::compute(&cart, Some(&coupon), &shipping("free", 0.0)).unwrap();

        // 20% of $91.00.
        assert_eq!(totals.subtotal.amount_cents, 9100);
        assert_eq!(totals.discount.amount_cents, 1820);
    }

    #[test]
    fn test_all_digital_suppresses_shipping() {
        let mut cart = Cart::new();
        cart.add_item(&product("d", 25.0).with_kind(ProductKind::Digital), 2);

        let totals = CheckoutTotals::compute(&cart, None, &shipping("express", 25.0)).unwrap();
        assert_eq!(totals.shipping.amount_cents, 0);
        assert!(totals.free_shipping());
    }

    #[test]
    fn test_mixed_cart_keeps_shipping() {
        let mut cart = Cart::new();
        cart.add_item(&product("d", 25.0).with_kind(ProductKind::Digital), 1);
        cart.add_item(&product("p", 30.0), 1);

        let totals = CheckoutTotals::compute(&cart, None, &shipping("standard", 10.0)).unwrap();
        assert_eq!(totals.shipping.amount_cents, 1000);
    }

    #[test]
    fn test_empty_cart_totals_are_zero_plus_nothing() {
        let cart = Cart::new();
        let totals = CheckoutTotals::compute(&cart, None, &shipping("standard", 10.0)).unwrap();
        // An empty cart is vacuously all-digital, so shipping is suppressed.
        assert_eq!(totals.subtotal.amount_cents, 0);
        assert_eq!(totals.total.amount_cents, 0);
    }

    #[test]
    fn test_discount_capped_at_subtotal() {
        let mut cart = Cart::new();
        cart.add_item(&product("a", 10.0), 1);
        let coupon = AppliedCoupon {
            code: "MEGA".to_string(),
            percent: 150.0,
        };

        let totals =
            CheckoutTotals::compute(&cart, Some(&coupon), &shipping("free", 0.0)).unwrap();
        assert_eq!(totals.discount, totals.subtotal);
        assert!(!totals.total.is_negative());
    }
}
