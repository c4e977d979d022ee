//! Checkout form state machine.
//!
//! The form moves `Idle -> Submitting -> Submitted`. Validation is
//! synchronous, so the validating step collapses into `begin_submit`:
//! invalid input drops straight back to `Idle` with per-field errors. A
//! failed remote submission also returns to `Idle`, keeping the entered
//! fields intact so the form stays resubmittable.

use crate::cart::{AppliedCoupon, Cart, CheckoutTotals, CouponBook};
use crate::checkout::{AddressFields, FieldErrors, ShippingAddress, ShippingOption};
use crate::error::CommerceError;
use crate::ids::ShippingOptionId;

/// Lifecycle phase of the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// State backing the checkout modal.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutForm {
    /// Raw address input.
    pub fields: AddressFields,
    /// Validation errors from the last submit attempt.
    pub field_errors: FieldErrors,
    /// Current phase.
    pub phase: CheckoutPhase,
    /// Banner error from a failed remote submission.
    pub submit_error: Option<String>,
    /// Applied coupon, if any.
    pub coupon: Option<AppliedCoupon>,
    /// Error from the last coupon attempt.
    pub coupon_error: Option<String>,
    shipping_options: Vec<ShippingOption>,
    selected_shipping: ShippingOptionId,
    coupon_book: CouponBook,
}

impl CheckoutForm {
    /// Create a form over the given shipping menu and coupon table.
    ///
    /// The shipping selection defaults to the first option. An empty menu
    /// falls back to the default one so a selected option always exists.
    pub fn new(shipping_options: Vec<ShippingOption>, coupon_book: CouponBook) -> Self {
        let shipping_options = if shipping_options.is_empty() {
            ShippingOption::defaults()
        } else {
            shipping_options
        };
        let selected_shipping = shipping_options[0].id.clone();
        Self {
            fields: AddressFields::default(),
            field_errors: FieldErrors::default(),
            phase: CheckoutPhase::Idle,
            submit_error: None,
            coupon: None,
            coupon_error: None,
            shipping_options,
            selected_shipping,
            coupon_book,
        }
    }

    /// The offered shipping options.
    pub fn shipping_options(&self) -> &[ShippingOption] {
        &self.shipping_options
    }

    /// The currently selected shipping option.
    pub fn selected_option(&self) -> &ShippingOption {
        self.shipping_options
            .iter()
            .find(|o| o.id == self.selected_shipping)
            .or_else(|| self.shipping_options.first())
            .expect("checkout form has no shipping options")
    }

    /// Select a shipping option by ID. Unknown IDs are ignored.
    pub fn select_shipping(&mut self, id: &ShippingOptionId) {
        if self.shipping_options.iter().any(|o| &o.id == id) {
            self.selected_shipping = id.clone();
        }
    }

    /// Apply a coupon code from the input box.
    ///
    /// On success the coupon replaces any previous one and the caller
    /// clears the input; on failure the visible error is set and the
    /// discount stays as it was.
    pub fn apply_coupon(&mut self, code: &str) -> Result<(), CommerceError> {
        match self.coupon_book.redeem(code) {
            Ok(coupon) => {
                self.coupon = Some(coupon);
                self.coupon_error = None;
                Ok(())
            }
            Err(err) => {
                self.coupon_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Whether the shipping method section should render.
    ///
    /// Hidden entirely when every cart line is digital; shipping cost is
    /// forced to zero in the same case.
    pub fn shipping_section_visible(&self, cart: &Cart) -> bool {
        !cart.all_digital()
    }

    /// Compute the totals for the current cart and selections.
    pub fn totals(&self, cart: &Cart) -> Result<CheckoutTotals, CommerceError> {
        CheckoutTotals::compute(cart, self.coupon.as_ref(), self.selected_option())
    }

    /// Validate and move to `Submitting`.
    ///
    /// Returns the validated address on success. On validation failure the
    /// form stays `Idle` with `field_errors` populated.
    pub fn begin_submit(&mut self) -> Result<ShippingAddress, FieldErrors> {
        if self.phase == CheckoutPhase::Submitting {
            return Err(self.field_errors.clone());
        }
        match self.fields.validate() {
            Ok(address) => {
                self.field_errors = FieldErrors::default();
                self.submit_error = None;
                self.phase = CheckoutPhase::Submitting;
                Ok(address)
            }
            Err(errors) => {
                self.field_errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Record a failed remote submission; the form becomes resubmittable.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.phase = CheckoutPhase::Idle;
        self.submit_error = Some(message.into());
    }

    /// Record a successful submission; triggers the payment hand-off.
    pub fn submit_succeeded(&mut self) {
        self.phase = CheckoutPhase::Submitted;
        self.submit_error = None;
    }

    /// Check if the form is mid-submission.
    pub fn is_submitting(&self) -> bool {
        self.phase == CheckoutPhase::Submitting
    }
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self::new(ShippingOption::defaults(), CouponBook::demo())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Brand, Product};
    use crate::money::{Currency, Money};

    fn filled(form: &mut CheckoutForm) {
        form.fields = AddressFields {
            first_name: "Juan".to_string(),
            last_name: "Garc\u{ed}a".to_string(),
            email: "juan@example.com".to_string(),
            phone: "+506 8765 4321".to_string(),
            address: "Calle Principal 123".to_string(),
            city: "San Jos\u{e9}".to_string(),
            state: "SJ".to_string(),
            zip_code: "10101".to_string(),
            country: "Costa Rica".to_string(),
        };
    }

    #[test]
    fn test_defaults_to_first_shipping_option() {
        let form = CheckoutForm::default();
        assert_eq!(form.selected_option().id.as_str(), "free");
    }

    #[test]
    fn test_select_unknown_shipping_is_ignored() {
        let mut form = CheckoutForm::default();
        form.select_shipping(&ShippingOptionId::new("drone"));
        assert_eq!(form.selected_option().id.as_str(), "free");

        form.select_shipping(&ShippingOptionId::new("express"));
        assert_eq!(form.selected_option().id.as_str(), "express");
    }

    #[test]
    fn test_invalid_fields_block_submission() {
        let mut form = CheckoutForm::default();
        let errors = form.begin_submit().unwrap_err();
        assert!(!errors.is_empty());
        assert_eq!(form.phase, CheckoutPhase::Idle);
    }

    #[test]
    fn test_submit_lifecycle() {
        let mut form = CheckoutForm::default();
        filled(&mut form);

        let address = form.begin_submit().unwrap();
        assert_eq!(address.city, "San Jos\u{e9}");
        assert!(form.is_submitting());

        form.submit_succeeded();
        assert_eq!(form.phase, CheckoutPhase::Submitted);
    }

    #[test]
    fn test_failed_submit_keeps_fields_and_resubmits() {
        let mut form = CheckoutForm::default();
        filled(&mut form);

        form.begin_submit().unwrap();
        form.submit_failed("network down");

        assert_eq!(form.phase, CheckoutPhase::Idle);
        assert_eq!(form.submit_error.as_deref(), Some("network down"));
        assert_eq!(form.fields.city, "San Jos\u{e9}");
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_coupon_errors_leave_discount_untouched() {
        let mut form = CheckoutForm::default();

        form.apply_coupon("DEMO20").unwrap();
        assert!(form.coupon.is_some());

        assert!(form.apply_coupon("BOGUS").is_err());
        assert!(form.coupon_error.is_some());
        // The previously applied coupon survives a failed attempt.
        assert_eq!(form.coupon.as_ref().unwrap().code, "DEMO20");
    }

    #[test]
    fn test_totals_use_selected_shipping() {
        let mut form = CheckoutForm::default();
        let mut cart = Cart::new();
        cart.add_item(
            &Product::new(
                "a",
                "Product a",
                Money::from_major(100.0, Currency::USD),
                "/images/a.jpg",
                Brand::Nike,
            ),
            1,
        );

        form.select_shipping(&ShippingOptionId::new("standard"));
        let totals = form.totals(&cart).unwrap();
        assert_eq!(totals.shipping.amount_cents, 1000);
        // $100.00 + 8% tax + $10.00 shipping.
        assert_eq!(totals.total.display(), "$118.00");
    }
}
