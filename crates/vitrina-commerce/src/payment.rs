//! Payment method selection and the payment session.
//!
//! The session receives the totals computed at checkout, applies optional
//! wallet credit, and forwards the chosen method plus the finalized amount
//! to an injected handler. Gateway-specific errors are never interpreted
//! here; a rejection surfaces as a generic message and leaves the session
//! open for retry.

use crate::cart::CheckoutTotals;
use crate::money::Money;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The fixed set of payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethodId {
    /// Credit/debit card.
    #[default]
    Card,
    /// PayPal account.
    Paypal,
    /// MercadoPago wallet.
    MercadoPago,
    /// Cryptocurrency.
    Crypto,
    /// Manual bank transfer.
    BankTransfer,
}

impl PaymentMethodId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethodId::Card => "card",
            PaymentMethodId::Paypal => "paypal",
            PaymentMethodId::MercadoPago => "mercadopago",
            PaymentMethodId::Crypto => "crypto",
            PaymentMethodId::BankTransfer => "manual",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "card" => Some(PaymentMethodId::Card),
            "paypal" => Some(PaymentMethodId::Paypal),
            "mercadopago" => Some(PaymentMethodId::MercadoPago),
            "crypto" => Some(PaymentMethodId::Crypto),
            "manual" => Some(PaymentMethodId::BankTransfer),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentMethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A payment method entry in the selection menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    pub name: String,
    pub description: String,
    pub enabled: bool,
}

impl PaymentMethod {
    fn entry(id: PaymentMethodId, name: &str, description: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            enabled: true,
        }
    }

    /// The default payment menu.
    pub fn defaults() -> Vec<PaymentMethod> {
        vec![
            Self::entry(
                PaymentMethodId::Card,
                "Tarjeta de Cr\u{e9}dito/D\u{e9}bito",
                "Visa, Mastercard, American Express",
            ),
            Self::entry(
                PaymentMethodId::Paypal,
                "PayPal",
                "Pago seguro con tu cuenta PayPal",
            ),
            Self::entry(
                PaymentMethodId::MercadoPago,
                "MercadoPago",
                "Paga con tu billetera MercadoPago",
            ),
            Self::entry(
                PaymentMethodId::Crypto,
                "Criptomonedas",
                "Bitcoin, Ethereum, USDC",
            ),
            Self::entry(
                PaymentMethodId::BankTransfer,
                "Transferencia Bancaria",
                "Transferencia directa a nuestra cuenta",
            ),
        ]
    }
}

/// Error from the external payment handler.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaymentError {
    /// The handler rejected the payment.
    #[error("Payment was rejected: {0}")]
    Rejected(String),
}

/// The injected payment submission seam.
///
/// Receives the chosen method and the finalized totals; the storefront
/// supplies a real gateway adapter, tests supply canned outcomes.
#[async_trait(?Send)]
pub trait PaymentHandler {
    async fn submit(
        &self,
        method: PaymentMethodId,
        totals: &CheckoutTotals,
    ) -> Result<(), PaymentError>;
}

/// Lifecycle phase of the payment session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentPhase {
    #[default]
    Selecting,
    Submitting,
    Completed,
}

/// State backing the payment modal.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSession {
    totals: CheckoutTotals,
    wallet_balance: Money,
    /// Selected method.
    pub method: PaymentMethodId,
    /// Whether wallet credit is applied.
    pub use_wallet: bool,
    /// Current phase.
    pub phase: PaymentPhase,
    /// Error from the last rejected submission.
    pub error: Option<String>,
}

impl PaymentSession {
    /// Create a session from the checkout totals and the wallet balance.
    pub fn new(totals: CheckoutTotals, wallet_balance: Money) -> Self {
        Self {
            totals,
            wallet_balance: wallet_balance.clamp_non_negative(),
            method: PaymentMethodId::default(),
            use_wallet: false,
            phase: PaymentPhase::Selecting,
            error: None,
        }
    }

    /// The totals handed over from checkout.
    pub fn totals(&self) -> &CheckoutTotals {
        &self.totals
    }

    /// Wallet balance available to this session.
    pub fn wallet_balance(&self) -> Money {
        self.wallet_balance
    }

    /// Select a payment method.
    pub fn select(&mut self, method: PaymentMethodId) {
        self.method = method;
    }

    /// Toggle wallet credit.
    pub fn set_use_wallet(&mut self, use_wallet: bool) {
        self.use_wallet = use_wallet;
    }

    /// The wallet credit applied: `min(balance, total)` when enabled.
    pub fn wallet_deduction(&self) -> Money {
        if self.use_wallet {
            self.wallet_balance.min(&self.totals.total)
        } else {
            Money::zero(self.totals.total.currency)
        }
    }

    /// The amount to charge: `max(total - deduction, 0)`.
    pub fn final_total(&self) -> Money {
        self.totals
            .total
            .try_subtract(&self.wallet_deduction())
            .unwrap_or_else(|| Money::zero(self.totals.total.currency))
            .clamp_non_negative()
    }

    /// Whether the submit action is available.
    ///
    /// Disabled mid-flight and whenever the wallet-clamped final total is
    /// not positive: a zero-amount charge never reaches the handler.
    pub fn can_submit(&self) -> bool {
        self.phase == PaymentPhase::Selecting && self.final_total().is_positive()
    }

    /// Move to `Submitting`. Returns false when submission is unavailable.
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.phase = PaymentPhase::Submitting;
        self.error = None;
        true
    }

    /// Record a handler rejection; the session stays open for retry.
    pub fn submit_failed(&mut self, error: &PaymentError) {
        self.phase = PaymentPhase::Selecting;
        self.error = Some(error.to_string());
    }

    /// Record a successful payment; the modal closes after this.
    pub fn submit_succeeded(&mut self) {
        self.phase = PaymentPhase::Completed;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::catalog::{Brand, Product};
    use crate::checkout::ShippingOption;
    use crate::money::Currency;

    fn totals(total_major: f64) -> CheckoutTotals {
        let mut cart = Cart::new();
        cart.add_item(
            &Product::new(
                "a",
                "Product a",
                Money::from_major(total_major, Currency::USD),
                "/images/a.jpg",
                Brand::Nike,
            ),
            1,
        );
        // Digital-free cart with a free option keeps shipping at zero; undo
        // the tax so the grand total equals the requested amount.
        let mut t = CheckoutTotals::compute(
            &cart,
            None,
            &ShippingOption::new("free", "Free", Money::zero(Currency::USD), "7-10"),
        )
        .unwrap();
        t.tax = Money::zero(Currency::USD);
        t.total = t.subtotal;
        t
    }

    fn usd(amount: f64) -> Money {
        Money::from_major(amount, Currency::USD)
    }

    #[test]
    fn test_method_ids_round_trip() {
        for method in [
            PaymentMethodId::Card,
            PaymentMethodId::Paypal,
            PaymentMethodId::MercadoPago,
            PaymentMethodId::Crypto,
            PaymentMethodId::BankTransfer,
        ] {
            assert_eq!(PaymentMethodId::from_str(method.as_str()), Some(method));
        }
        assert_eq!(PaymentMethodId::from_str("cheque"), None);
    }

    #[test]
    fn test_default_menu_has_five_methods() {
        assert_eq!(PaymentMethod::defaults().len(), 5);
    }

    #[test]
    fn test_wallet_clamped_to_total() {
        let mut session = PaymentSession::new(totals(50.0), usd(80.0));
        session.set_use_wallet(true);

        assert_eq!(session.wallet_deduction(), usd(50.0));
        assert!(session.final_total().is_zero());
    }

    #[test]
    fn test_final_total_never_negative() {
        let mut session = PaymentSession::new(totals(30.0), usd(100.0));
        session.set_use_wallet(true);
        assert!(!session.final_total().is_negative());

        session.set_use_wallet(false);
        assert_eq!(session.final_total(), usd(30.0));
    }

    #[test]
    fn test_partial_wallet_coverage() {
        let mut session = PaymentSession::new(totals(100.0), usd(40.0));
        session.set_use_wallet(true);

        assert_eq!(session.wallet_deduction(), usd(40.0));
        assert_eq!(session.final_total(), usd(60.0));
    }

    #[test]
    fn test_zero_final_total_blocks_submit() {
        let mut session = PaymentSession::new(totals(50.0), usd(50.0));
        session.set_use_wallet(true);

        assert!(!session.can_submit());
        assert!(!session.begin_submit());
    }

    #[test]
    fn test_rejection_keeps_session_open() {
        let mut session = PaymentSession::new(totals(50.0), usd(0.0));
        assert!(session.begin_submit());

        session.submit_failed(&PaymentError::Rejected("declined".to_string()));
        assert_eq!(session.phase, PaymentPhase::Selecting);
        assert!(session.error.is_some());
        assert!(session.can_submit());
    }

    #[test]
    fn test_successful_payment_completes() {
        let mut session = PaymentSession::new(totals(50.0), usd(0.0));
        session.select(PaymentMethodId::Paypal);
        assert!(session.begin_submit());
        // No double submit while in flight.
        assert!(!session.begin_submit());

        session.submit_succeeded();
        assert_eq!(session.phase, PaymentPhase::Completed);
    }

    #[test]
    fn test_negative_wallet_balance_is_ignored() {
        let mut session = PaymentSession::new(totals(50.0), usd(-20.0));
        session.set_use_wallet(true);
        assert!(session.wallet_deduction().is_zero());
        assert_eq!(session.final_total(), usd(50.0));
    }
}
