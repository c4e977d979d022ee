//! Storefront configuration and injected services.

use std::sync::Arc;

use leptos::prelude::*;
use vitrina_commerce::cart::CheckoutTotals;
use vitrina_commerce::money::{Currency, Money};
use vitrina_commerce::payment::{PaymentError, PaymentHandler, PaymentMethodId};

/// Static configuration for one storefront deployment.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the external API.
    pub api_base: String,
    /// WhatsApp number for the consultation hand-off.
    pub whatsapp_phone: String,
    /// Store name used in outbound messages.
    pub store_name: String,
    /// Wallet balance available at payment (mocked pending the wallet
    /// service).
    pub wallet_balance: Money,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.sneakerscr.example/api".to_string(),
            whatsapp_phone: "50671508835".to_string(),
            store_name: "SneakersCR".to_string(),
            wallet_balance: Money::from_major(25.0, Currency::USD),
        }
    }
}

/// The injected payment handler, as shared context.
#[derive(Clone)]
pub struct PaymentGateway(pub Arc<dyn PaymentHandler + Send + Sync>);

impl PaymentGateway {
    pub fn use_gateway() -> Self {
        expect_context::<Self>()
    }
}

/// Demo handler standing in for a real gateway adapter: accepts every
/// payment after logging it.
pub struct DemoPaymentHandler;

#[async_trait::async_trait(?Send)]
impl PaymentHandler for DemoPaymentHandler {
    async fn submit(
        &self,
        method: PaymentMethodId,
        totals: &CheckoutTotals,
    ) -> Result<(), PaymentError> {
        tracing::info!(method = %method, total = %totals.total, "demo payment accepted");
        Ok(())
    }
}

/// Provide the configuration and the payment gateway to the component
/// tree.
pub fn provide_storefront_services(config: StorefrontConfig) {
    provide_context(PaymentGateway(Arc::new(DemoPaymentHandler)));
    provide_context(config);
}

/// Fetch the configuration from context.
pub fn use_config() -> StorefrontConfig {
    expect_context::<StorefrontConfig>()
}
