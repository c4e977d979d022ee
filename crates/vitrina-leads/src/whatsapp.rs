//! WhatsApp deep-link construction.
//!
//! The storefront hands prospects off to WhatsApp with a prefilled,
//! human-readable consultation message. This is a one-way notification:
//! the link opens in a new browsing context and nothing comes back.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use vitrina_commerce::catalog::Product;

use crate::lead::{LeadId, LeadStatus};
use crate::size::ShoeSize;

/// Builder for `wa.me` deep links against the store's WhatsApp number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppLink {
    phone: String,
    store_name: String,
}

impl WhatsAppLink {
    /// Create a link builder for a phone number in international format
    /// without the leading `+` (e.g. "50671508835").
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            store_name: "SneakersCR".to_string(),
        }
    }

    /// Override the store name used in message greetings.
    pub fn with_store_name(mut self, name: impl Into<String>) -> Self {
        self.store_name = name.into();
        self
    }

    /// The deep link for an arbitrary message.
    pub fn url(&self, message: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.phone,
            utf8_percent_encode(message, NON_ALPHANUMERIC)
        )
    }

    /// The prefilled size-consultation message for a product lead.
    pub fn consultation_message(
        &self,
        product: &Product,
        size: &ShoeSize,
        lead_id: &LeadId,
        status: LeadStatus,
    ) -> String {
        let mut message = format!(
            "Hola \u{1f44b} te escribo de {}\n\nMe interesa:\n",
            self.store_name
        );
        message.push_str(&format!("Producto: {}\n", product.name));
        message.push_str(&format!("SKU: {}\n", product.sku_display()));
        message.push_str(&format!("Precio: {}\n", product.price.display()));
        message.push_str(&format!("Talla: {}\n", size.label()));
        message.push_str(&format!("\n\u{1f4e6} Lead ID: #{}\n", lead_id));
        match status {
            LeadStatus::FreeShippingAccepted => {
                message.push_str("\u{1f69a} Env\u{ed}o gratis aceptado \u{2713}\n");
            }
            LeadStatus::Declined => {
                message.push_str("\u{2139}\u{fe0f} Sin registro de env\u{ed}o gratis\n");
            }
        }
        message.push_str("\n\u{bf}Confirmas disponibilidad?");
        message
    }

    /// The deep link for a product consultation.
    pub fn consultation_url(
        &self,
        product: &Product,
        size: &ShoeSize,
        lead_id: &LeadId,
        status: LeadStatus,
    ) -> String {
        self.url(&self.consultation_message(product, size, lead_id, status))
    }

    /// The default general-inquiry link used by the floating contact button.
    pub fn general_inquiry_url(&self) -> String {
        self.url("Hola, tengo una consulta sobre los tenis de sneakerscr.com")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vitrina_commerce::catalog::Catalog;

    fn link() -> WhatsAppLink {
        WhatsAppLink::new("50671508835")
    }

    fn lead_id() -> LeadId {
        LeadId::for_date(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), 7)
    }

    #[test]
    fn test_consultation_message_contents() {
        let catalog = Catalog::demo();
        let product = &catalog.products()[0];
        let size = ShoeSize::new("9", "43");

        let message = link().consultation_message(
            product,
            &size,
            &lead_id(),
            LeadStatus::FreeShippingAccepted,
        );

        assert!(message.contains("Producto: Nike Air Max Pro"));
        assert!(message.contains("SKU: NIKE-AIR-001"));
        assert!(message.contains("Precio: $89.99"));
        assert!(message.contains("Talla: 9US/43EU"));
        assert!(message.contains("Lead ID: #SRC-20240315-00007"));
        assert!(message.contains("aceptado"));
        assert!(message.ends_with("\u{bf}Confirmas disponibilidad?"));
    }

    #[test]
    fn test_declined_message_variant() {
        let catalog = Catalog::demo();
        let product = &catalog.products()[1];
        let size = ShoeSize::new("8", "41");

        let message =
            link().consultation_message(product, &size, &lead_id(), LeadStatus::Declined);
        assert!(message.contains("Sin registro"));
    }

    #[test]
    fn test_url_is_percent_encoded() {
        let url = link().url("Hola, \u{bf}hay tallas?");
        assert!(url.starts_with("https://wa.me/50671508835?text="));
        assert!(!url.contains(' '));
        assert!(url.contains("Hola%2C"));
    }

    #[test]
    fn test_consultation_url_embeds_lead_id() {
        let catalog = Catalog::demo();
        let product = &catalog.products()[0];
        let size = ShoeSize::new("9", "43");

        let url =
            link().consultation_url(product, &size, &lead_id(), LeadStatus::Declined);
        assert!(url.contains("SRC%2D20240315%2D00007"));
    }
}
