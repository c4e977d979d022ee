//! Lead records and identifiers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use vitrina_commerce::catalog::Product;
use vitrina_commerce::money::Money;

use crate::form::ShippingLeadInfo;
use crate::size::ShoeSize;

/// An opaque lead identifier: `SRC-YYYYMMDD-NNNNN`.
///
/// The date code makes manual reconciliation easy; the five-digit suffix
/// comes from a timestamp/counter mix so consecutive ids differ without an
/// RNG dependency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(String);

impl LeadId {
    /// Generate an id for the current date.
    pub fn generate() -> Self {
        Self::for_date(Utc::now().date_naive(), unique_suffix())
    }

    /// Build an id for a known date and sequence number.
    pub fn for_date(date: NaiveDate, seq: u32) -> Self {
        Self(format!("SRC-{}-{:05}", date.format("%Y%m%d"), seq % 100_000))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for LeadId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

fn unique_suffix() -> u32 {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    millis.wrapping_mul(97).wrapping_add(counter) % 100_000
}

/// Whether the prospect registered for the free-shipping offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStatus {
    /// Completed the shipping form.
    #[serde(rename = "Env\u{ed}o gratis aceptado \u{2713}")]
    FreeShippingAccepted,
    /// Skipped the shipping form.
    #[serde(rename = "Sin registro de env\u{ed}o gratis")]
    Declined,
}

impl LeadStatus {
    /// The human-readable label, as stored in the lead log.
    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::FreeShippingAccepted => "Env\u{ed}o gratis aceptado \u{2713}",
            LeadStatus::Declined => "Sin registro de env\u{ed}o gratis",
        }
    }
}

/// A captured prospect record, persisted locally for manual follow-up.
///
/// Field names match the JSON the storefront has always written; contact
/// fields stay empty when the prospect skipped the shipping form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub lead_id: LeadId,
    pub timestamp: DateTime<Utc>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub district: String,
    pub canton: String,
    pub province: String,
    /// Product name snapshot.
    pub product: String,
    pub sku: Option<String>,
    /// Selected size, e.g. "9US/43EU".
    #[serde(rename = "talla")]
    pub size: String,
    pub price: Money,
    pub status: LeadStatus,
}

impl Lead {
    /// A lead that declined the free-shipping offer: product interest only.
    pub fn declined(lead_id: LeadId, product: &Product, size: &ShoeSize) -> Self {
        Self {
            lead_id,
            timestamp: Utc::now(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            district: String::new(),
            canton: String::new(),
            province: String::new(),
            product: product.name.clone(),
            sku: product.sku.clone(),
            size: size.label(),
            price: product.price,
            status: LeadStatus::Declined,
        }
    }

    /// A lead that completed the shipping form.
    pub fn with_shipping(
        lead_id: LeadId,
        product: &Product,
        size: &ShoeSize,
        info: &ShippingLeadInfo,
    ) -> Self {
        Self {
            lead_id,
            timestamp: Utc::now(),
            first_name: info.first_name.clone(),
            last_name: info.last_name.clone(),
            email: info.email.clone(),
            phone: info.phone.clone(),
            address: info.address.clone(),
            district: info.district.clone(),
            canton: info.canton.clone(),
            province: info.province.clone(),
            product: product.name.clone(),
            sku: product.sku.clone(),
            size: size.label(),
            price: product.price,
            status: LeadStatus::FreeShippingAccepted,
        }
    }

    /// Check if the lead carries contact information.
    pub fn has_contact(&self) -> bool {
        self.status == LeadStatus::FreeShippingAccepted
    }
}
