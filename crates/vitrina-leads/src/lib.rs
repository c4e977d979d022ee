//! Lead capture for the Vitrina storefront.
//!
//! A "lead" is a captured prospect record: a visitor picked a product and
//! a size, optionally registered for the free-shipping offer, and was
//! handed off to WhatsApp with a prefilled consultation message. Leads are
//! appended to a local JSON log for manual follow-up.
//!
//! # Example
//!
//! ```rust
//! use vitrina_commerce::catalog::Catalog;
//! use vitrina_leads::prelude::*;
//!
//! let catalog = Catalog::demo();
//! let product = &catalog.products()[0];
//! let size = ShoeSize::new("9", "43");
//!
//! let lead = Lead::declined(LeadId::generate(), product, &size);
//! let mut log = LeadLog::new(MemoryLeadStore::new());
//! log.append(&lead).unwrap();
//!
//! let link = WhatsAppLink::new("50671508835");
//! let url = link.consultation_url(product, &size, &lead.lead_id, lead.status);
//! assert!(url.starts_with("https://wa.me/"));
//! ```

pub mod form;
pub mod lead;
pub mod log;
pub mod size;
pub mod whatsapp;

pub use form::{cantons_for, ShippingLeadFields, ShippingLeadInfo, CR_PROVINCES};
pub use lead::{Lead, LeadId, LeadStatus};
pub use log::{LeadError, LeadLog, LeadStore, MemoryLeadStore, DEFAULT_LOG_KEY};
pub use size::{size_chart, ShoeSize, SIZE_CHART};
pub use whatsapp::WhatsAppLink;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::form::{cantons_for, ShippingLeadFields, ShippingLeadInfo, CR_PROVINCES};
    pub use crate::lead::{Lead, LeadId, LeadStatus};
    pub use crate::log::{LeadError, LeadLog, LeadStore, MemoryLeadStore, DEFAULT_LOG_KEY};
    pub use crate::size::{size_chart, ShoeSize, SIZE_CHART};
    pub use crate::whatsapp::WhatsAppLink;
}
