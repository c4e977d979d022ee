//! Typed endpoint payloads and the submission client for Vitrina.
//!
//! The storefront talks to three external endpoints: checkout submission,
//! contact messages, and CRM leads. Each gets an explicit request struct
//! that is sanitized and validated here, at the boundary, before the wire.
//! Transport is a single POST per submission; failures of any kind surface
//! as one uniform, user-facing error.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrina_api::prelude::*;
//!
//! let client = SubmitClient::new("https://api.example.com/api");
//! let contact = ContactSubmission {
//!     name: "Ana".to_string(),
//!     email: "ana@mail.com".to_string(),
//!     message: "Quiero informaci\u{f3}n".to_string(),
//! };
//! client.submit_contact(contact).await?;
//! ```

pub mod client;
pub mod error;
pub mod payloads;
pub mod sanitize;

pub use client::{SubmitClient, CHECKOUT_PATH, CONTACT_PATH, LEADS_PATH};
pub use error::ApiError;
pub use payloads::{CheckoutSubmission, ContactSubmission, LeadSubmission};
pub use sanitize::sanitize_text;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::client::{SubmitClient, CHECKOUT_PATH, CONTACT_PATH, LEADS_PATH};
    pub use crate::error::ApiError;
    pub use crate::payloads::{CheckoutSubmission, ContactSubmission, LeadSubmission};
    pub use crate::sanitize::sanitize_text;
}
