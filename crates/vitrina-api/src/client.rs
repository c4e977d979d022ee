//! The submission client.
//!
//! A thin wrapper over the fetch transport: each submission is a single
//! fire-and-forget POST with no retry policy, no timeout configuration,
//! and no cancellation. Any non-2xx status or transport failure collapses
//! into one uniform error; callers surface `ApiError::user_message` and
//! leave the form resubmittable.

use serde::Serialize;
use vitrina_commerce::checkout::ShippingAddress;

use crate::error::ApiError;
use crate::payloads::{CheckoutSubmission, ContactSubmission, LeadSubmission};

/// Path of the checkout submission endpoint.
pub const CHECKOUT_PATH: &str = "/v1/checkout";
/// Path of the contact endpoint.
pub const CONTACT_PATH: &str = "/v1/contact";
/// Path of the CRM lead endpoint.
pub const LEADS_PATH: &str = "/v1/leads";

/// HTTP client bound to the external API's base URL.
#[derive(Debug, Clone)]
pub struct SubmitClient {
    base_url: String,
    http: reqwest::Client,
}

impl SubmitClient {
    /// Create a client for a base URL (e.g. "https://api.example.com/api").
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// The absolute URL for an endpoint path.
    fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// POST a JSON body, expecting a 2xx answer.
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(path);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(%url, error = %e, "submission request failed");
                ApiError::Request(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "submission rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    /// Submit the validated checkout address.
    pub async fn submit_checkout(&self, address: &ShippingAddress) -> Result<(), ApiError> {
        let payload = CheckoutSubmission::from(address);
        self.post_json(CHECKOUT_PATH, &payload).await
    }

    /// Sanitize, validate, and submit a contact message.
    pub async fn submit_contact(&self, contact: ContactSubmission) -> Result<(), ApiError> {
        let contact = contact.sanitized();
        contact.validate()?;
        self.post_json(CONTACT_PATH, &contact).await
    }

    /// Sanitize, validate, and submit a CRM lead.
    pub async fn submit_lead(&self, lead: LeadSubmission) -> Result<(), ApiError> {
        let lead = lead.sanitized();
        lead.validate()?;
        self.post_json(LEADS_PATH, &lead).await
    }
}
