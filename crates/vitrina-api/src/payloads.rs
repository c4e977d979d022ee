//! Request payloads for the external endpoints.
//!
//! Each endpoint gets an explicit schema-validated struct: payloads are
//! sanitized and checked at this boundary, before anything reaches the
//! wire. Field names serialize in the camelCase the backend expects.

use serde::{Deserialize, Serialize};
use vitrina_commerce::checkout::{looks_like_email, ShippingAddress};

use crate::error::ApiError;
use crate::sanitize::{sanitize_opt, sanitize_text};

/// Body of the checkout submission endpoint: the validated address fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl From<&ShippingAddress> for CheckoutSubmission {
    fn from(address: &ShippingAddress) -> Self {
        Self {
            first_name: address.first_name.clone(),
            last_name: address.last_name.clone(),
            email: address.email.clone(),
            phone: address.phone.clone(),
            address: address.address.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            zip_code: address.zip_code.clone(),
            country: address.country.clone(),
        }
    }
}

/// Body of the contact endpoint: free-text prospect contact data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Sanitize the free-text fields in place.
    pub fn sanitized(mut self) -> Self {
        self.name = sanitize_text(&self.name);
        self.email = self.email.trim().to_lowercase();
        self.message = sanitize_text(&self.message);
        self
    }

    /// Validate before sending.
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut problems = Vec::new();
        if self.name.trim().chars().count() < 2 {
            problems.push("name must have at least 2 characters".to_string());
        }
        if !looks_like_email(self.email.trim()) {
            problems.push("email is not valid".to_string());
        }
        if self.message.trim().is_empty() {
            problems.push("message must not be empty".to_string());
        }
        if self.message.chars().count() > 1000 {
            problems.push("message must have at most 1000 characters".to_string());
        }
        check(problems)
    }
}

/// Body of the CRM lead endpoint: a prospect record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub business_name: String,
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl LeadSubmission {
    /// Sanitize every field in place.
    pub fn sanitized(mut self) -> Self {
        self.business_name = sanitize_text(&self.business_name);
        self.full_name = sanitize_text(&self.full_name);
        self.email = self.email.trim().to_lowercase();
        self.whatsapp_number = sanitize_opt(&self.whatsapp_number);
        self.website = sanitize_opt(&self.website);
        self.budget_range = sanitize_opt(&self.budget_range);
        self.service = sanitize_opt(&self.service);
        self.language = sanitize_opt(&self.language);
        self
    }

    /// Validate before sending, with the backend's length caps.
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut problems = Vec::new();
        check_len(&mut problems, "businessName", &self.business_name, 2, 100);
        check_len(&mut problems, "fullName", &self.full_name, 2, 100);
        if !looks_like_email(self.email.trim()) || self.email.chars().count() > 255 {
            problems.push("email is not valid".to_string());
        }
        check_opt_max(&mut problems, "whatsappNumber", &self.whatsapp_number, 20);
        check_opt_max(&mut problems, "website", &self.website, 255);
        check_opt_max(&mut problems, "budgetRange", &self.budget_range, 50);
        check_opt_max(&mut problems, "service", &self.service, 255);
        check_opt_max(&mut problems, "language", &self.language, 50);
        check(problems)
    }
}

fn check(problems: Vec<String>) -> Result<(), ApiError> {
    if problems.is_empty() {
        Ok(())
    } else {
        Err(ApiError::InvalidPayload(problems.join("; ")))
    }
}

fn check_len(problems: &mut Vec<String>, field: &str, value: &str, min: usize, max: usize) {
    let len = value.trim().chars().count();
    if len < min || len > max {
        problems.push(format!("{} must have {} to {} characters", field, min, max));
    }
}

fn check_opt_max(problems: &mut Vec<String>, field: &str, value: &Option<String>, max: usize) {
    if let Some(v) = value {
        if v.chars().count() > max {
            problems.push(format!("{} must have at most {} characters", field, max));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrina_commerce::checkout::AddressFields;

    fn address() -> ShippingAddress {
        AddressFields {
            first_name: "Juan".to_string(),
            last_name: "Garc\u{ed}a".to_string(),
            email: "juan@example.com".to_string(),
            phone: "+1 786 391 8722".to_string(),
            address: "123 Main Street".to_string(),
            city: "Miami".to_string(),
            state: "FL".to_string(),
            zip_code: "33101".to_string(),
            country: "United States".to_string(),
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_checkout_payload_uses_camel_case() {
        let payload = CheckoutSubmission::from(&address());
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"firstName\":\"Juan\""));
        assert!(json.contains("\"zipCode\":\"33101\""));
        assert!(!json.contains("zip_code"));
    }

    #[test]
    fn test_contact_validation() {
        let contact = ContactSubmission {
            name: "Ana".to_string(),
            email: "ana@mail.com".to_string(),
            message: "Quiero informaci\u{f3}n".to_string(),
        };
        assert!(contact.validate().is_ok());

        let bad = ContactSubmission {
            name: "A".to_string(),
            email: "not-an-email".to_string(),
            message: "".to_string(),
        };
        let err = bad.validate().unwrap_err();
        assert!(matches!(err, ApiError::InvalidPayload(_)));
        assert!(err.to_string().contains("name"));
        assert!(err.to_string().contains("email"));
        assert!(err.to_string().contains("message"));
    }

    #[test]
    fn test_contact_sanitization() {
        let contact = ContactSubmission {
            name: " <b>Ana</b> ".to_string(),
            email: " Ana@Mail.COM ".to_string(),
            message: "<script>x</script>Hola".to_string(),
        }
        .sanitized();

        assert_eq!(contact.name, "Ana");
        assert_eq!(contact.email, "ana@mail.com");
        assert_eq!(contact.message, "xHola");
    }

    #[test]
    fn test_lead_validation_bounds() {
        let lead = LeadSubmission {
            business_name: "Acme Store".to_string(),
            full_name: "Ana Rojas".to_string(),
            email: "ana@acme.cr".to_string(),
            whatsapp_number: Some("+50687654321".to_string()),
            ..LeadSubmission::default()
        };
        assert!(lead.validate().is_ok());

        let too_long = LeadSubmission {
            whatsapp_number: Some("1".repeat(21)),
            ..lead.clone()
        };
        assert!(too_long.validate().is_err());

        let no_name = LeadSubmission {
            business_name: "X".to_string(),
            ..lead
        };
        assert!(no_name.validate().is_err());
    }

    #[test]
    fn test_lead_optional_fields_skip_serialization() {
        let lead = LeadSubmission {
            business_name: "Acme".to_string(),
            full_name: "Ana Rojas".to_string(),
            email: "ana@acme.cr".to_string(),
            ..LeadSubmission::default()
        };
        let json = serde_json::to_string(&lead).unwrap();
        assert!(!json.contains("website"));
        assert!(!json.contains("budgetRange"));
    }

    #[test]
    fn test_lead_sanitization_drops_emptied_options() {
        let lead = LeadSubmission {
            business_name: "<i>Acme</i>".to_string(),
            full_name: "Ana".to_string(),
            email: "ana@acme.cr".to_string(),
            website: Some("<script></script>".to_string()),
            ..LeadSubmission::default()
        }
        .sanitized();

        assert_eq!(lead.business_name, "Acme");
        assert_eq!(lead.website, None);
    }
}
