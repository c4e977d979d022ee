//! Shipping address capture and validation.
//!
//! Validation is purely local: per-field minimum lengths plus an email
//! shape check, with no network round trip. Violations populate a
//! per-field error map and block submission.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw, unvalidated address form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFields {
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

impl AddressFields {
    /// Validate every field, reporting all violations at once.
    pub fn validate(&self) -> Result<ShippingAddress, FieldErrors> {
        let mut errors = FieldErrors::default();

        check_min(&mut errors, "first_name", &self.first_name, 2, "First name is required");
        check_min(&mut errors, "last_name", &self.last_name, 2, "Last name is required");
        if !looks_like_email(self.email.trim()) {
            errors.insert("email", "Enter a valid email");
        }
        check_min(&mut errors, "phone", &self.phone, 10, "Enter a valid phone number");
        check_min(&mut errors, "address", &self.address, 5, "Address is required");
        check_min(&mut errors, "city", &self.city, 2, "City is required");
        check_min(&mut errors, "state", &self.state, 2, "State/province is required");
        check_min(&mut errors, "zip_code", &self.zip_code, 3, "Postal code is required");
        check_min(&mut errors, "country", &self.country, 2, "Country is required");

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ShippingAddress {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            zip_code: self.zip_code.trim().to_string(),
            country: self.country.trim().to_string(),
        })
    }
}

fn check_min(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    min: usize,
    message: &'static str,
) {
    if value.trim().chars().count() < min {
        errors.insert(field, message);
    }
}

/// Cheap email shape check: one `@` with a non-empty local part and a
/// dotted, non-empty domain.
pub fn looks_like_email(s: &str) -> bool {
    let mut parts = s.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || s.contains(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Per-field validation errors, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }

    /// The error message for one field, if any.
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}

/// A validated shipping address, ready for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
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

impl ShippingAddress {
    /// Full name for display.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
