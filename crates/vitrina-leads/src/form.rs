//! The free-shipping registration form.
//!
//! Collects a Costa Rica delivery address for the prospect before the
//! WhatsApp hand-off. Validation mirrors the checkout address rules but
//! with the shorter phone minimum and the district/canton/province split
//! used locally.

use serde::{Deserialize, Serialize};
use vitrina_commerce::checkout::{looks_like_email, FieldErrors};

/// Costa Rica provinces offered in the form.
pub const CR_PROVINCES: [&str; 7] = [
    "San Jos\u{e9}",
    "Alajuela",
    "Cartago",
    "Heredia",
    "Guanacaste",
    "Puntarenas",
    "Lim\u{f3}n",
];

/// Cantons per province, first entry is the default selection.
pub fn cantons_for(province: &str) -> &'static [&'static str] {
    match province {
        "San Jos\u{e9}" => &["Central", "Escaz\u{fa}", "Desamparados", "Puriscal", "Tarraz\u{fa}"],
        "Alajuela" => &["Central", "San Ram\u{f3}n", "Grecia", "San Isidro", "Naranjo"],
        "Cartago" => &["Central", "La Uni\u{f3}n", "Jim\u{e9}nez", "Turrialba", "Oreamuno"],
        "Heredia" => &[
            "Central",
            "Santo Domingo",
            "Santa B\u{e1}rbara",
            "San Rafael",
            "Sarapiqu\u{ed}",
        ],
        "Guanacaste" => &["Liberia", "Nicoya", "Santa Cruz", "Bagaces", "Tilar\u{e1}n"],
        "Puntarenas" => &["Central", "Esparza", "Orotina", "San Mateo", "Parrita"],
        "Lim\u{f3}n" => &["Central", "Pococ\u{ed}", "Siquirres", "Talamanca", "Matina"],
        _ => &[],
    }
}

/// Raw shipping-lead form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingLeadFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub district: String,
    pub canton: String,
    pub province: String,
}

impl Default for ShippingLeadFields {
    fn default() -> Self {
        let province = CR_PROVINCES[0].to_string();
        let canton = cantons_for(&province)
            .first()
            .copied()
            .unwrap_or_default()
            .to_string();
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            district: String::new(),
            canton,
            province,
        }
    }
}

impl ShippingLeadFields {
    /// Switch province, resetting the canton to the province's first entry.
    pub fn select_province(&mut self, province: &str) {
        self.province = province.to_string();
        self.canton = cantons_for(province)
            .first()
            .copied()
            .unwrap_or_default()
            .to_string();
    }

    /// Validate every field, reporting all violations at once.
    pub fn validate(&self) -> Result<ShippingLeadInfo, FieldErrors> {
        let mut errors = FieldErrors::default();

        check_min(&mut errors, "first_name", &self.first_name, 2, "First name is required");
        check_min(&mut errors, "last_name", &self.last_name, 2, "Last name is required");
        if !looks_like_email(self.email.trim()) {
            errors.insert("email", "Enter a valid email");
        }
        check_min(&mut errors, "phone", &self.phone, 8, "Enter a valid phone number");
        check_min(&mut errors, "address", &self.address, 5, "Address is required");
        check_min(&mut errors, "district", &self.district, 2, "District is required");
        check_min(&mut errors, "canton", &self.canton, 2, "Canton is required");
        check_min(&mut errors, "province", &self.province, 2, "Province is required");

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ShippingLeadInfo {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            district: self.district.trim().to_string(),
            canton: self.canton.trim().to_string(),
            province: self.province.trim().to_string(),
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

/// Validated shipping-lead information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingLeadInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub district: String,
    pub canton: String,
    pub province: String,
}
