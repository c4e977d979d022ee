//! The fixed set of storefront brands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A sneaker brand carried by the storefront.
///
/// The set is closed: products reference one of these values and the
/// catalog filter only accepts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Brand {
    Nike,
    Adidas,
    Puma,
    NewBalance,
    Reebok,
    Vans,
    Converse,
    Saucony,
    Asics,
    Mizuno,
}

impl Brand {
    /// All brands, in catalog order.
    pub const ALL: [Brand; 10] = [
        Brand::Nike,
        Brand::Adidas,
        Brand::Puma,
        Brand::NewBalance,
        Brand::Reebok,
        Brand::Vans,
        Brand::Converse,
        Brand::Saucony,
        Brand::Asics,
        Brand::Mizuno,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Nike => "Nike",
            Brand::Adidas => "Adidas",
            Brand::Puma => "Puma",
            Brand::NewBalance => "New Balance",
            Brand::Reebok => "Reebok",
            Brand::Vans => "Vans",
            Brand::Converse => "Converse",
            Brand::Saucony => "Saucony",
            Brand::Asics => "ASICS",
            Brand::Mizuno => "Mizuno",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "nike" => Some(Brand::Nike),
            "adidas" => Some(Brand::Adidas),
            "puma" => Some(Brand::Puma),
            "new balance" => Some(Brand::NewBalance),
            "reebok" => Some(Brand::Reebok),
            "vans" => Some(Brand::Vans),
            "converse" => Some(Brand::Converse),
            "saucony" => Some(Brand::Saucony),
            "asics" => Some(Brand::Asics),
            "mizuno" => Some(Brand::Mizuno),
            _ => None,
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_round_trip() {
        for brand in Brand::ALL {
            assert_eq!(Brand::from_str(brand.as_str()), Some(brand));
        }
    }

    #[test]
    fn test_brand_parse_is_case_insensitive() {
        assert_eq!(Brand::from_str("NIKE"), Some(Brand::Nike));
        assert_eq!(Brand::from_str("new balance"), Some(Brand::NewBalance));
    }

    #[test]
    fn test_unknown_brand() {
        assert_eq!(Brand::from_str("Jordan"), None);
    }
}
