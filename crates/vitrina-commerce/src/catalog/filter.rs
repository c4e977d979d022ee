//! Brand-scoped catalog filtering.
//!
//! The active filter is mirrored into the `brand` URL query parameter so a
//! filtered view survives reload and can be shared as a link.

use crate::catalog::{Brand, Product};
use serde::{Deserialize, Serialize};

/// Query parameter carrying the active brand.
pub const BRAND_PARAM: &str = "brand";

/// A brand filter over the catalog.
///
/// `None` selects the full catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BrandFilter {
    pub brand: Option<Brand>,
}

impl BrandFilter {
    /// Filter showing every product.
    pub fn all() -> Self {
        Self { brand: None }
    }

    /// Filter scoped to one brand.
    pub fn only(brand: Brand) -> Self {
        Self { brand: Some(brand) }
    }

    /// Narrow a product list to the filtered view.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        match self.brand {
            Some(brand) => products.iter().filter(|p| p.brand == brand).collect(),
            None => products.iter().collect(),
        }
    }

    /// Check whether a product is visible under this filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.brand.map(|b| product.brand == b).unwrap_or(true)
    }

    /// The query parameter value for this filter, if any.
    pub fn to_query_value(&self) -> Option<&'static str> {
        self.brand.map(|b| b.as_str())
    }

    /// Rebuild a filter from a query parameter value.
    ///
    /// Absent or unrecognized values fall back to the unfiltered view.
    pub fn from_query_value(value: Option<&str>) -> Self {
        Self {
            brand: value.and_then(Brand::from_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_unfiltered_shows_all() {
        let catalog = Catalog::demo();
        let filter = BrandFilter::all();
        assert_eq!(filter.apply(catalog.products()).len(), catalog.len());
    }

    #[test]
    fn test_filter_by_brand() {
        let catalog = Catalog::demo();
        let filter = BrandFilter::only(Brand::Puma);
        let visible = filter.apply(catalog.products());
        assert_eq!(visible.len(), 1);
        assert!(visible.iter().all(|p| p.brand == Brand::Puma));
    }

    #[test]
    fn test_query_round_trip() {
        for brand in Brand::ALL {
            let filter = BrandFilter::only(brand);
            let restored = BrandFilter::from_query_value(filter.to_query_value());
            assert_eq!(filter, restored);
        }
        let all = BrandFilter::all();
        assert_eq!(BrandFilter::from_query_value(all.to_query_value()), all);
    }

    #[test]
    fn test_unknown_query_value_falls_back_to_all() {
        let filter = BrandFilter::from_query_value(Some("Jordan"));
        assert_eq!(filter, BrandFilter::all());
    }
}
