//! Product records.

use crate::catalog::Brand;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Whether a product needs physical fulfillment.
///
/// Digital products suppress the shipping section and shipping cost at
/// checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductKind {
    #[default]
    Physical,
    Digital,
}

impl ProductKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Physical => "physical",
            ProductKind::Digital => "digital",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "physical" => Some(ProductKind::Physical),
            "digital" => Some(ProductKind::Digital),
            _ => None,
        }
    }
}

/// A product in the catalog.
///
/// Records are loaded from a static source and never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Image reference.
    pub image: String,
    /// Brand, one of the fixed set.
    pub brand: Brand,
    /// Shown in the featured section.
    pub featured: bool,
    /// Short selling points, in display order.
    pub bullets: Vec<String>,
    /// Stock keeping unit.
    pub sku: Option<String>,
    /// Fulfillment kind.
    pub kind: ProductKind,
}

impl Product {
    /// Create a product record.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
        brand: Brand,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            brand,
            featured: false,
            bullets: Vec::new(),
            sku: None,
            kind: ProductKind::Physical,
        }
    }

    /// Mark the product as featured.
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Set the selling points.
    pub fn with_bullets<S: Into<String>>(mut self, bullets: impl IntoIterator<Item = S>) -> Self {
        self.bullets = bullets.into_iter().map(Into::into).collect();
        self
    }

    /// Set the SKU.
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    /// Set the fulfillment kind.
    pub fn with_kind(mut self, kind: ProductKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if this is a digital product.
    pub fn is_digital(&self) -> bool {
        self.kind == ProductKind::Digital
    }

    /// SKU for display, with a placeholder when absent.
    pub fn sku_display(&self) -> &str {
        self.sku.as_deref().unwrap_or("N/A")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_product_builder() {
        let product = Product::new(
            "sneaker-001",
            "Nike Air Max Pro",
            Money::from_major(89.99, Currency::USD),
            "/images/placeholder-1.jpg",
            Brand::Nike,
        )
        .featured()
        .with_sku("NIKE-AIR-001")
        .with_bullets(["Comodidad extrema"]);

        assert!(product.featured);
        assert_eq!(product.sku_display(), "NIKE-AIR-001");
        assert!(!product.is_digital());
    }

    #[test]
    fn test_sku_placeholder() {
        let product = Product::new(
            "sneaker-x",
            "No Sku",
            Money::zero(Currency::USD),
            "/images/x.jpg",
            Brand::Vans,
        );
        assert_eq!(product.sku_display(), "N/A");
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(ProductKind::from_str("Digital"), Some(ProductKind::Digital));
        assert_eq!(ProductKind::from_str("bundle"), None);
    }
}
