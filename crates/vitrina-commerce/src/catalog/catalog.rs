//! The in-memory product catalog.

use crate::catalog::{Brand, Product};
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// A read-only collection of products, loaded eagerly at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a list of products.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The demo sneaker catalog.
    pub fn demo() -> Self {
        let usd = |amount| Money::from_major(amount, Currency::USD);
        Self::new(vec![
            Product::new(
                "sneaker-001",
                "Nike Air Max Pro",
                usd(89.99),
                "/images/placeholder-1.jpg",
                Brand::Nike,
            )
            .featured()
            .with_sku("NIKE-AIR-001")
            .with_bullets(["Comodidad extrema", "Tecnolog\u{ed}a Air Max"]),
            Product::new(
                "sneaker-002",
                "Adidas Ultra Boost",
                usd(79.99),
                "/images/placeholder-2.jpg",
                Brand::Adidas,
            )
            .featured()
            .with_sku("ADIDAS-ULTRA-002")
            .with_bullets(["Soporte premium", "Dise\u{f1}o moderno"]),
            Product::new(
                "sneaker-003",
                "Puma RS-X",
                usd(69.99),
                "/images/placeholder-3.jpg",
                Brand::Puma,
            )
            .featured()
            .with_sku("PUMA-RSX-003")
            .with_bullets(["Estilo retro", "Excelente agarre"]),
            Product::new(
                "sneaker-004",
                "New Balance 990v6",
                usd(99.99),
                "/images/placeholder-4.jpg",
                Brand::NewBalance,
            )
            .featured()
            .with_sku("NB-990-004")
            .with_bullets(["Calidad garantizada", "Comodidad todo d\u{ed}a"]),
            Product::new(
                "sneaker-005",
                "Reebok Classic Leather",
                usd(59.99),
                "/images/placeholder-5.jpg",
                Brand::Reebok,
            )
            .featured()
            .with_sku("REEBOK-CLASS-005")
            .with_bullets(["Estilo cl\u{e1}sico", "Precio accesible"]),
            Product::new(
                "sneaker-006",
                "Vans Old Skool",
                usd(64.99),
                "/images/placeholder-6.jpg",
                Brand::Vans,
            )
            .featured()
            .with_sku("VANS-OLDSK-006")
            .with_bullets(["Ic\u{f3}nico y vers\u{e1}til", "Perfecto para cualquier outfit"]),
            Product::new(
                "sneaker-007",
                "Converse Chuck Taylor",
                usd(54.99),
                "/images/placeholder-7.jpg",
                Brand::Converse,
            )
            .featured()
            .with_sku("CONVERSE-CT-007")
            .with_bullets(["Cl\u{e1}sico atemporal", "Vers\u{e1}til"]),
            Product::new(
                "sneaker-008",
                "Saucony Jazz Original",
                usd(65.99),
                "/images/placeholder-8.jpg",
                Brand::Saucony,
            )
            .featured()
            .with_sku("SAUCONY-JAZZ-008")
            .with_bullets(["Ligero y flexible", "Excelente precio"]),
            Product::new(
                "sneaker-009",
                "ASICS Gel-Lyte III",
                usd(84.99),
                "/images/placeholder-9.jpg",
                Brand::Asics,
            )
            .with_sku("ASICS-GELLYTE-009")
            .with_bullets(["Amortiguaci\u{f3}n superior", "Dise\u{f1}o innovador"]),
            Product::new(
                "sneaker-010",
                "Mizuno Wave Rider",
                usd(74.99),
                "/images/placeholder-10.jpg",
                Brand::Mizuno,
            )
            .with_sku("MIZUNO-RIDER-010")
            .with_bullets(["Para correr", "Tecnolog\u{ed}a Wave"]),
        ])
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products flagged as featured.
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Look up a product by ID.
    pub fn by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products of a single brand.
    pub fn by_brand(&self, brand: Brand) -> Vec<&Product> {
        self.products.iter().filter(|p| p.brand == brand).collect()
    }

    /// Brands present in the catalog, sorted and deduplicated.
    pub fn brands(&self) -> Vec<Brand> {
        let mut brands: Vec<Brand> = self.products.iter().map(|p| p.brand).collect();
        brands.sort();
        brands.dedup();
        brands
    }

    /// Number of products carrying the given brand.
    pub fn brand_count(&self, brand: Brand) -> usize {
        self.products.iter().filter(|p| p.brand == brand).count()
    }

    /// Total number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_size() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.featured().len(), 8);
    }

    #[test]
    fn test_by_id() {
        let catalog = Catalog::demo();
        let product = catalog.by_id(&ProductId::new("sneaker-002")).unwrap();
        assert_eq!(product.name, "Adidas Ultra Boost");
        assert_eq!(product.price.amount_cents, 7999);
    }

    #[test]
    fn test_by_brand() {
        let catalog = Catalog::demo();
        let nikes = catalog.by_brand(Brand::Nike);
        assert_eq!(nikes.len(), 1);
        assert!(nikes.iter().all(|p| p.brand == Brand::Nike));
    }

    #[test]
    fn test_brands_are_sorted_and_unique() {
        let catalog = Catalog::demo();
        let brands = catalog.brands();
        assert_eq!(brands.len(), 10);
        let mut sorted = brands.clone();
        sorted.sort();
        assert_eq!(brands, sorted);
    }
}
