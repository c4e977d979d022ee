//! Cart and line item types.
//!
//! The cart is the single source of truth for the current selection of
//! products, scoped to one browsing session. Every operation is a total
//! function: removing an absent item, updating an unknown product, or
//! clearing an already empty cart are silent no-ops. Derived figures are
//! folded from the line items on every read and never stored, so they
//! cannot drift.

use crate::catalog::{Product, ProductKind};
use crate::ids::{LineItemId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line item in the cart.
///
/// Name, price, image, and kind are a snapshot taken when the product was
/// added; later catalog changes do not affect lines already in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Unique line identifier, derived from the product ID at add time.
    pub id: LineItemId,
    /// The product this line refers to (not owning).
    pub product_id: ProductId,
    /// Product name snapshot.
    pub name: String,
    /// Unit price snapshot.
    pub price: Money,
    /// Image reference snapshot.
    pub image: String,
    /// Fulfillment kind snapshot.
    pub kind: ProductKind,
    /// Quantity, always >= 1.
    pub quantity: i64,
}

impl LineItem {
    fn from_product(product: &Product, quantity: i64) -> Self {
        Self {
            id: LineItemId::for_product(&product.id),
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            kind: product.kind,
            quantity,
        }
    }

    /// Extended price for this line (unit price times quantity).
    pub fn line_total(&self) -> Money {
        Money::new(
            self.price.amount_cents.saturating_mul(self.quantity),
            self.price.currency,
        )
    }

    /// Check if this line is for a digital product.
    pub fn is_digital(&self) -> bool {
        self.kind == ProductKind::Digital
    }
}

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Line items in insertion order (= display order).
    pub items: Vec<LineItem>,
    /// Cart currency.
    pub currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            currency: Currency::default(),
        }
    }

    /// Add a product to the cart.
    ///
    /// If a line for the same product already exists its quantity
    /// accumulates; otherwise a fresh snapshot line is appended. The
    /// lookup and the append happen in one call, so rapid repeated adds
    /// can never produce duplicate lines for one product. Non-positive
    /// quantities are ignored.
    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        if quantity <= 0 {
            return;
        }
        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            self.items.push(LineItem::from_product(product, quantity));
        }
    }

    /// Remove every line for the given product. Absent IDs are a no-op.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        self.items.retain(|i| &i.product_id != product_id);
    }

    /// Overwrite the quantity of the line for the given product.
    ///
    /// A quantity of zero or less removes the line instead. Unknown
    /// product IDs are a no-op.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| &i.product_id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of line totals. Computed on read, never cached.
    pub fn total(&self) -> Money {
        let cents = self
            .items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.line_total().amount_cents));
        Money::new(cents, self.currency)
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check whether every line is a digital product.
    ///
    /// Vacuously true for an empty cart, matching the shipping-section
    /// suppression rule it feeds.
    pub fn all_digital(&self) -> bool {
        self.items.iter().all(|i| i.is_digital())
    }

    /// Look up the line for a product, if present.
    pub fn line_for(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Brand;

    fn product(id: &str, price_cents: i64) -> Product {
        Product::new(
            id,
            format!("Product {}", id),
            Money::new(price_cents, Currency::USD),
            format!("/images/{}.jpg", id),
            Brand::Nike,
        )
    }

    fn digital(id: &str, price_cents: i64) -> Product {
        product(id, price_cents).with_kind(ProductKind::Digital)
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        cart.add_item(&product("a", 1000), 2);

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total().amount_cents, 2000);
    }

    #[test]
    fn test_re_adding_accumulates_into_one_line() {
        let mut cart = Cart::new();
        let p = product("a", 1000);
        cart.add_item(&p, 1);
        cart.add_item(&p, 2);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_non_positive_add_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add_item(&product("a", 1000), 0);
        cart.add_item(&product("a", 1000), -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_item_is_idempotent() {
        let mut cart = Cart::new();
        let p = product("a", 1000);
        cart.add_item(&p, 1);

        cart.remove_item(&p.id);
        assert!(cart.is_empty());

        // Double removal and removal of an unknown id do nothing.
        cart.remove_item(&p.id);
        cart.remove_item(&ProductId::new("missing"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        let p = product("a", 1000);
        cart.add_item(&p, 1);

        cart.update_quantity(&p.id, 5);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total().amount_cents, 5000);
    }

    #[test]
    fn test_update_to_zero_equals_remove() {
        let mut cart = Cart::new();
        let p = product("a", 1000);

        cart.add_item(&p, 3);
        cart.update_quantity(&p.id, 0);
        assert!(cart.is_empty());

        cart.add_item(&p, 3);
        cart.update_quantity(&p.id, -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_unknown_product_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add_item(&product("a", 1000), 1);
        cart.update_quantity(&ProductId::new("missing"), 4);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_clear_resets_derived_reads() {
        let mut cart = Cart::new();
        cart.add_item(&product("a", 1000), 2);
        cart.add_item(&product("b", 2500), 1);

        cart.clear();
        assert_eq!(cart.total().amount_cents, 0);
        assert_eq!(cart.item_count(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_tracks_every_mutation() {
        let mut cart = Cart::new();
        let a = product("a", 1234);
        let b = product("b", 500);

        cart.add_item(&a, 2);
        cart.add_item(&b, 3);
        cart.update_quantity(&a.id, 1);
        cart.remove_item(&b.id);
        cart.add_item(&b, 1);

        let expected: i64 = cart
            .items
            .iter()
            .map(|i| i.price.amount_cents * i.quantity)
            .sum();
        assert_eq!(cart.total().amount_cents, expected);
        assert_eq!(expected, 1234 + 500);
    }

    #[test]
    fn test_removing_only_item_empties_cart() {
        let mut cart = Cart::new();
        let p = product("a", 7999);
        cart.add_item(&p, 1);

        cart.remove_item(&p.id);
        assert_eq!(cart.item_count(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_all_digital() {
        let mut cart = Cart::new();
        assert!(cart.all_digital());

        cart.add_item(&digital("d1", 2000), 1);
        assert!(cart.all_digital());

        cart.add_item(&product("p1", 1000), 1);
        assert!(!cart.all_digital());
    }

    #[test]
    fn test_snapshot_survives_later_changes() {
        let mut cart = Cart::new();
        let mut p = product("a", 1000);
        cart.add_item(&p, 1);

        // Catalog-side mutation after the add does not touch the line.
        p.name = "Renamed".to_string();
        assert_eq!(cart.items[0].name, "Product a");
    }
}
