//! The reactive cart store.
//!
//! One [`Cart`] lives in a signal behind this `Copy` handle, provided via
//! context at the app root. Components mutate it only through the store's
//! operations and read the derived figures reactively, so there is no
//! ambient global state and no second source of truth. The cart lives for
//! the browsing session only: a reload starts empty.

use leptos::prelude::*;
use vitrina_commerce::cart::Cart;
use vitrina_commerce::catalog::Product;
use vitrina_commerce::ids::ProductId;
use vitrina_commerce::money::Money;

/// Context handle to the session cart.
#[derive(Clone, Copy)]
pub struct CartStore {
    cart: RwSignal<Cart>,
}

impl CartStore {
    /// Create a store over an empty cart.
    pub fn new() -> Self {
        Self {
            cart: RwSignal::new(Cart::new()),
        }
    }

    /// Provide the store to the component tree.
    pub fn provide() -> Self {
        let store = Self::new();
        provide_context(store);
        store
    }

    /// Fetch the store from context.
    pub fn use_store() -> Self {
        expect_context::<Self>()
    }

    /// Add a product to the cart, merging by product ID.
    pub fn add(&self, product: &Product, quantity: i64) {
        let product = product.clone();
        self.cart.update(|c| c.add_item(&product, quantity));
    }

    /// Remove every line for a product.
    pub fn remove(&self, product_id: &ProductId) {
        let product_id = product_id.clone();
        self.cart.update(|c| c.remove_item(&product_id));
    }

    /// Overwrite a line's quantity; zero or less removes the line.
    pub fn update_quantity(&self, product_id: &ProductId, quantity: i64) {
        let product_id = product_id.clone();
        self.cart.update(|c| c.update_quantity(&product_id, quantity));
    }

    /// Empty the cart.
    pub fn clear(&self) {
        self.cart.update(|c| c.clear());
    }

    /// Reactive read of the cart total.
    pub fn total(&self) -> Money {
        self.cart.with(|c| c.total())
    }

    /// Reactive read of the summed quantity.
    pub fn item_count(&self) -> i64 {
        self.cart.with(|c| c.item_count())
    }

    /// Reactive read of emptiness.
    pub fn is_empty(&self) -> bool {
        self.cart.with(|c| c.is_empty())
    }

    /// Clone of the current cart state.
    pub fn snapshot(&self) -> Cart {
        self.cart.get()
    }

    /// Run a closure over the current cart without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&Cart) -> R) -> R {
        self.cart.with(f)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
