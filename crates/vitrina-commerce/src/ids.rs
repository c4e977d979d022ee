//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents mixing up identifier kinds, e.g. passing a
//! ProductId where a LineItemId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(LineItemId);
define_id!(ShippingOptionId);

impl LineItemId {
    /// Derive a fresh line item ID from the product being added.
    ///
    /// The ID carries the product ID plus a creation timestamp so separate
    /// add operations for the same product stay distinguishable. A
    /// process-local counter keeps IDs unique even within one timestamp
    /// tick.
    pub fn for_product(product_id: &ProductId) -> Self {
        Self(format!("{}-{}", product_id.as_str(), unique_suffix()))
    }
}

/// Generate a unique suffix from the current time and an atomic counter.
fn unique_suffix() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    timestamp.wrapping_mul(1000).wrapping_add(counter % 1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("sneaker-001");
        assert_eq!(id.as_str(), "sneaker-001");
    }

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "sneaker-002".into();
        assert_eq!(id.as_str(), "sneaker-002");
    }

    #[test]
    fn test_id_display() {
        let id = ShippingOptionId::new("express");
        assert_eq!(format!("{}", id), "express");
    }

    #[test]
    fn test_line_item_id_embeds_product() {
        let product = ProductId::new("sneaker-003");
        let line = LineItemId::for_product(&product);
        assert!(line.as_str().starts_with("sneaker-003-"));
    }

    #[test]
    fn test_line_item_ids_are_unique() {
        let product = ProductId::new("sneaker-004");
        let a = LineItemId::for_product(&product);
        let b = LineItemId::for_product(&product);
        assert_ne!(a, b);
    }
}
