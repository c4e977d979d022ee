//! Storefront components.

mod cart_panel;
mod catalog;
mod checkout;
mod contact;
mod layout;
mod payment;
mod product_card;

pub use cart_panel::CartPanel;
pub use catalog::CatalogSection;
pub use checkout::CheckoutModal;
pub use contact::ContactModal;
pub use layout::{Footer, Header, Hero, WhatsAppFloat};
pub use payment::PaymentModal;
pub use product_card::ProductCard;
