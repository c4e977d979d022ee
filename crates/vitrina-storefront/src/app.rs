//! Application shell and pages.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use vitrina_commerce::catalog::Catalog;
use vitrina_commerce::payment::PaymentSession;

use crate::components::{
    CartPanel, CatalogSection, CheckoutModal, ContactModal, Footer, Header, Hero, PaymentModal,
    WhatsAppFloat,
};
use crate::config::{provide_storefront_services, StorefrontConfig};
use crate::store::CartStore;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(Catalog::demo());
    provide_storefront_services(StorefrontConfig::default());
    CartStore::provide();

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta name="description" content="SneakersCR - tenis originales con envio a todo el pais"/>
        <Title text="SneakersCR"/>

        <Router>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

/// Single-page storefront: hero, catalog, and the modal flows.
#[component]
fn HomePage() -> impl IntoView {
    let cart_open = RwSignal::new(false);
    let checkout_open = RwSignal::new(false);
    let contact_open = RwSignal::new(false);
    let payment = RwSignal::new(None::<PaymentSession>);

    view! {
        <Header cart_open=cart_open contact_open=contact_open/>
        <Hero/>
        <CatalogSection/>
        <Footer/>
        <WhatsAppFloat/>
        <CartPanel open=cart_open checkout_open=checkout_open/>
        <CheckoutModal open=checkout_open payment=payment/>
        <PaymentModal payment=payment/>
        <ContactModal open=contact_open/>
    }
}

/// 404 page.
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div style="text-align: center; padding: 4rem;">
            <h1>"404"</h1>
            <p>"P\u{e1}gina no encontrada"</p>
            <a href="/">"Volver al inicio"</a>
        </div>
    }
}
