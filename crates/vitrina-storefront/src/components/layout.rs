//! Header, hero, footer, and the floating WhatsApp button.

use leptos::prelude::*;
use vitrina_leads::WhatsAppLink;

use crate::browser::open_in_new_tab;
use crate::config::use_config;
use crate::store::CartStore;

#[component]
pub fn Header(cart_open: RwSignal<bool>, contact_open: RwSignal<bool>) -> impl IntoView {
    let store = CartStore::use_store();
    let count = move || store.item_count();

    view! {
        <header class="site-header">
            <h1><a href="/">"SneakersCR"</a></h1>
            <nav>
                <a href="/#catalogo">"Cat\u{e1}logo"</a>
                <button on:click=move |_| contact_open.set(true)>"Contacto"</button>
                <button class="cart-button" on:click=move |_| cart_open.set(true)>
                    "Carrito"
                    {move || {
                        let n = count();
                        (n > 0).then(|| view! { <span class="cart-badge">{n.to_string()}</span> })
                    }}
                </button>
            </nav>
        </header>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h2>"Los mejores tenis, al mejor precio"</h2>
            <p>"Originales, con env\u{ed}o a todo el pa\u{ed}s"</p>
            <a href="/#catalogo" class="btn">"Ver cat\u{e1}logo"</a>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"SneakersCR - tenis originales"</p>
        </footer>
    }
}

/// Fixed contact button opening a prefilled WhatsApp conversation.
#[component]
pub fn WhatsAppFloat() -> impl IntoView {
    let config = use_config();
    let link = WhatsAppLink::new(config.whatsapp_phone.clone())
        .with_store_name(config.store_name.clone());

    view! {
        <button
            class="whatsapp-float"
            title="Contactar por WhatsApp"
            on:click=move |_| open_in_new_tab(&link.general_inquiry_url())
        >
            "\u{1f4ac}"
        </button>
    }
}
