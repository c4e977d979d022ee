//! The slide-over cart panel.

use leptos::prelude::*;
use vitrina_commerce::cart::LineItem;

use crate::store::CartStore;

#[component]
pub fn CartPanel(open: RwSignal<bool>, checkout_open: RwSignal<bool>) -> impl IntoView {
    let store = CartStore::use_store();

    let go_checkout = move |_| {
        if !store.is_empty() {
            open.set(false);
            checkout_open.set(true);
        }
    };

    // Reactive body: tracks the cart so clearing it while the panel is
    // open swaps straight to the empty state.
    let body = move || {
        if store.is_empty() {
            view! {
                <div class="cart-empty">
                    <p>"Tu carrito est\u{e1} vac\u{ed}o."</p>
                    <a href="/#catalogo" on:click=move |_| open.set(false)>
                        "Seguir comprando"
                    </a>
                </div>
            }
            .into_any()
        } else {
            let lines = store
                .with(|c| c.items.clone())
                .into_iter()
                .map(|line| view! { <CartLine line=line/> })
                .collect::<Vec<_>>();
            view! {
                <div class="cart-lines">{lines}</div>
                <div class="cart-summary">
                    <span>{format!("{} art\u{ed}culo(s)", store.item_count())}</span>
                    <strong>{store.total().display()}</strong>
                </div>
                <div class="cart-actions">
                    <button class="btn-secondary" on:click=move |_| store.clear()>
                        "Vaciar carrito"
                    </button>
                    <button class="btn" on:click=go_checkout>"Proceder al Pago"</button>
                </div>
            }
            .into_any()
        }
    };

    let panel = move || {
        open.get().then(|| {
            view! {
                <div class="backdrop" on:click=move |_| open.set(false)></div>
                <aside class="cart-panel">
                    <div class="panel-header">
                        <h3>"Carrito"</h3>
                        <button on:click=move |_| open.set(false)>"\u{2715}"</button>
                    </div>
                    {body}
                </aside>
            }
        })
    };

    view! { {panel} }
}

#[component]
fn CartLine(line: LineItem) -> impl IntoView {
    let store = CartStore::use_store();
    let id = line.product_id.clone();
    let quantity = line.quantity;

    let dec = {
        let id = id.clone();
        move |_| store.update_quantity(&id, quantity - 1)
    };
    let inc = {
        let id = id.clone();
        move |_| store.update_quantity(&id, quantity + 1)
    };
    let remove = {
        let id = id.clone();
        move |_| store.remove(&id)
    };

    view! {
        <div class="cart-line">
            <img src=line.image.clone() alt=line.name.clone()/>
            <div class="line-info">
                <strong>{line.name.clone()}</strong>
                <p>{format!("{} x {}", line.price.display(), line.quantity)}</p>
            </div>
            <div class="line-controls">
                <button on:click=dec>"-"</button>
                <span>{line.quantity.to_string()}</span>
                <button on:click=inc>"+"</button>
                <button class="line-remove" on:click=remove>"\u{2715}"</button>
            </div>
            <strong class="line-total">{line.line_total().display()}</strong>
        </div>
    }
}
