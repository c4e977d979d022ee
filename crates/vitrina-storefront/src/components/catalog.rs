//! The brand-filterable catalog section.
//!
//! The active brand filter is mirrored into the `brand` query parameter
//! both ways: chips navigate, and the rendered view derives from the URL,
//! so a filtered catalog survives reload and can be shared as a link.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use vitrina_commerce::catalog::{BrandFilter, Catalog, BRAND_PARAM};

use crate::components::ProductCard;

#[component]
pub fn CatalogSection() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let query = use_query_map();

    let filter = Memo::new(move |_| {
        BrandFilter::from_query_value(query.with(|q| q.get(BRAND_PARAM)).as_deref())
    });

    let total = catalog.len();
    let chips = {
        let catalog = catalog.clone();
        let navigate = use_navigate();
        let all_target = "/#catalogo".to_string();
        let nav_all = navigate.clone();
        let all_chip = view! {
            <button
                class=move || chip_class(filter.get() == BrandFilter::all())
                on:click=move |_| nav_all(&all_target, NavigateOptions::default())
            >
                {format!("Todos ({})", total)}
            </button>
        };

        let brand_chips = catalog
            .brands()
            .into_iter()
            .map(|brand| {
                let count = catalog.brand_count(brand);
                let target = format!(
                    "/?{}={}#catalogo",
                    BRAND_PARAM,
                    utf8_percent_encode(brand.as_str(), NON_ALPHANUMERIC)
                );
                let nav = navigate.clone();
                view! {
                    <button
                        class=move || chip_class(filter.get() == BrandFilter::only(brand))
                        on:click=move |_| nav(&target, NavigateOptions::default())
                    >
                        {format!("{} ({})", brand, count)}
                    </button>
                }
            })
            .collect::<Vec<_>>();

        view! {
            <div class="brand-chips">
                {all_chip}
                {brand_chips}
            </div>
        }
    };

    let grid = {
        let catalog = catalog.clone();
        move || {
            let visible: Vec<_> = filter
                .get()
                .apply(catalog.products())
                .into_iter()
                .cloned()
                .collect();
            if visible.is_empty() {
                let brand = filter
                    .get()
                    .brand
                    .map(|b| b.to_string())
                    .unwrap_or_default();
                view! {
                    <p class="catalog-empty">
                        {format!("No hay productos disponibles para {}", brand)}
                    </p>
                }
                .into_any()
            } else {
                view! {
                    <div class="product-grid">
                        {visible
                            .into_iter()
                            .map(|product| view! { <ProductCard product=product/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any()
            }
        }
    };

    let shown = {
        let catalog = catalog.clone();
        move || filter.get().apply(catalog.products()).len()
    };

    view! {
        <section id="catalogo" class="catalog-section">
            <h2>"Cat\u{e1}logo Completo"</h2>
            <p>"Explora todos nuestros tenis con los mejores precios"</p>
            {chips}
            {grid}
            <p class="catalog-count">
                {move || format!("Mostrando {} de {} productos", shown(), total)}
            </p>
        </section>
    }
}

fn chip_class(active: bool) -> &'static str {
    if active {
        "chip chip-active"
    } else {
        "chip"
    }
}
