//! Product card with the size-consultation lead flow.
//!
//! Two paths out of a card: add the product to the cart, or consult sizes.
//! The consultation path walks size pick -> free-shipping offer ->
//! optional shipping form, records a lead locally either way, and hands
//! off to WhatsApp with the prefilled message.

use leptos::prelude::*;
use vitrina_commerce::catalog::Product;
use vitrina_leads::{
    cantons_for, size_chart, Lead, LeadId, LeadLog, ShippingLeadFields, ShoeSize, WhatsAppLink,
    CR_PROVINCES,
};

use crate::browser::{defer, open_in_new_tab, BrowserLeadStore};
use crate::config::use_config;
use crate::store::CartStore;

/// Steps of the consultation flow.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum ConsultStep {
    #[default]
    Closed,
    PickingSize,
    FreeShippingOffer,
    ShippingForm,
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let store = CartStore::use_store();
    let config = use_config();
    let whatsapp = WhatsAppLink::new(config.whatsapp_phone.clone())
        .with_store_name(config.store_name.clone());

    let step = RwSignal::new(ConsultStep::Closed);
    let selected_size = RwSignal::new(None::<ShoeSize>);
    let lead_id = RwSignal::new(None::<LeadId>);
    let form = RwSignal::new(ShippingLeadFields::default());
    let form_errors = RwSignal::new(vitrina_commerce::checkout::FieldErrors::default());

    let price = product.price.display();
    let bullets = product
        .bullets
        .iter()
        .map(|bullet| {
            view! {
                <div class="bullet">
                    <span class="bullet-check">"\u{2713}"</span>
                    <span>{bullet.clone()}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let finish = {
        let product = product.clone();
        let whatsapp = whatsapp.clone();
        move |lead: Lead| {
            let mut log = LeadLog::new(BrowserLeadStore);
            if let Err(err) = log.append(&lead) {
                tracing::warn!(error = %err, "failed to record lead");
            }
            if let Some(size) = selected_size.get_untracked() {
                let url =
                    whatsapp.consultation_url(&product, &size, &lead.lead_id, lead.status);
                open_in_new_tab(&url);
            }
            step.set(ConsultStep::Closed);
            selected_size.set(None);
            lead_id.set(None);
            form.set(ShippingLeadFields::default());
            form_errors.set(Default::default());
        }
    };

    let add_to_cart = {
        let product = product.clone();
        move |_| store.add(&product, 1)
    };

    let pick_size = move |size: ShoeSize| {
        selected_size.set(Some(size));
        // Brief pause before the offer, matching the modal choreography.
        defer(
            move || {
                if step.get_untracked() == ConsultStep::PickingSize {
                    step.set(ConsultStep::FreeShippingOffer);
                }
            },
            200,
        );
    };

    let offer_yes = move |_| {
        lead_id.set(Some(LeadId::generate()));
        step.set(ConsultStep::ShippingForm);
    };

    let offer_no = {
        let product = product.clone();
        let finish = finish.clone();
        move |_| {
            let id = LeadId::generate();
            if let Some(size) = selected_size.get_untracked() {
                finish(Lead::declined(id, &product, &size));
            } else {
                step.set(ConsultStep::Closed);
            }
        }
    };

    let submit_form = {
        let product = product.clone();
        let finish = finish.clone();
        move |_| {
            let fields = form.get_untracked();
            match fields.validate() {
                Ok(info) => {
                    form_errors.set(Default::default());
                    let id = lead_id.get_untracked().unwrap_or_else(LeadId::generate);
                    if let Some(size) = selected_size.get_untracked() {
                        finish(Lead::with_shipping(id, &product, &size, &info));
                    }
                }
                Err(errors) => form_errors.set(errors),
            }
        }
    };

    let size_picker = move || {
        (step.get() == ConsultStep::PickingSize).then(|| {
            let sizes = size_chart()
                .into_iter()
                .map(|size| {
                    let label = size.label();
                    view! {
                        <button class="size-option" on:click=move |_| pick_size(size.clone())>
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <div class="card-overlay">
                    <div class="overlay-header">
                        <h4>"Elige tu talla"</h4>
                        <button on:click=move |_| step.set(ConsultStep::Closed)>"\u{2715}"</button>
                    </div>
                    <div class="size-grid">{sizes}</div>
                </div>
            }
        })
    };

    let offer_popup = move || {
        (step.get() == ConsultStep::FreeShippingOffer).then(|| {
            view! {
                <div class="card-overlay">
                    <h4>"\u{1f381} \u{bf}Quieres env\u{ed}o gratis?"</h4>
                    <p>"Registra tu direcci\u{f3}n y te lo enviamos sin costo"</p>
                    <div class="offer-actions">
                        <button class="btn" on:click=offer_yes>"S\u{ed}, quiero"</button>
                        <button class="btn-secondary" on:click=offer_no.clone()>
                            "Continuar sin env\u{ed}o"
                        </button>
                    </div>
                </div>
            }
        })
    };

    let shipping_form = move || {
        (step.get() == ConsultStep::ShippingForm).then(|| {
            view! {
                <div class="card-overlay">
                    <div class="overlay-header">
                        <h4>"Direcci\u{f3}n de Env\u{ed}o"</h4>
                        <button on:click=move |_| step.set(ConsultStep::Closed)>"\u{2715}"</button>
                    </div>
                    <ShippingLeadForm form=form errors=form_errors/>
                    <button class="btn" on:click=submit_form.clone()>
                        "Obtener Env\u{ed}o Gratis"
                    </button>
                </div>
            }
        })
    };

    view! {
        <div class="product-card" data-product-id=product.id.as_str().to_string()>
            <div class="product-image">
                <img src=product.image.clone() alt=product.name.clone()/>
                {product
                    .featured
                    .then(|| view! { <span class="badge-hot">"Hot"</span> })}
            </div>
            <div class="product-info">
                <h3>{product.name.clone()}</h3>
                <p class="price">{price}</p>
                <div class="bullets">{bullets}</div>
                <button class="btn" on:click=add_to_cart>"Agregar al carrito"</button>
                <button
                    class="btn-secondary"
                    title="Consultar tallas disponibles"
                    on:click=move |_| step.set(ConsultStep::PickingSize)
                >
                    "Consultar talla"
                </button>
            </div>
            {size_picker}
            {offer_popup}
            {shipping_form}
        </div>
    }
}

/// The Costa Rica shipping-lead form fields.
#[component]
fn ShippingLeadForm(
    form: RwSignal<ShippingLeadFields>,
    errors: RwSignal<vitrina_commerce::checkout::FieldErrors>,
) -> impl IntoView {
    let text_field = move |label: &'static str,
                           name: &'static str,
                           placeholder: &'static str,
                           getter: fn(&ShippingLeadFields) -> String,
                           setter: fn(&mut ShippingLeadFields, String)| {
        view! {
            <label class="field">
                <span>{label}</span>
                <input
                    placeholder=placeholder
                    prop:value=move || form.with(|f| getter(f))
                    on:input=move |ev| {
                        form.update(|f| setter(f, event_target_value(&ev)))
                    }
                />
                {move || {
                    errors
                        .with(|e| e.get(name))
                        .map(|msg| view! { <p class="field-error">{msg}</p> })
                }}
            </label>
        }
    };

    let provinces = CR_PROVINCES
        .iter()
        .map(|province| {
            view! {
                <option
                    value=*province
                    prop:selected=move || form.with(|f| f.province == *province)
                >
                    {*province}
                </option>
            }
        })
        .collect::<Vec<_>>();

    let cantons = move || {
        let province = form.with(|f| f.province.clone());
        let selected = form.with(|f| f.canton.clone());
        cantons_for(&province)
            .iter()
            .map(|canton| {
                let is_selected = selected == *canton;
                view! {
                    <option value=*canton prop:selected=is_selected>
                        {*canton}
                    </option>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="lead-form">
            {text_field("Nombre", "first_name", "Juan", |f| f.first_name.clone(), |f, v| {
                f.first_name = v
            })}
            {text_field("Apellido", "last_name", "Garc\u{ed}a", |f| f.last_name.clone(), |f, v| {
                f.last_name = v
            })}
            {text_field("Email", "email", "juan@mail.com", |f| f.email.clone(), |f, v| {
                f.email = v
            })}
            {text_field("Celular", "phone", "+506 8765 4321", |f| f.phone.clone(), |f, v| {
                f.phone = v
            })}
            {text_field(
                "Direcci\u{f3}n Exacta",
                "address",
                "Calle Principal 123, Casa 45",
                |f| f.address.clone(),
                |f, v| f.address = v,
            )}
            {text_field("Distrito", "district", "San Jos\u{e9}", |f| f.district.clone(), |f, v| {
                f.district = v
            })}
            <label class="field">
                <span>"Provincia"</span>
                <select on:change=move |ev| {
                    form.update(|f| f.select_province(&event_target_value(&ev)))
                }>{provinces}</select>
            </label>
            <label class="field">
                <span>"Cant\u{f3}n"</span>
                <select on:change=move |ev| {
                    form.update(|f| f.canton = event_target_value(&ev))
                }>{cantons}</select>
                {move || {
                    errors
                        .with(|e| e.get("canton"))
                        .map(|msg| view! { <p class="field-error">{msg}</p> })
                }}
            </label>
        </div>
    }
}
