//! The checkout modal.
//!
//! Captures the shipping address, the shipping method, and an optional
//! coupon; computes the totals live; and on a successful submission hands
//! the computed totals to the payment modal. A failed submission shows a
//! banner and leaves the form resubmittable with every field intact.

use leptos::prelude::*;
use leptos::task::spawn_local;
use vitrina_api::SubmitClient;
use vitrina_commerce::checkout::{AddressFields, CheckoutForm};
use vitrina_commerce::payment::PaymentSession;

use crate::browser::defer;
use crate::config::use_config;
use crate::store::CartStore;

#[component]
pub fn CheckoutModal(
    open: RwSignal<bool>,
    payment: RwSignal<Option<PaymentSession>>,
) -> impl IntoView {
    let store = CartStore::use_store();
    let config = use_config();
    let api_base = config.api_base.clone();
    let wallet_balance = config.wallet_balance;

    let form = RwSignal::new(CheckoutForm::default());
    let coupon_input = RwSignal::new(String::new());

    let totals = Memo::new(move |_| store.with(|cart| form.with(|f| f.totals(cart).ok())));

    let apply_coupon = move |_| {
        let code = coupon_input.get_untracked();
        let mut current = form.get_untracked();
        if current.apply_coupon(&code).is_ok() {
            coupon_input.set(String::new());
        }
        form.set(current);
    };

    let on_submit = {
        let api_base = api_base.clone();
        move |_| {
            let mut current = form.get_untracked();
            let address = match current.begin_submit() {
                Ok(address) => address,
                Err(_) => {
                    form.set(current);
                    return;
                }
            };
            let Some(session_totals) = totals.get_untracked() else {
                current.submit_failed("Something went wrong. Please try again.");
                form.set(current);
                return;
            };
            form.set(current);

            let api_base = api_base.clone();
            spawn_local(async move {
                let client = SubmitClient::new(api_base);
                match client.submit_checkout(&address).await {
                    Ok(()) => {
                        form.update(|f| f.submit_succeeded());
                        // The request is not aborted when the modal closes;
                        // a late success is simply dropped here.
                        if !open.get_untracked() {
                            return;
                        }
                        open.set(false);
                        defer(
                            move || {
                                payment.set(Some(PaymentSession::new(
                                    session_totals,
                                    wallet_balance,
                                )));
                            },
                            500,
                        );
                    }
                    Err(err) => form.update(|f| f.submit_failed(err.user_message())),
                }
            });
        }
    };

    let shipping_section = move || {
        let visible = store.with(|cart| form.with(|f| f.shipping_section_visible(cart)));
        if visible {
            let options = form.with(|f| f.shipping_options().to_vec());
            let radios = options
                .into_iter()
                .map(|option| {
                    let check_id = option.id.clone();
                    let change_id = option.id.clone();
                    view! {
                        <label class="shipping-option">
                            <input
                                type="radio"
                                name="shipping"
                                prop:checked=move || {
                                    form.with(|f| f.selected_option().id == check_id)
                                }
                                on:change=move |_| {
                                    form.update(|f| f.select_shipping(&change_id))
                                }
                            />
                            <span>{option.name.clone()}</span>
                            <span class="shipping-price">{option.price.display()}</span>
                        </label>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <div class="shipping-section">
                    <h4>"M\u{e9}todo de Env\u{ed}o"</h4>
                    {radios}
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="digital-notice">
                    <p><strong>"\u{2713} Entrega Instant\u{e1}nea"</strong></p>
                    <p>"Recibir\u{e1}s el acceso al instante despu\u{e9}s de completar el pago"</p>
                </div>
            }
            .into_any()
        }
    };

    let summary = move || {
        let items = store
            .with(|c| c.items.clone())
            .into_iter()
            .map(|line| {
                view! {
                    <div class="summary-line">
                        <span>{line.name.clone()} " x" {line.quantity.to_string()}</span>
                        <span>{line.line_total().display()}</span>
                    </div>
                }
            })
            .collect::<Vec<_>>();

        let rows = totals.get().map(|t| {
            view! {
                <div class="summary-totals">
                    <div><span>"Subtotal:"</span><span>{t.subtotal.display()}</span></div>
                    {t.has_discount()
                        .then(|| {
                            view! {
                                <div class="summary-discount">
                                    <span>"Descuento (Cup\u{f3}n):"</span>
                                    <span>{format!("-{}", t.discount.display())}</span>
                                </div>
                            }
                        })}
                    <div><span>"Impuestos (8%):"</span><span>{t.tax.display()}</span></div>
                    <div><span>"Env\u{ed}o:"</span><span>{t.shipping.display()}</span></div>
                    <div class="summary-total">
                        <span>"Total:"</span>
                        <span>{t.total.display()}</span>
                    </div>
                </div>
            }
        });

        view! {
            <div class="order-summary">
                <h4>"Resumen"</h4>
                {if items.is_empty() {
                    view! { <p class="summary-empty">"Carrito vac\u{ed}o"</p> }.into_any()
                } else {
                    view! { <div class="summary-items">{items}</div> }.into_any()
                }}
                {rows}
            </div>
        }
    };

    let coupon_row = move || {
        view! {
            <div class="coupon-section">
                <label>"C\u{f3}digo de Cup\u{f3}n"</label>
                <div class="coupon-row">
                    <input
                        placeholder="Ej: DEMO20, DEMO10"
                        prop:value=move || coupon_input.get()
                        on:input=move |ev| coupon_input.set(event_target_value(&ev))
                    />
                    <button class="btn-secondary" on:click=apply_coupon>"Aplicar"</button>
                </div>
                {move || {
                    form.with(|f| f.coupon_error.clone())
                        .map(|msg| view! { <p class="field-error">{msg}</p> })
                }}
                {move || {
                    let discount = totals.get().filter(|t| t.has_discount()).map(|t| t.discount);
                    form.with(|f| f.coupon.clone()).zip(discount).map(|(_, amount)| {
                        view! {
                            <p class="coupon-applied">
                                {format!("\u{2713} Descuento aplicado: -{}", amount.display())}
                            </p>
                        }
                    })
                }}
            </div>
        }
    };

    let modal = move || {
        open.get().then(|| {
            let submitting = move || form.with(|f| f.is_submitting());
            view! {
                <div class="backdrop" on:click=move |_| open.set(false)></div>
                <div class="modal checkout-modal">
                    <div class="modal-header">
                        <h2>"Checkout"</h2>
                        <button
                            disabled=submitting
                            on:click=move |_| open.set(false)
                        >"\u{2715}"</button>
                    </div>
                    <div class="modal-body">
                        <div class="modal-main">
                            <h3>"Direcci\u{f3}n de Env\u{ed}o"</h3>
                            {move || {
                                form.with(|f| f.submit_error.clone())
                                    .map(|msg| view! { <div class="banner-error">{msg}</div> })
                            }}
                            <div class="field-grid">
                                <Field label="Nombre" name="first_name" placeholder="Juan"
                                    form=form
                                    get={|f| f.first_name.clone()}
                                    set={|f, v| f.first_name = v}/>
                                <Field label="Apellido" name="last_name" placeholder="Garc\u{ed}a"
                                    form=form
                                    get={|f| f.last_name.clone()}
                                    set={|f, v| f.last_name = v}/>
                                <Field label="Email" name="email" placeholder="juan@example.com"
                                    input_type="email" form=form
                                    get={|f| f.email.clone()}
                                    set={|f, v| f.email = v}/>
                                <Field label="Tel\u{e9}fono" name="phone"
                                    placeholder="+1 (786) 391-8722" input_type="tel" form=form
                                    get={|f| f.phone.clone()}
                                    set={|f, v| f.phone = v}/>
                                <Field label="Direcci\u{f3}n" name="address"
                                    placeholder="123 Main Street" form=form
                                    get={|f| f.address.clone()}
                                    set={|f, v| f.address = v}/>
                                <Field label="Ciudad" name="city" placeholder="Miami" form=form
                                    get={|f| f.city.clone()}
                                    set={|f, v| f.city = v}/>
                                <Field label="Estado" name="state" placeholder="FL" form=form
                                    get={|f| f.state.clone()}
                                    set={|f, v| f.state = v}/>
                                <Field label="C\u{f3}digo Postal" name="zip_code"
                                    placeholder="33101" form=form
                                    get={|f| f.zip_code.clone()}
                                    set={|f, v| f.zip_code = v}/>
                                <Field label="Pa\u{ed}s" name="country"
                                    placeholder="United States" form=form
                                    get={|f| f.country.clone()}
                                    set={|f, v| f.country = v}/>
                            </div>
                            {coupon_row}
                            {shipping_section}
                            <button
                                class="btn btn-submit"
                                disabled=submitting
                                on:click=on_submit.clone()
                            >
                                {move || {
                                    if submitting() { "Procesando..." } else { "Proceder al Pago" }
                                }}
                            </button>
                        </div>
                        <div class="modal-side">{summary}</div>
                    </div>
                </div>
            }
        })
    };

    view! { {modal} }
}

/// One labeled address input bound to the checkout form.
#[component]
fn Field(
    label: &'static str,
    name: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    form: RwSignal<CheckoutForm>,
    get: fn(&AddressFields) -> String,
    set: fn(&mut AddressFields, String),
) -> impl IntoView {
    let disabled = move || form.with(|f| f.is_submitting());

    view! {
        <label class="field">
            <span>{label}</span>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || form.with(|f| get(&f.fields))
                on:input=move |ev| form.update(|f| set(&mut f.fields, event_target_value(&ev)))
                disabled=disabled
            />
            {move || {
                form.with(|f| f.field_errors.get(name))
                    .map(|msg| view! { <p class="field-error">{msg}</p> })
            }}
        </label>
    }
}
