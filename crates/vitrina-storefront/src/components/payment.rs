//! The payment modal.
//!
//! Renders while a payment session is active. Presents the fixed method
//! menu and the wallet toggle, recomputes the payable amount, and forwards
//! the choice to the injected handler. A rejection keeps the modal open
//! with an error; success clears the cart and closes it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use vitrina_commerce::payment::{PaymentMethod, PaymentSession};

use crate::config::PaymentGateway;
use crate::store::CartStore;

#[component]
pub fn PaymentModal(payment: RwSignal<Option<PaymentSession>>) -> impl IntoView {
    let store = CartStore::use_store();
    let gateway = PaymentGateway::use_gateway();

    let submitting = move || {
        payment.with(|p| {
            p.as_ref()
                .map(|s| s.phase == vitrina_commerce::payment::PaymentPhase::Submitting)
                .unwrap_or(false)
        })
    };
    let can_submit = move || {
        payment.with(|p| p.as_ref().map(|s| s.can_submit()).unwrap_or(false))
    };
    let final_total = move || {
        payment.with(|p| {
            p.as_ref()
                .map(|s| s.final_total().display())
                .unwrap_or_default()
        })
    };

    let on_pay = {
        let gateway = gateway.clone();
        move |_| {
            let Some(mut session) = payment.get_untracked() else {
                return;
            };
            if !session.begin_submit() {
                return;
            }
            payment.set(Some(session.clone()));

            let gateway = gateway.clone();
            spawn_local(async move {
                let result = gateway.0.submit(session.method, session.totals()).await;
                match result {
                    Ok(()) => {
                        // A close mid-flight discards the late answer.
                        if payment.get_untracked().is_none() {
                            return;
                        }
                        store.clear();
                        payment.set(None);
                    }
                    Err(err) => {
                        payment.update(|p| {
                            if let Some(s) = p {
                                s.submit_failed(&err);
                            }
                        });
                    }
                }
            });
        }
    };

    let methods = move || {
        PaymentMethod::defaults()
            .into_iter()
            .map(|method| {
                let id = method.id;
                view! {
                    <label class="payment-method">
                        <input
                            type="radio"
                            name="payment-method"
                            disabled=!method.enabled
                            prop:checked=move || {
                                payment.with(|p| {
                                    p.as_ref().map(|s| s.method == id).unwrap_or(false)
                                })
                            }
                            on:change=move |_| {
                                payment.update(|p| {
                                    if let Some(s) = p {
                                        s.select(id);
                                    }
                                })
                            }
                        />
                        <div>
                            <strong>{method.name.clone()}</strong>
                            <p>{method.description.clone()}</p>
                        </div>
                    </label>
                }
            })
            .collect::<Vec<_>>()
    };

    let wallet_row = move || {
        payment.with(|p| {
            p.as_ref()
                .filter(|s| s.wallet_balance().is_positive())
                .map(|s| {
                    let balance = s.wallet_balance().display();
                    view! {
                        <label class="wallet-row">
                            <input
                                type="checkbox"
                                prop:checked=move || {
                                    payment.with(|p| {
                                        p.as_ref().map(|s| s.use_wallet).unwrap_or(false)
                                    })
                                }
                                on:change=move |ev| {
                                    let enabled = event_target_checked(&ev);
                                    payment.update(|p| {
                                        if let Some(s) = p {
                                            s.set_use_wallet(enabled);
                                        }
                                    })
                                }
                            />
                            <div>
                                <strong>"Usar Billetera Virtual"</strong>
                                <p>{format!("Saldo disponible: {}", balance)}</p>
                            </div>
                        </label>
                    }
                })
        })
    };

    let summary = move || {
        payment.with(|p| {
            p.as_ref().map(|s| {
                let t = *s.totals();
                let wallet = s.wallet_deduction();
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
                        {wallet
                            .is_positive()
                            .then(|| {
                                view! {
                                    <div class="summary-wallet">
                                        <span>"Billetera:"</span>
                                        <span>{format!("-{}", wallet.display())}</span>
                                    </div>
                                }
                            })}
                        <div class="summary-total">
                            <span>"Total:"</span>
                            <span>{s.final_total().display()}</span>
                        </div>
                    </div>
                }
            })
        })
    };

    let modal = move || {
        payment.with(|p| p.is_some()).then(|| {
            let on_pay = on_pay.clone();
            view! {
                <div class="backdrop" on:click=move |_| payment.set(None)></div>
                <div class="modal payment-modal">
                    <div class="modal-header">
                        <h2>"Selecciona M\u{e9}todo de Pago"</h2>
                        <button
                            disabled=submitting
                            on:click=move |_| payment.set(None)
                        >"\u{2715}"</button>
                    </div>
                    <div class="modal-body">
                        <div class="modal-main">
                            <h3>"M\u{e9}todos de Pago"</h3>
                            {move || {
                                payment.with(|p| {
                                    p.as_ref().and_then(|s| s.error.clone()).map(|msg| {
                                        view! { <div class="banner-error">{msg}</div> }
                                    })
                                })
                            }}
                            <div class="payment-methods">{methods}</div>
                            <h4>"Opciones Adicionales"</h4>
                            {wallet_row}
                        </div>
                        <div class="modal-side">
                            <div class="order-summary">
                                <h4>"Resumen de Orden"</h4>
                                {summary}
                                <button
                                    class="btn btn-submit"
                                    disabled=move || !can_submit()
                                    on:click=on_pay
                                >
                                    {move || {
                                        if submitting() {
                                            "Procesando...".to_string()
                                        } else {
                                            format!("Pagar {}", final_total())
                                        }
                                    }}
                                </button>
                                <p class="secure-note">"Tu pago es seguro y encriptado"</p>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    };

    view! { {modal} }
}
