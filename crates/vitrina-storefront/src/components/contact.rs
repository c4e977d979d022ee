//! The contact modal.
//!
//! Collects free-text prospect contact data and posts it to the external
//! CRM inbox. Entirely independent of the cart.

use leptos::prelude::*;
use leptos::task::spawn_local;
use vitrina_api::{ContactSubmission, SubmitClient};

use crate::config::use_config;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum ContactPhase {
    #[default]
    Editing,
    Sending,
    Sent,
}

#[component]
pub fn ContactModal(open: RwSignal<bool>) -> impl IntoView {
    let api_base = use_config().api_base.clone();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let phase = RwSignal::new(ContactPhase::default());
    let error = RwSignal::new(None::<String>);

    let on_send = {
        let api_base = api_base.clone();
        move |_| {
            if phase.get_untracked() == ContactPhase::Sending {
                return;
            }
            let submission = ContactSubmission {
                name: name.get_untracked(),
                email: email.get_untracked(),
                message: message.get_untracked(),
            };
            phase.set(ContactPhase::Sending);
            error.set(None);

            let api_base = api_base.clone();
            spawn_local(async move {
                let client = SubmitClient::new(api_base);
                match client.submit_contact(submission).await {
                    Ok(()) => {
                        phase.set(ContactPhase::Sent);
                        name.set(String::new());
                        email.set(String::new());
                        message.set(String::new());
                    }
                    Err(err) => {
                        phase.set(ContactPhase::Editing);
                        error.set(Some(err.user_message().to_string()));
                    }
                }
            });
        }
    };

    let close = move |_| {
        open.set(false);
        phase.set(ContactPhase::Editing);
        error.set(None);
    };

    let body = {
        let on_send = on_send.clone();
        move || {
            if phase.get() == ContactPhase::Sent {
                view! {
                    <div class="contact-sent">
                        <p><strong>"\u{2713} \u{a1}Gracias!"</strong></p>
                        <p>"Te contactaremos muy pronto."</p>
                        <button class="btn" on:click=close>"Cerrar"</button>
                    </div>
                }
                .into_any()
            } else {
                let sending = move || phase.get() == ContactPhase::Sending;
                view! {
                    <div class="contact-form">
                        {move || {
                            error.get().map(|msg| view! { <div class="banner-error">{msg}</div> })
                        }}
                        <label class="field">
                            <span>"Nombre"</span>
                            <input
                                placeholder="Ana Rojas"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                                disabled=sending
                            />
                        </label>
                        <label class="field">
                            <span>"Email"</span>
                            <input
                                type="email"
                                placeholder="ana@mail.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                                disabled=sending
                            />
                        </label>
                        <label class="field">
                            <span>"Mensaje"</span>
                            <textarea
                                placeholder="Cu\u{e9}ntanos qu\u{e9} buscas"
                                prop:value=move || message.get()
                                on:input=move |ev| message.set(event_target_value(&ev))
                                disabled=sending
                            ></textarea>
                        </label>
                        <button class="btn btn-submit" disabled=sending on:click=on_send.clone()>
                            {move || if sending() { "Enviando..." } else { "Enviar" }}
                        </button>
                    </div>
                }
                .into_any()
            }
        }
    };

    let modal = move || {
        open.get().then(|| {
            view! {
                <div class="backdrop" on:click=close></div>
                <div class="modal contact-modal">
                    <div class="modal-header">
                        <h2>"Contacto"</h2>
                        <button on:click=close>"\u{2715}"</button>
                    </div>
                    <div class="modal-body">{body.clone()}</div>
                </div>
            }
        })
    };

    view! { {modal} }
}
