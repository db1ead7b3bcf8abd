//! Contact form with live validation and simulated submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! Inputs are bound to a `ContactForm` signal. `submit` prevents the browser
//! navigation and runs full validation; `blur` on any input or textarea does
//! the same without the success path. Nothing is sent over the network.

use leptos::prelude::*;

use crate::state::contact::{ContactForm, Field};

#[component]
pub fn ContactFormSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let error_text = move |field: Field| form.with(|f| f.error(field).to_owned());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut accepted = false;
        form.update(|f| accepted = f.submit());
        leptos::logging::log!("contact form submitted (accepted: {accepted})");
    };

    let on_blur = move |_ev: leptos::ev::FocusEvent| {
        form.update(|f| {
            f.blur();
        });
    };

    view! {
        <form id="contact-form" class="contact-form" novalidate=true on:submit=on_submit>
            <div class="form-row">
                <label for="name">"Nombre"</label>
                <input
                    id="name"
                    name=Field::Name.key()
                    type="text"
                    autocomplete="name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    on:blur=on_blur
                />
                <span class="error" data-for=Field::Name.key() aria-live="polite">
                    {move || error_text(Field::Name)}
                </span>
            </div>
            <div class="form-row">
                <label for="email">"Email"</label>
                <input
                    id="email"
                    name=Field::Email.key()
                    type="email"
                    autocomplete="email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    on:blur=on_blur
                />
                <span class="error" data-for=Field::Email.key() aria-live="polite">
                    {move || error_text(Field::Email)}
                </span>
            </div>
            <div class="form-row">
                <label for="mensaje">"Mensaje"</label>
                <textarea
                    id="mensaje"
                    name=Field::Message.key()
                    rows="5"
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    on:blur=on_blur
                ></textarea>
                <span class="error" data-for=Field::Message.key() aria-live="polite">
                    {move || error_text(Field::Message)}
                </span>
            </div>
            <div class="form-row form-row--checkbox">
                <label>
                    <input
                        id="terms"
                        name=Field::Terms.key()
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.terms)
                        on:change=move |ev| form.update(|f| f.terms = event_target_checked(&ev))
                        on:blur=on_blur
                    />
                    " Acepto ser contactado"
                </label>
                <span class="error" data-for=Field::Terms.key() aria-live="polite">
                    {move || error_text(Field::Terms)}
                </span>
            </div>
            <button class="btn btn--primary" type="submit">"Enviar"</button>
            <p id="form-success" class="form-success" aria-live="polite">
                {move || form.with(|f| f.success().to_owned())}
            </p>
        </form>
    }
}
