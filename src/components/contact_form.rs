//! Contact section: owner details and the validated message form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation and the banner state machine live in
//! `pagecore::contact::ContactFormModel`. This component binds fields to it
//! and runs the send on the local executor: `begin` and `settle` happen in
//! separate signal updates so no borrow is held across the await.

use leptos::prelude::*;
use pagecore::config::ShellConfig;
use pagecore::contact::{ContactFormModel, ContactStatus, ContactSubmitter, EMAIL, MESSAGE, NAME, SUBJECT};

use crate::content::Owner;
use crate::net::contact::SimulatedSubmitter;
use crate::state::shell::ShellHandle;

#[derive(Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Text,
    Email,
    TextArea,
}

#[component]
pub fn ContactSection(owner: &'static Owner) -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactFormModel>>();
    let handle = expect_context::<ShellHandle>();
    let config = expect_context::<ShellConfig>();
    let submitter = SimulatedSubmitter::new(config.simulated_submit_delay_ms);
    let banner_ms = config.success_banner_ms;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(message) = contact.try_update(ContactFormModel::begin).flatten() else {
            if let Some(field) = contact.with_untracked(ContactFormModel::first_invalid_field) {
                handle.reveal(&format!("contact-{field}"));
            }
            return;
        };
        leptos::task::spawn_local(async move {
            let result = submitter.submit(&message).await;
            let status = contact.try_update(|m| m.settle(result));
            if status != Some(ContactStatus::Success) {
                return;
            }
            #[cfg(feature = "csr")]
            {
                let seq = contact.with_untracked(ContactFormModel::success_seq);
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(banner_ms))).await;
                contact.update(|m| m.dismiss_success(seq));
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = banner_ms;
            }
        });
    };

    let submitting = move || contact.with(|m| m.form.is_submitting());
    let status = move || contact.with(ContactFormModel::status);

    view! {
        <section id="contact" class="contact section">
            <h2 class="section__title">"Get in touch"</h2>
            <div class="contact__layout">
                <aside class="contact__info">
                    <p>"Have a project in mind or just want to say hello? My inbox is open."</p>
                    {owner
                        .email
                        .as_deref()
                        .map(|email| {
                            view! {
                                <a class="contact__email" href=format!("mailto:{email}")>
                                    {email}
                                </a>
                            }
                        })}
                    {owner.location.as_deref().map(|loc| view! { <p class="contact__location">{loc}</p> })}
                </aside>

                <form class="contact-form" novalidate=true on:submit=on_submit>
                    <Show when=move || status() == ContactStatus::Success>
                        <div class="contact-form__banner contact-form__banner--success" role="status">
                            "Thanks! Your message has been sent. I'll get back to you soon."
                        </div>
                    </Show>
                    <Show when=move || status() == ContactStatus::Error>
                        <div class="contact-form__banner contact-form__banner--error" role="alert">
                            "Something went wrong sending your message. Please try again."
                        </div>
                    </Show>

                    <FormField name=NAME label="Name" kind=FieldKind::Text placeholder="Your name"/>
                    <FormField name=EMAIL label="Email" kind=FieldKind::Email placeholder="you@example.com"/>
                    <FormField name=SUBJECT label="Subject" kind=FieldKind::Text placeholder="What is this about?"/>
                    <FormField name=MESSAGE label="Message" kind=FieldKind::TextArea placeholder="Tell me about your project..."/>

                    <button class="btn btn--primary contact-form__submit" type="submit" disabled=submitting>
                        {move || if submitting() { "Sending..." } else { "Send message" }}
                    </button>
                </form>
            </div>
        </section>
    }
}

/// One labelled input bound to a form field. The error line only appears
/// once the field has been touched.
#[component]
fn FormField(name: &'static str, label: &'static str, kind: FieldKind, placeholder: &'static str) -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactFormModel>>();
    let input_id = format!("contact-{name}");
    let error_id = format!("contact-{name}-error");

    let meta = move || contact.with(|m| m.form.field_meta(name));
    let invalid = move || meta().invalid;
    let value = move || contact.with(|m| m.form.value(name).to_owned());
    let on_input = move |ev: leptos::ev::Event| contact.update(|m| m.form.handle_change(name, &event_target_value(&ev)));
    let on_blur = move |_| contact.update(|m| m.form.handle_blur(name));

    let control = match kind {
        FieldKind::TextArea => view! {
            <textarea
                id=input_id.clone()
                class="contact-form__input contact-form__textarea"
                class:contact-form__input--invalid=invalid
                name=name
                rows="6"
                placeholder=placeholder
                aria-invalid=move || invalid().to_string()
                aria-describedby=error_id.clone()
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            ></textarea>
        }
        .into_any(),
        FieldKind::Text | FieldKind::Email => view! {
            <input
                id=input_id.clone()
                class="contact-form__input"
                class:contact-form__input--invalid=invalid
                name=name
                type=if kind == FieldKind::Email { "email" } else { "text" }
                placeholder=placeholder
                aria-invalid=move || invalid().to_string()
                aria-describedby=error_id.clone()
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_any(),
    };

    view! {
        <div class="contact-form__field">
            <label class="contact-form__label" for=input_id>
                {label}
            </label>
            {control}
            <p id=error_id class="contact-form__error" role="alert">
                {move || meta().invalid.then(|| meta().error).flatten()}
            </p>
        </div>
    }
}
