//! Contact form posting to `/api/contact`, plus the LinkedIn alternative.
//!
//! ERROR HANDLING
//! ==============
//! Any failure (network, non-2xx, unconfirmed body) lands in
//! `SubmitStatus::Error` and renders a single retry message. A response that
//! arrives after the section unmounted is logged and dropped.

use leptos::prelude::*;

use super::linkedin_badge::LinkedInBadge;
use crate::content::LINKEDIN_USERNAME;
use crate::state::contact::{ContactField, ContactForm, MountGuard, SubmitStatus};

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.release()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = form.try_update(ContactForm::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let guard = guard.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::submit_contact(&payload).await;
                match &outcome {
                    Ok(id) => log::info!("contact message accepted: {}", id.as_deref().unwrap_or("-")),
                    Err(e) => log::warn!("contact submission failed: {e}"),
                }
                if !guard.is_mounted() {
                    log::debug!("contact section unmounted; dropping submission result");
                    return;
                }
                form.try_update(|f| f.finish(outcome));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, &guard);
        }
    };

    let field_value = move |field: ContactField| form.with(|f| f.field(field).to_owned());
    let set_field = move |field: ContactField, ev: leptos::ev::Event| {
        form.update(|f| f.set_field(field, event_target_value(&ev)));
    };

    view! {
        <section id="contact" class="contact-section">
            <div class="contact-card">
                <header class="contact-card__header">
                    <h2 class="contact-card__title">"Get in touch!"</h2>
                    <p class="contact-card__subtitle">"Have a project in mind or just want to say hello?"</p>
                </header>

                <form class="contact-form" on:submit=on_submit>
                    <div class="contact-field">
                        <label for=ContactField::Name.id()>{ContactField::Name.label()}</label>
                        <input
                            class="contact-input"
                            type="text"
                            id=ContactField::Name.id()
                            name=ContactField::Name.id()
                            required=true
                            prop:value=move || field_value(ContactField::Name)
                            on:input=move |ev| set_field(ContactField::Name, ev)
                        />
                    </div>
                    <div class="contact-field">
                        <label for=ContactField::Email.id()>{ContactField::Email.label()}</label>
                        <input
                            class="contact-input"
                            type="email"
                            id=ContactField::Email.id()
                            name=ContactField::Email.id()
                            required=true
                            prop:value=move || field_value(ContactField::Email)
                            on:input=move |ev| set_field(ContactField::Email, ev)
                        />
                    </div>
                    <div class="contact-field">
                        <label for=ContactField::Message.id()>{ContactField::Message.label()}</label>
                        <textarea
                            class="contact-input contact-input--message"
                            id=ContactField::Message.id()
                            name=ContactField::Message.id()
                            rows="4"
                            required=true
                            prop:value=move || field_value(ContactField::Message)
                            on:input=move |ev| set_field(ContactField::Message, ev)
                        ></textarea>
                    </div>
                    <button
                        class="contact-submit"
                        type="submit"
                        disabled=move || form.with(ContactForm::is_submitting)
                    >
                        {move || form.with(ContactForm::button_label)}
                    </button>
                    {move || {
                        form.with(|f| {
                            f.status_message()
                                .map(|message| {
                                    let class = if f.status == SubmitStatus::Success {
                                        "contact-status contact-status--success"
                                    } else {
                                        "contact-status contact-status--error"
                                    };
                                    view! { <p class=class>{message}</p> }
                                })
                        })
                    }}
                </form>

                <div class="contact-card__alt">
                    <p class="contact-card__subtitle">"or, connect with me on LinkedIn:"</p>
                    <LinkedInBadge username=LINKEDIN_USERNAME/>
                </div>
            </div>
        </section>
    }
}
