use leptos::{ev::SubmitEvent, html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::dom;
use crate::contact::{ContactError, ContactForm, SUBMIT_DELAY};
use crate::content::{EMAIL, GITHUB, LINKEDIN};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="section contact">
            <h2 class="section__title">"Get In Touch"</h2>
            <div class="contact__container grid gap-8 md:grid-cols-2">
                <div class="contact__info space-y-3">
                    <p>
                        "Have a project in mind or just want to say hi? My inbox is always open."
                    </p>
                    <p>
                        "📧 " <a href=format!("mailto:{EMAIL}")>{EMAIL}</a>
                    </p>
                    <p>
                        <a href=GITHUB target="_blank" rel="noopener noreferrer">
                            "GitHub"
                        </a>
                        " · "
                        <a href=LINKEDIN target="_blank" rel="noopener noreferrer">
                            "LinkedIn"
                        </a>
                    </p>
                </div>
                <ContactFormView />
            </div>
        </section>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let form_ref = NodeRef::<html::Form>::new();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    // stands in for the network round trip; cancelled if the form unmounts
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            let mut sent = None;
            form.update(|f| sent = f.complete());
            let Some(sent) = sent else {
                return;
            };
            dom::alert(&sent.confirmation());
            if let Some(el) = form_ref.get_untracked() {
                el.reset();
            }
            log::info!("form submitted successfully");
        },
        SUBMIT_DELAY.as_millis() as f64,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let (Some(name), Some(email), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            log::warn!("contact form fields are missing");
            return;
        };

        let mut res = Err(ContactError::InFlight);
        form.update(|f| res = f.submit(&name.value(), &email.value(), &message.value()));
        match res {
            Ok(submission) => {
                match serde_json::to_string(&submission) {
                    Ok(json) => log::debug!("form submission attempt: {json}"),
                    Err(err) => log::debug!("form submission attempt (unserializable): {err}"),
                }
                start(());
            }
            Err(ContactError::InFlight) => log::info!("submission already in flight"),
            Err(err) => dom::alert(&err.to_string()),
        }
    };

    let submitting = move || form.with(|f| f.is_submitting());

    view! {
        <form id="contact-form" class="contact__form space-y-4" node_ref=form_ref on:submit=on_submit>
            <div class="form__group">
                <label for="name" class="form__label">
                    "Name"
                </label>
                <input
                    id="name"
                    name="name"
                    type="text"
                    class="form__input"
                    placeholder="Your name"
                    node_ref=name_ref
                />
            </div>
            <div class="form__group">
                <label for="email" class="form__label">
                    "Email"
                </label>
                <input
                    id="email"
                    name="email"
                    type="text"
                    inputmode="email"
                    class="form__input"
                    placeholder="you@example.com"
                    node_ref=email_ref
                />
            </div>
            <div class="form__group">
                <label for="message" class="form__label">
                    "Message"
                </label>
                <textarea
                    id="message"
                    name="message"
                    rows="5"
                    class="form__input"
                    placeholder="What would you like to talk about?"
                    node_ref=message_ref
                ></textarea>
            </div>
            <button
                type="submit"
                class="btn btn--primary"
                disabled=submitting
                style:opacity=move || if submitting() { "0.7" } else { "1" }
            >
                {move || form.with(|f| f.submit_label())}
            </button>
        </form>
    }
}
