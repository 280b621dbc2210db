use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::StatusBanner;
use crate::forms::{post_json, ContactSubmission, FormState, CONTACT_ENDPOINT};

#[component]
pub fn ContactForm(#[prop(optional_no_strip)] subject: Option<String>) -> impl IntoView {
    let form = RwSignal::new(FormState::with_fields(ContactSubmission {
        subject,
        ..Default::default()
    }));
    let status = Signal::derive(move || form.with(FormState::status));
    let submitting = move || form.with(FormState::is_submitting);

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let Some(Some(fields)) = form.try_update(FormState::begin) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let delivered = post_json(CONTACT_ENDPOINT, &fields).await;
            form.try_update(|form| form.finish(delivered));
        });
    };

    view! {
        <div class="form-card" id="contact-form">
            <h3>"Send Us a Message"</h3>
            <StatusBanner
                status=status
                success="Thank you for your message! We'll get back to you within 24 hours."
                error="There was an error sending your message. Please try again."
            />
            <form on:submit=on_submit>
                <div class="form-row">
                    <label for="contact-name">"Full Name *"</label>
                    <input
                        type="text"
                        id="contact-name"
                        name="name"
                        required
                        placeholder="Your full name"
                        prop:value=move || form.with(|form| form.fields.name.clone())
                        on:input=move |event| form.update(|form| form.fields.name = event_target_value(&event))
                    />
                    <label for="contact-email">"Email Address *"</label>
                    <input
                        type="email"
                        id="contact-email"
                        name="email"
                        required
                        placeholder="your.email@example.com"
                        prop:value=move || form.with(|form| form.fields.email.clone())
                        on:input=move |event| form.update(|form| form.fields.email = event_target_value(&event))
                    />
                </div>
                <div class="form-row">
                    <label for="contact-company">"Company"</label>
                    <input
                        type="text"
                        id="contact-company"
                        name="company"
                        placeholder="Your company"
                        prop:value=move || form.with(|form| form.fields.company.clone().unwrap_or_default())
                        on:input=move |event| form.update(|form| form.fields.company = Some(event_target_value(&event)))
                    />
                    <label for="contact-phone">"Phone Number"</label>
                    <input
                        type="tel"
                        id="contact-phone"
                        name="phone"
                        placeholder="+234 XXX XXX XXXX"
                        prop:value=move || form.with(|form| form.fields.phone.clone().unwrap_or_default())
                        on:input=move |event| form.update(|form| form.fields.phone = Some(event_target_value(&event)))
                    />
                </div>
                <label for="contact-subject">"Subject"</label>
                <input
                    type="text"
                    id="contact-subject"
                    name="subject"
                    placeholder="How can we help?"
                    prop:value=move || form.with(|form| form.fields.subject.clone().unwrap_or_default())
                    on:input=move |event| form.update(|form| form.fields.subject = Some(event_target_value(&event)))
                />
                <label for="contact-message">"Message"</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="5"
                    placeholder="Tell us about your HR needs..."
                    prop:value=move || form.with(|form| form.fields.message.clone().unwrap_or_default())
                    on:input=move |event| form.update(|form| form.fields.message = Some(event_target_value(&event)))
                ></textarea>
                <button type="submit" class="btn-primary" disabled=submitting>
                    {move || if submitting() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </div>
    }
}
