use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::StatusBanner;
use crate::forms::{post_json, FormState, TalentPoolSubmission, EXPERIENCE_LEVELS, TALENT_POOL_ENDPOINT};

#[component]
pub fn TalentPoolForm(#[prop(optional)] highlighted: bool) -> impl IntoView {
    let form = RwSignal::new(FormState::<TalentPoolSubmission>::default());
    let status = Signal::derive(move || form.with(FormState::status));
    let submitting = move || form.with(FormState::is_submitting);

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let Some(Some(fields)) = form.try_update(FormState::begin) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let delivered = post_json(TALENT_POOL_ENDPOINT, &fields).await;
            form.try_update(|form| form.finish(delivered));
        });
    };

    let experience_options = EXPERIENCE_LEVELS
        .iter()
        .map(|level| view! { <option value=*level>{*level}</option> })
        .collect_view();

    view! {
        <div class=if highlighted { "form-card highlighted" } else { "form-card" } id="talent-pool">
            <h3>"Join Our Talent Pool"</h3>
            <p>"Submit your details and we'll notify you when relevant opportunities match your profile."</p>
            <StatusBanner
                status=status
                success="Thank you for joining our talent pool! We'll be in touch when matching opportunities arise."
                error="There was an error submitting your application. Please try again."
            />
            <form on:submit=on_submit>
                <div class="form-row">
                    <label for="talent-name">"Full Name *"</label>
                    <input
                        type="text"
                        id="talent-name"
                        name="name"
                        required
                        placeholder="Your full name"
                        prop:value=move || form.with(|form| form.fields.name.clone())
                        on:input=move |event| form.update(|form| form.fields.name = event_target_value(&event))
                    />
                    <label for="talent-email">"Email Address *"</label>
                    <input
                        type="email"
                        id="talent-email"
                        name="email"
                        required
                        placeholder="your.email@example.com"
                        prop:value=move || form.with(|form| form.fields.email.clone())
                        on:input=move |event| form.update(|form| form.fields.email = event_target_value(&event))
                    />
                </div>
                <div class="form-row">
                    <label for="talent-phone">"Phone Number *"</label>
                    <input
                        type="tel"
                        id="talent-phone"
                        name="phone"
                        required
                        placeholder="+234 XXX XXX XXXX"
                        prop:value=move || form.with(|form| form.fields.phone.clone())
                        on:input=move |event| form.update(|form| form.fields.phone = event_target_value(&event))
                    />
                    <label for="talent-position">"Desired Position"</label>
                    <input
                        type="text"
                        id="talent-position"
                        name="position"
                        placeholder="e.g., HR Manager, Recruiter"
                        prop:value=move || form.with(|form| form.fields.position.clone().unwrap_or_default())
                        on:input=move |event| form.update(|form| form.fields.position = Some(event_target_value(&event)))
                    />
                </div>
                <div class="form-row">
                    <label for="talent-experience">"Years of Experience"</label>
                    <select
                        id="talent-experience"
                        name="experience"
                        prop:value=move || form.with(|form| form.fields.experience.clone().unwrap_or_default())
                        on:change=move |event| form.update(|form| form.fields.experience = Some(event_target_value(&event)))
                    >
                        <option value="">"Select experience level"</option>
                        {experience_options}
                    </select>
                    <label for="talent-skills">"Key Skills"</label>
                    <input
                        type="text"
                        id="talent-skills"
                        name="skills"
                        placeholder="e.g., Recruitment, HRIS, Talent Management"
                        prop:value=move || form.with(|form| form.fields.skills.clone().unwrap_or_default())
                        on:input=move |event| form.update(|form| form.fields.skills = Some(event_target_value(&event)))
                    />
                </div>
                <label for="talent-message">"Additional Information"</label>
                <textarea
                    id="talent-message"
                    name="message"
                    rows="4"
                    placeholder="Tell us about your career aspirations or specific interests..."
                    prop:value=move || form.with(|form| form.fields.message.clone().unwrap_or_default())
                    on:input=move |event| form.update(|form| form.fields.message = Some(event_target_value(&event)))
                ></textarea>
                <button type="submit" class="btn-dark" disabled=submitting>
                    {move || if submitting() { "Submitting..." } else { "Join Talent Pool" }}
                </button>
            </form>
        </div>
    }
}
