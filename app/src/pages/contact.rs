use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use crate::forms::{ContactForm, TalentPoolForm};

pub const TALENT_POOL_TYPE: &str = "talent-pool";

const DETAILS: &[(&str, &str, &str)] = &[
    ("\u{1f4cd}", "Location", "Lagos, Nigeria"),
    ("\u{1f4de}", "Phone", "+234 XXX XXX XXXX"),
    ("\u{2709}\u{fe0f}", "Email", "contact@jmbthenogahr.com"),
];

#[component]
pub fn Index() -> impl IntoView {
    let query = use_query_map();
    let subject = query.with_untracked(|query| query.get("subject"));
    let talent_pool = query.with_untracked(|query| query.get("type").as_deref() == Some(TALENT_POOL_TYPE));

    let details = DETAILS
        .iter()
        .map(|(icon, label, value)| {
            view! {
                <div class="contact-detail">
                    <div class="value-icon">{*icon}</div>
                    <h4>{*label}</h4>
                    <p>{*value}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <Title text="Contact"/>
        <main class="contact">
            <section class="hero">
                <h1>"Let's Talk"</h1>
                <p>"Tell us about your organization and we'll get back to you within one business day."</p>
            </section>
            <section class="container contact-grid">
                <ContactForm subject=subject/>
                <aside class="contact-details">
                    <h2>"Contact Information"</h2>
                    {details}
                </aside>
            </section>
            <section class="container talent-pool">
                <p>"Register your interest and we'll match you with roles from our clients."</p>
                <TalentPoolForm highlighted=talent_pool/>
            </section>
        </main>
    }
}
