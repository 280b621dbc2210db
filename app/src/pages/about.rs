use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::Loading;
use crate::content::Testimonial;
use crate::pages::or_empty;
use crate::widgets::carousel::TestimonialsCarousel;

const VALUES: &[(&str, &str, &str)] = &[
    (
        "\u{2b50}",
        "Excellence",
        "Delivering exceptional quality in every engagement and maintaining the highest professional standards.",
    ),
    (
        "\u{1f512}",
        "Integrity",
        "Building trust through transparency, honesty, and ethical business practices.",
    ),
    (
        "\u{1f4a1}",
        "Innovation",
        "Leveraging cutting-edge HR strategies and technologies to drive business success.",
    ),
];

const REASONS: &[(&str, &str)] = &[
    ("Authority & Expertise", "Deep industry knowledge and proven methodologies"),
    ("Strategic Partnership", "Working as an extension of your leadership team"),
    ("Results-Driven Approach", "Focus on measurable business outcomes"),
];

#[server(GetTestimonials, "/api/fn", "GetJson", "testimonials")]
pub async fn get_testimonials() -> Result<Vec<Testimonial>, ServerFnError> {
    use crate::content::queries;

    let ctx = crate::pages::server_context()?;
    queries::testimonials(ctx.content.as_ref(), ctx.cancellation())
        .await
        .map_err(crate::pages::server_error)
}

#[component]
pub fn Index() -> impl IntoView {
    let testimonials = Resource::new(|| (), |_| get_testimonials());

    let values = VALUES
        .iter()
        .map(|(icon, title, description)| {
            view! {
                <div class="value-card">
                    <div class="value-icon">{*icon}</div>
                    <h3>{*title}</h3>
                    <p>{*description}</p>
                </div>
            }
        })
        .collect_view();
    let reasons = REASONS
        .iter()
        .map(|(title, description)| {
            view! {
                <div class="reason">
                    <span class="check">"\u{2713}"</span>
                    <div>
                        <h4>{*title}</h4>
                        <p>{*description}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <Title text="About"/>
        <main class="about">
            <section class="hero">
                <h1>"About JMB The Oga HR"</h1>
                <p>
                    "Leading the evolution of human capital management with strategic insights and innovative solutions for modern businesses."
                </p>
            </section>
            <section class="container mission">
                <div>
                    <h2>"Our Mission"</h2>
                    <p>
                        "To transform how organizations build, manage, and scale their most valuable asset\u{2014}their people. We believe that strategic human capital management is the cornerstone of sustainable business growth."
                    </p>
                    <p>
                        "Founded on the principle that \u{201c}we don't just fill positions\u{2014}we build teams that scale,\u{201d} JMB The Oga HR brings executive-level HR expertise to businesses of all sizes."
                    </p>
                    <p class="signature">
                        <strong>"JMB The Oga HR"</strong>
                        <br/>
                        "Founder & Principal Consultant"
                    </p>
                </div>
                <div>
                    <h3>"Why \u{201c}The Oga HR\u{201d}"</h3>
                    {reasons}
                </div>
            </section>
            <section class="container values">
                <h2>"Our Values"</h2>
                <p>"The principles that guide our approach to human capital management"</p>
                <div class="values-grid">{values}</div>
            </section>
            <section class="container testimonials">
                <h2>"What Our Clients Say"</h2>
                <Suspense fallback=|| view! { <Loading/> }>
                    {move || {
                        testimonials
                            .get()
                            .map(|result| {
                                view! {
                                    <TestimonialsCarousel testimonials=or_empty("testimonials", result)/>
                                }
                            })
                    }}
                </Suspense>
            </section>
            <section class="cta">
                <h2>"Ready to Transform Your HR Strategy?"</h2>
                <p>"Let's discuss how our expertise can drive your business forward."</p>
                <A href="/contact" attr:class="btn-primary">"Schedule Consultation"</A>
            </section>
        </main>
    }
}
