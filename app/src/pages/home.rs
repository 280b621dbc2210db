use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::Loading;
use crate::content::{PostSummary, Service, Testimonial};
use crate::pages::or_empty;
use crate::pages::services::get_services;
use crate::widgets::carousel::TestimonialsMultiCarousel;

/// How many features of each service the landing page lists.
const FEATURES_PREVIEW: usize = 3;

const AUDIENCES: &[&str] = &["Startups", "SMEs", "Enterprises", "Scale-ups"];

#[server(GetFeaturedTestimonials, "/api/fn", "GetJson", "featured_testimonials")]
pub async fn get_featured_testimonials() -> Result<Vec<Testimonial>, ServerFnError> {
    use crate::content::queries;

    let ctx = crate::pages::server_context()?;
    queries::featured_testimonials(ctx.content.as_ref(), ctx.cancellation())
        .await
        .map_err(crate::pages::server_error)
}

#[server(GetFeaturedPosts, "/api/fn", "GetJson", "featured_posts")]
pub async fn get_featured_posts() -> Result<Vec<PostSummary>, ServerFnError> {
    use crate::content::queries;

    let ctx = crate::pages::server_context()?;
    queries::featured_posts(ctx.content.as_ref(), ctx.cancellation())
        .await
        .map_err(crate::pages::server_error)
}

#[component]
pub fn Index() -> impl IntoView {
    let services = Resource::new(|| (), |_| get_services());
    let testimonials = Resource::new(|| (), |_| get_featured_testimonials());
    let posts = Resource::new(|| (), |_| get_featured_posts());

    let audiences = AUDIENCES
        .iter()
        .map(|audience| view! { <span class="audience">{*audience}</span> })
        .collect_view();

    view! {
        <Title text="Strategic HR Consulting"/>
        <main class="home">
            <section class="hero">
                <h1>"Strategic HR" <br/> "Solutions for" <br/> "Business Growth"</h1>
                <p>
                    "We don't just fill positions\u{2014}we architect high-performing teams that drive your business forward. Comprehensive HR consulting tailored for corporate excellence."
                </p>
                <div class="hero-actions">
                    <A href="/contact" attr:class="btn-primary">"Start Partnership \u{2192}"</A>
                    <A href="/services" attr:class="btn-secondary">"Explore Services"</A>
                </div>
            </section>
            <section class="trust-bar">
                <p>"Trusted by Forward-Thinking Organizations"</p>
                <div class="audiences">{audiences}</div>
            </section>
            <section class="container services-preview">
                <h2>"Corporate HR Excellence"</h2>
                <p>
                    "Comprehensive human capital solutions designed to optimize your workforce and drive sustainable business growth."
                </p>
                <Suspense fallback=|| view! { <Loading/> }>
                    {move || {
                        services
                            .get()
                            .map(|result| view! { <ServiceTeasers services=or_empty("services", result)/> })
                    }}
                </Suspense>
            </section>
            <section class="container testimonials">
                <h2>"What Our Clients Say"</h2>
                <p>"Trusted by businesses that have transformed their HR operations with our expertise."</p>
                <Suspense fallback=|| view! { <Loading/> }>
                    {move || {
                        testimonials
                            .get()
                            .map(|result| {
                                view! {
                                    <TestimonialsMultiCarousel testimonials=or_empty("featured testimonials", result)/>
                                }
                            })
                    }}
                </Suspense>
            </section>
            <section class="container latest-insights">
                <h2>"Latest Insights"</h2>
                <Suspense fallback=|| view! { <Loading/> }>
                    {move || {
                        posts
                            .get()
                            .map(|result| view! { <InsightTeasers posts=or_empty("featured posts", result)/> })
                    }}
                </Suspense>
            </section>
            <section class="cta">
                <h2>"Ready to Transform Your HR Strategy?"</h2>
                <p>"Partner with us to build a workforce that drives measurable business results."</p>
                <A href="/contact" attr:class="btn-primary">"Schedule Executive Briefing"</A>
                <a href="tel:+2340000000000" class="btn-secondary">"Call Our Experts"</a>
            </section>
        </main>
    }
}

pub const NO_SERVICES: &str = "Our services are being updated. Please check back soon.";
pub const NO_INSIGHTS: &str = "No articles yet. Check back soon for expert HR insights.";

#[component]
fn ServiceTeasers(services: Vec<Service>) -> impl IntoView {
    if services.is_empty() {
        return view! { <p class="empty">{NO_SERVICES}</p> }.into_any();
    }
    services
        .into_iter()
        .map(|service| view! { <ServiceTeaser service/> })
        .collect_view()
        .into_any()
}

#[component]
fn InsightTeasers(posts: Vec<PostSummary>) -> impl IntoView {
    if posts.is_empty() {
        return view! { <p class="empty">{NO_INSIGHTS}</p> }.into_any();
    }
    posts
        .into_iter()
        .map(|post| {
            view! {
                <A href="/insights" attr:class="insight-teaser">
                    <h3>{post.title.clone()}</h3>
                    <p>{post.excerpt.clone()}</p>
                </A>
            }
        })
        .collect_view()
        .into_any()
}

#[component]
fn ServiceTeaser(service: Service) -> impl IntoView {
    let features = service
        .features
        .iter()
        .take(FEATURES_PREVIEW)
        .map(|feature| view! { <li>{feature.clone()}</li> })
        .collect_view();

    view! {
        <div class="service-card">
            <div class="service-icon">{service.icon().to_string()}</div>
            <div>
                <h3>{service.title.clone()}</h3>
                <p>{service.description.clone()}</p>
                <ul class="features">{features}</ul>
                <A href="/services">"Learn more \u{2192}"</A>
            </div>
        </div>
    }
}
