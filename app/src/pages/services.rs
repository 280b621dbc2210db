use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::Loading;
use crate::content::Service;
use crate::pages::or_empty;

#[server(GetServices, "/api/fn", "GetJson", "services")]
pub async fn get_services() -> Result<Vec<Service>, ServerFnError> {
    use crate::content::queries;

    let ctx = crate::pages::server_context()?;
    queries::services(ctx.content.as_ref(), ctx.cancellation())
        .await
        .map_err(crate::pages::server_error)
}

#[component]
pub fn Index() -> impl IntoView {
    let services = Resource::new(|| (), |_| get_services());

    view! {
        <Title text="Services"/>
        <main class="services">
            <section class="hero">
                <h1>"Our Services"</h1>
                <p>"Comprehensive human capital solutions designed to optimize your workforce."</p>
            </section>
            <section class="container services-grid">
                <Suspense fallback=|| view! { <Loading/> }>
                    {move || {
                        services
                            .get()
                            .map(|result| {
                                let services = or_empty("services", result);
                                if services.is_empty() {
                                    return view! {
                                        <p class="empty">"Our service catalogue is being updated. Please check back soon."</p>
                                    }
                                    .into_any();
                                }
                                services
                                    .into_iter()
                                    .map(|service| view! { <ServiceCard service/> })
                                    .collect_view()
                                    .into_any()
                            })
                    }}
                </Suspense>
            </section>
        </main>
    }
}

#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    let list = |items: &[String]| {
        items
            .iter()
            .map(|item| view! { <li>{item.clone()}</li> })
            .collect_view()
    };
    let features = (!service.features.is_empty()).then(|| {
        view! {
            <div class="features">
                <h4>"Key Features"</h4>
                <ul>{list(&service.features)}</ul>
            </div>
        }
    });
    let benefits = (!service.benefits.is_empty()).then(|| {
        view! {
            <div class="benefits">
                <h4>"Benefits"</h4>
                <ul>{list(&service.benefits)}</ul>
            </div>
        }
    });
    let cta = service
        .cta_text
        .clone()
        .unwrap_or_else(|| String::from("Learn more \u{2192}"));

    view! {
        <div class="service-card">
            <div class="service-icon">{service.icon().to_string()}</div>
            <h3>{service.title.clone()}</h3>
            <p>{service.description.clone()}</p>
            {features}
            {benefits}
            <A href="/contact">{cta}</A>
        </div>
    }
}
