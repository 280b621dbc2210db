use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::Loading;
use crate::content::Job;
use crate::pages::or_empty;

const APPLY_HREF: &str = "/contact?subject=Job Application";
const TALENT_POOL_HREF: &str = "/contact?type=talent-pool";

#[server(GetActiveJobs, "/api/fn", "GetJson", "active_jobs")]
pub async fn get_active_jobs() -> Result<Vec<Job>, ServerFnError> {
    use crate::content::queries;

    let ctx = crate::pages::server_context()?;
    queries::active_jobs(ctx.content.as_ref(), ctx.cancellation())
        .await
        .map_err(crate::pages::server_error)
}

#[component]
pub fn Index() -> impl IntoView {
    let jobs = Resource::new(|| (), |_| get_active_jobs());

    view! {
        <Title text="Careers"/>
        <main class="careers">
            <section class="hero">
                <h1>"Join Our Network"</h1>
                <p>"Explore current opportunities with our clients and partner organizations."</p>
            </section>
            <section class="container openings">
                <h2>"Current Openings"</h2>
                <Suspense fallback=|| view! { <Loading/> }>
                    {move || {
                        jobs.get()
                            .map(|result| {
                                let jobs = or_empty("active jobs", result);
                                if jobs.is_empty() {
                                    return view! {
                                        <div class="empty">
                                            <p>"No current openings at the moment."</p>
                                            <p class="muted">"Please check back later or join our talent pool."</p>
                                        </div>
                                    }
                                    .into_any();
                                }
                                jobs.into_iter()
                                    .map(|job| view! { <JobCard job/> })
                                    .collect_view()
                                    .into_any()
                            })
                    }}
                </Suspense>
            </section>
            <section class="cta">
                <h2>"Don't See the Right Role?"</h2>
                <p>"Join our talent pool and we'll reach out when a matching opportunity comes up."</p>
                <A href=TALENT_POOL_HREF attr:class="btn-primary">"Join Talent Pool"</A>
            </section>
        </main>
    }
}

#[component]
fn JobCard(job: Job) -> impl IntoView {
    let requirements = (!job.requirements.is_empty()).then(|| {
        let items = job
            .requirements
            .iter()
            .map(|requirement| view! { <li>{requirement.clone()}</li> })
            .collect_view();
        view! {
            <div class="requirements">
                <h4>"Requirements"</h4>
                <ul>{items}</ul>
            </div>
        }
    });
    let deadline = job
        .display_deadline()
        .map(|date| view! { <p class="deadline">"Application deadline: " {date}</p> });

    view! {
        <article class="job-card">
            <header>
                <h3>{job.title.clone()}</h3>
                <div class="job-meta">
                    <span>{job.department.clone()}</span>
                    <span>{job.location.clone()}</span>
                    <span>{job.kind.clone()}</span>
                    <span>{job.experience.clone()}</span>
                </div>
            </header>
            <p>{job.description.clone()}</p>
            {requirements}
            {deadline}
            <A href=APPLY_HREF attr:class="btn-primary">"Apply Now"</A>
        </article>
    }
}
