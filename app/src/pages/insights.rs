use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::Loading;
use crate::content::PostSummary;
use crate::pages::or_empty;
use crate::widgets::modal::{open_post, BlogModal, BlogModalState};

pub const ALL_CATEGORIES: &str = "All";

pub const CATEGORIES: &[&str] = &[
    ALL_CATEGORIES,
    "Recruitment",
    "HR Strategy",
    "Compliance",
    "Talent Management",
    "Startup HR",
];

#[server(GetBlogPosts, "/api/fn", "GetJson", "posts")]
pub async fn get_blog_posts() -> Result<Vec<PostSummary>, ServerFnError> {
    use crate::content::queries;

    let ctx = crate::pages::server_context()?;
    queries::blog_posts(ctx.content.as_ref(), ctx.cancellation())
        .await
        .map_err(crate::pages::server_error)
}

/// Whether `post` belongs under the `category` chip.
pub fn in_category(post: &PostSummary, category: &str) -> bool {
    category == ALL_CATEGORIES || post.categories.iter().any(|name| name == category)
}

#[component]
pub fn Index() -> impl IntoView {
    let posts = Resource::new(|| (), |_| get_blog_posts());
    let selected = RwSignal::new(ALL_CATEGORIES);
    let modal = RwSignal::new(BlogModalState::default());

    let chips = CATEGORIES
        .iter()
        .map(|category| {
            let category = *category;
            view! {
                <button
                    class=move || if selected.get() == category { "chip active" } else { "chip" }
                    on:click=move |_| selected.set(category)
                >
                    {category}
                </button>
            }
        })
        .collect_view();

    view! {
        <Title text="Insights"/>
        <main class="insights">
            <section class="hero">
                <h1>"HR Insights"</h1>
                <p>"Expert perspectives on recruitment, HR strategy, compliance and building teams that scale."</p>
            </section>
            <section class="container">
                <div class="chips">{chips}</div>
                <Suspense fallback=|| view! { <Loading/> }>
                    {move || {
                        posts
                            .get()
                            .map(|result| {
                                let category = selected.get();
                                let posts: Vec<_> = or_empty("posts", result)
                                    .into_iter()
                                    .filter(|post| in_category(post, category))
                                    .collect();
                                if posts.is_empty() {
                                    return view! {
                                        <div class="empty">
                                            <p>"No articles yet"</p>
                                            <p class="muted">"Check back soon for expert HR insights."</p>
                                        </div>
                                    }
                                    .into_any();
                                }
                                view! {
                                    <div class="post-grid">
                                        {posts
                                            .into_iter()
                                            .map(|post| view! { <PostCard post modal/> })
                                            .collect_view()}
                                    </div>
                                }
                                .into_any()
                            })
                    }}
                </Suspense>
            </section>
            <BlogModal state=modal/>
        </main>
    }
}

#[component]
fn PostCard(post: PostSummary, modal: RwSignal<BlogModalState>) -> impl IntoView {
    let category = post.primary_category().map(|name| view! { <span class="category">{name.to_string()}</span> });
    let date = post.display_date().map(|date| view! { <time>{date}</time> });
    let slug = post.slug.clone();

    view! {
        <article class="post-card" on:click=move |_| open_post(modal, slug.clone())>
            {category}
            <h3>{post.title.clone()}</h3>
            <p>{post.excerpt.clone()}</p>
            {date}
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(categories: &[&str]) -> PostSummary {
        PostSummary {
            id: String::from("p1"),
            title: String::from("Hiring at scale"),
            slug: String::from("hiring-at-scale"),
            excerpt: String::new(),
            categories: categories.iter().map(|name| name.to_string()).collect(),
            published_at: None,
            read_time: None,
            author: None,
        }
    }

    #[test]
    fn all_matches_uncategorised_posts() {
        assert!(in_category(&post(&[]), ALL_CATEGORIES));
    }

    #[test]
    fn chip_matches_any_category_of_the_post() {
        let post = post(&["Compliance", "Startup HR"]);
        assert!(in_category(&post, "Startup HR"));
        assert!(!in_category(&post, "Recruitment"));
    }
}
