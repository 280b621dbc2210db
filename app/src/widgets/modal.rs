//! The article overlay of the insights page.

use leptos::either::EitherOf3;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::Post;
use crate::widgets::overlay::{Document, OverlayGuard};

/// Identifies one fetch issued by [`BlogModalState::open`]. Answers carrying an outdated ticket
/// are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalView {
    #[default]
    Closed,
    Loading {
        slug: String,
    },
    Loaded(Box<Post>),
    NotFound {
        slug: String,
    },
}

/// `Closed -> Loading -> (Loaded | NotFound) -> Closed`, closable from any state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlogModalState {
    view: ModalView,
    issued: u64,
}

impl BlogModalState {
    pub fn view(&self) -> &ModalView {
        &self.view
    }

    pub fn is_open(&self) -> bool {
        self.view != ModalView::Closed
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.view, ModalView::Loading { .. })
    }

    /// Start showing `slug`, the caller fetches the post and hands it to [`Self::resolve`].
    pub fn open(&mut self, slug: impl Into<String>) -> Option<Ticket> {
        let slug = slug.into();
        if slug.is_empty() {
            return None;
        }
        self.issued += 1;
        self.view = ModalView::Loading { slug };
        Some(Ticket(self.issued))
    }

    /// Returns false when the answer is stale: the modal was closed or reopened since.
    pub fn resolve(&mut self, ticket: Ticket, post: Option<Post>) -> bool {
        if ticket.0 != self.issued {
            return false;
        }
        let slug = match &self.view {
            ModalView::Loading { slug } => slug.clone(),
            _ => return false,
        };
        self.view = match post {
            Some(post) => ModalView::Loaded(Box::new(post)),
            None => ModalView::NotFound { slug },
        };
        true
    }

    pub fn close(&mut self) {
        // Invalidates the ticket of a fetch still in flight.
        self.issued += 1;
        self.view = ModalView::Closed;
    }
}

#[server(GetBlogPost, "/api/fn", "GetJson", "post")]
pub async fn get_blog_post(slug: String) -> Result<Option<Post>, ServerFnError> {
    use crate::content::queries;

    let ctx = crate::pages::server_context()?;
    queries::blog_post(ctx.content.as_ref(), &slug, ctx.cancellation())
        .await
        .map_err(crate::pages::server_error)
}

/// Open the modal on `slug` and load the post in the background.
pub fn open_post(state: RwSignal<BlogModalState>, slug: String) {
    let Some(Some(ticket)) = state.try_update(|modal| modal.open(slug.clone())) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let post = get_blog_post(slug.clone()).await.unwrap_or_else(|error| {
            log::warn!("Could not load post `{slug}': {error}");
            None
        });
        // The page may be gone by now, in which case there is nothing to update.
        state.try_update(|modal| modal.resolve(ticket, post));
    });
}

#[component]
pub fn BlogModal(state: RwSignal<BlogModalState>) -> impl IntoView {
    let close = move || state.update(BlogModalState::close);

    // Dropped with the component's owner, which releases the scroll lock and the key binding.
    let guard = StoredValue::new_local(None::<OverlayGuard<Document>>);
    Effect::new(move |_| {
        let open = state.with(BlogModalState::is_open);
        guard.update_value(|guard| {
            if !open {
                guard.take();
            } else if guard.is_none() {
                *guard = Some(OverlayGuard::acquire(Document, close));
            }
        });
    });

    let body = move || match state.with(|modal| modal.view().clone()) {
        ModalView::Closed | ModalView::Loading { .. } => EitherOf3::A(view! {
            <div class="modal-loading"><div class="spinner"></div></div>
        }),
        ModalView::Loaded(post) => EitherOf3::B(view! { <PostArticle post=*post on_close=close/> }),
        ModalView::NotFound { .. } => EitherOf3::C(view! {
            <div class="modal-not-found">
                <p>"Post not found."</p>
                <button on:click=move |_| close()>"Close"</button>
            </div>
        }),
    };

    view! {
        <Show when=move || state.with(BlogModalState::is_open)>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal" on:click=|event| event.stop_propagation()>
                    <button class="modal-close" aria-label="Close modal" on:click=move |_| close()>
                        "\u{d7}"
                    </button>
                    {body}
                </div>
            </div>
        </Show>
    }
}

#[component]
fn PostArticle<F>(post: Post, on_close: F) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    let summary = post.summary.clone();
    let paragraphs = post
        .paragraphs()
        .map(|text| view! { <p>{text.to_string()}</p> })
        .collect_view();
    let categories = summary
        .categories
        .iter()
        .map(|category| view! { <span class="category-chip">{category.clone()}</span> })
        .collect_view();
    let meta = [
        summary.read_time.clone(),
        summary.display_date(),
        summary.author.as_ref().map(|author| format!("By {author}")),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<String>>()
    .join(" \u{2022} ");

    view! {
        <article class="modal-article">
            <header class="modal-header">
                <div class="categories">{categories}</div>
                <h1>{summary.title.clone()}</h1>
                <p class="post-meta">{meta}</p>
            </header>
            <div class="modal-content">
                <p class="post-excerpt">{summary.excerpt.clone()}</p>
                <div class="post-body">{paragraphs}</div>
                <div class="post-cta">
                    <h3>"Need Professional HR Guidance?"</h3>
                    <p>"Let\u{2019}s discuss how we can help optimize your human capital strategy."</p>
                    <A href="/contact" on:click=move |_| on_close()>"Schedule Consultation"</A>
                </div>
            </div>
        </article>
    }
}
