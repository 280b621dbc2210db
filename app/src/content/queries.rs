//! The queries the site runs against the content store.
//!
//! Each one is a fixed GROQ template with at most one scalar parameter; filtering and ordering
//! happen in the store.

use serde::de::DeserializeOwned;

use crate::content::{
    Cancellation, ContentSource, Error, Job, Post, PostSummary, Query, Result, Service,
    Testimonial,
};

pub const BLOG_POSTS: &str = r#"*[_type == "post"] | order(publishedAt desc) {
  _id, title, slug, excerpt, mainImage, categories, publishedAt, readTime, author
}"#;

pub const BLOG_POST: &str = r#"*[_type == "post" && slug.current == $slug][0] {
  _id, title, slug, excerpt, mainImage, categories, publishedAt, readTime, author, body
}"#;

pub const FEATURED_POSTS: &str = r#"*[_type == "post"] | order(publishedAt desc)[0...3] {
  _id, title, slug, excerpt, mainImage, categories, publishedAt, readTime
}"#;

pub const TESTIMONIALS: &str = r#"*[_type == "testimonial"] | order(_createdAt desc) {
  _id, clientName, company, position, testimonial, rating, featured
}"#;

pub const FEATURED_TESTIMONIALS: &str = r#"*[_type == "testimonial" && featured == true] | order(_createdAt desc) {
  _id, clientName, company, position, testimonial, rating, featured
}"#;

pub const ACTIVE_JOBS: &str = r#"*[_type == "job" && isActive == true] | order(_createdAt desc) {
  _id, title, department, location, type, experience, description, requirements, isActive, deadline
}"#;

pub const SERVICES: &str = r#"*[_type == "service"] | order(order asc) {
  _id, title, description, icon, features, benefits, order, ctaText
}"#;

pub async fn blog_posts(
    source: &dyn ContentSource,
    cancel: Cancellation,
) -> Result<Vec<PostSummary>> {
    run(source, Query::new("blog_posts", BLOG_POSTS), cancel).await
}

pub async fn blog_post(
    source: &dyn ContentSource,
    slug: &str,
    cancel: Cancellation,
) -> Result<Option<Post>> {
    let query = Query::new("blog_post", BLOG_POST).param("slug", slug);
    run(source, query, cancel).await
}

pub async fn featured_posts(
    source: &dyn ContentSource,
    cancel: Cancellation,
) -> Result<Vec<PostSummary>> {
    run(source, Query::new("featured_posts", FEATURED_POSTS), cancel).await
}

pub async fn testimonials(
    source: &dyn ContentSource,
    cancel: Cancellation,
) -> Result<Vec<Testimonial>> {
    run(source, Query::new("testimonials", TESTIMONIALS), cancel).await
}

pub async fn featured_testimonials(
    source: &dyn ContentSource,
    cancel: Cancellation,
) -> Result<Vec<Testimonial>> {
    let query = Query::new("featured_testimonials", FEATURED_TESTIMONIALS);
    run(source, query, cancel).await
}

pub async fn active_jobs(source: &dyn ContentSource, cancel: Cancellation) -> Result<Vec<Job>> {
    run(source, Query::new("active_jobs", ACTIVE_JOBS), cancel).await
}

pub async fn services(source: &dyn ContentSource, cancel: Cancellation) -> Result<Vec<Service>> {
    run(source, Query::new("services", SERVICES), cancel).await
}

async fn run<T: DeserializeOwned>(
    source: &dyn ContentSource,
    query: Query,
    mut cancel: Cancellation,
) -> Result<T> {
    if cancel.is_cancelled() {
        return Err(Error::Cancelled { query: query.name });
    }
    log::debug!("running content query `{}'", query.name);
    let value = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            log::info!("dropping the result of `{}', the query was cancelled", query.name);
            return Err(Error::Cancelled { query: query.name });
        }
        value = source.fetch(&query) => value?,
    };
    serde_json::from_value(value).map_err(|error| Error::Deserialize {
        query: query.name,
        error: error.to_string(),
    })
}
