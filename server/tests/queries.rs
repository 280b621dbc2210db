use std::sync::Mutex;
use std::time::Duration;

use app::content::{queries, Cancellation, ContentSource, Error, Query, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::watch;

/// Answers every query with `answer` and remembers what it was asked.
#[derive(Debug)]
struct FakeSource {
    answer: Value,
    asked: Mutex<Vec<Query>>,
}

impl FakeSource {
    fn new(answer: Value) -> Self {
        Self {
            answer,
            asked: Mutex::new(vec![]),
        }
    }

    fn asked(&self) -> Vec<Query> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentSource for FakeSource {
    async fn fetch(&self, query: &Query) -> Result<Value> {
        self.asked.lock().unwrap().push(query.clone());
        Ok(self.answer.clone())
    }
}

/// Never answers.
#[derive(Debug)]
struct StalledSource;

#[async_trait]
impl ContentSource for StalledSource {
    async fn fetch(&self, _query: &Query) -> Result<Value> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn blog_post_passes_the_slug() {
    let source = FakeSource::new(json!({
        "_id": "p1",
        "title": "Hiring 101",
        "slug": { "current": "hiring-101" },
        "excerpt": "Start here.",
        "categories": ["Recruitment"],
        "publishedAt": "2025-01-15T09:00:00Z",
        "body": [
            { "_type": "block", "children": [{ "text": "First paragraph." }] },
            { "_type": "image" }
        ]
    }));

    let post = queries::blog_post(&source, "hiring-101", Cancellation::never())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(post.summary.slug, "hiring-101");
    assert_eq!(post.summary.display_date().as_deref(), Some("January 15, 2025"));
    assert_eq!(post.paragraphs().collect::<Vec<_>>(), vec!["First paragraph."]);

    let asked = source.asked();
    assert_eq!(asked.len(), 1);
    assert_eq!(asked[0].name, "blog_post");
    assert_eq!(asked[0].groq, queries::BLOG_POST);
    assert_eq!(asked[0].params, vec![("slug", json!("hiring-101"))]);
}

#[tokio::test]
async fn unknown_slug_is_none() {
    let source = FakeSource::new(Value::Null);
    let post = queries::blog_post(&source, "missing", Cancellation::never())
        .await
        .unwrap();
    assert!(post.is_none());
}

#[tokio::test]
async fn listings_take_no_parameters() {
    let source = FakeSource::new(json!([
        { "_id": "s1", "title": "HR Advisory", "features": ["Audits", "Policies"], "order": 1 },
        { "_id": "s2", "title": "Executive Recruitment", "icon": "\u{1f3af}", "features": null, "order": 2 }
    ]));

    let services = queries::services(&source, Cancellation::never()).await.unwrap();

    assert_eq!(services.len(), 2);
    assert_eq!(services[0].icon(), "\u{1f4bc}");
    assert_eq!(services[1].icon(), "\u{1f3af}");
    assert!(services[1].features.is_empty());
    assert!(source.asked()[0].params.is_empty());
}

#[tokio::test]
async fn shape_mismatch_names_the_query() {
    let source = FakeSource::new(json!({ "not": "a list" }));
    let error = queries::active_jobs(&source, Cancellation::never())
        .await
        .unwrap_err();
    assert!(matches!(error, Error::Deserialize { query: "active_jobs", .. }));
}

#[tokio::test]
async fn cancelled_before_start_never_asks() {
    let source = FakeSource::new(json!([]));
    let (tx, rx) = watch::channel(false);
    tx.send(true).unwrap();

    let error = queries::testimonials(&source, Cancellation::new(rx))
        .await
        .unwrap_err();

    assert!(matches!(error, Error::Cancelled { query: "testimonials" }));
    assert!(source.asked().is_empty());
}

#[tokio::test]
async fn cancellation_interrupts_a_pending_query() {
    let (tx, rx) = watch::channel(false);
    let query = tokio::spawn(async move {
        queries::featured_posts(&StalledSource, Cancellation::new(rx)).await
    });

    tokio::time::sleep(Duration::from_millis(10)).await;
    tx.send(true).unwrap();

    let error = tokio::time::timeout(Duration::from_secs(5), query)
        .await
        .expect("the query should stop once cancelled")
        .unwrap()
        .unwrap_err();
    assert!(matches!(error, Error::Cancelled { query: "featured_posts" }));
}

#[tokio::test]
async fn null_attributes_read_as_blanks() {
    let source = FakeSource::new(json!([{
        "_id": "p1",
        "title": "Hiring 101",
        "slug": { "current": "hiring-101" },
        "excerpt": null,
        "categories": null,
        "publishedAt": null,
        "readTime": null
    }]));
    let posts = queries::blog_posts(&source, Cancellation::never()).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].excerpt, "");
    assert!(posts[0].categories.is_empty());

    let source = FakeSource::new(json!([{
        "_id": "t1",
        "clientName": "Ada",
        "company": null,
        "testimonial": "Great partner.",
        "rating": null,
        "featured": null
    }]));
    let testimonials = queries::testimonials(&source, Cancellation::never()).await.unwrap();
    assert_eq!(testimonials[0].stars(), 0);
    assert!(!testimonials[0].featured);

    let source = FakeSource::new(json!([{
        "_id": "j1",
        "title": "HR Generalist",
        "department": null,
        "location": null,
        "type": null,
        "experience": null,
        "description": null,
        "requirements": null,
        "isActive": null,
        "deadline": null
    }]));
    let jobs = queries::active_jobs(&source, Cancellation::never()).await.unwrap();
    assert_eq!(jobs[0].department, "");
    assert_eq!(jobs[0].kind, "");
    assert!(jobs[0].display_deadline().is_none());

    let source = FakeSource::new(json!([{ "_id": "s1", "title": "HR Advisory", "description": null }]));
    let services = queries::services(&source, Cancellation::never()).await.unwrap();
    assert_eq!(services[0].description, "");
}
