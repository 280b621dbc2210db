use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use server::api::{router, ApiState};
use server::relay::{Email, Notifier, RelayError};

#[derive(Debug)]
enum Reply {
    Ack,
    Reject(Value),
}

/// Records every mail it is handed and answers with `reply`.
#[derive(Debug)]
struct FakeNotifier {
    sent: Mutex<Vec<Email>>,
    reply: Reply,
}

impl FakeNotifier {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(vec![]),
            reply,
        })
    }

    fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for FakeNotifier {
    async fn send(&self, email: &Email) -> Result<Value, RelayError> {
        self.sent.lock().unwrap().push(email.clone());
        match &self.reply {
            Reply::Ack => Ok(json!({ "id": "4ef9a417-02e9-4d39-ad75-9611e0fcc33c" })),
            Reply::Reject(error) => Err(RelayError::Rejected(error.clone())),
        }
    }
}

fn state(notifier: Arc<FakeNotifier>) -> ApiState {
    ApiState {
        notifier,
        to: vec![String::from("hr@example.com")],
        contact_from: String::from("Site <site@example.com>"),
        talent_pool_from: String::from("Talent <talent@example.com>"),
    }
}

async fn post(notifier: Arc<FakeNotifier>, uri: &str, body: &str) -> (StatusCode, Value) {
    let _ = env_logger::builder().is_test(true).try_init();
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = router(state(notifier)).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn contact_is_relayed() {
    let notifier = FakeNotifier::new(Reply::Ack);
    let (status, body) = post(
        notifier.clone(),
        "/api/contact",
        r#"{"name": "Ada", "email": "ada@example.com", "company": "Acme"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["id"], json!("4ef9a417-02e9-4d39-ad75-9611e0fcc33c"));

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].from, "Site <site@example.com>");
    assert_eq!(sent[0].to, vec!["hr@example.com"]);
    assert_eq!(sent[0].subject, "New Contact Form Submission from Ada");
    assert!(sent[0].html.contains("Acme"));
    assert!(sent[0].html.contains("No message provided"));
}

#[tokio::test]
async fn contact_subject_is_kept() {
    let notifier = FakeNotifier::new(Reply::Ack);
    let (status, _) = post(
        notifier.clone(),
        "/api/contact",
        r#"{"name": "Ada", "email": "ada@example.com", "subject": "Job Application"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(notifier.sent()[0].subject, "Job Application");
}

#[tokio::test]
async fn talent_pool_fills_in_missing_fields() {
    let notifier = FakeNotifier::new(Reply::Ack);
    let (status, body) = post(
        notifier.clone(),
        "/api/talent-pool",
        r#"{"name": "Jane", "email": "jane@x.com", "phone": "+234000"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    let sent = notifier.sent();
    assert_eq!(sent[0].from, "Talent <talent@example.com>");
    assert_eq!(sent[0].subject, "New Talent Pool Registration: Jane");
    assert_eq!(sent[0].html.matches("Not specified").count(), 3);
    assert!(sent[0].html.contains("No additional message"));
}

#[tokio::test]
async fn markup_in_fields_is_escaped() {
    let notifier = FakeNotifier::new(Reply::Ack);
    post(
        notifier.clone(),
        "/api/contact",
        r#"{"name": "Eve", "email": "eve@example.com", "message": "<script>alert(1)</script>"}"#,
    )
    .await;

    let html = &notifier.sent()[0].html;
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn relay_refusal_is_passed_through() {
    let refusal = json!({ "statusCode": 422, "name": "validation_error", "message": "Invalid `to` field." });
    let notifier = FakeNotifier::new(Reply::Reject(refusal.clone()));
    let (status, body) = post(
        notifier,
        "/api/talent-pool",
        r#"{"name": "Jane", "email": "jane@x.com", "phone": "+234000"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": refusal }));
}

#[tokio::test]
async fn malformed_body_is_an_internal_error() {
    let notifier = FakeNotifier::new(Reply::Ack);
    let (status, body) = post(notifier.clone(), "/api/contact", "{not json").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));
    assert!(notifier.sent().is_empty());
}
