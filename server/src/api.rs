//! The lead-form endpoints: each turns a submission into a mail and relays it.

use std::sync::Arc;

use app::forms::{ContactSubmission, TalentPoolSubmission, CONTACT_ENDPOINT, TALENT_POOL_ENDPOINT};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use crate::config::MailConfig;
use crate::relay::{Email, Notifier, RelayError};
use crate::templates::{ContactEmail, TalentPoolEmail};

const INTERNAL_ERROR: &str = "Internal server error";

#[derive(Clone, Debug)]
pub struct ApiState {
    pub notifier: Arc<dyn Notifier>,
    pub to: Vec<String>,
    pub contact_from: String,
    pub talent_pool_from: String,
}

impl ApiState {
    pub fn new(notifier: Arc<dyn Notifier>, mail: &MailConfig) -> Self {
        Self {
            notifier,
            to: mail.notify_to.clone(),
            contact_from: mail.contact_from.clone(),
            talent_pool_from: mail.talent_pool_from.clone(),
        }
    }
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route(CONTACT_ENDPOINT, post(contact))
        .route(TALENT_POOL_ENDPOINT, post(talent_pool))
        .with_state(state)
}

async fn contact(
    State(state): State<ApiState>,
    body: Result<Json<ContactSubmission>, JsonRejection>,
) -> Response {
    let Json(submission) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_body(CONTACT_ENDPOINT, rejection),
    };
    let template = ContactEmail::new(&submission);
    let email = Email {
        from: state.contact_from.clone(),
        to: state.to.clone(),
        subject: template.subject(),
        html: template.to_string(),
    };
    relay(state.notifier.as_ref(), &email).await
}

async fn talent_pool(
    State(state): State<ApiState>,
    body: Result<Json<TalentPoolSubmission>, JsonRejection>,
) -> Response {
    let Json(submission) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_body(TALENT_POOL_ENDPOINT, rejection),
    };
    let template = TalentPoolEmail::new(&submission);
    let email = Email {
        from: state.talent_pool_from.clone(),
        to: state.to.clone(),
        subject: template.subject(),
        html: template.to_string(),
    };
    relay(state.notifier.as_ref(), &email).await
}

async fn relay(notifier: &dyn Notifier, email: &Email) -> Response {
    match notifier.send(email).await {
        Ok(data) => {
            log::info!("Relayed `{}'", email.subject);
            Json(json!({ "success": true, "data": data })).into_response()
        }
        Err(RelayError::Rejected(error)) => {
            log::error!("Relay refused `{}': {error}", email.subject);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": error }))).into_response()
        }
        Err(error) => {
            log::error!("Could not relay `{}': {error}", email.subject);
            internal_error()
        }
    }
}

fn bad_body(endpoint: &str, rejection: JsonRejection) -> Response {
    log::warn!("{endpoint}: {rejection}");
    internal_error()
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": INTERNAL_ERROR })),
    )
        .into_response()
}
