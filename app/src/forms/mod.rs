//! Lead-capture forms and the payloads they post to the notification endpoints.

mod contact;
mod talent_pool;

pub use contact::ContactForm;
pub use talent_pool::TalentPoolForm;

use serde::{Deserialize, Serialize};

pub const CONTACT_ENDPOINT: &str = "/api/contact";
pub const TALENT_POOL_ENDPOINT: &str = "/api/talent-pool";

pub const EXPERIENCE_LEVELS: &[&str] = &["0-2 years", "3-5 years", "6-10 years", "10+ years"];

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct TalentPoolSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// An optional form value, `None` when left blank.
pub fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Field values plus where the last submission stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState<T> {
    pub fields: T,
    /// What the form was opened with, restored after a successful submission.
    initial: T,
    status: SubmitStatus,
}

impl<T: Clone + Default> FormState<T> {
    pub fn with_fields(fields: T) -> Self {
        Self {
            initial: fields.clone(),
            fields,
            status: SubmitStatus::Idle,
        }
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Snapshot of the fields to send, `None` while a submission is already in flight.
    pub fn begin(&mut self) -> Option<T> {
        if self.is_submitting() {
            return None;
        }
        self.status = SubmitStatus::Submitting;
        Some(self.fields.clone())
    }

    /// Success resets the form to its initial fields; on error the fields stay so the user can
    /// resend.
    pub fn finish(&mut self, delivered: bool) {
        if delivered {
            self.fields = self.initial.clone();
            self.status = SubmitStatus::Success;
        } else {
            self.status = SubmitStatus::Error;
        }
    }
}

/// POST `body` as JSON to `url`, true on a 2xx answer.
pub async fn post_json<T: Serialize>(url: &str, body: &T) -> bool {
    cfg_if::cfg_if! {
        if #[cfg(feature = "hydrate")] {
            let request = match gloo_net::http::Request::post(url).json(body) {
                Ok(request) => request,
                Err(error) => {
                    log::error!("Could not encode the submission for {url}: {error}");
                    return false;
                }
            };
            match request.send().await {
                Ok(response) => {
                    if !response.ok() {
                        log::warn!("{url} answered {}", response.status());
                    }
                    response.ok()
                }
                Err(error) => {
                    log::warn!("Could not reach {url}: {error}");
                    false
                }
            }
        } else {
            let _ = body;
            log::warn!("Not posting to {url}: forms are only submitted from the browser");
            false
        }
    }
}
