//! Outgoing notification mail.

mod resend;

use async_trait::async_trait;
use serde::Serialize;

pub use resend::ResendClient;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Email {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

#[derive(thiserror::Error, Debug)]
pub enum RelayError {
    /// The relay answered but refused the message; holds its error object as-is.
    #[error("The relay refused the message: {0}")]
    Rejected(serde_json::Value),

    #[error("Could not reach the relay: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Something that can deliver an [`Email`].
#[async_trait]
pub trait Notifier: std::fmt::Debug + Send + Sync {
    /// Returns the relay's acknowledgment on success.
    async fn send(&self, email: &Email) -> Result<serde_json::Value, RelayError>;
}
