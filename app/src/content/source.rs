use tokio::sync::watch;

use crate::content::Result;

/// A named, parameterized, read-only query against the content store.
#[derive(Clone, Debug, PartialEq)]
pub struct Query {
    pub name: &'static str,
    pub groq: &'static str,
    pub params: Vec<(&'static str, serde_json::Value)>,
}

impl Query {
    pub fn new(name: &'static str, groq: &'static str) -> Self {
        Self {
            name,
            groq,
            params: vec![],
        }
    }

    pub fn param(mut self, name: &'static str, value: impl Into<serde_json::Value>) -> Self {
        self.params.push((name, value.into()));
        self
    }
}

/// Read capability over the hosted content store.
#[async_trait::async_trait]
pub trait ContentSource: std::fmt::Debug + Send + Sync {
    /// Run `query` and return the `result` member of the store's answer, `null` when a
    /// single-item query matched nothing.
    async fn fetch(&self, query: &Query) -> Result<serde_json::Value>;
}

/// Fires once the owner of the matching sender stops caring about in-flight queries.
#[derive(Clone, Debug)]
pub struct Cancellation(watch::Receiver<bool>);

impl Cancellation {
    pub fn new(receiver: watch::Receiver<bool>) -> Self {
        Self(receiver)
    }

    pub fn never() -> Self {
        let (_, receiver) = watch::channel(false);
        Self(receiver)
    }

    pub fn is_cancelled(&self) -> bool {
        *self.0.borrow()
    }

    /// Resolves when cancelled; never resolves if the sender went away without cancelling.
    pub async fn cancelled(&mut self) {
        let closed = self.0.wait_for(|cancelled| *cancelled).await.is_err();
        if closed {
            std::future::pending::<()>().await;
        }
    }
}
