use std::sync::Arc;

use leptos::prelude::LeptosOptions;
use tokio::sync::watch;

use crate::content::{Cancellation, ContentSource};

/// Shared by the page routes and the server functions.
#[derive(Clone, Debug)]
pub struct Context {
    pub leptos_options: LeptosOptions,
    pub content: Arc<dyn ContentSource>,
    /// Flips to `true` once the server starts shutting down.
    pub shutdown: watch::Receiver<bool>,
}

impl Context {
    pub fn cancellation(&self) -> Cancellation {
        Cancellation::new(self.shutdown.clone())
    }
}

// Looks like we could use `derive(FromRef)` on `Context` if we enabled the macros feature on axum.
impl axum::extract::FromRef<Context> for LeptosOptions {
    fn from_ref(value: &Context) -> Self {
        value.leptos_options.clone()
    }
}
