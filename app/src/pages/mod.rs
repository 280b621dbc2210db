pub mod about;
pub mod careers;
pub mod contact;
pub mod home;
pub mod insights;
pub mod services;

use leptos::prelude::*;

#[cfg(feature = "ssr")]
pub(crate) fn server_context() -> Result<crate::context::Context, ServerFnError> {
    use_context::<crate::context::Context>()
        .ok_or_else(|| ServerFnError::ServerError(String::from("missing server context")))
}

#[cfg(feature = "ssr")]
pub(crate) fn server_error(error: crate::content::Error) -> ServerFnError {
    log::error!("{error}");
    ServerFnError::ServerError(error.to_string())
}

/// A list that could not be fetched renders like an empty one.
pub(crate) fn or_empty<T>(what: &str, result: Result<Vec<T>, ServerFnError>) -> Vec<T> {
    result.unwrap_or_else(|error| {
        log::warn!("Could not load {what}: {error}");
        vec![]
    })
}
