#[cfg(feature = "ssr")]
pub mod errors;
mod models;
#[cfg(feature = "ssr")]
pub mod queries;
#[cfg(feature = "ssr")]
mod source;

#[cfg(feature = "ssr")]
pub use errors::{Error, Result};
pub use models::{Block, Job, Post, PostSummary, Service, Span, Testimonial, DISPLAY_DATE_FORMAT};
#[cfg(feature = "ssr")]
pub use source::{Cancellation, ContentSource, Query};
