pub mod api;
pub mod config;
pub mod relay;
pub mod sanity;
pub mod templates;
