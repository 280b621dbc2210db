#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not reach the content store: {0}")]
    Transport(String),

    #[error("The content store answered {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Could not parse the result of `{query}': {error}")]
    Deserialize { query: &'static str, error: String },

    #[error("Query `{query}' was cancelled")]
    Cancelled { query: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
