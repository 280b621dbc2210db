//! [`ContentSource`] backed by the Sanity HTTP query API.

use app::content::{ContentSource, Error, Query, Result};
use async_trait::async_trait;

use crate::config::SanityConfig;

#[derive(Clone)]
pub struct SanityClient {
    http: reqwest::Client,
    /// Everything up to and including the dataset, e.g.
    /// `https://abc123.apicdn.sanity.io/v2024-01-01/data/query/production`.
    endpoint: String,
    token: Option<String>,
}

impl SanityClient {
    pub fn new(config: &SanityConfig) -> Self {
        let host = if config.use_cdn { "apicdn" } else { "api" };
        let base_url = format!("https://{}.{host}.sanity.io", config.project_id);
        Self::with_base_url(&base_url, config)
    }

    /// Like [`SanityClient::new`] but against `base_url` instead of the project host.
    pub fn with_base_url(base_url: &str, config: &SanityConfig) -> Self {
        let endpoint = format!(
            "{}/v{}/data/query/{}",
            base_url.trim_end_matches('/'),
            config.api_version,
            config.dataset,
        );
        Self {
            http: reqwest::Client::new(),
            endpoint,
            token: config.token.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for SanityClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SanityClient")
            .field("endpoint", &self.endpoint)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Query string for `query`: the GROQ text, then each parameter as `$name=<json>`.
fn query_pairs(query: &Query) -> Vec<(String, String)> {
    std::iter::once((String::from("query"), query.groq.to_string()))
        .chain(
            query
                .params
                .iter()
                .map(|(name, value)| (format!("${name}"), value.to_string())),
        )
        .collect()
}

#[derive(serde::Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: serde_json::Value,
}

#[async_trait]
impl ContentSource for SanityClient {
    async fn fetch(&self, query: &Query) -> Result<serde_json::Value> {
        let mut request = self.http.get(&self.endpoint).query(&query_pairs(query));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let transport = |error: reqwest::Error| Error::Transport(error.to_string());
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let response: QueryResponse = response.json().await.map_err(|error| Error::Deserialize {
            query: query.name,
            error: error.to_string(),
        })?;
        log::debug!("{} answered `{}'", self.endpoint, query.name);
        Ok(response.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(use_cdn: bool) -> SanityConfig {
        SanityConfig {
            project_id: String::from("abc123"),
            dataset: String::from("production"),
            api_version: String::from("2024-01-01"),
            use_cdn,
            token: None,
        }
    }

    #[test]
    fn endpoint_follows_cdn_flag() {
        assert_eq!(
            SanityClient::new(&config(true)).endpoint(),
            "https://abc123.apicdn.sanity.io/v2024-01-01/data/query/production"
        );
        assert_eq!(
            SanityClient::new(&config(false)).endpoint(),
            "https://abc123.api.sanity.io/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn parameters_are_json_encoded() {
        let query = Query::new("blog_post", "*[slug.current == $slug][0]")
            .param("slug", serde_json::json!("hiring-101"));
        assert_eq!(
            query_pairs(&query),
            vec![
                (String::from("query"), String::from("*[slug.current == $slug][0]")),
                (String::from("$slug"), String::from("\"hiring-101\"")),
            ]
        );
    }
}
