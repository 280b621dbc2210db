//! Runtime configuration, read from the environment (a `.env` file is honoured).

use std::env;

use anyhow::{anyhow, Result};

pub const DEFAULT_DATASET: &str = "production";
pub const DEFAULT_API_VERSION: &str = "2024-01-01";
pub const DEFAULT_RESEND_BASE_URL: &str = "https://api.resend.com";
pub const DEFAULT_NOTIFY_TO: &str = "aremusulaiman2002@gmail.com";
pub const DEFAULT_CONTACT_FROM: &str = "JMB The Oga HR <onboarding@resend.dev>";
pub const DEFAULT_TALENT_POOL_FROM: &str = "JMB Talent Pool <onboarding@resend.dev>";

#[derive(Debug, Clone)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    /// Query API version, a date such as `2024-01-01`.
    pub api_version: String,
    /// Query the `apicdn` host instead of the live API.
    pub use_cdn: bool,
    pub token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub api_key: String,
    pub base_url: String,
    pub notify_to: Vec<String>,
    pub contact_from: String,
    pub talent_pool_from: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub sanity: SanityConfig,
    pub mail: MailConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &str| var(name).ok_or_else(|| anyhow!("{name} must be set"));
        let or_default = |name: &str, default: &str| var(name).unwrap_or_else(|| default.to_string());

        let use_cdn = match var("SANITY_USE_CDN") {
            None => true,
            Some(value) => parse_bool(&value)
                .ok_or_else(|| anyhow!("SANITY_USE_CDN must be true or false, got `{value}'"))?,
        };
        let sanity = SanityConfig {
            project_id: required("SANITY_PROJECT_ID")?,
            dataset: or_default("SANITY_DATASET", DEFAULT_DATASET),
            api_version: or_default("SANITY_API_VERSION", DEFAULT_API_VERSION),
            use_cdn,
            token: var("SANITY_API_TOKEN"),
        };

        let notify_to: Vec<String> = or_default("NOTIFY_TO", DEFAULT_NOTIFY_TO)
            .split(',')
            .map(str::trim)
            .filter(|address| !address.is_empty())
            .map(String::from)
            .collect();
        if notify_to.is_empty() {
            return Err(anyhow!("NOTIFY_TO must name at least one address"));
        }
        let mail = MailConfig {
            api_key: required("RESEND_API_KEY")?,
            base_url: or_default("RESEND_BASE_URL", DEFAULT_RESEND_BASE_URL),
            notify_to,
            contact_from: or_default("CONTACT_FROM", DEFAULT_CONTACT_FROM),
            talent_pool_from: or_default("TALENT_POOL_FROM", DEFAULT_TALENT_POOL_FROM),
        };

        Ok(Self { sanity, mail })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::from_lookup(lookup(&[
            ("SANITY_PROJECT_ID", "abc123"),
            ("RESEND_API_KEY", "re_test"),
        ]))
        .unwrap();

        assert_eq!(config.sanity.project_id, "abc123");
        assert_eq!(config.sanity.dataset, "production");
        assert_eq!(config.sanity.api_version, "2024-01-01");
        assert!(config.sanity.use_cdn);
        assert!(config.sanity.token.is_none());
        assert_eq!(config.mail.base_url, "https://api.resend.com");
        assert_eq!(config.mail.notify_to, vec!["aremusulaiman2002@gmail.com"]);
        assert_eq!(config.mail.contact_from, DEFAULT_CONTACT_FROM);
        assert_eq!(config.mail.talent_pool_from, DEFAULT_TALENT_POOL_FROM);
    }

    #[test]
    fn test_missing_required_variable_is_named() {
        let error = Config::from_lookup(lookup(&[("SANITY_PROJECT_ID", "abc123")])).unwrap_err();
        assert!(error.to_string().contains("RESEND_API_KEY"));

        let error = Config::from_lookup(lookup(&[("RESEND_API_KEY", "re_test")])).unwrap_err();
        assert!(error.to_string().contains("SANITY_PROJECT_ID"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("SANITY_PROJECT_ID", "abc123"),
            ("SANITY_DATASET", "staging"),
            ("SANITY_USE_CDN", "false"),
            ("SANITY_API_TOKEN", "sk_read"),
            ("RESEND_API_KEY", "re_test"),
            ("NOTIFY_TO", "hr@example.com, ops@example.com ,"),
        ]))
        .unwrap();

        assert_eq!(config.sanity.dataset, "staging");
        assert!(!config.sanity.use_cdn);
        assert_eq!(config.sanity.token.as_deref(), Some("sk_read"));
        assert_eq!(config.mail.notify_to, vec!["hr@example.com", "ops@example.com"]);
    }

    #[test]
    fn test_bad_cdn_flag() {
        let error = Config::from_lookup(lookup(&[
            ("SANITY_PROJECT_ID", "abc123"),
            ("SANITY_USE_CDN", "maybe"),
            ("RESEND_API_KEY", "re_test"),
        ]))
        .unwrap_err();
        assert!(error.to_string().contains("SANITY_USE_CDN"));
    }
}
