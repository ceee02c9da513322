use std::time::Duration;

use crate::error::{Error, Result};

/// Reddit client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub user_agent: String,
    /// Bearer token sent on every request. It is never refreshed.
    pub access_token: Option<String>,
    pub timeout: Option<Duration>,
}

impl Config {
    /// Default API base URL for authenticated requests
    pub const DEFAULT_BASE_URL: &'static str = "https://oauth.reddit.com/";

    /// Default User-Agent, Reddit rejects requests without one
    pub const DEFAULT_USER_AGENT: &'static str =
        concat!("snoo/", env!("CARGO_PKG_VERSION"), " (by cloudbridgeuy)");

    /// Load configuration from environment variables
    ///
    /// Uses REDDIT_BASE_URL and REDDIT_USER_AGENT with default fallbacks.
    /// REDDIT_ACCESS_TOKEN and REDDIT_TIMEOUT_SECS are optional.
    pub fn from_env() -> Result<Self> {
        let timeout = match std::env::var("REDDIT_TIMEOUT_SECS") {
            Ok(secs) => Some(parse_timeout(&secs)?),
            Err(_) => None,
        };

        Ok(Self {
            base_url: std::env::var("REDDIT_BASE_URL")
                .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string()),
            user_agent: std::env::var("REDDIT_USER_AGENT")
                .unwrap_or_else(|_| Self::DEFAULT_USER_AGENT.to_string()),
            access_token: std::env::var("REDDIT_ACCESS_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
            timeout,
        })
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        access_token: Option<String>,
        timeout: Option<Duration>,
    ) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(token) = access_token {
            self.access_token = Some(token);
        }
        if let Some(timeout) = timeout {
            self.timeout = Some(timeout);
        }
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// The base URL with a trailing slash, so relative paths join under it.
    pub fn normalized_base_url(&self) -> String {
        let trimmed = self.base_url.trim_end_matches('/');
        format!("{trimmed}/")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            user_agent: Self::DEFAULT_USER_AGENT.to_string(),
            access_token: None,
            timeout: None,
        }
    }
}

fn parse_timeout(secs: &str) -> Result<Duration> {
    secs.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| Error::Config(format!("Invalid REDDIT_TIMEOUT_SECS: {secs}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_base_url_adds_slash() {
        let config = Config::default().with_base_url("http://localhost:8080");
        assert_eq!(config.normalized_base_url(), "http://localhost:8080/");
    }

    #[test]
    fn test_normalized_base_url_keeps_single_slash() {
        let config = Config::default().with_base_url("https://oauth.reddit.com///");
        assert_eq!(config.normalized_base_url(), "https://oauth.reddit.com/");
    }

    #[test]
    fn test_with_overrides() {
        let config = Config::default().with_overrides(
            Some("http://example.com".to_string()),
            Some("token".to_string()),
            Some(Duration::from_secs(5)),
        );

        assert_eq!(config.base_url, "http://example.com");
        assert_eq!(config.access_token.as_deref(), Some("token"));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_with_overrides_none_keeps_values() {
        let config = Config::default()
            .with_access_token("kept")
            .with_overrides(None, None, None);

        assert_eq!(config.base_url, Config::DEFAULT_BASE_URL);
        assert_eq!(config.access_token.as_deref(), Some("kept"));
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("30").unwrap(), Duration::from_secs(30));
        assert!(parse_timeout("soon").is_err());
    }
}
