//! Client configuration: credentials and endpoint settings.

use std::time::Duration;

use url::Url;

use crate::error::{TrelloError, TrelloResult};

/// Trello REST API base endpoint.
pub const DEFAULT_API_URL: &str = "https://api.trello.com/1";

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Static key/token pair sent with every request.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    token: String,
}

impl Credentials {
    /// Build credentials, rejecting blank values.
    ///
    /// # Errors
    /// Returns [`TrelloError::MissingCredentials`] if either value is empty.
    pub fn new(api_key: impl Into<String>, token: impl Into<String>) -> TrelloResult<Self> {
        let api_key = api_key.into();
        let token = token.into();

        // Blank check only; the values are sent exactly as given.
        if api_key.trim().is_empty() || token.trim().is_empty() {
            return Err(TrelloError::MissingCredentials);
        }

        Ok(Self { api_key, token })
    }

    /// Query/form parameters identifying the caller.
    pub(crate) fn auth_params(&self) -> [(&'static str, &str); 2] {
        [("key", &self.api_key), ("token", &self.token)]
    }
}

// Never print secrets in logs or panics.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Settings for [`crate::TrelloClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Authentication pair.
    pub credentials: Credentials,
    /// API base URL, without trailing slash.
    pub api_url: String,
    /// Per-request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Configuration against the public Trello endpoint.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }

    /// Override the API base URL (self-hosted proxies, tests).
    ///
    /// # Errors
    /// Returns [`TrelloError::Config`] if the URL is not absolute http(s).
    pub fn with_api_url(mut self, api_url: &str) -> TrelloResult<Self> {
        let parsed = Url::parse(api_url)
            .map_err(|e| TrelloError::Config(format!("invalid API URL '{api_url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(TrelloError::Config(format!(
                "unsupported API URL scheme '{}'",
                parsed.scheme()
            )));
        }
        self.api_url = api_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Override the request timeout. A zero duration disables it.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_reject_blank() {
        assert!(matches!(
            Credentials::new("", "token"),
            Err(TrelloError::MissingCredentials)
        ));
        assert!(matches!(
            Credentials::new("key", "   "),
            Err(TrelloError::MissingCredentials)
        ));
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let creds = Credentials::new("secret-key", "secret-token").unwrap();
        let printed = format!("{creds:?}");
        assert!(!printed.contains("secret-key"));
        assert!(!printed.contains("secret-token"));
    }

    #[test]
    fn test_auth_params() {
        let creds = Credentials::new("test_api_key", "test_token").unwrap();
        assert_eq!(
            creds.auth_params(),
            [("key", "test_api_key"), ("token", "test_token")]
        );
    }

    #[test]
    fn test_api_url_override() {
        let creds = Credentials::new("k", "t").unwrap();
        let config = ClientConfig::new(creds.clone())
            .with_api_url("http://127.0.0.1:8080/")
            .unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:8080");

        assert!(ClientConfig::new(creds.clone()).with_api_url("not a url").is_err());
        assert!(ClientConfig::new(creds).with_api_url("ftp://host").is_err());
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new(Credentials::new("k", "t").unwrap());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(
            config.timeout,
            Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        );
    }

    #[test]
    fn test_zero_timeout_disables_timeout() {
        let config = ClientConfig::new(Credentials::new("k", "t").unwrap());
        assert_eq!(config.clone().with_timeout(Duration::ZERO).timeout, None);
        assert_eq!(
            config.with_timeout(Duration::from_secs(5)).timeout,
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn test_credentials_kept_verbatim() {
        let creds = Credentials::new(" key ", "token\n").unwrap();
        assert_eq!(creds.auth_params(), [("key", " key "), ("token", "token\n")]);
    }
}
