use std::{fmt, time::Duration};

/// Public GitHub API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Largest page size the runners endpoint accepts.
pub const MAX_PER_PAGE: u8 = 100;

/// Connection settings for [`crate::GithubInventory`].
#[derive(Clone)]
pub struct GithubConfig {
    /// API root, e.g. `https://api.github.com` or `https://ghe.example.com/api/v3`.
    pub api_url: String,
    /// Bearer token presented on every request.
    pub token: String,
    pub user_agent: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    pub per_page: u8,
}

impl GithubConfig {
    /// Defaults for the public API with the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: token.into(),
            user_agent: concat!("rpick/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            per_page: MAX_PER_PAGE,
        }
    }

    /// Replace the API root and return updated config.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Full URL of the runner listing under `path`.
    pub(crate) fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubConfig")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("per_page", &self.per_page)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slashes() {
        let cfg = GithubConfig::new("t").with_api_url("https://ghe.example.com/api/v3/");
        assert_eq!(
            cfg.url_for("orgs/acme/actions/runners"),
            "https://ghe.example.com/api/v3/orgs/acme/actions/runners"
        );
    }

    #[test]
    fn default_url_is_public_api() {
        let cfg = GithubConfig::new("t");
        assert_eq!(
            cfg.url_for("repos/o/r/actions/runners"),
            "https://api.github.com/repos/o/r/actions/runners"
        );
    }

    #[test]
    fn debug_redacts_token() {
        let cfg = GithubConfig::new("ghp_secret");
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("ghp_secret"));
        assert!(dbg.contains("<redacted>"));
    }
}
