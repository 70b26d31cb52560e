//! Moderation service client
//!
//! Thin reqwest wrapper around the two endpoints the service exposes. The
//! base URL comes from settings; see `crate::features::Settings`.

use anyhow::{Result, anyhow};
use reqwest::Client;

use super::model::{ModerateRequest, ModerationResult};

/// HTTP client for the moderation service
///
/// Cheap to clone; clones share the underlying connection pool, so async
/// tasks can take their own copy.
#[derive(Clone)]
pub struct ModerationClient {
    client: Client,
    base_url: String,
}

impl std::fmt::Debug for ModerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModerationClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ModerationClient {
    /// Create a client for the service at `base_url`
    ///
    /// No request timeout is set: the service intentionally blocks while the
    /// model runs, and a slow verdict is still a verdict.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent(concat!("guardian/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to initialize HTTP client");

        Self {
            client,
            base_url: normalize_base_url(base_url.into()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit `text` for moderation
    ///
    /// Any non-2xx status or transport error is reported as a plain error;
    /// callers show one generic message for all of them.
    pub async fn moderate(&self, text: &str) -> Result<ModerationResult> {
        let url = format!("{}/api/moderate", self.base_url);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&ModerateRequest { text })
            .send()
            .await
            .map_err(|e| anyhow!("request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("service responded with {}", status));
        }

        response
            .json::<ModerationResult>()
            .await
            .map_err(|e| anyhow!("failed to parse response: {}", e))
    }

    /// Probe `GET /api/health`, succeeding on any 2xx
    pub async fn health(&self) -> Result<()> {
        let url = format!("{}/api/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("service responded with {}", status));
        }
        Ok(())
    }
}

/// Strip trailing slashes so path joins stay predictable
fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ModerationClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn bare_base_url_is_unchanged() {
        let client = ModerationClient::new("http://localhost:8000");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
