//! Directory retrieval over HTTP

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{Error, Result};

/// Details endpoint the relay list is fetched from.
pub const ONIONOO_URL: &str = "https://onionoo.torproject.org/details?type=relay\
                               &running=true&fields=fingerprint,or_addresses";

/// User agent sent with directory requests.
pub const USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 10; Android SDK built for x86) \
                              AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.120 \
                              Mobile Safari/537.36 ";

/// Source of raw directory payloads.
///
/// Implementations should ONLY retrieve bytes; decoding and selection
/// happen elsewhere.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Fetch the raw directory document within the given request timeout.
    async fn fetch(&self, timeout: Duration) -> Result<Vec<u8>>;
}

/// Directory source backed by the public Onionoo HTTP endpoint.
pub struct HttpDirectorySource {
    url: String,
    user_agent: String,
}

impl HttpDirectorySource {
    pub fn new() -> Self {
        Self {
            url: ONIONOO_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Point the source at a different endpoint.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

impl Default for HttpDirectorySource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DirectorySource for HttpDirectorySource {
    async fn fetch(&self, timeout: Duration) -> Result<Vec<u8>> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(|e| Error::Fetch(format!("client setup failed: {}", e)))?;

        let resp = client.get(&self.url).send().await.map_err(|e| {
            if e.is_connect() {
                Error::Fetch("server connection error".to_string())
            } else {
                Error::Fetch(format!("server request failed: {}", e))
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!(
                "server response code is {}",
                status.as_u16()
            )));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| Error::Fetch(format!("server read failed: {}", e)))?;

        debug!("directory fetched, {} bytes", body.len());
        Ok(body.to_vec())
    }
}
