//! Relay service - fetch, sample, format
//!
//! Composition point for the pipeline:
//!
//! ```text
//! directory fetch → decode → sample → text document
//! ```
//!
//! This is the only surface the dispatch layer calls. Collaborators are
//! trait objects so tests can substitute stub sources and probers.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::debug;

use crate::directory::{DirectoryDocument, DirectorySource, HttpDirectorySource};
use crate::error::Result;
use crate::output;
use crate::policy::PortPolicy;
use crate::probe::{Prober, TcpProber, DEFAULT_PROBE_TIMEOUT};
use crate::sampler::{self, SelectionBudget};

/// Fetches the relay directory and samples live entries from it.
pub struct RelayService {
    source: Arc<dyn DirectorySource>,
    prober: Arc<dyn Prober>,
    policy: PortPolicy,
}

impl RelayService {
    /// Service wired to the public directory endpoint and real TCP probing.
    pub fn new() -> Self {
        Self::with_parts(
            Arc::new(HttpDirectorySource::new()),
            Arc::new(TcpProber::new()),
        )
    }

    /// Service over explicit collaborators.
    pub fn with_parts(source: Arc<dyn DirectorySource>, prober: Arc<dyn Prober>) -> Self {
        Self {
            source,
            prober,
            policy: PortPolicy::new(),
        }
    }

    /// Fetch the directory and return up to `max_count` live relay lines.
    ///
    /// The returned string holds one `host:port fingerprint` entry per
    /// line. Only directory retrieval and decoding can fail; excluded or
    /// unreachable addresses just thin out the result. Each run draws from
    /// a freshly seeded generator.
    pub async fn fetch_and_select(&self, max_count: usize, timeout_secs: u64) -> Result<String> {
        let raw = self.source.fetch(Duration::from_secs(timeout_secs)).await?;
        let doc = DirectoryDocument::parse(&raw)?;
        debug!("directory decoded, {} records", doc.len());

        let budget = SelectionBudget::new(max_count, DEFAULT_PROBE_TIMEOUT);
        let mut rng = SmallRng::from_entropy();
        let entries =
            sampler::select(&doc, &budget, &self.policy, self.prober.as_ref(), &mut rng).await;

        Ok(output::join_lines(&entries))
    }
}

impl Default for RelayService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use crate::common::RelayAddress;
    use crate::error::Error;

    struct StubSource {
        payload: Result<Vec<u8>>,
    }

    impl StubSource {
        fn ok(json: &str) -> Self {
            Self {
                payload: Ok(json.as_bytes().to_vec()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                payload: Err(Error::Fetch(message.to_string())),
            }
        }
    }

    #[async_trait]
    impl DirectorySource for StubSource {
        async fn fetch(&self, _timeout: Duration) -> Result<Vec<u8>> {
            match &self.payload {
                Ok(bytes) => Ok(bytes.clone()),
                Err(Error::Fetch(msg)) => Err(Error::Fetch(msg.clone())),
                Err(Error::Config(msg)) => Err(Error::Config(msg.clone())),
            }
        }
    }

    struct AlwaysUp;

    #[async_trait]
    impl Prober for AlwaysUp {
        async fn probe(&self, _addr: &RelayAddress, _timeout: Duration) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn test_fetch_and_select_end_to_end() {
        let source = StubSource::ok(
            r#"{"relays":[{"fingerprint":"F","or_addresses":["1.2.3.4:9001"]}]}"#,
        );
        let service = RelayService::with_parts(Arc::new(source), Arc::new(AlwaysUp));

        let document = service.fetch_and_select(5, 5).await.unwrap();
        assert_eq!(document, "1.2.3.4:9001 F");
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let source = StubSource::failing("server connection error");
        let service = RelayService::with_parts(Arc::new(source), Arc::new(AlwaysUp));

        let err = service.fetch_and_select(5, 5).await.unwrap_err();
        assert_eq!(err.to_string(), "Fetching error, server connection error");
    }

    #[tokio::test]
    async fn test_payload_without_relays_is_fetch_error() {
        let source = StubSource::ok(r#"{"version":"10.0"}"#);
        let service = RelayService::with_parts(Arc::new(source), Arc::new(AlwaysUp));

        let err = service.fetch_and_select(5, 5).await.unwrap_err();
        assert_eq!(err.to_string(), "Fetching error, relays not found");
    }
}
