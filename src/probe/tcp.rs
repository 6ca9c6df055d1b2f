//! TCP reachability probe

use std::io;
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tokio::time;
use tracing::{debug, warn};

use crate::common::RelayAddress;

use super::Prober;

/// Probes an address by opening and immediately dropping a TCP connection.
pub struct TcpProber;

impl TcpProber {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TcpProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self, addr: &RelayAddress, timeout: Duration) -> bool {
        match time::timeout(timeout, TcpStream::connect((addr.host(), addr.port()))).await {
            Ok(Ok(stream)) => {
                // Liveness signal only; the connection is not used.
                drop(stream);
                true
            }
            Ok(Err(e)) => {
                match e.kind() {
                    io::ErrorKind::ConnectionRefused | io::ErrorKind::TimedOut => {
                        debug!("probe failed for {}: {}", addr, e)
                    }
                    _ => warn!("probe error for {}: {}", addr, e),
                }
                false
            }
            Err(_) => {
                debug!("probe timed out for {}", addr);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_probe_listening_socket() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let addr = RelayAddress::parse(&format!("127.0.0.1:{}", port)).unwrap();

        let prober = TcpProber::new();
        assert!(prober.probe(&addr, Duration::from_secs(1)).await);
    }

    #[tokio::test]
    async fn test_probe_closed_port() {
        // Bind to grab a free port, then release it before probing.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let addr = RelayAddress::parse(&format!("127.0.0.1:{}", port)).unwrap();
        let prober = TcpProber::new();
        assert!(!prober.probe(&addr, Duration::from_secs(1)).await);
    }
}
