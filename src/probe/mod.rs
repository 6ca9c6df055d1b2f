//! Reachability probing
//!
//! Responsibilities:
//! - Answer one question: does this address accept a TCP connection
//! - NO data exchange, NO retries, NO protocol awareness
//!
//! Unreachability is a normal outcome, never an error; nothing from this
//! layer propagates to callers.

mod tcp;

pub use tcp::TcpProber;

use std::time::Duration;

use async_trait::async_trait;

use crate::common::RelayAddress;

/// Default time allowed for a single connection attempt.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Liveness check for relay addresses.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Attempt to reach the address within `timeout`.
    ///
    /// Returns `true` only when a connection is established. Refusal,
    /// timeout, resolution failure, and any other transport condition are
    /// all `false`.
    async fn probe(&self, addr: &RelayAddress, timeout: Duration) -> bool;
}
