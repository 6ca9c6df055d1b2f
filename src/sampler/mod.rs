//! Relay sampling
//!
//! The selection loop at the heart of the pipeline:
//!
//! ```text
//! draw record at random → parse addresses → port policy → probe → accept
//! ```
//!
//! Draws are with replacement: the same record may be revisited, and a
//! draw-count bound (one per directory record) guarantees termination even
//! when few relays are live. A drawn record's qualifying addresses are
//! accepted as a unit, so a run may return slightly more than the requested
//! count; it may also return fewer.

use std::time::Duration;

use futures_util::stream::{self, StreamExt};
use rand::Rng;
use tracing::debug;

use crate::common::RelayAddress;
use crate::directory::DirectoryDocument;
use crate::policy::PortPolicy;
use crate::probe::Prober;

/// Upper bound on probes in flight for one draw.
const MAX_CONCURRENT_PROBES: usize = 16;

/// Per-run selection limits.
#[derive(Debug, Clone)]
pub struct SelectionBudget {
    /// Target number of accepted entries.
    pub max_count: usize,
    /// Time allowed for each reachability probe.
    pub probe_timeout: Duration,
}

impl SelectionBudget {
    pub fn new(max_count: usize, probe_timeout: Duration) -> Self {
        Self {
            max_count,
            probe_timeout,
        }
    }
}

/// Select live relay entries from a directory document.
///
/// Returns `"host:port fingerprint"` lines in acceptance order. The RNG is
/// supplied by the caller so runs can be made deterministic in tests.
pub async fn select<R: Rng>(
    doc: &DirectoryDocument,
    budget: &SelectionBudget,
    policy: &PortPolicy,
    prober: &dyn Prober,
    rng: &mut R,
) -> Vec<String> {
    let records = doc.relays();
    let mut accepted = Vec::new();
    let mut remaining = records.len();

    while remaining > 0 && accepted.len() < budget.max_count {
        let record = &records[rng.gen_range(0..records.len())];

        let candidates: Vec<RelayAddress> = record
            .or_addresses
            .iter()
            .filter_map(|raw| RelayAddress::parse(raw))
            .filter(|addr| policy.allows(addr))
            .collect();

        // Probe the drawn record's addresses together. `buffered` yields
        // results in submission order, so acceptance order matches the
        // advertised address order regardless of probe completion timing.
        let results: Vec<(RelayAddress, bool)> =
            stream::iter(candidates.into_iter().map(|addr| async move {
                let reachable = prober.probe(&addr, budget.probe_timeout).await;
                (addr, reachable)
            }))
            .buffered(MAX_CONCURRENT_PROBES)
            .collect()
            .await;

        for (addr, reachable) in results {
            if reachable {
                accepted.push(format!("{} {}", addr, record.fingerprint));
            }
        }

        remaining -= 1;
    }

    debug!("selected {} relay entries", accepted.len());
    accepted
}
