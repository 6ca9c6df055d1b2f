//! Port admission policy
//!
//! Relays advertising well-known service or management ports are excluded
//! from selection regardless of reachability. The list is fixed at build
//! time and shared read-only by all sampling runs.

use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::common::RelayAddress;

/// Ports excluded from relay selection.
const DENIED_PORTS: [u16; 80] = [
    1, 7, 9, 11, 13, 15, 17, 19, 20, 21, 22, 23, 25, 37, 42, 43, 53, 69, 77,
    79, 87, 95, 101, 102, 103, 104, 109, 110, 111, 113, 115, 117, 119, 123,
    135, 137, 139, 143, 161, 179, 389, 427, 465, 512, 513, 514, 515, 526,
    530, 531, 532, 540, 548, 554, 556, 563, 587, 601, 636, 989, 990, 993,
    995, 1719, 1720, 1723, 2049, 3659, 4045, 5060, 5061, 6000, 6566, 6665,
    6666, 6667, 6668, 6669, 6697, 10080,
];

lazy_static! {
    static ref DENIED_SET: HashSet<u16> = DENIED_PORTS.iter().copied().collect();
}

/// Port admission policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortPolicy;

impl PortPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Whether an address's port is acceptable for selection.
    pub fn allows(&self, addr: &RelayAddress) -> bool {
        !DENIED_SET.contains(&addr.port())
    }
}
