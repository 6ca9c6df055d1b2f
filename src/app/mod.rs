//! Application layer
//!
//! Wires the directory source, the port policy, and the prober into the
//! single operation exposed to callers.

mod service;

pub use service::RelayService;
