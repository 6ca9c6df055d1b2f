//! Relay directory
//!
//! Responsibilities:
//! - Fetch the raw directory payload from the Onionoo endpoint
//! - Decode it into relay records
//! - NO filtering, NO probing, NO selection
//!
//! Anything that prevents a usable record list from being produced is
//! surfaced as a single fetch-error kind.

mod document;
mod fetch;

pub use document::{DirectoryDocument, RelayRecord};
pub use fetch::{DirectorySource, HttpDirectorySource, ONIONOO_URL, USER_AGENT};
