//! Relay address type

use std::fmt;

/// A relay endpoint as `host:port`.
///
/// The directory advertises OR addresses as plain strings. Only the IPv4
/// `host:port` form is kept; bracketed IPv6 literals and strings that do
/// not split into a host and a numeric port are skipped by callers rather
/// than treated as errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelayAddress {
    host: String,
    port: u16,
}

impl RelayAddress {
    /// Parse an advertised `host:port` string.
    ///
    /// Returns `None` for IPv6 literals (marked by `[`) and for anything
    /// that does not carry a valid port after the first colon.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.contains('[') {
            return None;
        }

        let (host, port) = raw.split_once(':')?;
        if host.is_empty() {
            return None;
        }
        let port = port.parse::<u16>().ok()?;

        Some(Self {
            host: host.to_string(),
            port,
        })
    }

    /// Get the host part
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the port
    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for RelayAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
