//! Directory payload decoding

use serde::Deserialize;

use crate::error::{Error, Result};

/// One relay entry as published by the directory.
///
/// Records are taken verbatim and never mutated. Missing fields decode to
/// empty values; a record without addresses simply contributes nothing.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayRecord {
    #[serde(default)]
    pub fingerprint: String,
    #[serde(default)]
    pub or_addresses: Vec<String>,
}

/// The decoded directory payload.
#[derive(Debug, Clone)]
pub struct DirectoryDocument {
    relays: Vec<RelayRecord>,
}

impl DirectoryDocument {
    /// Decode a raw directory payload.
    ///
    /// The payload must be a JSON object carrying a `relays` array.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(raw)
            .map_err(|e| Error::Fetch(format!("invalid directory payload: {}", e)))?;

        let relays = value
            .get("relays")
            .ok_or_else(|| Error::Fetch("relays not found".to_string()))?;

        let relays: Vec<RelayRecord> = serde_json::from_value(relays.clone())
            .map_err(|e| Error::Fetch(format!("invalid relay list: {}", e)))?;

        Ok(Self { relays })
    }

    /// The decoded relay records, in directory order.
    pub fn relays(&self) -> &[RelayRecord] {
        &self.relays
    }

    pub fn len(&self) -> usize {
        self.relays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relays.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directory() {
        let raw = br#"{"relays":[{"fingerprint":"AAAA","or_addresses":["1.2.3.4:9001"]}]}"#;
        let doc = DirectoryDocument::parse(raw).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.relays()[0].fingerprint, "AAAA");
        assert_eq!(doc.relays()[0].or_addresses, vec!["1.2.3.4:9001"]);
    }

    #[test]
    fn test_parse_missing_relays_field() {
        let err = DirectoryDocument::parse(br#"{"version":"10.0"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Fetching error, relays not found");
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(DirectoryDocument::parse(b"not json").is_err());
    }

    #[test]
    fn test_record_fields_default_when_absent() {
        let raw = br#"{"relays":[{"fingerprint":"BBBB"},{"or_addresses":["5.6.7.8:443"]}]}"#;
        let doc = DirectoryDocument::parse(raw).unwrap();
        assert!(doc.relays()[0].or_addresses.is_empty());
        assert!(doc.relays()[1].fingerprint.is_empty());
    }

    #[test]
    fn test_parse_empty_relay_list() {
        let doc = DirectoryDocument::parse(br#"{"relays":[]}"#).unwrap();
        assert!(doc.is_empty());
    }
}
