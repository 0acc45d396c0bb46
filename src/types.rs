//! Wire types for the scan endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single A-record resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsStatus {
    /// Resolver returned at least one answer record
    Up,
    /// Resolver returned a definitive negative (or zero answers)
    Down,
    /// Transport failure, timeout, or unrecognized response code
    Unknown,
}

impl DnsStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DnsStatus::Up => "UP",
            DnsStatus::Down => "DOWN",
            DnsStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for DnsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in the response, in the same order as the requested targets.
///
/// `categories` and `is_malicious` are present only when categorization was
/// requested via `categories=1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub url: String,
    pub dns_status: DnsStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_malicious: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResponse {
    pub results: Vec<ScanResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dns_status_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&DnsStatus::Up).unwrap(), "\"UP\"");
        assert_eq!(serde_json::to_string(&DnsStatus::Down).unwrap(), "\"DOWN\"");
        assert_eq!(
            serde_json::to_string(&DnsStatus::Unknown).unwrap(),
            "\"UNKNOWN\""
        );
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let result = ScanResult {
            url: "google.com.".to_string(),
            dns_status: DnsStatus::Up,
            categories: None,
            is_malicious: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("categories").is_none());
        assert!(json.get("is_malicious").is_none());
    }
}
