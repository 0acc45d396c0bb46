//! Hostname normalization and the batch scan orchestrator.

use url::Url;

use crate::intel;
use crate::resolver::DnsClient;
use crate::types::ScanResult;

/// A normalized scan target.
///
/// Holds the fully-qualified form (trailing dot) used for DNS queries. The
/// category/malicious lookup key is derived from it by stripping the trailing
/// dot and any leading `www.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hostname {
    fqdn: String,
}

impl Hostname {
    /// Normalize a raw target: if it parses as a URL with a host component,
    /// use the host; otherwise treat the whole input as the hostname. There
    /// is no error path.
    pub fn normalize(raw: &str) -> Self {
        let host = match Url::parse(raw) {
            Ok(parsed) => match parsed.host_str() {
                Some(h) => h.to_string(),
                None => raw.to_string(),
            },
            Err(_) => raw.to_string(),
        };

        let fqdn = if host.ends_with('.') {
            host
        } else {
            format!("{}.", host)
        };
        Self { fqdn }
    }

    /// Fully-qualified form used for DNS resolution; `www.` is kept.
    pub fn fqdn(&self) -> &str {
        &self.fqdn
    }

    /// Key used for category/malicious lookup: trailing dot and any leading
    /// `www.` stripped.
    pub fn lookup_key(&self) -> &str {
        let host = self.fqdn.trim_end_matches('.');
        host.strip_prefix("www.").unwrap_or(host)
    }
}

/// Scan a comma-separated list of targets, sequentially and in order.
///
/// Targets are trimmed of surrounding whitespace but never deduplicated.
/// Each gets exactly one DNS query; when `categorize` is set, each result is
/// also enriched from the static tables.
pub async fn scan_targets(client: &DnsClient, raw_list: &str, categorize: bool) -> Vec<ScanResult> {
    let mut results = Vec::new();
    for target in raw_list.split(',') {
        let target = target.trim();
        let hostname = Hostname::normalize(target);
        let status = client.query_a(hostname.fqdn()).await;
        tracing::info!(
            input = target,
            hostname = hostname.fqdn(),
            status = %status,
            "Scan result"
        );

        let (categories, is_malicious) = if categorize {
            let key = hostname.lookup_key();
            (
                Some(intel::categories_for(key)),
                Some(intel::is_malicious(key)),
            )
        } else {
            (None, None)
        };

        results.push(ScanResult {
            url: hostname.fqdn().to_string(),
            dns_status: status,
            categories,
            is_malicious,
        });
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hostname_gets_trailing_dot() {
        assert_eq!(Hostname::normalize("google.com").fqdn(), "google.com.");
    }

    #[test]
    fn url_input_uses_host_component() {
        assert_eq!(
            Hostname::normalize("https://www.google.com/search").fqdn(),
            "www.google.com."
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = Hostname::normalize("example.com");
        let twice = Hostname::normalize(once.fqdn());
        assert_eq!(once, twice);
    }

    #[test]
    fn unparseable_input_falls_back_to_raw() {
        assert_eq!(Hostname::normalize("not a url").fqdn(), "not a url.");
    }

    #[test]
    fn lookup_key_strips_www_and_trailing_dot() {
        let hostname = Hostname::normalize("https://www.google.com/");
        assert_eq!(hostname.fqdn(), "www.google.com.");
        assert_eq!(hostname.lookup_key(), "google.com");
    }

    #[test]
    fn lookup_key_keeps_non_www_subdomains() {
        assert_eq!(
            Hostname::normalize("maps.google.com").lookup_key(),
            "maps.google.com"
        );
    }
}
