//! URL Scan Service
//!
//! Exposes a single `/scan` endpoint that takes a comma-separated list of
//! URLs, resolves each hostname's DNS status (UP/DOWN/UNKNOWN) against a
//! fixed upstream resolver, and optionally annotates each result with a
//! static category list and malicious-domain flag.
//!
//! Resolution failures never fail a request: transport errors, timeouts and
//! unrecognized response codes all degrade to an UNKNOWN status within an
//! otherwise-successful result.

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::unwrap_in_result)
)]

pub mod handlers;
pub mod intel;
pub mod resolver;
pub mod scanner;
pub mod server;
pub mod types;

use std::net::SocketAddr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Upstream DNS resolver address
    pub resolver_addr: SocketAddr,
    /// Per-query resolver timeout in seconds
    pub dns_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ServiceError> {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|e| ServiceError::Config(format!("PORT must be a valid number: {}", e)))?;

        let resolver_addr = std::env::var("RESOLVER_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:53".to_string())
            .parse()
            .map_err(|e| ServiceError::Config(format!("Invalid resolver address: {}", e)))?;

        let dns_timeout_secs = std::env::var("DNS_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            port,
            resolver_addr,
            dns_timeout_secs,
        })
    }
}

pub use handlers::AppState;
pub use server::{create_router, run};
pub use types::{DnsStatus, ErrorResponse, ScanResponse, ScanResult};
