//! REST API handlers for the scan endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::resolver::DnsClient;
use crate::scanner;
use crate::types::{ErrorResponse, ScanResponse};

/// Shared application state
pub struct AppState {
    pub resolver: DnsClient,
}

// ==================== Error Handling ====================

#[derive(Debug)]
pub struct ApiError(pub StatusCode, pub Json<ErrorResponse>);

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError(
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse { error: msg.into() }),
        )
    }

    pub fn method_not_allowed(msg: impl Into<String>) -> Self {
        ApiError(
            StatusCode::METHOD_NOT_ALLOWED,
            Json(ErrorResponse { error: msg.into() }),
        )
    }

    pub fn internal_error(msg: impl Into<String>) -> Self {
        ApiError(
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse { error: msg.into() }),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

// ==================== Health Check ====================

pub async fn health() -> StatusCode {
    StatusCode::OK
}

// ==================== Scan Handler ====================

#[derive(Debug, Deserialize)]
pub struct ScanQuery {
    url: Option<String>,
    dns_status: Option<String>,
    categories: Option<String>,
}

/// Scan a comma-separated list of URLs.
///
/// `url` is required. `dns_status` and `categories` must each be absent or
/// exactly `"1"`; any other non-empty value fails validation before any DNS
/// query is made. `dns_status` is accepted for compatibility but the status
/// field is always included; `categories=1` enriches each result with
/// category and malicious data.
pub async fn scan(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ScanQuery>,
) -> Result<Json<ScanResponse>, ApiError> {
    let targets = match query.url.as_deref() {
        Some(u) if !u.is_empty() => u,
        _ => return Err(ApiError::bad_request("URL is required")),
    };

    let _dns_status = parse_flag("dns_status", query.dns_status.as_deref())?;
    let categorize = parse_flag("categories", query.categories.as_deref())?;

    let results = scanner::scan_targets(&state.resolver, targets, categorize).await;
    Ok(Json(ScanResponse { results }))
}

/// Rejects all methods other than GET with a JSON error body.
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed("method not allowed")
}

fn parse_flag(name: &str, value: Option<&str>) -> Result<bool, ApiError> {
    match value {
        None | Some("") => Ok(false),
        Some("1") => Ok(true),
        Some(other) => Err(ApiError::bad_request(format!(
            "invalid value for {}: {}",
            name, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_one_or_absence() {
        assert!(!parse_flag("categories", None).unwrap());
        assert!(!parse_flag("categories", Some("")).unwrap());
        assert!(parse_flag("categories", Some("1")).unwrap());
    }

    #[test]
    fn flags_reject_other_values() {
        assert!(parse_flag("categories", Some("yes")).is_err());
        assert!(parse_flag("dns_status", Some("0")).is_err());
        assert!(parse_flag("dns_status", Some("true")).is_err());
    }
}
