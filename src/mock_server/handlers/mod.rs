//! HTTP request handlers for the mock server.

pub mod connect;
pub mod plugins;

pub use connect::*;
pub use plugins::*;

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

use crate::mock_server::state::MockState;
use crate::TIER_HEADER;

/// Successful Crisp response: `{"error": false, "reason": ..., "data": ...}`.
pub(crate) fn data_response<T: Serialize>(reason: &str, data: T) -> Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "error": false,
            "reason": reason,
            "data": data
        })),
    )
        .into_response()
}

/// Failed Crisp response: `{"error": true, "reason": ..., "data": {}}`.
pub(crate) fn error_response(status: StatusCode, reason: &str) -> Response {
    (
        status,
        Json(serde_json::json!({
            "error": true,
            "reason": reason,
            "data": {}
        })),
    )
        .into_response()
}

/// Check the request credentials and tier against the state requirements.
pub(crate) fn authorize(state: &MockState, headers: &HeaderMap) -> Result<(), Response> {
    if let Some((identifier, key)) = &state.required_credentials {
        let expected = format!("Basic {}", STANDARD.encode(format!("{identifier}:{key}")));
        let provided = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        if provided != Some(expected.as_str()) {
            return Err(error_response(StatusCode::UNAUTHORIZED, "invalid_session"));
        }
    }

    if let Some(tier) = state.required_tier {
        let provided = headers.get(TIER_HEADER).and_then(|v| v.to_str().ok());

        if provided != Some(tier.as_str()) {
            return Err(error_response(StatusCode::FORBIDDEN, "not_allowed"));
        }
    }

    Ok(())
}
