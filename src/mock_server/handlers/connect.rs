//! Plugin connect endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use tokio::sync::RwLock;

use super::{authorize, data_response};
use crate::mock_server::state::MockState;

/// HEAD /plugin/connect/session
pub async fn check_session(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;

    if let Err(response) = authorize(&state, &headers) {
        return response;
    }

    if state.session_valid {
        StatusCode::OK.into_response()
    } else {
        StatusCode::UNAUTHORIZED.into_response()
    }
}

/// GET /plugin/connect/websites
pub async fn list_websites(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;

    if let Err(response) = authorize(&state, &headers) {
        return response;
    }

    data_response("listed", &state.connected_websites)
}
