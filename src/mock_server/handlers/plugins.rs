//! Plugin and plugin stars endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Response,
    Json,
};
use tokio::sync::RwLock;

use super::{authorize, data_response, error_response};
use crate::mock_server::state::MockState;
use crate::PersonalPluginRank;

/// GET /plugin/{plugin_id}
pub async fn get_plugin(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(plugin_id): Path<String>,
) -> Response {
    let state = state.read().await;

    if let Err(response) = authorize(&state, &headers) {
        return response;
    }

    match state.get_plugin(&plugin_id) {
        Some(plugin) => data_response("resolved", plugin),
        None => error_response(StatusCode::NOT_FOUND, "plugin_not_found"),
    }
}

/// GET /plugin/{plugin_id}/stars
pub async fn get_stars(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(plugin_id): Path<String>,
) -> Response {
    let state = state.read().await;

    if let Err(response) = authorize(&state, &headers) {
        return response;
    }

    match state.get_stars(&plugin_id) {
        Some(stars) => data_response("resolved", serde_json::json!({ "stars": stars })),
        None => error_response(StatusCode::NOT_FOUND, "plugin_not_found"),
    }
}

/// GET /plugin/{plugin_id}/stars/self
pub async fn get_rank(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(plugin_id): Path<String>,
) -> Response {
    let state = state.read().await;

    if let Err(response) = authorize(&state, &headers) {
        return response;
    }

    if state.get_plugin(&plugin_id).is_none() {
        return error_response(StatusCode::NOT_FOUND, "plugin_not_found");
    }

    // Unranked plugins resolve to an empty object
    let rank = PersonalPluginRank {
        rank: state.get_rank(&plugin_id),
    };
    data_response("resolved", rank)
}

/// PATCH /plugin/{plugin_id}/stars/self
pub async fn rank_plugin(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(plugin_id): Path<String>,
    Json(body): Json<PersonalPluginRank>,
) -> Response {
    let mut state = state.write().await;

    if let Err(response) = authorize(&state, &headers) {
        return response;
    }

    let Some(rank) = body.rank.filter(|r| MockState::is_valid_rank(*r)) else {
        return error_response(StatusCode::BAD_REQUEST, "invalid_data");
    };

    if state.set_rank(&plugin_id, rank) {
        data_response("updated", serde_json::json!({}))
    } else {
        error_response(StatusCode::NOT_FOUND, "plugin_not_found")
    }
}

/// DELETE /plugin/{plugin_id}/stars/self
pub async fn delete_rank(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(plugin_id): Path<String>,
) -> Response {
    let mut state = state.write().await;

    if let Err(response) = authorize(&state, &headers) {
        return response;
    }

    if state.delete_rank(&plugin_id) {
        data_response("deleted", serde_json::json!({}))
    } else {
        error_response(StatusCode::NOT_FOUND, "plugin_not_found")
    }
}
