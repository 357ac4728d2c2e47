use std::time::Instant;

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::http::request::single_username;
use crate::http::response::ApiResponse;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::panel::WhitelistAction;

pub const ADD_USAGE: &str = "Provide ONE username to add to the whitelist";
pub const REMOVE_USAGE: &str = "Provide ONE username to remove from the whitelist";
pub const ADD_FAILED: &str = "Failed to whitelist user";
pub const REMOVE_FAILED: &str = "Failed to remove whitelisted user";

/// `POST /whitelist?username=<name>`
pub async fn add_to_whitelist(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    handle(&state, query.as_deref(), WhitelistAction::Add).await
}

/// `DELETE /whitelist?username=<name>`
pub async fn remove_from_whitelist(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Response {
    handle(&state, query.as_deref(), WhitelistAction::Remove).await
}

async fn handle(state: &AppState, query: Option<&str>, action: WhitelistAction) -> Response {
    let start = Instant::now();
    let response = respond(state, query, action).await;
    metrics::record_request(action, response.status().as_u16(), start);
    response
}

async fn respond(state: &AppState, query: Option<&str>, action: WhitelistAction) -> Response {
    let (usage, failed) = match action {
        WhitelistAction::Add => (ADD_USAGE, ADD_FAILED),
        WhitelistAction::Remove => (REMOVE_USAGE, REMOVE_FAILED),
    };

    let username = match single_username(query) {
        Some(u) => u,
        None => {
            tracing::warn!(action = %action, query = ?query, "Rejected whitelist request without exactly one username");
            return ApiResponse::failure(usage, usage).into_response_with(StatusCode::BAD_REQUEST);
        }
    };

    if let Err(e) = state.panel.update_whitelist(&username, action).await {
        return ApiResponse::failure(failed, e.to_string()).into_response_with(StatusCode::BAD_REQUEST);
    }

    match action {
        WhitelistAction::Add => ApiResponse::success().into_response_with(StatusCode::CREATED),
        WhitelistAction::Remove => StatusCode::NO_CONTENT.into_response(),
    }
}
