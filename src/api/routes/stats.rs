//! Statistics Route
//!
//! - GET /api/v1/stats - Board statistics

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::StatsResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1/stats
///
/// Per-day entry counts, contributor ranking, and the longest entry.
pub async fn get_stats(State(state): State<Arc<AppState>>) -> ApiResult<Json<StatsResponse>> {
    Ok(Json(state.board.stats().into()))
}
