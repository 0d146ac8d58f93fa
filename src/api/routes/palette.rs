//! Palette Route
//!
//! - GET /api/v1/palette - The session palette

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::PaletteResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1/palette
///
/// The colors assigned round-robin to cards, in order, plus whether the
/// hard-coded fallback set was substituted.
pub async fn get_palette(State(state): State<Arc<AppState>>) -> ApiResult<Json<PaletteResponse>> {
    Ok(Json(PaletteResponse::from(state.board.palette())))
}
