//! Message Routes
//!
//! Read-only card listing and lookup.
//!
//! - GET /api/v1/messages - All cards in display order (newest first)
//! - GET /api/v1/messages?q=term - Cards matching a search query
//! - GET /api/v1/messages/:id - One card by id

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::dto::{CardListResponse, CardResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// Query parameters for the card listing
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Case-insensitive substring filter over body, author, and date
    #[serde(default)]
    pub q: Option<String>,
}

/// GET /api/v1/messages
///
/// List cards in display order, optionally filtered by `q`.
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<CardListResponse>> {
    let query = params.q.as_deref().unwrap_or("");
    let cards: Vec<CardResponse> = state
        .board
        .cards_filtered(query)
        .into_iter()
        .map(CardResponse::from)
        .collect();

    Ok(Json(CardListResponse {
        total: cards.len(),
        cards,
    }))
}

/// GET /api/v1/messages/:id
///
/// Look up one card by its feed id or positional fallback id.
pub async fn get_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<CardResponse>> {
    let card = state
        .board
        .find_card(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Message with id {id} not found")))?;

    Ok(Json(card.into()))
}
