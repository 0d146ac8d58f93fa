//! Daily Featured Route
//!
//! - GET /api/v1/daily - Today's featured entry (server-local calendar day)
//! - GET /api/v1/daily?date=YYYY-MM-DD - The featured entry for a date

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

use crate::api::dto::{DailyResponse, FeaturedMessage};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// Query parameters for the daily selection
#[derive(Debug, Deserialize)]
pub struct DailyParams {
    /// Calendar date to select for; defaults to today (local time)
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// GET /api/v1/daily
///
/// The deterministically featured entry for a calendar day. `daily` is
/// null when the board is empty; consumers suppress the featured
/// presentation in that case.
pub async fn get_daily(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DailyParams>,
) -> ApiResult<Json<DailyResponse>> {
    let date = params
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let daily = state.board.daily(date).map(FeaturedMessage::from);

    Ok(Json(DailyResponse { date, daily }))
}
