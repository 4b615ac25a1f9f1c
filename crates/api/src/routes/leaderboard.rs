//! Leaderboard routes

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiResult;
use crate::state::AppState;
use common::models::{LeaderboardEntry, LeaderboardMetric};

#[derive(Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default = "default_metric")]
    metric: LeaderboardMetric,
    limit: Option<usize>,
}

fn default_metric() -> LeaderboardMetric {
    LeaderboardMetric::Points
}

pub async fn global(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LeaderboardQuery>,
) -> ApiResult<Json<Vec<LeaderboardEntry>>> {
    let limit = query
        .limit
        .unwrap_or(state.config.default_leaderboard_limit);

    let entries = state.engine.get_leaderboard(query.metric, limit).await?;
    Ok(Json(entries))
}
