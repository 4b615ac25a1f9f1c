//! Admin routes

use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiResult;
use crate::state::AppState;
use common::models::User;

#[derive(Deserialize)]
pub struct AdjustPointsRequest {
    pub user_id: Uuid,
    /// Signed correction; the resulting balance floors at zero
    pub delta: i64,
}

/// Explicit admin points correction
pub async fn adjust_points(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AdjustPointsRequest>,
) -> ApiResult<Json<User>> {
    let user = state.engine.adjust_points(req.user_id, req.delta).await?;
    Ok(Json(user))
}
