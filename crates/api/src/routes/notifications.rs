//! Notification routes

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiResult;
use crate::state::AppState;
use common::models::Notification;

/// A user's notifications, newest first
pub async fn list(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Notification>>> {
    let items = store::notifications::list_for(&state.ledger, user_id).await?;
    Ok(Json(items))
}

pub async fn mark_read(
    State(state): State<Arc<AppState>>,
    Path((user_id, notification_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<Notification>> {
    let notification =
        store::notifications::mark_read(&state.ledger, notification_id, user_id).await?;
    Ok(Json(notification))
}
