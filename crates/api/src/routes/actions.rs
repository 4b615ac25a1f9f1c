//! Action recording routes

use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiResult;
use crate::state::AppState;
use common::models::{ActionKind, ActionOutcome};

/// One scorable action; an unknown `kind` fails deserialization and is
/// rejected before any mutation
#[derive(Deserialize)]
pub struct ActionRequest {
    pub user_id: Uuid,
    pub kind: ActionKind,
    /// Stable id of the post/report/comment behind the action; the
    /// idempotency key under retries
    pub source_id: String,
}

pub async fn record(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ActionRequest>,
) -> ApiResult<Json<ActionOutcome>> {
    let outcome = state
        .engine
        .record_action(req.user_id, req.kind, &req.source_id)
        .await?;
    Ok(Json(outcome))
}
