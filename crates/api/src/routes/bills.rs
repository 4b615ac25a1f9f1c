//! Utility bill routes

use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiResult;
use crate::state::AppState;
use common::models::{BillOutcome, UtilityKind};

#[derive(Deserialize)]
pub struct BillRequest {
    pub user_id: Uuid,
    pub utility: UtilityKind,
    /// Billing period label, e.g. "2026-07"
    pub period: String,
    /// Consumption in the utility's native unit (kWh, liters, m³)
    pub consumption: f64,
}

pub async fn record(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BillRequest>,
) -> ApiResult<Json<BillOutcome>> {
    let outcome = state
        .engine
        .record_utility_bill(req.user_id, req.utility, &req.period, req.consumption)
        .await?;
    Ok(Json(outcome))
}
