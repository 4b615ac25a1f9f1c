//! Reward catalog and redemption routes

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiResult;
use crate::state::AppState;
use common::models::{Redemption, Reward};

/// Catalog listing, cheapest first
pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Reward>>> {
    let rewards = store::rewards::list(&state.ledger).await?;
    Ok(Json(rewards))
}

#[derive(Deserialize)]
pub struct CreateRewardRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub cost: i64,
    pub stock: i64,
}

/// Admin: add a reward to the catalog
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateRewardRequest>,
) -> ApiResult<Json<Reward>> {
    let reward = state
        .engine
        .create_reward(&req.title, &req.description, req.cost, req.stock)
        .await?;
    Ok(Json(reward))
}

#[derive(Deserialize)]
pub struct UpdateStockRequest {
    pub stock: i64,
}

/// Admin: replace a reward's stock count
pub async fn update_stock(
    State(state): State<Arc<AppState>>,
    Path(reward_id): Path<Uuid>,
    Json(req): Json<UpdateStockRequest>,
) -> ApiResult<Json<Reward>> {
    let reward = state.engine.update_stock(reward_id, req.stock).await?;
    Ok(Json(reward))
}

#[derive(Deserialize)]
pub struct RedeemRequest {
    pub user_id: Uuid,
}

pub async fn redeem(
    State(state): State<Arc<AppState>>,
    Path(reward_id): Path<Uuid>,
    Json(req): Json<RedeemRequest>,
) -> ApiResult<Json<Redemption>> {
    let receipt = state.engine.redeem_reward(req.user_id, reward_id).await?;
    Ok(Json(receipt))
}
