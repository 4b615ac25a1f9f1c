//! User routes

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use common::models::{User, UserStanding, UtilityBill};

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
}

/// Register a new user
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<User>> {
    if req.name.trim().is_empty() {
        return Err(ApiError::InvalidInput("name must not be empty".to_string()));
    }
    if !req.email.contains('@') {
        return Err(ApiError::InvalidInput(format!(
            "'{}' is not a valid email address",
            req.email
        )));
    }

    let user = store::users::insert(&state.ledger, &req.name, &req.email).await?;
    Ok(Json(user))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<User>> {
    let user = store::users::get(&state.ledger, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User {} not found", user_id)))?;
    Ok(Json(user))
}

pub async fn standing(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<UserStanding>> {
    let standing = state.engine.get_user_standing(user_id).await?;
    Ok(Json(standing))
}

/// A user's bill history, newest first
pub async fn bills(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<Vec<UtilityBill>>> {
    store::users::get(&state.ledger, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User {} not found", user_id)))?;

    let bills = store::bills::list_for(&state.ledger, user_id).await?;
    Ok(Json(bills))
}
