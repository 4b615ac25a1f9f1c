//! User records

use chrono::Utc;
use common::levels;
use common::models::User;
use common::{Error, Result};
use uuid::Uuid;

use crate::Ledger;

/// Create a user at registration
pub async fn insert(ledger: &Ledger, name: &str, email: &str) -> Result<User> {
    let mut db = ledger.write().await;

    let email = email.trim().to_lowercase();
    if db.users.values().any(|u| u.email == email) {
        return Err(Error::InvalidInput(format!(
            "email '{}' is already registered",
            email
        )));
    }

    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4(),
        name: name.trim().to_string(),
        email,
        points: 0,
        level: 1,
        carbon_saved: 0.0,
        badges: Vec::new(),
        created_at: now,
        updated_at: now,
    };
    db.users.insert(user.id, user.clone());
    Ok(user)
}

/// Get user by id
pub async fn get(ledger: &Ledger, id: Uuid) -> Result<Option<User>> {
    let db = ledger.read().await;
    Ok(db.users.get(&id).cloned())
}

/// Consistent snapshot of all users, taken under one read acquisition
pub async fn list(ledger: &Ledger) -> Result<Vec<User>> {
    let db = ledger.read().await;
    Ok(db.users.values().cloned().collect())
}

/// Add non-negative points to a user and recompute level from scratch
pub async fn add_points(ledger: &Ledger, id: Uuid, delta: i64) -> Result<User> {
    let mut db = ledger.write().await;
    let user = db
        .users
        .get_mut(&id)
        .ok_or_else(|| Error::NotFound(format!("user {}", id)))?;

    user.points += delta;
    user.level = levels::level_for(user.points);
    user.updated_at = Utc::now();
    Ok(user.clone())
}

/// Admin points correction; the only sanctioned non-monotonic points path.
/// The balance floors at zero and level is re-derived.
pub async fn adjust_points(ledger: &Ledger, id: Uuid, delta: i64) -> Result<User> {
    let mut db = ledger.write().await;
    let user = db
        .users
        .get_mut(&id)
        .ok_or_else(|| Error::NotFound(format!("user {}", id)))?;

    user.points = (user.points + delta).max(0);
    user.level = levels::level_for(user.points);
    user.updated_at = Utc::now();
    Ok(user.clone())
}

/// Accumulate a carbon delta (negative if consumption increased)
pub async fn add_carbon(ledger: &Ledger, id: Uuid, delta: f64) -> Result<User> {
    let mut db = ledger.write().await;
    let user = db
        .users
        .get_mut(&id)
        .ok_or_else(|| Error::NotFound(format!("user {}", id)))?;

    user.carbon_saved += delta;
    user.updated_at = Utc::now();
    Ok(user.clone())
}

/// Grant a badge; set semantics, so re-granting is a no-op.
/// Returns true if the badge was newly added.
pub async fn grant_badge(ledger: &Ledger, id: Uuid, badge: &str) -> Result<bool> {
    let mut db = ledger.write().await;
    let user = db
        .users
        .get_mut(&id)
        .ok_or_else(|| Error::NotFound(format!("user {}", id)))?;

    if user.badges.iter().any(|b| b == badge) {
        return Ok(false);
    }
    user.badges.push(badge.to_string());
    user.updated_at = Utc::now();
    Ok(true)
}
