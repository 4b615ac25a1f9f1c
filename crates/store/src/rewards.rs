//! Reward catalog and redemption

use chrono::Utc;
use common::levels;
use common::models::{Redemption, Reward};
use common::{Error, Result};
use uuid::Uuid;

use crate::Ledger;

/// Add a reward to the catalog
pub async fn insert(
    ledger: &Ledger,
    title: &str,
    description: &str,
    cost: i64,
    stock: i64,
) -> Result<Reward> {
    let mut db = ledger.write().await;
    let reward = Reward {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: description.to_string(),
        cost,
        stock,
        created_at: Utc::now(),
    };
    db.rewards.insert(reward.id, reward.clone());
    Ok(reward)
}

/// Get reward by id
pub async fn get(ledger: &Ledger, id: Uuid) -> Result<Option<Reward>> {
    let db = ledger.read().await;
    Ok(db.rewards.get(&id).cloned())
}

/// Catalog listing, cheapest first
pub async fn list(ledger: &Ledger) -> Result<Vec<Reward>> {
    let db = ledger.read().await;
    let mut rewards: Vec<Reward> = db.rewards.values().cloned().collect();
    rewards.sort_by_key(|r| (r.cost, r.id));
    Ok(rewards)
}

/// Replace a reward's stock count
pub async fn set_stock(ledger: &Ledger, id: Uuid, stock: i64) -> Result<Reward> {
    let mut db = ledger.write().await;
    let reward = db
        .rewards
        .get_mut(&id)
        .ok_or_else(|| Error::NotFound(format!("reward {}", id)))?;
    reward.stock = stock;
    Ok(reward.clone())
}

/// Redeem a reward for a user.
///
/// Balance check, stock check, point debit (with level recompute), stock
/// decrement, and receipt insert happen inside one writer critical section:
/// concurrent redemptions of the same last unit, or concurrent spends of the
/// same balance, cannot both succeed.
pub async fn redeem(ledger: &Ledger, user_id: Uuid, reward_id: Uuid) -> Result<Redemption> {
    let mut db = ledger.write().await;

    let (cost, stock, title) = {
        let reward = db
            .rewards
            .get(&reward_id)
            .ok_or_else(|| Error::NotFound(format!("reward {}", reward_id)))?;
        (reward.cost, reward.stock, reward.title.clone())
    };
    let points = db
        .users
        .get(&user_id)
        .ok_or_else(|| Error::NotFound(format!("user {}", user_id)))?
        .points;

    if stock <= 0 {
        return Err(Error::OutOfStock);
    }
    if points < cost {
        return Err(Error::InsufficientPoints {
            required: cost,
            available: points,
        });
    }

    let now = Utc::now();
    if let Some(user) = db.users.get_mut(&user_id) {
        user.points -= cost;
        user.level = levels::level_for(user.points);
        user.updated_at = now;
    }
    if let Some(reward) = db.rewards.get_mut(&reward_id) {
        reward.stock -= 1;
    }

    let receipt = Redemption {
        id: Uuid::new_v4(),
        user_id,
        reward_id,
        reward_title: title,
        cost,
        created_at: now,
    };
    db.redemptions.insert(receipt.id, receipt.clone());
    Ok(receipt)
}
