//! Engine entry points
//!
//! One method per operation exposed to the request-handling layer. All
//! mutations of a single user's state run under that user's async mutex, so
//! award, level recompute, and badge evaluation are applied in causal order
//! and never interleave for the same user, while distinct users proceed in
//! parallel. Reward redemption additionally relies on the store's atomic
//! check-then-debit (see `store::rewards::redeem`).

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use common::models::{
    ActionKind, ActionOutcome, BillOutcome, LeaderboardEntry, LeaderboardMetric, NotificationKind,
    Redemption, Reward, ScoringEvent, User, UserStanding, UtilityBill, UtilityKind,
};
use common::{Error, Result};
use store::Ledger;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{badges, carbon, leaderboard, scoring};

/// The scoring and carbon-accounting engine
#[derive(Clone)]
pub struct Engine {
    ledger: Ledger,
    user_locks: Arc<Mutex<HashMap<Uuid, Arc<Mutex<()>>>>>,
}

impl Engine {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger,
            user_locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Serialize mutations of one user's state
    async fn lock_user(&self, user_id: Uuid) -> OwnedMutexGuard<()> {
        let cell = {
            let mut locks = self.user_locks.lock().await;
            locks
                .entry(user_id)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        cell.lock_owned().await
    }

    async fn require_user(&self, user_id: Uuid) -> Result<User> {
        store::users::get(&self.ledger, user_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("user {}", user_id)))
    }

    /// Record a scorable action and award its points at most once.
    ///
    /// `source_id` identifies the physical entity behind the action (post id,
    /// report id); a retried request with the same triple is a success no-op.
    pub async fn record_action(
        &self,
        user_id: Uuid,
        kind: ActionKind,
        source_id: &str,
    ) -> Result<ActionOutcome> {
        if kind == ActionKind::BillLogged {
            return Err(Error::InvalidInput(
                "utility bills are recorded through the bill entry path".to_string(),
            ));
        }
        let source_id = source_id.trim();
        if source_id.is_empty() {
            return Err(Error::InvalidInput("source id must not be empty".to_string()));
        }

        let _guard = self.lock_user(user_id).await;
        let user = self.require_user(user_id).await?;

        let points = scoring::points_for(kind);
        let event = ScoringEvent::new(user_id, kind, source_id, points);
        if !store::events::record(&self.ledger, event).await? {
            debug!("Duplicate {} for {} ignored (source {})", kind, user.name, source_id);
            return Ok(ActionOutcome {
                points_delta: 0,
                new_level: user.level,
                new_badges: Vec::new(),
            });
        }

        let user = store::users::add_points(&self.ledger, user_id, points).await?;
        info!("Awarded {} points to {} for {}", points, user.name, kind);

        let new_badges = self.evaluate_badges(&user).await?;
        Ok(ActionOutcome {
            points_delta: points,
            new_level: user.level,
            new_badges,
        })
    }

    /// Record a manually entered utility bill.
    ///
    /// Looks up the latest prior reading of the same kind as the baseline,
    /// computes the carbon delta, appends the immutable bill, and credits
    /// points and carbon. An identical resubmission (same kind, period, and
    /// consumption) is a success no-op that writes nothing; a different
    /// consumption for an already-logged period is a correction entry.
    pub async fn record_utility_bill(
        &self,
        user_id: Uuid,
        kind: UtilityKind,
        period: &str,
        consumption: f64,
    ) -> Result<BillOutcome> {
        let period = period.trim();
        if period.is_empty() {
            return Err(Error::InvalidInput("billing period must not be empty".to_string()));
        }
        if !consumption.is_finite() || consumption < 0.0 {
            return Err(Error::InvalidInput(format!(
                "consumption must be a non-negative number, got {}",
                consumption
            )));
        }

        let _guard = self.lock_user(user_id).await;
        let user = self.require_user(user_id).await?;

        let previous = store::bills::latest_for(&self.ledger, user_id, kind).await?;
        let delta = carbon::compute_delta(kind, previous.as_ref().map(|b| b.consumption), consumption)?;
        let points = scoring::bill_points(delta);

        let source_id = format!("{}:{}:{}", kind, period, consumption);
        let event = ScoringEvent::new(user_id, ActionKind::BillLogged, &source_id, points);
        if !store::events::record(&self.ledger, event).await? {
            debug!("Duplicate bill for {} ignored ({})", user.name, source_id);
            return Ok(BillOutcome {
                bill_id: None,
                carbon_delta: 0.0,
                points_delta: 0,
                new_level: user.level,
                new_badges: Vec::new(),
            });
        }

        let bill = store::bills::insert(
            &self.ledger,
            UtilityBill {
                id: Uuid::new_v4(),
                user_id,
                kind,
                period: period.to_string(),
                consumption,
                previous_consumption: previous.map(|b| b.consumption),
                carbon_delta: delta,
                created_at: Utc::now(),
            },
        )
        .await?;

        store::users::add_points(&self.ledger, user_id, points).await?;
        let user = store::users::add_carbon(&self.ledger, user_id, delta).await?;

        if delta > 0.0 {
            info!("{} saved {:.1} kg CO2 by reducing {} usage", user.name, delta, kind);
            store::notifications::insert(
                &self.ledger,
                user_id,
                NotificationKind::Carbon,
                "Great job!",
                &format!("You saved {:.1} kg CO2 by reducing your {} usage.", delta, kind),
                serde_json::json!({ "carbon_saved": delta, "points_earned": points }),
            )
            .await?;
        }

        let new_badges = self.evaluate_badges(&user).await?;
        Ok(BillOutcome {
            bill_id: Some(bill.id),
            carbon_delta: delta,
            points_delta: points,
            new_level: user.level,
            new_badges,
        })
    }

    /// Redeem a reward; the balance and stock checks plus both debits are one
    /// atomic step in the store
    pub async fn redeem_reward(&self, user_id: Uuid, reward_id: Uuid) -> Result<Redemption> {
        let _guard = self.lock_user(user_id).await;
        let receipt = store::rewards::redeem(&self.ledger, user_id, reward_id).await?;

        info!(
            "🎁 User {} redeemed \"{}\" for {} points",
            user_id, receipt.reward_title, receipt.cost
        );
        store::notifications::insert(
            &self.ledger,
            user_id,
            NotificationKind::Reward,
            "Reward claimed!",
            &format!("You claimed the \"{}\" reward.", receipt.reward_title),
            serde_json::json!({ "reward_id": receipt.reward_id, "cost": receipt.cost }),
        )
        .await?;
        Ok(receipt)
    }

    /// Ranked view over all users, recomputed from a consistent snapshot
    pub async fn get_leaderboard(
        &self,
        metric: LeaderboardMetric,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>> {
        let users = store::users::list(&self.ledger).await?;
        Ok(leaderboard::rank(users, metric, limit))
    }

    /// A user's current points, level, carbon total, badges, action counts,
    /// and rank on the points leaderboard
    pub async fn get_user_standing(&self, user_id: Uuid) -> Result<UserStanding> {
        let user = self.require_user(user_id).await?;
        let actions = store::events::counts_for(&self.ledger, user_id).await?;

        let users = store::users::list(&self.ledger).await?;
        let rank = leaderboard::rank(users, LeaderboardMetric::Points, usize::MAX)
            .into_iter()
            .find(|e| e.user_id == user_id)
            .map(|e| e.rank);

        Ok(UserStanding {
            user_id: user.id,
            name: user.name,
            points: user.points,
            level: user.level,
            carbon_saved: user.carbon_saved,
            badges: user.badges,
            actions,
            rank,
        })
    }

    /// Admin: add a reward to the catalog
    pub async fn create_reward(
        &self,
        title: &str,
        description: &str,
        cost: i64,
        stock: i64,
    ) -> Result<Reward> {
        if title.trim().is_empty() {
            return Err(Error::InvalidInput("reward title must not be empty".to_string()));
        }
        if cost < 0 {
            return Err(Error::InvalidInput("reward cost must be non-negative".to_string()));
        }
        if stock < 0 {
            return Err(Error::InvalidInput("reward stock must be non-negative".to_string()));
        }
        store::rewards::insert(&self.ledger, title.trim(), description, cost, stock).await
    }

    /// Admin: replace a reward's stock count
    pub async fn update_stock(&self, reward_id: Uuid, stock: i64) -> Result<Reward> {
        if stock < 0 {
            return Err(Error::InvalidInput("reward stock must be non-negative".to_string()));
        }
        store::rewards::set_stock(&self.ledger, reward_id, stock).await
    }

    /// Admin: explicit points correction, the one sanctioned non-monotonic
    /// points path. The balance floors at zero; badges are re-evaluated.
    pub async fn adjust_points(&self, user_id: Uuid, delta: i64) -> Result<User> {
        let _guard = self.lock_user(user_id).await;
        let user = store::users::adjust_points(&self.ledger, user_id, delta).await?;
        warn!("Admin adjusted points for {} by {}", user.name, delta);

        self.evaluate_badges(&user).await?;
        self.require_user(user_id).await
    }

    /// Re-check every unheld badge against current state; grants are
    /// set-based, so calling this repeatedly is safe
    async fn evaluate_badges(&self, user: &User) -> Result<Vec<String>> {
        let counts = store::events::counts_for(&self.ledger, user.id).await?;
        let mut granted = Vec::new();

        for def in badges::newly_earned(user, &counts) {
            if store::users::grant_badge(&self.ledger, user.id, def.id).await? {
                info!("🏅 Badge unlocked: {} for {}", def.id, user.name);
                store::notifications::insert(
                    &self.ledger,
                    user.id,
                    NotificationKind::Badge,
                    "Badge unlocked!",
                    &format!("You earned the \"{}\" badge.", def.name),
                    serde_json::json!({ "badge_id": def.id }),
                )
                .await?;
                granted.push(def.id.to_string());
            }
        }
        Ok(granted)
    }
}
