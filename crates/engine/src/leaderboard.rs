//! Leaderboard aggregation
//!
//! Rankings are recomputed per query from a consistent snapshot of the users
//! collection; they are a derived view, never a source of truth.

use std::cmp::Ordering;

use common::models::{LeaderboardEntry, LeaderboardMetric, User};

/// Rank a snapshot of users by the given metric.
///
/// Primary sort is the metric value descending; ties break by earlier
/// account creation, then by id, so the ordering is fully deterministic.
pub fn rank(mut users: Vec<User>, metric: LeaderboardMetric, limit: usize) -> Vec<LeaderboardEntry> {
    users.sort_by(|a, b| {
        metric_order(a, b, metric)
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });
    users.truncate(limit);

    users
        .into_iter()
        .enumerate()
        .map(|(idx, user)| LeaderboardEntry {
            rank: idx as i32 + 1,
            user_id: user.id,
            name: user.name,
            points: user.points,
            level: user.level,
            carbon_saved: user.carbon_saved,
            badges_count: user.badges.len() as i32,
        })
        .collect()
}

fn metric_order(a: &User, b: &User, metric: LeaderboardMetric) -> Ordering {
    match metric {
        LeaderboardMetric::Points => b.points.cmp(&a.points),
        LeaderboardMetric::Level => b.level.cmp(&a.level),
        LeaderboardMetric::CarbonSaved => b.carbon_saved.total_cmp(&a.carbon_saved),
    }
}
