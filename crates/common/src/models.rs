//! Domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user
///
/// `level` is always derived from `points` via [`crate::levels::level_for`];
/// `badges` is an append-only set of badge ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub points: i64,
    pub level: i32,
    /// Cumulative kg CO2e; negative if consumption increased overall
    pub carbon_saved: f64,
    pub badges: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A tracked utility
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UtilityKind {
    Electricity,
    Water,
    Gas,
}

impl std::fmt::Display for UtilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UtilityKind::Electricity => write!(f, "electricity"),
            UtilityKind::Water => write!(f, "water"),
            UtilityKind::Gas => write!(f, "gas"),
        }
    }
}

/// A manually entered utility bill
///
/// Immutable once persisted: corrections are new entries, never in-place
/// edits, so the consumption history stays auditable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UtilityBill {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: UtilityKind,
    /// Billing period label, e.g. "2026-07"
    pub period: String,
    pub consumption: f64,
    /// Consumption of the latest prior bill of the same kind, if any
    pub previous_consumption: Option<f64>,
    pub carbon_delta: f64,
    pub created_at: DateTime<Utc>,
}

/// A scorable user action
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    PostCreated,
    CommentAdded,
    ReportFiled,
    ReportVerified,
    BillLogged,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::PostCreated => write!(f, "post_created"),
            ActionKind::CommentAdded => write!(f, "comment_added"),
            ActionKind::ReportFiled => write!(f, "report_filed"),
            ActionKind::ReportVerified => write!(f, "report_verified"),
            ActionKind::BillLogged => write!(f, "bill_logged"),
        }
    }
}

/// One point award for one physical action
///
/// The idempotency key makes awards at-most-once under retried requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringEvent {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: ActionKind,
    /// Stable id of the entity that triggered the award (post id, report id,
    /// or a bill's `kind:period:consumption` triple)
    pub source_id: String,
    pub points: i64,
    pub created_at: DateTime<Utc>,
}

impl ScoringEvent {
    pub fn new(user_id: Uuid, kind: ActionKind, source_id: impl Into<String>, points: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            kind,
            source_id: source_id.into(),
            points,
            created_at: Utc::now(),
        }
    }

    /// Idempotency key: at most one scoring event per key, ever
    pub fn key(&self) -> String {
        event_key(self.user_id, self.kind, &self.source_id)
    }
}

/// Idempotency key for a `{user, action kind, source entity}` triple
pub fn event_key(user_id: Uuid, kind: ActionKind, source_id: &str) -> String {
    format!("{}:{}:{}", user_id, kind, source_id)
}

/// Per-user tally of scoring events by kind, derived from the events
/// collection on demand
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ActionCounts {
    pub posts_created: u32,
    pub comments_added: u32,
    pub reports_filed: u32,
    pub reports_verified: u32,
    pub bills_logged: u32,
}

impl ActionCounts {
    pub fn count(&self, kind: ActionKind) -> u32 {
        match kind {
            ActionKind::PostCreated => self.posts_created,
            ActionKind::CommentAdded => self.comments_added,
            ActionKind::ReportFiled => self.reports_filed,
            ActionKind::ReportVerified => self.reports_verified,
            ActionKind::BillLogged => self.bills_logged,
        }
    }

    pub fn bump(&mut self, kind: ActionKind) {
        match kind {
            ActionKind::PostCreated => self.posts_created += 1,
            ActionKind::CommentAdded => self.comments_added += 1,
            ActionKind::ReportFiled => self.reports_filed += 1,
            ActionKind::ReportVerified => self.reports_verified += 1,
            ActionKind::BillLogged => self.bills_logged += 1,
        }
    }
}

/// A redeemable reward in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reward {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub cost: i64,
    pub stock: i64,
    pub created_at: DateTime<Utc>,
}

/// Receipt for a successful redemption
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Redemption {
    pub id: Uuid,
    pub user_id: Uuid,
    pub reward_id: Uuid,
    pub reward_title: String,
    pub cost: i64,
    pub created_at: DateTime<Utc>,
}

/// Notification category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Badge,
    Reward,
    Carbon,
}

/// A user-facing notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub data: serde_json::Value,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Leaderboard sort metric
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardMetric {
    Points,
    Level,
    CarbonSaved,
}

/// Leaderboard entry, recomputed per query and never persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: i32,
    pub user_id: Uuid,
    pub name: String,
    pub points: i64,
    pub level: i32,
    pub carbon_saved: f64,
    pub badges_count: i32,
}

/// Result of recording a scorable action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub points_delta: i64,
    pub new_level: i32,
    pub new_badges: Vec<String>,
}

/// Result of recording a utility bill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillOutcome {
    pub bill_id: Option<Uuid>,
    pub carbon_delta: f64,
    pub points_delta: i64,
    pub new_level: i32,
    pub new_badges: Vec<String>,
}

/// A user's current standing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStanding {
    pub user_id: Uuid,
    pub name: String,
    pub points: i64,
    pub level: i32,
    pub carbon_saved: f64,
    pub badges: Vec<String>,
    pub actions: ActionCounts,
    /// Current rank on the points leaderboard
    pub rank: Option<i32>,
}
