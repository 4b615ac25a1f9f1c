//! Badge catalog and evaluation
//!
//! Badge rules are pure predicates over persisted user state (points, level,
//! cumulative carbon, scoring-event counts); no hidden counters. Granting is
//! set-based and monotonic: a badge is never removed, and re-evaluation after
//! any state change is safe.

use common::models::{ActionCounts, ActionKind, User};

/// Badge ids
pub mod defs {
    pub const FIRST_POST: &str = "first_post";
    pub const POSTS_10: &str = "posts_10";
    pub const FIRST_REPORT: &str = "first_report";
    pub const REPORTS_10: &str = "reports_10";
    pub const VERIFIER_5: &str = "verifier_5";
    pub const METER_READER: &str = "meter_reader";
    pub const CARBON_10: &str = "carbon_10";
    pub const CARBON_100: &str = "carbon_100";
    pub const POINTS_100: &str = "points_100";
    pub const POINTS_1000: &str = "points_1000";
    pub const LEVEL_5: &str = "level_5";
}

/// Milestone predicate for a badge
#[derive(Debug, Clone, Copy)]
pub enum BadgeRule {
    MinPoints(i64),
    MinLevel(i32),
    /// Cumulative kg CO2e saved
    MinCarbon(f64),
    MinActions(ActionKind, u32),
}

/// A badge definition from the static catalog
#[derive(Debug, Clone, Copy)]
pub struct BadgeDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub rule: BadgeRule,
}

/// Static badge catalog, loaded at startup and never mutated by users
pub static CATALOG: &[BadgeDefinition] = &[
    BadgeDefinition {
        id: defs::FIRST_POST,
        name: "First Voice",
        description: "Share your first post",
        rule: BadgeRule::MinActions(ActionKind::PostCreated, 1),
    },
    BadgeDefinition {
        id: defs::POSTS_10,
        name: "Storyteller",
        description: "Share 10 posts",
        rule: BadgeRule::MinActions(ActionKind::PostCreated, 10),
    },
    BadgeDefinition {
        id: defs::FIRST_REPORT,
        name: "Watchdog",
        description: "File your first environmental report",
        rule: BadgeRule::MinActions(ActionKind::ReportFiled, 1),
    },
    BadgeDefinition {
        id: defs::REPORTS_10,
        name: "Neighborhood Watch",
        description: "File 10 environmental reports",
        rule: BadgeRule::MinActions(ActionKind::ReportFiled, 10),
    },
    BadgeDefinition {
        id: defs::VERIFIER_5,
        name: "Fact Checker",
        description: "Verify 5 reports from other users",
        rule: BadgeRule::MinActions(ActionKind::ReportVerified, 5),
    },
    BadgeDefinition {
        id: defs::METER_READER,
        name: "Meter Reader",
        description: "Log your first utility bill",
        rule: BadgeRule::MinActions(ActionKind::BillLogged, 1),
    },
    BadgeDefinition {
        id: defs::CARBON_10,
        name: "Carbon Cutter",
        description: "Save 10 kg of CO2",
        rule: BadgeRule::MinCarbon(10.0),
    },
    BadgeDefinition {
        id: defs::CARBON_100,
        name: "Climate Champion",
        description: "Save 100 kg of CO2",
        rule: BadgeRule::MinCarbon(100.0),
    },
    BadgeDefinition {
        id: defs::POINTS_100,
        name: "Century Club",
        description: "Reach 100 points",
        rule: BadgeRule::MinPoints(100),
    },
    BadgeDefinition {
        id: defs::POINTS_1000,
        name: "Point Tycoon",
        description: "Reach 1000 points",
        rule: BadgeRule::MinPoints(1000),
    },
    BadgeDefinition {
        id: defs::LEVEL_5,
        name: "High Achiever",
        description: "Reach level 5",
        rule: BadgeRule::MinLevel(5),
    },
];

fn satisfied(rule: BadgeRule, user: &User, counts: &ActionCounts) -> bool {
    match rule {
        BadgeRule::MinPoints(n) => user.points >= n,
        BadgeRule::MinLevel(n) => user.level >= n,
        BadgeRule::MinCarbon(kg) => user.carbon_saved >= kg,
        BadgeRule::MinActions(kind, n) => counts.count(kind) >= n,
    }
}

/// Badges whose rule now holds but that the user does not hold yet
pub fn newly_earned(user: &User, counts: &ActionCounts) -> Vec<&'static BadgeDefinition> {
    CATALOG
        .iter()
        .filter(|def| !user.badges.iter().any(|b| b == def.id))
        .filter(|def| satisfied(def.rule, user, counts))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_user(points: i64, level: i32, carbon: f64, badges: Vec<String>) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            points,
            level,
            carbon_saved: carbon,
            badges,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_points_badge_at_threshold() {
        let user = make_user(100, 2, 0.0, Vec::new());
        let earned = newly_earned(&user, &ActionCounts::default());
        assert!(earned.iter().any(|d| d.id == defs::POINTS_100));
        assert!(!earned.iter().any(|d| d.id == defs::POINTS_1000));
    }

    #[test]
    fn test_held_badges_are_skipped() {
        let user = make_user(100, 2, 0.0, vec![defs::POINTS_100.to_string()]);
        let earned = newly_earned(&user, &ActionCounts::default());
        assert!(!earned.iter().any(|d| d.id == defs::POINTS_100));
    }

    #[test]
    fn test_action_count_badge() {
        let user = make_user(20, 1, 0.0, Vec::new());
        let counts = ActionCounts {
            reports_filed: 1,
            ..Default::default()
        };
        let earned = newly_earned(&user, &counts);
        assert!(earned.iter().any(|d| d.id == defs::FIRST_REPORT));
        assert!(!earned.iter().any(|d| d.id == defs::REPORTS_10));
    }

    #[test]
    fn test_carbon_badge_ignores_negative_total() {
        let user = make_user(0, 1, -5.0, Vec::new());
        let earned = newly_earned(&user, &ActionCounts::default());
        assert!(!earned.iter().any(|d| d.id == defs::CARBON_10));
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids: Vec<&str> = CATALOG.iter().map(|d| d.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CATALOG.len());
    }
}
