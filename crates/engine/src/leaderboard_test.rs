#[cfg(test)]
mod tests {
    use crate::leaderboard::rank;
    use chrono::{TimeZone, Utc};
    use common::models::{LeaderboardMetric, User};
    use uuid::Uuid;

    fn make_user(name: &str, points: i64, level: i32, carbon: f64, created_day: u32) -> User {
        let created_at = Utc.with_ymd_and_hms(2026, 1, created_day, 12, 0, 0).unwrap();
        User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            points,
            level,
            carbon_saved: carbon,
            badges: Vec::new(),
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn test_points_tie_breaks_by_earlier_creation() {
        let a = make_user("A", 30, 1, 0.0, 1);
        let b = make_user("B", 30, 1, 0.0, 2);
        let c = make_user("C", 10, 1, 0.0, 3);

        // Snapshot order must not matter
        let entries = rank(vec![c.clone(), b.clone(), a.clone()], LeaderboardMetric::Points, 10);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].user_id, a.id);
        assert_eq!(entries[1].user_id, b.id);
        assert_eq!(entries[2].user_id, c.id);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[1].rank, 2);
        assert_eq!(entries[2].rank, 3);
    }

    #[test]
    fn test_carbon_metric_orders_by_carbon_descending() {
        let a = make_user("A", 5, 1, 2.5, 1);
        let b = make_user("B", 50, 2, 40.0, 2);
        let c = make_user("C", 10, 1, -3.0, 3);

        let entries = rank(vec![a.clone(), b.clone(), c.clone()], LeaderboardMetric::CarbonSaved, 10);

        assert_eq!(entries[0].user_id, b.id);
        assert_eq!(entries[1].user_id, a.id);
        assert_eq!(entries[2].user_id, c.id);
    }

    #[test]
    fn test_level_metric_orders_by_level() {
        let a = make_user("A", 120, 2, 0.0, 2);
        let b = make_user("B", 600, 4, 0.0, 1);

        let entries = rank(vec![a.clone(), b.clone()], LeaderboardMetric::Level, 10);

        assert_eq!(entries[0].user_id, b.id);
        assert_eq!(entries[1].user_id, a.id);
    }

    #[test]
    fn test_limit_bounds_result_size() {
        let users: Vec<User> = (1..=5)
            .map(|i| make_user(&format!("U{}", i), i as i64 * 10, 1, 0.0, i))
            .collect();

        let entries = rank(users.clone(), LeaderboardMetric::Points, 3);
        assert_eq!(entries.len(), 3);

        // Limit above population returns everyone, once
        let entries = rank(users, LeaderboardMetric::Points, 50);
        assert_eq!(entries.len(), 5);
    }

    #[test]
    fn test_empty_snapshot_is_empty_ranking() {
        let entries = rank(Vec::new(), LeaderboardMetric::Points, 10);
        assert!(entries.is_empty());
    }
}
