//! Scoring rules
//!
//! Maps each action kind to its point value. No action ever subtracts
//! points; the only debit path is reward redemption.

use common::models::ActionKind;

/// Cap on the award for a single bill entry
pub const MAX_BILL_POINTS: i64 = 50;

/// Fixed award per action kind
///
/// `BillLogged` carries no fixed value; bill awards come from
/// [`bill_points`] on the computed carbon delta.
pub fn points_for(kind: ActionKind) -> i64 {
    match kind {
        ActionKind::PostCreated => 10,
        ActionKind::CommentAdded => 5,
        ActionKind::ReportFiled => 20,
        ActionKind::ReportVerified => 5,
        ActionKind::BillLogged => 0,
    }
}

/// Award for a logged bill: one point per kg CO2e saved, rounded, floored
/// at zero and capped at [`MAX_BILL_POINTS`]
pub fn bill_points(carbon_delta: f64) -> i64 {
    (carbon_delta.round() as i64).clamp(0, MAX_BILL_POINTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_awards_are_non_negative() {
        for kind in [
            ActionKind::PostCreated,
            ActionKind::CommentAdded,
            ActionKind::ReportFiled,
            ActionKind::ReportVerified,
            ActionKind::BillLogged,
        ] {
            assert!(points_for(kind) >= 0);
        }
    }

    #[test]
    fn test_bill_points_floor_at_zero() {
        assert_eq!(bill_points(-12.5), 0);
        assert_eq!(bill_points(0.0), 0);
    }

    #[test]
    fn test_bill_points_proportional_and_capped() {
        assert_eq!(bill_points(7.4), 7);
        assert_eq!(bill_points(49.6), 50);
        assert_eq!(bill_points(400.0), MAX_BILL_POINTS);
    }
}
