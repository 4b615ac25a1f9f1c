//! Level thresholds
//!
//! Level is a pure function of cumulative points, re-derived from scratch on
//! every points change rather than tracked incrementally.

/// Cumulative points required to reach level `index + 1`
///
/// Must stay sorted ascending; level `n` requires `THRESHOLDS[n - 1]` points.
pub const THRESHOLDS: &[i64] = &[0, 100, 250, 500, 1000, 2000, 3500, 5500, 8000, 12000];

/// Level for a point total
///
/// Total over all non-negative inputs and monotonically non-decreasing in
/// `points`. Points below the first threshold still map to level 1.
pub fn level_for(points: i64) -> i32 {
    let reached = THRESHOLDS.iter().take_while(|&&t| points >= t).count();
    reached.max(1) as i32
}
