//! Carbon footprint calculation

use common::models::UtilityKind;
use common::{Error, Result};

/// kg CO2e per kWh of grid electricity (varies by region)
pub const ELECTRICITY_KG_PER_KWH: f64 = 0.5;
/// kg CO2e per liter of treated water
pub const WATER_KG_PER_LITER: f64 = 0.0003;
/// kg CO2e per cubic meter of natural gas
pub const GAS_KG_PER_M3: f64 = 2.0;

/// Conversion factor for a utility's native unit
pub fn conversion_factor(kind: UtilityKind) -> f64 {
    match kind {
        UtilityKind::Electricity => ELECTRICITY_KG_PER_KWH,
        UtilityKind::Water => WATER_KG_PER_LITER,
        UtilityKind::Gas => GAS_KG_PER_M3,
    }
}

/// Carbon delta for a pair of consumption readings, in kg CO2e.
///
/// A reduction yields a positive delta (savings), an increase a negative
/// one. The first reading establishes the baseline: no previous value means
/// a zero delta, not a saving.
pub fn compute_delta(kind: UtilityKind, previous: Option<f64>, current: f64) -> Result<f64> {
    if !current.is_finite() || current < 0.0 {
        return Err(Error::InvalidInput(format!(
            "consumption must be a non-negative number, got {}",
            current
        )));
    }
    let previous = match previous {
        None => return Ok(0.0),
        Some(p) if !p.is_finite() || p < 0.0 => {
            return Err(Error::InvalidInput(format!(
                "previous consumption must be a non-negative number, got {}",
                p
            )));
        }
        Some(p) => p,
    };

    Ok((previous - current) * conversion_factor(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction_is_positive_delta() {
        let delta = compute_delta(UtilityKind::Electricity, Some(100.0), 80.0).unwrap();
        assert_eq!(delta, 20.0 * ELECTRICITY_KG_PER_KWH);
    }

    #[test]
    fn test_increase_is_negative_delta() {
        let delta = compute_delta(UtilityKind::Electricity, Some(80.0), 100.0).unwrap();
        assert_eq!(delta, -20.0 * ELECTRICITY_KG_PER_KWH);
    }

    #[test]
    fn test_no_change_is_zero_not_error() {
        let delta = compute_delta(UtilityKind::Gas, Some(100.0), 100.0).unwrap();
        assert_eq!(delta, 0.0);
    }

    #[test]
    fn test_first_reading_is_baseline() {
        let delta = compute_delta(UtilityKind::Water, None, 5000.0).unwrap();
        assert_eq!(delta, 0.0);
    }

    #[test]
    fn test_negative_consumption_rejected() {
        assert!(compute_delta(UtilityKind::Electricity, Some(100.0), -1.0).is_err());
        assert!(compute_delta(UtilityKind::Electricity, Some(-1.0), 100.0).is_err());
    }

    #[test]
    fn test_factor_is_per_utility() {
        let elec = compute_delta(UtilityKind::Electricity, Some(10.0), 0.0).unwrap();
        let gas = compute_delta(UtilityKind::Gas, Some(10.0), 0.0).unwrap();
        assert_eq!(elec, 10.0 * ELECTRICITY_KG_PER_KWH);
        assert_eq!(gas, 10.0 * GAS_KG_PER_M3);
    }
}
