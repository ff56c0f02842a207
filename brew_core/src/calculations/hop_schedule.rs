//! # Hop Schedule Bitterness
//!
//! Sums the IBU contribution of every hop addition in a boil. Each addition
//! is evaluated with the Tinseth utilization at the shared boil gravity.
//!
//! An empty schedule is valid and has zero bitterness.

use serde::{Deserialize, Serialize};
use tracing::debug_span;

use crate::errors::{BrewError, BrewResult};
use crate::formulas::{aau, bitterness, utilization};
use crate::units::{Gallons, Minutes, Ounces};

/// A single hop addition.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "Cascade",
///   "alpha_percent": 6.4,
///   "weight_oz": 1.5,
///   "boil_time_min": 60.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HopAddition {
    /// Hop variety or user label
    pub name: String,

    /// Alpha acid percentage (e.g., 6.4 for 6.4%)
    pub alpha_percent: f64,

    /// Hop weight
    pub weight_oz: Ounces,

    /// Minutes in the boil
    pub boil_time_min: Minutes,
}

/// Input parameters for a hop schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HopScheduleInput {
    /// User label for this schedule
    pub label: String,

    /// Wort gravity during the boil
    pub boil_gravity: f64,

    /// Batch volume the bitterness is spread over
    pub batch_volume_gal: Gallons,

    /// Hop additions in any order
    pub additions: Vec<HopAddition>,
}

impl HopScheduleInput {
    /// Validate input parameters.
    pub fn validate(&self) -> BrewResult<()> {
        if !self.boil_gravity.is_finite() {
            return Err(BrewError::invalid_input(
                "boil_gravity",
                self.boil_gravity.to_string(),
                "Boil gravity must be a real number",
            ));
        }
        if !self.batch_volume_gal.0.is_finite() {
            return Err(BrewError::invalid_input(
                "batch_volume_gal",
                self.batch_volume_gal.0.to_string(),
                "Batch volume must be a real number",
            ));
        }
        if self.batch_volume_gal.0 <= 0.0 {
            return Err(BrewError::out_of_domain(
                "hop_schedule",
                format!("batch_volume_gal must be positive, got {}", self.batch_volume_gal.0),
            ));
        }
        for addition in &self.additions {
            if addition.weight_oz.0 < 0.0 {
                return Err(BrewError::out_of_domain(
                    "hop_schedule",
                    format!("hop weight for '{}' cannot be negative", addition.name),
                ));
            }
            if addition.boil_time_min.0 < 0.0 {
                return Err(BrewError::out_of_domain(
                    "hop_schedule",
                    format!("boil time for '{}' cannot be negative", addition.name),
                ));
            }
        }
        Ok(())
    }
}

/// Bitterness contribution of one addition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HopAdditionResult {
    /// Name copied from the input
    pub name: String,

    /// Alpha acid units
    pub aau: f64,

    /// Tinseth utilization
    pub utilization: f64,

    /// IBU contributed
    pub ibu: f64,
}

/// Results of a hop schedule calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HopScheduleResult {
    /// Per-addition results, in input order
    pub additions: Vec<HopAdditionResult>,

    /// Sum of alpha acid units
    pub total_aau: f64,

    /// Sum of IBU
    pub total_ibu: f64,
}

/// Calculate the bitterness of a hop schedule.
pub fn calculate(input: &HopScheduleInput) -> BrewResult<HopScheduleResult> {
    let _span = debug_span!("hop_schedule", label = %input.label).entered();
    input.validate()?;

    let volume_gal = input.batch_volume_gal.value();
    let additions = input
        .additions
        .iter()
        .map(|addition| {
            let aau = aau(addition.alpha_percent, addition.weight_oz.value())?;
            let utilization = utilization(addition.boil_time_min.value(), input.boil_gravity)?;
            Ok(HopAdditionResult {
                name: addition.name.clone(),
                aau,
                utilization,
                ibu: bitterness(aau, utilization, volume_gal)?,
            })
        })
        .collect::<BrewResult<Vec<_>>>()?;

    let total_aau: f64 = additions.iter().map(|a| a.aau).sum();
    let total_ibu: f64 = additions.iter().map(|a| a.ibu).sum();

    Ok(HopScheduleResult {
        additions,
        total_aau,
        total_ibu,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn addition(name: &str, alpha: f64, oz: f64, min: f64) -> HopAddition {
        HopAddition {
            name: name.to_string(),
            alpha_percent: alpha,
            weight_oz: Ounces(oz),
            boil_time_min: Minutes(min),
        }
    }

    fn test_schedule() -> HopScheduleInput {
        HopScheduleInput {
            label: "Palmer Example".to_string(),
            boil_gravity: 1.080,
            batch_volume_gal: Gallons(5.0),
            additions: vec![
                addition("Bittering", 6.4, 1.5, 60.0),
                addition("Flavor", 4.6, 1.0, 15.0),
            ],
        }
    }

    #[test]
    fn test_schedule_total() {
        let result = calculate(&test_schedule()).unwrap();

        assert_eq!(result.additions.len(), 2);
        assert_relative_eq!(result.additions[0].ibu, 25.365869680614512, epsilon = 1e-9);
        assert_relative_eq!(result.additions[1].ibu, 6.03108750923272, epsilon = 1e-9);
        assert_relative_eq!(
            result.total_ibu,
            25.365869680614512 + 6.03108750923272,
            epsilon = 1e-9
        );
        assert_relative_eq!(result.total_aau, 9.6 + 4.6, epsilon = 1e-12);
    }

    #[test]
    fn test_addition_figures_are_consistent() {
        let result = calculate(&test_schedule()).unwrap();
        for addition in &result.additions {
            assert_eq!(addition.ibu, addition.aau * addition.utilization * 75.0 / 5.0);
        }
        assert_relative_eq!(
            result.additions[0].ibu,
            crate::formulas::ibu(6.4, 1.5, 60.0, 1.080, 5.0).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_empty_schedule() {
        let mut schedule = test_schedule();
        schedule.additions.clear();
        let result = calculate(&schedule).unwrap();
        assert_eq!(result.total_ibu, 0.0);
        assert!(result.additions.is_empty());
    }

    #[test]
    fn test_flameout_addition_adds_no_bitterness() {
        let mut schedule = test_schedule();
        schedule.additions = vec![addition("Aroma", 12.0, 2.0, 0.0)];
        let result = calculate(&schedule).unwrap();
        assert_eq!(result.total_ibu, 0.0);
    }

    #[test]
    fn test_zero_volume_rejected() {
        let mut schedule = test_schedule();
        schedule.batch_volume_gal = Gallons(0.0);
        let err = calculate(&schedule).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_DOMAIN");
    }

    #[test]
    fn test_negative_boil_time_rejected() {
        let mut schedule = test_schedule();
        schedule.additions[1].boil_time_min = Minutes(-5.0);
        let err = calculate(&schedule).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_DOMAIN");
    }

    #[test]
    fn test_nan_alpha_rejected() {
        let mut schedule = test_schedule();
        schedule.additions[0].alpha_percent = f64::NAN;
        let err = calculate(&schedule).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_json_input() {
        let json = r#"{
            "label": "SMaSH",
            "boil_gravity": 1.050,
            "batch_volume_gal": 5.0,
            "additions": [
                { "name": "Citra", "alpha_percent": 12.0, "weight_oz": 1.0, "boil_time_min": 10.0 }
            ]
        }"#;
        let input: HopScheduleInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.additions[0].weight_oz, Ounces(1.0));
        assert!(calculate(&input).unwrap().total_ibu > 0.0);
    }
}
