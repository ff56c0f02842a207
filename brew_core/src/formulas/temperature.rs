//! # Hydrometer Temperature Corrections
//!
//! Hydrometers read true only at their calibration temperature. Two distinct
//! correction models are provided; they are not interchangeable.
//!
//! - [`gravity_correction_delta`] - a fixed polynomial offset for a hydrometer
//!   calibrated near 59-60 °F, added to the reading
//! - [`gravity_correction_ratio`] - scales the reading by the ratio of one
//!   cubic correction curve evaluated at the sample temperature and at an
//!   arbitrary calibration temperature

use super::guard::{real_output, require_finite, require_nonzero};
use crate::errors::BrewResult;

/// Offset in thousandths of a gravity point for a reading taken at `temp_f`.
fn delta_polynomial(temp_f: f64) -> f64 {
    1.313454 - 0.132674 * temp_f + 2.057793e-3 * temp_f.powi(2) - 2.627634e-6 * temp_f.powi(3)
}

/// Correction curve of the ratio model at `temp_f`.
fn ratio_polynomial(temp_f: f64) -> f64 {
    1.00130346 - 0.000134722124 * temp_f + 0.00000204052596 * temp_f.powi(2)
        - 0.00000000232820948 * temp_f.powi(3)
}

/// Correct a hydrometer reading with the additive model
///
/// # Formula
/// ```text
/// SG_corrected = SG + 0.001 × (1.313454 - 0.132674 T + 2.057793e-3 T² - 2.627634e-6 T³)
/// ```
///
/// # Arguments
/// * `temp_f` - Sample temperature in °F
/// * `gravity` - Hydrometer reading
pub fn gravity_correction_delta(temp_f: f64, gravity: f64) -> BrewResult<f64> {
    const FORMULA: &str = "gravity_correction_delta";
    require_finite(FORMULA, "temp_f", temp_f)?;
    require_finite(FORMULA, "gravity", gravity)?;

    real_output(FORMULA, delta_polynomial(temp_f) * 0.001 + gravity)
}

/// Correct a hydrometer reading with the calibration-ratio model
///
/// # Formula
/// ```text
/// SG_corrected = SG × C(T) / C(T_cal)
/// C(T) = 1.00130346 - 1.34722124e-4 T + 2.04052596e-6 T² - 2.32820948e-9 T³
/// ```
///
/// # Arguments
/// * `temp_f` - Sample temperature in °F
/// * `gravity` - Hydrometer reading
/// * `calibration_temp_f` - Temperature the hydrometer is calibrated to (usually 60 °F)
///
/// # Example
/// ```rust
/// use brew_core::formulas::gravity_correction_ratio;
///
/// let corrected = gravity_correction_ratio(100.4, 1.050, 60.0).unwrap();
/// assert!((corrected - 1.0562227410997).abs() < 1e-9);
/// ```
pub fn gravity_correction_ratio(temp_f: f64, gravity: f64, calibration_temp_f: f64) -> BrewResult<f64> {
    const FORMULA: &str = "gravity_correction_ratio";
    require_finite(FORMULA, "temp_f", temp_f)?;
    require_finite(FORMULA, "gravity", gravity)?;
    require_finite(FORMULA, "calibration_temp_f", calibration_temp_f)?;
    let calibration_curve = require_nonzero(
        FORMULA,
        "calibration curve",
        ratio_polynomial(calibration_temp_f),
    )?;

    real_output(FORMULA, gravity * (ratio_polynomial(temp_f) / calibration_curve))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ratio_correction() {
        assert_relative_eq!(
            gravity_correction_ratio(100.4, 1.050, 60.0).unwrap(),
            1.0562227410997,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_ratio_correction_at_calibration_is_identity() {
        assert_relative_eq!(gravity_correction_ratio(68.0, 1.048, 68.0).unwrap(), 1.048, epsilon = 1e-15);
    }

    #[test]
    fn test_ratio_correction_rejects_non_numeric() {
        assert!(gravity_correction_ratio(100.4, f64::NAN, 60.0).is_err());
        assert!(gravity_correction_ratio(f64::NAN, 1.050, 60.0).is_err());
        assert!(gravity_correction_ratio(100.4, 1.050, f64::NAN).is_err());
        assert!(gravity_correction_ratio(f64::NAN, f64::NAN, f64::NAN).is_err());
    }

    #[test]
    fn test_delta_correction() {
        assert_relative_eq!(
            gravity_correction_delta(100.4, 1.050).unwrap(),
            1.0560765751842796,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_delta_correction_near_calibration() {
        // The fit is within a fifth of a gravity point at 60 °F
        let corrected = gravity_correction_delta(60.0, 1.050).unwrap();
        assert!((corrected - 1.050).abs() < 0.0002);
    }

    #[test]
    fn test_delta_correction_rejects_non_numeric() {
        assert!(gravity_correction_delta(f64::NAN, 1.050).is_err());
        assert!(gravity_correction_delta(60.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_models_differ() {
        let delta = gravity_correction_delta(80.0, 1.050).unwrap();
        let ratio = gravity_correction_ratio(80.0, 1.050, 60.0).unwrap();
        assert!(delta > 1.050);
        assert!(ratio > 1.050);
        assert_ne!(delta, ratio);
    }
}
