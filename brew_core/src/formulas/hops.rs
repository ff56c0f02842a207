//! # Hop Bitterness Formulas
//!
//! Alpha acid units, Tinseth utilization, and IBU.
//!
//! ## Notation
//!
//! - `α` = Alpha acid percentage of the hop (e.g. 6.4 for 6.4%)
//! - `W` = Hop weight in ounces
//! - `t` = Minutes the addition spends in the boil
//! - `G` = Wort gravity during the boil
//! - `V` = Batch volume in gallons
//!
//! ## References
//!
//! - Tinseth, "Glenn's Hop Utilization Numbers"
//! - Palmer, "How to Brew" (IBU worked examples)

use super::guard::{real_output, require_finite, require_nonzero};
use crate::errors::BrewResult;

/// Mass conversion factor in the IBU formula (mg/L per oz/gal, at 100% alpha)
const IBU_CONVERSION: f64 = 75.0;

/// Calculate alpha acid units
///
/// # Formula
/// ```text
/// AAU = α × W
/// ```
pub fn aau(alpha_percent: f64, ounces: f64) -> BrewResult<f64> {
    const FORMULA: &str = "aau";
    require_finite(FORMULA, "alpha_percent", alpha_percent)?;
    require_finite(FORMULA, "ounces", ounces)?;

    real_output(FORMULA, alpha_percent * ounces)
}

/// Calculate hop utilization with the Tinseth formula
///
/// # Formula
/// ```text
/// bigness = 1.65 × 0.000125^(G - 1)
/// boil    = (1 - e^(-0.04 × t)) / 4.15
/// U       = bigness × boil
/// ```
///
/// A zero-minute addition has exactly zero utilization.
///
/// # Example
/// ```rust
/// use brew_core::formulas::utilization;
///
/// assert_eq!(utilization(0.0, 1.070).unwrap(), 0.0);
/// assert!((utilization(10.0, 1.050).unwrap() - 0.08363227080582435).abs() < 1e-12);
/// ```
pub fn utilization(minutes: f64, boil_gravity: f64) -> BrewResult<f64> {
    const FORMULA: &str = "utilization";
    require_finite(FORMULA, "minutes", minutes)?;
    require_finite(FORMULA, "boil_gravity", boil_gravity)?;

    let bigness = 1.65 * 0.000125_f64.powf(boil_gravity - 1.0);
    let boil_time_factor = (1.0 - (-0.04 * minutes).exp()) / 4.15;
    real_output(FORMULA, bigness * boil_time_factor)
}

/// Calculate International Bittering Units for a single hop addition
///
/// # Formula
/// ```text
/// IBU = AAU × U × 75 / V
/// ```
///
/// # Arguments
/// * `alpha_percent` - Alpha acid percentage
/// * `ounces` - Hop weight in ounces
/// * `minutes` - Boil time of the addition
/// * `boil_gravity` - Wort gravity during the boil
/// * `volume_gal` - Batch volume in gallons, must be nonzero
pub fn ibu(
    alpha_percent: f64,
    ounces: f64,
    minutes: f64,
    boil_gravity: f64,
    volume_gal: f64,
) -> BrewResult<f64> {
    const FORMULA: &str = "ibu";
    require_finite(FORMULA, "alpha_percent", alpha_percent)?;
    require_finite(FORMULA, "ounces", ounces)?;
    require_finite(FORMULA, "minutes", minutes)?;
    require_finite(FORMULA, "boil_gravity", boil_gravity)?;
    require_finite(FORMULA, "volume_gal", volume_gal)?;

    bitterness(aau(alpha_percent, ounces)?, utilization(minutes, boil_gravity)?, volume_gal)
}

/// IBU from alpha acid units and utilization already computed for an addition.
pub(crate) fn bitterness(aau: f64, utilization: f64, volume_gal: f64) -> BrewResult<f64> {
    const FORMULA: &str = "ibu";
    let volume_gal = require_nonzero(FORMULA, "volume_gal", volume_gal)?;

    real_output(FORMULA, aau * utilization * IBU_CONVERSION / volume_gal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bitterness_matches_ibu() {
        let aau = aau(6.4, 1.5).unwrap();
        let utilization = utilization(60.0, 1.080).unwrap();
        assert_eq!(
            bitterness(aau, utilization, 5.0).unwrap(),
            ibu(6.4, 1.5, 60.0, 1.080, 5.0).unwrap()
        );
        assert!(bitterness(aau, utilization, 0.0).is_err());
    }

    #[test]
    fn test_aau() {
        assert_relative_eq!(aau(1.5, 6.4).unwrap(), 9.6, epsilon = 1e-12);
        assert_relative_eq!(aau(1.0, 4.6).unwrap(), 4.6, epsilon = 1e-12);
        assert!(aau(f64::NAN, 5.0).is_err());
        assert!(aau(4.0, f64::NAN).is_err());
    }

    #[test]
    fn test_utilization() {
        assert_relative_eq!(utilization(10.0, 1.050).unwrap(), 0.08363227080582435, epsilon = 1e-12);
        assert_relative_eq!(utilization(120.0, 1.030).unwrap(), 0.30113013986478654, epsilon = 1e-12);
        assert_relative_eq!(utilization(45.0, 1.090).unwrap(), 0.14780486892282785, epsilon = 1e-12);
        assert_eq!(utilization(0.0, 1.070).unwrap(), 0.0);
        assert!(utilization(f64::NAN, f64::NAN).is_err());
    }

    #[test]
    fn test_ibu() {
        // Palmer's worked examples
        assert_relative_eq!(ibu(6.4, 1.5, 60.0, 1.080, 5.0).unwrap(), 25.365869680614512, epsilon = 1e-9);
        assert_relative_eq!(ibu(4.6, 1.0, 15.0, 1.080, 5.0).unwrap(), 6.03108750923272, epsilon = 1e-9);
    }

    #[test]
    fn test_ibu_rejects_bad_inputs() {
        assert!(ibu(f64::NAN, 1.0, 15.0, 1.080, 5.0).is_err());
        assert!(ibu(4.6, 1.0, f64::NAN, 1.080, 5.0).is_err());
        assert!(ibu(4.6, 1.0, 15.0, f64::NAN, 5.0).is_err());
        assert!(ibu(4.6, 1.0, 15.0, 1.080, f64::NAN).is_err());
        assert!(ibu(4.6, 1.0, 15.0, 1.080, 0.0).is_err());
    }
}
