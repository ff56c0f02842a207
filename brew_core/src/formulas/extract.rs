//! # Extract and Calorie Formulas
//!
//! Conversions from specific gravity to degrees Plato, and the real extract
//! and calorie estimates built on them.
//!
//! ## References
//!
//! - Ensminger, "Beer, Alcohol and Calories" (hbd.org/ensmingr)

use super::alcohol::abw;
use super::guard::{real_output, require_finite, require_gravity_drop};
use crate::errors::BrewResult;

/// Convert specific gravity to degrees Plato
///
/// # Formula
/// ```text
/// °P = -463.37 + 668.72 × SG - 205.35 × SG²
/// ```
///
/// # Example
/// ```rust
/// use brew_core::formulas::plato;
///
/// let p = plato(1.070).unwrap();
/// assert!((p - 17.055185).abs() < 1e-9);
/// ```
pub fn plato(sg: f64) -> BrewResult<f64> {
    const FORMULA: &str = "plato";
    require_finite(FORMULA, "specific_gravity", sg)?;

    real_output(FORMULA, -463.37 + 668.72 * sg - 205.35 * sg.powi(2))
}

/// Calculate real extract (degrees Plato) from original and final gravity
///
/// # Formula
/// ```text
/// RE = 0.1808 × °P(OG) + 0.8192 × °P(FG)
/// ```
pub fn real_extract(og: f64, fg: f64) -> BrewResult<f64> {
    const FORMULA: &str = "real_extract";
    require_finite(FORMULA, "original_gravity", og)?;
    require_finite(FORMULA, "final_gravity", fg)?;
    require_gravity_drop(FORMULA, og, fg)?;

    real_output(FORMULA, 0.1808 * plato(og)? + 0.8192 * plato(fg)?)
}

/// Calculate calories in a 12 oz serving
///
/// # Formula
/// ```text
/// cal = (6.9 × ABW + 4.0 × (RE - 0.1)) × FG × 3.55
/// ```
pub fn calories(og: f64, fg: f64) -> BrewResult<f64> {
    const FORMULA: &str = "calories";
    require_finite(FORMULA, "original_gravity", og)?;
    require_finite(FORMULA, "final_gravity", fg)?;
    require_gravity_drop(FORMULA, og, fg)?;
    let abw = abw(og, fg)?;
    let real_extract = real_extract(og, fg)?;

    real_output(FORMULA, (6.9 * abw + 4.0 * (real_extract - 0.1)) * fg * 3.55)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_plato() {
        assert_relative_eq!(plato(1.070).unwrap(), 17.055185000000108, epsilon = 1e-9);
        assert!(plato(f64::NAN).is_err());
    }

    #[test]
    fn test_plato_of_water_is_near_zero() {
        assert!(plato(1.0).unwrap().abs() < 0.01);
    }

    #[test]
    fn test_real_extract() {
        assert_relative_eq!(real_extract(1.070, 1.015).unwrap(), 6.216277095999994, epsilon = 1e-9);
        assert!(real_extract(1.015, 1.070).is_err());
        assert!(real_extract(f64::NAN, f64::NAN).is_err());
    }

    #[test]
    fn test_calories() {
        assert_relative_eq!(calories(1.070, 1.015).unwrap(), 234.97692128247783, epsilon = 1e-9);
        assert!(calories(1.015, 1.070).is_err());
        assert!(calories(f64::INFINITY, 1.0).is_err());
    }
}
