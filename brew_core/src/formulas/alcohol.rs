//! # Alcohol and Attenuation Formulas
//!
//! Formulas derived from the drop between original gravity (OG) and final
//! gravity (FG). All three require `OG > FG`; a reading where the gravity did
//! not fall is reported as [`BrewError::OutOfDomain`](crate::errors::BrewError).
//!
//! ## Notation
//!
//! - `OG` = Original gravity (specific gravity before fermentation, e.g. 1.055)
//! - `FG` = Final gravity (specific gravity after fermentation, e.g. 1.010)
//!
//! ## References
//!
//! - Ensminger, "Beer, Alcohol and Calories" (hbd.org/ensmingr)

use super::guard::{real_output, require_finite, require_gravity_drop, require_nonzero};
use crate::errors::BrewResult;

/// Calculate alcohol by volume (percent)
///
/// # Formula
/// ```text
/// ABV = 76.08 × (OG - FG) / (1.775 - OG) × (FG / 0.794)
/// ```
///
/// # Arguments
/// * `og` - Original gravity
/// * `fg` - Final gravity, must be below `og`
///
/// `og` exactly 1.775 is `OutOfDomain`. Above 1.775 the denominator turns
/// negative and so does the result; it is returned unchanged.
///
/// # Example
/// ```rust
/// use brew_core::formulas::abv;
///
/// let abv = abv(1.055, 1.0).unwrap();
/// assert!((abv - 7.319479429051208).abs() < 1e-9);
///
/// // Gravity rose instead of falling
/// assert!(brew_core::formulas::abv(1.0, 1.055).is_err());
/// ```
pub fn abv(og: f64, fg: f64) -> BrewResult<f64> {
    const FORMULA: &str = "abv";
    require_finite(FORMULA, "original_gravity", og)?;
    require_finite(FORMULA, "final_gravity", fg)?;
    require_gravity_drop(FORMULA, og, fg)?;
    let denominator = require_nonzero(FORMULA, "1.775 - original_gravity", 1.775 - og)?;

    real_output(FORMULA, (76.08 * (og - fg) / denominator) * (fg / 0.794))
}

/// Calculate alcohol by weight (percent)
///
/// # Formula
/// ```text
/// ABW = 0.79 × ABV / FG
/// ```
pub fn abw(og: f64, fg: f64) -> BrewResult<f64> {
    const FORMULA: &str = "abw";
    require_finite(FORMULA, "original_gravity", og)?;
    require_finite(FORMULA, "final_gravity", fg)?;
    require_gravity_drop(FORMULA, og, fg)?;
    let abv = abv(og, fg)?;
    let fg = require_nonzero(FORMULA, "final_gravity", fg)?;

    real_output(FORMULA, 0.79 * abv / fg)
}

/// Calculate apparent attenuation as a fraction (0.75 = 75%)
///
/// # Formula
/// ```text
/// attenuation = (OG - FG) / (OG - 1)
/// ```
pub fn attenuation(og: f64, fg: f64) -> BrewResult<f64> {
    const FORMULA: &str = "attenuation";
    require_finite(FORMULA, "original_gravity", og)?;
    require_finite(FORMULA, "final_gravity", fg)?;
    require_gravity_drop(FORMULA, og, fg)?;
    let extract = require_nonzero(FORMULA, "original_gravity - 1", og - 1.0)?;

    real_output(FORMULA, (og - fg) / extract)
}
