//! # Beer Color Formulas
//!
//! Malt color units and the Morey SRM estimate.
//!
//! - `MCU` = Malt color units (lb × °L / gal)
//! - `SRM` = Standard Reference Method color

use super::guard::{real_output, require_finite, require_nonzero};
use crate::errors::BrewResult;

/// Calculate malt color units
///
/// # Formula
/// ```text
/// MCU = weight × °L / volume
/// ```
///
/// # Arguments
/// * `weight_lb` - Grain weight in pounds
/// * `lovibond` - Grain color in degrees Lovibond
/// * `volume_gal` - Batch volume in gallons, must be nonzero
pub fn mcu(weight_lb: f64, lovibond: f64, volume_gal: f64) -> BrewResult<f64> {
    const FORMULA: &str = "mcu";
    require_finite(FORMULA, "weight_lb", weight_lb)?;
    require_finite(FORMULA, "lovibond", lovibond)?;
    require_finite(FORMULA, "volume_gal", volume_gal)?;
    let volume_gal = require_nonzero(FORMULA, "volume_gal", volume_gal)?;

    real_output(FORMULA, weight_lb * lovibond / volume_gal)
}

/// Calculate SRM color with the Morey equation
///
/// # Formula
/// ```text
/// SRM = 1.4922 × MCU^0.6859
/// ```
///
/// A negative MCU has no real power and is reported as out of domain.
///
/// # Example
/// ```rust
/// use brew_core::formulas::srm;
///
/// let color = srm(7.0, 5.0, 5.0).unwrap();
/// assert!((color - 5.6686518034).abs() < 1e-9);
/// ```
pub fn srm(weight_lb: f64, lovibond: f64, volume_gal: f64) -> BrewResult<f64> {
    const FORMULA: &str = "srm";
    require_finite(FORMULA, "weight_lb", weight_lb)?;
    require_finite(FORMULA, "lovibond", lovibond)?;
    require_finite(FORMULA, "volume_gal", volume_gal)?;

    morey(mcu(weight_lb, lovibond, volume_gal)?)
}

/// Morey equation applied to an already summed MCU
pub(crate) fn morey(mcu: f64) -> BrewResult<f64> {
    const FORMULA: &str = "srm";
    require_finite(FORMULA, "mcu", mcu)?;

    real_output(FORMULA, 1.4922 * mcu.powf(0.6859))
}
