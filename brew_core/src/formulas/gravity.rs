//! # Gravity Unit Formulas
//!
//! Gravity units (GU), total gravity of a volume of wort, concentration after
//! boil-off, and the malt extract needed to hit a target.
//!
//! ## Notation
//!
//! - `GU` = Gravity units, `(SG - 1) × 1000` rounded (1.054 → 54)
//! - Total gravity = GU × gallons, conserved while water boils off
//!
//! ## References
//!
//! - Palmer, "How to Brew" (gravity unit arithmetic)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::guard::{real_output, require_finite, require_nonzero};
use crate::errors::{BrewError, BrewResult};

/// Potential extract of liquid malt extract (GU per lb per gallon)
pub const LME_POTENTIAL: f64 = 38.0;

/// Potential extract of dry malt extract (GU per lb per gallon)
pub const DME_POTENTIAL: f64 = 45.0;

/// Malt extract used to correct wort gravity.
///
/// ## JSON Example
///
/// ```json
/// "LME"
/// "DME"
/// { "Custom": 42.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ExtractType {
    /// Liquid malt extract, 38 GU/lb/gal
    #[serde(rename = "LME")]
    Lme,
    /// Dry malt extract, 45 GU/lb/gal
    #[serde(rename = "DME")]
    Dme,
    /// Caller-supplied potential extract value
    Custom(f64),
}

impl ExtractType {
    /// Potential extract in GU per pound per gallon
    pub fn potential(&self) -> f64 {
        match self {
            ExtractType::Lme => LME_POTENTIAL,
            ExtractType::Dme => DME_POTENTIAL,
            ExtractType::Custom(value) => *value,
        }
    }
}

impl Default for ExtractType {
    fn default() -> Self {
        ExtractType::Dme
    }
}

impl fmt::Display for ExtractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractType::Lme => write!(f, "LME"),
            ExtractType::Dme => write!(f, "DME"),
            ExtractType::Custom(value) => write!(f, "{value}"),
        }
    }
}

impl FromStr for ExtractType {
    type Err = BrewError;

    /// Parse `"LME"`, `"DME"` (any case) or a numeric potential.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("LME") {
            return Ok(ExtractType::Lme);
        }
        if trimmed.eq_ignore_ascii_case("DME") {
            return Ok(ExtractType::Dme);
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(ExtractType::Custom(value)),
            _ => Err(BrewError::unknown_extract_type(s)),
        }
    }
}

/// Convert specific gravity to gravity units, rounded to the nearest integer
///
/// # Formula
/// ```text
/// GU = round((SG - 1) × 1000)
/// ```
///
/// # Example
/// ```rust
/// use brew_core::formulas::gravity_units;
///
/// assert_eq!(gravity_units(1.054).unwrap(), 54.0);
/// ```
pub fn gravity_units(gravity: f64) -> BrewResult<f64> {
    const FORMULA: &str = "gravity_units";
    require_finite(FORMULA, "gravity", gravity)?;

    real_output(FORMULA, ((gravity - 1.0) * 1000.0).round())
}

/// Calculate total gravity (GU × gallons) of a volume of wort
pub fn total_gravity(gravity: f64, volume_gal: f64) -> BrewResult<f64> {
    const FORMULA: &str = "total_gravity";
    require_finite(FORMULA, "gravity", gravity)?;
    require_finite(FORMULA, "volume_gal", volume_gal)?;

    real_output(FORMULA, gravity_units(gravity)? * volume_gal)
}

/// Calculate gravity units after the volume changes from `vol_begin_gal` to `vol_end_gal`
///
/// # Formula
/// ```text
/// GU_end = GU(SG) × V_begin / V_end
/// ```
///
/// The result is in gravity units (54 means 1.054).
pub fn final_gravity(gravity: f64, vol_begin_gal: f64, vol_end_gal: f64) -> BrewResult<f64> {
    const FORMULA: &str = "final_gravity";
    require_finite(FORMULA, "gravity", gravity)?;
    require_finite(FORMULA, "vol_begin_gal", vol_begin_gal)?;
    require_finite(FORMULA, "vol_end_gal", vol_end_gal)?;
    let vol_end_gal = require_nonzero(FORMULA, "vol_end_gal", vol_end_gal)?;

    real_output(FORMULA, total_gravity(gravity, vol_begin_gal)? / vol_end_gal)
}

/// Calculate pounds of malt extract needed to raise total gravity to a target
///
/// # Formula
/// ```text
/// lb = (target GU - total GU) / potential
/// ```
///
/// # Example
/// ```rust
/// use brew_core::formulas::{extract_addition, ExtractType};
///
/// let dme = extract_addition(408.0, 355.0, ExtractType::Dme).unwrap();
/// let custom = extract_addition(408.0, 355.0, ExtractType::Custom(45.0)).unwrap();
/// assert_eq!(dme, custom);
/// ```
pub fn extract_addition(target_gu: f64, total_gu: f64, extract: ExtractType) -> BrewResult<f64> {
    const FORMULA: &str = "extract_addition";
    require_finite(FORMULA, "target_gu", target_gu)?;
    require_finite(FORMULA, "total_gu", total_gu)?;
    let potential = require_finite(FORMULA, "extract_potential", extract.potential())?;
    let potential = require_nonzero(FORMULA, "extract_potential", potential)?;

    real_output(FORMULA, (target_gu - total_gu) / potential)
}
