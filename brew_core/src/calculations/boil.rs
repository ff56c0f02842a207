//! # Boil-Off and Gravity Adjustment
//!
//! Predicts the post-boil gravity from the pre-boil reading and volumes, and
//! how much malt extract would bring it to a target gravity.
//!
//! Total gravity (GU × gallons) is conserved while water boils off, so the
//! extract needed is the gap between the target total gravity at the
//! post-boil volume and the total gravity already in the kettle.

use serde::{Deserialize, Serialize};
use tracing::debug_span;

use crate::errors::{BrewError, BrewResult};
use crate::formulas::{extract_addition, final_gravity, gravity_units, total_gravity, ExtractType};
use crate::settings::BrewSettings;
use crate::units::Gallons;

/// Input parameters for a boil calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Brew day",
///   "pre_boil_gravity": 1.040,
///   "pre_boil_volume_gal": 6.5,
///   "post_boil_volume_gal": 5.0,
///   "target_gravity": 1.060,
///   "extract": "DME"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoilInput {
    /// User label
    pub label: String,

    /// Gravity measured before the boil
    pub pre_boil_gravity: f64,

    /// Volume at the start of the boil
    pub pre_boil_volume_gal: Gallons,

    /// Expected volume at the end of the boil
    pub post_boil_volume_gal: Gallons,

    /// Desired post-boil gravity, if an extract addition should be computed
    #[serde(default)]
    pub target_gravity: Option<f64>,

    /// Extract that would be added to reach the target
    #[serde(default)]
    pub extract: ExtractType,
}

impl BoilInput {
    /// Validate input parameters.
    pub fn validate(&self) -> BrewResult<()> {
        if !self.pre_boil_gravity.is_finite() {
            return Err(BrewError::invalid_input(
                "pre_boil_gravity",
                self.pre_boil_gravity.to_string(),
                "Gravity must be a real number",
            ));
        }
        for (field, volume) in [
            ("pre_boil_volume_gal", self.pre_boil_volume_gal),
            ("post_boil_volume_gal", self.post_boil_volume_gal),
        ] {
            if !volume.0.is_finite() {
                return Err(BrewError::invalid_input(
                    field,
                    volume.0.to_string(),
                    "Volume must be a real number",
                ));
            }
            if volume.0 <= 0.0 {
                return Err(BrewError::out_of_domain(
                    "boil",
                    format!("{field} must be positive, got {}", volume.0),
                ));
            }
        }
        if let Some(target) = self.target_gravity {
            if !target.is_finite() {
                return Err(BrewError::invalid_input(
                    "target_gravity",
                    target.to_string(),
                    "Gravity must be a real number",
                ));
            }
        }
        Ok(())
    }
}

/// Results of a boil calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoilResult {
    /// Pre-boil gravity units
    pub pre_boil_gu: f64,

    /// Total gravity in the kettle (GU × gal)
    pub total_gravity: f64,

    /// Post-boil gravity units
    pub post_boil_gu: f64,

    /// Post-boil specific gravity
    pub post_boil_gravity: f64,

    /// Extract potential used (GU/lb/gal)
    pub extract_potential: f64,

    /// Pounds of extract to reach the target; negative means the wort is
    /// already above target and needs dilution instead
    pub extract_needed_lb: Option<f64>,
}

/// Calculate post-boil gravity and the extract addition needed for a target.
pub fn calculate(input: &BoilInput, settings: &BrewSettings) -> BrewResult<BoilResult> {
    let _span = debug_span!("boil", label = %input.label).entered();
    input.validate()?;
    settings.validate()?;

    let pre_volume = input.pre_boil_volume_gal.value();
    let post_volume = input.post_boil_volume_gal.value();

    let pre_boil_gu = gravity_units(input.pre_boil_gravity)?;
    let kettle_total = total_gravity(input.pre_boil_gravity, pre_volume)?;
    let post_boil_gu = final_gravity(input.pre_boil_gravity, pre_volume, post_volume)?;

    let extract = settings.resolve_extract(input.extract);
    let extract_needed_lb = match input.target_gravity {
        Some(target) => {
            let target_total = total_gravity(target, post_volume)?;
            Some(extract_addition(target_total, kettle_total, extract)?)
        }
        None => None,
    };

    Ok(BoilResult {
        pre_boil_gu,
        total_gravity: kettle_total,
        post_boil_gu,
        post_boil_gravity: 1.0 + post_boil_gu / 1000.0,
        extract_potential: extract.potential(),
        extract_needed_lb,
    })
}
