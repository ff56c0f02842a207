//! # Fermentation Summary
//!
//! Everything a calculator shows once a batch has an original and a final
//! gravity reading: alcohol, attenuation, extract and calories.
//!
//! ## Example
//!
//! ```rust
//! use brew_core::calculations::fermentation::{calculate, FermentationInput};
//!
//! let input = FermentationInput {
//!     label: "Pale Ale".to_string(),
//!     original_gravity: 1.054,
//!     final_gravity: 1.012,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.attenuation - 0.7778).abs() < 1e-4);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug_span;

use crate::errors::{BrewError, BrewResult};
use crate::formulas::{abv, abw, attenuation, calories, gravity_units, plato, real_extract};

/// Input parameters for a fermentation summary.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Pale Ale",
///   "original_gravity": 1.054,
///   "final_gravity": 1.012
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FermentationInput {
    /// User label for this batch
    pub label: String,

    /// Specific gravity before fermentation
    pub original_gravity: f64,

    /// Specific gravity after fermentation
    pub final_gravity: f64,
}

impl FermentationInput {
    /// Validate input parameters.
    pub fn validate(&self) -> BrewResult<()> {
        for (field, value) in [
            ("original_gravity", self.original_gravity),
            ("final_gravity", self.final_gravity),
        ] {
            if !value.is_finite() {
                return Err(BrewError::invalid_input(
                    field,
                    value.to_string(),
                    "Gravity must be a real number",
                ));
            }
        }
        if self.original_gravity <= self.final_gravity {
            return Err(BrewError::out_of_domain(
                "fermentation",
                format!(
                    "original gravity {} must exceed final gravity {}",
                    self.original_gravity, self.final_gravity
                ),
            ));
        }
        Ok(())
    }
}

/// Results of a fermentation summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FermentationResult {
    /// Alcohol by volume (%)
    pub abv_percent: f64,

    /// Alcohol by weight (%)
    pub abw_percent: f64,

    /// Apparent attenuation as a fraction
    pub attenuation: f64,

    /// Original extract (°P)
    pub original_plato: f64,

    /// Apparent extract (°P)
    pub final_plato: f64,

    /// Real extract (°P)
    pub real_extract_plato: f64,

    /// Calories per 12 oz serving
    pub calories_per_12oz: f64,

    /// Original gravity in gravity units
    pub original_gu: f64,

    /// Final gravity in gravity units
    pub final_gu: f64,
}

/// Summarize a fermented batch.
pub fn calculate(input: &FermentationInput) -> BrewResult<FermentationResult> {
    let _span = debug_span!("fermentation", label = %input.label).entered();
    input.validate()?;

    let og = input.original_gravity;
    let fg = input.final_gravity;

    Ok(FermentationResult {
        abv_percent: abv(og, fg)?,
        abw_percent: abw(og, fg)?,
        attenuation: attenuation(og, fg)?,
        original_plato: plato(og)?,
        final_plato: plato(fg)?,
        real_extract_plato: real_extract(og, fg)?,
        calories_per_12oz: calories(og, fg)?,
        original_gu: gravity_units(og)?,
        final_gu: gravity_units(fg)?,
    })
}
