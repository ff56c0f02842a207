//! # Hydrometer Reading Correction
//!
//! Corrects a hydrometer reading taken at sample temperature back to the
//! hydrometer's calibration temperature.
//!
//! The correction model comes from the input when given, otherwise from
//! [`BrewSettings::correction_model`]. The ratio model uses the configured
//! calibration temperature; the delta model has a fixed calibration near 60 °F.

use serde::{Deserialize, Serialize};
use tracing::debug_span;

use crate::errors::{BrewError, BrewResult};
use crate::formulas::{gravity_correction_delta, gravity_correction_ratio};
use crate::settings::{BrewSettings, CorrectionModel};
use crate::units::Fahrenheit;

/// Input parameters for a hydrometer correction.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Pre-boil sample",
///   "reading": 1.050,
///   "sample_temp_f": 100.4,
///   "model": "Ratio"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrometerInput {
    /// User label
    pub label: String,

    /// Gravity as read off the hydrometer
    pub reading: f64,

    /// Temperature of the sample
    pub sample_temp_f: Fahrenheit,

    /// Correction model; falls back to the settings when absent
    #[serde(default)]
    pub model: Option<CorrectionModel>,
}

impl HydrometerInput {
    /// Validate input parameters.
    pub fn validate(&self) -> BrewResult<()> {
        if !self.reading.is_finite() {
            return Err(BrewError::invalid_input(
                "reading",
                self.reading.to_string(),
                "Reading must be a real number",
            ));
        }
        if self.reading <= 0.0 {
            return Err(BrewError::out_of_domain(
                "hydrometer",
                format!("reading must be a positive gravity, got {}", self.reading),
            ));
        }
        if !self.sample_temp_f.0.is_finite() {
            return Err(BrewError::invalid_input(
                "sample_temp_f",
                self.sample_temp_f.0.to_string(),
                "Sample temperature must be a real number",
            ));
        }
        Ok(())
    }
}

/// Results of a hydrometer correction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrometerResult {
    /// Reading corrected to calibration temperature
    pub corrected_gravity: f64,

    /// Corrected minus raw reading
    pub correction: f64,

    /// Model that produced the correction
    pub model: CorrectionModel,
}

/// Correct a hydrometer reading for sample temperature.
pub fn calculate(input: &HydrometerInput, settings: &BrewSettings) -> BrewResult<HydrometerResult> {
    let _span = debug_span!("hydrometer", label = %input.label).entered();
    input.validate()?;
    settings.validate()?;

    let model = input.model.unwrap_or(settings.correction_model);
    let temp_f = input.sample_temp_f.value();

    let corrected_gravity = match model {
        CorrectionModel::Delta => gravity_correction_delta(temp_f, input.reading)?,
        CorrectionModel::Ratio => {
            gravity_correction_ratio(temp_f, input.reading, settings.calibration_temp_f.value())?
        }
    };

    Ok(HydrometerResult {
        corrected_gravity,
        correction: corrected_gravity - input.reading,
        model,
    })
}
