//! # Calculator Settings
//!
//! Defaults a brewing calculator applies to batch calculations: which
//! hydrometer correction model to use, the hydrometer's calibration
//! temperature, and the extract potentials used for LME and DME.
//!
//! Settings are plain data. Callers own where they are stored; this module
//! only converts them to and from JSON.
//!
//! ## Example
//!
//! ```rust
//! use brew_core::settings::{BrewSettings, CorrectionModel};
//!
//! let settings = BrewSettings::default();
//! assert_eq!(settings.correction_model, CorrectionModel::Ratio);
//!
//! let json = settings.to_json().unwrap();
//! let roundtrip = BrewSettings::from_json(&json).unwrap();
//! assert_eq!(roundtrip.calibration_temp_f.0, 60.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BrewError, BrewResult};
use crate::formulas::{ExtractType, DME_POTENTIAL, LME_POTENTIAL};
use crate::units::Fahrenheit;

/// Hydrometer temperature correction model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrectionModel {
    /// Additive polynomial offset (hydrometer calibrated near 60 °F)
    Delta,
    /// Ratio between sample and calibration temperature
    Ratio,
}

impl Default for CorrectionModel {
    fn default() -> Self {
        CorrectionModel::Ratio
    }
}

/// Calculator-wide settings.
///
/// ## JSON Example
///
/// ```json
/// {
///   "calibration_temp_f": 60.0,
///   "correction_model": "Ratio",
///   "lme_potential": 38.0,
///   "dme_potential": 45.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrewSettings {
    /// Temperature the hydrometer reads true at
    pub calibration_temp_f: Fahrenheit,

    /// Correction model used for hydrometer readings
    pub correction_model: CorrectionModel,

    /// Potential of liquid malt extract (GU/lb/gal)
    pub lme_potential: f64,

    /// Potential of dry malt extract (GU/lb/gal)
    pub dme_potential: f64,
}

impl Default for BrewSettings {
    fn default() -> Self {
        BrewSettings {
            calibration_temp_f: Fahrenheit(60.0),
            correction_model: CorrectionModel::Ratio,
            lme_potential: LME_POTENTIAL,
            dme_potential: DME_POTENTIAL,
        }
    }
}

impl BrewSettings {
    /// Validate settings values.
    pub fn validate(&self) -> BrewResult<()> {
        if !self.calibration_temp_f.0.is_finite() {
            return Err(BrewError::invalid_input(
                "calibration_temp_f",
                self.calibration_temp_f.0.to_string(),
                "Calibration temperature must be a real number",
            ));
        }
        for (field, value) in [
            ("lme_potential", self.lme_potential),
            ("dme_potential", self.dme_potential),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(BrewError::invalid_input(
                    field,
                    value.to_string(),
                    "Extract potential must be positive",
                ));
            }
        }
        Ok(())
    }

    /// Resolve an extract type to the potential these settings assign it.
    ///
    /// LME and DME use the configured potentials; a custom value is kept as is.
    pub fn resolve_extract(&self, extract: ExtractType) -> ExtractType {
        match extract {
            ExtractType::Lme => ExtractType::Custom(self.lme_potential),
            ExtractType::Dme => ExtractType::Custom(self.dme_potential),
            custom @ ExtractType::Custom(_) => custom,
        }
    }

    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> BrewResult<Self> {
        let settings: BrewSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings to pretty JSON.
    pub fn to_json(&self) -> BrewResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
