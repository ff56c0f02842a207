//! # Grain Bill Color
//!
//! Estimates beer color from a grain bill: malt color units are summed over
//! all grains and the Morey equation is applied to the total.

use serde::{Deserialize, Serialize};
use tracing::debug_span;

use crate::errors::{BrewError, BrewResult};
use crate::formulas::{mcu, morey};
use crate::units::{Gallons, Pounds};

/// A single grain in the bill.
///
/// ## JSON Example
///
/// ```json
/// { "name": "Crystal 40", "weight_lb": 1.0, "lovibond": 40.0 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grain {
    /// Grain name
    pub name: String,

    /// Grain weight
    pub weight_lb: Pounds,

    /// Grain color in degrees Lovibond
    pub lovibond: f64,
}

/// Input parameters for a grain bill color estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrainBillInput {
    /// User label for this grain bill
    pub label: String,

    /// Batch volume
    pub batch_volume_gal: Gallons,

    /// Grains in the mash or steep
    pub grains: Vec<Grain>,
}

impl GrainBillInput {
    /// Validate input parameters.
    pub fn validate(&self) -> BrewResult<()> {
        if self.grains.is_empty() {
            return Err(BrewError::empty_input("grains"));
        }
        if !self.batch_volume_gal.0.is_finite() {
            return Err(BrewError::invalid_input(
                "batch_volume_gal",
                self.batch_volume_gal.0.to_string(),
                "Batch volume must be a real number",
            ));
        }
        if self.batch_volume_gal.0 <= 0.0 {
            return Err(BrewError::out_of_domain(
                "grain_bill",
                format!("batch_volume_gal must be positive, got {}", self.batch_volume_gal.0),
            ));
        }
        for grain in &self.grains {
            if grain.weight_lb.0 < 0.0 {
                return Err(BrewError::out_of_domain(
                    "grain_bill",
                    format!("weight of '{}' cannot be negative", grain.name),
                ));
            }
            if grain.lovibond < 0.0 {
                return Err(BrewError::out_of_domain(
                    "grain_bill",
                    format!("color of '{}' cannot be negative", grain.name),
                ));
            }
        }
        Ok(())
    }
}

/// Color contribution of one grain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrainResult {
    /// Name copied from the input
    pub name: String,

    /// Malt color units contributed
    pub mcu: f64,
}

/// Results of a grain bill color estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrainBillResult {
    /// Per-grain results, in input order
    pub grains: Vec<GrainResult>,

    /// Sum of malt color units
    pub total_mcu: f64,

    /// Morey SRM of the total
    pub srm: f64,
}

/// Estimate the color of a grain bill.
pub fn calculate(input: &GrainBillInput) -> BrewResult<GrainBillResult> {
    let _span = debug_span!("grain_bill", label = %input.label).entered();
    input.validate()?;

    let volume_gal = input.batch_volume_gal.value();
    let grains = input
        .grains
        .iter()
        .map(|grain| {
            Ok(GrainResult {
                name: grain.name.clone(),
                mcu: mcu(grain.weight_lb.value(), grain.lovibond, volume_gal)?,
            })
        })
        .collect::<BrewResult<Vec<_>>>()?;

    let total_mcu: f64 = grains.iter().map(|g| g.mcu).sum();

    Ok(GrainBillResult {
        grains,
        total_mcu,
        srm: morey(total_mcu)?,
    })
}
