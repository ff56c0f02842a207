//! # Batch Calculations
//!
//! Calculations that combine several formulas over one batch of beer. Each
//! calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> BrewResult<*Result>` - Pure calculation function
//!
//! Calculations that depend on calculator defaults also take a
//! [`BrewSettings`].
//!
//! ## Available Calculations
//!
//! - [`fermentation`] - ABV, attenuation, extract and calories from OG/FG
//! - [`hop_schedule`] - Total IBU of a list of hop additions
//! - [`grain_bill`] - SRM color of a list of grains
//! - [`boil`] - Post-boil gravity and extract needed for a target
//! - [`hydrometer`] - Temperature-corrected hydrometer reading

pub mod boil;
pub mod fermentation;
pub mod grain_bill;
pub mod hop_schedule;
pub mod hydrometer;

use serde::{Deserialize, Serialize};

use crate::errors::BrewResult;
use crate::settings::BrewSettings;

// Re-export commonly used types
pub use boil::{BoilInput, BoilResult};
pub use fermentation::{FermentationInput, FermentationResult};
pub use grain_bill::{Grain, GrainBillInput, GrainBillResult};
pub use hop_schedule::{HopAddition, HopScheduleInput, HopScheduleResult};
pub use hydrometer::{HydrometerInput, HydrometerResult};

/// Enum wrapper for all calculation types.
///
/// Stores heterogeneous calculations in one collection and serializes them
/// with a `"type"` tag.
///
/// ## JSON Example
///
/// ```json
/// { "type": "Fermentation", "label": "IPA", "original_gravity": 1.065, "final_gravity": 1.012 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Alcohol and extract summary
    Fermentation(FermentationInput),
    /// Hop bitterness
    HopSchedule(HopScheduleInput),
    /// Grain color
    GrainBill(GrainBillInput),
    /// Boil-off and extract addition
    Boil(BoilInput),
    /// Hydrometer temperature correction
    Hydrometer(HydrometerInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Fermentation(f) => &f.label,
            CalculationItem::HopSchedule(h) => &h.label,
            CalculationItem::GrainBill(g) => &g.label,
            CalculationItem::Boil(b) => &b.label,
            CalculationItem::Hydrometer(h) => &h.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Fermentation(_) => "Fermentation",
            CalculationItem::HopSchedule(_) => "HopSchedule",
            CalculationItem::GrainBill(_) => "GrainBill",
            CalculationItem::Boil(_) => "Boil",
            CalculationItem::Hydrometer(_) => "Hydrometer",
        }
    }

    /// Run the wrapped calculation
    pub fn run(&self, settings: &BrewSettings) -> BrewResult<CalculationOutput> {
        Ok(match self {
            CalculationItem::Fermentation(input) => {
                CalculationOutput::Fermentation(fermentation::calculate(input)?)
            }
            CalculationItem::HopSchedule(input) => {
                CalculationOutput::HopSchedule(hop_schedule::calculate(input)?)
            }
            CalculationItem::GrainBill(input) => {
                CalculationOutput::GrainBill(grain_bill::calculate(input)?)
            }
            CalculationItem::Boil(input) => CalculationOutput::Boil(boil::calculate(input, settings)?),
            CalculationItem::Hydrometer(input) => {
                CalculationOutput::Hydrometer(hydrometer::calculate(input, settings)?)
            }
        })
    }
}

/// Result of running a [`CalculationItem`], tagged the same way.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Fermentation(FermentationResult),
    HopSchedule(HopScheduleResult),
    GrainBill(GrainBillResult),
    Boil(BoilResult),
    Hydrometer(HydrometerResult),
}
