//! # Brewing Formulas
//!
//! The formula set: one pure function per brewing formula. Every function
//! takes plain `f64` measurements (or an [`ExtractType`]) and returns
//! `BrewResult<f64>`.
//!
//! ## Validation Policy
//!
//! - A NaN or infinite parameter is [`BrewError::InvalidInput`](crate::errors::BrewError::InvalidInput)
//! - A failed precondition is [`BrewError::OutOfDomain`](crate::errors::BrewError::OutOfDomain).
//!   Every division by a caller-supplied value is guarded.
//! - A NaN or infinite result is also `OutOfDomain`
//! - Formulas built from other formulas (ABW from ABV, SRM from MCU, ...)
//!   return the dependency's error unchanged
//!
//! ## Modules
//!
//! - [`gravity`] - Gravity units, total gravity, boil-off, extract additions
//! - [`temperature`] - Hydrometer temperature corrections (two models)
//! - [`alcohol`] - ABV, ABW, attenuation
//! - [`extract`] - Plato, real extract, calories
//! - [`color`] - MCU, SRM
//! - [`hops`] - AAU, utilization, IBU
//! - [`registry`] - Formula metadata and reference document generation
//!
//! ## Units
//!
//! US customary throughout: gallons, pounds of grain, ounces of hops, °F,
//! minutes. See [`crate::units`] for metric conversion.

pub mod alcohol;
pub mod color;
pub mod extract;
pub mod gravity;
pub mod hops;
pub mod registry;
pub mod temperature;

mod guard;

pub(crate) use color::morey;
pub(crate) use hops::bitterness;

pub use alcohol::{abv, abw, attenuation};
pub use color::{mcu, srm};
pub use extract::{calories, plato, real_extract};
pub use gravity::{
    extract_addition,
    final_gravity,
    gravity_units,
    total_gravity,
    ExtractType,
    DME_POTENTIAL,
    LME_POTENTIAL,
};
pub use hops::{aau, ibu, utilization};
pub use registry::{
    Formula,
    FormulaCategory,
    FormulaMetadata,
    SourceReference,
    Variable,
    ALL_FORMULAS,
    generate_formulas_markdown,
};
pub use temperature::{gravity_correction_delta, gravity_correction_ratio};
