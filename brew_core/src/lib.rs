//! # brew_core - Brewing Chemistry Calculation Engine
//!
//! `brew_core` implements the standard homebrewing formulas: gravity units,
//! hydrometer temperature corrections, alcohol content, extract and calories,
//! beer color, and hop bitterness. All inputs and outputs are
//! JSON-serializable so the engine can sit behind any front end.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All calculation types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, never a silent NaN
//! - **Traceable**: Every formula is listed with its source in [`formulas::registry`]
//!
//! ## Quick Start
//!
//! ```rust
//! use brew_core::formulas::{abv, ibu, srm};
//!
//! let alcohol = abv(1.070, 1.015).unwrap();
//! assert!((alcohol - 7.5873).abs() < 1e-4);
//!
//! let bitterness = ibu(6.4, 1.5, 60.0, 1.080, 5.0).unwrap();
//! let color = srm(7.0, 5.0, 5.0).unwrap();
//! assert!(bitterness > 25.0 && color > 5.0);
//! ```
//!
//! ## Modules
//!
//! - [`formulas`] - One function per brewing formula, plus the formula registry
//! - [`calculations`] - Batch calculations built from the formulas
//! - [`settings`] - Calculator defaults (correction model, extract potentials)
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod formulas;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutput};
pub use errors::{BrewError, BrewResult};
pub use formulas::{ExtractType, Formula};
pub use settings::{BrewSettings, CorrectionModel};
