//! # Error Types
//!
//! Structured error types for brew_core. A formula either returns a value or
//! one of these errors; nothing in the formula set panics on bad input.
//!
//! The two "no result" kinds are:
//!
//! - [`BrewError::InvalidInput`] - a parameter is not a real number (NaN or infinite)
//! - [`BrewError::OutOfDomain`] - a precondition failed (e.g. OG not above FG,
//!   zero volume) or the computation left the real numbers
//!
//! ## Example
//!
//! ```rust
//! use brew_core::errors::{BrewError, BrewResult};
//!
//! fn validate_volume(volume_gal: f64) -> BrewResult<()> {
//!     if volume_gal == 0.0 {
//!         return Err(BrewError::out_of_domain("mcu", "volume must be nonzero"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_volume(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for brew_core operations
pub type BrewResult<T> = Result<T, BrewError>;

/// Structured error type for formula and calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BrewError {
    /// A parameter is not a real number
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A domain precondition failed or the result is not a real number
    #[error("Out of domain in {formula}: {reason}")]
    OutOfDomain { formula: String, reason: String },

    /// Extract type symbol is neither LME, DME nor a number
    #[error("Unknown extract type: '{value}' (expected LME, DME or a numeric potential)")]
    UnknownExtractType { value: String },

    /// A collection that needs at least one entry was empty
    #[error("Empty input: '{field}' requires at least one entry")]
    EmptyInput { field: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl BrewError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BrewError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an OutOfDomain error
    pub fn out_of_domain(formula: impl Into<String>, reason: impl Into<String>) -> Self {
        BrewError::OutOfDomain {
            formula: formula.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownExtractType error
    pub fn unknown_extract_type(value: impl Into<String>) -> Self {
        BrewError::UnknownExtractType {
            value: value.into(),
        }
    }

    /// Create an EmptyInput error
    pub fn empty_input(field: impl Into<String>) -> Self {
        BrewError::EmptyInput {
            field: field.into(),
        }
    }

    /// True for the two kinds a formula reports as "no result".
    pub fn is_no_result(&self) -> bool {
        matches!(
            self,
            BrewError::InvalidInput { .. } | BrewError::OutOfDomain { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BrewError::InvalidInput { .. } => "INVALID_INPUT",
            BrewError::OutOfDomain { .. } => "OUT_OF_DOMAIN",
            BrewError::UnknownExtractType { .. } => "UNKNOWN_EXTRACT_TYPE",
            BrewError::EmptyInput { .. } => "EMPTY_INPUT",
            BrewError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for BrewError {
    fn from(err: serde_json::Error) -> Self {
        BrewError::SerializationError {
            reason: err.to_string(),
        }
    }
}
