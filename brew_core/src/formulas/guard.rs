//! Input and output checks shared by every formula.
//!
//! Each check logs the rejection at debug level and returns the structured
//! error, so formulas can chain them with `?`.

use tracing::debug;

use crate::errors::{BrewError, BrewResult};

/// Reject NaN and infinite parameters.
pub(crate) fn require_finite(formula: &'static str, field: &'static str, value: f64) -> BrewResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        debug!(formula, field, value, "rejected non-finite input");
        Err(BrewError::invalid_input(
            field,
            value.to_string(),
            format!("{formula} requires a real number"),
        ))
    }
}

/// Reject a zero divisor.
pub(crate) fn require_nonzero(formula: &'static str, field: &'static str, value: f64) -> BrewResult<f64> {
    if value == 0.0 {
        debug!(formula, field, "rejected zero divisor");
        Err(BrewError::out_of_domain(formula, format!("{field} must be nonzero")))
    } else {
        Ok(value)
    }
}

/// Original gravity must be strictly greater than final gravity.
pub(crate) fn require_gravity_drop(formula: &'static str, og: f64, fg: f64) -> BrewResult<()> {
    if og > fg {
        Ok(())
    } else {
        debug!(formula, og, fg, "rejected original gravity not above final gravity");
        Err(BrewError::out_of_domain(
            formula,
            format!("original gravity {og} must exceed final gravity {fg}"),
        ))
    }
}

/// A computed value must still be a real number.
pub(crate) fn real_output(formula: &'static str, value: f64) -> BrewResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        debug!(formula, value, "computation left the real numbers");
        Err(BrewError::out_of_domain(
            formula,
            format!("result {value} is not a real number"),
        ))
    }
}
