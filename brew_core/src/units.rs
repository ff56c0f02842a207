//! # Unit Types
//!
//! Type-safe wrappers for brewing units. These are plain f64 newtypes that
//! serialize as bare numbers, so JSON inputs stay clean.
//!
//! ## US Customary Units (Primary)
//!
//! The formulas work in US customary units, matching the homebrewing literature:
//! - Volume: US gallons
//! - Grain weight: pounds
//! - Hop weight: ounces
//! - Temperature: degrees Fahrenheit
//! - Time: minutes
//!
//! Metric wrappers convert into the primary units with `From`.
//!
//! ## Example
//!
//! ```rust
//! use brew_core::units::{Celsius, Fahrenheit, Gallons, Liters};
//!
//! let batch: Gallons = Liters(18.927_058_8).into();
//! assert!((batch.0 - 5.0).abs() < 1e-6);
//!
//! let mash: Fahrenheit = Celsius(20.0).into();
//! assert!((mash.0 - 68.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Liters per US gallon
pub const LITERS_PER_GALLON: f64 = 3.785_411_784;

/// Kilograms per pound (avoirdupois)
pub const KILOGRAMS_PER_POUND: f64 = 0.453_592_37;

/// Grams per ounce (avoirdupois)
pub const GRAMS_PER_OUNCE: f64 = 28.349_523_125;

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in US gallons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gallons(pub f64);

/// Volume in liters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(pub f64);

impl From<Liters> for Gallons {
    fn from(l: Liters) -> Self {
        Gallons(l.0 / LITERS_PER_GALLON)
    }
}

impl From<Gallons> for Liters {
    fn from(gal: Gallons) -> Self {
        Liters(gal.0 * LITERS_PER_GALLON)
    }
}

// ============================================================================
// Weight Units
// ============================================================================

/// Weight in pounds (grain bills)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Weight in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Weight in ounces (hop additions)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ounces(pub f64);

/// Weight in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub f64);

impl From<Kilograms> for Pounds {
    fn from(kg: Kilograms) -> Self {
        Pounds(kg.0 / KILOGRAMS_PER_POUND)
    }
}

impl From<Pounds> for Kilograms {
    fn from(lb: Pounds) -> Self {
        Kilograms(lb.0 * KILOGRAMS_PER_POUND)
    }
}

impl From<Grams> for Ounces {
    fn from(g: Grams) -> Self {
        Ounces(g.0 / GRAMS_PER_OUNCE)
    }
}

impl From<Ounces> for Grams {
    fn from(oz: Ounces) -> Self {
        Grams(oz.0 * GRAMS_PER_OUNCE)
    }
}

impl From<Pounds> for Ounces {
    fn from(lb: Pounds) -> Self {
        Ounces(lb.0 * 16.0)
    }
}

// ============================================================================
// Temperature Units
// ============================================================================

/// Temperature in degrees Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fahrenheit(pub f64);

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f64);

impl From<Celsius> for Fahrenheit {
    fn from(c: Celsius) -> Self {
        Fahrenheit(c.0 * 9.0 / 5.0 + 32.0)
    }
}

impl From<Fahrenheit> for Celsius {
    fn from(f: Fahrenheit) -> Self {
        Celsius((f.0 - 32.0) * 5.0 / 9.0)
    }
}

// ============================================================================
// Time Units
// ============================================================================

/// Duration in minutes (boil time of a hop addition)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Minutes(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Gallons);
impl_arithmetic!(Liters);
impl_arithmetic!(Pounds);
impl_arithmetic!(Kilograms);
impl_arithmetic!(Ounces);
impl_arithmetic!(Grams);
impl_arithmetic!(Fahrenheit);
impl_arithmetic!(Celsius);
impl_arithmetic!(Minutes);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_liters_to_gallons() {
        let gal: Gallons = Liters(LITERS_PER_GALLON * 5.0).into();
        assert_relative_eq!(gal.0, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_kilograms_to_pounds() {
        let lb: Pounds = Kilograms(1.0).into();
        assert_relative_eq!(lb.0, 2.204_622_621_8, epsilon = 1e-9);
    }

    #[test]
    fn test_grams_to_ounces() {
        let oz: Ounces = Grams(28.349_523_125).into();
        assert_relative_eq!(oz.0, 1.0, epsilon = 1e-12);

        let lb_as_oz: Ounces = Pounds(1.5).into();
        assert_eq!(lb_as_oz.0, 24.0);
    }

    #[test]
    fn test_temperature_conversion() {
        let f: Fahrenheit = Celsius(100.0).into();
        assert_relative_eq!(f.0, 212.0, epsilon = 1e-12);

        let c: Celsius = Fahrenheit(60.0).into();
        assert_relative_eq!(c.0, 15.555_555_555_6, epsilon = 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Gallons(6.5);
        let b = Gallons(1.5);
        assert_eq!((a + b).0, 8.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((b * 2.0).0, 3.0);
        assert_eq!((b / 2.0).0, 0.75);
        assert_eq!(Minutes::new(60.0).value(), 60.0);
    }

    #[test]
    fn test_serialization() {
        let oz = Ounces(1.5);
        let json = serde_json::to_string(&oz).unwrap();
        assert_eq!(json, "1.5");

        let roundtrip: Ounces = serde_json::from_str(&json).unwrap();
        assert_eq!(oz, roundtrip);
    }
}
