//! # Formula Registry
//!
//! Central registry of every brewing formula in the crate. Each formula has
//! metadata: plain-text form, variables with units, assumptions, literature
//! source, and the function implementing it.
//!
//! ## Usage
//!
//! ```rust
//! use brew_core::formulas::registry::{Formula, FormulaCategory};
//!
//! let meta = Formula::Ibu.metadata();
//! assert_eq!(meta.category, FormulaCategory::Bitterness);
//! println!("{} = {}", meta.name, meta.formula_plain);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Source References
// ============================================================================

/// Literature source for a formula.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum SourceReference {
    /// Ensminger, "Beer, Alcohol and Calories" (hbd.org/ensmingr)
    Ensminger { topic: &'static str },
    /// Glenn Tinseth's hop utilization model
    Tinseth,
    /// Daniel Morey's SRM color equation
    Morey,
    /// John Palmer, "How to Brew"
    Palmer { topic: &'static str },
    /// Cubic fit of hydrometer readings against sample temperature
    HydrometerCalibration,
    /// Plain gravity-unit arithmetic (no specific source needed)
    BrewingArithmetic,
}

impl SourceReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            SourceReference::Ensminger { topic } => {
                format!("Ensminger, Beer, Alcohol and Calories (hbd.org/ensmingr), {}", topic)
            }
            SourceReference::Tinseth => "Tinseth, Glenn's Hop Utilization Numbers".to_string(),
            SourceReference::Morey => "Morey, Approximating Beer Color (SRM)".to_string(),
            SourceReference::Palmer { topic } => format!("Palmer, How to Brew, {}", topic),
            SourceReference::HydrometerCalibration => "Hydrometer temperature calibration fit".to_string(),
            SourceReference::BrewingArithmetic => "Gravity Unit Arithmetic".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            SourceReference::Ensminger { .. } => "Ensminger",
            SourceReference::Tinseth => "Tinseth",
            SourceReference::Morey => "Morey",
            SourceReference::Palmer { .. } => "Palmer",
            SourceReference::HydrometerCalibration => "Hydrometer",
            SourceReference::BrewingArithmetic => "Arithmetic",
        }
    }
}

// ============================================================================
// Formula Categories
// ============================================================================

/// Categories for grouping formulas in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormulaCategory {
    /// Gravity units, total gravity, extract additions
    Gravity,
    /// Hydrometer temperature correction
    Temperature,
    /// ABV, ABW, attenuation
    Alcohol,
    /// Plato, real extract, calories
    Extract,
    /// MCU, SRM
    Color,
    /// AAU, utilization, IBU
    Bitterness,
}

impl FormulaCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            FormulaCategory::Gravity => "Gravity",
            FormulaCategory::Temperature => "Temperature Correction",
            FormulaCategory::Alcohol => "Alcohol",
            FormulaCategory::Extract => "Extract and Calories",
            FormulaCategory::Color => "Color",
            FormulaCategory::Bitterness => "Bitterness",
        }
    }

    /// Sort order in the reference document (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            FormulaCategory::Gravity => 1,
            FormulaCategory::Temperature => 2,
            FormulaCategory::Alcohol => 3,
            FormulaCategory::Extract => 4,
            FormulaCategory::Color => 5,
            FormulaCategory::Bitterness => 6,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in a formula.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "OG", "t", "V")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "gal", "oz", "°F")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Formula Metadata
// ============================================================================

/// Complete metadata for a brewing formula.
#[derive(Debug, Clone)]
pub struct FormulaMetadata {
    /// Human-readable name (e.g., "Alcohol by Volume")
    pub name: &'static str,
    /// Brief description of what this formula calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Literature source
    pub reference: SourceReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Preconditions and limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: FormulaCategory,
    /// Source module where the formula implementation lives
    pub source_module: &'static str,
    /// Function name implementing the formula
    pub source_function: &'static str,
}

// ============================================================================
// Formula Enum
// ============================================================================

/// All brewing formulas in brew_core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Formula {
    // Gravity
    GravityUnits,
    TotalGravity,
    FinalGravity,
    ExtractAddition,
    // Temperature
    GravityCorrectionDelta,
    GravityCorrectionRatio,
    // Alcohol
    Abv,
    Abw,
    Attenuation,
    // Extract
    Plato,
    RealExtract,
    Calories,
    // Color
    Mcu,
    Srm,
    // Bitterness
    Aau,
    Utilization,
    Ibu,
}

impl Formula {
    /// Get the full metadata for this formula
    pub fn metadata(&self) -> FormulaMetadata {
        match self {
            Formula::GravityUnits => FormulaMetadata {
                name: "Gravity Units",
                description: "Specific gravity expressed as whole gravity points",
                formula_plain: "GU = round((SG - 1) * 1000)",
                reference: SourceReference::BrewingArithmetic,
                variables: vec![
                    Variable::new("SG", "Specific gravity", "-"),
                    Variable::new("GU", "Gravity units", "pts"),
                ],
                assumptions: vec!["Rounded half away from zero to an integer"],
                category: FormulaCategory::Gravity,
                source_module: "formulas/gravity.rs",
                source_function: "gravity_units",
            },

            Formula::TotalGravity => FormulaMetadata {
                name: "Total Gravity",
                description: "Gravity points carried by a volume of wort",
                formula_plain: "TG = GU(SG) * V",
                reference: SourceReference::Palmer { topic: "Gravity Units and Extract" },
                variables: vec![
                    Variable::new("SG", "Specific gravity", "-"),
                    Variable::new("V", "Wort volume", "gal"),
                ],
                assumptions: vec!["Total gravity is conserved when only water is removed"],
                category: FormulaCategory::Gravity,
                source_module: "formulas/gravity.rs",
                source_function: "total_gravity",
            },

            Formula::FinalGravity => FormulaMetadata {
                name: "Gravity After Volume Change",
                description: "Gravity units after boiling down or diluting a volume of wort",
                formula_plain: "GU_end = GU(SG) * V_begin / V_end",
                reference: SourceReference::Palmer { topic: "Gravity Units and Extract" },
                variables: vec![
                    Variable::new("V_begin", "Volume before the boil", "gal"),
                    Variable::new("V_end", "Volume after the boil", "gal"),
                ],
                assumptions: vec!["V_end must be nonzero", "Result is in gravity units"],
                category: FormulaCategory::Gravity,
                source_module: "formulas/gravity.rs",
                source_function: "final_gravity",
            },

            Formula::ExtractAddition => FormulaMetadata {
                name: "Extract Addition",
                description: "Pounds of malt extract needed to reach a target total gravity",
                formula_plain: "lb = (TG_target - TG) / PPG",
                reference: SourceReference::Palmer { topic: "Malt Extract Potential" },
                variables: vec![
                    Variable::new("TG_target", "Target total gravity", "GU*gal"),
                    Variable::new("TG", "Current total gravity", "GU*gal"),
                    Variable::new("PPG", "Extract potential (LME 38, DME 45)", "GU/lb/gal"),
                ],
                assumptions: vec!["Potential must be nonzero"],
                category: FormulaCategory::Gravity,
                source_module: "formulas/gravity.rs",
                source_function: "extract_addition",
            },

            Formula::GravityCorrectionDelta => FormulaMetadata {
                name: "Hydrometer Correction (Additive)",
                description: "Offset added to a reading taken away from 60 °F",
                formula_plain: "SG_c = SG + 0.001 * (1.313454 - 0.132674 T + 2.057793e-3 T^2 - 2.627634e-6 T^3)",
                reference: SourceReference::HydrometerCalibration,
                variables: vec![
                    Variable::new("T", "Sample temperature", "°F"),
                    Variable::new("SG", "Hydrometer reading", "-"),
                ],
                assumptions: vec!["Hydrometer calibrated near 60 °F"],
                category: FormulaCategory::Temperature,
                source_module: "formulas/temperature.rs",
                source_function: "gravity_correction_delta",
            },

            Formula::GravityCorrectionRatio => FormulaMetadata {
                name: "Hydrometer Correction (Calibration Ratio)",
                description: "Reading scaled between sample and calibration temperature",
                formula_plain: "SG_c = SG * C(T) / C(T_cal), C(T) = 1.00130346 - 1.34722124e-4 T + 2.04052596e-6 T^2 - 2.32820948e-9 T^3",
                reference: SourceReference::HydrometerCalibration,
                variables: vec![
                    Variable::new("T", "Sample temperature", "°F"),
                    Variable::new("T_cal", "Calibration temperature", "°F"),
                    Variable::new("SG", "Hydrometer reading", "-"),
                ],
                assumptions: vec!["Any calibration temperature"],
                category: FormulaCategory::Temperature,
                source_module: "formulas/temperature.rs",
                source_function: "gravity_correction_ratio",
            },

            Formula::Abv => FormulaMetadata {
                name: "Alcohol by Volume",
                description: "Percent alcohol by volume from original and final gravity",
                formula_plain: "ABV = 76.08 * (OG - FG) / (1.775 - OG) * (FG / 0.794)",
                reference: SourceReference::Ensminger { topic: "Alcohol" },
                variables: vec![
                    Variable::new("OG", "Original gravity", "-"),
                    Variable::new("FG", "Final gravity", "-"),
                ],
                assumptions: vec![
                    "OG > FG",
                    "OG = 1.775 is rejected; above 1.775 the result is negative and still returned",
                ],
                category: FormulaCategory::Alcohol,
                source_module: "formulas/alcohol.rs",
                source_function: "abv",
            },

            Formula::Abw => FormulaMetadata {
                name: "Alcohol by Weight",
                description: "Percent alcohol by weight",
                formula_plain: "ABW = 0.79 * ABV / FG",
                reference: SourceReference::Ensminger { topic: "Alcohol" },
                variables: vec![
                    Variable::new("ABV", "Alcohol by volume", "%"),
                    Variable::new("FG", "Final gravity", "-"),
                ],
                assumptions: vec!["OG > FG"],
                category: FormulaCategory::Alcohol,
                source_module: "formulas/alcohol.rs",
                source_function: "abw",
            },

            Formula::Attenuation => FormulaMetadata {
                name: "Apparent Attenuation",
                description: "Fraction of the original extract consumed by fermentation",
                formula_plain: "AA = (OG - FG) / (OG - 1)",
                reference: SourceReference::BrewingArithmetic,
                variables: vec![
                    Variable::new("OG", "Original gravity", "-"),
                    Variable::new("FG", "Final gravity", "-"),
                ],
                assumptions: vec!["OG > FG", "OG != 1"],
                category: FormulaCategory::Alcohol,
                source_module: "formulas/alcohol.rs",
                source_function: "attenuation",
            },

            Formula::Plato => FormulaMetadata {
                name: "Degrees Plato",
                description: "Specific gravity converted to percent extract by weight",
                formula_plain: "P = -463.37 + 668.72 SG - 205.35 SG^2",
                reference: SourceReference::Ensminger { topic: "Extract" },
                variables: vec![
                    Variable::new("SG", "Specific gravity", "-"),
                    Variable::new("P", "Extract", "°P"),
                ],
                assumptions: vec!["Quadratic fit over normal wort gravities"],
                category: FormulaCategory::Extract,
                source_module: "formulas/extract.rs",
                source_function: "plato",
            },

            Formula::RealExtract => FormulaMetadata {
                name: "Real Extract",
                description: "Extract remaining in the finished beer, corrected for alcohol",
                formula_plain: "RE = 0.1808 * P(OG) + 0.8192 * P(FG)",
                reference: SourceReference::Ensminger { topic: "Extract" },
                variables: vec![
                    Variable::new("P(OG)", "Original extract", "°P"),
                    Variable::new("P(FG)", "Apparent extract", "°P"),
                ],
                assumptions: vec!["OG > FG"],
                category: FormulaCategory::Extract,
                source_module: "formulas/extract.rs",
                source_function: "real_extract",
            },

            Formula::Calories => FormulaMetadata {
                name: "Calories per 12 oz",
                description: "Energy content of a 12 oz serving",
                formula_plain: "cal = (6.9 * ABW + 4.0 * (RE - 0.1)) * FG * 3.55",
                reference: SourceReference::Ensminger { topic: "Calories" },
                variables: vec![
                    Variable::new("ABW", "Alcohol by weight", "%"),
                    Variable::new("RE", "Real extract", "°P"),
                    Variable::new("FG", "Final gravity", "-"),
                ],
                assumptions: vec!["OG > FG", "12 US fl oz serving"],
                category: FormulaCategory::Extract,
                source_module: "formulas/extract.rs",
                source_function: "calories",
            },

            Formula::Mcu => FormulaMetadata {
                name: "Malt Color Units",
                description: "Color contribution of a grain to a batch",
                formula_plain: "MCU = W * L / V",
                reference: SourceReference::Morey,
                variables: vec![
                    Variable::new("W", "Grain weight", "lb"),
                    Variable::new("L", "Grain color", "°L"),
                    Variable::new("V", "Batch volume", "gal"),
                ],
                assumptions: vec!["V != 0"],
                category: FormulaCategory::Color,
                source_module: "formulas/color.rs",
                source_function: "mcu",
            },

            Formula::Srm => FormulaMetadata {
                name: "SRM Color (Morey)",
                description: "Beer color estimated from malt color units",
                formula_plain: "SRM = 1.4922 * MCU^0.6859",
                reference: SourceReference::Morey,
                variables: vec![Variable::new("MCU", "Malt color units", "lb*°L/gal")],
                assumptions: vec!["MCU >= 0"],
                category: FormulaCategory::Color,
                source_module: "formulas/color.rs",
                source_function: "srm",
            },

            Formula::Aau => FormulaMetadata {
                name: "Alpha Acid Units",
                description: "Bittering potential of a hop addition",
                formula_plain: "AAU = alpha * W",
                reference: SourceReference::Palmer { topic: "Hop Bittering Calculations" },
                variables: vec![
                    Variable::new("alpha", "Alpha acid", "%"),
                    Variable::new("W", "Hop weight", "oz"),
                ],
                assumptions: vec![],
                category: FormulaCategory::Bitterness,
                source_module: "formulas/hops.rs",
                source_function: "aau",
            },

            Formula::Utilization => FormulaMetadata {
                name: "Hop Utilization (Tinseth)",
                description: "Fraction of alpha acids isomerized during the boil",
                formula_plain: "U = 1.65 * 0.000125^(G - 1) * (1 - e^(-0.04 t)) / 4.15",
                reference: SourceReference::Tinseth,
                variables: vec![
                    Variable::new("t", "Boil time", "min"),
                    Variable::new("G", "Boil gravity", "-"),
                ],
                assumptions: vec!["U(0, G) = 0"],
                category: FormulaCategory::Bitterness,
                source_module: "formulas/hops.rs",
                source_function: "utilization",
            },

            Formula::Ibu => FormulaMetadata {
                name: "International Bittering Units",
                description: "Bitterness of a single hop addition",
                formula_plain: "IBU = AAU * U * 75 / V",
                reference: SourceReference::Palmer { topic: "Hop Bittering Calculations" },
                variables: vec![
                    Variable::new("AAU", "Alpha acid units", "%*oz"),
                    Variable::new("U", "Utilization", "-"),
                    Variable::new("V", "Batch volume", "gal"),
                ],
                assumptions: vec!["V != 0"],
                category: FormulaCategory::Bitterness,
                source_module: "formulas/hops.rs",
                source_function: "ibu",
            },
        }
    }

    /// Get all formulas in a given category
    pub fn in_category(category: FormulaCategory) -> Vec<Formula> {
        ALL_FORMULAS
            .iter()
            .filter(|f| f.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in reference-document order
    pub fn all_categories() -> Vec<FormulaCategory> {
        use FormulaCategory::*;
        let mut cats = vec![Gravity, Temperature, Alcohol, Extract, Color, Bitterness];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All formulas in the registry (for iteration)
pub static ALL_FORMULAS: &[Formula] = &[
    Formula::GravityUnits,
    Formula::TotalGravity,
    Formula::FinalGravity,
    Formula::ExtractAddition,
    Formula::GravityCorrectionDelta,
    Formula::GravityCorrectionRatio,
    Formula::Abv,
    Formula::Abw,
    Formula::Attenuation,
    Formula::Plato,
    Formula::RealExtract,
    Formula::Calories,
    Formula::Mcu,
    Formula::Srm,
    Formula::Aau,
    Formula::Utilization,
    Formula::Ibu,
];

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate the formula reference document as Markdown.
///
/// ```rust
/// let markdown = brew_core::formulas::registry::generate_formulas_markdown();
/// assert!(markdown.contains("## Bitterness"));
/// ```
pub fn generate_formulas_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(r#"# Brewing Formulas Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-formulas`

This document lists every formula in brew_core with its source, variables,
and preconditions.

## Validation Policy

| Condition | Result |
|-----------|--------|
| Any parameter NaN or infinite | `InvalidInput` |
| Precondition fails (OG <= FG, zero divisor) | `OutOfDomain` |
| Result is NaN or infinite | `OutOfDomain` |
| A formula this one depends on fails | Same error, unchanged |

---

"#);

    let categories = Formula::all_categories();

    for category in &categories {
        let formulas = Formula::in_category(*category);
        if formulas.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for formula in formulas {
            let meta = formula.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`](src/{})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Formulas:** {}\n- **Categories:** {}\n",
        ALL_FORMULAS.len(),
        categories.len()
    ));

    output
}
