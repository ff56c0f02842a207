//! Reference values for the public formula API.

use approx::assert_relative_eq;
use brew_core::formulas::*;
use brew_core::{BrewError, Formula};

#[test]
fn alcohol_reference_values() {
    assert_relative_eq!(abv(1.055, 1.0).unwrap(), 7.319479429051208, epsilon = 1e-9);
    assert_relative_eq!(attenuation(1.054, 1.012).unwrap(), 0.7777777777777778, epsilon = 1e-9);
}

#[test]
fn extract_reference_values() {
    assert_relative_eq!(plato(1.070).unwrap(), 17.055185000000108, epsilon = 1e-9);
    assert_relative_eq!(real_extract(1.070, 1.015).unwrap(), 6.216277095999994, epsilon = 1e-9);
}

#[test]
fn hop_reference_values() {
    assert_relative_eq!(utilization(10.0, 1.050).unwrap(), 0.08363227080582435, epsilon = 1e-9);
    assert_relative_eq!(ibu(6.4, 1.5, 60.0, 1.080, 5.0).unwrap(), 25.365869680614512, epsilon = 1e-9);
}

#[test]
fn color_reference_values() {
    assert_relative_eq!(srm(7.0, 5.0, 5.0).unwrap(), 5.668651803424155, epsilon = 1e-9);
    assert!(mcu(7.0, 5.0, 0.0).is_err());
}

#[test]
fn gravity_reference_values() {
    assert_eq!(gravity_units(1.054).unwrap(), 54.0);
    assert_eq!(total_gravity(1.054, 5.0).unwrap(), 270.0);
    assert_eq!(final_gravity(1.054, 5.0, 5.0).unwrap(), 54.0);
    assert_relative_eq!(
        gravity_correction_ratio(100.4, 1.050, 60.0).unwrap(),
        1.0562227410997,
        epsilon = 1e-9
    );
}

#[test]
fn extract_types_use_their_potentials() {
    let dme = extract_addition(408.0, 355.0, ExtractType::Dme).unwrap();
    let lme = extract_addition(408.0, 355.0, ExtractType::Lme).unwrap();
    let custom = extract_addition(408.0, 355.0, ExtractType::Custom(45.0)).unwrap();

    assert_relative_eq!(dme, 1.1777777777777778, epsilon = 1e-12);
    assert_relative_eq!(lme, 1.394736842105263, epsilon = 1e-12);
    assert_eq!(dme, custom);
    assert_eq!(ExtractType::Lme.potential(), LME_POTENTIAL);
    assert_eq!(ExtractType::Dme.potential(), DME_POTENTIAL);
}

#[test]
fn unknown_extract_name_is_an_error() {
    let err = "XME".parse::<ExtractType>().unwrap_err();
    assert!(matches!(err, BrewError::UnknownExtractType { .. }));
}

#[test]
fn composed_formulas_propagate_errors() {
    // ABW and calories are built on ABV; the gravity rise surfaces unchanged
    assert!(abw(1.010, 1.050).unwrap_err().is_no_result());
    assert!(calories(1.010, 1.050).unwrap_err().is_no_result());
    assert!(srm(f64::NAN, 5.0, 5.0).is_err());
}

#[test]
fn non_numeric_input_is_invalid_input() {
    let err = abv(f64::NAN, 1.010).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
    assert!(err.is_no_result());

    let err = ibu(6.4, 1.5, f64::INFINITY, 1.080, 5.0).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
}

#[test]
fn registry_covers_every_formula() {
    assert_eq!(ALL_FORMULAS.len(), 17);
    for formula in ALL_FORMULAS {
        let meta = formula.metadata();
        assert!(!meta.name.is_empty());
        assert!(!meta.formula_plain.is_empty());
    }
    assert!(Formula::in_category(FormulaCategory::Bitterness).len() >= 3);
}

#[test]
fn formulas_markdown_lists_every_formula() {
    let markdown = generate_formulas_markdown();
    assert!(markdown.starts_with("# Brewing Formulas Reference"));
    for formula in ALL_FORMULAS {
        assert!(markdown.contains(formula.metadata().name));
    }
}
