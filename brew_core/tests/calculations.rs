//! Batch calculations driven through JSON, the way a front end would.

use approx::assert_relative_eq;
use brew_core::calculations::{CalculationItem, CalculationOutput};
use brew_core::formulas::{abv, final_gravity};
use brew_core::settings::{BrewSettings, CorrectionModel};

const BREW_DAY: &str = r#"[
    {
        "type": "Hydrometer",
        "label": "Pre-boil sample",
        "reading": 1.050,
        "sample_temp_f": 100.4
    },
    {
        "type": "Boil",
        "label": "Kettle",
        "pre_boil_gravity": 1.040,
        "pre_boil_volume_gal": 6.5,
        "post_boil_volume_gal": 5.0,
        "target_gravity": 1.060,
        "extract": "LME"
    },
    {
        "type": "HopSchedule",
        "label": "Bittering",
        "boil_gravity": 1.080,
        "batch_volume_gal": 5.0,
        "additions": [
            { "name": "Cascade", "alpha_percent": 6.4, "weight_oz": 1.5, "boil_time_min": 60.0 }
        ]
    },
    {
        "type": "Fermentation",
        "label": "Final",
        "original_gravity": 1.055,
        "final_gravity": 1.0
    }
]"#;

fn run_all(settings: &BrewSettings) -> Vec<CalculationOutput> {
    let items: Vec<CalculationItem> = serde_json::from_str(BREW_DAY).unwrap();
    items.iter().map(|item| item.run(settings).unwrap()).collect()
}

#[test]
fn brew_day_with_default_settings() {
    let outputs = run_all(&BrewSettings::default());
    assert_eq!(outputs.len(), 4);

    match &outputs[0] {
        CalculationOutput::Hydrometer(r) => {
            assert_eq!(r.model, CorrectionModel::Ratio);
            assert_relative_eq!(r.corrected_gravity, 1.0562227410997, epsilon = 1e-9);
        }
        other => panic!("expected hydrometer output, got {other:?}"),
    }
    match &outputs[1] {
        CalculationOutput::Boil(r) => {
            assert_relative_eq!(r.post_boil_gravity, 1.052, epsilon = 1e-12);
            assert_relative_eq!(r.extract_needed_lb.unwrap(), 40.0 / 38.0, epsilon = 1e-12);
        }
        other => panic!("expected boil output, got {other:?}"),
    }
    match &outputs[2] {
        CalculationOutput::HopSchedule(r) => {
            assert_relative_eq!(r.total_ibu, 25.365869680614512, epsilon = 1e-9);
        }
        other => panic!("expected hop output, got {other:?}"),
    }
    match &outputs[3] {
        CalculationOutput::Fermentation(r) => {
            assert_relative_eq!(r.abv_percent, 7.319479429051208, epsilon = 1e-9);
        }
        other => panic!("expected fermentation output, got {other:?}"),
    }
}

#[test]
fn brew_day_with_custom_settings() {
    let settings = BrewSettings::from_json(
        r#"{ "correction_model": "Delta", "lme_potential": 40.0 }"#,
    )
    .unwrap();
    let outputs = run_all(&settings);

    match &outputs[0] {
        CalculationOutput::Hydrometer(r) => {
            assert_eq!(r.model, CorrectionModel::Delta);
            assert_relative_eq!(r.corrected_gravity, 1.0560765751842796, epsilon = 1e-9);
        }
        other => panic!("expected hydrometer output, got {other:?}"),
    }
    match &outputs[1] {
        CalculationOutput::Boil(r) => {
            assert_relative_eq!(r.extract_needed_lb.unwrap(), 1.0, epsilon = 1e-12);
        }
        other => panic!("expected boil output, got {other:?}"),
    }
}

#[test]
fn outputs_serialize_with_type_tag() {
    let outputs = run_all(&BrewSettings::default());
    let json = serde_json::to_value(&outputs).unwrap();
    let tags: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["type"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(tags, ["Hydrometer", "Boil", "HopSchedule", "Fermentation"]);
}

#[test]
fn errors_serialize_with_code_and_details() {
    let item: CalculationItem = serde_json::from_str(
        r#"{ "type": "Fermentation", "label": "Stuck", "original_gravity": 1.020, "final_gravity": 1.030 }"#,
    )
    .unwrap();
    let err = item.run(&BrewSettings::default()).unwrap_err();
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["type"], "OutOfDomain");
    assert_eq!(json["details"]["formula"], "fermentation");
}

#[test]
fn batch_and_formula_layers_agree_on_error_kind() {
    let stuck: CalculationItem = serde_json::from_str(
        r#"{ "type": "Fermentation", "label": "Stuck", "original_gravity": 1.020, "final_gravity": 1.030 }"#,
    )
    .unwrap();
    let batch = stuck.run(&BrewSettings::default()).unwrap_err();
    let formula = abv(1.020, 1.030).unwrap_err();
    assert_eq!(batch.error_code(), formula.error_code());
    assert!(batch.is_no_result());

    let no_volume: CalculationItem = serde_json::from_str(
        r#"{ "type": "Boil", "label": "Dry", "pre_boil_gravity": 1.040,
             "pre_boil_volume_gal": 6.5, "post_boil_volume_gal": 0.0 }"#,
    )
    .unwrap();
    let batch = no_volume.run(&BrewSettings::default()).unwrap_err();
    let formula = final_gravity(1.040, 6.5, 0.0).unwrap_err();
    assert_eq!(batch.error_code(), formula.error_code());
}
