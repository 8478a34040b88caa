//! End-to-end scenario tests against known physics.
//!
//! Reference case throughout: CO₂ (44 g/mol) at 288 K over the fixed
//! 500-point [0, 4000] m/s domain, compared against H₂ (2 g/mol) and a
//! hotter 740 K rendition.

use maxboltz::prelude::*;
use maxboltz::visualization::{CurveExporter, ExportFormat};

fn co2_at_288() -> ScenarioMode {
    ScenarioMode::SingleGas {
        molar_mass_g_per_mol: 44.0,
        temperature_k: 288.0,
    }
}

#[test]
fn co2_density_curve_matches_reference_shape() {
    let builder = ScenarioBuilder::default();
    let set = builder.build(&co2_at_288()).unwrap();

    assert_eq!(set.len(), 1);
    let curve = &set.scenarios()[0].curve;
    let density = curve.density();

    assert_eq!(density.len(), 500);
    assert!((density[0] - 0.0).abs() < f64::EPSILON);
    for value in density {
        assert!(value.is_finite());
        assert!(*value >= 0.0);
    }

    // Sampled peak within one grid spacing of v_p = sqrt(2RT/M).
    let most_probable = (2.0 * GAS_CONSTANT * 288.0 / 0.044).sqrt();
    let spacing = curve.domain().spacing();
    assert!(
        (curve.peak_speed() - most_probable).abs() <= spacing,
        "peak {} vs v_p {most_probable}",
        curve.peak_speed()
    );
}

#[test]
fn co2_label_and_units() {
    let set = ScenarioBuilder::default().build(&co2_at_288()).unwrap();
    let scenario = &set.scenarios()[0];

    assert_eq!(scenario.label, "44 g/mol at 288 K");
    assert!((scenario.sample.molar_mass_kg_per_mol() - 0.044).abs() < 1e-12);
    assert!((scenario.sample.temperature_k() - 288.0).abs() < f64::EPSILON);
}

#[test]
fn hotter_gas_peaks_at_higher_speed() {
    let builder = ScenarioBuilder::default();
    let set = builder
        .build(&ScenarioMode::TwoTemperatures {
            molar_mass_g_per_mol: 44.0,
            temperatures_k: [288.0, 740.0],
        })
        .unwrap();

    assert_eq!(set.len(), 2);
    let peak_cold = set.scenarios()[0].curve.peak_speed();
    let peak_hot = set.scenarios()[1].curve.peak_speed();
    assert!(
        peak_hot > peak_cold,
        "expected peak({peak_hot}) > peak({peak_cold})"
    );
}

#[test]
fn lighter_gas_peaks_at_higher_speed() {
    let builder = ScenarioBuilder::default();
    let set = builder
        .build(&ScenarioMode::TwoGases {
            molar_masses_g_per_mol: [44.0, 2.0],
            temperature_k: 288.0,
        })
        .unwrap();

    assert_eq!(set.len(), 2);
    let peak_co2 = set.scenarios()[0].curve.peak_speed();
    let peak_h2 = set.scenarios()[1].curve.peak_speed();
    assert!(
        peak_h2 > peak_co2,
        "expected peak({peak_h2}) > peak({peak_co2})"
    );
}

#[test]
fn engine_functions_agree_with_builder_output() {
    let builder = ScenarioBuilder::default();
    let set = builder.build(&co2_at_288()).unwrap();
    let curve = &set.scenarios()[0].curve;

    let direct =
        density(builder.domain(), 0.044, 288.0, builder.gas_constant()).unwrap();
    assert_eq!(curve.density(), direct.as_slice());

    let pre =
        pre_exponential_factor(builder.domain(), 0.044, 288.0, builder.gas_constant()).unwrap();
    let exp = exponential_factor(builder.domain(), 0.044, 288.0, builder.gas_constant()).unwrap();
    for i in 0..direct.len() {
        let product = pre[i] * exp[i];
        assert!((direct[i] - product).abs() <= 1e-12 * product.abs().max(1.0));
    }
}

#[test]
fn invalid_pair_fails_whole_build_with_slot() {
    let builder = ScenarioBuilder::default();
    let err = builder
        .build(&ScenarioMode::TwoTemperatures {
            molar_mass_g_per_mol: 44.0,
            temperatures_k: [288.0, -5.0],
        })
        .unwrap_err();

    match err {
        MbError::InvalidParameter { slot, field, value } => {
            assert_eq!(slot, 1);
            assert_eq!(field, ParameterField::Temperature);
            assert!((value - (-5.0)).abs() < f64::EPSILON);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_driven_pipeline() {
    let yaml = r#"
schema_version: "1.0"
domain:
  v_max: 4000.0
  samples: 500
defaults:
  molar_mass_g_per_mol: 44.0
  temperature_k: 288.0
  comparison_temperature_k: 740.0
"#;
    let config = MbConfig::from_yaml(yaml).unwrap();
    let builder = ScenarioBuilder::from_config(&config).unwrap();

    // Drive the default two-temperature comparison from config values.
    let set = builder
        .build(&ScenarioMode::TwoTemperatures {
            molar_mass_g_per_mol: config.defaults.molar_mass_g_per_mol,
            temperatures_k: [
                config.defaults.temperature_k,
                config.defaults.comparison_temperature_k,
            ],
        })
        .unwrap();

    assert_eq!(set.len(), 2);
    assert_eq!(set.domain().len(), 500);
    assert!(set.scenarios()[1].curve.peak_speed() > set.scenarios()[0].curve.peak_speed());
}

#[test]
fn alternate_domain_still_resolves_peak() {
    // Design note: domain is injected, not global. A coarser domain over
    // a narrower range still brackets the CO₂ peak.
    let config = MbConfig::builder().v_max(1000.0).samples(101).build();
    let builder = ScenarioBuilder::from_config(&config).unwrap();
    let set = builder.build(&co2_at_288()).unwrap();

    let curve = &set.scenarios()[0].curve;
    let most_probable = (2.0 * GAS_CONSTANT * 288.0 / 0.044).sqrt();
    assert!((curve.peak_speed() - most_probable).abs() <= curve.domain().spacing());
}

#[test]
fn export_round_trip_through_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenarios.jsonl");

    let set = ScenarioBuilder::default()
        .build(&ScenarioMode::TwoGases {
            molar_masses_g_per_mol: [44.0, 2.0],
            temperature_k: 288.0,
        })
        .unwrap();

    CurveExporter::with_format(ExportFormat::JsonLines)
        .export(&set, &path)
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.contains("44 g/mol at 288 K"));
    assert!(content.contains("2 g/mol at 288 K"));
}
