//! Export pipeline for computed scenario sets.
//!
//! The presentation layer renders the curves; this module hands them over
//! in consumable form:
//! - CSV: one row per domain point, factor columns per scenario slot
//! - JSON Lines: one serialized record per scenario

use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::{BufWriter, Write as IoWrite};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MbError, MbResult};
use crate::scenarios::{Scenario, ScenarioSet};

/// Export format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    /// CSV, one row per domain point.
    #[default]
    Csv,
    /// JSON Lines, one record per scenario.
    JsonLines,
}

/// One scenario flattened for export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveRecord {
    /// Scenario label.
    pub label: String,
    /// Molar mass, kg/mol.
    pub molar_mass_kg_per_mol: f64,
    /// Temperature, K.
    pub temperature_k: f64,
    /// Sampled speeds, m/s.
    pub speeds: Vec<f64>,
    /// Pre-exponential factor values.
    pub pre_exponential: Vec<f64>,
    /// Exponential factor values.
    pub exponential: Vec<f64>,
    /// Density values F(v).
    pub density: Vec<f64>,
}

impl CurveRecord {
    /// Flatten a scenario into an export record.
    #[must_use]
    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self {
            label: scenario.label.clone(),
            molar_mass_kg_per_mol: scenario.sample.molar_mass_kg_per_mol(),
            temperature_k: scenario.sample.temperature_k(),
            speeds: scenario.curve.domain().speeds().to_vec(),
            pre_exponential: scenario.curve.pre_exponential().to_vec(),
            exponential: scenario.curve.exponential().to_vec(),
            density: scenario.curve.density().to_vec(),
        }
    }
}

/// Exporter for scenario sets.
#[derive(Debug, Clone, Default)]
pub struct CurveExporter {
    format: ExportFormat,
}

impl CurveExporter {
    /// Create an exporter with the default format (CSV).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter with an explicit format.
    #[must_use]
    pub const fn with_format(format: ExportFormat) -> Self {
        Self { format }
    }

    /// Export using the configured format.
    ///
    /// # Errors
    ///
    /// Returns error if file operations or serialization fail.
    pub fn export(&self, set: &ScenarioSet, path: &Path) -> MbResult<()> {
        match self.format {
            ExportFormat::Csv => self.to_csv(set, path),
            ExportFormat::JsonLines => self.to_json_lines(set, path),
        }
    }

    /// Export a scenario set to CSV.
    ///
    /// Columns: `speed`, then `pre_exponential_{slot}`,
    /// `exponential_{slot}`, `density_{slot}` per scenario.
    ///
    /// # Errors
    ///
    /// Returns error if file operations fail.
    pub fn to_csv(&self, set: &ScenarioSet, path: &Path) -> MbResult<()> {
        let file =
            File::create(path).map_err(|e| MbError::io(format!("Failed to create file: {e}")))?;
        let mut writer = BufWriter::new(file);

        let mut header = String::from("speed");
        for slot in 0..set.len() {
            let _ = write!(
                header,
                ",pre_exponential_{slot},exponential_{slot},density_{slot}"
            );
        }
        writeln!(writer, "{header}")
            .map_err(|e| MbError::io(format!("Write header failed: {e}")))?;

        for (i, speed) in set.domain().speeds().iter().enumerate() {
            let mut line = format!("{speed}");
            for scenario in set {
                let _ = write!(
                    line,
                    ",{},{},{}",
                    scenario.curve.pre_exponential()[i],
                    scenario.curve.exponential()[i],
                    scenario.curve.density()[i]
                );
            }
            writeln!(writer, "{line}")
                .map_err(|e| MbError::io(format!("Write data failed: {e}")))?;
        }

        writer
            .flush()
            .map_err(|e| MbError::io(format!("Flush failed: {e}")))?;

        Ok(())
    }

    /// Export a scenario set to JSON Lines, one record per scenario.
    ///
    /// # Errors
    ///
    /// Returns error if file operations or serialization fail.
    pub fn to_json_lines(&self, set: &ScenarioSet, path: &Path) -> MbResult<()> {
        let file =
            File::create(path).map_err(|e| MbError::io(format!("Failed to create file: {e}")))?;
        let mut writer = BufWriter::new(file);

        for scenario in set {
            let record = CurveRecord::from_scenario(scenario);
            let json = serde_json::to_string(&record)
                .map_err(|e| MbError::serialization(format!("JSON serialization failed: {e}")))?;
            writeln!(writer, "{json}").map_err(|e| MbError::io(format!("Write failed: {e}")))?;
        }

        writer
            .flush()
            .map_err(|e| MbError::io(format!("Flush failed: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::scenarios::{ScenarioBuilder, ScenarioMode};
    use std::io::Read;
    use tempfile::tempdir;

    fn comparison_set() -> ScenarioSet {
        ScenarioBuilder::default()
            .build(&ScenarioMode::TwoGases {
                molar_masses_g_per_mol: [44.0, 2.0],
                temperature_k: 288.0,
            })
            .unwrap()
    }

    fn read(path: &Path) -> String {
        let mut content = String::new();
        File::open(path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    #[test]
    fn test_csv_header_and_row_count() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("curves.csv");

        let exporter = CurveExporter::new();
        exporter.to_csv(&comparison_set(), &path).unwrap();

        let content = read(&path);
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 501); // header + 500 domain points
        assert_eq!(
            lines[0],
            "speed,pre_exponential_0,exponential_0,density_0,\
             pre_exponential_1,exponential_1,density_1"
        );
    }

    #[test]
    fn test_csv_first_row_is_origin() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("curves.csv");

        CurveExporter::new().to_csv(&comparison_set(), &path).unwrap();

        let content = read(&path);
        let first_data = content.lines().nth(1).unwrap();
        // speed 0, pre 0, exp 1, density 0 for both scenarios
        assert_eq!(first_data, "0,0,1,0,0,1,0");
    }

    #[test]
    fn test_json_lines_one_record_per_scenario() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("curves.jsonl");

        CurveExporter::with_format(ExportFormat::JsonLines)
            .to_json_lines(&comparison_set(), &path)
            .unwrap();

        let content = read(&path);
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"label\":\"44 g/mol at 288 K\""));
        assert!(lines[1].contains("\"label\":\"2 g/mol at 288 K\""));
    }

    #[test]
    fn test_json_lines_records_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("curves.jsonl");

        CurveExporter::new()
            .to_json_lines(&comparison_set(), &path)
            .unwrap();

        let content = read(&path);
        for line in content.lines() {
            let record: CurveRecord = serde_json::from_str(line).unwrap();
            assert_eq!(record.speeds.len(), 500);
            assert_eq!(record.density.len(), 500);
            assert!((record.temperature_k - 288.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_export_dispatches_on_format() {
        let dir = tempdir().unwrap();
        let set = comparison_set();

        let csv_path = dir.path().join("out.csv");
        CurveExporter::with_format(ExportFormat::Csv)
            .export(&set, &csv_path)
            .unwrap();
        assert!(read(&csv_path).starts_with("speed,"));

        let jsonl_path = dir.path().join("out.jsonl");
        CurveExporter::with_format(ExportFormat::JsonLines)
            .export(&set, &jsonl_path)
            .unwrap();
        assert!(read(&jsonl_path).starts_with('{'));
    }

    #[test]
    fn test_export_to_unwritable_path_fails() {
        let set = comparison_set();
        let result = CurveExporter::new().to_csv(&set, Path::new("/nonexistent/dir/out.csv"));
        assert!(matches!(result, Err(MbError::Io(_))));
    }

    #[test]
    fn test_curve_record_from_scenario() {
        let set = comparison_set();
        let record = CurveRecord::from_scenario(&set.scenarios()[1]);
        assert_eq!(record.label, "2 g/mol at 288 K");
        assert!((record.molar_mass_kg_per_mol - 0.002).abs() < 1e-12);
        assert_eq!(record.pre_exponential.len(), record.speeds.len());
        assert_eq!(record.exponential.len(), record.speeds.len());
    }

    #[test]
    fn test_export_format_default() {
        assert_eq!(ExportFormat::default(), ExportFormat::Csv);
    }
}
