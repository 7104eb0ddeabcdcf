//! CSV to JSON dataset conversion

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::body::count_from_f64;
use crate::types::CelestialBody;

/// Columns every source CSV must provide
const CSV_COLUMNS: [&str; 11] = [
    "name",
    "satellites",
    "radius_km",
    "semi_major_axis_au",
    "eccentricity",
    "inclination_deg",
    "argument_of_periapsis_deg",
    "longitude_of_ascending_node_deg",
    "mean_anomaly_deg",
    "density_g_cm3",
    "type",
];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

static NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?\d+\.?\d*").expect("Invalid regex"));

/// Conversion switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Drop the first column (an index column) of the header and every row
    pub skip_first_column: bool,
    /// Strip thousands separators and keep the first number in each cell
    pub clean_numbers: bool,
}

/// Casts CSV rows into typed records
#[derive(Debug, Clone, Default)]
pub struct CsvConverter {
    options: ConvertOptions,
}

impl CsvConverter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Convert CSV bytes; rows are numbered from 1 after the header
    pub fn convert_bytes(&self, data: &[u8]) -> Result<Vec<CelestialBody>> {
        let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
        let skip = usize::from(self.options.skip_first_column);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(data);
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .skip(skip)
            .map(|h| h.trim().to_string())
            .collect();

        for column in CSV_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(Error::csv_field(0, column, "missing column"));
            }
        }

        let mut bodies = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result?;
            let row: HashMap<&str, &str> = headers
                .iter()
                .map(String::as_str)
                .zip(record.iter().skip(skip))
                .collect();
            bodies.push(self.convert_row(index + 1, &row)?);
        }

        tracing::debug!("Converted {} CSV rows", bodies.len());
        Ok(bodies)
    }

    /// Read `csv_path`, write the pretty-printed dataset to `json_path`
    pub fn convert_file(&self, csv_path: &Path, json_path: &Path) -> Result<usize> {
        let data = std::fs::read(csv_path)?;
        let bodies = self.convert_bytes(&data)?;
        std::fs::write(json_path, to_json_pretty(&bodies)?)?;
        tracing::info!(
            "Converted {} to {} ({} bodies)",
            csv_path.display(),
            json_path.display(),
            bodies.len()
        );
        Ok(bodies.len())
    }

    fn convert_row(&self, row: usize, values: &HashMap<&str, &str>) -> Result<CelestialBody> {
        let text = |column: &str| -> Result<String> {
            values
                .get(column)
                .map(|v| v.to_string())
                .ok_or_else(|| Error::csv_field(row, column, "missing value"))
        };
        let float = |column: &str| -> Result<Option<f64>> {
            let raw = self.numeric_text(row, column, values)?;
            raw.parse::<f64>()
                .map(Some)
                .map_err(|e| Error::csv_field(row, column, format!("'{}': {}", raw, e)))
        };

        let satellites_raw = self.numeric_text(row, "satellites", values)?;
        let satellites = parse_count(&satellites_raw).ok_or_else(|| {
            Error::csv_field(row, "satellites", format!("'{}' is not a count", satellites_raw))
        })?;

        Ok(CelestialBody {
            name: text("name")?,
            satellites: Some(satellites),
            radius_km: float("radius_km")?,
            semi_major_axis_au: float("semi_major_axis_au")?,
            eccentricity: float("eccentricity")?,
            density_g_cm3: float("density_g_cm3")?,
            inclination_deg: float("inclination_deg")?,
            argument_of_periapsis_deg: float("argument_of_periapsis_deg")?,
            longitude_of_ascending_node_deg: float("longitude_of_ascending_node_deg")?,
            mean_anomaly_deg: float("mean_anomaly_deg")?,
            body_type: Some(text("type")?),
        })
    }

    /// Raw cell text for a numeric column, cleaned when enabled
    fn numeric_text(
        &self,
        row: usize,
        column: &str,
        values: &HashMap<&str, &str>,
    ) -> Result<String> {
        let raw = values
            .get(column)
            .ok_or_else(|| Error::csv_field(row, column, "missing value"))?;
        if self.options.clean_numbers {
            Ok(clean_number(raw))
        } else {
            Ok(raw.trim().to_string())
        }
    }
}

/// Remove `,` separators and extract the first number, `"0"` if there is none
pub fn clean_number(text: &str) -> String {
    let without_commas = text.replace(',', "");
    NUMBER_REGEX
        .find(&without_commas)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "0".to_string())
}

/// Integer count; a cleaned "7." or "7.0" still counts as 7
fn parse_count(text: &str) -> Option<u32> {
    if let Ok(n) = text.parse::<u32>() {
        return Some(n);
    }
    count_from_f64(text.parse::<f64>().ok()?)
}

/// Pretty-printed JSON array with 4-space indentation
pub fn to_json_pretty(bodies: &[CelestialBody]) -> Result<String> {
    use serde::Serialize;

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    bodies.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| Error::internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "name,satellites,radius_km,semi_major_axis_au,eccentricity,inclination_deg,argument_of_periapsis_deg,longitude_of_ascending_node_deg,mean_anomaly_deg,density_g_cm3,type";

    #[test]
    fn test_typed_conversion() {
        let csv = format!(
            "{}\nEarth,1,6371,1.0,0.0167,0.0,114.2,348.7,358.6,5.51,Planet\n",
            HEADER
        );
        let bodies = CsvConverter::default().convert_bytes(csv.as_bytes()).unwrap();
        assert_eq!(bodies.len(), 1);
        let earth = &bodies[0];
        assert_eq!(earth.name, "Earth");
        assert_eq!(earth.satellites, Some(1));
        assert_eq!(earth.radius_km, Some(6371.0));
        assert_eq!(earth.longitude_of_ascending_node_deg, Some(348.7));
        assert_eq!(earth.body_type.as_deref(), Some("Planet"));
    }

    #[test]
    fn test_skip_first_column_with_bom() {
        let csv = format!(
            "\u{feff}id,{}\n7,Mars,2,3390,1.524,0.0934,1.85,286.5,49.6,19.4,3.93,Planet\n",
            HEADER
        );
        let converter = CsvConverter::new(ConvertOptions {
            skip_first_column: true,
            ..Default::default()
        });
        let bodies = converter.convert_bytes(csv.as_bytes()).unwrap();
        assert_eq!(bodies[0].name, "Mars");
        assert_eq!(bodies[0].satellites, Some(2));
    }

    #[test]
    fn test_clean_numbers() {
        let csv = format!(
            "{}\nJupiter,95 known,\"69,911\",5.2 AU,~0.0489,1.3,273.9,100.5,20.0,1.33 avg,Planet\nVulcan,none,n/a,0.1,0,0,0,0,0,0,Hypothetical\n",
            HEADER
        );
        let converter = CsvConverter::new(ConvertOptions {
            clean_numbers: true,
            ..Default::default()
        });
        let bodies = converter.convert_bytes(csv.as_bytes()).unwrap();
        assert_eq!(bodies[0].satellites, Some(95));
        assert_eq!(bodies[0].radius_km, Some(69911.0));
        assert_eq!(bodies[0].semi_major_axis_au, Some(5.2));
        assert_eq!(bodies[0].eccentricity, Some(0.0489));
        assert_eq!(bodies[0].density_g_cm3, Some(1.33));
        assert_eq!(bodies[1].satellites, Some(0));
        assert_eq!(bodies[1].radius_km, Some(0.0));
    }

    #[test]
    fn test_bad_cell_names_row_and_column() {
        let csv = format!(
            "{}\nEarth,1,6371,1.0,0.0167,0,0,0,0,5.51,Planet\nMars,2,big,1.5,0.09,0,0,0,0,3.93,Planet\n",
            HEADER
        );
        let err = CsvConverter::default().convert_bytes(csv.as_bytes()).unwrap_err();
        match err {
            Error::CsvField { row, column, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, "radius_km");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_column() {
        let err = CsvConverter::default()
            .convert_bytes(b"name,satellites\nEarth,1\n")
            .unwrap_err();
        assert!(matches!(err, Error::CsvField { row: 0, .. }));
    }

    #[test]
    fn test_clean_number_helper() {
        assert_eq!(clean_number("1,234.5 km"), "1234.5");
        assert_eq!(clean_number("-12"), "-12");
        assert_eq!(clean_number("unknown"), "0");
    }

    #[test]
    fn test_pretty_json_indentation() {
        let json = to_json_pretty(&[CelestialBody::new("Ceres")]).unwrap();
        assert!(json.starts_with("[\n    {\n        \"name\": \"Ceres\""));
    }

    #[test]
    fn test_convert_file() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("planets.csv");
        let json_path = dir.path().join("planets.json");
        std::fs::write(
            &csv_path,
            format!("{}\nEarth,1,6371,1.0,0.0167,0,0,0,0,5.51,Planet\n", HEADER),
        )
        .unwrap();

        let count = CsvConverter::default()
            .convert_file(&csv_path, &json_path)
            .unwrap();
        assert_eq!(count, 1);

        let loaded = crate::loader::parse_dataset(&std::fs::read(&json_path).unwrap()).unwrap();
        assert_eq!(loaded[0].name, "Earth");
    }
}
