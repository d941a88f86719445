//! Dataset Export
//!
//! Writes one literal chart dataset as CSV, a JSON array, or newline-delimited
//! JSON. Rows go out in authored order with the same field names the charts
//! read.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use thiserror::Error;

use crate::charts::{ChartId, Dataset, UnknownChart};

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unknown dataset: {0} (expected demographics, states, gender or trends)")]
    UnknownDataset(String),

    #[error("Unknown export format: {0} (expected csv, json or ndjson)")]
    UnknownFormat(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<UnknownChart> for ExportError {
    fn from(err: UnknownChart) -> Self {
        ExportError::UnknownDataset(err.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Ndjson,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Ndjson => "ndjson",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "ndjson" | "jsonl" => Ok(ExportFormat::Ndjson),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

fn write_rows<T: Serialize, W: Write>(
    rows: &[T],
    format: ExportFormat,
    mut out: W,
) -> Result<usize, ExportError> {
    match format {
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut out, rows)?;
            out.write_all(b"\n")?;
        }
        ExportFormat::Ndjson => {
            for row in rows {
                serde_json::to_writer(&mut out, row)?;
                out.write_all(b"\n")?;
            }
        }
    }
    Ok(rows.len())
}

/// Write a chart's dataset to `out`, returning the number of rows written
pub fn export_dataset<W: Write>(id: ChartId, format: ExportFormat, out: W) -> Result<usize, ExportError> {
    let written = match id.dataset() {
        Dataset::Age(rows) => write_rows(rows, format, out)?,
        Dataset::State(rows) => write_rows(rows, format, out)?,
        Dataset::Gender(rows) => write_rows(rows, format, out)?,
        Dataset::Trend(rows) => write_rows(rows, format, out)?,
    };

    tracing::debug!(dataset = %id, format = %format, rows = written, "Exported dataset");
    Ok(written)
}

/// Export to an in-memory string
pub fn render_dataset(id: ChartId, format: ExportFormat) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    export_dataset(id, format, &mut buf)?;
    String::from_utf8(buf)
        .map_err(|e| ExportError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Suggested file name, e.g. `finlit_states_20231201_120000.csv`
pub fn default_filename(id: ChartId, format: ExportFormat, at: DateTime<Utc>) -> String {
    format!(
        "finlit_{}_{}.{}",
        id,
        at.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_csv_has_header_and_one_line_per_row() {
        let csv = render_dataset(ChartId::States, ExportFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "state,literacy");
        assert_eq!(lines[1], "Kerala,42");
    }

    #[test]
    fn test_gender_csv_includes_colors() {
        let csv = render_dataset(ChartId::Gender, ExportFormat::Csv).unwrap();
        assert!(csv.starts_with("name,value,color\n"));
        assert!(csv.contains("Male,31,#0ea5e9"));
    }

    #[test]
    fn test_json_array() {
        let json = render_dataset(ChartId::Trends, ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 7);
        assert!(rows[0].get("digital").is_some());
    }

    #[test]
    fn test_ndjson_line_per_row() {
        let ndjson = render_dataset(ChartId::Demographics, ExportFormat::Ndjson).unwrap();
        let lines: Vec<&str> = ndjson.lines().collect();
        assert_eq!(lines.len(), 6);
        for line in lines {
            let row: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(row["age"].is_string());
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("jsonl".parse::<ExportFormat>().unwrap(), ExportFormat::Ndjson);
        assert!(matches!("xml".parse::<ExportFormat>(), Err(ExportError::UnknownFormat(_))));
    }

    #[test]
    fn test_unknown_dataset_error() {
        let err: ExportError = "heatmap".parse::<ChartId>().unwrap_err().into();
        assert!(matches!(err, ExportError::UnknownDataset(ref id) if id == "heatmap"));
        assert!(err.to_string().starts_with("Unknown dataset: heatmap"));
    }

    #[test]
    fn test_default_filename() {
        let at = Utc.with_ymd_and_hms(2023, 12, 1, 12, 0, 0).unwrap();
        assert_eq!(
            default_filename(ChartId::States, ExportFormat::Csv, at),
            "finlit_states_20231201_120000.csv"
        );
    }
}
