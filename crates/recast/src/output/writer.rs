//! Export of datasets to delimited text and JSON records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{RecastError, Result};
use crate::table::Dataset;

/// Output formats for exported data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Tsv,
    Csv,
    /// Array of row objects.
    Json,
}

impl OutputFormat {
    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Tsv => "tsv",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(OutputFormat::Tsv),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(RecastError::Config(format!("Unknown output format '{}'", other))),
        }
    }
}

/// Write a dataset as delimited text with a header row.
///
/// Missing cells are written as empty fields.
pub fn write_delimited<W: Write>(dataset: &Dataset, writer: W, delimiter: u8) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    csv_writer.write_record(dataset.column_names())?;
    for row in dataset.rows() {
        csv_writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Convert a dataset to an array of row objects keyed by column name.
///
/// Missing cells become `null`.
pub fn to_records(dataset: &Dataset) -> Value {
    let names: Vec<&str> = dataset.column_names().collect();
    let records = dataset
        .rows()
        .map(|row| {
            let object: Map<String, Value> = names
                .iter()
                .zip(row)
                .map(|(name, cell)| {
                    let value = if cell.is_missing() {
                        Value::Null
                    } else {
                        serde_json::to_value(cell).unwrap_or(Value::Null)
                    };
                    (name.to_string(), value)
                })
                .collect();
            Value::Object(object)
        })
        .collect();
    Value::Array(records)
}

/// Write a dataset as pretty-printed JSON records.
pub fn write_json<W: Write>(dataset: &Dataset, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, &to_records(dataset))?;
    Ok(())
}

/// Write a dataset in the given format.
pub fn write_dataset<W: Write>(dataset: &Dataset, writer: W, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Tsv => write_delimited(dataset, writer, b'\t'),
        OutputFormat::Csv => write_delimited(dataset, writer, b','),
        OutputFormat::Json => write_json(dataset, writer),
    }
}

/// Write a dataset to a file in the given format.
pub fn save_dataset(dataset: &Dataset, path: impl AsRef<Path>, format: OutputFormat) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| RecastError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    write_dataset(dataset, &mut writer, format)?;
    writer.flush().map_err(|e| RecastError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// The first `n` rows rendered as strings, missing cells as empty strings.
pub fn preview(dataset: &Dataset, n: usize) -> Vec<Vec<String>> {
    dataset
        .rows()
        .take(n)
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}
