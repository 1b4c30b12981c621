//! CSV/TSV loader with delimiter detection.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::source::{SourceMetadata, is_null_token};
use crate::error::{RecastError, Result};
use crate::inference::parse_number;
use crate::table::{Cell, Dataset};

/// Delimiters to try when auto-detecting, in tie-break order.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Records sampled per candidate delimiter.
const DETECT_SAMPLE_RECORDS: usize = 10;

/// How raw fields become cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellMode {
    /// Infer booleans and numbers per field, like a spreadsheet reader.
    #[default]
    Typed,
    /// Keep every non-null field as text.
    Raw,
}

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether the file has a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
    /// Field to cell conversion.
    pub cell_mode: CellMode,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            quote: b'"',
            cell_mode: CellMode::Typed,
        }
    }
}

/// Loads delimited text files into datasets.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the dataset and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| RecastError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| RecastError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let size_bytes = contents.len() as u64;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = self.resolve_delimiter(&contents)?;
        let dataset = self.parse_bytes_with(&contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        log::debug!(
            "Loaded {} ({}): {} rows x {} columns",
            path.display(),
            format,
            dataset.row_count(),
            dataset.column_count()
        );

        let source_metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            format,
            dataset.row_count(),
            dataset.column_count(),
        );

        Ok((dataset, source_metadata))
    }

    /// Parse in-memory bytes, detecting the delimiter if not configured.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Dataset> {
        let delimiter = self.resolve_delimiter(bytes)?;
        self.parse_bytes_with(bytes, delimiter)
    }

    fn resolve_delimiter(&self, bytes: &[u8]) -> Result<u8> {
        match self.config.delimiter {
            Some(d) if d.is_ascii() && d != self.config.quote && d != b'\n' => Ok(d),
            Some(d) => Err(RecastError::InvalidDelimiter(format!("{:?}", d as char))),
            None => detect_delimiter(bytes, self.config.quote),
        }
    }

    fn parse_bytes_with(&self, bytes: &[u8], delimiter: u8) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut records = reader.records();

        let headers: Vec<String> = if self.config.has_header {
            match records.next() {
                Some(record) => dedupe_headers(record?.iter().map(|s| s.trim().to_string())),
                None => return Err(RecastError::EmptyData("No header row found".to_string())),
            }
        } else {
            Vec::new()
        };

        let mut rows: Vec<Vec<Cell>> = Vec::new();
        let mut width = headers.len();

        for result in records {
            if let Some(max) = self.config.max_rows {
                if rows.len() >= max {
                    break;
                }
            }

            let record = result?;
            if !self.config.has_header && rows.is_empty() {
                width = record.len();
            }
            let mut row: Vec<Cell> = record.iter().map(|f| self.to_cell(f)).collect();

            // Pad or truncate to the header width
            row.resize(width, Cell::Missing);
            rows.push(row);
        }

        let headers = if self.config.has_header {
            headers
        } else {
            (0..width).map(|i| format!("column_{}", i + 1)).collect()
        };

        if headers.is_empty() {
            return Err(RecastError::EmptyData("No columns found".to_string()));
        }
        if rows.is_empty() {
            return Err(RecastError::EmptyData("No data rows found".to_string()));
        }

        Dataset::from_rows(headers, rows)
    }

    /// Convert a raw field to a cell.
    fn to_cell(&self, field: &str) -> Cell {
        if is_null_token(field) {
            return Cell::Missing;
        }
        match self.config.cell_mode {
            CellMode::Raw => Cell::text(field),
            CellMode::Typed => {
                let trimmed = field.trim();
                if trimmed.eq_ignore_ascii_case("true") {
                    Cell::Boolean(true)
                } else if trimmed.eq_ignore_ascii_case("false") {
                    Cell::Boolean(false)
                } else if let Some(number) = parse_number(trimmed) {
                    Cell::from(number)
                } else {
                    Cell::text(field)
                }
            }
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Make header names unique by suffixing repeats with `.1`, `.2`, ...
fn dedupe_headers(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for (i, name) in names.enumerate() {
        let base = if name.is_empty() {
            format!("column_{}", i + 1)
        } else {
            name
        };
        let mut candidate = base.clone();
        let mut n = 1;
        while !seen.insert(candidate.clone()) {
            candidate = format!("{}.{}", base, n);
            n += 1;
        }
        out.push(candidate);
    }

    out
}

/// Detect the delimiter by reading a sample of records with each candidate.
///
/// A candidate scores by how many sampled records share the first record's
/// field count, then by that field count. Quoting is handled by the csv
/// reader, so delimiters inside quoted fields do not count.
fn detect_delimiter(bytes: &[u8], quote: u8) -> Result<u8> {
    let mut best: Option<(u8, (usize, usize))> = None;
    let mut saw_records = false;

    for &delim in DELIMITERS {
        let widths = sample_widths(bytes, delim, quote);
        let Some(&first) = widths.first() else {
            continue;
        };
        saw_records = true;
        if first < 2 {
            continue;
        }

        let agreeing = widths.iter().filter(|&&w| w == first).count();
        let score = (agreeing, first);
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((delim, score));
        }
    }

    if !saw_records {
        return Err(RecastError::EmptyData("No lines to analyze".to_string()));
    }
    // A single-column file has no delimiter to find
    Ok(best.map_or(b',', |(delim, _)| delim))
}

/// Field counts of the first records when split on `delimiter`.
fn sample_widths(bytes: &[u8], delimiter: u8, quote: u8) -> Vec<usize> {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .quote(quote)
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes)
        .byte_records()
        .take(DETECT_SAMPLE_RECORDS)
        .map_while(|record| record.ok())
        .map(|record| record.len())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_comma_and_semicolon() {
        assert_eq!(detect_delimiter(b"id,dose\n1,10\n2,20", b'"').unwrap(), b',');
        assert_eq!(detect_delimiter(b"id;dose\n1;10\n2;20", b'"').unwrap(), b';');
    }

    #[test]
    fn test_detect_ignores_delimiters_inside_quotes() {
        // Two commas per line inside quotes, one tab outside
        let data = b"\"a,b,c\"\tlabel\n\"1,2,3\"\tx\n\"4,5,6\"\ty\n";
        assert_eq!(detect_delimiter(data, b'"').unwrap(), b'\t');
    }

    #[test]
    fn test_detect_prefers_consistent_width() {
        // Commas appear in free text, tabs split every row the same way
        let data = b"name\tnote\nA\tlow, stable\nB\tnone\nC\thigh, rising, fast\n";
        assert_eq!(detect_delimiter(data, b'"').unwrap(), b'\t');
    }

    #[test]
    fn test_detect_single_column_defaults_to_comma() {
        assert_eq!(detect_delimiter(b"dose\n10\n20\n", b'"').unwrap(), b',');
    }

    #[test]
    fn test_detect_empty_input() {
        assert!(matches!(
            detect_delimiter(b"", b'"'),
            Err(RecastError::EmptyData(_))
        ));
    }

    #[test]
    fn test_parse_typed_cells() {
        let parser = Parser::new();
        let data = b"name,age,score,active\nAlice,30,1.5,true\nBob,NA,abc,FALSE";
        let ds = parser.parse_bytes(data).unwrap();

        assert_eq!(ds.column_names().collect::<Vec<_>>(), vec!["name", "age", "score", "active"]);
        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.get(0, 0), Some(&Cell::text("Alice")));
        assert_eq!(ds.get(0, 1), Some(&Cell::Integer(30)));
        assert_eq!(ds.get(1, 1), Some(&Cell::Missing));
        assert_eq!(ds.get(0, 2), Some(&Cell::Float(1.5)));
        assert_eq!(ds.get(1, 2), Some(&Cell::text("abc")));
        assert_eq!(ds.get(1, 3), Some(&Cell::Boolean(false)));
    }

    #[test]
    fn test_parse_raw_cells() {
        let parser = Parser::with_config(ParserConfig {
            cell_mode: CellMode::Raw,
            ..ParserConfig::default()
        });
        let ds = parser.parse_bytes(b"dose\n10\nNA\nabc\n").unwrap();
        assert_eq!(
            ds.column("dose").unwrap(),
            &[Cell::text("10"), Cell::Missing, Cell::text("abc")]
        );
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let ds = Parser::new().parse_bytes(b"a,b,c\n1,2\n3,4,5,6\n").unwrap();
        assert_eq!(ds.get(0, 2), Some(&Cell::Missing));
        assert_eq!(ds.get(1, 2), Some(&Cell::Integer(5)));
        assert_eq!(ds.column_count(), 3);
    }

    #[test]
    fn test_duplicate_headers_are_suffixed() {
        let ds = Parser::new().parse_bytes(b"x,x,,x\n1,2,3,4\n").unwrap();
        assert_eq!(
            ds.column_names().collect::<Vec<_>>(),
            vec!["x", "x.1", "column_3", "x.2"]
        );
    }

    #[test]
    fn test_no_header() {
        let parser = Parser::with_config(ParserConfig {
            has_header: false,
            ..ParserConfig::default()
        });
        let ds = parser.parse_bytes(b"1,a\n2,b\n").unwrap();
        assert_eq!(ds.column_names().collect::<Vec<_>>(), vec!["column_1", "column_2"]);
        assert_eq!(ds.row_count(), 2);
    }

    #[test]
    fn test_max_rows() {
        let parser = Parser::with_config(ParserConfig {
            max_rows: Some(1),
            ..ParserConfig::default()
        });
        let ds = parser.parse_bytes(b"a\n1\n2\n3\n").unwrap();
        assert_eq!(ds.row_count(), 1);
    }

    #[test]
    fn test_header_only_is_empty_data() {
        let err = Parser::new().parse_bytes(b"a,b\n").unwrap_err();
        assert!(matches!(err, RecastError::EmptyData(_)));
    }

    #[test]
    fn test_empty_input_is_empty_data() {
        let err = Parser::new().parse_bytes(b"").unwrap_err();
        assert!(matches!(err, RecastError::EmptyData(_)));
    }

    #[test]
    fn test_is_null_token() {
        assert!(is_null_token(""));
        assert!(is_null_token("NA"));
        assert!(is_null_token("n/a"));
        assert!(is_null_token("NULL"));
        assert!(is_null_token("."));
        assert!(!is_null_token("value"));
        assert!(!is_null_token("0"));
    }
}
