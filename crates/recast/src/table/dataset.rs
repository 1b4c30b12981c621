//! Column-oriented tabular dataset.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::error::{RecastError, Result};

use super::cell::Cell;

/// An ordered set of uniquely named columns of equal length.
///
/// The row count is fixed by the first column pushed; a dataset with no
/// columns has no rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: IndexMap<String, Vec<Cell>>,
    row_count: usize,
}

impl Dataset {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from `(name, cells)` pairs.
    pub fn from_columns<N, C>(columns: impl IntoIterator<Item = (N, C)>) -> Result<Self>
    where
        N: Into<String>,
        C: IntoIterator,
        C::Item: Into<Cell>,
    {
        let mut dataset = Self::new();
        for (name, cells) in columns {
            dataset.push_column(name, cells.into_iter().map(Into::into).collect())?;
        }
        Ok(dataset)
    }

    /// Build a dataset from headers and row-major cells.
    ///
    /// Short rows are padded with missing cells; extra cells are dropped.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self> {
        let mut columns: Vec<Vec<Cell>> = headers
            .iter()
            .map(|_| Vec::with_capacity(rows.len()))
            .collect();

        for row in rows {
            let mut row = row.into_iter();
            for column in columns.iter_mut() {
                column.push(row.next().unwrap_or_default());
            }
        }

        let mut dataset = Self::new();
        for (name, cells) in headers.into_iter().zip(columns) {
            dataset.push_column(name, cells)?;
        }
        // Zero rows with named columns is still a valid shape.
        Ok(dataset)
    }

    /// Append a column.
    pub fn push_column(&mut self, name: impl Into<String>, cells: Vec<Cell>) -> Result<()> {
        let name = name.into();
        if self.columns.contains_key(&name) {
            return Err(RecastError::DuplicateColumn(name));
        }
        if self.columns.is_empty() {
            self.row_count = cells.len();
        } else if cells.len() != self.row_count {
            return Err(RecastError::LengthMismatch {
                column: name,
                expected: self.row_count,
                found: cells.len(),
            });
        }
        self.columns.insert(name, cells);
        Ok(())
    }

    /// Replace the cells of an existing column, keeping its position.
    pub(crate) fn replace_column(&mut self, name: &str, cells: Vec<Cell>) -> Result<()> {
        if cells.len() != self.row_count {
            return Err(RecastError::LengthMismatch {
                column: name.to_string(),
                expected: self.row_count,
                found: cells.len(),
            });
        }
        match self.columns.get_mut(name) {
            Some(slot) => {
                *slot = cells;
                Ok(())
            }
            None => Err(self.invalid_reference(name)),
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Check whether the dataset has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(|k| k.as_str())
    }

    /// Columns in order as `(name, cells)`.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[Cell])> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&[Cell]> {
        self.columns.get(name).map(|v| v.as_slice())
    }

    /// Get the position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.get_index_of(name)
    }

    /// Check whether a column exists.
    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Get a specific cell.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.columns.get_index(col).and_then(|(_, cells)| cells.get(row))
    }

    /// Iterate over rows as vectors of cell references.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Cell>> {
        (0..self.row_count).map(move |row| self.columns.values().map(|c| &c[row]).collect())
    }

    /// Build the error returned for an unknown column name.
    pub(crate) fn invalid_reference(&self, name: &str) -> RecastError {
        RecastError::InvalidColumnReference {
            column: name.to_string(),
            available: self.column_names().map(String::from).collect(),
        }
    }
}

/// Serializes as an ordered map of column name to cells.
impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.columns.serialize(serializer)
    }
}
