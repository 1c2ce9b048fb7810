//! Ordered CSV tabular model.
//!
//! A [`Table`] is a header row plus string rows, preserving the source's
//! column order end to end — output files carry the same header schema as
//! their input. Encoding is UTF-8, delimiter is comma, and every row is
//! written with a trailing newline.

use std::path::Path;

use crate::error::TableError;

/// An in-memory table: header row plus data rows, all strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Read a CSV file with a header row.
    ///
    /// Returns [`TableError::NotFound`] when the file is absent, so callers
    /// can report the missing input distinctly from parse failures.
    pub fn read(path: &Path) -> Result<Table, TableError> {
        if !path.exists() {
            return Err(TableError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row: Vec<String> = record.iter().map(str::to_owned).collect();
            // Short rows are padded so column lookups stay in bounds.
            while row.len() < headers.len() {
                row.push(String::new());
            }
            rows.push(row);
        }

        Ok(Table { headers, rows })
    }

    /// Write the table as CSV: header first, then rows, trailing newline each.
    pub fn write(&self, path: &Path) -> Result<(), TableError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Position of `column` in the header row.
    pub fn column_index(&self, column: &str) -> Result<usize, TableError> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| TableError::MissingColumn {
                column: column.to_string(),
            })
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
