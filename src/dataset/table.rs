//! Named-column row tables read from CSV files or spreadsheets.

use super::models::FromRow;
use crate::error::{ResolveError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "xlsb", "ods"];

/// Returns true if the path names a spreadsheet rather than delimited text.
pub fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SPREADSHEET_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// A header plus string rows.
#[derive(Debug, Clone)]
pub struct RowTable {
    path: PathBuf,
    headers: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

/// A borrowed row with column lookup by name.
pub struct Row<'a> {
    cells: &'a [String],
    index: &'a HashMap<String, usize>,
}

impl Row<'_> {
    /// Returns the cell for `column`, or "" if the column or cell is absent.
    pub fn get(&self, column: &str) -> &str {
        self.index
            .get(&column.to_lowercase())
            .and_then(|&i| self.cells.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl RowTable {
    /// Builds a table from in-memory headers and rows.
    pub fn new(path: impl Into<PathBuf>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let headers: Vec<String> = headers.into_iter().map(|h| h.trim().to_string()).collect();
        let mut index = HashMap::new();
        for (i, header) in headers.iter().enumerate() {
            // First occurrence of a duplicated header wins
            index.entry(header.to_lowercase()).or_insert(i);
        }
        let rows = rows
            .into_iter()
            .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
            .collect();

        Self { path: path.into(), headers, index, rows }
    }

    /// Reads a table, picking the reader by file extension.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ResolveError::FileNotFound { path: path.to_path_buf() });
        }

        if is_spreadsheet(path) {
            Self::read_spreadsheet(path)
        } else {
            Self::read_csv(path)
        }
    }

    /// Reads delimited text with a header row.
    pub fn read_csv(path: &Path) -> Result<Self> {
        debug!("Reading CSV: {}", path.display());
        let csv_err = |source: csv::Error| ResolveError::Csv { path: path.to_path_buf(), source };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(csv_err)?;

        let headers: Vec<String> =
            reader.headers().map_err(csv_err)?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(csv_err)?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self::new(path, headers, rows))
    }

    /// Reads the first worksheet of a workbook; the first row is the header.
    pub fn read_spreadsheet(path: &Path) -> Result<Self> {
        debug!("Reading spreadsheet: {}", path.display());
        let sheet_err =
            |e: calamine::Error| ResolveError::Spreadsheet { path: path.to_path_buf(), reason: e.to_string() };

        let mut workbook = open_workbook_auto(path).map_err(sheet_err)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ResolveError::Spreadsheet {
                path: path.to_path_buf(),
                reason: "workbook contains no sheets".to_string(),
            })?
            .map_err(sheet_err)?;

        let mut rows = range.rows().map(|row| row.iter().map(cell_text).collect::<Vec<String>>());
        let headers = rows.next().unwrap_or_default();
        let rows = rows.collect();

        Ok(Self::new(path, headers, rows))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the required columns of `T` that the header lacks.
    pub fn missing_columns<T: FromRow>(&self) -> Vec<String> {
        T::COLUMNS
            .iter()
            .filter(|c| !self.index.contains_key(**c))
            .map(|c| c.to_string())
            .collect()
    }

    /// Converts every row into `T`, failing if a required column is missing.
    pub fn parse<T: FromRow>(&self) -> Result<Vec<T>> {
        let missing = self.missing_columns::<T>();
        if !missing.is_empty() {
            return Err(ResolveError::MissingColumns {
                dataset: T::DATASET,
                path: self.path.clone(),
                columns: missing,
            });
        }

        Ok(self
            .rows
            .iter()
            .map(|cells| T::from_row(&Row { cells, index: &self.index }))
            .collect())
    }
}

/// Renders a spreadsheet cell as text. Integral floats drop the fraction so
/// numeric barcodes read the same as their CSV form.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(n) => n.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e18 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
