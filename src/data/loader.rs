//! CSV Data Loader Module
//! Reads the settlement report with Polars and exposes its columns as text.

use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Physical lines before the real header row (a report banner).
pub const HEADER_OFFSET: usize = 1;

/// Columns the settlement report must carry, in uppercase.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "DIRETOR",
    "DESCONTO",
    "SALDO DEVEDOR",
    "BANCO",
    "ESCRITÓRIO",
    "UF",
    "CONSULTOR",
    "CTT",
    "RESPONSAVEL",
];

/// Cell texts read as a missing value, besides an empty field.
pub const MISSING_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// True for an empty cell or one of [`MISSING_MARKERS`]. Matching is exact.
pub fn is_missing_marker(cell: &str) -> bool {
    cell.is_empty() || MISSING_MARKERS.contains(&cell)
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Invalid monetary value {value:?} in column {column} (row {row})")]
    Parse {
        column: String,
        row: usize,
        value: String,
    },
}

/// Column-oriented text table with uppercase column names.
///
/// Missing cells are `None`.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    columns: Vec<(String, Vec<Option<String>>)>,
    height: usize,
}

impl RawTable {
    /// Build a table from named columns. Names are trimmed and uppercased.
    pub fn new(columns: Vec<(String, Vec<Option<String>>)>) -> Self {
        let height = columns.iter().map(|(_, v)| v.len()).max().unwrap_or(0);
        let columns = columns
            .into_iter()
            .map(|(name, values)| (name.trim().to_uppercase(), values))
            .collect();
        Self { columns, height }
    }

    /// Convert a Polars DataFrame whose columns were all read as strings.
    ///
    /// Quoted empty cells and missing markers become `None`.
    pub fn from_dataframe(df: &DataFrame) -> Result<Self, LoaderError> {
        let mut columns = Vec::with_capacity(df.width());

        for column in df.get_columns() {
            let series = column.as_materialized_series();
            let text = series.cast(&DataType::String)?;
            let values: Vec<Option<String>> = text
                .str()?
                .into_iter()
                .map(|v| v.filter(|s| !is_missing_marker(s)).map(str::to_string))
                .collect();
            columns.push((column.name().to_string(), values));
        }

        Ok(Self::new(columns))
    }

    /// Get a column by its uppercase name.
    pub fn column(&self, name: &str) -> Result<&[Option<String>], LoaderError> {
        self.columns
            .iter()
            .find(|(col, _)| col == name)
            .map(|(_, values)| values.as_slice())
            .ok_or_else(|| LoaderError::MissingColumn(name.to_string()))
    }

    /// Fail on the first required column that is absent.
    pub fn require_columns(&self, names: &[&str]) -> Result<(), LoaderError> {
        for name in names {
            self.column(name)?;
        }
        Ok(())
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

/// Handles CSV file loading with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file, skipping the banner line before the header.
    ///
    /// Every column is read as text so currency cells reach the normalizer untouched.
    pub fn load_csv(file_path: &Path) -> Result<RawTable, LoaderError> {
        let file = File::open(file_path).map_err(|source| LoaderError::Read {
            path: file_path.to_path_buf(),
            source,
        })?;

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_skip_rows(HEADER_OFFSET)
            .with_infer_schema_length(Some(0))
            .into_reader_with_file_handle(file)
            .finish()?;

        let table = RawTable::from_dataframe(&df)?;
        debug!(columns = ?table.column_names(), "parsed CSV header");
        table.require_columns(&REQUIRED_COLUMNS)?;

        info!(
            path = %file_path.display(),
            rows = table.height(),
            "loaded settlement report"
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(name: &str, values: &[Option<&str>]) -> (String, Vec<Option<String>>) {
        (
            name.to_string(),
            values.iter().map(|v| v.map(str::to_string)).collect(),
        )
    }

    #[test]
    fn test_column_names_are_uppercased() {
        let table = RawTable::new(vec![
            col(" Diretor ", &[Some("a")]),
            col("Escritório", &[Some("b")]),
        ]);
        assert_eq!(table.column_names(), vec!["DIRETOR", "ESCRITÓRIO"]);
        assert_eq!(table.height(), 1);
    }

    #[test]
    fn test_missing_column_is_reported() {
        let table = RawTable::new(vec![col("DIRETOR", &[Some("a")])]);
        let err = table.require_columns(&["DIRETOR", "BANCO"]).unwrap_err();
        assert!(matches!(err, LoaderError::MissingColumn(name) if name == "BANCO"));
    }

    #[test]
    fn test_missing_markers() {
        for marker in ["", "NA", "N/A", "NaN", "nan", "NULL", "None", "#N/A", "<NA>"] {
            assert!(is_missing_marker(marker), "{marker:?} should be missing");
        }
        assert!(!is_missing_marker("R$ 0,00"));
        assert!(!is_missing_marker(" NA"));
        assert!(!is_missing_marker("Na"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = DataLoader::load_csv(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, LoaderError::Read { .. }));
    }
}
