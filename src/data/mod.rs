//! Data module - CSV loading and normalization

mod loader;
mod money;
mod processor;

pub use loader::{
    is_missing_marker, DataLoader, LoaderError, RawTable, HEADER_OFFSET, MISSING_MARKERS,
    REQUIRED_COLUMNS,
};
pub use money::{correct_decimal_separators, format_brl, parse_brl, round_cents};
pub use processor::{DataProcessor, Record, MISSING_TEXT};

use std::path::Path;

/// Load and normalize the settlement report in one step.
pub fn load_records(path: &Path) -> Result<Vec<Record>, LoaderError> {
    let table = DataLoader::load_csv(path)?;
    DataProcessor::normalize(&table)
}
