//! Stats module - filtering and aggregation

mod aggregator;
mod filters;

pub use aggregator::{Aggregator, Summary};
pub use filters::{FilterColumn, FilterOptions, FilterSelection, TODOS};
