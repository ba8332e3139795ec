//! Quitados Dashboard - settlement report viewer
//!
//! Loads the monthly settlement CSV, cleans its currency columns, filters rows by
//! five categorical dimensions and presents totals plus two bar charts.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod stats;
