//! Aggregation Module
//! Applies the current filter selection and computes the dashboard totals.

use super::filters::FilterSelection;
use crate::data::Record;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Totals for the filtered subset of records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    /// Rows that passed the filter.
    pub row_count: usize,
    /// Rows with a contract id.
    pub total_contratos: usize,
    pub total_descontos: Decimal,
    pub total_saldo_devedor: Decimal,
    pub total_economia: Decimal,
    /// Present contract ids per responsible person, ascending by key.
    pub ctt_by_responsavel: BTreeMap<String, usize>,
    /// Present contract ids per bank, ascending by key.
    pub ctt_by_banco: BTreeMap<String, usize>,
}

impl Summary {
    /// True when no row passed the filter; charts are skipped.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }
}

/// Handles filtering and totals.
pub struct Aggregator;

impl Aggregator {
    /// Rows matching every selected column.
    pub fn filter<'a>(records: &'a [Record], selection: &FilterSelection) -> Vec<&'a Record> {
        records.iter().filter(|r| selection.matches(r)).collect()
    }

    /// Compute totals over an already filtered subset. Missing money counts as zero.
    pub fn summarize(rows: &[&Record]) -> Summary {
        let mut summary = Summary {
            row_count: rows.len(),
            ..Summary::default()
        };

        for row in rows {
            let has_ctt = usize::from(row.ctt.is_some());
            summary.total_contratos += has_ctt;
            summary.total_descontos += row.desconto.unwrap_or_default();
            summary.total_saldo_devedor += row.saldo_devedor.unwrap_or_default();
            summary.total_economia += row.economia.unwrap_or_default();

            if let Some(responsavel) = &row.responsavel {
                *summary
                    .ctt_by_responsavel
                    .entry(responsavel.clone())
                    .or_insert(0) += has_ctt;
            }
            *summary.ctt_by_banco.entry(row.banco.clone()).or_insert(0) += has_ctt;
        }

        summary
    }

    /// Filter then summarize.
    pub fn compute(records: &[Record], selection: &FilterSelection) -> Summary {
        let rows = Self::filter(records, selection);
        Self::summarize(&rows)
    }
}
