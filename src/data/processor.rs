//! Data Processor Module
//! Turns the raw text table into typed settlement records.

use super::loader::{LoaderError, RawTable};
use super::money::{parse_brl, round_cents};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Text a missing cell becomes once coerced to a string and uppercased.
pub const MISSING_TEXT: &str = "NAN";

/// One normalized row of the settlement report.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub diretor: String,
    pub escritorio: Option<String>,
    pub uf: Option<String>,
    pub consultor: Option<String>,
    pub banco: String,
    pub desconto: Option<Decimal>,
    pub saldo_devedor: Option<Decimal>,
    /// `saldo_devedor - desconto`, absent when either side is.
    pub economia: Option<Decimal>,
    pub ctt: Option<String>,
    pub responsavel: Option<String>,
}

/// Handles data cleaning and transformation operations.
pub struct DataProcessor;

impl DataProcessor {
    /// Coerce a categorical cell to trimmed uppercase text.
    pub fn normalize_category(value: Option<&str>) -> String {
        value.unwrap_or(MISSING_TEXT).trim().to_uppercase()
    }

    /// Parse a whole monetary column eagerly. The first bad cell aborts.
    pub fn parse_money_column(
        name: &str,
        values: &[Option<String>],
    ) -> Result<Vec<Option<Decimal>>, LoaderError> {
        values
            .iter()
            .enumerate()
            .map(|(row, cell)| match cell {
                None => Ok(None),
                Some(raw) => parse_brl(raw).map(Some).map_err(|e| {
                    warn!(column = name, row, value = %raw, error = %e, "unparseable monetary cell");
                    LoaderError::Parse {
                        column: name.to_string(),
                        row,
                        value: raw.clone(),
                    }
                }),
            })
            .collect()
    }

    /// Savings per row, rounded to cents.
    pub fn economia(saldo_devedor: Option<Decimal>, desconto: Option<Decimal>) -> Option<Decimal> {
        match (saldo_devedor, desconto) {
            (Some(saldo), Some(desconto)) => Some(round_cents(saldo - desconto)),
            _ => None,
        }
    }

    /// Normalize the raw table into records.
    pub fn normalize(table: &RawTable) -> Result<Vec<Record>, LoaderError> {
        let diretor = table.column("DIRETOR")?;
        let escritorio = table.column("ESCRITÓRIO")?;
        let uf = table.column("UF")?;
        let consultor = table.column("CONSULTOR")?;
        let banco = table.column("BANCO")?;
        let ctt = table.column("CTT")?;
        let responsavel = table.column("RESPONSAVEL")?;

        let desconto = Self::parse_money_column("DESCONTO", table.column("DESCONTO")?)?;
        let saldo_devedor =
            Self::parse_money_column("SALDO DEVEDOR", table.column("SALDO DEVEDOR")?)?;

        let cell = |values: &[Option<String>], i: usize| values.get(i).cloned().flatten();

        let records: Vec<Record> = (0..table.height())
            .map(|i| {
                let desconto = desconto.get(i).copied().flatten();
                let saldo_devedor = saldo_devedor.get(i).copied().flatten();
                Record {
                    diretor: Self::normalize_category(diretor.get(i).and_then(|v| v.as_deref())),
                    escritorio: cell(escritorio, i),
                    uf: cell(uf, i),
                    consultor: cell(consultor, i),
                    banco: Self::normalize_category(banco.get(i).and_then(|v| v.as_deref())),
                    desconto,
                    saldo_devedor,
                    economia: Self::economia(saldo_devedor, desconto),
                    ctt: cell(ctt, i),
                    responsavel: cell(responsavel, i),
                }
            })
            .collect();

        debug!(rows = records.len(), "normalized settlement records");
        Ok(records)
    }
}
