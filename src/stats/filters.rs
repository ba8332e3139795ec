//! Filter selection over the five categorical dimensions.

use crate::data::Record;
use std::collections::HashSet;

/// Sentinel option meaning "no filter on this column".
pub const TODOS: &str = "TODOS";

/// The five categorical columns a user can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterColumn {
    Diretor,
    Escritorio,
    Uf,
    Consultor,
    Banco,
}

impl FilterColumn {
    pub const ALL: [FilterColumn; 5] = [
        FilterColumn::Diretor,
        FilterColumn::Escritorio,
        FilterColumn::Uf,
        FilterColumn::Consultor,
        FilterColumn::Banco,
    ];

    fn index(self) -> usize {
        match self {
            FilterColumn::Diretor => 0,
            FilterColumn::Escritorio => 1,
            FilterColumn::Uf => 2,
            FilterColumn::Consultor => 3,
            FilterColumn::Banco => 4,
        }
    }

    /// Dropdown label shown in the side panel.
    pub fn label(self) -> &'static str {
        match self {
            FilterColumn::Diretor => "Selecione o Diretor",
            FilterColumn::Escritorio => "Selecione o Escritório",
            FilterColumn::Uf => "Selecione a UF",
            FilterColumn::Consultor => "Selecione o Consultor",
            FilterColumn::Banco => "Selecione o Banco",
        }
    }

    /// Only director and bank options are sorted; the others keep table order.
    pub fn sorted_options(self) -> bool {
        matches!(self, FilterColumn::Diretor | FilterColumn::Banco)
    }

    /// The record's value for this column, if present.
    pub fn value(self, record: &Record) -> Option<&str> {
        match self {
            FilterColumn::Diretor => Some(record.diretor.as_str()),
            FilterColumn::Escritorio => record.escritorio.as_deref(),
            FilterColumn::Uf => record.uf.as_deref(),
            FilterColumn::Consultor => record.consultor.as_deref(),
            FilterColumn::Banco => Some(record.banco.as_str()),
        }
    }
}

/// Selectable values per column, each list starting with [`TODOS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    options: [Vec<String>; 5],
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            options: std::array::from_fn(|_| vec![TODOS.to_string()]),
        }
    }
}

impl FilterOptions {
    /// Collect `TODOS` plus the distinct values of each filter column.
    ///
    /// Missing values (NaN in the source) are never offered as options.
    pub fn from_records(records: &[Record]) -> Self {
        let options = FilterColumn::ALL.map(|column| {
            let mut seen: HashSet<&str> = HashSet::new();
            let mut distinct: Vec<String> = Vec::new();
            for value in records.iter().filter_map(|r| column.value(r)) {
                if seen.insert(value) {
                    distinct.push(value.to_string());
                }
            }
            if column.sorted_options() {
                distinct.sort();
            }

            let mut options = Vec::with_capacity(distinct.len() + 1);
            options.push(TODOS.to_string());
            options.extend(distinct);
            options
        });

        Self { options }
    }

    pub fn options(&self, column: FilterColumn) -> &[String] {
        &self.options[column.index()]
    }

    pub fn contains(&self, column: FilterColumn, value: &str) -> bool {
        self.options(column).iter().any(|o| o == value)
    }
}

/// One single-choice selection per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    values: [String; 5],
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            values: std::array::from_fn(|_| TODOS.to_string()),
        }
    }
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: FilterColumn) -> &str {
        &self.values[column.index()]
    }

    pub fn set(&mut self, column: FilterColumn, value: impl Into<String>) {
        self.values[column.index()] = value.into();
    }

    /// Builder form of [`FilterSelection::set`].
    pub fn with(mut self, column: FilterColumn, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }

    /// AND of the per-column predicates; a missing value never matches.
    pub fn matches(&self, record: &Record) -> bool {
        FilterColumn::ALL.iter().all(|&column| {
            let selected = self.get(column);
            selected == TODOS || column.value(record) == Some(selected)
        })
    }

    /// Reset selections that are no longer offered back to [`TODOS`].
    ///
    /// Returns true when anything changed.
    pub fn retain_available(&mut self, options: &FilterOptions) -> bool {
        let mut changed = false;
        for column in FilterColumn::ALL {
            if !options.contains(column, self.get(column)) {
                self.set(column, TODOS);
                changed = true;
            }
        }
        changed
    }
}
