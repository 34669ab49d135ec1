//! View-models for the recipe profit table.

use std::cmp::Ordering;

use super::entities::ProfitResult;

/// Recipe, unit cost, profit / unit, crafts / h, profit / h, XP / h.
pub const PROFIT_TABLE_COLUMNS: usize = 6;

pub const EMPTY_MESSAGE: &str = "No profit data available.";
pub const LOADING_MESSAGE: &str = "Loading market prices...";

#[derive(Clone, Debug, PartialEq)]
pub struct ProfitRow {
    pub name: String,
    pub unit_cost: String,
    pub profit_per_unit: String,
    pub crafts_per_hour: String,
    pub profit_per_hour: String,
    pub xp_per_hour: String,
    pub profitable: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderKind {
    Empty,
    Loading,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TableRow {
    Profit(ProfitRow),
    /// Single row spanning every column.
    Placeholder {
        kind: PlaceholderKind,
        message: String,
        colspan: usize,
    },
}

impl TableRow {
    fn placeholder(kind: PlaceholderKind, message: impl Into<String>) -> Self {
        TableRow::Placeholder {
            kind,
            message: message.into(),
            colspan: PROFIT_TABLE_COLUMNS,
        }
    }
}

/// Drops non-finite results, orders the rest by profit per hour (highest
/// first) and formats them for display.
pub fn render_profit_table(results: &[ProfitResult]) -> Vec<TableRow> {
    let mut ranked: Vec<&ProfitResult> = results
        .iter()
        .filter(|result| result.profit_per_hour.is_finite())
        .collect();

    if ranked.is_empty() {
        return vec![TableRow::placeholder(PlaceholderKind::Empty, EMPTY_MESSAGE)];
    }

    ranked.sort_by(|a, b| compare_desc(a.profit_per_hour, b.profit_per_hour));
    ranked
        .into_iter()
        .map(|result| TableRow::Profit(profit_row(result)))
        .collect()
}

pub fn loading_rows() -> Vec<TableRow> {
    vec![TableRow::placeholder(PlaceholderKind::Loading, LOADING_MESSAGE)]
}

pub fn error_rows(message: impl Into<String>) -> Vec<TableRow> {
    vec![TableRow::placeholder(PlaceholderKind::Error, message)]
}

/// Two fixed decimals for every figure in the table.
pub fn format_amount(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "n/a".to_string()
    }
}

fn profit_row(result: &ProfitResult) -> ProfitRow {
    ProfitRow {
        name: result.name.clone(),
        unit_cost: format_amount(result.unit_cost),
        profit_per_unit: format_amount(result.profit_per_unit),
        crafts_per_hour: format!("{:.0}", result.crafts_per_hour),
        profit_per_hour: format_amount(result.profit_per_hour),
        xp_per_hour: format_amount(result.xp_per_hour),
        profitable: result.profit_per_hour >= 0.0,
    }
}

fn compare_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
