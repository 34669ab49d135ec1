use dioxus::prelude::*;

use crate::domain::{PlaceholderKind, ProfitRow, TableRow};

#[component]
pub fn ProfitTable(rows: Vec<TableRow>) -> Element {
    rsx! {
        div {
            class: "panel",
            table {
                class: "profit-table",
                thead {
                    tr {
                        th { "Recipe" }
                        th { class: "numeric", "Unit cost" }
                        th { class: "numeric", "Profit / unit" }
                        th { class: "numeric", "Crafts / h" }
                        th { class: "numeric", "Profit / h" }
                        th { class: "numeric", "XP / h" }
                    }
                }
                tbody {
                    for row in rows {
                        {render_row(row)}
                    }
                }
            }
        }
    }
}

fn render_row(row: TableRow) -> Element {
    match row {
        TableRow::Profit(row) => rsx! { ResultRow { row } },
        TableRow::Placeholder {
            kind,
            message,
            colspan,
        } => {
            let class = match kind {
                PlaceholderKind::Error => "placeholder error",
                PlaceholderKind::Empty | PlaceholderKind::Loading => "placeholder",
            };
            rsx! {
                tr {
                    td { class: class, colspan: "{colspan}", "{message}" }
                }
            }
        }
    }
}

#[component]
fn ResultRow(row: ProfitRow) -> Element {
    let tone = if row.profitable { "numeric gain" } else { "numeric loss" };
    rsx! {
        tr {
            td { "{row.name}" }
            td { class: "numeric", "{row.unit_cost}" }
            td { class: tone, "{row.profit_per_unit}" }
            td { class: "numeric", "{row.crafts_per_hour}" }
            td { class: tone, "{row.profit_per_hour}" }
            td { class: "numeric", "{row.xp_per_hour}" }
        }
    }
}
