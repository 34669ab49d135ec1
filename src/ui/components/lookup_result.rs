use dioxus::prelude::*;

use crate::domain::{format_amount, LookupReport};

#[component]
pub fn LookupResultCard(report: LookupReport) -> Element {
    let tone = if report.is_profitable() { "profit gain" } else { "profit loss" };
    let raw_price = format_amount(report.raw.price);
    let processed_price = format_amount(report.processed.price);
    let profit = format_amount(report.profit);

    rsx! {
        div {
            class: "panel lookup-result",
            h2 { "Profit details" }
            p {
                strong { "Base item (buy): " }
                "{report.raw.name} (ID: {report.raw.item_id})"
            }
            p { "Lowest price (buy): " span { class: "gain", "{raw_price}" } }
            p {
                strong { "Processed item (sell): " }
                "{report.processed.name} (ID: {report.processed.item_id})"
            }
            p { "Highest price (sell): " span { class: "numeric", "{processed_price}" } }
            p { "Potential profit per unit: " span { class: tone, "{profit}" } }
            p {
                class: "footnote",
                "Uses the lowest ask for the base item and the highest bid for the processed item. Market fees and processing costs are not included."
            }
        }
    }
}
