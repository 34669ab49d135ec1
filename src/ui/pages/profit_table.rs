use dioxus::prelude::*;

use crate::{
    config::AppConfig,
    domain::{default_recipes, loading_rows, table::LOADING_MESSAGE, NameResolver, TableRow},
    infra::MarketClient,
    pipeline::{outcome_rows, run_profit_table, PipelineError},
    ui::components::{ErrorMessage, LoadingIndicator, ProfitTable},
};

#[derive(Clone, PartialEq)]
struct ProfitTableView {
    rows: Vec<TableRow>,
    error: Option<String>,
}

#[component]
pub fn ProfitTablePage() -> Element {
    let mut table = use_resource(|| async move { load_profit_table().await });

    let view = table.read().as_ref().cloned();
    let loading = view.is_none();
    let (rows, error) = match view {
        Some(view) => (view.rows, view.error),
        None => (loading_rows(), None),
    };

    rsx! {
        div {
            header {
                class: "page-header",
                div {
                    h1 { class: "page-title", "Recipe Profits" }
                    p {
                        class: "page-subtitle",
                        "Ingredients bought at the lowest ask, products sold at the highest bid, ranked by profit per hour."
                    }
                }
                button {
                    class: "action-button primary",
                    disabled: loading,
                    onclick: move |_| {
                        table.clear();
                        table.restart();
                    },
                    "Refresh"
                }
            }
            LoadingIndicator { message: LOADING_MESSAGE.to_string(), visible: loading }
            ErrorMessage { message: error }
            ProfitTable { rows }
        }
    }
}

async fn load_profit_table() -> ProfitTableView {
    let outcome = match MarketClient::from_config(AppConfig::load()) {
        Ok(client) => {
            run_profit_table(&client, &default_recipes(), &NameResolver::default()).await
        }
        Err(err) => Err(PipelineError::from(err)),
    };

    ProfitTableView {
        rows: outcome_rows(&outcome),
        error: outcome.err().map(|err| err.to_string()),
    }
}
