use dioxus::prelude::*;
use tracing::{error, info, warn};

use crate::{
    config::AppConfig,
    domain::ItemIndex,
    infra::MarketClient,
    ui::{
        pages::{LookupPage, ProfitTablePage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Profits {},
    #[route("/lookup")]
    Lookup {},
}

#[component]
pub fn App() -> Element {
    let index = use_signal(ItemIndex::default);
    use_context_provider(|| index);

    // Name→id listing for the lookup page, loaded once per launch.
    let _index_loader = use_resource(move || async move { load_item_index(index).await });

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
    }
}

async fn load_item_index(mut index: Signal<ItemIndex>) {
    index.set(ItemIndex::Loading);

    let loaded = match MarketClient::from_config(AppConfig::load()) {
        Ok(client) => client.load_price_book().await,
        Err(err) => Err(err),
    };

    match loaded {
        Ok(book) => {
            if book.is_empty() || !book.has_ids() {
                warn!("market listing has no identifiable items; lookups will fail");
            } else {
                info!(items = book.len(), "item index loaded");
            }
            index.set(ItemIndex::Ready(book));
        }
        Err(err) => {
            error!(error = %err, "failed to load item index");
            index.set(ItemIndex::Failed(err.to_string()));
        }
    }
}

#[component]
pub fn Profits() -> Element {
    rsx! { Shell { ProfitTablePage {} } }
}

#[component]
pub fn Lookup() -> Element {
    rsx! { Shell { LookupPage {} } }
}
