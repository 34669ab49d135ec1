use dioxus::prelude::*;

use crate::{
    config::AppConfig,
    domain::{ItemIndex, LookupForm, LookupReport, PriceBook},
    infra::MarketClient,
    pipeline::{lookup_profit, LookupError},
    ui::components::{ErrorMessage, LoadingIndicator, LookupResultCard},
};

#[component]
pub fn LookupPage() -> Element {
    let index = use_context::<Signal<ItemIndex>>();
    let mut form = use_signal(LookupForm::default);

    let snapshot = form();
    let index_summary = index.with(ItemIndex::summary);
    let index_ready = index.with(|idx| idx.book().is_some());
    let index_loading = index.with(ItemIndex::is_loading);

    let on_calculate = move |_| {
        let Some(book) = index.with(|idx| idx.book().cloned()) else {
            return;
        };
        let (raw, processed) = form.with(|f| (f.raw_name.clone(), f.processed_name.clone()));
        let ticket = form.with_mut(LookupForm::begin);
        spawn(async move {
            let outcome = calculate(&book, &raw, &processed).await;
            form.with_mut(|f| f.finish(ticket, outcome));
        });
    };

    rsx! {
        div {
            header {
                class: "page-header",
                div {
                    h1 { class: "page-title", "Price Lookup" }
                    p {
                        class: "page-subtitle",
                        "Compare buying a raw item with selling its processed form."
                    }
                }
            }
            if index_ready {
                p { class: "index-status", "{index_summary}" }
                div {
                    class: "panel",
                    div {
                        class: "lookup-form",
                        label {
                            "Raw item"
                            input {
                                r#type: "text",
                                placeholder: "e.g. Raw piranha",
                                value: "{snapshot.raw_name}",
                                oninput: move |evt| form.with_mut(|f| f.raw_name = evt.value()),
                            }
                        }
                        label {
                            "Processed item"
                            input {
                                r#type: "text",
                                placeholder: "e.g. Cooked piranha",
                                value: "{snapshot.processed_name}",
                                oninput: move |evt| form.with_mut(|f| f.processed_name = evt.value()),
                            }
                        }
                    }
                    div {
                        class: "lookup-actions",
                        button {
                            class: "action-button primary",
                            disabled: snapshot.loading,
                            onclick: on_calculate,
                            "Calculate"
                        }
                        button {
                            class: "action-button",
                            onclick: move |_| form.with_mut(LookupForm::clear),
                            "Clear"
                        }
                    }
                    LoadingIndicator {
                        message: "Fetching prices...".to_string(),
                        visible: snapshot.loading,
                    }
                    ErrorMessage { message: snapshot.error.clone() }
                }
            } else if index_loading {
                LoadingIndicator { message: index_summary.clone(), visible: true }
            } else {
                ErrorMessage { message: Some(index_summary.clone()) }
            }
            if let Some(report) = snapshot.report.clone() {
                LookupResultCard { report }
            }
        }
    }
}

async fn calculate(
    book: &PriceBook,
    raw_name: &str,
    processed_name: &str,
) -> Result<LookupReport, LookupError> {
    let client = MarketClient::from_config(AppConfig::load())?;
    lookup_profit(&client, book, raw_name, processed_name).await
}
