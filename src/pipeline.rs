//! Fetch-then-compute flows used by the pages.
//!
//! Each flow returns a `Result`; the UI turns it into rows or a message.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::{
    error_rows, evaluate_recipes, processing_profit, render_profit_table, ItemId, LookupReport,
    LookupSide, MarketItem, NameResolver, PriceBook, ProfitResult, Recipe, TableRow,
};
use crate::infra::{MarketClient, MarketClientError};

/// Where prices come from.
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn price_book(&self) -> Result<PriceBook, MarketClientError>;
    async fn item_price(&self, item_id: ItemId) -> Result<MarketItem, MarketClientError>;
}

#[async_trait]
impl PriceSource for MarketClient {
    async fn price_book(&self) -> Result<PriceBook, MarketClientError> {
        self.load_price_book().await
    }

    async fn item_price(&self, item_id: ItemId) -> Result<MarketItem, MarketClientError> {
        self.latest_price(item_id).await
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to load market prices: {0}")]
    Market(#[from] MarketClientError),
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Enter both item names to calculate the profit.")]
    MissingInput,
    #[error("The item list has not been loaded. Try reloading the app.")]
    EmptyDataset,
    #[error("Item \"{0}\" was not found in the item list. Check the name.")]
    NotFound(String),
    #[error(
        "Could not read buy/sell prices for these items. \
         Check that both are listed on the market."
    )]
    MissingPrice,
    #[error("Failed to calculate profit: {0}")]
    Market(#[from] MarketClientError),
}

/// Loads prices and evaluates every recipe, in recipe order.
pub async fn run_profit_table(
    source: &dyn PriceSource,
    recipes: &[Recipe],
    resolver: &NameResolver,
) -> Result<Vec<ProfitResult>, PipelineError> {
    let book = source.price_book().await.map_err(|err| {
        error!(error = %err, "price fetch failed");
        PipelineError::from(err)
    })?;

    for recipe in recipes {
        if let Err(err) = recipe.validate() {
            warn!(error = %err, "recipe will report zero crafts per hour");
        }
    }

    let results = evaluate_recipes(recipes, &book, resolver);
    info!(
        recipes = results.len(),
        priced_items = book.len(),
        "computed recipe profits"
    );
    Ok(results)
}

/// Rows for a finished run: the ranked table, or one error row.
pub fn outcome_rows(outcome: &Result<Vec<ProfitResult>, PipelineError>) -> Vec<TableRow> {
    match outcome {
        Ok(results) => render_profit_table(results),
        Err(err) => error_rows(err.to_string()),
    }
}

/// Compares buying `raw_name` at its lowest ask with selling
/// `processed_name` at its highest bid.
pub async fn lookup_profit(
    source: &dyn PriceSource,
    book: &PriceBook,
    raw_name: &str,
    processed_name: &str,
) -> Result<LookupReport, LookupError> {
    let raw_name = raw_name.trim();
    let processed_name = processed_name.trim();
    if raw_name.is_empty() || processed_name.is_empty() {
        return Err(LookupError::MissingInput);
    }
    if !book.has_ids() {
        return Err(LookupError::EmptyDataset);
    }

    let raw_id = book
        .item_id_by_name(raw_name)
        .ok_or_else(|| LookupError::NotFound(raw_name.to_string()))?;
    let processed_id = book
        .item_id_by_name(processed_name)
        .ok_or_else(|| LookupError::NotFound(processed_name.to_string()))?;

    let raw = source.item_price(raw_id).await.inspect_err(|err| {
        warn!(item = raw_name, error = %err, "raw item price fetch failed");
    })?;
    let processed = source.item_price(processed_id).await.inspect_err(|err| {
        warn!(item = processed_name, error = %err, "processed item price fetch failed");
    })?;

    let (Some(raw_price), Some(processed_price)) = (raw.lowest_price, processed.highest_price)
    else {
        return Err(LookupError::MissingPrice);
    };

    let profit = processing_profit(raw.quote(), processed.quote());
    Ok(LookupReport {
        raw: LookupSide {
            name: raw_name.to_string(),
            item_id: raw_id,
            price: raw_price,
        },
        processed: LookupSide {
            name: processed_name.to_string(),
            item_id: processed_id,
            price: processed_price,
        },
        profit,
    })
}
