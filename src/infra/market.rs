//! Thin asynchronous client for the Idle Clans player market API.
//!
//! - One request per call; no retries, timeouts or caching.
//! - Non-success statuses surface the status line and a body excerpt.

use reqwest::{header::CONTENT_TYPE, Client, Url};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::config::{AppConfig, DEFAULT_BASE_URL};
use crate::domain::{ItemId, MarketItem, PriceBook};

const USER_AGENT: &str = concat!("craft-profit-scanner/", env!("CARGO_PKG_VERSION"));
const LATEST_PRICES_PATH: &str = "PlayerMarket/items/prices/latest";
const ERROR_BODY_LIMIT: usize = 200;

#[derive(Debug, Error)]
pub enum MarketClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error: {status} {reason}. Details: {body}...")]
    Http {
        status: u16,
        reason: String,
        body: String,
    },
    #[error("invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// Body of a successful response.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiPayload {
    Json(Value),
    /// Body that did not parse as JSON, kept verbatim.
    Text(String),
}

#[derive(Clone, Debug)]
pub struct MarketClient {
    http: Client,
    base_url: Url,
    include_average_price: bool,
}

impl MarketClient {
    pub fn new() -> Result<Self, MarketClientError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, MarketClientError> {
        Ok(Self::with_base_url(&config.api_base_url)?
            .with_average_price(config.include_average_price))
    }

    pub fn with_base_url(base: &str) -> Result<Self, MarketClientError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url,
            include_average_price: false,
        })
    }

    /// Adds `includeAveragePrice=true` to listing requests.
    pub fn with_average_price(mut self, enabled: bool) -> Self {
        self.include_average_price = enabled;
        self
    }

    /// Full listing of the latest prices for every traded item.
    pub async fn latest_prices(&self) -> Result<Vec<MarketItem>, MarketClientError> {
        let mut url = self.url(LATEST_PRICES_PATH)?;
        if self.include_average_price {
            url.query_pairs_mut()
                .append_pair("includeAveragePrice", "true");
        }

        let payload = self.fetch_api_data(url).await?;
        let items = parse_listing(payload)?;
        info!(items = items.len(), "loaded market price listing");
        Ok(items)
    }

    /// Latest prices for a single item.
    pub async fn latest_price(&self, item_id: ItemId) -> Result<MarketItem, MarketClientError> {
        let url = self.url(&format!("{LATEST_PRICES_PATH}/{item_id}"))?;
        let payload = self.fetch_api_data(url).await?;
        parse_single(payload, item_id)
    }

    pub async fn load_price_book(&self) -> Result<PriceBook, MarketClientError> {
        let items = self.latest_prices().await?;
        Ok(PriceBook::from_items(items, OffsetDateTime::now_utc()))
    }

    /// Performs a GET and returns the decoded body.
    ///
    /// JSON content types are decoded strictly. Any other content type is
    /// tried as JSON and kept as plain text when that fails.
    pub async fn fetch_api_data(&self, url: Url) -> Result<ApiPayload, MarketClientError> {
        debug!(%url, "requesting market data");
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|err| {
                debug!(%url, error = %err, "could not read error response body");
                String::new()
            });
            warn!(%url, status = status.as_u16(), body = %body, "market API returned an error");
            return Err(MarketClientError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                body: truncate_chars(&body, ERROR_BODY_LIMIT),
            });
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("application/json"))
            .unwrap_or(false);

        let text = response.text().await?;
        if is_json {
            return Ok(ApiPayload::Json(serde_json::from_str(&text)?));
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Ok(ApiPayload::Json(value)),
            Err(_) => {
                debug!(%url, "response is not JSON; keeping raw text");
                Ok(ApiPayload::Text(text))
            }
        }
    }

    fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarketItemDto {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    item_id: Option<ItemId>,
    #[serde(default, alias = "lowestSellPrice")]
    lowest_price: Option<f64>,
    #[serde(default, alias = "highestBuyPrice")]
    highest_price: Option<f64>,
    #[serde(default)]
    average_price: Option<f64>,
}

impl From<MarketItemDto> for MarketItem {
    fn from(dto: MarketItemDto) -> Self {
        Self {
            name: dto.name.unwrap_or_default(),
            item_id: dto.item_id,
            lowest_price: dto.lowest_price,
            highest_price: dto.highest_price,
            average_price: dto.average_price,
        }
    }
}

fn parse_listing(payload: ApiPayload) -> Result<Vec<MarketItem>, MarketClientError> {
    match payload {
        ApiPayload::Json(Value::Array(entries)) => Ok(entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<MarketItemDto>(entry).ok())
            .map(MarketItem::from)
            .filter(|item| !item.name.trim().is_empty())
            .collect()),
        ApiPayload::Json(_) => Err(MarketClientError::UnexpectedFormat(
            "expected an array of items".into(),
        )),
        ApiPayload::Text(_) => Err(MarketClientError::UnexpectedFormat(
            "expected JSON, got plain text".into(),
        )),
    }
}

fn parse_single(payload: ApiPayload, item_id: ItemId) -> Result<MarketItem, MarketClientError> {
    match payload {
        ApiPayload::Json(value @ Value::Object(_)) => {
            let mut item = MarketItem::from(serde_json::from_value::<MarketItemDto>(value)?);
            if item.item_id.is_none() {
                item.item_id = Some(item_id);
            }
            Ok(item)
        }
        ApiPayload::Json(_) => Err(MarketClientError::UnexpectedFormat(format!(
            "expected a price object for item {item_id}"
        ))),
        ApiPayload::Text(_) => Err(MarketClientError::UnexpectedFormat(format!(
            "expected JSON for item {item_id}, got plain text"
        ))),
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
