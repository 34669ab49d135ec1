//! Network access to the market API.

pub mod market;

pub use market::{ApiPayload, MarketClient, MarketClientError};
