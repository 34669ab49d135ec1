use std::collections::HashMap;

use time::OffsetDateTime;

use super::entities::{ItemId, MarketItem, PriceQuote};

/// Price and id lookup built from one market listing.
///
/// Keys are trimmed and lower-cased, so every lookup is case-insensitive.
/// When the listing repeats a name the later entry wins.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceBook {
    quotes: HashMap<String, PriceQuote>,
    ids: HashMap<String, ItemId>,
    fetched_at: OffsetDateTime,
}

impl PriceBook {
    pub fn from_items(items: Vec<MarketItem>, fetched_at: OffsetDateTime) -> Self {
        let mut quotes = HashMap::with_capacity(items.len());
        let mut ids = HashMap::with_capacity(items.len());

        for item in items {
            let key = normalize(&item.name);
            if key.is_empty() {
                continue;
            }
            if let Some(id) = item.item_id {
                ids.insert(key.clone(), id);
            }
            quotes.insert(key, item.quote());
        }

        Self {
            quotes,
            ids,
            fetched_at,
        }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Whether any listed item carried an id, i.e. names can be looked up.
    pub fn has_ids(&self) -> bool {
        !self.ids.is_empty()
    }

    pub fn fetched_at(&self) -> OffsetDateTime {
        self.fetched_at
    }

    pub fn quote(&self, name: &str) -> Option<PriceQuote> {
        self.quotes.get(&normalize(name)).copied()
    }

    /// Cost of buying one unit; unknown items cost nothing.
    pub fn buy_price(&self, name: &str) -> f64 {
        self.quote(name).map(|q| q.buy_price).unwrap_or_default()
    }

    /// Revenue of selling one unit; unknown items earn nothing.
    pub fn sell_price(&self, name: &str) -> f64 {
        self.quote(name).map(|q| q.sell_price).unwrap_or_default()
    }

    pub fn item_id_by_name(&self, name: &str) -> Option<ItemId> {
        self.ids.get(&normalize(name)).copied()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
