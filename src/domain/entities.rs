use thiserror::Error;

/// Numeric identifier the market API uses for an item.
pub type ItemId = u64;

/// One craftable product with its ingredient list.
///
/// Ingredients are stored one entry per unit, so a name that appears ten
/// times is bought ten times per craft.
#[derive(Clone, Debug, PartialEq)]
pub struct Recipe {
    pub name: String,
    pub product: String,
    pub ingredients: Vec<String>,
    pub experience: f64,
    pub craft_time_seconds: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum RecipeError {
    #[error("recipe \"{0}\" needs a craft time above zero seconds")]
    InvalidCraftTime(String),
    #[error("recipe \"{0}\" has a negative or non-finite experience value")]
    InvalidExperience(String),
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        product: impl Into<String>,
        experience: f64,
        craft_time_seconds: f64,
    ) -> Self {
        Self {
            name: name.into(),
            product: product.into(),
            ingredients: Vec::new(),
            experience,
            craft_time_seconds,
        }
    }

    /// Adds `quantity` units of `name` to the ingredient list.
    pub fn ingredient(mut self, name: &str, quantity: usize) -> Self {
        self.ingredients
            .extend(std::iter::repeat(name.to_string()).take(quantity));
        self
    }

    pub fn validate(&self) -> Result<(), RecipeError> {
        if !self.craft_time_seconds.is_finite() || self.craft_time_seconds <= 0.0 {
            return Err(RecipeError::InvalidCraftTime(self.name.clone()));
        }
        if !self.experience.is_finite() || self.experience < 0.0 {
            return Err(RecipeError::InvalidExperience(self.name.clone()));
        }
        Ok(())
    }
}

/// Current market quote for a single item.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PriceQuote {
    /// Lowest current ask, i.e. what one unit costs to buy.
    pub buy_price: f64,
    /// Highest current bid, i.e. what one unit sells for.
    pub sell_price: f64,
}

/// Decoded entry of the market price listing.
#[derive(Clone, Debug, PartialEq)]
pub struct MarketItem {
    pub name: String,
    pub item_id: Option<ItemId>,
    pub lowest_price: Option<f64>,
    pub highest_price: Option<f64>,
    pub average_price: Option<f64>,
}

impl MarketItem {
    pub fn quote(&self) -> PriceQuote {
        PriceQuote {
            buy_price: self.lowest_price.unwrap_or_default(),
            sell_price: self.highest_price.unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProfitResult {
    pub name: String,
    pub unit_cost: f64,
    pub profit_per_unit: f64,
    pub crafts_per_hour: f64,
    pub profit_per_hour: f64,
    pub xp_per_hour: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LookupSide {
    pub name: String,
    pub item_id: ItemId,
    pub price: f64,
}

/// Result of comparing a raw item against its processed counterpart.
#[derive(Clone, Debug, PartialEq)]
pub struct LookupReport {
    /// Raw item, priced at its lowest ask.
    pub raw: LookupSide,
    /// Processed item, priced at its highest bid.
    pub processed: LookupSide,
    pub profit: f64,
}

impl LookupReport {
    pub fn is_profitable(&self) -> bool {
        self.profit >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingredient_repeats_entries_per_unit() {
        let recipe = Recipe::new("Stew", "Stew", 10.0, 30.0)
            .ingredient("Tomate", 3)
            .ingredient("Urtiga", 1);

        assert_eq!(
            recipe.ingredients,
            vec!["Tomate", "Tomate", "Tomate", "Urtiga"]
        );
    }

    #[test]
    fn validate_rejects_zero_craft_time() {
        let recipe = Recipe::new("Broken", "Broken", 1.0, 0.0);
        assert_eq!(
            recipe.validate(),
            Err(RecipeError::InvalidCraftTime("Broken".into()))
        );
    }

    #[test]
    fn validate_rejects_negative_experience() {
        let recipe = Recipe::new("Odd", "Odd", -2.0, 5.0);
        assert_eq!(
            recipe.validate(),
            Err(RecipeError::InvalidExperience("Odd".into()))
        );
    }

    #[test]
    fn missing_market_prices_quote_as_zero() {
        let item = MarketItem {
            name: "Pine log".into(),
            item_id: Some(4),
            lowest_price: None,
            highest_price: Some(12.0),
            average_price: None,
        };
        assert_eq!(
            item.quote(),
            PriceQuote {
                buy_price: 0.0,
                sell_price: 12.0
            }
        );
    }
}
