use super::entities::{PriceQuote, ProfitResult, Recipe};
use super::names::NameResolver;
use super::price_book::PriceBook;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Whole craft cycles that fit in one hour. Invalid craft times yield 0.
pub fn crafts_per_hour(craft_time_seconds: f64) -> f64 {
    if craft_time_seconds.is_finite() && craft_time_seconds > 0.0 {
        (SECONDS_PER_HOUR / craft_time_seconds).floor()
    } else {
        0.0
    }
}

pub fn evaluate_recipes(
    recipes: &[Recipe],
    book: &PriceBook,
    resolver: &NameResolver,
) -> Vec<ProfitResult> {
    recipes
        .iter()
        .map(|recipe| evaluate_recipe(recipe, book, resolver))
        .collect()
}

/// Prices a single recipe against the book.
///
/// Ingredients are bought at the lowest ask and the product is sold at the
/// highest bid. Names missing from the book count as zero.
pub fn evaluate_recipe(
    recipe: &Recipe,
    book: &PriceBook,
    resolver: &NameResolver,
) -> ProfitResult {
    let unit_cost: f64 = recipe
        .ingredients
        .iter()
        .map(|ingredient| book.buy_price(resolver.resolve(ingredient)))
        .sum();
    let revenue = book.sell_price(resolver.resolve(&recipe.product));

    let profit_per_unit = revenue - unit_cost;
    let crafts = crafts_per_hour(recipe.craft_time_seconds);

    ProfitResult {
        name: recipe.name.clone(),
        unit_cost,
        profit_per_unit,
        crafts_per_hour: crafts,
        profit_per_hour: profit_per_unit * crafts,
        xp_per_hour: recipe.experience * crafts,
    }
}

/// Margin from buying the raw item and selling the processed one.
pub fn processing_profit(raw: PriceQuote, processed: PriceQuote) -> f64 {
    processed.sell_price - raw.buy_price
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use super::*;
    use crate::domain::entities::MarketItem;

    fn listed(name: &str, low: f64, high: f64) -> MarketItem {
        MarketItem {
            name: name.to_string(),
            item_id: None,
            lowest_price: Some(low),
            highest_price: Some(high),
            average_price: None,
        }
    }

    fn book(items: Vec<MarketItem>) -> PriceBook {
        PriceBook::from_items(items, OffsetDateTime::UNIX_EPOCH)
    }

    #[test]
    fn crafts_per_hour_floors_partial_cycles() {
        assert_eq!(crafts_per_hour(12.0), 300.0);
        assert_eq!(crafts_per_hour(25.2), 142.0);
        assert_eq!(crafts_per_hour(55.0), 65.0);
    }

    #[test]
    fn crafts_per_hour_guards_invalid_times() {
        assert_eq!(crafts_per_hour(0.0), 0.0);
        assert_eq!(crafts_per_hour(-4.0), 0.0);
        assert_eq!(crafts_per_hour(f64::NAN), 0.0);
    }

    #[test]
    fn profit_per_unit_subtracts_ingredient_costs() {
        let recipe = Recipe::new("Widget", "Widget", 0.0, 60.0)
            .ingredient("Bolt", 1)
            .ingredient("Plate", 1);
        let book = book(vec![
            listed("Widget", 0.0, 100.0),
            listed("Bolt", 10.0, 0.0),
            listed("Plate", 20.0, 0.0),
        ]);

        let result = evaluate_recipe(&recipe, &book, &NameResolver::identity());
        assert_eq!(result.profit_per_unit, 70.0);
        assert_eq!(result.crafts_per_hour, 60.0);
        assert_eq!(result.profit_per_hour, 4200.0);
    }

    #[test]
    fn missing_prices_contribute_zero() {
        let recipe = Recipe::new("Mystery", "Unknown product", 5.0, 10.0)
            .ingredient("Unknown ingredient", 3)
            .ingredient("Bolt", 1);
        let book = book(vec![listed("Bolt", 4.0, 0.0)]);

        let result = evaluate_recipe(&recipe, &book, &NameResolver::identity());
        assert_eq!(result.unit_cost, 4.0);
        assert_eq!(result.profit_per_unit, -4.0);
        assert_eq!(result.xp_per_hour, 5.0 * 360.0);
    }

    #[test]
    fn zero_craft_time_yields_zero_rates() {
        let recipe = Recipe::new("Stalled", "Widget", 10.0, 0.0);
        let book = book(vec![listed("Widget", 0.0, 50.0)]);

        let result = evaluate_recipe(&recipe, &book, &NameResolver::identity());
        assert_eq!(result.profit_per_unit, 50.0);
        assert_eq!(result.profit_per_hour, 0.0);
        assert_eq!(result.xp_per_hour, 0.0);
    }

    #[test]
    fn tomato_soup_scenario_through_name_aliases() {
        let recipe = Recipe::new("Sopa de Tomate", "Sopa de Tomate", 10.0, 55.0)
            .ingredient("Tomate", 10)
            .ingredient("Urtiga", 5)
            .ingredient("Tronco de Pinho", 2);
        let book = book(vec![
            listed("Tomato", 5.0, 4.0),
            listed("Nettle", 3.0, 2.0),
            listed("Pine log", 4.0, 3.0),
            listed("Tomato soup", 950.0, 900.0),
        ]);

        let result = evaluate_recipe(&recipe, &book, &NameResolver::default());
        assert_eq!(result.unit_cost, 73.0);
        assert_eq!(result.profit_per_unit, 827.0);
        assert_eq!(result.crafts_per_hour, 65.0);
        assert_eq!(result.profit_per_hour, 53755.0);
        assert_eq!(result.xp_per_hour, 650.0);
    }

    #[test]
    fn evaluate_recipes_keeps_input_order() {
        let recipes = vec![
            Recipe::new("First", "A", 0.0, 10.0),
            Recipe::new("Second", "B", 0.0, 10.0),
        ];
        let book = book(vec![listed("A", 0.0, 1.0), listed("B", 0.0, 99.0)]);

        let names: Vec<_> = evaluate_recipes(&recipes, &book, &NameResolver::identity())
            .into_iter()
            .map(|result| result.name)
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn processing_profit_uses_raw_ask_and_processed_bid() {
        let raw = PriceQuote {
            buy_price: 12.0,
            sell_price: 9.0,
        };
        let processed = PriceQuote {
            buy_price: 40.0,
            sell_price: 30.0,
        };
        assert_eq!(processing_profit(raw, processed), 18.0);
    }
}
