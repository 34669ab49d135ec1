//! Pricing and profit logic. Nothing in here performs I/O.

pub mod app_state;
pub mod entities;
pub mod evaluation;
pub mod names;
pub mod price_book;
pub mod recipes;
pub mod table;

#[allow(unused_imports)]
pub use app_state::{ItemIndex, LookupForm};
#[allow(unused_imports)]
pub use entities::{
    ItemId, LookupReport, LookupSide, MarketItem, PriceQuote, ProfitResult, Recipe, RecipeError,
};
#[allow(unused_imports)]
pub use evaluation::{crafts_per_hour, evaluate_recipe, evaluate_recipes, processing_profit};
#[allow(unused_imports)]
pub use names::NameResolver;
#[allow(unused_imports)]
pub use price_book::PriceBook;
#[allow(unused_imports)]
pub use recipes::default_recipes;
#[allow(unused_imports)]
pub use table::{
    error_rows, format_amount, loading_rows, render_profit_table, PlaceholderKind, ProfitRow,
    TableRow, PROFIT_TABLE_COLUMNS,
};
