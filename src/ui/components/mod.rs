pub mod lookup_result;
pub mod profit_table;
pub mod status;

pub use lookup_result::LookupResultCard;
pub use profit_table::ProfitTable;
pub use status::{ErrorMessage, LoadingIndicator};
