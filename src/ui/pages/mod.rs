pub mod lookup;
pub mod profit_table;

pub use lookup::LookupPage;
pub use profit_table::ProfitTablePage;
