pub mod pricing_usecase;
pub mod profit_usecase;

// Re-export public API
pub use pricing_usecase::{PriceQuote, PriceSolver};
pub use profit_usecase::ProfitAggregator;
