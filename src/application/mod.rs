// src/application/mod.rs
pub mod dto;
pub mod service;
pub mod usecase;

pub use service::{calculate_profit, supported_platforms, CalculatorRegistry};
pub use usecase::{PriceQuote, PriceSolver, ProfitAggregator};
