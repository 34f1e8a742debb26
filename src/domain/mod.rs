// src/domain/mod.rs
pub mod errors;
pub mod models;
pub mod schedule;
pub mod service;

// Re-export common types for convenience
pub use errors::{AppError, AppResult, CalculatorError, ValidationError};
pub use models::{
    CalculatorResult, FeeBreakdown, NormalizedSale, NormalizedShopeeInput, NormalizedTikTokInput,
    OrderSource, Platform, PlatformInput, SaleInput, ShopTier, ShopeeInput, TikTokInput,
};
pub use schedule::FeeSchedule;
