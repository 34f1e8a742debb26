// src/infrastructure/mod.rs
// Per-platform fee policies

pub mod shopee;
pub mod tiktok;

pub use shopee::ShopeeCalculator;
pub use tiktok::TikTokCalculator;
