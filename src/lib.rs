// src/lib.rs
// Main library module declarations

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{calculate_profit, supported_platforms, CalculatorRegistry, PriceSolver};
pub use domain::{AppError, AppResult, CalculatorError, CalculatorResult, FeeSchedule, PlatformInput};
