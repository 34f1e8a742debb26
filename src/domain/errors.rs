// src/domain/errors.rs
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Calculator error: {0}")]
    Calculator(#[from] CalculatorError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The only failure the fee engine itself raises.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),
}

/// Range and consistency checks performed upstream of the engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be at least {min}, got {value}")]
    BelowMinimum {
        field: &'static str,
        min: Decimal,
        value: Decimal,
    },

    #[error("{field} must be at most {max}, got {value}")]
    AboveMaximum {
        field: &'static str,
        max: Decimal,
        value: Decimal,
    },

    #[error("Shop voucher ({voucher}) cannot exceed selling price ({price})")]
    VoucherExceedsPrice { voucher: Decimal, price: Decimal },
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
pub type CalculatorResultOf<T> = Result<T, CalculatorError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
