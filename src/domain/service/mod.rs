// src/domain/service/mod.rs
// Domain service interfaces

pub mod formulas;

use rust_decimal::Decimal;

use crate::domain::models::{FeeBreakdown, NormalizedSale, Platform};
use crate::domain::schedule::FeeSchedule;

/// Per-platform half of a profit calculation.
///
/// Implementors only normalize their own input shape and price their own
/// fees; revenue, tax, operating cost and the final figures are shared by
/// every platform (see `application::usecase::ProfitAggregator`).
pub trait PlatformCalculator: Send + Sync {
    /// Caller-facing input with optional fields
    type Input;

    /// Input with every optional field defaulted
    type Normalized: AsRef<NormalizedSale>;

    /// Platform this calculator prices
    fn platform(&self) -> Platform;

    /// Fill every absent field with the platform default
    fn normalize(&self, input: &Self::Input, schedule: &FeeSchedule) -> Self::Normalized;

    /// Price the platform fees for one order
    fn fee_breakdown(
        &self,
        revenue: Decimal,
        input: &Self::Normalized,
        schedule: &FeeSchedule,
    ) -> FeeBreakdown;
}
