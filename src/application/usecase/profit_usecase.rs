// src/application/usecase/profit_usecase.rs
// Shared profit calculation sequence

use std::sync::Arc;

use crate::domain::models::{CalculatorResult, NormalizedSale};
use crate::domain::schedule::FeeSchedule;
use crate::domain::service::formulas;
use crate::domain::service::PlatformCalculator;

/// Runs the fixed calculation sequence for any platform.
///
/// Only the fee breakdown step differs between platforms; normalization
/// and fee pricing are delegated to the [`PlatformCalculator`], everything
/// else is computed here the same way for every marketplace.
#[derive(Debug, Clone)]
pub struct ProfitAggregator {
    schedule: Arc<FeeSchedule>,
}

impl ProfitAggregator {
    pub fn new(schedule: Arc<FeeSchedule>) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    pub fn calculate<C: PlatformCalculator>(&self, calculator: &C, input: &C::Input) -> CalculatorResult {
        let schedule = self.schedule.as_ref();

        // 1. Normalize input with platform defaults
        let normalized = calculator.normalize(input, schedule);
        let sale: &NormalizedSale = normalized.as_ref();

        // 2. Revenue after shop voucher
        let revenue = formulas::revenue(sale);

        // 3. Platform fees
        let fee_breakdown = calculator.fee_breakdown(revenue, &normalized, schedule);
        let total_platform_fee = fee_breakdown.total();

        // 4. Tax and operating cost
        let tax_amount = formulas::tax(revenue, sale.include_tax, &schedule.tax);
        let total_operating_cost = formulas::operating_cost(sale);

        // 5. Final figures
        let net_profit = revenue - total_platform_fee - tax_amount - total_operating_cost;
        let profit_margin = formulas::profit_margin(net_profit, revenue);
        let profit_per_unit = formulas::profit_per_unit(net_profit, sale.quantity);

        log::debug!(
            "{} ({}): revenue={} fees={} tax={} costs={} net={}",
            calculator.platform(),
            schedule.version,
            revenue,
            total_platform_fee,
            tax_amount,
            total_operating_cost,
            net_profit
        );

        CalculatorResult {
            revenue,
            total_platform_fee,
            fee_breakdown,
            tax_amount,
            total_operating_cost,
            net_profit,
            profit_margin,
            profit_per_unit,
        }
    }
}
