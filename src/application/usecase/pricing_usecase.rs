// src/application/usecase/pricing_usecase.rs
// Reverse calculation: selling price for a target margin

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::application::service::CalculatorRegistry;
use crate::domain::errors::CalculatorResultOf;
use crate::domain::models::{CalculatorResult, PlatformInput};

/// Selling price found by the solver and the calculation at that price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    pub selling_price: Decimal,
    pub result: CalculatorResult,
}

/// Searches the schedule's price range for the cheapest whole-unit price
/// reaching a profit margin.
///
/// The search starts above the shop voucher: below it revenue is clamped to
/// zero and the margin reads zero whatever the loss. Past that point margin
/// grows with price for every policy in the schedule (fixed fees and costs
/// are amortized, caps only lower the effective rate), so a bisection over
/// the forward calculator is enough.
pub struct PriceSolver<'a> {
    registry: &'a CalculatorRegistry,
}

impl<'a> PriceSolver<'a> {
    pub fn new(registry: &'a CalculatorRegistry) -> Self {
        Self { registry }
    }

    /// Lowest price with positive revenue and `net_profit >= target_margin * revenue`,
    /// or `None` when even the maximum price falls short.
    pub fn price_for_margin(
        &self,
        input: &PlatformInput,
        target_margin: Decimal,
    ) -> CalculatorResultOf<Option<PriceQuote>> {
        let schedule = self.registry.schedule();
        let limits = schedule.limits;
        let voucher = input
            .sale()
            .voucher_shop
            .unwrap_or(schedule.defaults.voucher_shop);

        let mut low = limits.min_price.max(voucher.floor() + Decimal::ONE);
        let mut high = limits.max_price;
        if low > high {
            log::debug!("Voucher {} leaves no price with revenue", voucher);
            return Ok(None);
        }

        let at_high = self.quote(input, high)?;
        if !reaches(&at_high, target_margin) {
            log::debug!(
                "Target margin {} unreachable below {} on {}",
                target_margin,
                high,
                input.platform()
            );
            return Ok(None);
        }

        let at_low = self.quote(input, low)?;
        if reaches(&at_low, target_margin) {
            return Ok(Some(at_low));
        }

        // Invariant: !reaches(low) && reaches(high)
        let mut best = at_high;
        while high - low > Decimal::ONE {
            let mid = ((low + high) / dec!(2)).floor();
            let quote = self.quote(input, mid)?;
            if reaches(&quote, target_margin) {
                high = mid;
                best = quote;
            } else {
                low = mid;
            }
        }

        Ok(Some(best))
    }

    /// Lowest price with a non-negative net profit
    pub fn break_even(&self, input: &PlatformInput) -> CalculatorResultOf<Option<PriceQuote>> {
        self.price_for_margin(input, Decimal::ZERO)
    }

    fn quote(&self, input: &PlatformInput, selling_price: Decimal) -> CalculatorResultOf<PriceQuote> {
        let result = self
            .registry
            .calculate(&input.with_selling_price(selling_price))?;
        Ok(PriceQuote {
            selling_price,
            result,
        })
    }
}

fn reaches(quote: &PriceQuote, target_margin: Decimal) -> bool {
    let result = &quote.result;
    result.revenue > Decimal::ZERO && result.net_profit >= target_margin * result.revenue
}
