// src/infrastructure/tiktok/mod.rs
// TikTok Shop fee policy

use rust_decimal::Decimal;

use crate::domain::models::{FeeBreakdown, NormalizedTikTokInput, Platform, TikTokInput};
use crate::domain::schedule::FeeSchedule;
use crate::domain::service::formulas::normalize_sale;
use crate::domain::service::PlatformCalculator;

#[derive(Debug, Clone, Copy, Default)]
pub struct TikTokCalculator;

impl TikTokCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl PlatformCalculator for TikTokCalculator {
    type Input = TikTokInput;
    type Normalized = NormalizedTikTokInput;

    fn platform(&self) -> Platform {
        Platform::TikTok
    }

    fn normalize(&self, input: &TikTokInput, schedule: &FeeSchedule) -> NormalizedTikTokInput {
        let defaults = &schedule.defaults;
        NormalizedTikTokInput {
            sale: normalize_sale(&input.sale, defaults),
            category: input
                .category
                .clone()
                .unwrap_or_else(|| defaults.tiktok_category.clone()),
            include_freeship: input.include_freeship.unwrap_or(defaults.include_freeship),
        }
    }

    fn fee_breakdown(
        &self,
        revenue: Decimal,
        input: &NormalizedTikTokInput,
        schedule: &FeeSchedule,
    ) -> FeeBreakdown {
        let fees = &schedule.tiktok;

        // TikTok has no infrastructure, logistics, Xtra or co-funding policy,
        // and include_freeship does not change any fee.
        FeeBreakdown {
            payment: revenue * fees.transaction_rate,
            commission: revenue * fees.commission.rate_for(&input.category),
            ..FeeBreakdown::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::SaleInput;
    use rust_decimal_macros::dec;

    fn breakdown(input: &TikTokInput, revenue: Decimal) -> FeeBreakdown {
        let schedule = FeeSchedule::default();
        let calculator = TikTokCalculator::new();
        let normalized = calculator.normalize(input, &schedule);
        calculator.fee_breakdown(revenue, &normalized, &schedule)
    }

    fn base_input() -> TikTokInput {
        TikTokInput::new(SaleInput::new(dec!(100000), dec!(50000)))
    }

    #[test]
    fn normalize_applies_tiktok_defaults() {
        let normalized = TikTokCalculator::new().normalize(&base_input(), &FeeSchedule::default());
        assert_eq!(normalized.category, "other");
        assert!(normalized.include_freeship);
        assert_eq!(normalized.sale.quantity, 1);
    }

    #[test]
    fn default_category_fees() {
        let fees = breakdown(&base_input(), dec!(100000));

        assert_eq!(fees.payment, dec!(3000));
        assert_eq!(fees.commission, dec!(3000));
        assert_eq!(fees.total(), dec!(6000));
    }

    #[test]
    fn known_category_rate() {
        let mut input = base_input();
        input.category = Some("beauty".to_string());
        assert_eq!(breakdown(&input, dec!(100000)).commission, dec!(4000));
    }

    #[test]
    fn shopee_only_slots_stay_zero() {
        let fees = breakdown(&base_input(), dec!(100000));

        assert_eq!(fees.infrastructure, Decimal::ZERO);
        assert_eq!(fees.piship, Decimal::ZERO);
        assert_eq!(fees.voucher_xtra, Decimal::ZERO);
        assert_eq!(fees.content_xtra, Decimal::ZERO);
        assert_eq!(fees.co_funding, Decimal::ZERO);
        assert_eq!(fees.cod, Decimal::ZERO);
    }

    #[test]
    fn freeship_toggle_has_no_fee_effect() {
        let mut with_freeship = base_input();
        with_freeship.include_freeship = Some(true);
        let mut without_freeship = base_input();
        without_freeship.include_freeship = Some(false);

        assert_eq!(
            breakdown(&with_freeship, dec!(100000)),
            breakdown(&without_freeship, dec!(100000))
        );
    }
}
