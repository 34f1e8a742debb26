// src/infrastructure/shopee/mod.rs
// Shopee fee policy, 29/12/2025 structure

use rust_decimal::Decimal;

use crate::domain::models::{
    FeeBreakdown, NormalizedShopeeInput, OrderSource, Platform, ShopTier, ShopeeInput,
};
use crate::domain::schedule::{FeeSchedule, ShopeeFees};
use crate::domain::service::formulas::normalize_sale;
use crate::domain::service::PlatformCalculator;

#[derive(Debug, Clone, Copy, Default)]
pub struct ShopeeCalculator;

impl ShopeeCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl PlatformCalculator for ShopeeCalculator {
    type Input = ShopeeInput;
    type Normalized = NormalizedShopeeInput;

    fn platform(&self) -> Platform {
        Platform::Shopee
    }

    fn normalize(&self, input: &ShopeeInput, schedule: &FeeSchedule) -> NormalizedShopeeInput {
        let defaults = &schedule.defaults;
        NormalizedShopeeInput {
            sale: normalize_sale(&input.sale, defaults),
            shop_tier: input.shop_tier.unwrap_or(defaults.shop_tier),
            category: input
                .category
                .clone()
                .unwrap_or_else(|| defaults.shopee_category.clone()),
            order_source: input.order_source.unwrap_or(defaults.order_source),
            include_piship: input.include_piship.unwrap_or(defaults.include_piship),
            include_voucher_xtra: input
                .include_voucher_xtra
                .unwrap_or(defaults.include_voucher_xtra),
            include_content_xtra: input
                .include_content_xtra
                .unwrap_or(defaults.include_content_xtra),
            shopee_voucher_amount: input
                .shopee_voucher_amount
                .unwrap_or(defaults.shopee_voucher_amount),
        }
    }

    fn fee_breakdown(
        &self,
        revenue: Decimal,
        input: &NormalizedShopeeInput,
        schedule: &FeeSchedule,
    ) -> FeeBreakdown {
        let fees = &schedule.shopee;

        FeeBreakdown {
            payment: revenue * fees.payment_rate,
            commission: commission_fee(fees, revenue, input.shop_tier, &input.category),
            infrastructure: fees.infrastructure_fee,
            piship: piship_fee(fees, input.include_piship),
            voucher_xtra: voucher_xtra_fee(fees, revenue, input.include_voucher_xtra),
            content_xtra: content_xtra_fee(
                fees,
                revenue,
                input.include_content_xtra,
                input.order_source,
                input.shop_tier,
            ),
            co_funding: co_funding_fee(
                fees,
                input.shopee_voucher_amount,
                input.include_voucher_xtra,
            ),
            // Shopee no longer bills cash-on-delivery separately
            cod: Decimal::ZERO,
        }
    }
}

fn commission_fee(fees: &ShopeeFees, revenue: Decimal, tier: ShopTier, category: &str) -> Decimal {
    revenue * fees.commission.table(tier).rate_for(category)
}

fn piship_fee(fees: &ShopeeFees, include_piship: bool) -> Decimal {
    if include_piship {
        fees.piship_fee
    } else {
        Decimal::ZERO
    }
}

fn voucher_xtra_fee(fees: &ShopeeFees, revenue: Decimal, include_voucher_xtra: bool) -> Decimal {
    if include_voucher_xtra {
        fees.voucher_xtra.apply(revenue)
    } else {
        Decimal::ZERO
    }
}

/// Only livestream/video orders of an enrolled shop pay Content Xtra.
fn content_xtra_fee(
    fees: &ShopeeFees,
    revenue: Decimal,
    include_content_xtra: bool,
    order_source: OrderSource,
    tier: ShopTier,
) -> Decimal {
    if !include_content_xtra || order_source != OrderSource::LiveVideo {
        return Decimal::ZERO;
    }
    fees.content_xtra.apply(revenue, tier)
}

/// Voucher Xtra members are exempt from co-funding whatever voucher was used.
fn co_funding_fee(fees: &ShopeeFees, voucher_amount: Decimal, include_voucher_xtra: bool) -> Decimal {
    if include_voucher_xtra || voucher_amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    fees.co_funding.apply(voucher_amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::SaleInput;
    use rust_decimal_macros::dec;

    fn breakdown(input: &ShopeeInput, revenue: Decimal) -> FeeBreakdown {
        let schedule = FeeSchedule::default();
        let calculator = ShopeeCalculator::new();
        let normalized = calculator.normalize(input, &schedule);
        calculator.fee_breakdown(revenue, &normalized, &schedule)
    }

    fn base_input() -> ShopeeInput {
        ShopeeInput::new(SaleInput::new(dec!(150000), dec!(80000)))
    }

    #[test]
    fn normalize_applies_shopee_defaults() {
        let schedule = FeeSchedule::default();
        let normalized = ShopeeCalculator::new().normalize(&base_input(), &schedule);

        assert_eq!(normalized.shop_tier, ShopTier::Normal);
        assert_eq!(normalized.category, "default");
        assert_eq!(normalized.order_source, OrderSource::Normal);
        assert!(normalized.include_piship);
        assert!(!normalized.include_voucher_xtra);
        assert!(!normalized.include_content_xtra);
        assert_eq!(normalized.shopee_voucher_amount, Decimal::ZERO);
        assert_eq!(normalized.sale.packaging_cost, dec!(3000));
    }

    #[test]
    fn default_order_fees() {
        let fees = breakdown(&base_input(), dec!(150000));

        assert_eq!(fees.payment, dec!(7500));
        assert_eq!(fees.commission, dec!(16500));
        assert_eq!(fees.infrastructure, dec!(3000));
        assert_eq!(fees.piship, dec!(1650));
        assert_eq!(fees.voucher_xtra, Decimal::ZERO);
        assert_eq!(fees.content_xtra, Decimal::ZERO);
        assert_eq!(fees.co_funding, Decimal::ZERO);
        assert_eq!(fees.cod, Decimal::ZERO);
        assert_eq!(fees.total(), dec!(28650));
    }

    #[test]
    fn commission_uses_tier_and_category() {
        let mut input = base_input();
        input.shop_tier = Some(ShopTier::Mall);
        input.category = Some("laptop_pc".to_string());
        assert_eq!(breakdown(&input, dec!(200000)).commission, dec!(5000));

        input.category = Some("unlisted".to_string());
        assert_eq!(breakdown(&input, dec!(200000)).commission, dec!(20000));
    }

    #[test]
    fn piship_is_optional() {
        let mut input = base_input();
        input.include_piship = Some(false);
        assert_eq!(breakdown(&input, dec!(150000)).piship, Decimal::ZERO);
    }

    #[test]
    fn voucher_xtra_is_capped() {
        let mut input = base_input();
        input.include_voucher_xtra = Some(true);

        assert_eq!(breakdown(&input, dec!(150000)).voucher_xtra, dec!(3000));
        assert_eq!(breakdown(&input, dec!(3000000)).voucher_xtra, dec!(50000));
    }

    #[test]
    fn content_xtra_requires_live_video_order() {
        let mut input = base_input();
        input.include_content_xtra = Some(true);
        assert_eq!(breakdown(&input, dec!(150000)).content_xtra, Decimal::ZERO);

        input.order_source = Some(OrderSource::LiveVideo);
        assert_eq!(breakdown(&input, dec!(150000)).content_xtra, dec!(4500));

        input.include_content_xtra = Some(false);
        assert_eq!(breakdown(&input, dec!(150000)).content_xtra, Decimal::ZERO);
    }

    #[test]
    fn content_xtra_cap_applies_to_mall_only() {
        let mut input = base_input();
        input.include_content_xtra = Some(true);
        input.order_source = Some(OrderSource::LiveVideo);

        assert_eq!(breakdown(&input, dec!(3000000)).content_xtra, dec!(90000));

        input.shop_tier = Some(ShopTier::Mall);
        assert_eq!(breakdown(&input, dec!(3000000)).content_xtra, dec!(50000));
    }

    #[test]
    fn co_funding_is_capped_percentage_of_voucher() {
        let mut input = base_input();
        input.shopee_voucher_amount = Some(dec!(30000));
        assert_eq!(breakdown(&input, dec!(150000)).co_funding, dec!(6000));

        input.shopee_voucher_amount = Some(dec!(400000));
        assert_eq!(breakdown(&input, dec!(150000)).co_funding, dec!(50000));
    }

    #[test]
    fn voucher_xtra_disables_co_funding() {
        let mut input = base_input();
        input.shopee_voucher_amount = Some(dec!(30000));
        input.include_voucher_xtra = Some(true);

        let fees = breakdown(&input, dec!(150000));
        assert_eq!(fees.co_funding, Decimal::ZERO);
        assert_eq!(fees.voucher_xtra, dec!(3000));
    }

    #[test]
    fn fixed_fees_survive_zero_revenue() {
        let mut input = base_input();
        input.include_voucher_xtra = Some(true);
        input.include_content_xtra = Some(true);
        input.order_source = Some(OrderSource::LiveVideo);

        let fees = breakdown(&input, Decimal::ZERO);
        assert_eq!(fees.payment, Decimal::ZERO);
        assert_eq!(fees.commission, Decimal::ZERO);
        assert_eq!(fees.voucher_xtra, Decimal::ZERO);
        assert_eq!(fees.content_xtra, Decimal::ZERO);
        assert_eq!(fees.infrastructure, dec!(3000));
        assert_eq!(fees.piship, dec!(1650));
    }
}
