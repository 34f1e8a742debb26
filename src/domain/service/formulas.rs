// src/domain/service/formulas.rs
// Platform-independent pieces of the profit calculation

use rust_decimal::Decimal;

use crate::domain::models::{NormalizedSale, SaleInput};
use crate::domain::schedule::{InputDefaults, TaxPolicy};

/// Default the fields every platform input shares
pub fn normalize_sale(input: &SaleInput, defaults: &InputDefaults) -> NormalizedSale {
    NormalizedSale {
        selling_price: input.selling_price,
        cost_price: input.cost_price,
        voucher_shop: input.voucher_shop.unwrap_or(defaults.voucher_shop),
        packaging_cost: input.packaging_cost.unwrap_or(defaults.packaging_cost),
        shipping_cost: input.shipping_cost.unwrap_or(defaults.shipping_cost),
        ads_cost: input.ads_cost.unwrap_or(defaults.ads_cost),
        quantity: input.quantity.unwrap_or(defaults.quantity),
        include_tax: input.include_tax.unwrap_or(defaults.include_tax),
    }
}

/// Net revenue after the shop-funded voucher, never below zero
pub fn revenue(sale: &NormalizedSale) -> Decimal {
    (sale.selling_price - sale.voucher_shop).max(Decimal::ZERO)
}

pub fn tax(revenue: Decimal, include_tax: bool, policy: &TaxPolicy) -> Decimal {
    if include_tax {
        revenue * policy.rate
    } else {
        Decimal::ZERO
    }
}

pub fn operating_cost(sale: &NormalizedSale) -> Decimal {
    sale.cost_price + sale.packaging_cost + sale.shipping_cost + sale.ads_cost
}

/// Zero when there is no revenue to divide by
pub fn profit_margin(net_profit: Decimal, revenue: Decimal) -> Decimal {
    if revenue <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        net_profit / revenue
    }
}

/// Zero when quantity is not positive
pub fn profit_per_unit(net_profit: Decimal, quantity: i64) -> Decimal {
    if quantity <= 0 {
        Decimal::ZERO
    } else {
        net_profit / Decimal::from(quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schedule::FeeSchedule;
    use rust_decimal_macros::dec;

    fn sale(selling_price: Decimal, voucher_shop: Decimal) -> NormalizedSale {
        let mut input = SaleInput::new(selling_price, dec!(50000));
        input.voucher_shop = Some(voucher_shop);
        normalize_sale(&input, &FeeSchedule::default().defaults)
    }

    #[test]
    fn normalize_fills_shared_defaults() {
        let input = SaleInput::new(dec!(100000), dec!(50000));
        let normalized = normalize_sale(&input, &FeeSchedule::default().defaults);

        assert_eq!(normalized.voucher_shop, Decimal::ZERO);
        assert_eq!(normalized.packaging_cost, dec!(3000));
        assert_eq!(normalized.shipping_cost, Decimal::ZERO);
        assert_eq!(normalized.ads_cost, Decimal::ZERO);
        assert_eq!(normalized.quantity, 1);
        assert!(normalized.include_tax);
    }

    #[test]
    fn normalize_keeps_supplied_values() {
        let mut input = SaleInput::new(dec!(100000), dec!(50000));
        input.packaging_cost = Some(Decimal::ZERO);
        input.quantity = Some(4);
        input.include_tax = Some(false);
        let normalized = normalize_sale(&input, &FeeSchedule::default().defaults);

        assert_eq!(normalized.packaging_cost, Decimal::ZERO);
        assert_eq!(normalized.quantity, 4);
        assert!(!normalized.include_tax);
    }

    #[test]
    fn revenue_is_clamped_at_zero() {
        assert_eq!(revenue(&sale(dec!(150000), dec!(10000))), dec!(140000));
        assert_eq!(revenue(&sale(dec!(10000), dec!(20000))), Decimal::ZERO);
    }

    #[test]
    fn tax_respects_toggle() {
        let policy = FeeSchedule::default().tax;
        assert_eq!(tax(dec!(100000), true, &policy), dec!(1500));
        assert_eq!(tax(dec!(100000), false, &policy), Decimal::ZERO);
    }

    #[test]
    fn operating_cost_sums_every_cost() {
        let mut input = SaleInput::new(dec!(100000), dec!(50000));
        input.packaging_cost = Some(dec!(2000));
        input.shipping_cost = Some(dec!(15000));
        input.ads_cost = Some(dec!(5000));
        let normalized = normalize_sale(&input, &FeeSchedule::default().defaults);

        assert_eq!(operating_cost(&normalized), dec!(72000));
    }

    #[test]
    fn degenerate_denominators_yield_zero() {
        assert_eq!(profit_margin(dec!(-5000), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(profit_per_unit(dec!(36000), 0), Decimal::ZERO);
        assert_eq!(profit_per_unit(dec!(36000), -2), Decimal::ZERO);
        assert_eq!(profit_per_unit(dec!(36000), 3), dec!(12000));
    }
}
