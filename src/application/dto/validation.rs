// src/application/dto/validation.rs
// Upstream range checks; the calculator never runs these itself

use rust_decimal::Decimal;

use crate::domain::errors::{ValidationError, ValidationResult};
use crate::domain::models::PlatformInput;
use crate::domain::schedule::Limits;

fn check_range(field: &'static str, value: Decimal, min: Decimal, max: Decimal) -> ValidationResult<()> {
    if value < min {
        return Err(ValidationError::BelowMinimum { field, min, value });
    }
    if value > max {
        return Err(ValidationError::AboveMaximum { field, max, value });
    }
    Ok(())
}

fn check_min(field: &'static str, value: Option<Decimal>, min: Decimal) -> ValidationResult<()> {
    match value {
        Some(value) if value < min => Err(ValidationError::BelowMinimum { field, min, value }),
        _ => Ok(()),
    }
}

fn check_optional_range(
    field: &'static str,
    value: Option<Decimal>,
    min: Decimal,
    max: Decimal,
) -> ValidationResult<()> {
    match value {
        Some(value) => check_range(field, value, min, max),
        None => Ok(()),
    }
}

/// Reject inputs outside the limits the calculator form enforces.
///
/// Absent optional fields are not checked; their defaults are always valid.
pub fn validate(input: &PlatformInput, limits: &Limits) -> ValidationResult<()> {
    let sale = input.sale();
    let zero = Decimal::ZERO;

    check_range("sellingPrice", sale.selling_price, limits.min_price, limits.max_price)?;
    check_range("costPrice", sale.cost_price, zero, limits.max_price)?;
    check_min("voucherShop", sale.voucher_shop, zero)?;
    check_optional_range("packagingCost", sale.packaging_cost, zero, limits.max_packaging)?;
    check_optional_range("shippingCost", sale.shipping_cost, zero, limits.max_shipping)?;
    check_min("adsCost", sale.ads_cost, zero)?;

    if let Some(quantity) = sale.quantity {
        check_range(
            "quantity",
            Decimal::from(quantity),
            Decimal::from(limits.min_quantity),
            Decimal::from(limits.max_quantity),
        )?;
    }

    if let Some(voucher) = sale.voucher_shop {
        if voucher > sale.selling_price {
            return Err(ValidationError::VoucherExceedsPrice {
                voucher,
                price: sale.selling_price,
            });
        }
    }

    if let PlatformInput::Shopee(shopee) = input {
        check_optional_range(
            "shopeeVoucherAmount",
            shopee.shopee_voucher_amount,
            zero,
            limits.max_shopee_voucher,
        )?;
    }

    Ok(())
}
