// src/application/dto/mod.rs
// Request shape accepted at the JSON boundary

pub mod parser;
pub mod validation;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::errors::CalculatorError;
use crate::domain::models::{
    OrderSource, Platform, PlatformInput, SaleInput, ShopTier, ShopeeInput, TikTokInput,
};

pub use parser::{parse_input, parse_request};
pub use validation::validate;

/// Loosely-typed calculator request.
///
/// Tags arrive as plain strings so an unknown marketplace can be reported as
/// [`CalculatorError::UnsupportedPlatform`] instead of a parse failure, and an
/// unknown tier or order source can fall back to the platform default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorRequest {
    pub platform: String,
    pub selling_price: Decimal,
    pub cost_price: Decimal,
    #[serde(default)]
    pub voucher_shop: Option<Decimal>,
    #[serde(default)]
    pub packaging_cost: Option<Decimal>,
    #[serde(default)]
    pub shipping_cost: Option<Decimal>,
    #[serde(default)]
    pub ads_cost: Option<Decimal>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub include_tax: Option<bool>,

    // Shopee
    #[serde(default, alias = "shopType")]
    pub shop_tier: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub order_source: Option<String>,
    #[serde(default)]
    pub include_pi_ship: Option<bool>,
    #[serde(default)]
    pub include_voucher_xtra: Option<bool>,
    #[serde(default)]
    pub include_content_xtra: Option<bool>,
    #[serde(default)]
    pub shopee_voucher_amount: Option<Decimal>,

    // TikTok
    #[serde(default)]
    pub include_freeship: Option<bool>,
}

impl CalculatorRequest {
    pub fn into_input(self) -> Result<PlatformInput, CalculatorError> {
        let platform: Platform = self.platform.parse()?;

        let sale = SaleInput {
            selling_price: self.selling_price,
            cost_price: self.cost_price,
            voucher_shop: self.voucher_shop,
            packaging_cost: self.packaging_cost,
            shipping_cost: self.shipping_cost,
            ads_cost: self.ads_cost,
            quantity: self.quantity,
            include_tax: self.include_tax,
        };

        let input = match platform {
            Platform::Shopee => PlatformInput::Shopee(ShopeeInput {
                sale,
                shop_tier: self.shop_tier.as_deref().and_then(|code| {
                    let tier = ShopTier::from_code(code);
                    if tier.is_none() {
                        log::warn!("Unknown shop tier '{}', using default", code);
                    }
                    tier
                }),
                category: self.category,
                order_source: self.order_source.as_deref().and_then(|code| {
                    let source = OrderSource::from_code(code);
                    if source.is_none() {
                        log::warn!("Unknown order source '{}', using default", code);
                    }
                    source
                }),
                include_piship: self.include_pi_ship,
                include_voucher_xtra: self.include_voucher_xtra,
                include_content_xtra: self.include_content_xtra,
                shopee_voucher_amount: self.shopee_voucher_amount,
            }),
            Platform::TikTok => PlatformInput::TikTok(TikTokInput {
                sale,
                category: self.category,
                include_freeship: self.include_freeship,
            }),
        };

        Ok(input)
    }
}

impl TryFrom<CalculatorRequest> for PlatformInput {
    type Error = CalculatorError;

    fn try_from(request: CalculatorRequest) -> Result<Self, Self::Error> {
        request.into_input()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request(platform: &str) -> CalculatorRequest {
        CalculatorRequest {
            platform: platform.to_string(),
            selling_price: dec!(150000),
            cost_price: dec!(80000),
            voucher_shop: None,
            packaging_cost: None,
            shipping_cost: None,
            ads_cost: None,
            quantity: None,
            include_tax: None,
            shop_tier: None,
            category: None,
            order_source: None,
            include_pi_ship: None,
            include_voucher_xtra: None,
            include_content_xtra: None,
            shopee_voucher_amount: None,
            include_freeship: None,
        }
    }

    #[test]
    fn unknown_platform_is_unsupported() {
        let err = request("lazada").into_input().expect_err("lazada");
        assert_eq!(err, CalculatorError::UnsupportedPlatform("lazada".to_string()));
    }

    #[test]
    fn unknown_tier_falls_back_to_default() {
        let mut req = request("shopee");
        req.shop_tier = Some("preferred".to_string());
        req.order_source = Some("live_video".to_string());

        match req.into_input().expect("shopee") {
            PlatformInput::Shopee(input) => {
                assert_eq!(input.shop_tier, None);
                assert_eq!(input.order_source, Some(OrderSource::LiveVideo));
            }
            other => panic!("unexpected input {:?}", other),
        }
    }

    #[test]
    fn shopee_fields_are_dropped_for_tiktok() {
        let mut req = request("TikTok");
        req.include_voucher_xtra = Some(true);
        req.include_freeship = Some(false);

        let input = PlatformInput::try_from(req).expect("tiktok");
        assert_eq!(input.platform(), Platform::TikTok);
        match input {
            PlatformInput::TikTok(tiktok) => assert_eq!(tiktok.include_freeship, Some(false)),
            other => panic!("unexpected input {:?}", other),
        }
    }
}
