// src/domain/models.rs
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::CalculatorError;

/// Marketplaces with a registered fee policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Shopee,
    #[serde(rename = "tiktok")]
    TikTok,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Shopee, Platform::TikTok];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Shopee => "shopee",
            Platform::TikTok => "tiktok",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "shopee" => Ok(Platform::Shopee),
            "tiktok" => Ok(Platform::TikTok),
            other => Err(CalculatorError::UnsupportedPlatform(other.to_string())),
        }
    }
}

/// Seller classification on Shopee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopTier {
    #[default]
    Normal,
    Mall,
}

impl ShopTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShopTier::Normal => "normal",
            ShopTier::Mall => "mall",
        }
    }

    /// Returns `None` for tiers the schedule has no table for.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "normal" => Some(ShopTier::Normal),
            "mall" => Some(ShopTier::Mall),
            _ => None,
        }
    }
}

/// Where a Shopee order originated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSource {
    #[default]
    Normal,
    LiveVideo,
}

impl OrderSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSource::Normal => "normal",
            OrderSource::LiveVideo => "live_video",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "normal" => Some(OrderSource::Normal),
            "live_video" => Some(OrderSource::LiveVideo),
            _ => None,
        }
    }
}

/// Fields every platform input carries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleInput {
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
}

impl SaleInput {
    pub fn new(selling_price: Decimal, cost_price: Decimal) -> Self {
        Self {
            selling_price,
            cost_price,
            voucher_shop: None,
            packaging_cost: None,
            shipping_cost: None,
            ads_cost: None,
            quantity: None,
            include_tax: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopeeInput {
    #[serde(flatten)]
    pub sale: SaleInput,
    #[serde(default)]
    pub shop_tier: Option<ShopTier>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub order_source: Option<OrderSource>,
    #[serde(default)]
    pub include_piship: Option<bool>,
    #[serde(default)]
    pub include_voucher_xtra: Option<bool>,
    #[serde(default)]
    pub include_content_xtra: Option<bool>,
    #[serde(default)]
    pub shopee_voucher_amount: Option<Decimal>,
}

impl ShopeeInput {
    pub fn new(sale: SaleInput) -> Self {
        Self {
            sale,
            shop_tier: None,
            category: None,
            order_source: None,
            include_piship: None,
            include_voucher_xtra: None,
            include_content_xtra: None,
            shopee_voucher_amount: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TikTokInput {
    #[serde(flatten)]
    pub sale: SaleInput,
    #[serde(default)]
    pub category: Option<String>,
    /// Carried for parity with Shopee's logistics toggle; no TikTok fee reads it.
    #[serde(default)]
    pub include_freeship: Option<bool>,
}

impl TikTokInput {
    pub fn new(sale: SaleInput) -> Self {
        Self {
            sale,
            category: None,
            include_freeship: None,
        }
    }
}

/// Caller-owned input, tagged by platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "platform", rename_all = "lowercase")]
pub enum PlatformInput {
    Shopee(ShopeeInput),
    #[serde(rename = "tiktok")]
    TikTok(TikTokInput),
}

impl PlatformInput {
    pub fn platform(&self) -> Platform {
        match self {
            PlatformInput::Shopee(_) => Platform::Shopee,
            PlatformInput::TikTok(_) => Platform::TikTok,
        }
    }

    pub fn sale(&self) -> &SaleInput {
        match self {
            PlatformInput::Shopee(input) => &input.sale,
            PlatformInput::TikTok(input) => &input.sale,
        }
    }

    /// Copy of this input with a different selling price.
    pub fn with_selling_price(&self, selling_price: Decimal) -> Self {
        let mut next = self.clone();
        match &mut next {
            PlatformInput::Shopee(input) => input.sale.selling_price = selling_price,
            PlatformInput::TikTok(input) => input.sale.selling_price = selling_price,
        }
        next
    }
}

/// Shared fields after defaults are applied
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSale {
    pub selling_price: Decimal,
    pub cost_price: Decimal,
    pub voucher_shop: Decimal,
    pub packaging_cost: Decimal,
    pub shipping_cost: Decimal,
    pub ads_cost: Decimal,
    pub quantity: i64,
    pub include_tax: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedShopeeInput {
    pub sale: NormalizedSale,
    pub shop_tier: ShopTier,
    pub category: String,
    pub order_source: OrderSource,
    pub include_piship: bool,
    pub include_voucher_xtra: bool,
    pub include_content_xtra: bool,
    pub shopee_voucher_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTikTokInput {
    pub sale: NormalizedSale,
    pub category: String,
    pub include_freeship: bool,
}

impl AsRef<NormalizedSale> for NormalizedShopeeInput {
    fn as_ref(&self) -> &NormalizedSale {
        &self.sale
    }
}

impl AsRef<NormalizedSale> for NormalizedTikTokInput {
    fn as_ref(&self) -> &NormalizedSale {
        &self.sale
    }
}

/// Fee components charged by a platform for one order.
///
/// The shape is identical for every platform; slots a platform has no policy
/// for stay at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// Payment (Shopee) or transaction (TikTok) fee
    pub payment: Decimal,
    pub commission: Decimal,
    pub infrastructure: Decimal,
    /// Fixed per-order logistics service fee
    pub piship: Decimal,
    pub voucher_xtra: Decimal,
    pub content_xtra: Decimal,
    pub co_funding: Decimal,
    /// Reserved; no platform charges it today
    pub cod: Decimal,
}

impl FeeBreakdown {
    pub fn total(&self) -> Decimal {
        self.payment
            + self.commission
            + self.infrastructure
            + self.piship
            + self.voucher_xtra
            + self.content_xtra
            + self.co_funding
            + self.cod
    }
}

/// Outcome of one profit calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorResult {
    pub revenue: Decimal,
    pub total_platform_fee: Decimal,
    pub fee_breakdown: FeeBreakdown,
    pub tax_amount: Decimal,
    pub total_operating_cost: Decimal,
    pub net_profit: Decimal,
    pub profit_margin: Decimal,
    pub profit_per_unit: Decimal,
}

impl fmt::Display for CalculatorResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "revenue={} fees={} tax={} costs={} net={} margin={}",
            self.revenue,
            self.total_platform_fee,
            self.tax_amount,
            self.total_operating_cost,
            self.net_profit,
            self.profit_margin.round_dp(4)
        )
    }
}
