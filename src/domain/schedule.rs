// src/domain/schedule.rs
// Fee policy tables shared read-only by every calculator

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::errors::{AppError, AppResult};
use super::models::{OrderSource, ShopTier};

/// Versioned fee policy.
///
/// Loaded once and shared behind an `Arc`; a policy change replaces the whole
/// schedule instead of editing it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub version: String,
    pub effective_from: NaiveDate,
    pub shopee: ShopeeFees,
    pub tiktok: TikTokFees,
    pub tax: TaxPolicy,
    pub defaults: InputDefaults,
    pub limits: Limits,
}

/// Category -> rate lookup with a mandatory fallback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub default: Decimal,
    #[serde(default)]
    pub rates: BTreeMap<String, Decimal>,
}

impl RateTable {
    pub fn new(default: Decimal, rates: &[(&str, Decimal)]) -> Self {
        Self {
            default,
            rates: rates
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect(),
        }
    }

    /// Unknown categories resolve to the table default.
    pub fn rate_for(&self, category: &str) -> Decimal {
        self.rates.get(category).copied().unwrap_or(self.default)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieredRates {
    pub normal: RateTable,
    pub mall: RateTable,
}

impl TieredRates {
    pub fn table(&self, tier: ShopTier) -> &RateTable {
        match tier {
            ShopTier::Normal => &self.normal,
            ShopTier::Mall => &self.mall,
        }
    }
}

/// Percentage fee bounded by an absolute amount
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CappedRate {
    pub rate: Decimal,
    pub cap: Decimal,
}

impl CappedRate {
    pub fn apply(&self, base: Decimal) -> Decimal {
        (base * self.rate).min(self.cap)
    }
}

/// Percentage fee whose cap depends on the shop tier; `None` means uncapped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierCappedRate {
    pub rate: Decimal,
    #[serde(default)]
    pub cap_normal: Option<Decimal>,
    #[serde(default)]
    pub cap_mall: Option<Decimal>,
}

impl TierCappedRate {
    pub fn cap_for(&self, tier: ShopTier) -> Option<Decimal> {
        match tier {
            ShopTier::Normal => self.cap_normal,
            ShopTier::Mall => self.cap_mall,
        }
    }

    pub fn apply(&self, base: Decimal, tier: ShopTier) -> Decimal {
        let fee = base * self.rate;
        match self.cap_for(tier) {
            Some(cap) => fee.min(cap),
            None => fee,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopeeFees {
    pub payment_rate: Decimal,
    pub commission: TieredRates,
    /// Charged per order
    pub infrastructure_fee: Decimal,
    /// Charged per order when the logistics service is on
    pub piship_fee: Decimal,
    pub voucher_xtra: CappedRate,
    pub content_xtra: TierCappedRate,
    /// Applied to the marketplace voucher amount, not to revenue
    pub co_funding: CappedRate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TikTokFees {
    pub transaction_rate: Decimal,
    pub commission: RateTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxPolicy {
    pub vat_rate: Decimal,
    pub pit_rate: Decimal,
    /// Combined rate the tax evaluator applies
    pub rate: Decimal,
    /// Annual revenue under which a household seller owes nothing
    pub exemption_threshold: Decimal,
}

impl TaxPolicy {
    /// Caller-side helper; the tax evaluator never applies the threshold.
    pub fn is_exempt(&self, annual_revenue: Decimal) -> bool {
        annual_revenue < self.exemption_threshold
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDefaults {
    pub voucher_shop: Decimal,
    pub packaging_cost: Decimal,
    pub shipping_cost: Decimal,
    pub ads_cost: Decimal,
    pub quantity: i64,
    pub include_tax: bool,
    pub shop_tier: ShopTier,
    pub shopee_category: String,
    pub order_source: OrderSource,
    pub include_piship: bool,
    pub include_voucher_xtra: bool,
    pub include_content_xtra: bool,
    pub shopee_voucher_amount: Decimal,
    pub tiktok_category: String,
    pub include_freeship: bool,
}

/// Bounds enforced by request validation, never by the engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub min_quantity: i64,
    pub max_quantity: i64,
    pub max_packaging: Decimal,
    pub max_shipping: Decimal,
    pub max_shopee_voucher: Decimal,
}

impl FeeSchedule {
    /// Parse a schedule from its JSON form
    pub fn from_json(contents: &str) -> AppResult<Self> {
        let schedule: FeeSchedule = serde_json::from_str(contents)?;
        Ok(schedule)
    }

    /// Load a schedule from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!(
                "Failed to read fee schedule {}: {}",
                path.display(),
                e
            ))
        })?;

        let schedule = Self::from_json(&contents)?;
        log::info!(
            "Loaded fee schedule {} (effective {}) from {}",
            schedule.version,
            schedule.effective_from,
            path.display()
        );
        Ok(schedule)
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for FeeSchedule {
    /// Shopee policy effective 29/12/2025 and the current TikTok Shop rates
    fn default() -> Self {
        Self {
            version: "v2025.12.29".to_string(),
            effective_from: NaiveDate::from_ymd_opt(2025, 12, 29).unwrap_or(NaiveDate::MIN),
            shopee: ShopeeFees {
                payment_rate: dec!(0.05),
                // Level-2 categories of the 29/12/2025 fixed-fee table; the
                // tier defaults apply to anything outside it.
                commission: TieredRates {
                    normal: RateTable::new(
                        dec!(0.11),
                        &[
                            ("fashion_accessories", dec!(0.125)),
                            ("fashion_women", dec!(0.125)),
                            ("fashion_men", dec!(0.135)),
                            ("shoes", dec!(0.135)),
                            ("bags", dec!(0.135)),
                            ("watches", dec!(0.135)),
                            ("phone_tablet", dec!(0.02)),
                            ("laptop_pc", dec!(0.025)),
                            ("phone_accessories", dec!(0.10)),
                            ("pc_accessories", dec!(0.10)),
                            ("audio", dec!(0.07)),
                            ("home_appliances", dec!(0.07)),
                            ("camera", dec!(0.10)),
                            ("gaming", dec!(0.10)),
                            ("voucher_service", dec!(0.11)),
                            ("beauty", dec!(0.14)),
                            ("health", dec!(0.14)),
                            ("mom_baby", dec!(0.115)),
                            ("food_drink", dec!(0.115)),
                            ("home_decor", dec!(0.14)),
                            ("stationery", dec!(0.10)),
                            ("sports", dec!(0.12)),
                            ("pets", dec!(0.13)),
                            ("auto_moto", dec!(0.015)),
                        ],
                    ),
                    mall: RateTable::new(
                        dec!(0.10),
                        &[
                            ("fashion_accessories", dec!(0.12)),
                            ("fashion_women", dec!(0.12)),
                            ("fashion_men", dec!(0.12)),
                            ("shoes", dec!(0.12)),
                            ("bags", dec!(0.12)),
                            ("watches", dec!(0.12)),
                            ("phone_tablet", dec!(0.02)),
                            ("laptop_pc", dec!(0.025)),
                            ("phone_accessories", dec!(0.08)),
                            ("pc_accessories", dec!(0.08)),
                            ("audio", dec!(0.07)),
                            ("home_appliances", dec!(0.07)),
                            ("camera", dec!(0.08)),
                            ("gaming", dec!(0.08)),
                            ("voucher_service", dec!(0.10)),
                            ("beauty", dec!(0.12)),
                            ("health", dec!(0.12)),
                            ("mom_baby", dec!(0.10)),
                            ("food_drink", dec!(0.10)),
                            ("home_decor", dec!(0.12)),
                            ("stationery", dec!(0.10)),
                            ("sports", dec!(0.10)),
                            ("pets", dec!(0.12)),
                            ("auto_moto", dec!(0.015)),
                        ],
                    ),
                },
                infrastructure_fee: dec!(3000),
                piship_fee: dec!(1650),
                voucher_xtra: CappedRate {
                    rate: dec!(0.02),
                    cap: dec!(50000),
                },
                content_xtra: TierCappedRate {
                    rate: dec!(0.03),
                    cap_normal: None,
                    cap_mall: Some(dec!(50000)),
                },
                co_funding: CappedRate {
                    rate: dec!(0.20),
                    cap: dec!(50000),
                },
            },
            tiktok: TikTokFees {
                transaction_rate: dec!(0.03),
                commission: RateTable::new(
                    dec!(0.03),
                    &[
                        ("fashion", dec!(0.03)),
                        ("beauty", dec!(0.04)),
                        ("electronics", dec!(0.02)),
                        ("food", dec!(0.04)),
                        ("home", dec!(0.03)),
                    ],
                ),
            },
            tax: TaxPolicy {
                vat_rate: dec!(0.01),
                pit_rate: dec!(0.005),
                rate: dec!(0.015),
                exemption_threshold: dec!(100000000),
            },
            defaults: InputDefaults {
                voucher_shop: Decimal::ZERO,
                packaging_cost: dec!(3000),
                shipping_cost: Decimal::ZERO,
                ads_cost: Decimal::ZERO,
                quantity: 1,
                include_tax: true,
                shop_tier: ShopTier::Normal,
                shopee_category: "default".to_string(),
                order_source: OrderSource::Normal,
                include_piship: true,
                include_voucher_xtra: false,
                include_content_xtra: false,
                shopee_voucher_amount: Decimal::ZERO,
                tiktok_category: "other".to_string(),
                include_freeship: true,
            },
            limits: Limits {
                min_price: dec!(1000),
                max_price: dec!(500000000),
                min_quantity: 1,
                max_quantity: 10_000,
                max_packaging: dec!(100000),
                max_shipping: dec!(500000),
                max_shopee_voucher: dec!(500000),
            },
        }
    }
}
