// src/application/service/mod.rs
// Platform dispatch

use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};

use crate::application::usecase::ProfitAggregator;
use crate::domain::errors::{CalculatorError, CalculatorResultOf};
use crate::domain::models::{CalculatorResult, Platform, PlatformInput};
use crate::domain::schedule::FeeSchedule;
use crate::infrastructure::{ShopeeCalculator, TikTokCalculator};

/// Maps a platform tag to its calculator and runs the shared sequence.
///
/// A registry may be built with only some platforms enabled; inputs for the
/// others fail with [`CalculatorError::UnsupportedPlatform`]. The registry
/// holds no mutable state and can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct CalculatorRegistry {
    aggregator: ProfitAggregator,
    shopee: Option<ShopeeCalculator>,
    tiktok: Option<TikTokCalculator>,
}

impl CalculatorRegistry {
    /// Registry with every known platform
    pub fn new(schedule: Arc<FeeSchedule>) -> Self {
        Self::with_platforms(schedule, &Platform::ALL)
    }

    pub fn with_platforms(schedule: Arc<FeeSchedule>, platforms: &[Platform]) -> Self {
        let registry = Self {
            aggregator: ProfitAggregator::new(schedule),
            shopee: platforms
                .contains(&Platform::Shopee)
                .then(ShopeeCalculator::new),
            tiktok: platforms
                .contains(&Platform::TikTok)
                .then(TikTokCalculator::new),
        };

        log::info!(
            "Calculator registry ready for {:?} using fee schedule {}",
            registry.supported_platforms(),
            registry.schedule().version
        );
        registry
    }

    pub fn schedule(&self) -> &FeeSchedule {
        self.aggregator.schedule()
    }

    /// Platforms this registry accepts
    pub fn supported_platforms(&self) -> BTreeSet<Platform> {
        let mut platforms = BTreeSet::new();
        if self.shopee.is_some() {
            platforms.insert(Platform::Shopee);
        }
        if self.tiktok.is_some() {
            platforms.insert(Platform::TikTok);
        }
        platforms
    }

    pub fn calculate(&self, input: &PlatformInput) -> CalculatorResultOf<CalculatorResult> {
        let result = match input {
            PlatformInput::Shopee(shopee_input) => self
                .shopee
                .as_ref()
                .map(|calculator| self.aggregator.calculate(calculator, shopee_input)),
            PlatformInput::TikTok(tiktok_input) => self
                .tiktok
                .as_ref()
                .map(|calculator| self.aggregator.calculate(calculator, tiktok_input)),
        };

        result.ok_or_else(|| {
            log::warn!("No calculator registered for platform {}", input.platform());
            CalculatorError::UnsupportedPlatform(input.platform().to_string())
        })
    }
}

/// Calculate with the built-in fee schedule and every platform enabled
pub fn calculate_profit(input: &PlatformInput) -> CalculatorResultOf<CalculatorResult> {
    static DEFAULT_REGISTRY: OnceLock<CalculatorRegistry> = OnceLock::new();

    DEFAULT_REGISTRY
        .get_or_init(|| CalculatorRegistry::new(Arc::new(FeeSchedule::default())))
        .calculate(input)
}

/// Platforms the built-in registry accepts.
///
/// Ignores `ENABLED_PLATFORMS`; use [`CalculatorRegistry::supported_platforms`]
/// for the configured set.
pub fn supported_platforms() -> BTreeSet<Platform> {
    Platform::ALL.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{SaleInput, ShopeeInput, TikTokInput};
    use rust_decimal_macros::dec;

    fn tiktok_input() -> PlatformInput {
        PlatformInput::TikTok(TikTokInput::new(SaleInput::new(dec!(100000), dec!(50000))))
    }

    fn shopee_input() -> PlatformInput {
        PlatformInput::Shopee(ShopeeInput::new(SaleInput::new(dec!(150000), dec!(80000))))
    }

    #[test]
    fn dispatches_by_platform_tag() {
        let registry = CalculatorRegistry::new(Arc::new(FeeSchedule::default()));

        let shopee = registry.calculate(&shopee_input()).expect("shopee");
        assert_eq!(shopee.fee_breakdown.infrastructure, dec!(3000));

        let tiktok = registry.calculate(&tiktok_input()).expect("tiktok");
        assert_eq!(tiktok.fee_breakdown.payment, dec!(3000));
    }

    #[test]
    fn lists_registered_platforms() {
        let registry = CalculatorRegistry::new(Arc::new(FeeSchedule::default()));
        assert_eq!(
            registry.supported_platforms().into_iter().collect::<Vec<_>>(),
            vec![Platform::Shopee, Platform::TikTok]
        );
        assert_eq!(registry.supported_platforms(), supported_platforms());
    }

    #[test]
    fn unregistered_platform_is_rejected() {
        let registry =
            CalculatorRegistry::with_platforms(Arc::new(FeeSchedule::default()), &[Platform::Shopee]);

        let err = registry.calculate(&tiktok_input()).expect_err("tiktok disabled");
        assert_eq!(err, CalculatorError::UnsupportedPlatform("tiktok".to_string()));
        assert!(registry.calculate(&shopee_input()).is_ok());
    }

    #[test]
    fn default_entry_point_matches_registry() {
        let registry = CalculatorRegistry::new(Arc::new(FeeSchedule::default()));
        assert_eq!(
            calculate_profit(&shopee_input()).expect("default"),
            registry.calculate(&shopee_input()).expect("registry")
        );
    }
}
