//! Quantity and pricing policies
//!
//! Both are heuristic, not simulated economics: quantities come from the
//! category's configured tier, prices from the item's base price times a
//! side-dependent random multiplier. Every call draws independently.

use rand::Rng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;

use hermes_core::{CategoryId, Side};

use crate::config::{PricingConfig, QuantityTiers};

/// Randomized order size per item category
#[derive(Debug, Clone)]
pub struct QuantityPolicy {
    tiers: QuantityTiers,
}

impl QuantityPolicy {
    pub fn new(tiers: QuantityTiers) -> Self {
        Self { tiers }
    }

    /// Draw an order size from the category's tier range
    pub fn quantity_for(&self, category_id: CategoryId, rng: &mut StdRng) -> u64 {
        let range = self.tiers.range_for(category_id);
        rng.gen_range(range.min..=range.max)
    }
}

/// Randomized bid/ask price off an item's base price
#[derive(Debug, Clone)]
pub struct PricingPolicy {
    config: PricingConfig,
}

impl PricingPolicy {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Price an order: `base x uniform(low, high)` for the side's range.
    ///
    /// A missing base price falls back to the configured default rather
    /// than failing the cycle. The result is rounded to 2 decimal places.
    pub fn price_for(&self, base_price: Option<Decimal>, side: Side, rng: &mut StdRng) -> Decimal {
        let base = base_price.unwrap_or(self.config.default_base_price);
        let range = match side {
            Side::Buy => self.config.buy_multiplier,
            Side::Sell => self.config.sell_multiplier,
        };
        let multiplier = rng.gen_range(range.low..=range.high);
        let multiplier = Decimal::from_f64_retain(multiplier).unwrap_or(Decimal::ONE);
        (base * multiplier).round_dp(2)
    }
}
