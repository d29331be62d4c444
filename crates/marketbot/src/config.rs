//! Bot configuration
//!
//! Operator-tunable parameters, loaded once at startup and immutable for
//! the rest of the run. Tier membership and eligibility are data here,
//! not code: swapping which categories count as bulk requires only a
//! config change.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

use hermes_core::{CategoryId, ItemTypeId};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("{0} must be greater than zero")]
    ZeroField(&'static str),

    #[error("station_fraction must be within (0, 1], got {0}")]
    BadStationFraction(f64),

    #[error("No eligible categories configured")]
    EmptyEligibility,

    #[error("Invalid {0} range")]
    InvalidRange(&'static str),

    #[error("Fallback item {0} is outside the selection id range")]
    FallbackOutOfRange(ItemTypeId),

    #[error("Fallback item {0} is missing from the catalog or not eligible")]
    FallbackNotEligible(ItemTypeId),
}

/// Inclusive volume range for one quantity tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VolumeRange {
    pub min: u64,
    pub max: u64,
}

impl VolumeRange {
    pub fn contains(&self, volume: u64) -> bool {
        (self.min..=self.max).contains(&volume)
    }

    fn is_valid(&self) -> bool {
        self.min >= 1 && self.min <= self.max
    }
}

/// Inclusive multiplier range applied to an item's base price
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MultiplierRange {
    pub low: f64,
    pub high: f64,
}

impl MultiplierRange {
    fn is_valid(&self) -> bool {
        self.low > 0.0 && self.low <= self.high
    }
}

/// Item selection bounds and retry policy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Lowest candidate item id drawn
    pub min_item_id: ItemTypeId,
    /// Highest candidate item id drawn
    pub max_item_id: ItemTypeId,
    /// Draw attempts before giving up on randomness
    pub max_attempts: u32,
    /// Known-good eligible item returned when attempts are exhausted
    pub fallback_item_id: ItemTypeId,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            min_item_id: 10,
            max_item_id: 30000,
            max_attempts: 50,
            fallback_item_id: 34, // Tritanium: always present, bulk mineral
        }
    }
}

/// Category-to-tier mapping for order sizing
///
/// Categories not listed in either tier draw from `default_range`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantityTiers {
    /// Bulk commodities (ores, minerals, ammunition, charges)
    pub bulk_categories: BTreeSet<CategoryId>,
    pub bulk_range: VolumeRange,
    /// Mid-sized goods (frigates, cruisers, industrials)
    pub mid_categories: BTreeSet<CategoryId>,
    pub mid_range: VolumeRange,
    pub default_range: VolumeRange,
}

impl QuantityTiers {
    /// The volume range a category draws from
    pub fn range_for(&self, category_id: CategoryId) -> VolumeRange {
        if self.bulk_categories.contains(&category_id) {
            self.bulk_range
        } else if self.mid_categories.contains(&category_id) {
            self.mid_range
        } else {
            self.default_range
        }
    }
}

impl Default for QuantityTiers {
    fn default() -> Self {
        Self {
            bulk_categories: BTreeSet::from([18, 20, 53, 104]),
            bulk_range: VolumeRange {
                min: 1_000,
                max: 1_000_000,
            },
            mid_categories: BTreeSet::from([55, 63, 70]),
            mid_range: VolumeRange { min: 10, max: 100 },
            default_range: VolumeRange { min: 1, max: 5 },
        }
    }
}

/// Randomized pricing around an item's base price
///
/// Buy multipliers center below 1.0 and sell multipliers start at 1.0,
/// so a buy and a sell for the same item are never drawn from the same
/// distribution. The overlap of the two ranges is the bid-ask spread.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub buy_multiplier: MultiplierRange,
    pub sell_multiplier: MultiplierRange,
    /// Used when the catalog has no base price for an item
    pub default_base_price: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            buy_multiplier: MultiplierRange {
                low: 0.80,
                high: 1.10,
            },
            sell_multiplier: MultiplierRange {
                low: 1.00,
                high: 1.30,
            },
            default_base_price: dec!(1000),
        }
    }
}

/// Operator-tunable market bot parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Max orders attempted per venue per side per cycle
    pub orders_per_refresh: u32,
    /// Per-order notional cap
    pub max_isk_per_order: Decimal,
    /// Lifetime assigned to every created order
    pub order_lifetime_days: u32,
    /// Cooldown between automatic cycles
    pub refresh_interval_minutes: u32,
    /// Systems sampled per cycle
    pub systems_per_cycle: usize,
    /// Share of a system's stations that receive orders per side
    pub station_fraction: f64,
    /// Categories the bot is permitted to trade
    pub eligible_categories: BTreeSet<CategoryId>,
    pub selection: SelectionConfig,
    pub quantity: QuantityTiers,
    pub pricing: PricingConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            orders_per_refresh: 5,
            max_isk_per_order: dec!(10_000_000),
            order_lifetime_days: 7,
            refresh_interval_minutes: 20,
            systems_per_cycle: 5,
            station_fraction: 0.5,
            eligible_categories: BTreeSet::from([18, 19, 20, 53, 55, 63, 70, 83, 85, 104, 108, 255]),
            selection: SelectionConfig::default(),
            quantity: QuantityTiers::default(),
            pricing: PricingConfig::default(),
        }
    }
}

impl BotConfig {
    /// Validate the configuration
    ///
    /// Any failure here is fatal at initialization; the bot never runs
    /// with a partially valid config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.orders_per_refresh == 0 {
            return Err(ConfigError::ZeroField("orders_per_refresh"));
        }
        if self.order_lifetime_days == 0 {
            return Err(ConfigError::ZeroField("order_lifetime_days"));
        }
        if self.refresh_interval_minutes == 0 {
            return Err(ConfigError::ZeroField("refresh_interval_minutes"));
        }
        if self.systems_per_cycle == 0 {
            return Err(ConfigError::ZeroField("systems_per_cycle"));
        }
        if self.max_isk_per_order <= Decimal::ZERO {
            return Err(ConfigError::ZeroField("max_isk_per_order"));
        }
        if !(self.station_fraction > 0.0 && self.station_fraction <= 1.0) {
            return Err(ConfigError::BadStationFraction(self.station_fraction));
        }
        if self.eligible_categories.is_empty() {
            return Err(ConfigError::EmptyEligibility);
        }
        if self.selection.max_attempts == 0 {
            return Err(ConfigError::ZeroField("selection.max_attempts"));
        }
        if self.selection.min_item_id > self.selection.max_item_id {
            return Err(ConfigError::InvalidRange("selection item id"));
        }
        if !(self.selection.min_item_id..=self.selection.max_item_id)
            .contains(&self.selection.fallback_item_id)
        {
            return Err(ConfigError::FallbackOutOfRange(self.selection.fallback_item_id));
        }
        for (name, range) in [
            ("bulk volume", self.quantity.bulk_range),
            ("mid volume", self.quantity.mid_range),
            ("default volume", self.quantity.default_range),
        ] {
            if !range.is_valid() {
                return Err(ConfigError::InvalidRange(name));
            }
        }
        if !self.pricing.buy_multiplier.is_valid() {
            return Err(ConfigError::InvalidRange("buy multiplier"));
        }
        if !self.pricing.sell_multiplier.is_valid() {
            return Err(ConfigError::InvalidRange("sell multiplier"));
        }
        if self.pricing.default_base_price <= Decimal::ZERO {
            return Err(ConfigError::ZeroField("pricing.default_base_price"));
        }
        Ok(())
    }
}

/// Load bot configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<BotConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<BotConfig, ConfigError> {
    let config: BotConfig = serde_json::from_str(json)?;
    Ok(config)
}
