use chrono::Duration;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Side;
use crate::values::{ItemTypeId, OwnerId, RegionId, SolarSystemId, StationId, Timestamp};

/// Owner identity for every order the market bot writes.
///
/// The same constant is the filter predicate for expiration sweeping:
/// creating under one identity and sweeping under another would strand
/// every bot order forever. 1000125 is the NPC corporation the market
/// service already knows about.
pub const BOT_OWNER_ID: OwnerId = 1000125;

/// Spatial visibility radius of a listed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderRange {
    /// Visible only at the listing station
    Station,
    /// Visible anywhere in the listing solar system
    System,
    /// Visible within N jumps of the listing system
    Jumps(u32),
    /// Visible region-wide
    Region,
}

/// A persisted market order
///
/// The unit of state the bot creates and retires. Generated orders share
/// this shape with player-submitted ones, so the structural invariants
/// (`volume_remaining <= volume_entered`, `min_volume >= 1`, positive
/// price) hold for both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketOrder {
    /// The item type being traded
    pub item_id: ItemTypeId,
    pub region_id: RegionId,
    pub solar_system_id: SolarSystemId,
    pub station_id: StationId,
    pub side: Side,
    pub volume_entered: u64,
    pub volume_remaining: u64,
    /// Minimum fill size accepted
    pub min_volume: u64,
    /// Per-unit price
    pub price: Decimal,
    /// Funds reserved against a buy order; zero for sells
    pub escrow: Decimal,
    /// Order lifetime in days
    pub duration_days: u32,
    pub issued: Timestamp,
    pub owner_id: OwnerId,
    pub order_range: OrderRange,
    pub is_corp: bool,
}

impl MarketOrder {
    /// Total value of the order at entry (price x volume entered)
    pub fn notional(&self) -> Decimal {
        self.price * Decimal::from(self.volume_entered)
    }

    /// The instant this order's lifetime elapses
    pub fn expires_at(&self) -> Timestamp {
        self.issued + Duration::days(i64::from(self.duration_days))
    }

    /// True once the lifetime has elapsed (strictly before `now`)
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at() < now
    }

    /// Check the structural invariants shared with player orders
    pub fn validate(&self) -> bool {
        self.volume_remaining <= self.volume_entered
            && self.volume_entered >= self.min_volume
            && self.min_volume >= 1
            && self.price > Decimal::ZERO
            && self.escrow >= Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn order(duration_days: u32) -> MarketOrder {
        MarketOrder {
            item_id: 34,
            region_id: 10000002,
            solar_system_id: 30000142,
            station_id: 60003760,
            side: Side::Sell,
            volume_entered: 100,
            volume_remaining: 100,
            min_volume: 1,
            price: dec!(5.00),
            escrow: Decimal::ZERO,
            duration_days,
            issued: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            owner_id: BOT_OWNER_ID,
            order_range: OrderRange::Station,
            is_corp: false,
        }
    }

    #[test]
    fn expires_after_duration_in_days() {
        let o = order(1);
        let expiry = Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap();
        assert_eq!(o.expires_at(), expiry);
        // Strict comparison: not expired at the exact expiry instant
        assert!(!o.is_expired(expiry));
        assert!(o.is_expired(expiry + Duration::seconds(1)));
        assert!(!o.is_expired(expiry - Duration::days(1)));
    }

    #[test]
    fn notional_is_price_times_volume() {
        assert_eq!(order(1).notional(), dec!(500.00));
    }

    #[test]
    fn validate_rejects_overdrawn_remaining_volume() {
        let mut o = order(1);
        assert!(o.validate());
        o.volume_remaining = o.volume_entered + 1;
        assert!(!o.validate());
    }

    #[test]
    fn validate_rejects_non_positive_price() {
        let mut o = order(1);
        o.price = Decimal::ZERO;
        assert!(!o.validate());
    }

    #[test]
    fn buy_and_sell_map_to_bid_flag() {
        assert!(Side::Buy.is_bid());
        assert!(!Side::Sell.is_bid());
        assert_eq!(Side::Buy.opposite(), Side::Sell);
    }
}
