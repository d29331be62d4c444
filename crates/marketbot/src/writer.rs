//! Order writer
//!
//! Assembles a fully-formed [`MarketOrder`] from the pipeline's outputs
//! and persists it. Buy orders reserve escrow and are visible
//! region-wide; sell orders carry no escrow and list at the station only.

use rust_decimal::Decimal;
use std::sync::Arc;

use hermes_core::{
    BOT_OWNER_ID, ItemTypeId, MarketOrder, OrderId, OrderRange, RegionId, Side, SolarSystemId,
    StationId, Timestamp,
};
use hermes_ports::{OrderStore, StoreResult};

/// A (region, system, station) triple an order is listed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Venue {
    pub region_id: RegionId,
    pub solar_system_id: SolarSystemId,
    pub station_id: StationId,
}

/// Persists bot orders through the order store
pub struct OrderWriter {
    store: Arc<dyn OrderStore>,
    lifetime_days: u32,
}

impl OrderWriter {
    pub fn new(store: Arc<dyn OrderStore>, lifetime_days: u32) -> Self {
        Self {
            store,
            lifetime_days,
        }
    }

    /// Build and persist one order; returns the store-assigned id
    pub fn write(
        &self,
        venue: Venue,
        item_id: ItemTypeId,
        side: Side,
        quantity: u64,
        price: Decimal,
        now: Timestamp,
    ) -> StoreResult<OrderId> {
        let escrow = match side {
            Side::Buy => price * Decimal::from(quantity),
            Side::Sell => Decimal::ZERO,
        };
        let order_range = match side {
            Side::Buy => OrderRange::Region,
            Side::Sell => OrderRange::Station,
        };

        let order = MarketOrder {
            item_id,
            region_id: venue.region_id,
            solar_system_id: venue.solar_system_id,
            station_id: venue.station_id,
            side,
            volume_entered: quantity,
            volume_remaining: quantity,
            min_volume: 1,
            price,
            escrow,
            duration_days: self.lifetime_days,
            issued: now,
            owner_id: BOT_OWNER_ID,
            order_range,
            is_corp: false,
        };

        self.store.insert_order(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryOrderStore;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn venue() -> Venue {
        Venue {
            region_id: 10000002,
            solar_system_id: 30000142,
            station_id: 60003760,
        }
    }

    #[test]
    fn test_buy_order_reserves_escrow_and_lists_region_wide() {
        let store = Arc::new(InMemoryOrderStore::new());
        let writer = OrderWriter::new(store.clone(), 7);
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

        let id = writer
            .write(venue(), 34, Side::Buy, 500, dec!(4.20), now)
            .unwrap();
        let order = store.get(id).unwrap();

        assert_eq!(order.escrow, dec!(2100.00));
        assert_eq!(order.order_range, OrderRange::Region);
        assert_eq!(order.owner_id, BOT_OWNER_ID);
        assert_eq!(order.volume_remaining, order.volume_entered);
        assert_eq!(order.min_volume, 1);
        assert!(!order.is_corp);
        assert!(order.validate());
    }

    #[test]
    fn test_sell_order_has_no_escrow_and_lists_at_station() {
        let store = Arc::new(InMemoryOrderStore::new());
        let writer = OrderWriter::new(store.clone(), 7);
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

        let id = writer
            .write(venue(), 34, Side::Sell, 500, dec!(6.10), now)
            .unwrap();
        let order = store.get(id).unwrap();

        assert_eq!(order.escrow, Decimal::ZERO);
        assert_eq!(order.order_range, OrderRange::Station);
        assert_eq!(order.duration_days, 7);
        assert_eq!(order.issued, now);
    }
}
