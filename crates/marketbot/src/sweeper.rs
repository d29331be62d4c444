//! Expiration sweeper
//!
//! Retires the bot's own orders once their lifetime has elapsed. The
//! owner filter is [`BOT_OWNER_ID`]: the sweeper must never delete a
//! player order, so the predicate lives in the store query rather than
//! in post-filtering here.

use log::{debug, warn};
use std::sync::Arc;

use hermes_core::{BOT_OWNER_ID, Timestamp};
use hermes_ports::OrderStore;

/// Finds and removes expired bot orders
pub struct ExpirationSweeper {
    store: Arc<dyn OrderStore>,
}

impl ExpirationSweeper {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Remove every bot order whose lifetime elapsed before `now`
    ///
    /// Returns the count actually removed. A query failure abandons the
    /// sweep for this cycle without affecting order placement; a single
    /// delete failure skips that order only.
    pub fn sweep(&self, now: Timestamp) -> usize {
        let expired = match self.store.find_expired_order_ids(BOT_OWNER_ID, now) {
            Ok(ids) => ids,
            Err(e) => {
                warn!("Failed to query expired bot orders, skipping sweep: {e}");
                return 0;
            }
        };

        let mut removed = 0;
        for order_id in expired {
            match self.store.delete_order(order_id) {
                Ok(()) => {
                    debug!("Expired bot order {order_id}");
                    removed += 1;
                }
                Err(e) => warn!("Failed to delete expired order {order_id}: {e}"),
            }
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryOrderStore;
    use chrono::{Duration, TimeZone, Utc};
    use hermes_core::{MarketOrder, OrderId, OrderRange, OwnerId, Side};
    use hermes_ports::{StoreError, StoreResult};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn seeded_store() -> (Arc<InMemoryOrderStore>, Timestamp) {
        let store = Arc::new(InMemoryOrderStore::new());
        let issued = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        for (owner_id, duration_days) in [
            (BOT_OWNER_ID, 1),
            (BOT_OWNER_ID, 1),
            (BOT_OWNER_ID, 5),
            (90000001, 1), // player order, expired but untouchable
        ] {
            store
                .insert_order(MarketOrder {
                    item_id: 34,
                    region_id: 10000002,
                    solar_system_id: 30000142,
                    station_id: 60003760,
                    side: Side::Sell,
                    volume_entered: 10,
                    volume_remaining: 10,
                    min_volume: 1,
                    price: dec!(5.00),
                    escrow: Decimal::ZERO,
                    duration_days,
                    issued,
                    owner_id,
                    order_range: OrderRange::Station,
                    is_corp: false,
                })
                .unwrap();
        }
        (store, issued + Duration::days(2))
    }

    #[test]
    fn test_sweep_removes_only_expired_bot_orders() {
        let (store, now) = seeded_store();
        let sweeper = ExpirationSweeper::new(store.clone());

        assert_eq!(sweeper.sweep(now), 2);

        let remaining = store.all_orders();
        assert_eq!(remaining.len(), 2);
        // The live bot order and the expired player order both survive
        assert!(remaining.iter().any(|o| o.owner_id == BOT_OWNER_ID));
        assert!(remaining.iter().any(|o| o.owner_id == 90000001));
    }

    #[test]
    fn test_second_sweep_removes_nothing() {
        let (store, now) = seeded_store();
        let sweeper = ExpirationSweeper::new(store);

        assert!(sweeper.sweep(now) > 0);
        assert_eq!(sweeper.sweep(now), 0);
    }

    /// Store whose expiration query always fails
    struct BrokenQueryStore;

    impl OrderStore for BrokenQueryStore {
        fn insert_order(&self, _order: MarketOrder) -> StoreResult<OrderId> {
            unreachable!("sweeper never inserts")
        }

        fn find_expired_order_ids(
            &self,
            _owner_id: OwnerId,
            _now: Timestamp,
        ) -> StoreResult<Vec<OrderId>> {
            Err(StoreError::QueryFailed("connection reset".into()))
        }

        fn delete_order(&self, _order_id: OrderId) -> StoreResult<()> {
            unreachable!("query failed, nothing to delete")
        }
    }

    #[test]
    fn test_query_failure_abandons_sweep_quietly() {
        let sweeper = ExpirationSweeper::new(Arc::new(BrokenQueryStore));
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(sweeper.sweep(now), 0);
    }
}
