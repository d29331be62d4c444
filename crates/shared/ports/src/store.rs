use hermes_core::{MarketOrder, OrderId, OwnerId, Timestamp};

use crate::error::StoreResult;

/// Port for the persistent order store
///
/// Writes are independent per order; there is no multi-order transaction.
pub trait OrderStore: Send + Sync {
    /// Persist a fully-formed order and return its assigned id
    fn insert_order(&self, order: MarketOrder) -> StoreResult<OrderId>;

    /// Ids of orders owned by `owner_id` whose lifetime elapsed strictly
    /// before `now`. The duration-to-store-time conversion lives behind
    /// this call.
    fn find_expired_order_ids(&self, owner_id: OwnerId, now: Timestamp)
    -> StoreResult<Vec<OrderId>>;

    /// Delete a single order by id
    fn delete_order(&self, order_id: OrderId) -> StoreResult<()>;
}
