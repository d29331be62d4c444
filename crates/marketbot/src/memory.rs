//! In-memory collaborator adapters
//!
//! Thread-safe implementations of the catalog, topology and order store
//! ports backed by DashMap. Suitable for the demo universe and testing;
//! a production deployment plugs real data sources into the same ports.

use dashmap::DashMap;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU64, Ordering};

use hermes_core::{
    CategoryId, ItemTypeId, MarketOrder, OrderId, OwnerId, RegionId, SolarSystemId, StationId,
    Timestamp,
};
use hermes_ports::{Catalog, ItemEntry, OrderStore, StoreError, StoreResult, Topology};

/// In-memory item catalog
#[derive(Default)]
pub struct InMemoryCatalog {
    items: DashMap<ItemTypeId, ItemEntry>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item type
    pub fn add_item(
        &self,
        item_id: ItemTypeId,
        category_id: CategoryId,
        base_price: Option<Decimal>,
    ) {
        self.items.insert(
            item_id,
            ItemEntry {
                category_id,
                base_price,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Catalog for InMemoryCatalog {
    fn lookup(&self, item_id: ItemTypeId) -> Option<ItemEntry> {
        self.items.get(&item_id).map(|entry| entry.value().clone())
    }
}

/// In-memory spatial topology
#[derive(Default)]
pub struct InMemoryTopology {
    systems: DashMap<SolarSystemId, (RegionId, Vec<StationId>)>,
}

impl InMemoryTopology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a system with its region and stations
    pub fn add_system(
        &self,
        region_id: RegionId,
        system_id: SolarSystemId,
        stations: Vec<StationId>,
    ) {
        self.systems.insert(system_id, (region_id, stations));
    }
}

impl Topology for InMemoryTopology {
    fn list_systems(&self) -> Vec<SolarSystemId> {
        let mut systems: Vec<_> = self.systems.iter().map(|entry| *entry.key()).collect();
        systems.sort_unstable();
        systems
    }

    fn list_stations(&self, system_id: SolarSystemId) -> Option<Vec<StationId>> {
        self.systems
            .get(&system_id)
            .map(|entry| entry.value().1.clone())
    }

    fn region_of(&self, system_id: SolarSystemId) -> Option<RegionId> {
        self.systems.get(&system_id).map(|entry| entry.value().0)
    }
}

/// In-memory order store with store-assigned sequential ids
pub struct InMemoryOrderStore {
    orders: DashMap<OrderId, MarketOrder>,
    next_id: AtomicU64,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self {
            orders: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Fetch a stored order by id
    pub fn get(&self, order_id: OrderId) -> Option<MarketOrder> {
        self.orders.get(&order_id).map(|entry| entry.value().clone())
    }

    /// Snapshot of every stored order
    pub fn all_orders(&self) -> Vec<MarketOrder> {
        self.orders.iter().map(|entry| entry.value().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn insert_order(&self, order: MarketOrder) -> StoreResult<OrderId> {
        let order_id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.orders.insert(order_id, order);
        Ok(order_id)
    }

    fn find_expired_order_ids(
        &self,
        owner_id: OwnerId,
        now: Timestamp,
    ) -> StoreResult<Vec<OrderId>> {
        let mut expired: Vec<OrderId> = self
            .orders
            .iter()
            .filter(|entry| {
                entry.value().owner_id == owner_id && entry.value().is_expired(now)
            })
            .map(|entry| *entry.key())
            .collect();
        expired.sort_unstable();
        Ok(expired)
    }

    fn delete_order(&self, order_id: OrderId) -> StoreResult<()> {
        self.orders
            .remove(&order_id)
            .map(|_| ())
            .ok_or(StoreError::OrderNotFound(order_id))
    }
}
