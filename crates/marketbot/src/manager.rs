//! Market bot manager
//!
//! Orchestrates one cycle at a time: sweep expired orders, sample a
//! bounded set of systems, and for each system place buy then sell
//! orders through the selection/pricing/budget pipeline. Cycles are
//! deadline-gated; `force_run` bypasses the gate but still re-arms it.
//!
//! The manager is explicitly constructed and owns its random source, so
//! multiple independent instances can coexist and tests can seed the
//! randomness.

use chrono::Duration;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;

use hermes_core::{RegionId, Side, SolarSystemId, StationId, Timestamp};
use hermes_ports::{Catalog, OrderStore, Topology};

use crate::budget::{BudgetDecision, BudgetGuard};
use crate::config::{BotConfig, ConfigError};
use crate::error::MarketBotError;
use crate::policy::{PricingPolicy, QuantityPolicy};
use crate::sampling;
use crate::selection::ItemSelector;
use crate::sweeper::ExpirationSweeper;
use crate::writer::{OrderWriter, Venue};

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The manager was never initialized; nothing ran
    NotInitialized,
    /// The refresh deadline has not elapsed yet
    NotDue,
    /// A full cycle ran to completion
    Completed(CycleSummary),
}

/// Per-cycle counts, the manager's observable output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleSummary {
    pub expired_removed: usize,
    pub systems_processed: usize,
    pub systems_skipped: usize,
    pub buy_orders: usize,
    pub sell_orders: usize,
    pub budget_rejections: usize,
    pub catalog_misses: usize,
    pub write_failures: usize,
}

impl CycleSummary {
    pub fn orders_placed(&self) -> usize {
        self.buy_orders + self.sell_orders
    }
}

/// Drives the market bot: sweeping, venue sampling and order placement
pub struct MarketBotMgr {
    config: BotConfig,
    catalog: Arc<dyn Catalog>,
    topology: Arc<dyn Topology>,
    selector: ItemSelector,
    quantity: QuantityPolicy,
    pricing: PricingPolicy,
    budget: BudgetGuard,
    writer: OrderWriter,
    sweeper: ExpirationSweeper,
    rng: StdRng,
    initialized: bool,
    next_deadline: Option<Timestamp>,
}

impl MarketBotMgr {
    /// Build a manager with an entropy-seeded random source
    pub fn new(
        config: BotConfig,
        catalog: Arc<dyn Catalog>,
        topology: Arc<dyn Topology>,
        store: Arc<dyn OrderStore>,
    ) -> Self {
        Self::build(config, catalog, topology, store, StdRng::from_entropy())
    }

    /// Build a manager with a fixed seed for reproducible runs
    pub fn with_seed(
        config: BotConfig,
        catalog: Arc<dyn Catalog>,
        topology: Arc<dyn Topology>,
        store: Arc<dyn OrderStore>,
        seed: u64,
    ) -> Self {
        Self::build(config, catalog, topology, store, StdRng::seed_from_u64(seed))
    }

    fn build(
        config: BotConfig,
        catalog: Arc<dyn Catalog>,
        topology: Arc<dyn Topology>,
        store: Arc<dyn OrderStore>,
        rng: StdRng,
    ) -> Self {
        let selector = ItemSelector::new(
            config.selection.clone(),
            config.eligible_categories.clone(),
        );
        let quantity = QuantityPolicy::new(config.quantity.clone());
        let pricing = PricingPolicy::new(config.pricing.clone());
        let budget = BudgetGuard::new(config.max_isk_per_order);
        let writer = OrderWriter::new(store.clone(), config.order_lifetime_days);
        let sweeper = ExpirationSweeper::new(store);

        Self {
            config,
            catalog,
            topology,
            selector,
            quantity,
            pricing,
            budget,
            writer,
            sweeper,
            rng,
            initialized: false,
            next_deadline: None,
        }
    }

    /// Validate the configuration and enable cycling
    ///
    /// Fatal on failure: the bot never runs with a bad config and does
    /// not retry on its own. Beyond structural validation this verifies
    /// that the selection fallback item actually exists in the catalog
    /// and is eligible, since the selector depends on it being safe.
    pub fn initialize(&mut self) -> Result<(), MarketBotError> {
        self.config.validate()?;

        let fallback = self.config.selection.fallback_item_id;
        match self.catalog.lookup(fallback) {
            Some(entry) if self.selector.is_eligible(entry.category_id) => {}
            _ => {
                return Err(MarketBotError::Config(ConfigError::FallbackNotEligible(
                    fallback,
                )));
            }
        }

        self.initialized = true;
        info!(
            "Market bot manager initialized: refresh every {} min, up to {} orders per venue side",
            self.config.refresh_interval_minutes, self.config.orders_per_refresh
        );
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// When the next automatic cycle becomes due; `None` until first armed
    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.next_deadline
    }

    /// Timer-gated entry point, called once per external tick
    ///
    /// A never-armed deadline (fresh after `initialize`) counts as due,
    /// so the first tick after startup runs a cycle immediately.
    pub fn run_cycle(&mut self, now: Timestamp) -> CycleOutcome {
        if !self.initialized {
            warn!("Market bot manager not initialized, skipping cycle");
            return CycleOutcome::NotInitialized;
        }
        if let Some(deadline) = self.next_deadline {
            if now < deadline {
                return CycleOutcome::NotDue;
            }
        }

        let summary = self.execute_cycle(now);
        self.arm(now);
        CycleOutcome::Completed(summary)
    }

    /// Manual trigger: always executes, then re-arms the deadline
    pub fn force_run(&mut self, now: Timestamp) -> CycleOutcome {
        if !self.initialized {
            warn!("Market bot manager not initialized, ignoring manual run");
            return CycleOutcome::NotInitialized;
        }
        info!("Manually triggered market bot run");

        let summary = self.execute_cycle(now);
        self.arm(now);
        CycleOutcome::Completed(summary)
    }

    fn arm(&mut self, now: Timestamp) {
        self.next_deadline =
            Some(now + Duration::minutes(i64::from(self.config.refresh_interval_minutes)));
    }

    /// One full cycle: sweep, sample venues, place orders per side
    fn execute_cycle(&mut self, now: Timestamp) -> CycleSummary {
        let mut summary = CycleSummary {
            expired_removed: self.sweeper.sweep(now),
            ..Default::default()
        };

        let systems = sampling::sample_systems(
            self.topology.as_ref(),
            self.config.systems_per_cycle,
            &mut self.rng,
        );
        for system_id in systems {
            let stations = match self.topology.list_stations(system_id) {
                Some(stations) if !stations.is_empty() => stations,
                Some(_) => {
                    debug!("Skipping system {system_id}: no stations available");
                    summary.systems_skipped += 1;
                    continue;
                }
                None => {
                    warn!("Skipping system {system_id}: unknown to topology");
                    summary.systems_skipped += 1;
                    continue;
                }
            };
            let Some(region_id) = self.topology.region_of(system_id) else {
                warn!("Skipping system {system_id}: region unknown");
                summary.systems_skipped += 1;
                continue;
            };

            self.place_orders(Side::Buy, system_id, region_id, &stations, now, &mut summary);
            self.place_orders(Side::Sell, system_id, region_id, &stations, now, &mut summary);
            summary.systems_processed += 1;
        }

        info!(
            "Market bot cycle: {} buy / {} sell orders across {} systems ({} skipped), \
             {} expired removed, {} over budget, {} write failures",
            summary.buy_orders,
            summary.sell_orders,
            summary.systems_processed,
            summary.systems_skipped,
            summary.expired_removed,
            summary.budget_rejections,
            summary.write_failures
        );
        summary
    }

    /// Place up to the per-side station quota of orders in one system
    fn place_orders(
        &mut self,
        side: Side,
        system_id: SolarSystemId,
        region_id: RegionId,
        stations: &[StationId],
        now: Timestamp,
        summary: &mut CycleSummary,
    ) {
        let limit = sampling::station_limit(
            stations.len(),
            self.config.station_fraction,
            self.config.orders_per_refresh,
        );
        let picked = sampling::sample_stations(stations.to_vec(), limit, &mut self.rng);

        for station_id in picked {
            let item_id = self.selector.select(self.catalog.as_ref(), &mut self.rng);
            let Some(entry) = self.catalog.lookup(item_id) else {
                debug!("Catalog miss for item {item_id}, skipping station {station_id}");
                summary.catalog_misses += 1;
                continue;
            };

            let quantity = self.quantity.quantity_for(entry.category_id, &mut self.rng);
            let price = self.pricing.price_for(entry.base_price, side, &mut self.rng);

            let quantity = match self.budget.check(price, quantity) {
                BudgetDecision::Within(quantity) => quantity,
                BudgetDecision::Reduced(quantity) => {
                    debug!(
                        "Item {item_id} over budget at {price} ISK, reduced to {quantity} unit"
                    );
                    quantity
                }
                BudgetDecision::Exceeded => {
                    debug!("Item {item_id} at {price} ISK exceeds the cap even at one unit");
                    summary.budget_rejections += 1;
                    continue;
                }
            };

            let venue = Venue {
                region_id,
                solar_system_id: system_id,
                station_id,
            };
            match self.writer.write(venue, item_id, side, quantity, price, now) {
                Ok(order_id) => {
                    debug!(
                        "Bot {side:?}: item {item_id} x{quantity} @ {price} ISK \
                         in station {station_id} (system {system_id}), order {order_id}"
                    );
                    match side {
                        Side::Buy => summary.buy_orders += 1,
                        Side::Sell => summary.sell_orders += 1,
                    }
                }
                Err(e) => {
                    warn!("Failed to write {side:?} order in station {station_id}: {e}");
                    summary.write_failures += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{InMemoryCatalog, InMemoryOrderStore, InMemoryTopology};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn manager_with_fallback_item() -> MarketBotMgr {
        let catalog = Arc::new(InMemoryCatalog::new());
        catalog.add_item(34, 18, Some(dec!(5.00)));
        MarketBotMgr::with_seed(
            BotConfig::default(),
            catalog,
            Arc::new(InMemoryTopology::new()),
            Arc::new(InMemoryOrderStore::new()),
            42,
        )
    }

    #[test]
    fn test_uninitialized_manager_never_cycles() {
        let mut mgr = manager_with_fallback_item();
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

        assert_eq!(mgr.run_cycle(now), CycleOutcome::NotInitialized);
        assert_eq!(mgr.force_run(now), CycleOutcome::NotInitialized);
        assert_eq!(mgr.next_deadline(), None);
    }

    #[test]
    fn test_first_tick_after_initialize_is_due() {
        let mut mgr = manager_with_fallback_item();
        mgr.initialize().unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

        assert!(matches!(mgr.run_cycle(now), CycleOutcome::Completed(_)));
        assert_eq!(mgr.next_deadline(), Some(now + Duration::minutes(20)));
    }

    #[test]
    fn test_deadline_gates_subsequent_ticks() {
        let mut mgr = manager_with_fallback_item();
        mgr.initialize().unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

        assert!(matches!(mgr.run_cycle(now), CycleOutcome::Completed(_)));
        assert_eq!(mgr.run_cycle(now + Duration::minutes(5)), CycleOutcome::NotDue);
        // Due exactly at the deadline
        assert!(matches!(
            mgr.run_cycle(now + Duration::minutes(20)),
            CycleOutcome::Completed(_)
        ));
    }

    #[test]
    fn test_initialize_rejects_missing_fallback_item() {
        // Empty catalog: the configured fallback item cannot be verified
        let mut mgr = MarketBotMgr::with_seed(
            BotConfig::default(),
            Arc::new(InMemoryCatalog::new()),
            Arc::new(InMemoryTopology::new()),
            Arc::new(InMemoryOrderStore::new()),
            42,
        );
        assert!(matches!(
            mgr.initialize(),
            Err(MarketBotError::Config(ConfigError::FallbackNotEligible(34)))
        ));
        assert!(!mgr.is_initialized());
    }

    #[test]
    fn test_initialize_rejects_invalid_config() {
        let catalog = Arc::new(InMemoryCatalog::new());
        catalog.add_item(34, 18, Some(dec!(5.00)));
        let mut mgr = MarketBotMgr::with_seed(
            BotConfig {
                orders_per_refresh: 0,
                ..Default::default()
            },
            catalog,
            Arc::new(InMemoryTopology::new()),
            Arc::new(InMemoryOrderStore::new()),
            42,
        );
        assert!(mgr.initialize().is_err());
    }
}
