//! Bootstrap - demo universe setup
//!
//! Seeds the in-memory collaborators with a small cluster of regions,
//! systems, stations and items across the quantity tiers, and wires a
//! market bot manager to them. A production deployment swaps these
//! adapters for the real catalog, topology and store behind the same
//! ports.

use rust_decimal_macros::dec;
use std::sync::Arc;

use hermes_marketbot::{
    BotConfig, InMemoryCatalog, InMemoryOrderStore, InMemoryTopology, MarketBotMgr,
};
use hermes_ports::Topology;

/// The in-memory collaborators backing a demo run
pub struct DemoUniverse {
    pub catalog: Arc<InMemoryCatalog>,
    pub topology: Arc<InMemoryTopology>,
    pub store: Arc<InMemoryOrderStore>,
}

/// Build the demo catalog, topology and an empty order store
pub fn build_demo_universe() -> DemoUniverse {
    let catalog = Arc::new(InMemoryCatalog::new());

    // Bulk tier: minerals, ore and charges that move in large lots
    catalog.add_item(34, 18, Some(dec!(5.00))); // Tritanium
    catalog.add_item(35, 18, Some(dec!(11.00))); // Pyerite
    catalog.add_item(36, 18, Some(dec!(45.00))); // Mexallon
    catalog.add_item(1230, 104, Some(dec!(14.00))); // Veldspar
    catalog.add_item(178, 83, Some(dec!(25.00))); // Carbonized Lead S
    catalog.add_item(215, 83, Some(dec!(30.00))); // Iron Charge S

    // Mid tier: hulls
    catalog.add_item(587, 63, Some(dec!(450_000))); // Rifter
    catalog.add_item(589, 63, Some(dec!(420_000))); // Executioner
    catalog.add_item(648, 55, Some(dec!(1_200_000))); // Badger

    // Default tier: modules, one of them unpriced to exercise the
    // fallback base price
    catalog.add_item(11399, 85, Some(dec!(120_000)));
    catalog.add_item(21922, 255, None);

    let topology = Arc::new(InMemoryTopology::new());
    // The Forge: a dense hub system, a quiet one, and one with no
    // stations at all (sampled but skipped, visible in the logs)
    topology.add_system(10000002, 30000142, vec![60003760, 60003761, 60003762, 60003763]);
    topology.add_system(10000002, 30000144, vec![60004588]);
    topology.add_system(10000002, 30000145, vec![]);
    // Heimatar and Domain
    topology.add_system(10000030, 30002510, vec![60004594, 60004595]);
    topology.add_system(10000043, 30002187, vec![60008494, 60008497]);

    log::info!(
        "Demo universe ready: {} items, {} systems",
        catalog.len(),
        topology.list_systems().len()
    );

    DemoUniverse {
        catalog,
        topology,
        store: Arc::new(InMemoryOrderStore::new()),
    }
}

/// Wire a manager to the universe's collaborators
pub fn build_manager(config: BotConfig, universe: &DemoUniverse) -> MarketBotMgr {
    MarketBotMgr::new(
        config,
        universe.catalog.clone(),
        universe.topology.clone(),
        universe.store.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hermes_ports::{Catalog, Topology};

    #[test]
    fn test_demo_universe_covers_every_quantity_tier() {
        let universe = build_demo_universe();
        let config = BotConfig::default();

        let categories: Vec<_> = [34, 587, 11399]
            .iter()
            .map(|id| universe.catalog.lookup(*id).unwrap().category_id)
            .collect();
        assert!(config.quantity.bulk_categories.contains(&categories[0]));
        assert!(config.quantity.mid_categories.contains(&categories[1]));
        assert!(!config.quantity.bulk_categories.contains(&categories[2]));
        assert!(!config.quantity.mid_categories.contains(&categories[2]));
    }

    #[test]
    fn test_manager_initializes_against_demo_universe() {
        // The default fallback item must exist and be eligible, or
        // initialization refuses to arm the bot
        let universe = build_demo_universe();
        let mut mgr = build_manager(BotConfig::default(), &universe);
        assert!(mgr.initialize().is_ok());
    }

    #[test]
    fn test_demo_topology_reports_stationless_system() {
        let universe = build_demo_universe();
        assert_eq!(universe.topology.list_stations(30000145), Some(vec![]));
    }
}
