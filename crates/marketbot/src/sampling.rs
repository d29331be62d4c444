//! Venue sampling
//!
//! Picks a bounded random subset of market venues each cycle. Stations
//! are shuffled before truncation so venue selection is not biased
//! toward catalog/list order.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use hermes_core::{SolarSystemId, StationId};
use hermes_ports::Topology;

/// Up to `k` distinct systems, uniformly at random, without replacement
pub fn sample_systems(topology: &dyn Topology, k: usize, rng: &mut StdRng) -> Vec<SolarSystemId> {
    let systems = topology.list_systems();
    systems.choose_multiple(rng, k).copied().collect()
}

/// How many of a system's stations receive orders this side
///
/// `fraction` of the available stations (at least one), clamped by
/// `orders_per_refresh`.
pub fn station_limit(available: usize, fraction: f64, orders_per_refresh: u32) -> usize {
    let by_fraction = ((available as f64 * fraction).floor() as usize).max(1);
    by_fraction.min(orders_per_refresh as usize).min(available)
}

/// Shuffle stations and keep the first `limit`
pub fn sample_stations(
    mut stations: Vec<StationId>,
    limit: usize,
    rng: &mut StdRng,
) -> Vec<StationId> {
    stations.shuffle(rng);
    stations.truncate(limit);
    stations
}
