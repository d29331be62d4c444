use hermes_core::{RegionId, SolarSystemId, StationId};

/// Port for the spatial topology source (regions, systems, stations)
pub trait Topology: Send + Sync {
    /// All known solar systems
    fn list_systems(&self) -> Vec<SolarSystemId>;

    /// Stations in a system; `None` when the system is unknown.
    /// A known system may legitimately have no stations.
    fn list_stations(&self, system_id: SolarSystemId) -> Option<Vec<StationId>>;

    /// The region a system belongs to
    fn region_of(&self, system_id: SolarSystemId) -> Option<RegionId>;
}
