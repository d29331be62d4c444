use chrono::{DateTime, Utc};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Tradeable item type identifier
pub type ItemTypeId = u32;

/// Item category identifier (groups items for eligibility and sizing)
pub type CategoryId = u32;

/// Region identifier (top of the venue hierarchy)
pub type RegionId = u32;

/// Solar system identifier
pub type SolarSystemId = u32;

/// Station identifier (the venue an order is listed at)
pub type StationId = u32;

/// Owner identity of a market order (player or automated agent)
pub type OwnerId = u32;

/// Store-assigned identifier of a persisted market order
pub type OrderId = u64;
