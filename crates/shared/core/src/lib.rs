//! Hermes Core Domain
//!
//! Pure domain types for the Hermes market bot.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{MarketOrder, OrderRange, Side, BOT_OWNER_ID};
pub use values::{
    CategoryId, ItemTypeId, OrderId, OwnerId, RegionId, SolarSystemId, StationId, Timestamp,
};
