//! Hermes Ports
//!
//! Port definitions (traits) for the Hermes market bot.
//! These define the boundaries between the bot engine and its external
//! collaborators: the item catalog, the spatial topology, the order
//! store, and the time source.

mod catalog;
mod clock;
mod error;
mod store;
mod topology;

pub use catalog::{Catalog, ItemEntry};
pub use clock::Clock;
pub use error::{StoreError, StoreResult};
pub use store::OrderStore;
pub use topology::Topology;
