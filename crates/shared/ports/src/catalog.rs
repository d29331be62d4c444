use hermes_core::{CategoryId, ItemTypeId};
use rust_decimal::Decimal;

/// Catalog entry for a tradeable item type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEntry {
    /// Category the item belongs to (eligibility and sizing are per category)
    pub category_id: CategoryId,
    /// Reference price; `None` when the catalog carries no price for the item
    pub base_price: Option<Decimal>,
}

/// Port for the item/catalog data source
pub trait Catalog: Send + Sync {
    /// Look up an item type; `None` when the id is not in the catalog
    fn lookup(&self, item_id: ItemTypeId) -> Option<ItemEntry>;
}
