//! Item eligibility selection
//!
//! Draws candidate item ids uniformly and keeps the first one whose
//! category is in the eligibility set. Attempts are bounded: when the
//! eligible fraction of the id space is small or the catalog is sparse,
//! the selector must still terminate, so exhaustion returns a fixed
//! known-good fallback instead of looping.

use log::debug;
use rand::Rng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;

use hermes_core::{CategoryId, ItemTypeId};
use hermes_ports::Catalog;

use crate::config::SelectionConfig;

/// Samples a tradeable, eligible item id
#[derive(Debug, Clone)]
pub struct ItemSelector {
    config: SelectionConfig,
    eligible: BTreeSet<CategoryId>,
}

impl ItemSelector {
    pub fn new(config: SelectionConfig, eligible: BTreeSet<CategoryId>) -> Self {
        Self { config, eligible }
    }

    /// True when the category may be traded by the bot
    pub fn is_eligible(&self, category_id: CategoryId) -> bool {
        self.eligible.contains(&category_id)
    }

    /// Pick an eligible item id, falling back after bounded attempts
    pub fn select(&self, catalog: &dyn Catalog, rng: &mut StdRng) -> ItemTypeId {
        for _ in 0..self.config.max_attempts {
            let candidate = rng.gen_range(self.config.min_item_id..=self.config.max_item_id);
            if let Some(entry) = catalog.lookup(candidate) {
                if self.eligible.contains(&entry.category_id) {
                    return candidate;
                }
            }
        }
        debug!(
            "Item selection exhausted {} attempts, using fallback item {}",
            self.config.max_attempts, self.config.fallback_item_id
        );
        self.config.fallback_item_id
    }
}
