use serde::{Deserialize, Serialize};

/// Order side (Buy or Sell)
///
/// A buy order is a bid; a sell order is an ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// True for buy orders (the persisted `bid` flag)
    pub fn is_bid(&self) -> bool {
        matches!(self, Side::Buy)
    }
}
