mod order;
mod side;

pub use order::{MarketOrder, OrderRange, BOT_OWNER_ID};
pub use side::Side;
