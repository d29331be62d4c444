use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can disable the market bot
///
/// Only initialization can fail fatally. Venue- and order-level problems
/// during a cycle are logged and counted, never surfaced as errors.
#[derive(Error, Debug)]
pub enum MarketBotError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Market bot manager is not initialized")]
    NotInitialized,
}

pub type Result<T> = std::result::Result<T, MarketBotError>;
