//! Hermes runner - composition root
//!
//! Builds the demo universe, loads the bot configuration and drives
//! market bot cycles from a timer tick. Nothing here is process-global;
//! the manager instance owns all cross-cycle state, so several
//! independent bots could run side by side in one process.

mod bootstrap;

use log::{error, info};
use std::time::Duration;

use hermes_clock::SystemClock;
use hermes_marketbot::config::{self, BotConfig};
use hermes_marketbot::CycleOutcome;
use hermes_ports::Clock;

/// How often the tick source fires. Cycles run far less often; the
/// manager's deadline gate decides when a tick becomes a cycle.
const TICK_SECONDS: u64 = 30;

#[tokio::main]
async fn main() {
    env_logger::init();

    // Optional JSON config path as the only argument
    let config = match std::env::args().nth(1) {
        Some(path) => match config::load_config(&path) {
            Ok(config) => {
                info!("Loaded bot config from {path}");
                config
            }
            Err(e) => {
                error!("Failed to load bot config from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => BotConfig::default(),
    };

    let universe = bootstrap::build_demo_universe();
    let mut mgr = bootstrap::build_manager(config, &universe);
    if let Err(e) = mgr.initialize() {
        error!("Market bot initialization failed: {e}");
        std::process::exit(1);
    }

    let clock = SystemClock::new();
    let mut ticker = tokio::time::interval(Duration::from_secs(TICK_SECONDS));
    info!("Runner started, ticking every {TICK_SECONDS}s");

    loop {
        ticker.tick().await;
        match mgr.run_cycle(clock.now()) {
            CycleOutcome::Completed(summary) => {
                info!(
                    "Cycle done: {} orders placed, {} expired removed, store holds {} orders",
                    summary.orders_placed(),
                    summary.expired_removed,
                    universe.store.len()
                );
            }
            CycleOutcome::NotDue => {}
            CycleOutcome::NotInitialized => {
                error!("Manager lost initialization, stopping runner");
                break;
            }
        }
    }
}
