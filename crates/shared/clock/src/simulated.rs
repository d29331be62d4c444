use chrono::Duration;
use hermes_core::Timestamp;
use hermes_ports::Clock;
use std::sync::Mutex;

/// Settable clock for tests and offline simulation
///
/// Time only moves when `set_time` or `advance` is called, so test
/// scenarios around deadlines and expiry are fully deterministic.
pub struct SimulatedClock {
    current: Mutex<Timestamp>,
}

impl SimulatedClock {
    /// Create a clock frozen at `initial`
    pub fn new(initial: Timestamp) -> Self {
        Self {
            current: Mutex::new(initial),
        }
    }

    /// Jump to an explicit instant
    pub fn set_time(&self, time: Timestamp) {
        let mut current = self.current.lock().unwrap();
        *current = time;
    }

    /// Move the clock forward by `duration`
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap();
        *current += duration;
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> Timestamp {
        *self.current.lock().unwrap()
    }

    fn name(&self) -> &str {
        "SimulatedClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_simulated_clock_only_moves_explicitly() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let clock = SimulatedClock::new(start);

        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start);

        clock.advance(Duration::minutes(20));
        assert_eq!(clock.now(), start + Duration::minutes(20));

        let later = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
        clock.set_time(later);
        assert_eq!(clock.now(), later);
    }
}
