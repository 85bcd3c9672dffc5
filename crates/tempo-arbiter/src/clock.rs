//! Clock sinks - the ambient simulation-rate variable as an injected capability

use std::cell::Cell;
use std::sync::Arc;

use parking_lot::RwLock;

/// Destination for the effective simulation rate
///
/// The host environment owns the actual clock; the arbiter only writes the
/// winning rate through this interface. Strict single-writer discipline:
/// only the arbiter calls `set_rate`, every other collaborator reads.
pub trait ClockSink {
    /// Current simulation rate multiplier
    fn rate(&self) -> f64;

    /// Overwrite the simulation rate multiplier
    fn set_rate(&self, rate: f64);
}

/// Single-threaded clock sink
pub struct LocalClock {
    rate: Cell<f64>,
}

impl LocalClock {
    /// Create a clock running at the given rate
    pub fn new(initial: f64) -> Self {
        LocalClock {
            rate: Cell::new(initial),
        }
    }
}

impl Default for LocalClock {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl ClockSink for LocalClock {
    fn rate(&self) -> f64 {
        self.rate.get()
    }

    fn set_rate(&self, rate: f64) {
        self.rate.set(rate);
    }
}

/// Cloneable thread-safe clock sink
///
/// All handles share one rate value, so host reader threads keep a clone
/// while the arbiter keeps the writer role.
#[derive(Clone)]
pub struct SharedClock {
    rate: Arc<RwLock<f64>>,
}

impl SharedClock {
    /// Create a clock running at the given rate
    pub fn new(initial: f64) -> Self {
        SharedClock {
            rate: Arc::new(RwLock::new(initial)),
        }
    }
}

impl Default for SharedClock {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl ClockSink for SharedClock {
    fn rate(&self) -> f64 {
        *self.rate.read()
    }

    fn set_rate(&self, rate: f64) {
        *self.rate.write() = rate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_clock_read_write() {
        let clock = LocalClock::default();
        assert_eq!(clock.rate(), 1.0);

        clock.set_rate(0.5);
        assert_eq!(clock.rate(), 0.5);
    }

    #[test]
    fn test_shared_clock_handles_share_state() {
        let writer = SharedClock::new(1.0);
        let reader = writer.clone();

        writer.set_rate(0.25);
        assert_eq!(reader.rate(), 0.25);
    }
}
