//! Scenario harness - scripted subsystem toggling against a live arbiter
//!
//! Models the way gameplay subsystems actually drive the arbiter: each
//! subsystem owns one request id and flips it on and off over time. The
//! driver applies scripted or seeded-random toggle sequences and reports the
//! rate observed at the clock sink after every step.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tempo_arbiter::{ClockSink, ScaleArbiter, SharedClock};
use tempo_core::{Priority, TimeScale};

/// One subsystem that pushes its request when enabled, removes it when disabled
#[derive(Clone, Debug)]
pub struct SubsystemToggle {
    pub id: &'static str,
    pub scale: TimeScale,
    pub priority: Priority,
    active: bool,
}

impl SubsystemToggle {
    pub fn new(id: &'static str, scale: f64, priority: i32) -> Self {
        SubsystemToggle {
            id,
            scale: TimeScale::new(scale),
            priority: Priority::new(priority),
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flip the toggle, issuing the matching push or remove
    pub fn flip(&mut self, arbiter: &mut ScaleArbiter) {
        if self.active {
            let _ = arbiter.remove(self.id);
        } else {
            let _ = arbiter.push(self.id, self.scale, self.priority);
        }
        self.active = !self.active;
    }

    /// Remove the request if still active (the shutdown path)
    pub fn shutdown(&mut self, arbiter: &mut ScaleArbiter) {
        if self.active {
            let _ = arbiter.remove(self.id);
            self.active = false;
        }
    }
}

/// Drives an arbiter with a fixed set of subsystem toggles
pub struct ScenarioDriver {
    arbiter: ScaleArbiter,
    clock: SharedClock,
    toggles: Vec<SubsystemToggle>,
}

impl ScenarioDriver {
    pub fn new(toggles: Vec<SubsystemToggle>) -> Self {
        let clock = SharedClock::new(1.0);
        ScenarioDriver {
            arbiter: ScaleArbiter::new(clock.clone()),
            clock,
            toggles,
        }
    }

    /// Driver over the standard subsystem set (pause, slow-motion, hit-stop)
    pub fn standard() -> Self {
        use tempo_core::well_known::*;

        Self::new(vec![
            SubsystemToggle::new(PAUSE, 0.0, BAND_SYSTEM.value()),
            SubsystemToggle::new(SLOW_MOTION, 0.3, BAND_EFFECT.value()),
            SubsystemToggle::new(HIT_STOP, 0.0, BAND_COMBAT.value()),
        ])
    }

    /// Flip the toggle with the given id; returns the rate observed afterwards
    pub fn flip(&mut self, id: &str) -> Option<f64> {
        let toggle = self.toggles.iter_mut().find(|t| t.id == id)?;
        toggle.flip(&mut self.arbiter);
        Some(self.clock.rate())
    }

    /// Apply seeded-random flips; returns the rate observed after each step
    pub fn run_random(&mut self, seed: u64, steps: usize) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut observed = Vec::with_capacity(steps);
        for _ in 0..steps {
            let index = rng.gen_range(0..self.toggles.len());
            self.toggles[index].flip(&mut self.arbiter);
            observed.push(self.clock.rate());
        }
        observed
    }

    /// Disable every active toggle
    pub fn shutdown(&mut self) {
        for toggle in &mut self.toggles {
            toggle.shutdown(&mut self.arbiter);
        }
    }

    /// Rate currently observed at the clock sink
    pub fn observed_rate(&self) -> f64 {
        self.clock.rate()
    }

    pub fn arbiter(&self) -> &ScaleArbiter {
        &self.arbiter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use tempo_core::well_known::*;

    #[test]
    fn test_pause_dominates_slow_motion() {
        let mut driver = ScenarioDriver::standard();

        assert_eq!(driver.flip(SLOW_MOTION), Some(0.3));
        assert_eq!(driver.flip(PAUSE), Some(0.0));

        // Releasing pause falls back to the still-active slow-motion
        assert_eq!(driver.flip(PAUSE), Some(0.3));
        assert_eq!(driver.flip(SLOW_MOTION), Some(1.0));
    }

    #[test]
    fn test_hit_stop_overrides_slow_motion() {
        let mut driver = ScenarioDriver::standard();

        driver.flip(SLOW_MOTION);
        driver.flip(HIT_STOP);

        // Combat band outranks the cosmetic effect band
        assert_eq!(driver.observed_rate(), 0.0);

        driver.flip(HIT_STOP);
        assert_eq!(driver.observed_rate(), 0.3);
    }

    #[test]
    fn test_shutdown_releases_everything() {
        let mut driver = ScenarioDriver::standard();

        driver.flip(PAUSE);
        driver.flip(SLOW_MOTION);
        driver.flip(HIT_STOP);
        driver.shutdown();

        assert_eq!(driver.observed_rate(), 1.0);
        assert!(driver.arbiter().is_empty());
    }

    #[test]
    fn test_unknown_toggle_ignored() {
        let mut driver = ScenarioDriver::standard();
        assert_eq!(driver.flip("NoSuchSystem"), None);
    }

    #[test]
    fn test_random_sequence_keeps_invariants() {
        let mut driver = ScenarioDriver::standard();
        driver.run_random(0xE1A2A, 200);

        // No duplicate ids survive any interleaving
        let mut seen = HashSet::new();
        for request in driver.arbiter().requests() {
            assert!(seen.insert(request.id.clone()));
        }

        // The sink always carries the winner's scale (or the default)
        let expected = driver
            .arbiter()
            .winner()
            .map(|r| r.scale.value())
            .unwrap_or(1.0);
        assert_eq!(driver.observed_rate(), expected);
    }

    #[test]
    fn test_random_sequence_is_deterministic() {
        let mut a = ScenarioDriver::standard();
        let mut b = ScenarioDriver::standard();

        assert_eq!(a.run_random(42, 100), b.run_random(42, 100));
    }
}
