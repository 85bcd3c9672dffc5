//! Time-scale value type
//!
//! A time scale is the multiplier applied to the simulation's notion of
//! elapsed time per real-time tick: 0 = frozen, 1 = unscaled, values in
//! (0, 1) slow the simulation down, values above 1 speed it up.

use std::fmt;

/// Simulation rate multiplier, always non-negative
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct TimeScale(f64);

impl TimeScale {
    /// Fully frozen simulation
    pub const FROZEN: TimeScale = TimeScale(0.0);
    /// Unscaled real-time rate
    pub const NORMAL: TimeScale = TimeScale(1.0);

    /// Create a scale, clamping negative (and NaN) input to zero
    #[inline]
    pub fn new(value: f64) -> Self {
        TimeScale(value.max(0.0))
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_frozen(self) -> bool {
        self.0 == 0.0
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        TimeScale::NORMAL
    }
}

impl From<f64> for TimeScale {
    fn from(value: f64) -> Self {
        TimeScale::new(value)
    }
}

impl fmt::Debug for TimeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "×{}", self.0)
    }
}

impl fmt::Display for TimeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
