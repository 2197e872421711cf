use std::time::Duration;

use crate::pal::Platform;

/// One value per clock: either a pair of readings taken together or a pair of durations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ClockPair {
    pub(crate) real: Duration,
    pub(crate) cpu: Duration,
}

impl ClockPair {
    pub(crate) const ZERO: Self = Self {
        real: Duration::ZERO,
        cpu: Duration::ZERO,
    };

    /// Reads both clocks of the platform, wall clock first.
    pub(crate) fn read(platform: &impl Platform) -> Self {
        Self {
            real: platform.real_time(),
            cpu: platform.cpu_time(),
        }
    }

    /// The interval from `earlier` to `self`, per clock.
    ///
    /// A clock that went backwards yields a zero interval instead of a negative one.
    #[must_use]
    pub(crate) fn since(self, earlier: Self) -> Self {
        Self {
            real: self.real.saturating_sub(earlier.real),
            cpu: self.cpu.saturating_sub(earlier.cpu),
        }
    }

    /// Per-clock sum, pinned at `Duration::MAX` instead of overflowing.
    #[must_use]
    pub(crate) fn plus(self, other: Self) -> Self {
        Self {
            real: self.real.saturating_add(other.real),
            cpu: self.cpu.saturating_add(other.cpu),
        }
    }
}
