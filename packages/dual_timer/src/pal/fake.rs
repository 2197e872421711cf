//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::pal::abstractions::Platform;

const ERR_POISONED_FAKE: &str = "FakePlatform state lock should not be poisoned";

/// Internal state for the fake platform that can be shared between clones.
#[derive(Debug)]
struct FakePlatformState {
    real_time: Duration,
    cpu_time: Duration,
}

/// Fake implementation of the platform abstraction for testing.
///
/// Multiple clones of the same `FakePlatform` share the same clock readings, so a test can hand
/// one clone to a timer and keep another to move time forward (or backward) between operations.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    state: Arc<Mutex<FakePlatformState>>,
}

impl FakePlatform {
    /// Creates a new fake platform with both clocks at zero.
    pub(crate) fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakePlatformState {
                real_time: Duration::ZERO,
                cpu_time: Duration::ZERO,
            })),
        }
    }

    /// Sets the wall-clock reading.
    pub(crate) fn set_real_time(&self, time: Duration) {
        self.state.lock().expect(ERR_POISONED_FAKE).real_time = time;
    }

    /// Sets the processor time reading.
    pub(crate) fn set_cpu_time(&self, time: Duration) {
        self.state.lock().expect(ERR_POISONED_FAKE).cpu_time = time;
    }

    /// Moves both clocks forward by the given amounts.
    pub(crate) fn advance(&self, real: Duration, cpu: Duration) {
        let mut state = self.state.lock().expect(ERR_POISONED_FAKE);
        state.real_time = state
            .real_time
            .checked_add(real)
            .expect("fake wall clock overflows Duration");
        state.cpu_time = state
            .cpu_time
            .checked_add(cpu)
            .expect("fake processor clock overflows Duration");
    }
}

impl Platform for FakePlatform {
    fn real_time(&self) -> Duration {
        self.state.lock().expect(ERR_POISONED_FAKE).real_time
    }

    fn cpu_time(&self) -> Duration {
        self.state.lock().expect(ERR_POISONED_FAKE).cpu_time
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn initializes_with_zero_time() {
        let platform = FakePlatform::new();
        assert_eq!(platform.real_time(), Duration::ZERO);
        assert_eq!(platform.cpu_time(), Duration::ZERO);
    }

    #[test]
    fn advance_moves_both_clocks() {
        let platform = FakePlatform::new();
        platform.set_real_time(Duration::from_millis(100));

        platform.advance(Duration::from_millis(50), Duration::from_millis(20));

        assert_eq!(platform.real_time(), Duration::from_millis(150));
        assert_eq!(platform.cpu_time(), Duration::from_millis(20));
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        platform1.set_real_time(Duration::from_millis(100));
        assert_eq!(platform2.real_time(), Duration::from_millis(100));

        platform2.set_cpu_time(Duration::from_millis(200));
        assert_eq!(platform1.cpu_time(), Duration::from_millis(200));
    }
}
