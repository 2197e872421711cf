//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::time::Duration;

/// Provides the wall-clock and processor time readings a timer is built on.
///
/// Both readings are measured from an arbitrary but fixed reference point, so only the
/// difference between two readings of the same clock is meaningful.
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Gets the current wall-clock time.
    fn real_time(&self) -> Duration;

    /// Gets the processor time (user + system) consumed by the current process so far.
    fn cpu_time(&self) -> Duration;
}
