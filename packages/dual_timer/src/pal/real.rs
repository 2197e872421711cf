//! Real platform implementation using the operating system clocks.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use cpu_time::ProcessTime;

use crate::pal::abstractions::Platform;

/// Real implementation of the platform abstraction.
///
/// Wall-clock time comes from the system calendar clock, processor time from the `cpu_time`
/// package, which reports a [`Duration`] directly and needs no clock tick calibration.
#[derive(Debug, Clone)]
pub(crate) struct RealPlatform;

impl Platform for RealPlatform {
    fn real_time(&self) -> Duration {
        // A system clock set before the epoch reads as zero. Intervals are computed with
        // saturating arithmetic, so such a reading cannot produce a negative duration.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
    }

    fn cpu_time(&self) -> Duration {
        ProcessTime::now().as_duration()
    }
}
