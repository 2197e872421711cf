//! Human-readable timer reports.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3600;

/// Precision used for the wall-clock part of a [`Report`].
///
/// Processor time is always reported with millisecond precision.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ReportStyle {
    /// `H:MM:SS`, fractional seconds truncated.
    #[default]
    Seconds,

    /// `H:MM:SS.mmm`
    Milliseconds,

    /// `H:MM:SS.mmmmmm`
    Microseconds,
}

impl ReportStyle {
    /// Selects a style from a single-character option string.
    ///
    /// Only the first character matters: `m` selects milliseconds, `u` selects microseconds and
    /// anything else (including an empty string) selects whole seconds.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_timer::ReportStyle;
    ///
    /// assert_eq!(ReportStyle::from_option("m"), ReportStyle::Milliseconds);
    /// assert_eq!(ReportStyle::from_option("u"), ReportStyle::Microseconds);
    /// assert_eq!(ReportStyle::from_option(""), ReportStyle::Seconds);
    /// ```
    #[must_use]
    pub fn from_option(option: &str) -> Self {
        match option.chars().next() {
            Some('m') => Self::Milliseconds,
            Some('u') => Self::Microseconds,
            _ => Self::Seconds,
        }
    }
}

impl FromStr for ReportStyle {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_option(s))
    }
}

/// Accumulated totals of a timer at one point in time.
///
/// Obtained from [`Timer::snapshot()`](crate::Timer::snapshot), which does not stop a running
/// timer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Snapshot {
    real_time: Duration,
    cpu_time: Duration,
    slices: u64,
}

impl Snapshot {
    pub(crate) fn new(real_time: Duration, cpu_time: Duration, slices: u64) -> Self {
        Self {
            real_time,
            cpu_time,
            slices,
        }
    }

    /// Accumulated wall-clock time.
    #[must_use]
    pub fn real_time(&self) -> Duration {
        self.real_time
    }

    /// Accumulated processor time of the process.
    #[must_use]
    pub fn cpu_time(&self) -> Duration {
        self.cpu_time
    }

    /// How many times the timer was started since it was last reset.
    #[must_use]
    pub fn slices(&self) -> u64 {
        self.slices
    }

    /// Formats the snapshot in the given style.
    #[must_use]
    pub fn report(&self, style: ReportStyle) -> Report {
        Report {
            snapshot: *self,
            style,
        }
    }
}

/// A formatted view of a timer's totals, rendered through [`Display`](fmt::Display).
///
/// # Examples
///
/// ```
/// use dual_timer::{ReportStyle, Timer};
///
/// let mut timer = Timer::new();
/// std::hint::black_box((0..1000).sum::<u64>());
///
/// let report = timer.report(ReportStyle::Milliseconds).unwrap();
/// assert!(report.to_string().starts_with("Real time 0:00:"));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Report {
    snapshot: Snapshot,
    style: ReportStyle,
}

impl Report {
    /// The totals this report renders.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot
    }

    /// The style this report renders in.
    #[must_use]
    pub fn style(&self) -> ReportStyle {
        self.style
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hours, minutes, seconds) = split_clock(self.snapshot.real_time);

        match self.style {
            ReportStyle::Seconds => write!(
                f,
                "Real time {hours}:{minutes:02}:{:02}",
                seconds.as_secs()
            )?,
            ReportStyle::Milliseconds => write!(
                f,
                "Real time {hours}:{minutes:02}:{:06.3}",
                seconds.as_secs_f64()
            )?,
            ReportStyle::Microseconds => write!(
                f,
                "Real time {hours}:{minutes:02}:{:09.6}",
                seconds.as_secs_f64()
            )?,
        }

        write!(f, ", CP time {:.3}", self.snapshot.cpu_time.as_secs_f64())?;

        if self.snapshot.slices > 1 {
            write!(f, ", {} slices", self.snapshot.slices)?;
        }

        Ok(())
    }
}

/// Splits a duration into whole hours, whole minutes within the hour and the remaining seconds.
fn split_clock(elapsed: Duration) -> (u64, u64, Duration) {
    let whole_seconds = elapsed.as_secs();

    let hours = whole_seconds.div_euclid(SECONDS_PER_HOUR);
    let minutes = whole_seconds
        .rem_euclid(SECONDS_PER_HOUR)
        .div_euclid(SECONDS_PER_MINUTE);
    let seconds = Duration::new(
        whole_seconds.rem_euclid(SECONDS_PER_MINUTE),
        elapsed.subsec_nanos(),
    );

    (hours, minutes, seconds)
}
