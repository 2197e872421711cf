use std::time::Duration;

use tracing::{debug, trace};

use crate::clock_pair::ClockPair;
use crate::pal::PlatformFacade;
use crate::{Error, Report, ReportStyle, Result, Snapshot};

/// Lifecycle state of a [`Timer`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum TimerState {
    /// The timer has never been started. Queries fail with [`Error::NotStarted`].
    Undefined,

    /// An interval is open and will be added to the totals when the timer stops.
    Running,

    /// No interval is open. The totals are stable.
    Stopped,
}

/// Measures wall-clock time and process processor time over one or more intervals.
///
/// A timer starts measuring when created. Every interval between a start and a stop is added to
/// two running totals, one per clock. The totals survive any number of stop/start cycles until
/// the timer is reset, which makes one timer suitable for accumulating the cost of a single
/// phase inside a loop:
///
/// ```
/// use dual_timer::{ReportStyle, Timer};
///
/// let mut grand_total = Timer::new();
/// let mut phase = Timer::new();
///
/// for i in 0..10_u64 {
///     phase.start_slice();
///     std::hint::black_box((0..i * 1000).sum::<u64>());
///     phase.stop();
/// }
///
/// assert_eq!(phase.start_count(), 11);
/// println!("{}", phase.report(ReportStyle::Milliseconds).unwrap());
/// println!("{}", grand_total.report(ReportStyle::Milliseconds).unwrap());
/// ```
///
/// Reading the totals with [`real_time()`](Self::real_time), [`cpu_time()`](Self::cpu_time) or
/// [`report()`](Self::report) stops a running timer first. Use [`snapshot()`](Self::snapshot) to
/// peek at the totals without stopping.
///
/// A timer is owned by one thread at a time. Threads that need to measure their own work
/// should each use their own timer.
#[derive(Debug)]
pub struct Timer {
    platform: PlatformFacade,
    state: TimerState,

    // Clock readings taken at the most recent start and stop.
    start: ClockPair,
    stop: ClockPair,

    total: ClockPair,
    start_count: u64,
}

impl Timer {
    /// Creates a timer that is already running.
    ///
    /// # Examples
    ///
    /// ```
    /// use dual_timer::{Timer, TimerState};
    ///
    /// let timer = Timer::new();
    /// assert_eq!(timer.state(), TimerState::Running);
    /// assert_eq!(timer.start_count(), 1);
    /// ```
    #[expect(
        clippy::new_without_default,
        reason = "a default value that silently starts measuring would be surprising"
    )]
    #[must_use]
    pub fn new() -> Self {
        Self::with_platform(PlatformFacade::real())
    }

    /// Creates a timer that has not been started.
    ///
    /// Until [`start()`](Self::start) or [`start_slice()`](Self::start_slice) is called, reading
    /// the totals or resuming fails with [`Error::NotStarted`].
    #[must_use]
    pub fn unstarted() -> Self {
        Self::unstarted_with_platform(PlatformFacade::real())
    }

    pub(crate) fn with_platform(platform: PlatformFacade) -> Self {
        let mut timer = Self::unstarted_with_platform(platform);
        timer.start();
        timer
    }

    pub(crate) fn unstarted_with_platform(platform: PlatformFacade) -> Self {
        Self {
            platform,
            state: TimerState::Undefined,
            start: ClockPair::ZERO,
            stop: ClockPair::ZERO,
            total: ClockPair::ZERO,
            start_count: 0,
        }
    }

    /// Clears the totals and the start count, then starts a fresh interval.
    pub fn start(&mut self) {
        self.state = TimerState::Undefined;
        self.total = ClockPair::ZERO;
        self.start_count = 0;

        trace!("timer reset by start");

        self.start_slice();
    }

    /// Starts an interval without clearing the totals.
    ///
    /// Each call counts as one slice in [`start_count()`](Self::start_count). If the timer is
    /// already running, the open interval keeps its original start and only the count grows.
    pub fn start_slice(&mut self) {
        if self.state != TimerState::Running {
            self.start = ClockPair::read(&self.platform);
        }

        self.state = TimerState::Running;
        self.start_count = self.start_count.checked_add(1).expect(
            "timer start count overflows u64 - this indicates an unrealistic scenario",
        );

        trace!(start_count = self.start_count, "timer started");
    }

    /// Ends the open interval, adding its length to the totals.
    ///
    /// Stopping a timer that is not running only refreshes the stop reading.
    pub fn stop(&mut self) {
        self.stop = ClockPair::read(&self.platform);

        if self.state == TimerState::Running {
            self.total = self.total.plus(self.stop.since(self.start));
        }

        self.state = TimerState::Stopped;

        trace!(
            real_total = ?self.total.real,
            cpu_total = ?self.total.cpu,
            "timer stopped"
        );
    }

    /// Resumes a stopped timer as if the preceding stop had not happened.
    ///
    /// The time between the stop and the resume is measured too: a later stop produces the same
    /// totals as one uninterrupted interval would have. Resuming a running timer does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] if the timer has never been started.
    pub fn resume(&mut self) -> Result<()> {
        match self.state {
            TimerState::Undefined => return Err(Error::NotStarted),
            TimerState::Running => {}
            TimerState::Stopped => {
                // The stop already added everything up to its own reading, so the reopened
                // interval continues from there.
                self.start = self.stop;
                self.state = TimerState::Running;

                trace!("timer resumed");
            }
        }

        Ok(())
    }

    /// Accumulated wall-clock time. Stops the timer first if it is running.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] if the timer has never been started.
    pub fn real_time(&mut self) -> Result<Duration> {
        self.stop_for_query()?;
        Ok(self.total.real)
    }

    /// Accumulated processor time of the process. Stops the timer first if it is running.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] if the timer has never been started.
    pub fn cpu_time(&mut self) -> Result<Duration> {
        self.stop_for_query()?;
        Ok(self.total.cpu)
    }

    fn stop_for_query(&mut self) -> Result<()> {
        match self.state {
            TimerState::Undefined => Err(Error::NotStarted),
            TimerState::Running => {
                self.stop();
                Ok(())
            }
            TimerState::Stopped => Ok(()),
        }
    }

    /// Reads the totals without changing the state of the timer.
    ///
    /// If the timer is running, the open interval is included up to the current clock readings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] if the timer has never been started.
    pub fn snapshot(&self) -> Result<Snapshot> {
        let total = match self.state {
            TimerState::Undefined => return Err(Error::NotStarted),
            TimerState::Running => self
                .total
                .plus(ClockPair::read(&self.platform).since(self.start)),
            TimerState::Stopped => self.total,
        };

        Ok(Snapshot::new(total.real, total.cpu, self.start_count))
    }

    /// Number of starts since the totals were last cleared by [`start()`](Self::start).
    ///
    /// A value above one means the timer was reused to accumulate several slices.
    #[must_use]
    pub fn start_count(&self) -> u64 {
        self.start_count
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Whether an interval is open.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Stops the timer and sets both totals to zero. The start count is kept.
    pub fn reset(&mut self) {
        self.reset_cpu_time(Duration::ZERO);
        self.reset_real_time(Duration::ZERO);
    }

    /// Stops the timer and overwrites the processor time total.
    pub fn reset_cpu_time(&mut self, value: Duration) {
        self.stop();
        self.total.cpu = value;

        debug!(?value, "timer processor time total overwritten");
    }

    /// Stops the timer and overwrites the wall-clock time total.
    pub fn reset_real_time(&mut self, value: Duration) {
        self.stop();
        self.total.real = value;

        debug!(?value, "timer wall-clock time total overwritten");
    }

    /// Formats the totals. Stops the timer first if it is running.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] if the timer has never been started.
    pub fn report(&mut self, style: ReportStyle) -> Result<Report> {
        self.stop_for_query()?;
        Ok(self.snapshot()?.report(style))
    }

    /// Prints the report to stdout. Stops the timer first if it is running.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStarted`] if the timer has never been started.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print(&mut self, style: ReportStyle) -> Result<()> {
        println!("{}", self.report(style)?);
        Ok(())
    }
}
