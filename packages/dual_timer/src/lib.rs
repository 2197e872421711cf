#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A stopwatch that measures wall-clock time and processor time side by side.
//!
//! The core type is [`Timer`]. It accumulates the length of every interval between a start and
//! a stop into two totals: real (wall-clock) time and the processor time (user + system)
//! consumed by the whole process. The totals survive stop/start cycles until reset, so a single
//! timer can measure one phase of a loop across many iterations and report how many slices it
//! added up.
//!
//! # Simple usage
//!
//! ```
//! use dual_timer::{ReportStyle, Timer};
//!
//! let mut timer = Timer::new();
//!
//! let mut sum = 0_u64;
//! for i in 0..10_000 {
//!     sum = sum.wrapping_add(i);
//! }
//! std::hint::black_box(sum);
//!
//! // Prints e.g. "Real time 0:00:00.001, CP time 0.001"
//! timer.print(ReportStyle::Milliseconds).unwrap();
//! ```
//!
//! # Accumulating slices
//!
//! ```
//! use dual_timer::{ReportStyle, Timer};
//!
//! let mut reader = Timer::unstarted();
//!
//! for chunk in [10_u64, 20, 30] {
//!     reader.start_slice();
//!     std::hint::black_box((0..chunk).sum::<u64>());
//!     reader.stop();
//! }
//!
//! assert_eq!(reader.start_count(), 3);
//!
//! // Prints e.g. "Real time 0:00:00.000, CP time 0.000, 3 slices"
//! println!("{}", reader.report(ReportStyle::Milliseconds).unwrap());
//! ```
//!
//! # Pausing
//!
//! [`Timer::resume()`] continues a stopped timer as if it had never been stopped. Use
//! [`Timer::start_slice()`] instead to leave the paused time out of the totals.
//!
//! # Threading
//!
//! A timer measures a single timeline. Processor time is that of the whole process, so
//! single-threaded measurement is recommended for meaningful data. Each thread that wants to
//! measure its own work should own a separate timer.

mod clock_pair;
mod error;
mod pal;
mod report;
mod timer;

pub use error::Error;
pub(crate) use error::Result;
pub use report::{Report, ReportStyle, Snapshot};
pub use timer::{Timer, TimerState};
