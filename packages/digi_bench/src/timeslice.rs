//! Timeslice reader simulation.
//!
//! A timeslice holds one vector of raw values per detector component. The reader turns each
//! component into digis and the digis of all components end up in one global vector, which is
//! then sorted and handed to the analysis. The experiment compares two reader interfaces: one
//! that returns a fresh vector per component, which the caller appends to the global vector, and
//! one that appends to the global vector directly.

use std::fmt;
use std::io::Write;
use std::mem;

use dual_timer::{ReportStyle, Timer};
use tracing::debug;

use crate::{Result, as_value};

/// Raw values of one detector component.
pub type Component = Vec<u64>;

/// All components received in one time period.
pub type Timeslice = Vec<Component>;

/// Values produced by the reader.
pub type Digis = Vec<u64>;

/// Size of the synthetic timeslice.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Shape {
    components: usize,
    elements: usize,
}

impl Shape {
    /// Number of components in a full-size experiment.
    pub const DEFAULT_COMPONENTS: usize = 1000;

    /// Number of values per component in a full-size experiment.
    pub const DEFAULT_ELEMENTS: usize = 200_000;

    /// Creates a shape with `components` components of `elements` values each.
    #[must_use]
    pub fn new(components: usize, elements: usize) -> Self {
        Self {
            components,
            elements,
        }
    }

    /// Number of components.
    #[must_use]
    pub fn components(&self) -> usize {
        self.components
    }

    /// Number of values per component.
    #[must_use]
    pub fn elements(&self) -> usize {
        self.elements
    }

    /// Number of values in the whole timeslice.
    #[must_use]
    pub fn total_elements(&self) -> usize {
        self.components
            .checked_mul(self.elements)
            .expect(
                "timeslice element count overflows usize - this indicates an unrealistic scenario",
            )
    }

    /// Size of the raw values of the whole timeslice, in bytes.
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.total_elements()
            .checked_mul(mem::size_of::<u64>())
            .expect("timeslice size overflows usize - this indicates an unrealistic scenario")
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COMPONENTS, Self::DEFAULT_ELEMENTS)
    }
}

/// How the reader delivers digis into the global vector.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ReaderMode {
    /// The reader returns a new vector per component, which is then appended to the global one.
    CreateThenAppend,

    /// The reader appends to the global vector itself.
    AppendDirectly,
}

impl ReaderMode {
    /// All modes, in the order of their mode numbers.
    pub const ALL: [Self; 2] = [Self::CreateThenAppend, Self::AppendDirectly];

    /// Looks up a mode by its number (0 or 1).
    #[must_use]
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            0 => Some(Self::CreateThenAppend),
            1 => Some(Self::AppendDirectly),
            _ => None,
        }
    }

    /// The number of this mode.
    #[must_use]
    pub fn number(self) -> u32 {
        match self {
            Self::CreateThenAppend => 0,
            Self::AppendDirectly => 1,
        }
    }
}

impl fmt::Display for ReaderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateThenAppend => write!(f, "create vector, then append"),
            Self::AppendDirectly => write!(f, "append directly"),
        }
    }
}

/// Invents a timeslice in which every component holds the values `0..elements`.
#[must_use]
pub fn create_timeslice(shape: Shape) -> Timeslice {
    (0..shape.components())
        .map(|_| (0..shape.elements()).map(as_value).collect())
        .collect()
}

/// Reads one component into a new vector of digis.
#[must_use]
pub fn read_component(component: &[u64]) -> Digis {
    let mut digis = Digis::with_capacity(component.len());
    read_component_into(component, &mut digis);
    digis
}

/// Reads one component, appending its digis to an existing vector.
pub fn read_component_into(component: &[u64], digis: &mut Digis) {
    digis.extend(component.iter().map(|value| value.wrapping_add(1)));
}

/// Sums all digis, wrapping on overflow.
#[must_use]
pub fn analyze(digis: &[u64]) -> u64 {
    digis.iter().fold(0, |sum, digi| sum.wrapping_add(*digi))
}

/// Runs the whole readout chain in the given mode, reporting the cost of every phase.
///
/// Returns the analysis result, which is also written to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run(
    shape: Shape,
    mode: ReaderMode,
    style: ReportStyle,
    out: &mut impl Write,
) -> Result<u64> {
    debug!(?shape, ?mode, "timeslice run starting");

    writeln!(out, "- receive (invent) a new timeslice")?;
    let mut timer = Timer::new();
    let timeslice = create_timeslice(shape);
    writeln!(out, "{}", timer.report(style)?)?;

    writeln!(out, "- reserve global digi vector")?;
    timer.start();
    let mut digis = Digis::with_capacity(shape.total_elements());
    writeln!(out, "{}", timer.report(style)?)?;

    writeln!(out, "- run the reader ({mode})")?;
    match mode {
        ReaderMode::CreateThenAppend => {
            let mut reader_only = Timer::unstarted();
            let mut vector_append = Timer::unstarted();

            timer.start();
            for component in &timeslice {
                reader_only.start_slice();
                let component_digis = read_component(component);
                reader_only.stop();

                vector_append.start_slice();
                digis.extend_from_slice(&component_digis);
                vector_append.stop();
            }
            writeln!(out, "{}", timer.report(style)?)?;
            writeln!(out, "{}", reader_only.report(style)?)?;
            writeln!(out, "{}", vector_append.report(style)?)?;
        }
        ReaderMode::AppendDirectly => {
            timer.start();
            for component in &timeslice {
                read_component_into(component, &mut digis);
            }
            writeln!(out, "{}", timer.report(style)?)?;
        }
    }

    writeln!(out, "- sort the digis")?;
    timer.start();
    digis.sort_unstable();
    writeln!(out, "{}", timer.report(style)?)?;

    writeln!(out, "- forward the digis to the analysis")?;
    timer.start();
    let result = analyze(&digis);
    writeln!(out, "{}", timer.report(style)?)?;
    writeln!(out, "- analysis result: {result}")?;

    debug!(result, "timeslice run finished");

    Ok(result)
}

/// Runs every mode in turn, each introduced by a `=== RUN MODE n ===` banner.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_all(shape: Shape, style: ReportStyle, out: &mut impl Write) -> Result<()> {
    for mode in ReaderMode::ALL {
        writeln!(out, "=== RUN MODE {} ===", mode.number())?;
        run(shape, mode, style, out)?;
    }

    Ok(())
}
