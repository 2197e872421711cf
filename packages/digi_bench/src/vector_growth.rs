//! Compares ways of producing many vectors of integers.
//!
//! Every strategy ends up with `vectors × elements` values, either spread over `vectors`
//! separate vectors or concatenated into one. What differs is who allocates, whether capacity
//! is reserved up front and whether values are copied on the way out of a function.

use std::hint::black_box;
use std::io::Write;
use std::mem;

use dual_timer::{ReportStyle, Timer};
use tracing::debug;

use crate::{Result, as_value};

/// Size of the data each strategy produces.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Shape {
    vectors: usize,
    elements: usize,
}

impl Shape {
    /// Number of vectors in a full-size experiment.
    pub const DEFAULT_VECTORS: usize = 1000;

    /// Number of values per vector in a full-size experiment.
    pub const DEFAULT_ELEMENTS: usize = 200_000;

    /// Creates a shape of `vectors` vectors with `elements` values each.
    #[must_use]
    pub fn new(vectors: usize, elements: usize) -> Self {
        Self { vectors, elements }
    }

    /// Number of vectors.
    #[must_use]
    pub fn vectors(&self) -> usize {
        self.vectors
    }

    /// Number of values per vector.
    #[must_use]
    pub fn elements(&self) -> usize {
        self.elements
    }

    /// Size of all values together, in bytes.
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.vectors
            .checked_mul(self.elements)
            .and_then(|count| count.checked_mul(mem::size_of::<u64>()))
            .expect("data size overflows usize - this indicates an unrealistic scenario")
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VECTORS, Self::DEFAULT_ELEMENTS)
    }
}

/// One way of producing the data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Strategy {
    /// A function fills a reserved vector and returns it by value.
    ReturnValue,

    /// Like [`ReturnValue`](Self::ReturnValue) but the function returns a clone of its vector.
    ReturnCopy,

    /// The caller owns the vectors and a function reserves and fills each one.
    FillReference,

    /// A function appends to one vector that was reserved for all values.
    AppendToReference,

    /// Like [`ReturnValue`](Self::ReturnValue) but without reserving capacity.
    ForgetReserve,

    /// Like [`AppendToReference`](Self::AppendToReference) but without reserving capacity.
    AppendToReferenceNoReserve,
}

impl Strategy {
    /// All strategies, in the order they are run by [`run_all()`].
    pub const ALL: [Self; 6] = [
        Self::ReturnValue,
        Self::ReturnCopy,
        Self::FillReference,
        Self::AppendToReference,
        Self::ForgetReserve,
        Self::AppendToReferenceNoReserve,
    ];

    /// Name used in the experiment output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ReturnValue => "return_value",
            Self::ReturnCopy => "return_copy",
            Self::FillReference => "fill_reference",
            Self::AppendToReference => "append_to_reference",
            Self::ForgetReserve => "forget_reserve",
            Self::AppendToReferenceNoReserve => "append_to_reference_noreserve",
        }
    }
}

/// The data produced by one strategy.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Built {
    /// One vector per requested vector.
    Separate(Vec<Vec<u64>>),

    /// All values in a single vector.
    Concatenated(Vec<u64>),
}

impl Built {
    /// Total number of values across all vectors.
    #[must_use]
    pub fn value_count(&self) -> usize {
        match self {
            Self::Separate(all) => all.iter().map(Vec::len).sum(),
            Self::Concatenated(all) => all.len(),
        }
    }

    /// The last value produced, or `None` if nothing was produced.
    #[must_use]
    pub fn last(&self) -> Option<u64> {
        match self {
            Self::Separate(all) => all.last().and_then(|vector| vector.last().copied()),
            Self::Concatenated(all) => all.last().copied(),
        }
    }
}

/// Produces `vectors × elements` values with one strategy.
#[must_use]
pub fn build(strategy: Strategy, shape: Shape) -> Built {
    match strategy {
        Strategy::ReturnValue => Built::Separate(build_many(shape, reserved_sequence)),
        Strategy::ReturnCopy => Built::Separate(build_many(shape, copied_sequence)),
        Strategy::FillReference => {
            let mut all = vec![Vec::new(); shape.vectors()];
            for vector in &mut all {
                fill_reserved(vector, shape.elements());
            }
            Built::Separate(all)
        }
        Strategy::AppendToReference => {
            let mut all = Vec::with_capacity(
                shape
                    .vectors()
                    .checked_mul(shape.elements())
                    .expect("value count overflows usize - this indicates an unrealistic scenario"),
            );
            for _ in 0..shape.vectors() {
                append_sequence(&mut all, shape.elements());
            }
            Built::Concatenated(all)
        }
        Strategy::ForgetReserve => Built::Separate(build_many(shape, unreserved_sequence)),
        Strategy::AppendToReferenceNoReserve => {
            let mut all = Vec::new();
            for _ in 0..shape.vectors() {
                append_sequence(&mut all, shape.elements());
            }
            Built::Concatenated(all)
        }
    }
}

/// Produces the data with one strategy and reports how long it took.
///
/// Writes the strategy name and the timer report to `out`. Only building is timed: the data is
/// handed back to the caller, so it is freed after the report is taken.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_strategy(
    strategy: Strategy,
    shape: Shape,
    style: ReportStyle,
    out: &mut impl Write,
) -> Result<Built> {
    debug!(strategy = strategy.name(), ?shape, "vector growth run starting");

    let mut timer = Timer::new();
    let built = build(strategy, shape);
    let report = timer.report(style)?;

    writeln!(out, "{}:", strategy.name())?;
    writeln!(out, "{report}")?;

    Ok(built)
}

/// Runs every strategy in turn.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_all(shape: Shape, style: ReportStyle, out: &mut impl Write) -> Result<()> {
    for strategy in Strategy::ALL {
        let built = run_strategy(strategy, shape, style, out)?;
        black_box(built.last());
    }

    Ok(())
}

fn build_many(shape: Shape, build_one: impl Fn(usize) -> Vec<u64>) -> Vec<Vec<u64>> {
    (0..shape.vectors())
        .map(|_| build_one(shape.elements()))
        .collect()
}

fn reserved_sequence(elements: usize) -> Vec<u64> {
    let mut vector = Vec::new();
    fill_reserved(&mut vector, elements);
    vector
}

fn copied_sequence(elements: usize) -> Vec<u64> {
    let original = reserved_sequence(elements);
    let copy = original.clone();
    black_box(original.last());
    copy
}

fn unreserved_sequence(elements: usize) -> Vec<u64> {
    let mut vector = Vec::new();
    append_sequence(&mut vector, elements);
    vector
}

fn fill_reserved(vector: &mut Vec<u64>, elements: usize) {
    vector.reserve(elements);
    append_sequence(vector, elements);
}

fn append_sequence(vector: &mut Vec<u64>, elements: usize) {
    vector.extend((0..elements).map(as_value));
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn total_bytes() {
        assert_eq!(Shape::new(3, 4).total_bytes(), 96);
        assert_eq!(Shape::default().total_bytes(), 1_600_000_000);
    }

    #[test]
    fn every_strategy_ends_with_last_index() {
        for strategy in Strategy::ALL {
            let mut out = Vec::new();
            let built = run_strategy(strategy, Shape::new(3, 5), ReportStyle::Seconds, &mut out)
                .unwrap();

            assert_eq!(built.last(), Some(4), "{}", strategy.name());
        }
    }

    #[test]
    fn empty_shape_has_no_last_value() {
        for strategy in Strategy::ALL {
            let mut out = Vec::new();
            let built = run_strategy(strategy, Shape::new(0, 5), ReportStyle::Seconds, &mut out)
                .unwrap();

            assert_eq!(built.last(), None, "{}", strategy.name());
            assert_eq!(built.value_count(), 0, "{}", strategy.name());
        }
    }

    #[test]
    fn built_data_outlives_the_report() {
        // Every value is still owned by the caller once the report has been written, so freeing
        // the data cannot be part of the timed region.
        for strategy in Strategy::ALL {
            let mut out = Vec::new();
            let built = run_strategy(strategy, Shape::new(4, 6), ReportStyle::Seconds, &mut out)
                .unwrap();

            assert!(!out.is_empty(), "{}", strategy.name());
            assert_eq!(built.value_count(), 24, "{}", strategy.name());
        }
    }

    #[test]
    fn build_keeps_layout_of_strategy() {
        let shape = Shape::new(2, 3);

        assert_eq!(
            build(Strategy::FillReference, shape),
            Built::Separate(vec![vec![0, 1, 2], vec![0, 1, 2]])
        );
        assert_eq!(
            build(Strategy::AppendToReferenceNoReserve, shape),
            Built::Concatenated(vec![0, 1, 2, 0, 1, 2])
        );
        assert_eq!(
            build(Strategy::ReturnCopy, shape),
            build(Strategy::ForgetReserve, shape)
        );
    }

    #[test]
    fn output_names_strategy_then_reports() {
        let mut out = Vec::new();
        run_strategy(
            Strategy::FillReference,
            Shape::new(2, 2),
            ReportStyle::Milliseconds,
            &mut out,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines.first(), Some(&"fill_reference:"));
        assert!(lines.get(1).is_some_and(|line| line.starts_with("Real time 0:00:")));
    }

    #[test]
    fn run_all_runs_strategies_in_order() {
        let mut out = Vec::new();
        run_all(Shape::new(1, 1), ReportStyle::Seconds, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let names: Vec<&str> = text
            .lines()
            .filter_map(|line| line.strip_suffix(':'))
            .collect();
        let expected: Vec<&str> = Strategy::ALL.iter().map(|s| s.name()).collect();

        assert_eq!(names, expected);
    }

    #[test]
    fn copied_sequence_matches_original() {
        assert_eq!(copied_sequence(4), vec![0, 1, 2, 3]);
        assert_eq!(reserved_sequence(4), unreserved_sequence(4));
    }
}
