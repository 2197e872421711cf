#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

//! Compares ways of returning and growing vectors.
//!
//! Run with: `cargo run --release --bin return_vector -- --vectors 100`.

use std::io::{self, Write};
use std::process::ExitCode;

use argh::FromArgs;
use digi_bench::vector_growth::{self, Shape};
use dual_timer::ReportStyle;
use tracing::{Level, error};

/// Times building many vectors of integers with several strategies.
#[derive(FromArgs)]
struct Args {
    /// number of vectors to build
    #[argh(option, default = "Shape::DEFAULT_VECTORS")]
    vectors: usize,

    /// number of values per vector
    #[argh(option, default = "Shape::DEFAULT_ELEMENTS")]
    elements: usize,

    /// report precision: m (milliseconds), u (microseconds) or anything else for seconds
    #[argh(option, default = "ReportStyle::Milliseconds")]
    style: ReportStyle,

    /// log timer activity to stderr
    #[argh(switch)]
    verbose: bool,
}

// Binary entry point - mutations would require subprocess testing which is impractical.
#[cfg_attr(test, mutants::skip)]
fn main() -> ExitCode {
    let args: Args = argh::from_env();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if args.verbose {
            Level::TRACE
        } else {
            Level::INFO
        })
        .init();

    let shape = Shape::new(args.vectors, args.elements);
    let mut out = io::stdout().lock();

    let outcome = writeln!(out, "total size in bytes: {}", shape.total_bytes())
        .map_err(digi_bench::Error::from)
        .and_then(|()| vector_growth::run_all(shape, args.style, &mut out));

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "vector growth experiment failed");
            ExitCode::FAILURE
        }
    }
}
