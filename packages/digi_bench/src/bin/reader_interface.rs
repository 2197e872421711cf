#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

//! Compares reader interfaces on a synthetic timeslice.
//!
//! Run with: `cargo run --release --bin reader_interface -- --components 100`.

use std::io::{self, Write};
use std::process::ExitCode;

use argh::FromArgs;
use digi_bench::timeslice::{self, ReaderMode, Shape};
use dual_timer::ReportStyle;
use tracing::{Level, error};

/// Times the readout of a synthetic timeslice, once per reader interface.
#[derive(FromArgs)]
struct Args {
    /// number of components in the timeslice
    #[argh(option, default = "Shape::DEFAULT_COMPONENTS")]
    components: usize,

    /// number of values per component
    #[argh(option, default = "Shape::DEFAULT_ELEMENTS")]
    elements: usize,

    /// run only this mode (0: create vector then append, 1: append directly)
    #[argh(option)]
    mode: Option<u32>,

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

    let modes = match args.mode {
        None => ReaderMode::ALL.to_vec(),
        Some(number) => match ReaderMode::from_number(number) {
            Some(mode) => vec![mode],
            None => {
                error!(number, "unknown reader mode, expected 0 or 1");
                return ExitCode::FAILURE;
            }
        },
    };

    let shape = Shape::new(args.components, args.elements);
    let mut out = io::stdout().lock();

    let outcome = writeln!(out, "total size in bytes: {}", shape.total_bytes())
        .map_err(digi_bench::Error::from)
        .and_then(|()| {
            for mode in modes {
                writeln!(out, "=== RUN MODE {} ===", mode.number())?;
                timeslice::run(shape, mode, args.style, &mut out)?;
            }
            Ok(())
        });

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "reader interface experiment failed");
            ExitCode::FAILURE
        }
    }
}
