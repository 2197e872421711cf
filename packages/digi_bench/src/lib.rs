#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Experiments that compare ways of moving many small vectors of integers into one large
//! vector, timed with [`dual_timer`].
//!
//! * [`timeslice`] simulates a detector readout: a timeslice made of many components is turned
//!   into one global vector of digis, which is then sorted and summed.
//! * [`vector_growth`] compares returning, copying and appending vectors.
//!
//! Each experiment writes a description of every phase followed by its timer report to the
//! supplied writer. The `reader_interface` and `return_vector` binaries run them against stdout.

mod error;
pub mod timeslice;
mod value;
pub mod vector_growth;

pub use error::Error;
pub(crate) use error::Result;
pub(crate) use value::as_value;
