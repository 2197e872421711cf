//! Platform abstraction layer for the two clocks a timer reads.
//!
//! This module allows switching between the real clocks (system wall-clock time and the
//! `cpu_time` package) and a fake implementation for testing purposes.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::Platform;
pub(crate) use facade::PlatformFacade;
#[cfg(test)]
pub(crate) use fake::FakePlatform;
