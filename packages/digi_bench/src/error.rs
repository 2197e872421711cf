use std::io;

use thiserror::Error;

/// Errors that can occur while running an experiment.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A timer was queried before it was started.
    #[error("timer misuse: {0}")]
    Timer(#[from] dual_timer::Error),

    /// The experiment output could not be written.
    #[error("failed to write experiment output")]
    Output(#[from] io::Error),
}

/// A specialized `Result` type for experiments, returning the crate's [`Error`] type as the
/// error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
