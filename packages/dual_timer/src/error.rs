use thiserror::Error;

/// Errors that can occur when querying or resuming a [`Timer`](crate::Timer).
#[derive(Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The timer was created with [`Timer::unstarted()`](crate::Timer::unstarted) and has not
    /// been started since, so there is no interval to resume or report on.
    #[error("timer was never started")]
    NotStarted,
}

/// A specialized `Result` type for timer operations, returning the crate's [`Error`] type as
/// the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn not_started_message() {
        assert_eq!(Error::NotStarted.to_string(), "timer was never started");
    }
}
