use thiserror::Error;

/// Why a timestamp was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTimestamp {
    #[error("expected YYYY-MM-DDThh:mm:ss[.f]Z")]
    Layout,
    #[error("leap seconds are not representable")]
    LeapSecond,
    #[error(transparent)]
    Calendar(#[from] chrono::format::ParseError),
}

/// Error returned when a string is neither the entity `#` nor a timestamp
/// in the YT layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid YT timestamp {input:?}: {source}")]
pub struct ParseError {
    input: String,
    #[source]
    source: InvalidTimestamp,
}

impl ParseError {
    pub(crate) fn new(input: &str, source: InvalidTimestamp) -> Self {
        ParseError {
            input: input.to_string(),
            source,
        }
    }

    /// The rejected input, verbatim.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cause(&self) -> &InvalidTimestamp {
        &self.source
    }
}

/// A `std::time::Duration` too large to be represented as a [`crate::Duration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("duration of {0:?} is out of range")]
pub struct DurationOutOfRange(pub std::time::Duration);
