use chrono::TimeDelta;

use crate::error::DurationOutOfRange;

/// A signed span of time.
///
/// Kept apart from [`crate::Time`] so that instants and intervals cannot be
/// mixed up. No YT string form is defined for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(TimeDelta);

impl Duration {
    pub const ZERO: Duration = Duration(TimeDelta::zero());

    pub fn as_delta(&self) -> TimeDelta {
        self.0
    }
}

impl From<TimeDelta> for Duration {
    fn from(delta: TimeDelta) -> Self {
        Duration(delta)
    }
}

impl From<Duration> for TimeDelta {
    fn from(duration: Duration) -> Self {
        duration.0
    }
}

impl TryFrom<std::time::Duration> for Duration {
    type Error = DurationOutOfRange;

    fn try_from(std: std::time::Duration) -> Result<Self, Self::Error> {
        TimeDelta::from_std(std)
            .map(Duration)
            .map_err(|_| DurationOutOfRange(std))
    }
}
