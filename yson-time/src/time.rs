use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec;
use crate::duration::Duration;
use crate::error::ParseError;

/// A point in time as carried by YT.
///
/// The value is either absent or a UTC instant. The absent value stands in
/// for Go's zero `time.Time`: it is what `#` decodes into and what encodes
/// back into `#`. It is kept as an explicit `None`, so no real instant is
/// ever mistaken for it.
///
/// Serializes as the YT string form, so any serde format carries it as a
/// plain string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(Option<DateTime<Utc>>);

impl Time {
    /// The absent value.
    pub const ZERO: Time = Time(None);

    /// Wraps an instant, normalizing it to UTC.
    pub fn new<Tz: TimeZone>(datetime: DateTime<Tz>) -> Self {
        Time(Some(datetime.with_timezone(&Utc)))
    }

    pub fn from_option(datetime: Option<DateTime<Utc>>) -> Self {
        Time(datetime)
    }

    /// The current instant.
    pub fn now() -> Self {
        Time(Some(Utc::now()))
    }

    /// Returns true for the absent value.
    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the instant, or `None` for the absent value.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    pub fn into_inner(self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Shifts the instant forward.
    ///
    /// The absent value stays absent. Returns `None` if the result does not
    /// fit in chrono's calendar.
    pub fn checked_add(self, duration: Duration) -> Option<Time> {
        match self.0 {
            None => Some(Time::ZERO),
            Some(datetime) => datetime.checked_add_signed(duration.as_delta()).map(Time::from),
        }
    }

    /// Shifts the instant backward. See [`Time::checked_add`].
    pub fn checked_sub(self, duration: Duration) -> Option<Time> {
        match self.0 {
            None => Some(Time::ZERO),
            Some(datetime) => datetime.checked_sub_signed(duration.as_delta()).map(Time::from),
        }
    }
}

impl From<DateTime<Utc>> for Time {
    fn from(datetime: DateTime<Utc>) -> Self {
        Time(Some(datetime))
    }
}

impl From<Option<DateTime<Utc>>> for Time {
    fn from(datetime: Option<DateTime<Utc>>) -> Self {
        Time(datetime)
    }
}

impl From<Time> for Option<DateTime<Utc>> {
    fn from(time: Time) -> Self {
        time.0
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::encode(self))
    }
}

impl FromStr for Time {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::decode(s)
    }
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&codec::encode(self))
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TimeVisitor;

        impl serde::de::Visitor<'_> for TimeVisitor {
            type Value = Time;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a YT timestamp string or \"#\"")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                codec::decode(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TimeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn default_is_zero() {
        assert!(Time::default().is_zero());
        assert_eq!(Time::default(), Time::ZERO);
        assert_eq!(Time::ZERO.datetime(), None);
    }

    #[test]
    fn new_normalizes_to_utc() {
        let offset = FixedOffset::east_opt(3 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2023, 6, 15, 13, 30, 0).unwrap();
        let time = Time::new(local);
        assert_eq!(
            time.datetime(),
            Some(Utc.with_ymd_and_hms(2023, 6, 15, 10, 30, 0).unwrap())
        );
        assert_eq!(time.to_string(), "2023-06-15T10:30:00Z");
    }

    #[test]
    fn unix_epoch_is_not_zero() {
        let epoch = Time::from(DateTime::<Utc>::UNIX_EPOCH);
        assert!(!epoch.is_zero());
        assert_eq!(epoch.to_string(), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn zero_orders_first() {
        let epoch = Time::from(DateTime::<Utc>::UNIX_EPOCH);
        assert!(Time::ZERO < epoch);
        assert!(Time::ZERO < Time::from(DateTime::<Utc>::MIN_UTC));
    }

    #[test]
    fn parse_via_from_str() {
        let time: Time = "2023-06-15T10:30:00.123456Z".parse().unwrap();
        assert_eq!(time.to_string(), "2023-06-15T10:30:00.123456Z");
        assert!("#".parse::<Time>().unwrap().is_zero());
        assert!("yesterday".parse::<Time>().is_err());
    }

    #[test]
    fn shift_by_duration() {
        let time: Time = "2023-06-15T10:30:00Z".parse().unwrap();
        let hour = Duration::from(chrono::TimeDelta::hours(1));
        assert_eq!(
            time.checked_add(hour).unwrap().to_string(),
            "2023-06-15T11:30:00Z"
        );
        assert_eq!(
            time.checked_sub(hour).unwrap().to_string(),
            "2023-06-15T09:30:00Z"
        );
        assert_eq!(Time::ZERO.checked_add(hour), Some(Time::ZERO));
    }

    #[test]
    fn shift_out_of_range() {
        let max = Time::from(DateTime::<Utc>::MAX_UTC);
        let hour = Duration::from(chrono::TimeDelta::hours(1));
        assert_eq!(max.checked_add(hour), None);
    }
}
