//! Serde adapters for fields typed with plain chrono values.
//!
//! Use these with `#[serde(with = "...")]` when a struct keeps
//! `DateTime<Utc>` rather than [`Time`](crate::Time) but still has to speak
//! the YT string form.

/// `Option<DateTime<Utc>>` as a YT timestamp: `None` is written as `#`.
pub mod datetime {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::time::Time;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Time::from_option(*value).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Time::deserialize(deserializer).map(Time::into_inner)
    }
}

/// `DateTime<Utc>` as a YT timestamp. Reading `#` is an error.
pub mod datetime_required {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::time::Time;

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Time::from(*value).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Time::deserialize(deserializer)?
            .into_inner()
            .ok_or_else(|| serde::de::Error::custom("missing timestamp"))
    }
}
