use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{InvalidTimestamp, ParseError};
use crate::time::Time;

/// Wire representation of an absent timestamp (the YSON entity).
pub const ENTITY: &str = "#";

/// chrono format of a YT timestamp: `2006-01-02T15:04:05.999999Z`.
///
/// `%.f` makes the fractional part optional when parsing. chrono is lenient
/// about field widths, signs and whitespace, so input is checked against
/// the fixed shape first.
pub const LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

const SECONDS_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S";

// Byte offsets of the separators in `YYYY-MM-DDThh:mm:ss`.
const SEPARATORS: [(usize, u8); 5] = [(4, b'-'), (7, b'-'), (10, b'T'), (13, b':'), (16, b':')];
const SECONDS_END: usize = 19;

/// Checks that `input` is exactly `YYYY-MM-DDThh:mm:ss`, then either `Z` or
/// `.`, one or more digits, `Z`.
fn check_shape(input: &str) -> Result<(), InvalidTimestamp> {
    let bytes = input.as_bytes();
    if bytes.len() < SECONDS_END + 1 {
        return Err(InvalidTimestamp::Layout);
    }

    let (head, tail) = bytes.split_at(SECONDS_END);
    for (i, &b) in head.iter().enumerate() {
        let ok = match SEPARATORS.iter().find(|(pos, _)| *pos == i) {
            Some(&(_, sep)) => b == sep,
            None => b.is_ascii_digit(),
        };
        if !ok {
            return Err(InvalidTimestamp::Layout);
        }
    }

    match tail {
        [b'Z'] => {}
        [b'.', digits @ .., b'Z']
            if !digits.is_empty() && digits.iter().all(u8::is_ascii_digit) => {}
        _ => return Err(InvalidTimestamp::Layout),
    }

    if &head[17..SECONDS_END] == b"60" {
        return Err(InvalidTimestamp::LeapSecond);
    }
    Ok(())
}

/// How the sub-second part of a timestamp is written.
///
/// Both styles truncate to microseconds; they differ only in padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FractionStyle {
    /// Significant digits only: `.5`, `.123456`, nothing for whole seconds.
    #[default]
    Significant,
    /// Always six digits: `.500000`, `.000000`.
    Micros,
}

impl FractionStyle {
    fn push_fraction(self, out: &mut String, nanos: u32) {
        // nanos >= 1_000_000_000 encodes a leap second in chrono
        let micros = (nanos % 1_000_000_000) / 1_000;
        match self {
            FractionStyle::Significant => {
                if micros == 0 {
                    return;
                }
                let digits = format!("{micros:06}");
                out.push('.');
                out.push_str(digits.trim_end_matches('0'));
            }
            FractionStyle::Micros => {
                out.push_str(&format!(".{micros:06}"));
            }
        }
    }
}

/// Converts between [`Time`] and its YT string form.
///
/// The codec holds no state besides the fraction style, so it is `Copy` and
/// can be shared freely. Use [`decode`] and [`encode`] for the default style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeCodec {
    pub fraction: FractionStyle,
}

impl TimeCodec {
    /// Creates a codec writing fractions in the given style.
    pub const fn new(fraction: FractionStyle) -> Self {
        TimeCodec { fraction }
    }

    /// Parses a YT timestamp.
    ///
    /// `#` decodes into [`Time::ZERO`]. Anything else must match [`LAYOUT`];
    /// the result is always UTC.
    pub fn decode(&self, input: &str) -> Result<Time, ParseError> {
        if input == ENTITY {
            return Ok(Time::ZERO);
        }

        let parsed = check_shape(input).and_then(|()| {
            NaiveDateTime::parse_from_str(input, LAYOUT).map_err(InvalidTimestamp::from)
        });
        match parsed {
            Ok(naive) => Ok(Time::from(naive.and_utc())),
            Err(source) => {
                trace!(input, %source, "rejected timestamp");
                Err(ParseError::new(input, source))
            }
        }
    }

    /// Formats a time in YT layout, normalized to UTC.
    ///
    /// [`Time::ZERO`] encodes into `#`. Years outside 0000..=9999 are written
    /// with chrono's signed extended year (`+10000-01-01T...`, `-0001-...`);
    /// such strings do not fit the layout and [`TimeCodec::decode`] rejects them.
    pub fn encode(&self, time: &Time) -> String {
        let Some(datetime) = time.datetime() else {
            return ENTITY.to_string();
        };

        let mut out = datetime.format(SECONDS_LAYOUT).to_string();
        self.fraction.push_fraction(&mut out, datetime.nanosecond());
        out.push('Z');
        out
    }
}

/// Decodes a YT timestamp with the default codec.
pub fn decode(input: &str) -> Result<Time, ParseError> {
    TimeCodec::default().decode(input)
}

/// Encodes a time with the default codec.
pub fn encode(time: &Time) -> String {
    TimeCodec::default().encode(time)
}
