use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{debug, instrument};
use yson_time::{Time, TimeCodec};

use crate::error::ToolError;

const ABSENT: &str = "absent";

/// Decodes a YT timestamp and renders it as RFC 3339.
#[instrument(skip(codec))]
pub fn decode(codec: &TimeCodec, input: &str) -> Result<String, ToolError> {
    let time = codec.decode(input)?;
    debug!(zero = time.is_zero(), "decoded");
    Ok(match time.datetime() {
        Some(datetime) => datetime.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        None => ABSENT.to_string(),
    })
}

/// Encodes a human-supplied instant into YT form.
#[instrument(skip(codec))]
pub fn encode(codec: &TimeCodec, input: &str) -> Result<String, ToolError> {
    let time = parse_instant(input)?;
    Ok(codec.encode(&time))
}

/// Rewrites a YT timestamp into the codec's canonical form.
#[instrument(skip(codec))]
pub fn normalize(codec: &TimeCodec, input: &str) -> Result<String, ToolError> {
    let time = codec.decode(input)?;
    Ok(codec.encode(&time))
}

/// Accepts RFC 3339 with any offset, `@<unix seconds>`, `now`, `absent` or `#`.
fn parse_instant(input: &str) -> Result<Time, ToolError> {
    match input {
        "now" => return Ok(Time::now()),
        ABSENT | yson_time::ENTITY => return Ok(Time::ZERO),
        _ => {}
    }

    if let Some(seconds) = input.strip_prefix('@') {
        let seconds: i64 = seconds
            .parse()
            .map_err(|_| ToolError::InvalidInput(input.to_string()))?;
        return DateTime::<Utc>::from_timestamp(seconds, 0)
            .map(Time::from)
            .ok_or_else(|| ToolError::InvalidInput(input.to_string()));
    }

    DateTime::parse_from_rfc3339(input)
        .map(Time::new)
        .map_err(|_| ToolError::InvalidInput(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use yson_time::FractionStyle;

    #[test]
    fn decode_to_rfc3339() {
        let codec = TimeCodec::default();
        assert_eq!(
            decode(&codec, "2023-06-15T10:30:00.123456Z").unwrap(),
            "2023-06-15T10:30:00.123456Z"
        );
        assert_eq!(decode(&codec, "#").unwrap(), "absent");
        assert!(matches!(
            decode(&codec, "2023-06-15"),
            Err(ToolError::Parse(_))
        ));
    }

    #[test]
    fn encode_from_offset() {
        let codec = TimeCodec::default();
        assert_eq!(
            encode(&codec, "2023-06-15T13:30:00.5+03:00").unwrap(),
            "2023-06-15T10:30:00.5Z"
        );
    }

    #[test]
    fn encode_unix_seconds() {
        let codec = TimeCodec::new(FractionStyle::Micros);
        assert_eq!(
            encode(&codec, "@1700000000").unwrap(),
            "2023-11-14T22:13:20.000000Z"
        );
    }

    #[test]
    fn encode_absent() {
        let codec = TimeCodec::default();
        assert_eq!(encode(&codec, "absent").unwrap(), "#");
        assert_eq!(encode(&codec, "#").unwrap(), "#");
    }

    #[test]
    fn encode_now_is_parseable() {
        let codec = TimeCodec::default();
        let s = encode(&codec, "now").unwrap();
        assert!(!codec.decode(&s).unwrap().is_zero());
    }

    #[test]
    fn encode_rejects_garbage() {
        let codec = TimeCodec::default();
        for input in ["tomorrow", "@soon", "2023-06-15"] {
            assert!(matches!(
                encode(&codec, input),
                Err(ToolError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn normalize_switches_style() {
        let input = "2023-06-15T10:30:00.120000Z";
        assert_eq!(
            normalize(&TimeCodec::default(), input).unwrap(),
            "2023-06-15T10:30:00.12Z"
        );
        assert_eq!(
            normalize(&TimeCodec::new(FractionStyle::Micros), "2023-06-15T10:30:00Z").unwrap(),
            "2023-06-15T10:30:00.000000Z"
        );
    }
}
