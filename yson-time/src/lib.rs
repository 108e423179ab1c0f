//! Timestamps in the YT (YSON) wire format.
//!
//! YT writes instants as `2006-01-02T15:04:05.999999Z`: UTC, a literal `Z`,
//! and at most six significant fractional digits. A missing timestamp is
//! written as the entity `#`.
//!
//! Core concepts:
//! - **Time**: an optional UTC instant; the absent value maps to `#`
//! - **Duration**: a signed interval, typed apart from `Time`
//! - **TimeCodec**: decoder/encoder with a configurable fraction style
//!
//! # Example
//!
//! ```
//! use yson_time::{decode, encode, Time};
//!
//! let t = decode("2023-06-15T10:30:00.123456Z").unwrap();
//! assert_eq!(encode(&t), "2023-06-15T10:30:00.123456Z");
//!
//! assert!(decode("#").unwrap().is_zero());
//! assert_eq!(encode(&Time::ZERO), "#");
//! ```

mod codec;
mod duration;
mod error;
pub mod serde_helpers;
mod time;

pub use codec::{ENTITY, FractionStyle, LAYOUT, TimeCodec, decode, encode};
pub use duration::Duration;
pub use error::{DurationOutOfRange, InvalidTimestamp, ParseError};
pub use time::Time;
