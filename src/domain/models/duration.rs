//! Serde support for `std::time::Duration` fields written as `5s`, `1h30m`, ...
//!
//! Used through `#[serde(with = "crate::domain::models::duration")]`.
//! Strings are parsed with `humantime`; the bare string `"0"` and plain
//! integers (nanoseconds) are accepted as well. Serialization always emits the
//! `humantime` form so a printed config can be read back.

use std::fmt;
use std::time::Duration;

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

/// Parse a duration string such as `5s`, `250ms` or `1h30m`.
pub fn parse(value: &str) -> Result<Duration, humantime::DurationError> {
    let trimmed = value.trim();
    if trimmed == "0" {
        return Ok(Duration::ZERO);
    }
    humantime::parse_duration(trimmed)
}

/// Write a duration in `humantime` form (`1h`, `1s 500ms`)
pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&humantime::format_duration(*value))
}

/// Read a duration string or an integer number of nanoseconds
pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(DurationVisitor)
}

struct DurationVisitor;

impl Visitor<'_> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a duration such as \"5s\" or \"1h\", or an integer number of nanoseconds")
    }

    fn visit_str<E>(self, value: &str) -> Result<Duration, E>
    where
        E: de::Error,
    {
        parse(value).map_err(|err| E::custom(format!("invalid duration {value:?}: {err}")))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Duration, E>
    where
        E: de::Error,
    {
        Ok(Duration::from_nanos(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Duration, E>
    where
        E: de::Error,
    {
        u64::try_from(value)
            .map(Duration::from_nanos)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
    }
}
