//! Generated value representation.
//!
//! `GeneratedValue` is what the synthesis engine hands to a writer. Each
//! variant keeps its native Rust type so database adapters can bind it
//! directly; `Display` gives the textual form used in logs and tests.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use std::fmt;
use uuid::Uuid;

/// Format for `date` values.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format for `time` values.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// A single synthesized column value.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    /// 16-bit signed integer
    Int16(i16),

    /// 32-bit signed integer
    Int32(i32),

    /// 64-bit signed integer
    Int64(i64),

    /// 32-bit floating point
    Float32(f32),

    /// 64-bit floating point
    Float64(f64),

    /// String value (char, varchar, text)
    Text(String),

    /// UUID value
    Uuid(Uuid),

    /// Boolean value
    Bool(bool),

    /// Date without time
    Date(NaiveDate),

    /// Time of day without date
    Time(NaiveTime),

    /// Timestamp without timezone
    Timestamp(NaiveDateTime),

    /// Timestamp with timezone
    TimestampTz(DateTime<Utc>),
}

impl GeneratedValue {
    /// Borrow the string payload, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Widen integer payloads to `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int16(v) => Some(i64::from(*v)),
            Self::Int32(v) => Some(i64::from(*v)),
            Self::Int64(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for GeneratedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int16(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
            Self::Uuid(u) => write!(f, "{}", u.hyphenated()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
            Self::Time(t) => write!(f, "{}", t.format(TIME_FORMAT)),
            Self::Timestamp(ts) => f.write_str(&ts.and_utc().to_rfc3339_opts(SecondsFormat::Secs, true)),
            Self::TimestampTz(ts) => f.write_str(&ts.to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2000, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap()
    }

    #[test]
    fn test_temporal_display() {
        let ts = instant();

        assert_eq!(GeneratedValue::Date(ts.date()).to_string(), "2000-01-02");
        assert_eq!(GeneratedValue::Time(ts.time()).to_string(), "03:04:05");
        assert_eq!(
            GeneratedValue::Timestamp(ts).to_string(),
            "2000-01-02T03:04:05Z"
        );
        assert_eq!(
            GeneratedValue::TimestampTz(ts.and_utc()).to_string(),
            "2000-01-02T03:04:05Z"
        );
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(GeneratedValue::Int16(-7).to_string(), "-7");
        assert_eq!(GeneratedValue::Int64(42).to_string(), "42");
        assert_eq!(GeneratedValue::Bool(true).to_string(), "true");
        assert_eq!(GeneratedValue::Text("abc".into()).to_string(), "abc");
        assert_eq!(
            GeneratedValue::Uuid(Uuid::nil()).to_string(),
            "00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(GeneratedValue::Int16(3).as_i64(), Some(3));
        assert_eq!(GeneratedValue::Int32(-3).as_i64(), Some(-3));
        assert_eq!(GeneratedValue::Text("x".into()).as_i64(), None);
        assert_eq!(GeneratedValue::Text("x".into()).as_str(), Some("x"));
        assert_eq!(GeneratedValue::Bool(false).as_str(), None);
    }
}
