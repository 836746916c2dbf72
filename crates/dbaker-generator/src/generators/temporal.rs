//! Date and time value generators.
//!
//! Random values are whole-second instants between 1900-01-01 and
//! 2100-01-01 (UTC). Unique values count forward from 2000-01-01T00:00:00Z,
//! one day per iteration for dates and one second per iteration otherwise.
//! Unique times cover a single day.

use chrono::{DateTime, Utc};
use dbaker_core::GeneratedValue;
use rand::Rng;

/// 1900-01-01T00:00:00Z
pub const RANDOM_RANGE_START: i64 = -2_208_988_800;

/// 2100-01-01T00:00:00Z (exclusive)
pub const RANDOM_RANGE_END: i64 = 4_102_444_800;

/// 2000-01-01T00:00:00Z, origin of iteration-derived values.
pub const UNIQUE_EPOCH: i64 = 946_684_800;

const SECONDS_PER_DAY: u64 = 86_400;

/// Which temporal column type a value is produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalKind {
    Date,
    Time,
    Timestamp,
    TimestampTz,
}

impl TemporalKind {
    /// Seconds one iteration advances the unique origin by.
    fn unique_step(self) -> u64 {
        match self {
            Self::Date => SECONDS_PER_DAY,
            Self::Time | Self::Timestamp | Self::TimestampTz => 1,
        }
    }

    /// Project an instant onto this kind's value.
    fn project(self, instant: DateTime<Utc>) -> GeneratedValue {
        match self {
            Self::Date => GeneratedValue::Date(instant.date_naive()),
            Self::Time => GeneratedValue::Time(instant.time()),
            Self::Timestamp => GeneratedValue::Timestamp(instant.naive_utc()),
            Self::TimestampTz => GeneratedValue::TimestampTz(instant),
        }
    }
}

/// Generate a random instant projected onto `kind`.
pub fn random_temporal<R: Rng>(rng: &mut R, kind: TemporalKind) -> GeneratedValue {
    let secs = rng.random_range(RANDOM_RANGE_START..RANDOM_RANGE_END);
    let instant = DateTime::from_timestamp(secs, 0).unwrap_or_default();
    kind.project(instant)
}

/// The unique origin advanced by `iteration` steps, projected onto `kind`.
///
/// Returns `None` when the resulting instant is not representable, or for
/// `Time` once the iterations run past one day.
pub fn unique_temporal(iteration: u64, kind: TemporalKind) -> Option<GeneratedValue> {
    if kind == TemporalKind::Time && iteration >= SECONDS_PER_DAY {
        return None;
    }
    let offset = iteration.checked_mul(kind.unique_step())?;
    let secs = UNIQUE_EPOCH.checked_add(i64::try_from(offset).ok()?)?;
    let instant = DateTime::from_timestamp(secs, 0)?;
    Some(kind.project(instant))
}
