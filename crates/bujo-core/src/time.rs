//! Timezone-local rendering of absolute instants.
//!
//! Tasks store their schedule as plain local date/time strings plus an IANA
//! timezone name, so the conversions here always go from an epoch-millisecond
//! instant to a rendering in an explicit [`Tz`] — never through the ambient
//! system timezone.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Milliseconds in one minute.
pub const MINUTE_MILLIS: i64 = 60_000;

/// A timezone-local calendar date and time-of-day, rendered as strings.
///
/// `date` is always 10 characters (`YYYY-MM-DD`) and `time` 5 characters
/// (`HH:MM`), matching the shape tasks carry in their due and reminder
/// fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStamp {
    /// Local calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Local time of day, `HH:MM`.
    pub time: String,
}

/// Converts an epoch-millisecond value to a UTC datetime.
///
/// Returns `None` for values outside chrono's representable range.
pub fn instant(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// Returns the epoch-millisecond value of midnight UTC on the given date.
pub fn date_to_millis(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .expect("valid time")
        .and_utc()
        .timestamp_millis()
}

/// Renders an instant as a local date/time pair in the given timezone.
///
/// The instant is rendered once as `%Y-%m-%dT%H:%M:%S` and then sliced at
/// fixed offsets (`[0..10]` for the date, `[11..16]` for the time). This is
/// deliberately a substring extraction of one ISO-8601-like rendering rather
/// than two independent format calls.
pub fn local_stamp(millis: i64, tz: Tz) -> Option<LocalStamp> {
    let rendered = instant(millis)?
        .with_timezone(&tz)
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string();
    Some(LocalStamp {
        date: rendered[..10].to_string(),
        time: rendered[11..16].to_string(),
    })
}

/// Renders an instant in the given timezone as a compact `%Y%m%dT%H%M%S`
/// literal, the anchor format used inside recurrence descriptors.
pub fn compact_local(millis: i64, tz: Tz) -> Option<String> {
    Some(
        instant(millis)?
            .with_timezone(&tz)
            .format("%Y%m%dT%H%M%S")
            .to_string(),
    )
}
