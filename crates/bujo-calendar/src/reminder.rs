//! Derivation of a reminder setting from an event's reminder policy.

use bujo_core::time::{self, MINUTE_MILLIS};
use bujo_core::ReminderSetting;
use chrono_tz::Tz;

use crate::event::EventReminders;

/// Lead time applied when the policy requests the calendar default.
pub const DEFAULT_REMINDER_MINUTES: i64 = 30;

/// Resolves a reminder policy against the event's start instant.
///
/// - Absent policy: no reminder at all.
/// - Default policy: reminder 30 minutes before start.
/// - Overrides: reminder `max(minutes)` before start — among several
///   configured reminders, the earliest-firing one is recorded.
/// - Policy present but neither default nor overrides: an empty setting is
///   still recorded (pass-through, not an error).
///
/// The reminder instant is rendered in the target timezone.
pub fn resolve(
    policy: Option<&EventReminders>,
    start_millis: i64,
    tz: Tz,
) -> Option<ReminderSetting> {
    let policy = policy?;
    if policy.use_default {
        Some(lead(start_millis, DEFAULT_REMINDER_MINUTES, tz))
    } else if !policy.overrides.is_empty() {
        let minutes = policy
            .overrides
            .iter()
            .fold(0, |max, o| max.max(o.minutes));
        Some(lead(start_millis, minutes, tz))
    } else {
        Some(ReminderSetting::empty())
    }
}

fn lead(start_millis: i64, minutes: i64, tz: Tz) -> ReminderSetting {
    match time::local_stamp(start_millis - minutes * MINUTE_MILLIS, tz) {
        Some(stamp) => ReminderSetting::at(stamp.date, stamp.time),
        None => ReminderSetting::empty(),
    }
}
