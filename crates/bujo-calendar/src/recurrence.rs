//! Translation of raw recurrence rule lines into a recurrence descriptor.

use bujo_core::time;
use chrono_tz::Tz;

/// Builds a recurrence descriptor from raw rule lines and a start instant.
///
/// The descriptor anchors the first rule line at the start instant rendered
/// in the target timezone: `"DTSTART:<anchor> <rule-line-0>"`, e.g.
/// `"DTSTART:20200701T090000 RRULE:FREQ=DAILY;UNTIL=20200724T065959Z"`.
///
/// Only the first rule line is kept. Accompanying lines (exception dates,
/// secondary rules) are dropped; the descriptor format holds a single rule,
/// and that limitation is part of the contract rather than something to
/// paper over here.
pub fn translate(rule_lines: &[String], start_millis: i64, tz: Tz) -> Option<String> {
    let first = rule_lines.first()?;
    let anchor = time::compact_local(start_millis, tz)?;
    Some(format!("DTSTART:{} {}", anchor, first))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use chrono_tz::America::Los_Angeles;

    const DAILY: &str = "RRULE:FREQ=DAILY;UNTIL=20200724T065959Z";

    fn start() -> i64 {
        // 2020-07-01 16:00 UTC, i.e. 09:00 in Los Angeles.
        Utc.with_ymd_and_hms(2020, 7, 1, 16, 0, 0)
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn empty_rule_list_yields_none() {
        assert_eq!(translate(&[], start(), Los_Angeles), None);
    }

    #[test]
    fn anchors_rule_at_local_start() {
        let rules = vec![DAILY.to_string()];
        assert_eq!(
            translate(&rules, start(), Los_Angeles).as_deref(),
            Some("DTSTART:20200701T090000 RRULE:FREQ=DAILY;UNTIL=20200724T065959Z")
        );
    }

    #[test]
    fn keeps_only_the_first_rule_line() {
        let rules = vec![DAILY.to_string(), "EXDATE:20200710T160000Z".to_string()];
        let descriptor = translate(&rules, start(), Los_Angeles).unwrap();
        assert!(descriptor.ends_with(DAILY));
        assert!(!descriptor.contains("EXDATE"));
    }
}
