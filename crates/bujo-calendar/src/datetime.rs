//! Reduction of a date-or-date-time bound to an absolute instant.

use bujo_core::time;

use crate::event::EventDateTime;

/// Resolves a start/end bound to an epoch-millisecond instant.
///
/// A timestamped value wins over an all-day date; an all-day date resolves
/// to midnight UTC. An entirely absent bound yields `None` — the event
/// simply carries no actionable instant there, which is not an error.
pub fn resolve(bound: Option<&EventDateTime>) -> Option<i64> {
    let bound = bound?;
    if let Some(ts) = &bound.date_time {
        return Some(ts.value);
    }
    bound.date.map(time::date_to_millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn absent_bound_resolves_to_none() {
        assert_eq!(resolve(None), None);
        assert_eq!(resolve(Some(&EventDateTime::default())), None);
    }

    #[test]
    fn date_only_resolves_to_midnight_utc() {
        let bound = EventDateTime::from_date(date(2020, 7, 1));
        assert_eq!(resolve(Some(&bound)), Some(1_593_561_600_000));
    }

    #[test]
    fn timestamp_resolves_to_its_value() {
        let bound = EventDateTime::from_millis(1_593_619_200_000);
        assert_eq!(resolve(Some(&bound)), Some(1_593_619_200_000));
    }

    #[test]
    fn timestamp_wins_over_date() {
        let mut bound = EventDateTime::from_millis(1_593_619_200_000);
        bound.date = Some(date(1999, 1, 1));
        assert_eq!(resolve(Some(&bound)), Some(1_593_619_200_000));
    }
}
