//! External calendar event model.
//!
//! This module defines [`ExternalEvent`], the provider-side representation
//! of a calendar entry as it arrives from a third-party calendar API, before
//! normalization into a task/content pair.
//!
//! Field names follow the provider's camelCase wire format, so these types
//! deserialize directly from API responses. Every descriptive field is
//! optional; the normalizer treats absence as "this event does not carry
//! that information", never as an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A timestamped instant, carried as epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTimestamp {
    /// Epoch milliseconds.
    pub value: i64,
}

/// A start or end bound: either an all-day date or a timestamped date-time.
///
/// Providers populate exactly one of the two fields; if both are somehow
/// present, the date-time wins (see [`crate::datetime::resolve`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    /// All-day date, `YYYY-MM-DD`.
    pub date: Option<NaiveDate>,
    /// Timestamped instant.
    pub date_time: Option<EventTimestamp>,
}

impl EventDateTime {
    /// Creates an all-day bound.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            date_time: None,
        }
    }

    /// Creates a timestamped bound from epoch milliseconds.
    pub fn from_millis(millis: i64) -> Self {
        Self {
            date: None,
            date_time: Some(EventTimestamp { value: millis }),
        }
    }
}

/// A single reminder override: a lead time in minutes before the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderOverride {
    /// Minutes before the event start.
    pub minutes: i64,
}

/// The reminder policy attached to an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventReminders {
    /// Whether the calendar's default lead time applies.
    pub use_default: bool,
    /// Explicit lead-time overrides, in the order the provider listed them.
    #[serde(default)]
    pub overrides: Vec<ReminderOverride>,
}

impl EventReminders {
    /// Creates a policy that uses the calendar default.
    pub fn default_reminder() -> Self {
        Self {
            use_default: true,
            overrides: Vec::new(),
        }
    }

    /// Creates a policy with explicit lead-time overrides in minutes.
    pub fn overrides(minutes: impl IntoIterator<Item = i64>) -> Self {
        Self {
            use_default: false,
            overrides: minutes
                .into_iter()
                .map(|minutes| ReminderOverride { minutes })
                .collect(),
        }
    }
}

/// An attendee of a calendar event. Either field may be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAttendee {
    /// The attendee's display name, if the provider knows one.
    pub display_name: Option<String>,
    /// The attendee's email address.
    pub email: Option<String>,
}

impl EventAttendee {
    /// Creates an attendee with a display name and no email.
    pub fn named(display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            email: None,
        }
    }

    /// Builder method to set the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Returns `true` if the attendee has a non-blank display name.
    ///
    /// Attendees without one are dropped from both text renderings, even if
    /// they carry an email address.
    pub fn is_named(&self) -> bool {
        self.display_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }

    /// Returns `true` if the attendee has a non-blank email address.
    pub fn has_email(&self) -> bool {
        self.email
            .as_deref()
            .is_some_and(|email| !email.trim().is_empty())
    }
}

/// A calendar event as supplied by a third-party provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalEvent {
    /// The provider's identifier for this event.
    pub id: String,

    /// The event title.
    pub summary: Option<String>,

    /// The event description; may contain HTML markup.
    pub description: Option<String>,

    /// The event location.
    pub location: Option<String>,

    /// When the event starts.
    pub start: Option<EventDateTime>,

    /// When the event ends.
    pub end: Option<EventDateTime>,

    /// Raw recurrence rule lines, in provider order. May be empty.
    #[serde(default)]
    pub recurrence: Vec<String>,

    /// The reminder policy, if any.
    pub reminders: Option<EventReminders>,

    /// Event attendees, in provider order.
    #[serde(default)]
    pub attendees: Vec<EventAttendee>,
}

impl ExternalEvent {
    /// Creates an event with the given identifier and no other fields.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Builder method to set the start bound.
    pub fn with_start(mut self, start: EventDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Builder method to set the end bound.
    pub fn with_end(mut self, end: EventDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Builder method to append a recurrence rule line.
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.recurrence.push(rule.into());
        self
    }

    /// Builder method to set the reminder policy.
    pub fn with_reminders(mut self, reminders: EventReminders) -> Self {
        self.reminders = Some(reminders);
        self
    }

    /// Builder method to append an attendee.
    pub fn with_attendee(mut self, attendee: EventAttendee) -> Self {
        self.attendees.push(attendee);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_populates_fields() {
        let event = ExternalEvent::new("evt-1")
            .with_summary("Planning")
            .with_description("Agenda")
            .with_location("Room 2")
            .with_start(EventDateTime::from_millis(1_593_619_200_000))
            .with_rule("RRULE:FREQ=WEEKLY")
            .with_reminders(EventReminders::default_reminder())
            .with_attendee(EventAttendee::named("Bob").with_email("bob@example.com"));

        assert_eq!(event.id, "evt-1");
        assert_eq!(event.summary.as_deref(), Some("Planning"));
        assert_eq!(event.recurrence, vec!["RRULE:FREQ=WEEKLY"]);
        assert!(event.reminders.as_ref().unwrap().use_default);
        assert_eq!(event.attendees.len(), 1);
        assert!(event.end.is_none());
    }

    #[test]
    fn attendee_name_filter_ignores_whitespace() {
        assert!(EventAttendee::named("Bob").is_named());
        assert!(!EventAttendee::named("   ").is_named());
        assert!(!EventAttendee::default().with_email("x@y.z").is_named());
        assert!(!EventAttendee::named("Bob").has_email());
        assert!(EventAttendee::named("Bob").with_email("x@y.z").has_email());
    }

    #[test]
    fn deserializes_provider_wire_format() {
        let json = r#"{
            "id": "evt-wire",
            "summary": "Sync",
            "start": {"dateTime": {"value": 1593619200000}},
            "end": {"date": "2020-07-02"},
            "recurrence": ["RRULE:FREQ=DAILY"],
            "reminders": {"useDefault": false, "overrides": [{"minutes": 10}]},
            "attendees": [{"displayName": "Bob", "email": "bob@example.com"}]
        }"#;

        let event: ExternalEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            event.start,
            Some(EventDateTime::from_millis(1_593_619_200_000))
        );
        assert_eq!(
            event.end,
            Some(EventDateTime::from_date(
                NaiveDate::from_ymd_opt(2020, 7, 2).unwrap()
            ))
        );
        let reminders = event.reminders.unwrap();
        assert!(!reminders.use_default);
        assert_eq!(reminders.overrides, vec![ReminderOverride { minutes: 10 }]);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let event: ExternalEvent = serde_json::from_str(r#"{"id": "evt-min"}"#).unwrap();
        assert!(event.recurrence.is_empty());
        assert!(event.attendees.is_empty());
        assert!(event.reminders.is_none());
        assert!(event.start.is_none());
    }
}
