//! Task types.
//!
//! This module provides the task-side value types:
//! - [`User`]: an identity by name
//! - [`Task`]: a scheduled task owned by a user
//! - [`ReminderSetting`]: an optional local reminder date/time
//! - [`CreateTaskParams`]: the flat parameter record submitted to the
//!   creation API
//!
//! All fields are plain data; nothing here touches persistence.

use serde::{Deserialize, Serialize};

/// A user identity, by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The user's account name.
    pub name: String,
}

impl User {
    /// Creates a user with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A reminder rendered as local date/time strings.
///
/// Both fields may be unset: a reminder policy that requests neither the
/// default lead time nor any override still produces an (empty) setting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderSetting {
    /// Local reminder date, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Local reminder time, `HH:MM`.
    pub time: Option<String>,
}

impl ReminderSetting {
    /// Creates a reminder setting with neither date nor time.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a reminder setting at the given local date and time.
    pub fn at(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            time: Some(time.into()),
        }
    }

    /// Returns `true` if neither date nor time is set.
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.time.is_none()
    }
}

/// A task with its schedule rendered in a fixed timezone.
///
/// Due date/time, duration, recurrence, and reminder are all optional:
/// whether each is populated depends on what the source carried (see the
/// calendar normalizer). `due_time` is only ever set alongside `due_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// The owning user.
    pub owner: User,
    /// Users the task is assigned to.
    pub assignees: Vec<User>,
    /// Display name.
    pub name: String,
    /// IANA timezone name the date/time strings are local to.
    pub timezone: String,
    /// Local due date, `YYYY-MM-DD`.
    pub due_date: Option<String>,
    /// Local due time, `HH:MM`.
    pub due_time: Option<String>,
    /// Duration in whole minutes.
    pub duration: Option<i64>,
    /// Recurrence descriptor (`DTSTART:<anchor> <rule>`).
    pub recurrence_rule: Option<String>,
    /// Reminder setting, if the source carried a reminder policy.
    pub reminder_setting: Option<ReminderSetting>,
    /// Free-text location.
    pub location: Option<String>,
}

impl Task {
    /// Creates a task owned by `owner`, with the owner as sole assignee.
    pub fn new(owner: User, name: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self {
            assignees: vec![owner.clone()],
            owner,
            name: name.into(),
            timezone: timezone.into(),
            due_date: None,
            due_time: None,
            duration: None,
            recurrence_rule: None,
            reminder_setting: None,
            location: None,
        }
    }
}

/// The flat parameter record submitted to the task-creation API.
///
/// Derived from a [`Task`] by pure projection; it carries no identity of its
/// own until the persistence boundary accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskParams {
    /// Display name.
    pub name: String,
    /// Local due date, `YYYY-MM-DD`.
    pub due_date: Option<String>,
    /// Local due time, `HH:MM`.
    pub due_time: Option<String>,
    /// Duration in whole minutes.
    pub duration: Option<i64>,
    /// Reminder setting.
    pub reminder_setting: Option<ReminderSetting>,
    /// Assignee names.
    pub assignees: Vec<String>,
    /// IANA timezone name.
    pub timezone: String,
    /// Recurrence descriptor.
    pub recurrence_rule: Option<String>,
    /// Label ids. Calendar-sourced tasks never carry labels.
    pub labels: Vec<i64>,
    /// Free-text location.
    pub location: Option<String>,
}
