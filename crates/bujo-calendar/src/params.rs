//! Projection of a normalized task into creation parameters.

use bujo_core::{CreateTaskParams, Task};

/// Projects a task into the flat record the creation API accepts.
///
/// Pure projection: scalar fields are copied verbatim and assignees are
/// flattened to their names. Calendar-sourced tasks never carry labels, so
/// the label list is unconditionally empty.
pub fn to_create_params(task: &Task) -> CreateTaskParams {
    CreateTaskParams {
        name: task.name.clone(),
        due_date: task.due_date.clone(),
        due_time: task.due_time.clone(),
        duration: task.duration,
        reminder_setting: task.reminder_setting.clone(),
        assignees: task.assignees.iter().map(|a| a.name.clone()).collect(),
        timezone: task.timezone.clone(),
        recurrence_rule: task.recurrence_rule.clone(),
        labels: Vec::new(),
        location: task.location.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RequestContext;
    use crate::event::{EventDateTime, EventReminders, ExternalEvent};
    use crate::normalize::normalize;
    use bujo_core::{ReminderSetting, User};
    use chrono::{TimeZone, Utc};
    use chrono_tz::America::Los_Angeles;

    #[test]
    fn copies_every_scalar_field() {
        let mut task = Task::new(User::new("alice"), "Standup", "America/Los_Angeles");
        task.due_date = Some("2020-07-01".to_string());
        task.due_time = Some("09:00".to_string());
        task.duration = Some(30);
        task.recurrence_rule = Some("DTSTART:20200701T090000 RRULE:FREQ=DAILY".to_string());
        task.reminder_setting = Some(ReminderSetting::at("2020-07-01", "08:30"));
        task.location = Some("Room 1".to_string());

        let params = to_create_params(&task);
        assert_eq!(params.name, task.name);
        assert_eq!(params.due_date, task.due_date);
        assert_eq!(params.due_time, task.due_time);
        assert_eq!(params.duration, task.duration);
        assert_eq!(params.reminder_setting, task.reminder_setting);
        assert_eq!(params.timezone, task.timezone);
        assert_eq!(params.recurrence_rule, task.recurrence_rule);
        assert_eq!(params.location, task.location);
        assert_eq!(params.assignees, vec!["alice".to_string()]);
        assert!(params.labels.is_empty());
    }

    #[test]
    fn projects_normalized_task_unchanged() {
        let event = ExternalEvent::new("evt-1")
            .with_summary("Planning")
            .with_location("Room 2")
            .with_start(EventDateTime::from_millis(
                Utc.with_ymd_and_hms(2020, 7, 1, 16, 0, 0)
                    .unwrap()
                    .timestamp_millis(),
            ))
            .with_reminders(EventReminders::default_reminder());

        let imported = normalize(
            &event,
            &RequestContext::authenticated("alice"),
            Los_Angeles,
        )
        .unwrap();
        let params = to_create_params(&imported.task);

        assert_eq!(params.name, imported.task.name);
        assert_eq!(params.due_date, imported.task.due_date);
        assert_eq!(params.due_time, imported.task.due_time);
        assert_eq!(params.reminder_setting, imported.task.reminder_setting);
        assert_eq!(params.location, imported.task.location);
        assert_eq!(params.assignees, vec!["alice".to_string()]);
        assert!(params.labels.is_empty());
    }
}
