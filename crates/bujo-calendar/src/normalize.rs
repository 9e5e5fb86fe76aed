//! ExternalEvent to task/content normalization pipeline.
//!
//! [`normalize`] is the engine's forward entry point. Given an external
//! event, an acting user, and a target timezone it produces an
//! [`ImportedEvent`]: the internal [`Task`]/[`Content`] pair plus the
//! provider's event id and the tag-stripped description.
//!
//! The pipeline is fail-soft: every optional input that is missing simply
//! leaves its derived fields unset. The one hard failure is an anonymous
//! context — a produced task must have an owner.

use bujo_core::time::{self, MINUTE_MILLIS};
use bujo_core::{Content, Task, User};
use chrono_tz::Tz;
use tracing::debug;

use crate::compose::{self, strip_html_tags};
use crate::context::RequestContext;
use crate::datetime;
use crate::error::ConvertResult;
use crate::event::ExternalEvent;
use crate::recurrence;
use crate::reminder;

/// The result of normalizing one external event.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImportedEvent {
    /// The internal task, owned by the acting user.
    pub task: Task,
    /// The content attached to the task.
    pub content: Content,
    /// The provider's identifier for the source event.
    pub event_id: String,
    /// The tag-stripped description (empty if the event carried none).
    pub description: String,
}

/// Normalizes an external calendar event into an [`ImportedEvent`].
///
/// Steps:
/// 1. The acting user becomes the task's owner and sole assignee; the task
///    name is the event summary and its timezone the given `tz`.
/// 2. If the start bound resolves to an instant, the recurrence descriptor,
///    duration (when the end also resolves), due date/time, and reminder
///    setting are derived from it. Without a start, all of those stay unset.
/// 3. Description, location, and attendees are composed into the two content
///    text forms; the task receives its location from that composition.
///
/// # Errors
///
/// Returns [`ConvertError::Unauthenticated`](crate::ConvertError::Unauthenticated)
/// if the context carries no acting user.
pub fn normalize(
    event: &ExternalEvent,
    ctx: &RequestContext,
    tz: Tz,
) -> ConvertResult<ImportedEvent> {
    let user = ctx.require_user()?;
    debug!(event_id = %event.id, user, "normalizing calendar event");

    let owner = User::new(user);
    let mut task = Task::new(
        owner.clone(),
        event.summary.clone().unwrap_or_default(),
        tz.name(),
    );

    if let Some(start_millis) = datetime::resolve(event.start.as_ref()) {
        task.recurrence_rule = recurrence::translate(&event.recurrence, start_millis, tz);

        if let Some(end_millis) = datetime::resolve(event.end.as_ref()) {
            task.duration = Some((end_millis - start_millis) / MINUTE_MILLIS);
        }

        // The due fields come from the raw start bound: an all-day date is
        // used verbatim, a timestamp is rendered locally and sliced.
        if let Some(start) = &event.start {
            if let Some(date) = start.date {
                task.due_date = Some(date.to_string());
            } else if start.date_time.is_some() {
                if let Some(stamp) = time::local_stamp(start_millis, tz) {
                    task.due_date = Some(stamp.date);
                    task.due_time = Some(stamp.time);
                }
            }
        }

        task.reminder_setting = reminder::resolve(event.reminders.as_ref(), start_millis, tz);
    }

    let composed = compose::compose(
        event.description.as_deref(),
        event.location.as_deref(),
        &event.attendees,
    );
    task.location = composed.location;

    let content = Content {
        owner,
        text: composed.text,
        base_text: composed.base_text,
    };

    Ok(ImportedEvent {
        task,
        content,
        event_id: event.id.clone(),
        description: event
            .description
            .as_deref()
            .map(strip_html_tags)
            .unwrap_or_default(),
    })
}
