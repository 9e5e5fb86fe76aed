//! Calendar event normalization engine.
//!
//! This crate converts third-party calendar events into the internal
//! task/content pair and projects normalized tasks back into creation
//! parameters:
//!
//! ```text
//! ┌───────────────┐
//! │ ExternalEvent │  provider wire model (camelCase serde)
//! └───────┬───────┘
//!         │  normalize(event, ctx, tz)
//!         ▼
//! ┌───────────────┐      ┌──────────────────┐
//! │ ImportedEvent │──────│ Task + Content   │
//! └───────┬───────┘      └──────────────────┘
//!         │  to_create_params(&task)
//!         ▼
//! ┌──────────────────┐
//! │ CreateTaskParams │  submitted to the persistence boundary
//! └──────────────────┘
//! ```
//!
//! Everything here is a pure, stateless transformation over explicit
//! inputs: the acting user arrives as a [`RequestContext`] value, the target
//! timezone as a typed [`chrono_tz::Tz`], and no state is retained between
//! calls, so concurrent use across events is safe by construction.
//!
//! # Example
//!
//! ```
//! use bujo_calendar::{ExternalEvent, EventDateTime, RequestContext, normalize};
//!
//! let event = ExternalEvent::new("evt-1")
//!     .with_summary("Planning")
//!     .with_start(EventDateTime::from_millis(1_593_619_200_000));
//!
//! let ctx = RequestContext::authenticated("alice");
//! let imported = normalize(&event, &ctx, chrono_tz::America::Los_Angeles)?;
//! assert_eq!(imported.task.due_time.as_deref(), Some("09:00"));
//! # Ok::<(), bujo_calendar::ConvertError>(())
//! ```

pub mod compose;
pub mod context;
pub mod datetime;
pub mod error;
pub mod event;
pub mod normalize;
pub mod params;
pub mod recurrence;
pub mod reminder;

// Re-export main types at crate root
pub use compose::{ComposedText, compose, strip_html_tags};
pub use context::RequestContext;
pub use error::{ConvertError, ConvertResult};
pub use event::{
    EventAttendee, EventDateTime, EventReminders, EventTimestamp, ExternalEvent, ReminderOverride,
};
pub use normalize::{ImportedEvent, normalize};
pub use params::to_create_params;
pub use reminder::DEFAULT_REMINDER_MINUTES;
