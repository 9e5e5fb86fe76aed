//! Core types: tasks, contents, reminders, rich text, time helpers

pub mod content;
pub mod richtext;
pub mod task;
pub mod time;
pub mod tracing;

pub use content::Content;
pub use richtext::{BlockDocument, InsertSegment};
pub use task::{CreateTaskParams, ReminderSetting, Task, User};
pub use time::{LocalStamp, MINUTE_MILLIS};
pub use tracing::{TracingConfig, TracingError, TracingFormat, init_tracing};
