//! Content attached to a task.

use serde::{Deserialize, Serialize};

use crate::task::User;

/// A rich-text body attached to a task, in both stored forms.
///
/// `text` is the presentation rendering (HTML-ish, for direct display);
/// `base_text` is the rendered insert-segment document the structured editor
/// consumes. The two are built from the same source material but are not
/// interchangeable — see [`crate::richtext`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// The owning user.
    pub owner: User,
    /// Presentation text, for direct display.
    pub text: String,
    /// Rendered insert-segment document.
    pub base_text: String,
}
