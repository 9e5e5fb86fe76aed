//! Dual-format text composition from event descriptive fields.
//!
//! Every normalized event produces two renderings of the same material:
//!
//! - **Presentation text** — an HTML-ish string for direct display. It keeps
//!   the *raw* description (markup intact, the HTML renderer downstream
//!   expects it to survive) and appends bold-tagged location and attendee
//!   blocks, with mail-to hyperlinks for attendees that carry an email.
//! - **Base text** — the structured insert-segment document for the rich
//!   editor, built from the *tag-stripped* description, with plain-text
//!   location and attendee blocks and no email addresses.
//!
//! The raw-vs-sanitized asymmetry between the two outputs is deliberate and
//! load-bearing; do not unify it.

use std::sync::LazyLock;

use bujo_core::BlockDocument;
use regex::Regex;

use crate::event::EventAttendee;

/// Regex matching an angle-bracket tag.
///
/// Tag removal is a naive, non-parsing pass: it does not understand nested
/// or malformed markup and will over- or under-strip on pathological input.
static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));

/// Strips anything matching an angle-bracket tag pattern from the text.
pub fn strip_html_tags(text: &str) -> String {
    TAG_REGEX.replace_all(text, "").into_owned()
}

/// The output of [`compose`]: both text renderings plus the pass-through
/// location.
///
/// `location` is populated iff the event carried one; the normalizer copies
/// it onto the task from here. A task whose event never reaches composition
/// never receives a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedText {
    /// Presentation text, for direct display.
    pub text: String,
    /// Rendered insert-segment document.
    pub base_text: String,
    /// The event location, if present.
    pub location: Option<String>,
}

/// Builds both text renderings from description, location, and attendees.
pub fn compose(
    description: Option<&str>,
    location: Option<&str>,
    attendees: &[EventAttendee],
) -> ComposedText {
    let named: Vec<&EventAttendee> = attendees.iter().filter(|a| a.is_named()).collect();
    ComposedText {
        text: presentation(description, location, &named),
        base_text: base(description.map(|d| strip_html_tags(d)), location, &named).render(),
        location: location.map(ToOwned::to_owned),
    }
}

/// Builds the presentation string from the raw (unstripped) description.
fn presentation(description: Option<&str>, location: Option<&str>, named: &[&EventAttendee]) -> String {
    let mut text = String::new();
    if let Some(description) = description {
        text.push_str(description);
        text.push('\n');
    }
    if let Some(location) = location {
        text.push_str("\n\n<b>Location:</b> ");
        text.push_str(location);
        text.push('\n');
    }
    if !named.is_empty() {
        text.push_str("\n\n<b>Attendees:</b>\n");
        for attendee in named {
            text.push('\n');
            let name = attendee.display_name.as_deref().unwrap_or_default();
            if attendee.has_email() {
                let email = attendee.email.as_deref().unwrap_or_default();
                // The escaped quotes are literal: the consumer embeds this
                // string inside a JSON document.
                text.push_str(&format!(
                    "<a href=\\\"mailto:{}\\\" target=\\\"_blank\\\">{}</a>",
                    email, name
                ));
            } else {
                text.push_str(name);
            }
        }
    }
    text
}

/// Builds the insert-segment document from the sanitized description.
///
/// Each run of characters between line breaks becomes one text segment
/// followed by a line-break segment; a trailing unterminated run still emits
/// both. Consecutive line breaks (including `\r\n`) each emit their own
/// line-break segment with no empty text segment between them.
fn base(
    description: Option<String>,
    location: Option<&str>,
    named: &[&EventAttendee],
) -> BlockDocument {
    let mut doc = BlockDocument::new();

    if let Some(description) = description {
        let mut run = String::new();
        for c in description.chars() {
            if c == '\n' || c == '\r' {
                if !run.is_empty() {
                    doc = doc.text(std::mem::take(&mut run));
                }
                doc = doc.line_break();
            } else {
                run.push(c);
            }
        }
        if !run.is_empty() {
            doc = doc.text(run).line_break();
        }
    }

    if let Some(location) = location {
        doc = doc.line_break().text("Location: ").text(location).line_break();
    }

    if !named.is_empty() {
        doc = doc.line_break().text("Attendees:").line_break();
        for attendee in named {
            let name = attendee.display_name.as_deref().unwrap_or_default();
            doc = doc.line_break().text(name);
        }
    }

    doc
}
