//! The insert-segment document consumed by the rich-text editor.
//!
//! Content bodies are stored in two forms: a presentation string (HTML-ish,
//! built elsewhere) and a *base text* — an ordered list of `{"insert": ...}`
//! operations with explicit line-break entries, serialized as a textual JSON
//! array. [`BlockDocument`] builds that sequence functionally and renders it
//! once.
//!
//! The rendering is byte-exact with what the downstream editor expects:
//! every appended segment is followed by a comma, and the array always closes
//! with one final line-break insert. Segment text is embedded verbatim, with
//! no JSON string escaping; that matches the upstream renderer, which feeds
//! pre-sanitized plain text through this path.

use serde::{Deserialize, Serialize};

/// One operation in a base-text document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum InsertSegment {
    /// A run of text with no line breaks.
    Text(String),
    /// An explicit line-break marker.
    LineBreak,
}

impl InsertSegment {
    fn render(&self) -> String {
        match self {
            Self::Text(text) => format!("{{\"insert\":\"{}\"}}", text),
            Self::LineBreak => "{\"insert\":\"\\n\"}".to_string(),
        }
    }
}

/// An ordered, append-only sequence of insert segments.
///
/// Built with the consuming [`text`](Self::text) and
/// [`line_break`](Self::line_break) builders, then rendered once with
/// [`render`](Self::render). Input order is preserved exactly — no sorting,
/// no deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDocument {
    segments: Vec<InsertSegment>,
}

impl BlockDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text segment.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.segments.push(InsertSegment::Text(text.into()));
        self
    }

    /// Appends a line-break segment.
    pub fn line_break(mut self) -> Self {
        self.segments.push(InsertSegment::LineBreak);
        self
    }

    /// Returns the segments appended so far.
    pub fn segments(&self) -> &[InsertSegment] {
        &self.segments
    }

    /// Returns `true` if no segments have been appended.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Renders the document as the textual JSON array the editor consumes.
    ///
    /// Every appended segment gets a trailing comma; the array then closes
    /// with one unconditional `{"insert":"\n"}` entry, so the document always
    /// ends with exactly one line break.
    pub fn render(&self) -> String {
        let mut out = String::from("[");
        for segment in &self.segments {
            out.push_str(&segment.render());
            out.push(',');
        }
        out.push_str("{\"insert\":\"\\n\"}");
        out.push(']');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_single_line_break() {
        assert_eq!(BlockDocument::new().render(), r#"[{"insert":"\n"}]"#);
    }

    #[test]
    fn segments_render_in_order_with_trailing_commas() {
        let doc = BlockDocument::new()
            .text("first")
            .line_break()
            .text("second")
            .line_break();
        assert_eq!(
            doc.render(),
            r#"[{"insert":"first"},{"insert":"\n"},{"insert":"second"},{"insert":"\n"},{"insert":"\n"}]"#
        );
    }

    #[test]
    fn rendered_output_is_parseable_json() {
        let doc = BlockDocument::new().text("hello").line_break();
        let parsed: serde_json::Value = serde_json::from_str(&doc.render()).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["insert"], "hello");
        assert_eq!(entries[2]["insert"], "\n");
    }

    #[test]
    fn segments_are_inspectable() {
        let doc = BlockDocument::new().text("a").line_break();
        assert_eq!(
            doc.segments(),
            &[
                InsertSegment::Text("a".to_string()),
                InsertSegment::LineBreak
            ]
        );
        assert!(!doc.is_empty());
        assert!(BlockDocument::new().is_empty());
    }
}
