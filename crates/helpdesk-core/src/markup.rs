//! Inline markup used by assistant answers.
//!
//! Answers use a deliberately small convention: a run wrapped in `**` is
//! emphasized and a literal newline is a line break. [`parse`] splits an
//! answer into [`Segment`]s so a presentation layer can render it without
//! re-implementing the convention. An unmatched `**` is kept as literal text.

use serde::Serialize;

/// A piece of rendered answer text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Segment {
    Text(String),
    Emphasis(String),
    LineBreak,
}

const MARKER: &str = "**";

/// Split marked-up text into segments.
pub fn parse(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            segments.push(Segment::LineBreak);
        }
        parse_line(line, &mut segments);
    }

    segments
}

fn parse_line(line: &str, segments: &mut Vec<Segment>) {
    let mut rest = line;

    while let Some(start) = rest.find(MARKER) {
        let after_open = &rest[start + MARKER.len()..];
        let Some(end) = after_open.find(MARKER) else {
            break;
        };

        push_text(segments, &rest[..start]);
        let emphasized = &after_open[..end];
        if !emphasized.is_empty() {
            segments.push(Segment::Emphasis(emphasized.to_string()));
        }
        rest = &after_open[end + MARKER.len()..];
    }

    push_text(segments, rest);
}

fn push_text(segments: &mut Vec<Segment>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Segment::Text(previous)) = segments.last_mut() {
        previous.push_str(text);
    } else {
        segments.push(Segment::Text(text.to_string()));
    }
}

/// Drop the markup, keeping the text and newlines.
pub fn to_plain_text(text: &str) -> String {
    parse(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(s) | Segment::Emphasis(s) => s,
            Segment::LineBreak => "\n".to_string(),
        })
        .collect()
}
