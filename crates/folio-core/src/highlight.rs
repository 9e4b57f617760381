//! Term highlighting.
//!
//! Highlighting produces a list of [`Segment`]s rather than markup, so the UI
//! can render every piece of service or user text as a plain text node and
//! wrap the highlighted ones in `<mark>` itself.
//!
//! Two sources of highlights are combined:
//! - `<mark>` markers the search service inserted into a snippet
//! - case-insensitive occurrences of the current query text
//!
//! The query is escaped before it becomes a pattern, so `a.b` matches only the
//! literal `a.b`.

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::warn;

const MARK_OPEN: &str = "<mark>";
const MARK_CLOSE: &str = "</mark>";

/// A run of text that is either highlighted or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: false,
        }
    }

    pub fn marked(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: true,
        }
    }
}

/// Case-insensitive matcher for a literal query string.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Regex,
}

impl Highlighter {
    /// Builds a highlighter for `query`, or `None` when there is nothing to match.
    pub fn new(query: &str) -> Option<Self> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        match RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => Some(Self { pattern }),
            Err(e) => {
                // Only reachable through the compiled-size limit on huge inputs.
                warn!("Highlighting disabled for query: {}", e);
                None
            }
        }
    }

    /// Splits `text` into plain and highlighted segments.
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut last = 0;
        for m in self.pattern.find_iter(text) {
            push_segment(&mut segments, &text[last..m.start()], false);
            push_segment(&mut segments, m.as_str(), true);
            last = m.end();
        }
        push_segment(&mut segments, &text[last..], false);
        segments
    }

    /// Number of occurrences of the query in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }
}

/// Highlights occurrences of the query in plain text.
pub fn highlight_text(text: &str, highlighter: Option<&Highlighter>) -> Vec<Segment> {
    match highlighter {
        Some(h) => h.segments(text),
        None => {
            let mut segments = Vec::new();
            push_segment(&mut segments, text, false);
            segments
        }
    }
}

/// Splits a service snippet on its `<mark>` markers.
///
/// An unterminated `<mark>` highlights the rest of the snippet.
pub fn parse_marked(snippet: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = snippet;
    let mut inside = false;

    loop {
        let tag = if inside { MARK_CLOSE } else { MARK_OPEN };
        match rest.find(tag) {
            Some(idx) => {
                push_segment(&mut segments, &rest[..idx], inside);
                rest = &rest[idx + tag.len()..];
                inside = !inside;
            }
            None => {
                push_segment(&mut segments, rest, inside);
                break;
            }
        }
    }

    segments
}

/// Service markers plus query highlighting applied to the unmarked parts.
pub fn highlight_snippet(snippet: &str, highlighter: Option<&Highlighter>) -> Vec<Segment> {
    let mut segments = Vec::new();
    for segment in parse_marked(snippet) {
        if segment.highlighted {
            push_segment(&mut segments, &segment.text, true);
        } else {
            for inner in highlight_text(&segment.text, highlighter) {
                push_segment(&mut segments, &inner.text, inner.highlighted);
            }
        }
    }
    segments
}

/// Renders segments as text, wrapping highlighted runs in `open`/`close`.
pub fn render_segments(segments: &[Segment], open: &str, close: &str) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.highlighted {
            out.push_str(open);
            out.push_str(&segment.text);
            out.push_str(close);
        } else {
            out.push_str(&segment.text);
        }
    }
    out
}

/// Appends text, merging with the previous segment when the flag matches.
fn push_segment(segments: &mut Vec<Segment>, text: &str, highlighted: bool) {
    if text.is_empty() {
        return;
    }
    match segments.last_mut() {
        Some(last) if last.highlighted == highlighted => last.text.push_str(text),
        _ => segments.push(Segment {
            text: text.to_string(),
            highlighted,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match() {
        let h = Highlighter::new("katze").unwrap();
        assert_eq!(
            h.segments("Die Katze und die KATZE"),
            vec![
                Segment::plain("Die "),
                Segment::marked("Katze"),
                Segment::plain(" und die "),
                Segment::marked("KATZE"),
            ]
        );
    }

    #[test]
    fn test_special_characters_are_literal() {
        let h = Highlighter::new("a.b").unwrap();
        // "axb" would match an unescaped pattern
        assert_eq!(
            h.segments("axb a.b"),
            vec![Segment::plain("axb "), Segment::marked("a.b")]
        );
    }

    #[test]
    fn test_regex_metacharacters_do_not_fail() {
        for query in ["(", "[a-", "*", "a+?", "\\", "$^", "{1}", "|"] {
            let h = Highlighter::new(query).expect("escaped pattern must compile");
            let text = format!("before {} after", query);
            assert_eq!(h.count(&text), 1, "query {:?}", query);
        }
    }

    #[test]
    fn test_empty_query_has_no_highlighter() {
        assert!(Highlighter::new("").is_none());
        assert!(Highlighter::new("   ").is_none());
        assert_eq!(highlight_text("text", None), vec![Segment::plain("text")]);
    }

    #[test]
    fn test_query_is_trimmed() {
        let h = Highlighter::new("  cat ").unwrap();
        assert_eq!(h.count("cat concat"), 2);
    }

    #[test]
    fn test_parse_marked() {
        assert_eq!(
            parse_marked("Die <mark>Katze</mark> sass"),
            vec![
                Segment::plain("Die "),
                Segment::marked("Katze"),
                Segment::plain(" sass"),
            ]
        );
    }

    #[test]
    fn test_parse_marked_unterminated() {
        assert_eq!(
            parse_marked("a <mark>b c"),
            vec![Segment::plain("a "), Segment::marked("b c")]
        );
    }

    #[test]
    fn test_parse_marked_keeps_other_markup_as_text() {
        assert_eq!(
            parse_marked("<b>x</b>"),
            vec![Segment::plain("<b>x</b>")]
        );
    }

    #[test]
    fn test_highlight_snippet_merges_sources() {
        let h = Highlighter::new("der").unwrap();
        let segments = highlight_snippet("Die <mark>Katze</mark> der Nachbarn", Some(&h));
        assert_eq!(
            segments,
            vec![
                Segment::plain("Die "),
                Segment::marked("Katze"),
                Segment::plain(" "),
                Segment::marked("der"),
                Segment::plain(" Nachbarn"),
            ]
        );
    }

    #[test]
    fn test_adjacent_highlights_merge() {
        let h = Highlighter::new("ab").unwrap();
        let segments = highlight_snippet("<mark>x</mark>ab", Some(&h));
        assert_eq!(segments, vec![Segment::marked("xab")]);
    }

    #[test]
    fn test_render_segments() {
        let segments = vec![Segment::plain("a "), Segment::marked("b")];
        assert_eq!(render_segments(&segments, "[", "]"), "a [b]");
    }
}
