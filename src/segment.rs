//! Splitting scanned text into literal runs and matches.
//!
//! [`RawSegment`] borrows straight from the input and keeps escape sequences
//! as written, so the raw segments of a text always concatenate back to it.
//! [`Segment`] is the owned, decoded form returned by
//! [`TextsBetween::split`](crate::TextsBetween::split).

use crate::matcher::Span;
use crate::TextsBetween;
use serde::{Deserialize, Serialize};

/// A piece of the input as written, before escape decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawSegment<'t> {
    /// Text outside any match.
    Literal(&'t str),
    /// A match: `text` includes both markers, `inner` is what lies between them.
    Match { text: &'t str, inner: &'t str },
}

impl<'t> RawSegment<'t> {
    /// The exact input slice this segment covers.
    #[must_use]
    pub const fn as_str(&self) -> &'t str {
        match *self {
            RawSegment::Literal(text) | RawSegment::Match { text, .. } => text,
        }
    }

    /// Decodes escape sequences, producing the owned [`Segment`].
    #[must_use]
    pub fn decode(&self, pattern: &TextsBetween) -> Segment {
        match *self {
            RawSegment::Literal(text) => Segment::Literal(pattern.unescape(text).into_owned()),
            RawSegment::Match { text, inner } => Segment::Match {
                text: text.to_string(),
                inner: pattern.unescape(inner).into_owned(),
            },
        }
    }
}

/// A decoded piece of the input.
///
/// Serializes untagged: a literal becomes a plain string, a match becomes
/// `{"text": ..., "inner": ...}`.
///
/// # Examples
///
/// ```rust
/// use texts_between::{Segment, TextsBetween};
///
/// let segments = TextsBetween::new("[", "]").unwrap().split("[var] hello").unwrap();
/// assert_eq!(
///     segments,
///     vec![
///         Segment::Match { text: "[var]".to_string(), inner: "var".to_string() },
///         Segment::Literal(" hello".to_string()),
///     ]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    /// Text outside any match, escapes decoded.
    Literal(String),
    /// A match: `text` is the full match as written, markers included;
    /// `inner` is the enclosed text with escapes decoded.
    Match { text: String, inner: String },
}

impl Segment {
    /// Returns `true` if this is a match.
    #[inline]
    #[must_use]
    pub const fn is_match(&self) -> bool {
        matches!(self, Segment::Match { .. })
    }

    /// Returns `true` if this is a literal run.
    #[inline]
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Segment::Literal(_))
    }

    /// The enclosed text of a match, or `None` for a literal.
    #[inline]
    #[must_use]
    pub fn inner(&self) -> Option<&str> {
        match self {
            Segment::Match { inner, .. } => Some(inner),
            Segment::Literal(_) => None,
        }
    }

    /// The text of a literal, or `None` for a match.
    #[inline]
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Segment::Literal(text) => Some(text),
            Segment::Match { .. } => None,
        }
    }
}

/// Cuts `text` at the given spans.
///
/// Empty literal runs are skipped; matches are always kept, even with nothing
/// between the markers.
pub(crate) fn split_raw<'t>(
    text: &'t str,
    spans: &[Span],
    start_len: usize,
    end_len: usize,
) -> Vec<RawSegment<'t>> {
    let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;

    for span in spans {
        if span.open > cursor {
            segments.push(RawSegment::Literal(&text[cursor..span.open]));
        }
        let range = span.range();
        segments.push(RawSegment::Match {
            text: &text[range.clone()],
            inner: &text[range.start + start_len..range.end - end_len],
        });
        cursor = range.end;
    }

    if cursor < text.len() {
        segments.push(RawSegment::Literal(&text[cursor..]));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(open: usize, close: usize) -> Span {
        Span { open, close }
    }

    #[test]
    fn test_no_spans() {
        assert_eq!(split_raw("hello", &[], 1, 1), vec![RawSegment::Literal("hello")]);
        assert!(split_raw("", &[], 1, 1).is_empty());
    }

    #[test]
    fn test_leading_gap_and_trailing_literals() {
        let text = "a [b] c [d] e";
        let segments = split_raw(text, &[span(2, 4), span(8, 10)], 1, 1);
        assert_eq!(
            segments,
            vec![
                RawSegment::Literal("a "),
                RawSegment::Match { text: "[b]", inner: "b" },
                RawSegment::Literal(" c "),
                RawSegment::Match { text: "[d]", inner: "d" },
                RawSegment::Literal(" e"),
            ]
        );
    }

    #[test]
    fn test_adjacent_matches_have_no_empty_literal() {
        let segments = split_raw("[my][world]", &[span(0, 3), span(4, 10)], 1, 1);
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|s| matches!(s, RawSegment::Match { .. })));
    }

    #[test]
    fn test_empty_inner_kept() {
        let segments = split_raw("{{}}", &[span(0, 3)], 2, 2);
        assert_eq!(segments, vec![RawSegment::Match { text: "{{}}", inner: "" }]);
    }

    #[test]
    fn test_raw_segments_concatenate_to_input() {
        let text = "\n[hello] \n wo[\n]d";
        let joined: String = split_raw(text, &[span(1, 7), span(13, 15)], 1, 1)
            .iter()
            .map(RawSegment::as_str)
            .collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_segment_accessors() {
        let literal = Segment::Literal("x".to_string());
        let matched = Segment::Match {
            text: "[y]".to_string(),
            inner: "y".to_string(),
        };
        assert!(literal.is_literal() && !literal.is_match());
        assert_eq!(literal.as_literal(), Some("x"));
        assert_eq!(literal.inner(), None);
        assert_eq!(matched.inner(), Some("y"));
        assert_eq!(matched.as_literal(), None);
    }
}
