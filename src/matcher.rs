//! Single-pass delimiter scanner.
//!
//! The scanner walks the input once, left to right, feeding each byte to two
//! independent [`MarkerTracker`]s (one for the start marker, one for the end
//! marker) and keeping a count of currently open start markers. It emits a
//! flat list of boundary offsets: even positions are the first byte of an
//! opening start marker, odd positions the last byte of the matching end
//! marker.
//!
//! Matching is done on bytes. Markers are valid UTF-8, so every occurrence
//! found in a `&str` begins and ends on a character boundary and the offsets
//! can be used to slice the input directly.

use crate::error::ParseError;
use crate::TextsBetween;
use std::ops::Range;

/// A matched region of the input.
///
/// `open` is the byte offset of the first byte of the start marker and
/// `close` the byte offset of the last byte of the end marker, so the whole
/// match is `open..=close`.
///
/// # Examples
///
/// ```rust
/// use texts_between::{Span, TextsBetween};
///
/// let spans = TextsBetween::new("{{", "}}").unwrap().spans("hi {{name}}!").unwrap();
/// assert_eq!(spans, vec![Span { open: 3, close: 10 }]);
/// assert_eq!(&"hi {{name}}!"[spans[0].range()], "{{name}}");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub open: usize,
    pub close: usize,
}

impl Span {
    /// Half-open byte range covering the whole match, markers included.
    #[inline]
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.open..self.close + 1
    }

    /// Length of the match in bytes, markers included.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.close + 1 - self.open
    }

    /// Always `false`: a match contains at least its two markers.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Pairs up a boundary list produced by [`boundaries`].
pub(crate) fn spans_from(boundaries: &[usize]) -> Vec<Span> {
    boundaries
        .chunks_exact(2)
        .map(|pair| Span {
            open: pair[0],
            close: pair[1],
        })
        .collect()
}

/// Recognizes occurrences of one marker as bytes are fed to it.
///
/// An occurrence only counts if all of its bytes were fed since the previous
/// occurrence; bytes passed to [`MarkerTracker::skip_through`] can never be part
/// of one.
struct MarkerTracker<'p> {
    marker: &'p [u8],
    floor: usize,
}

impl<'p> MarkerTracker<'p> {
    fn new(marker: &'p [u8]) -> Self {
        MarkerTracker { marker, floor: 0 }
    }

    /// Feeds the byte at `at`; returns `true` if a full occurrence ends there.
    fn feed(&mut self, bytes: &[u8], at: usize) -> bool {
        let len = self.marker.len();
        if at + 1 < self.floor + len || !bytes[..=at].ends_with(self.marker) {
            return false;
        }
        self.floor = at + 1;
        true
    }

    fn skip_through(&mut self, at: usize) {
        self.floor = at + 1;
    }
}

fn is_escaped(bytes: &[u8], marker_at: usize, escape: &[u8]) -> bool {
    !escape.is_empty()
        && marker_at >= escape.len()
        && &bytes[marker_at - escape.len()..marker_at] == escape
}

/// Scans `text` and returns the boundary offsets of every outermost match.
///
/// The returned list always has even length.
pub(crate) fn boundaries(pattern: &TextsBetween, text: &str) -> Result<Vec<usize>, ParseError> {
    let bytes = text.as_bytes();
    let start = pattern.start().as_bytes();
    let end = pattern.end().as_bytes();
    let escape = pattern.escape().as_bytes();

    let same_markers = start == end;
    // `"a""b"`: a doubled marker inside a match is a literal marker
    let doubled_is_literal = same_markers && escape == start;

    let mut starts = MarkerTracker::new(start);
    let mut ends = MarkerTracker::new(end);
    let mut indices = Vec::new();
    let mut depth = 0usize;

    let mut i = 0;
    while i < bytes.len() {
        let mut start_seen = false;

        if depth > 0 && same_markers {
            starts.skip_through(i);
        } else if starts.feed(bytes, i) {
            start_seen = true;
            let open = i + 1 - start.len();
            if !is_escaped(bytes, open, escape) {
                depth += 1;
                if depth == 1 {
                    indices.push(open);
                } else if !pattern.allows_nested() {
                    return Err(ParseError::unexpected_nested_start(text, open));
                }
            }
        }

        if start_seen || depth == 0 {
            ends.skip_through(i);
        } else if ends.feed(bytes, i) {
            if doubled_is_literal {
                if bytes[i + 1..].starts_with(end) {
                    i += end.len() + 1;
                    starts.skip_through(i - 1);
                    ends.skip_through(i - 1);
                    continue;
                }
            } else if is_escaped(bytes, i + 1 - end.len(), escape) {
                i += 1;
                continue;
            }

            depth -= 1;
            if depth == 0 {
                indices.push(i);
            }
        }

        i += 1;
    }

    if depth > 0 {
        debug_assert!(indices.len() % 2 == 1);
        if let Some(open) = indices.pop() {
            if !pattern.ignores_stale_start() {
                return Err(ParseError::unterminated_start(text, open));
            }
            tracing::debug!(index = open, depth, "dropping unterminated start marker");
        }
    }

    tracing::trace!(
        spans = indices.len() / 2,
        bytes = text.len(),
        "scanned text for enclosed values"
    );
    Ok(indices)
}
