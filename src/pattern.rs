//! The validated matcher and its operations.

use crate::error::{ConfigurationError, Result};
use crate::escape;
use crate::matcher::{self, Span};
use crate::options::PatternOptions;
use crate::replace::Replacer;
use crate::segment::{self, RawSegment, Segment};
use std::borrow::Cow;

/// Finds texts enclosed between a start and an end marker.
///
/// A `TextsBetween` is validated once when built and never changes
/// afterwards. Every operation is a fresh scan of its input, so one instance
/// can be shared freely, across threads included.
///
/// # Examples
///
/// ```rust
/// use texts_between::TextsBetween;
///
/// let html = "<div><span>[name]</span><label>[title]</label></div>";
/// let brackets = TextsBetween::new("[", "]").unwrap();
///
/// assert_eq!(brackets.get(html).unwrap(), vec!["name", "title"]);
///
/// let filled = brackets
///     .replace(html, |variable: &str| match variable {
///         "name" => "squid",
///         "title" => "fish",
///         _ => "",
///     })
///     .unwrap();
/// assert_eq!(filled, "<div><span>squid</span><label>fish</label></div>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextsBetween {
    start: String,
    end: String,
    escape: String,
    allow_nested: bool,
    ignore_stale_start: bool,
}

impl TextsBetween {
    /// Creates a pattern with default options: `\` escape, no nesting, strict
    /// handling of unterminated start markers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingMarker`] if either marker is empty.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self> {
        Self::with_options(PatternOptions::new(start, end))
    }

    /// Starts building a pattern with non-default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use texts_between::TextsBetween;
    ///
    /// let pattern = TextsBetween::builder("${", "}")
    ///     .with_escape("'")
    ///     .with_stale_start_ignored()
    ///     .build()
    ///     .unwrap();
    /// assert!(pattern.get("hello '${my} ${world'}").unwrap().is_empty());
    /// ```
    #[must_use]
    pub fn builder(start: impl Into<String>, end: impl Into<String>) -> PatternOptions {
        PatternOptions::new(start, end)
    }

    /// Validates `options` and builds the pattern.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::MissingMarker`] if `start` or `end` is empty.
    /// - [`ConfigurationError::NestingNotSupported`] if nesting is requested
    ///   while `start` and `end` are identical.
    pub fn with_options(options: PatternOptions) -> Result<Self> {
        let PatternOptions {
            start,
            end,
            escape,
            allow_nested,
            ignore_stale_start,
        } = options;

        if start.is_empty() || end.is_empty() {
            return Err(ConfigurationError::MissingMarker.into());
        }
        if allow_nested && start == end {
            return Err(ConfigurationError::NestingNotSupported { marker: start }.into());
        }

        Ok(TextsBetween {
            start,
            end,
            escape,
            allow_nested,
            ignore_stale_start,
        })
    }

    /// The marker that opens a match.
    #[inline]
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// The marker that closes a match.
    #[inline]
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }

    /// The escape sequence; empty when escaping is disabled.
    #[inline]
    #[must_use]
    pub fn escape(&self) -> &str {
        &self.escape
    }

    /// Whether start markers may nest inside an open match.
    #[inline]
    #[must_use]
    pub const fn allows_nested(&self) -> bool {
        self.allow_nested
    }

    /// Whether an unterminated start marker is dropped instead of reported.
    #[inline]
    #[must_use]
    pub const fn ignores_stale_start(&self) -> bool {
        self.ignore_stale_start
    }

    /// Returns the options this pattern was built from.
    #[must_use]
    pub fn options(&self) -> PatternOptions {
        PatternOptions {
            start: self.start.clone(),
            end: self.end.clone(),
            escape: self.escape.clone(),
            allow_nested: self.allow_nested,
            ignore_stale_start: self.ignore_stale_start,
        }
    }

    /// Scans `text` and returns the flat list of match boundaries.
    ///
    /// Even positions hold the byte offset of the first byte of a start
    /// marker, odd positions the byte offset of the last byte of the end
    /// marker that closes it. Only outermost matches are listed.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`](crate::ParseError) for a nested start marker
    /// when nesting is disabled, or an unterminated start marker when stale
    /// starts are not ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use texts_between::TextsBetween;
    ///
    /// let brackets = TextsBetween::new("[", "]").unwrap();
    /// assert_eq!(brackets.boundaries("[hello] ny [world]").unwrap(), vec![0, 6, 11, 17]);
    /// ```
    pub fn boundaries(&self, text: &str) -> Result<Vec<usize>> {
        Ok(matcher::boundaries(self, text)?)
    }

    /// Scans `text` and returns every outermost match as a [`Span`].
    ///
    /// # Errors
    ///
    /// Same as [`TextsBetween::boundaries`].
    pub fn spans(&self, text: &str) -> Result<Vec<Span>> {
        Ok(matcher::spans_from(&self.boundaries(text)?))
    }

    /// Splits `text` into literal runs and matches, without decoding escapes.
    ///
    /// The returned pieces borrow from `text` and concatenate back to it.
    ///
    /// # Errors
    ///
    /// Same as [`TextsBetween::boundaries`].
    pub fn raw_segments<'t>(&self, text: &'t str) -> Result<Vec<RawSegment<'t>>> {
        let spans = self.spans(text)?;
        Ok(segment::split_raw(
            text,
            &spans,
            self.start.len(),
            self.end.len(),
        ))
    }

    /// Scans `text` once and keeps the decoded segments.
    ///
    /// Use this when the same text is queried more than once.
    ///
    /// # Errors
    ///
    /// Same as [`TextsBetween::boundaries`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use texts_between::TextsBetween;
    ///
    /// let parsed = TextsBetween::new("[", "]").unwrap().parse("[var] hello [my]").unwrap();
    /// assert_eq!(parsed.get(), vec!["var", "my"]);
    /// assert_eq!(parsed.split().len(), 3);
    /// assert_eq!(parsed.replace(|v: &str| v.len().to_string()), "3 hello 2");
    /// ```
    pub fn parse(&self, text: &str) -> Result<Parsed> {
        let segments = self
            .raw_segments(text)?
            .iter()
            .map(|raw| raw.decode(self))
            .collect();
        Ok(Parsed { segments })
    }

    /// Returns the decoded inner text of every match, in order.
    ///
    /// # Errors
    ///
    /// Same as [`TextsBetween::boundaries`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use texts_between::TextsBetween;
    ///
    /// let brackets = TextsBetween::new("[", "]").unwrap();
    /// assert_eq!(brackets.get("[] w [hello] w").unwrap(), vec!["", "hello"]);
    /// assert!(brackets.get("hello world").unwrap().is_empty());
    /// ```
    pub fn get(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .raw_segments(text)?
            .into_iter()
            .filter_map(|raw| match raw {
                RawSegment::Match { inner, .. } => Some(self.unescape(inner).into_owned()),
                RawSegment::Literal(_) => None,
            })
            .collect())
    }

    /// Splits `text` into decoded literal runs and matches.
    ///
    /// # Errors
    ///
    /// Same as [`TextsBetween::boundaries`].
    pub fn split(&self, text: &str) -> Result<Vec<Segment>> {
        Ok(self.parse(text)?.into_segments())
    }

    /// Replaces every match (markers included) with the replacer's output for
    /// its decoded inner text. Literal runs are kept with escapes decoded.
    ///
    /// # Errors
    ///
    /// Same as [`TextsBetween::boundaries`]. Nothing is replaced when the scan
    /// fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use texts_between::TextsBetween;
    ///
    /// let brackets = TextsBetween::new("[", "]").unwrap();
    /// let out = brackets
    ///     .replace("[var] hello [my]", |v: &str| if v == "var" { "1" } else { "X" })
    ///     .unwrap();
    /// assert_eq!(out, "1 hello X");
    /// ```
    pub fn replace<R: Replacer>(&self, text: &str, mut replacer: R) -> Result<String> {
        let mut out = String::with_capacity(text.len());
        for raw in self.raw_segments(text)? {
            match raw {
                RawSegment::Literal(literal) => out.push_str(&self.unescape(literal)),
                RawSegment::Match { inner, .. } => {
                    replacer.replace_append(&self.unescape(inner), &mut out)
                }
            }
        }
        Ok(out)
    }

    pub(crate) fn unescape<'t>(&self, text: &'t str) -> Cow<'t, str> {
        escape::unescape(text, &self.start, &self.end, &self.escape)
    }
}

impl TryFrom<PatternOptions> for TextsBetween {
    type Error = crate::Error;

    fn try_from(options: PatternOptions) -> Result<Self> {
        Self::with_options(options)
    }
}

/// The decoded segments of one scanned text.
///
/// Returned by [`TextsBetween::parse`]; all queries work on the stored
/// segments without scanning again.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Parsed {
    segments: Vec<Segment>,
}

impl Parsed {
    /// Inner texts of all matches, in order.
    #[must_use]
    pub fn get(&self) -> Vec<&str> {
        self.matches().collect()
    }

    /// Iterates over the inner texts of all matches.
    pub fn matches(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().filter_map(Segment::inner)
    }

    /// All segments, in input order.
    #[must_use]
    pub fn split(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Joins the segments, substituting each match with the replacer's output.
    pub fn replace<R: Replacer>(&self, mut replacer: R) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Match { inner, .. } => replacer.replace_append(inner, &mut out),
            }
        }
        out
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl IntoIterator for Parsed {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a> IntoIterator for &'a Parsed {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ParseError};

    fn brackets() -> TextsBetween {
        TextsBetween::new("[", "]").unwrap()
    }

    #[test]
    fn test_missing_marker() {
        assert_eq!(
            TextsBetween::new("[", "").unwrap_err(),
            Error::Configuration(ConfigurationError::MissingMarker)
        );
        assert_eq!(
            TextsBetween::new("", "]").unwrap_err(),
            Error::Configuration(ConfigurationError::MissingMarker)
        );
    }

    #[test]
    fn test_nesting_with_same_markers_rejected() {
        let err = TextsBetween::builder("\"", "\"")
            .with_nested_allowed()
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::NestingNotSupported { .. })
        ));
    }

    #[test]
    fn test_options_roundtrip() {
        let options = PatternOptions::new("<", ">")
            .with_escape("!")
            .with_nested_allowed();
        let pattern = TextsBetween::try_from(options.clone()).unwrap();
        assert_eq!(pattern.options(), options);
        assert_eq!(pattern.start(), "<");
        assert_eq!(pattern.end(), ">");
        assert_eq!(pattern.escape(), "!");
        assert!(pattern.allows_nested());
        assert!(!pattern.ignores_stale_start());
    }

    #[test]
    fn test_get_multi_byte_markers() {
        let pattern = TextsBetween::new("${", "}").unwrap();
        assert_eq!(pattern.get("hello ${my} ${world}").unwrap(), vec!["my", "world"]);

        let pattern = TextsBetween::new("{{", "}}").unwrap();
        assert_eq!(pattern.get("hello {{my}} {{world}}").unwrap(), vec!["my", "world"]);
    }

    #[test]
    fn test_get_extra_end_marker() {
        assert_eq!(brackets().get("hello [my] [wor]ld]").unwrap(), vec!["my", "wor"]);
    }

    #[test]
    fn test_get_multi_line() {
        assert_eq!(brackets().get("\n[hello] \n wo[\n]d").unwrap(), vec!["hello", "\n"]);
    }

    #[test]
    fn test_get_empty_input() {
        assert!(brackets().get("").unwrap().is_empty());
        assert!(brackets().split("").unwrap().is_empty());
        assert_eq!(brackets().replace("", |_: &str| "x").unwrap(), "");
    }

    #[test]
    fn test_split_without_matches() {
        assert_eq!(
            brackets().split("hello world").unwrap(),
            vec![Segment::Literal("hello world".to_string())]
        );
    }

    #[test]
    fn test_split_decodes_literals() {
        let segments = brackets().split("[var] hello \\[my\\][world]").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Match {
                    text: "[var]".to_string(),
                    inner: "var".to_string()
                },
                Segment::Literal(" hello [my]".to_string()),
                Segment::Match {
                    text: "[world]".to_string(),
                    inner: "world".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_match_text_keeps_escapes() {
        let segments = brackets().split("[a\\]b]").unwrap();
        assert_eq!(
            segments,
            vec![Segment::Match {
                text: "[a\\]b]".to_string(),
                inner: "a]b".to_string()
            }]
        );
    }

    #[test]
    fn test_replace_keeps_lone_escape() {
        let out = brackets()
            .replace("[var] hello \\ [my][world]", |v: &str| match v {
                "var" => Some("1"),
                "world" => Some("earth"),
                _ => None,
            })
            .unwrap();
        assert_eq!(out, "1 hello \\ earth");
    }

    #[test]
    fn test_errors_are_all_or_nothing() {
        let mut calls = 0;
        let result = brackets().replace("[a] [b", |_: &str| {
            calls += 1;
            "x"
        });
        assert!(matches!(
            result,
            Err(Error::Parse(ParseError::UnterminatedStart { index: 4, .. }))
        ));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_parsed_queries() {
        let parsed = brackets().parse("a [b] c").unwrap();
        assert_eq!(parsed.len(), 3);
        assert!(!parsed.is_empty());
        assert_eq!(parsed.get(), vec!["b"]);
        assert_eq!(parsed.replace(|_: &str| "B"), "a B c");
        assert_eq!((&parsed).into_iter().filter(|s| s.is_literal()).count(), 2);
        assert_eq!(parsed.into_iter().count(), 3);
    }

    #[test]
    fn test_raw_segments_borrow_input() {
        let text = "x \\[y] [z]";
        let raw = brackets().raw_segments(text).unwrap();
        let joined: String = raw.iter().map(RawSegment::as_str).collect();
        assert_eq!(joined, text);
    }
}
