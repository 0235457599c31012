//! Error types for pattern construction and text scanning.
//!
//! Errors fall into two families:
//!
//! - [`ConfigurationError`]: the pattern itself is invalid; raised once, when a
//!   [`TextsBetween`](crate::TextsBetween) is built.
//! - [`ParseError`]: a particular input cannot be scanned with a valid pattern.
//!   Every parse error carries the byte offset of the offending marker along
//!   with its line and column.
//!
//! Both convert into the crate-wide [`Error`] so `?` works across construction
//! and scanning.
//!
//! ## Examples
//!
//! ```rust
//! use texts_between::{Error, ParseError, TextsBetween};
//!
//! let brackets = TextsBetween::new("[", "]").unwrap();
//! let err = brackets.get("hello [world").unwrap_err();
//!
//! match err {
//!     Error::Parse(ParseError::UnterminatedStart { index, line, col }) => {
//!         assert_eq!((index, line, col), (6, 1, 7));
//!     }
//!     other => panic!("unexpected error: {other}"),
//! }
//! ```

use thiserror::Error;

/// An invalid pattern configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Start or end marker is empty.
    #[error("Missing marker: start and end markers must both be non-empty")]
    MissingMarker,

    /// Nesting was requested but start and end markers are identical.
    #[error("Nesting not supported: start and end markers are both {marker:?}, nested matches cannot be told apart")]
    NestingNotSupported { marker: String },
}

/// An input that cannot be scanned with the configured pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A start marker appeared inside an open match while nesting is disabled.
    #[error("Unexpected nested start marker at index {index} (line {line}, column {col})\nHelp: enable nesting or escape the marker")]
    UnexpectedNestedStart {
        index: usize,
        line: usize,
        col: usize,
    },

    /// Input ended while a start marker was still open.
    #[error("Unterminated start marker at index {index} (line {line}, column {col})\nHelp: close the marker, escape it, or ignore stale starts")]
    UnterminatedStart {
        index: usize,
        line: usize,
        col: usize,
    },
}

impl ParseError {
    /// Creates a [`ParseError::UnexpectedNestedStart`] for the byte at `index` of `text`.
    pub fn unexpected_nested_start(text: &str, index: usize) -> Self {
        let (line, col) = line_col(text, index);
        ParseError::UnexpectedNestedStart { index, line, col }
    }

    /// Creates a [`ParseError::UnterminatedStart`] for the byte at `index` of `text`.
    pub fn unterminated_start(text: &str, index: usize) -> Self {
        let (line, col) = line_col(text, index);
        ParseError::UnterminatedStart { index, line, col }
    }

    /// Byte offset of the marker that caused the error.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            ParseError::UnexpectedNestedStart { index, .. }
            | ParseError::UnterminatedStart { index, .. } => *index,
        }
    }
}

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The pattern could not be built.
    #[error("Invalid pattern: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The input could not be scanned.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// A [`Value`](crate::Value) did not hold the requested type.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },
}

impl Error {
    /// Creates a type mismatch error for [`Value`](crate::Value) extraction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use texts_between::Error;
    ///
    /// let err = Error::type_mismatch("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Returns the parse error if this is one.
    #[must_use]
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(err) => Some(err),
            _ => None,
        }
    }
}

/// 1-based line and column (in characters) of the byte at `index`.
///
/// An `index` inside a multi-byte character counts as that character.
fn line_col(text: &str, index: usize) -> (usize, usize) {
    let mut end = index.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let before = &text[..end];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |pos| pos + 1);
    let col = before[line_start..].chars().count() + 1;
    (line, col)
}

pub type Result<T> = std::result::Result<T, Error>;
