//! Configuration options for building a [`TextsBetween`] pattern.
//!
//! [`PatternOptions`] is a plain value: fill it with the fluent setters (or
//! deserialize it from a config file) and hand it to
//! [`TextsBetween::with_options`], which validates it once.
//!
//! ## Examples
//!
//! ```rust
//! use texts_between::{PatternOptions, TextsBetween};
//!
//! // `${name}` placeholders, `'` as escape character
//! let pattern = PatternOptions::new("${", "}")
//!     .with_escape("'")
//!     .build()
//!     .unwrap();
//! assert_eq!(pattern.get("hello ${name}").unwrap(), vec!["name"]);
//!
//! // Bracketed variables that may contain other bracketed variables
//! let nested = TextsBetween::builder("[", "]")
//!     .with_nested_allowed()
//!     .build()
//!     .unwrap();
//! assert_eq!(nested.get("[i18n:Hello [name]]").unwrap(), vec!["i18n:Hello [name]"]);
//! ```

use crate::{Result, TextsBetween};
use serde::{Deserialize, Serialize};

/// Escape sequence used when none is configured.
pub const DEFAULT_ESCAPE: &str = "\\";

/// Configuration options for a [`TextsBetween`] pattern.
///
/// Only `start` and `end` are required; the remaining fields default to a
/// backslash escape, no nesting, and strict handling of unterminated starts.
///
/// # Examples
///
/// ```rust
/// use texts_between::PatternOptions;
///
/// let options = PatternOptions::new("{{", "}}");
/// assert_eq!(options.escape, "\\");
/// assert!(!options.allow_nested);
/// assert!(!options.ignore_stale_start);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternOptions {
    pub start: String,
    pub end: String,
    #[serde(default = "default_escape")]
    pub escape: String,
    #[serde(default)]
    pub allow_nested: bool,
    #[serde(default)]
    pub ignore_stale_start: bool,
}

fn default_escape() -> String {
    DEFAULT_ESCAPE.to_string()
}

impl PatternOptions {
    /// Creates options for the given start and end markers with default settings.
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        PatternOptions {
            start: start.into(),
            end: end.into(),
            escape: default_escape(),
            allow_nested: false,
            ignore_stale_start: false,
        }
    }

    /// Sets the escape character (or string) that turns a marker into plain text.
    ///
    /// Default is `\`. The escape may equal the markers: with `"` as start,
    /// end and escape, a doubled `""` inside a quoted value is a literal quote.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use texts_between::PatternOptions;
    ///
    /// let quotes = PatternOptions::new("\"", "\"").with_escape("\"").build().unwrap();
    /// assert_eq!(quotes.get(r#"say "wor""ld""#).unwrap(), vec![r#"wor"ld"#]);
    /// ```
    #[must_use]
    pub fn with_escape(mut self, escape: impl Into<String>) -> Self {
        self.escape = escape.into();
        self
    }

    /// Allows start markers inside an open match, e.g. `[i18n:Hello [name]]`.
    ///
    /// Only the outermost pair delimits a match; inner markers stay in the
    /// extracted text. Building fails if start and end markers are identical.
    #[must_use]
    pub fn with_nested_allowed(mut self) -> Self {
        self.allow_nested = true;
        self
    }

    /// Silently drops a start marker that is never closed instead of failing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use texts_between::PatternOptions;
    ///
    /// let lenient = PatternOptions::new("[", "]").with_stale_start_ignored().build().unwrap();
    /// assert!(lenient.get("[abc").unwrap().is_empty());
    /// ```
    #[must_use]
    pub fn with_stale_start_ignored(mut self) -> Self {
        self.ignore_stale_start = true;
        self
    }

    /// Validates the options and builds the pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`](crate::ConfigurationError) if a marker is
    /// empty or nesting is requested with identical markers.
    pub fn build(self) -> Result<TextsBetween> {
        TextsBetween::with_options(self)
    }
}
