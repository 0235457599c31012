//! # texts_between
//!
//! Find, split and replace texts enclosed between a start marker and an end
//! marker.
//!
//! ## What it does
//!
//! Given markers such as `[`/`]`, `${`/`}` or `{{`/`}}`, a [`TextsBetween`]
//! scans text in a single left-to-right pass and finds every enclosed value.
//! It is the engine behind simple templates:
//!
//! ```text
//! <div><span>[name]</span><label>[title]</label></div>
//! ```
//!
//! ## Key Features
//!
//! - **Multi-character markers**: `${`, `{{`/`}}`, `<%`/`%>` all work
//! - **Escapes**: `\[` is a literal `[`; the escape sequence is configurable
//! - **Quoted strings**: start and end may be the same marker, and with the
//!   marker as its own escape a doubled `""` is a literal quote
//! - **Nesting**: optionally, `[i18n:Hello [name]]` is one match
//! - **Stale starts**: an unterminated start marker is an error, or silently
//!   dropped if configured
//! - **Payload lookup**: replace matches straight from a JSON-like [`Value`]
//!
//! ## Quick Start
//!
//! ```rust
//! use texts_between::TextsBetween;
//!
//! let brackets = TextsBetween::new("[", "]").unwrap();
//!
//! assert_eq!(brackets.get("hello [my] [world]").unwrap(), vec!["my", "world"]);
//!
//! let out = brackets
//!     .replace("[var] hello [my]", |v: &str| if v == "var" { "1" } else { "X" })
//!     .unwrap();
//! assert_eq!(out, "1 hello X");
//! ```
//!
//! ### Custom options
//!
//! ```rust
//! use texts_between::TextsBetween;
//!
//! let quotes = TextsBetween::builder("\"", "\"").with_escape("\"").build().unwrap();
//! assert_eq!(quotes.get(r#"say "wor""ld""#).unwrap(), vec![r#"wor"ld"#]);
//!
//! let nested = TextsBetween::builder("[", "]").with_nested_allowed().build().unwrap();
//! assert_eq!(nested.get("[he[l]lo]").unwrap(), vec!["he[l]lo"]);
//!
//! let lenient = TextsBetween::builder("[", "]").with_stale_start_ignored().build().unwrap();
//! assert!(lenient.get("[abc").unwrap().is_empty());
//! ```
//!
//! ### Templates
//!
//! ```rust
//! use texts_between::{value, TextsBetween};
//!
//! let data = value!({ "user": { "name": "squid" }, "count": 3 });
//! let pattern = TextsBetween::new("{{", "}}").unwrap();
//!
//! let out = pattern.replace("{{user.name}} has {{count}} pens", &data).unwrap();
//! assert_eq!(out, "squid has 3 pens");
//! ```
//!
//! ## Offsets
//!
//! Offsets reported by [`TextsBetween::boundaries`], [`Span`] and
//! [`ParseError`] are byte offsets into the UTF-8 input. Open offsets and
//! error indices point at the first byte of a marker; a close offset is the
//! last byte of the end marker, so slice a match with [`Span::range`].
//!
//! ## Performance Characteristics
//!
//! - **Scanning**: one pass, O(n·m) for input length n and marker length m
//! - **Memory**: [`TextsBetween::raw_segments`] borrows from the input; decoded
//!   segments allocate only for their own text
//! - **Sharing**: a pattern is immutable after construction and `Send + Sync`
//!
//! ## Logging
//!
//! The scanner emits [`tracing`] events at `trace` (one per scan) and `debug`
//! (dropped stale start markers) level. Install any `tracing` subscriber to see
//! them; nothing is logged otherwise.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - extracting and splitting
//! - **`templates.rs`** - filling templates from a payload
//! - **`quoted_strings.rs`** - identical start and end markers
//! - **`custom_options.rs`** - escapes, nesting, stale starts, options from JSON
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
mod escape;
pub mod macros;
pub mod map;
pub mod matcher;
pub mod options;
pub mod pattern;
pub mod replace;
pub mod segment;
pub mod value;

pub use error::{ConfigurationError, Error, ParseError, Result};
pub use map::Map;
pub use matcher::Span;
pub use options::{PatternOptions, DEFAULT_ESCAPE};
pub use pattern::{Parsed, TextsBetween};
pub use replace::{IntoReplacement, Replacer};
pub use segment::{RawSegment, Segment};
pub use value::{Number, Value};
