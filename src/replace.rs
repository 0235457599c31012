//! Replacement strategies for [`TextsBetween::replace`](crate::TextsBetween::replace).
//!
//! Anything implementing [`Replacer`] can supply the text that takes the place
//! of a match. Closures taking the decoded inner text work out of the box, as
//! does a borrowed [`Value`] payload, which looks the inner text up as a key or
//! key path.
//!
//! ## Examples
//!
//! ```rust
//! use texts_between::{value, TextsBetween};
//!
//! let pattern = TextsBetween::new("{{", "}}").unwrap();
//!
//! // Closure returning owned text
//! let shouted = pattern.replace("hi {{name}}", |inner: &str| inner.to_uppercase()).unwrap();
//! assert_eq!(shouted, "hi NAME");
//!
//! // Closure returning an optional value; `None` becomes the empty string
//! let dropped = pattern.replace("hi {{name}}!", |_: &str| None::<String>).unwrap();
//! assert_eq!(dropped, "hi !");
//!
//! // Payload lookup
//! let data = value!({ "user": { "name": "squid" } });
//! assert_eq!(pattern.replace("hi {{user.name}}", &data).unwrap(), "hi squid");
//! ```

use crate::Value;
use std::borrow::Cow;

/// Produces replacement text for matches.
pub trait Replacer {
    /// Appends the replacement for a match enclosing `inner` to `dst`.
    fn replace_append(&mut self, inner: &str, dst: &mut String);
}

/// Values a replacement closure may return.
///
/// `Option` lets a closure signal "no replacement", which substitutes the
/// empty string.
pub trait IntoReplacement {
    fn append_to(self, dst: &mut String);
}

impl IntoReplacement for String {
    fn append_to(self, dst: &mut String) {
        dst.push_str(&self);
    }
}

impl IntoReplacement for &str {
    fn append_to(self, dst: &mut String) {
        dst.push_str(self);
    }
}

impl IntoReplacement for Cow<'_, str> {
    fn append_to(self, dst: &mut String) {
        dst.push_str(&self);
    }
}

impl<T: IntoReplacement> IntoReplacement for Option<T> {
    fn append_to(self, dst: &mut String) {
        if let Some(text) = self {
            text.append_to(dst);
        }
    }
}

impl<F, T> Replacer for F
where
    F: FnMut(&str) -> T,
    T: IntoReplacement,
{
    fn replace_append(&mut self, inner: &str, dst: &mut String) {
        self(inner).append_to(dst);
    }
}

impl Replacer for &Value {
    fn replace_append(&mut self, inner: &str, dst: &mut String) {
        if let Some(found) = self.lookup(inner) {
            dst.push_str(&found.as_replacement());
        }
    }
}
