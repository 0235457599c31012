//! Removal of escape prefixes in front of markers.

use std::borrow::Cow;

/// Replaces every `escape + start` and `escape + end` in `text` with the bare marker.
///
/// Runs in a single left-to-right pass; the output is never rescanned, so a
/// decoded marker cannot pair up with the following text into a new escape
/// sequence. An empty `escape` leaves the text untouched. Returns the input
/// unchanged (borrowed) when it contains no escape at all.
pub(crate) fn unescape<'t>(text: &'t str, start: &str, end: &str, escape: &str) -> Cow<'t, str> {
    if escape.is_empty() || !text.contains(escape) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(escape) {
        let (head, tail) = rest.split_at(pos);
        out.push_str(head);

        let after = &tail[escape.len()..];
        if let Some(marker) = [start, end].into_iter().find(|m| after.starts_with(*m)) {
            out.push_str(marker);
            rest = &after[marker.len()..];
        } else {
            // not an escaped marker; another escape may begin inside this one
            let step = tail.chars().next().map_or(tail.len(), char::len_utf8);
            out.push_str(&tail[..step]);
            rest = &tail[step..];
        }
    }
    out.push_str(rest);

    Cow::Owned(out)
}
