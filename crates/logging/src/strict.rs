//! crates/logging/src/strict.rs
//! Normalization that keeps absent and empty text away from sinks.

use std::borrow::Cow;

/// Text substituted for absent or empty messages.
pub const PLACEHOLDER: &str = " ";

/// Normalizes a message so it is never absent or empty.
///
/// Absent and empty input both become a single space; anything else is
/// returned unchanged without copying.
///
/// ```
/// use logging::strict;
///
/// assert_eq!(strict(None), " ");
/// assert_eq!(strict(Some("")), " ");
/// assert_eq!(strict(Some("x")), "x");
/// ```
#[must_use]
pub fn strict(message: Option<&str>) -> Cow<'_, str> {
    match message {
        Some(text) if !text.is_empty() => Cow::Borrowed(text),
        _ => Cow::Borrowed(PLACEHOLDER),
    }
}

/// Owned counterpart of [`strict()`] for freshly formatted text.
pub(crate) fn strict_owned(message: String) -> String {
    if message.is_empty() {
        PLACEHOLDER.to_owned()
    } else {
        message
    }
}
