//! crates/logging/src/chunk.rs
//! Splitting of oversized messages into bounded pieces.

use std::iter::FusedIterator;

/// Largest number of characters handed to a sink in one call.
pub const MAX_CHUNK_CHARS: usize = 4000;

/// Splits `message` into consecutive slices of at most `limit` characters.
///
/// Lengths are counted in characters, so multi-byte characters are never cut.
/// Every slice except the last holds exactly `limit` characters. A message
/// whose length is an exact multiple of `limit` yields `length / limit`
/// slices with no empty trailing slice; an empty message yields nothing.
/// A `limit` of zero is treated as one.
///
/// ```
/// use logging::chunks;
///
/// let pieces: Vec<&str> = chunks("abcdefg", 3).collect();
/// assert_eq!(pieces, ["abc", "def", "g"]);
///
/// let pieces: Vec<&str> = chunks("abcdef", 3).collect();
/// assert_eq!(pieces, ["abc", "def"]);
/// ```
pub fn chunks(message: &str, limit: usize) -> Chunks<'_> {
    Chunks {
        rest: message,
        limit: limit.max(1),
    }
}

/// Iterator returned by [`chunks`].
#[derive(Clone, Debug)]
pub struct Chunks<'a> {
    rest: &'a str,
    limit: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .char_indices()
            .nth(self.limit)
            .map_or(self.rest.len(), |(index, _)| index);
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rest.is_empty() {
            return (0, Some(0));
        }
        // Each chunk spans between `limit` and `4 * limit` bytes.
        let bytes = self.rest.len();
        (bytes.div_ceil(4 * self.limit), Some(bytes.div_ceil(self.limit)))
    }
}

impl FusedIterator for Chunks<'_> {}
