//! Errors reported when inserting words.

use thiserror::Error;


/// A word contained a byte outside of `'a'..='z'`.
///
/// Returned by [`PrefixTree::insert`](crate::PrefixTree::insert) and the
/// bulk builders. The tree is never modified by a word that produces this
/// error.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Error)]
#[error("invalid character '{}' at byte {position}, only 'a'..='z' are allowed", .byte.escape_ascii())]
pub struct InvalidCharacter {
    byte: u8,
    position: usize,
}

impl InvalidCharacter {
    pub(crate) const fn new(byte: u8, position: usize) -> Self {
        InvalidCharacter { byte, position }
    }

    /// The offending byte. For non-ASCII input this is the first byte of
    /// the UTF-8 encoded character.
    pub const fn byte(&self) -> u8 {
        self.byte
    }

    /// Byte offset of the offending byte within the word.
    pub const fn position(&self) -> usize {
        self.position
    }
}
