//! The fixed `'a'..='z'` alphabet and the mapping between letters and
//! child slots.

use crate::error::InvalidCharacter;


/// Number of child slots per node, one for each letter `'a'..='z'`.
pub const ALPHABET_LEN: usize = 26;

/// Slot index of a letter, or `None` if the byte is not in `'a'..='z'`.
pub(crate) fn slot(byte: u8) -> Option<usize> {
    byte.is_ascii_lowercase().then(|| usize::from(byte - b'a'))
}

/// Inverse of [`slot`].
pub(crate) fn letter(slot: usize) -> char {
    debug_assert!(slot < ALPHABET_LEN);
    char::from(b'a' + slot as u8)
}

/// Maps every byte of `word` to its slot, failing on the first byte
/// outside of the alphabet.
pub(crate) fn slots(word: &[u8]) -> Result<Vec<usize>, InvalidCharacter> {
    word.iter()
        .enumerate()
        .map(|(position, &byte)| slot(byte).ok_or(InvalidCharacter::new(byte, position)))
        .collect()
}
