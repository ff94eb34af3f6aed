#![forbid(unsafe_code)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/", env!("CARGO_PKG_README")))]

pub mod alphabet;
pub mod error;
pub mod tree;

pub use alphabet::ALPHABET_LEN;
pub use error::InvalidCharacter;
pub use tree::{PrefixTree, Words};



#[cfg(test)]
mod proptests;
