//! Error types for card and hand construction.

use thiserror::Error;

/// Errors that can occur while parsing or decoding cards and hands.
///
/// Every fallible constructor in this crate returns this type. A value that
/// fails here is never partially built: callers either hold a fully valid
/// [`Card`](crate::Card) / [`Hand`](crate::Hand) or an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CardError {
    /// Input text has the wrong number of characters for its target type.
    #[error("expected {expected} characters, found {found}")]
    MalformedInput {
        /// Required character count (2 for a card, 4 for a hand).
        expected: usize,
        /// Character count actually supplied.
        found: usize,
    },
    /// A rank or suit character is outside its alphabet.
    #[error("unknown rank or suit symbol {0:?}")]
    UnknownSymbol(char),
    /// A raw integer is not one of the 52 legal packed card values.
    #[error("{0:#x} is not a legal card encoding")]
    InvalidEncoding(i64),
}
