//! Canonical bit-packed encodings for playing cards and two-card hands,
//! with optional `no_std` support.
//!
//! A [`Card`] is a single `u32` carrying a one-hot rank mask, a one-hot suit
//! mask, the rank index and a per-rank prime, so hand evaluators can detect
//! flushes, straights and rank multisets with plain bit arithmetic. A
//! [`Hand`] is an ordered pair of cards.
//!
//! # Example
//!
//! ```
//! use pokerbits::{Card, Hand, Rank, Suit};
//!
//! let ace = Card::parse("Ah").unwrap();
//! assert_eq!(ace, Card::from_parts(Rank::Ace, Suit::Hearts));
//! assert_eq!(ace.prime(), 41);
//!
//! let hand: Hand = "AcAd".parse().unwrap();
//! assert!(hand.is_pair());
//! assert_eq!(hand.to_string(), "AcAd");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

pub mod card;
pub mod error;
pub mod hand;
pub mod rank;
pub mod suit;
mod sync;

// Re-export main types
pub use card::{
    CARD_TEXT_LEN, Card, DECK_SIZE, LEGAL_ENCODINGS, is_legal, prime_of, rank_bitmask_of,
    rank_bitmask_of_str, rank_index_of, suit_bitmask_of,
};
pub use error::CardError;
pub use hand::{HAND_TEXT_LEN, Hand};
pub use rank::{RANK_COUNT, Rank};
pub use suit::{SUIT_COUNT, Suit};
