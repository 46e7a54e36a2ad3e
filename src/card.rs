//! Bit-packed card values.
//!
//! A card is a single `u32` laid out as:
//!
//! ```text
//!  bitrank     suit rank   prime
//! +--------+--------+--------+--------+
//! |xxxbbbbb|bbbbbbbb|cdhsrrrr|xxpppppp|
//! +--------+--------+--------+--------+
//! ```
//!
//! - `p`: prime of the rank (deuce = 2 ... ace = 41)
//! - `r`: rank index (deuce = 0 ... ace = 12)
//! - `cdhs`: one-hot suit
//! - `b`: one-hot rank
//! - `x`: unused, always zero
//!
//! Only the 52 values in [`LEGAL_ENCODINGS`] are valid cards.

use core::fmt;
use core::str::FromStr;

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};

use crate::error::CardError;
use crate::rank::{RANK_COUNT, Rank};
use crate::suit::{SUIT_COUNT, Suit};
use crate::sync::{HashSet, Lazy};

/// Number of cards per deck.
pub const DECK_SIZE: usize = RANK_COUNT * SUIT_COUNT;

/// Length of a card's text form, in characters.
pub const CARD_TEXT_LEN: usize = 2;

/// Every legal packed card value.
///
/// Suits run spades, hearts, diamonds, clubs; within a suit, ranks run from
/// ace down to deuce.
pub const LEGAL_ENCODINGS: [u32; DECK_SIZE] = {
    let mut encodings = [0; DECK_SIZE];
    let mut s = 0;
    while s < SUIT_COUNT {
        let mut r = 0;
        while r < RANK_COUNT {
            let rank = Rank::ALL[RANK_COUNT - 1 - r];
            encodings[s * RANK_COUNT + r] = rank.encoding() | Suit::ALL[s].bit();
            r += 1;
        }
        s += 1;
    }
    encodings
};

static LEGAL: Lazy<HashSet<u32>> = Lazy::new(|| LEGAL_ENCODINGS.into_iter().collect());

/// Returns whether `packed` is one of the 52 legal card values.
///
/// This is a set-membership test, not a shape check: an integer with one
/// rank bit and one suit bit but a mismatched index or prime is rejected.
#[must_use]
pub fn is_legal(packed: u32) -> bool {
    LEGAL.contains(&packed)
}

/// Extracts the 13-bit rank mask from a packed value without validating it.
#[must_use]
pub const fn rank_bitmask_of(packed: u32) -> u16 {
    (packed >> 16) as u16
}

/// Extracts the 4-bit suit mask from a packed value without validating it.
#[must_use]
pub const fn suit_bitmask_of(packed: u32) -> u8 {
    ((packed >> 12) & 0xF) as u8
}

/// Extracts the rank index from a packed value without validating it.
#[must_use]
pub const fn rank_index_of(packed: u32) -> u8 {
    ((packed >> 8) & 0xF) as u8
}

/// Extracts the rank prime from a packed value without validating it.
#[must_use]
pub const fn prime_of(packed: u32) -> u8 {
    (packed & 0x3F) as u8
}

/// Parses a card string and returns only its rank mask.
///
/// # Errors
///
/// Same as [`Card::parse`].
pub fn rank_bitmask_of_str(s: &str) -> Result<u16, CardError> {
    Card::parse(s).map(Card::rank_bitmask)
}

/// A playing card, stored as its canonical packed integer.
///
/// A `Card` can only be obtained through a validating constructor, so every
/// instance holds one of the 52 legal encodings. Ordering follows the packed
/// value, which sorts by rank first.
///
/// ```
/// use pokerbits::Card;
///
/// let card: Card = "2s".parse().unwrap();
/// assert_eq!(card.packed(), 69634);
/// assert_eq!(card.prime(), 2);
/// assert_eq!(card.to_string(), "2s");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct Card(u32);

impl Card {
    /// Wraps a previously serialized packed value.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidEncoding`] unless `packed` is in
    /// [`LEGAL_ENCODINGS`].
    pub fn new(packed: u32) -> Result<Self, CardError> {
        if is_legal(packed) {
            Ok(Self(packed))
        } else {
            log::trace!("rejected card encoding {packed:#x}");
            Err(CardError::InvalidEncoding(i64::from(packed)))
        }
    }

    /// Builds the card for a rank and suit. Every pair is legal.
    #[must_use]
    pub const fn from_parts(rank: Rank, suit: Suit) -> Self {
        Self(rank.encoding() | suit.bit())
    }

    /// Builds a card from its rank and suit characters.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownSymbol`] for the first character outside
    /// its alphabet, checking the rank before the suit.
    pub fn from_symbols(rank: char, suit: char) -> Result<Self, CardError> {
        let rank = Rank::from_symbol(rank)?;
        let suit = Suit::from_symbol(suit)?;
        Ok(Self::from_parts(rank, suit))
    }

    /// Parses the two-character text form, such as `"Ah"` or `"Tc"`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::MalformedInput`] unless `s` is exactly two
    /// characters, or [`CardError::UnknownSymbol`] for an unrecognised rank
    /// or suit.
    pub fn parse(s: &str) -> Result<Self, CardError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => Self::from_symbols(rank, suit),
            _ => {
                let found = s.chars().count();
                log::trace!("rejected card text of {found} characters");
                Err(CardError::MalformedInput {
                    expected: CARD_TEXT_LEN,
                    found,
                })
            }
        }
    }

    /// Returns all 52 cards in [`LEGAL_ENCODINGS`] order.
    pub fn all() -> impl Iterator<Item = Self> {
        LEGAL_ENCODINGS.into_iter().map(Self)
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank::ALL[self.rank_index() as usize]
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        match self.suit_bitmask() {
            1 => Suit::Spades,
            2 => Suit::Hearts,
            4 => Suit::Diamonds,
            // 8 is the only value left in a legal encoding.
            _ => Suit::Clubs,
        }
    }

    /// Returns the rank character.
    #[must_use]
    pub const fn rank_symbol(self) -> char {
        self.rank().symbol()
    }

    /// Returns the suit character.
    #[must_use]
    pub const fn suit_symbol(self) -> char {
        self.suit().symbol()
    }

    /// Returns the rank index, 0 (deuce) through 12 (ace).
    #[must_use]
    pub const fn rank_index(self) -> u8 {
        rank_index_of(self.0)
    }

    /// Returns the one-hot rank mask shifted down to 13 bits.
    #[must_use]
    pub const fn rank_bitmask(self) -> u16 {
        rank_bitmask_of(self.0)
    }

    /// Returns the one-hot suit mask: 1, 2, 4 or 8.
    #[must_use]
    pub const fn suit_bitmask(self) -> u8 {
        suit_bitmask_of(self.0)
    }

    /// Returns the rank prime.
    #[must_use]
    pub const fn prime(self) -> u8 {
        prime_of(self.0)
    }

    /// Returns the raw packed value for storage or transmission.
    #[must_use]
    pub const fn packed(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Card {
    type Error = CardError;

    fn try_from(packed: u32) -> Result<Self, Self::Error> {
        Self::new(packed)
    }
}

impl TryFrom<i64> for Card {
    type Error = CardError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value).map_or_else(
            |_| {
                log::trace!("rejected out-of-range card encoding {value}");
                Err(CardError::InvalidEncoding(value))
            },
            Self::new,
        )
    }
}

impl From<Card> for u32 {
    fn from(card: Card) -> Self {
        card.0
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// Samples one of the 52 cards uniformly.
impl Distribution<Card> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Card {
        Card(LEGAL_ENCODINGS[rng.random_range(0..DECK_SIZE)])
    }
}
