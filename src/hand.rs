//! Two-card starting hands.

use core::fmt;
use core::str::FromStr;

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};

use crate::card::{CARD_TEXT_LEN, Card};
use crate::error::CardError;

/// Length of a hand's text form, in characters.
pub const HAND_TEXT_LEN: usize = 2 * CARD_TEXT_LEN;

/// An ordered pair of cards.
///
/// The two cards are not required to differ; duplicate detection belongs to
/// whatever deals them.
///
/// ```
/// use pokerbits::Hand;
///
/// let hand: Hand = "2s3s".parse().unwrap();
/// assert_eq!(hand.packed(), (69634, 135427));
/// assert!(hand.is_suited());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(u32, u32)", into = "(u32, u32)")
)]
pub struct Hand {
    first: Card,
    second: Card,
}

impl Hand {
    /// Creates a hand from two cards, keeping their order.
    #[must_use]
    pub const fn new(first: Card, second: Card) -> Self {
        Self { first, second }
    }

    /// Rebuilds a hand from its two packed values.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidEncoding`] for the first value that is not
    /// a legal card.
    pub fn from_packed(first: u32, second: u32) -> Result<Self, CardError> {
        Ok(Self::new(Card::new(first)?, Card::new(second)?))
    }

    /// Parses the four-character text form, such as `"AcKd"`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::MalformedInput`] unless `s` is exactly four
    /// characters; otherwise whatever [`Card::parse`] returns for either half.
    pub fn parse(s: &str) -> Result<Self, CardError> {
        let found = s.chars().count();
        if found != HAND_TEXT_LEN {
            log::trace!("rejected hand text of {found} characters");
            return Err(CardError::MalformedInput {
                expected: HAND_TEXT_LEN,
                found,
            });
        }

        let mid = s
            .char_indices()
            .nth(CARD_TEXT_LEN)
            .map_or(s.len(), |(i, _)| i);
        let (first, second) = s.split_at(mid);
        Ok(Self::new(Card::parse(first)?, Card::parse(second)?))
    }

    /// Returns both cards in construction order.
    #[must_use]
    pub const fn cards(&self) -> (Card, Card) {
        (self.first, self.second)
    }

    /// Returns the first card.
    #[must_use]
    pub const fn first(&self) -> Card {
        self.first
    }

    /// Returns the second card.
    #[must_use]
    pub const fn second(&self) -> Card {
        self.second
    }

    /// Returns both packed values in construction order.
    #[must_use]
    pub const fn packed(&self) -> (u32, u32) {
        (self.first.packed(), self.second.packed())
    }

    /// Returns whether both cards share a rank.
    #[must_use]
    pub const fn is_pair(&self) -> bool {
        self.first.rank_bitmask() == self.second.rank_bitmask()
    }

    /// Returns whether both cards share a suit.
    #[must_use]
    pub const fn is_suited(&self) -> bool {
        self.first.suit_bitmask() & self.second.suit_bitmask() != 0
    }
}

impl From<(Card, Card)> for Hand {
    fn from((first, second): (Card, Card)) -> Self {
        Self::new(first, second)
    }
}

impl From<Hand> for (u32, u32) {
    fn from(hand: Hand) -> Self {
        hand.packed()
    }
}

impl TryFrom<(u32, u32)> for Hand {
    type Error = CardError;

    fn try_from((first, second): (u32, u32)) -> Result<Self, Self::Error> {
        Self::from_packed(first, second)
    }
}

impl FromStr for Hand {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

/// Samples two independent cards; the result may hold the same card twice.
impl Distribution<Hand> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Hand {
        Hand::new(self.sample(rng), self.sample(rng))
    }
}
