//! Card ranks and their packed-field contributions.

use core::fmt;

use crate::error::CardError;

/// Number of distinct ranks.
pub const RANK_COUNT: usize = 13;

const SYMBOLS: [char; RANK_COUNT] = [
    '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
];

// Distinct primes so a product over ranks identifies the rank multiset.
const PRIMES: [u8; RANK_COUNT] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// Card rank, ordered by conventional strength.
///
/// The discriminant is the rank index stored in bits 8–11 of a packed card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Deuce.
    Two = 0,
    /// Trey.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten (`T`).
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace, always high.
    Ace,
}

impl Rank {
    /// All ranks in index order, deuce first.
    pub const ALL: [Self; RANK_COUNT] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Looks up a rank by its display character.
    ///
    /// Symbols are case-sensitive: `'a'` is not an ace.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownSymbol`] for anything outside `23456789TJQKA`.
    pub fn from_symbol(symbol: char) -> Result<Self, CardError> {
        let rank = match symbol {
            '2' => Self::Two,
            '3' => Self::Three,
            '4' => Self::Four,
            '5' => Self::Five,
            '6' => Self::Six,
            '7' => Self::Seven,
            '8' => Self::Eight,
            '9' => Self::Nine,
            'T' => Self::Ten,
            'J' => Self::Jack,
            'Q' => Self::Queen,
            'K' => Self::King,
            'A' => Self::Ace,
            _ => {
                log::trace!("rejected rank symbol {symbol:?}");
                return Err(CardError::UnknownSymbol(symbol));
            }
        };
        Ok(rank)
    }

    /// Returns the rank with the given index (0 = deuce, 12 = ace).
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Returns the single-character display form.
    #[must_use]
    pub const fn symbol(self) -> char {
        SYMBOLS[self as usize]
    }

    /// Returns the rank index, 0 through 12.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the prime assigned to this rank (2 for deuce up to 41 for ace).
    #[must_use]
    pub const fn prime(self) -> u8 {
        PRIMES[self as usize]
    }

    /// Returns the one-hot rank bit, already positioned in bits 16–28.
    #[must_use]
    pub const fn bit(self) -> u32 {
        1 << (16 + self as u32)
    }

    /// Returns every suit-independent field of a packed card:
    /// rank bit, rank index and prime.
    #[must_use]
    pub const fn encoding(self) -> u32 {
        self.bit() | ((self as u32) << 8) | self.prime() as u32
    }
}

impl TryFrom<char> for Rank {
    type Error = CardError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
