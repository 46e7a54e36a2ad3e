//! Card suits and their one-hot field values.

use core::fmt;

use crate::error::CardError;

/// Number of distinct suits.
pub const SUIT_COUNT: usize = 4;

/// Card suit.
///
/// The discriminant is the one-hot value stored in bits 12–15 of a packed
/// card, so suit fields of several cards can be OR-ed and tested together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Spades (`s`).
    Spades = 1,
    /// Hearts (`h`).
    Hearts = 2,
    /// Diamonds (`d`).
    Diamonds = 4,
    /// Clubs (`c`).
    Clubs = 8,
}

impl Suit {
    /// All suits in field-bit order.
    pub const ALL: [Self; SUIT_COUNT] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Looks up a suit by its display character.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownSymbol`] for anything outside `shdc`.
    pub fn from_symbol(symbol: char) -> Result<Self, CardError> {
        match symbol {
            's' => Ok(Self::Spades),
            'h' => Ok(Self::Hearts),
            'd' => Ok(Self::Diamonds),
            'c' => Ok(Self::Clubs),
            _ => {
                log::trace!("rejected suit symbol {symbol:?}");
                Err(CardError::UnknownSymbol(symbol))
            }
        }
    }

    /// Returns the suit whose 4-bit field value is `mask`.
    #[must_use]
    pub const fn from_bitmask(mask: u8) -> Option<Self> {
        match mask {
            1 => Some(Self::Spades),
            2 => Some(Self::Hearts),
            4 => Some(Self::Diamonds),
            8 => Some(Self::Clubs),
            _ => None,
        }
    }

    /// Returns the single-character display form.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => 's',
            Self::Hearts => 'h',
            Self::Diamonds => 'd',
            Self::Clubs => 'c',
        }
    }

    /// Returns the field value: 1, 2, 4 or 8.
    #[must_use]
    pub const fn bitmask(self) -> u8 {
        self as u8
    }

    /// Returns the suit bit positioned in bits 12–15.
    #[must_use]
    pub const fn bit(self) -> u32 {
        (self as u32) << 12
    }
}

impl TryFrom<char> for Suit {
    type Error = CardError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
