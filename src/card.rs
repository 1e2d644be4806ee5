//! Card types, text codes, and deck constants.

use core::fmt;
use core::str::FromStr;

use alloc::vec::Vec;

use crate::error::CardError;

/// Card suit.
///
/// [`Suit::ALL`] lists suits in fresh-deck order, which fixes the outer
/// loop of [`crate::deck::fresh_deck`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in fresh-deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Clubs, Self::Diamonds, Self::Spades];

    /// Single-letter code for the suit.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Spades => 'S',
        }
    }

    /// Parses a suit letter.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] unless the letter is one of
    /// `H`, `C`, `D`, `S` (either case).
    pub const fn from_letter(letter: char) -> Result<Self, CardError> {
        match letter {
            'H' | 'h' => Ok(Self::Hearts),
            'C' | 'c' => Ok(Self::Clubs),
            'D' | 'd' => Ok(Self::Diamonds),
            'S' | 's' => Ok(Self::Spades),
            _ => Err(CardError::InvalidSuit),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::from_letter(letter),
            _ => Err(CardError::InvalidSuit),
        }
    }
}

/// Card rank.
///
/// [`Rank::ALL`] lists ranks in fresh-deck order, which fixes the inner
/// loop of [`crate::deck::fresh_deck`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
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
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in fresh-deck order.
    pub const ALL: [Self; 13] = [
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

    /// Blackjack value of the rank.
    ///
    /// Aces count as 11 at this layer. Re-counting an ace as 1 when the
    /// hand would bust is [`hand_value`](crate::hand::hand_value)'s
    /// concern.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 11,
        }
    }

    /// Text code for the rank (`2`-`10`, `J`, `Q`, `K`, `A`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2" => Ok(Self::Two),
            "3" => Ok(Self::Three),
            "4" => Ok(Self::Four),
            "5" => Ok(Self::Five),
            "6" => Ok(Self::Six),
            "7" => Ok(Self::Seven),
            "8" => Ok(Self::Eight),
            "9" => Ok(Self::Nine),
            "10" => Ok(Self::Ten),
            "J" | "j" => Ok(Self::Jack),
            "Q" | "q" => Ok(Self::Queen),
            "K" | "k" => Ok(Self::King),
            "A" | "a" => Ok(Self::Ace),
            _ => Err(CardError::InvalidRank),
        }
    }
}

/// A playing card.
///
/// `Rank` and `Suit` are closed enums, so a constructed card is always
/// well-formed; the fallible path is the text-code parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    /// Formats as a text code such as `AH` or `10D`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a text code: a rank token followed by a suit letter.
    ///
    /// ```
    /// use pontoon::{Card, Rank, Suit};
    ///
    /// let card: Card = "10D".parse().unwrap();
    /// assert_eq!(card, Card::new(Rank::Ten, Suit::Diamonds));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let Some(suit_letter) = chars.next_back() else {
            return Err(CardError::Malformed);
        };
        let rank_part = chars.as_str();
        if rank_part.is_empty() {
            return Err(CardError::Malformed);
        }

        let rank = rank_part.parse()?;
        let suit = Suit::from_letter(suit_letter)?;
        Ok(Self::new(rank, suit))
    }
}

/// Parses a sequence of card codes, preserving order.
///
/// Fails on the first invalid code; no partial result is surfaced.
///
/// ```
/// use pontoon::{Rank, parse_cards};
///
/// let cards = parse_cards(["AH", "10D"]).unwrap();
/// assert_eq!(cards[0].rank, Rank::Ace);
/// assert!(parse_cards(["AH", "1X"]).is_err());
/// ```
///
/// # Errors
///
/// Returns a [`CardError`] for the first code that is not a valid card.
pub fn parse_cards<'a, I>(codes: I) -> Result<Vec<Card>, CardError>
where
    I: IntoIterator<Item = &'a str>,
{
    codes.into_iter().map(str::parse).collect()
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
