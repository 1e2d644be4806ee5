//! Hand valuation.

use core::fmt;

use crate::card::{Card, Rank};

/// Qualitative classification of a hand total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Qualifier {
    /// Plain total, no ace involved.
    None,
    /// Contains an ace counted as 11 without busting.
    Soft,
    /// Contains an ace re-counted as 1.
    Hard,
    /// Total exceeds 21.
    Bust,
    /// Exactly two cards totalling 21.
    Blackjack,
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Soft => "soft",
            Self::Hard => "hard",
            Self::Bust => "bust",
            Self::Blackjack => "blackjack",
        })
    }
}

/// A hand total together with its classification.
///
/// Always derived from the cards on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandValue {
    /// Numeric total.
    pub total: u8,
    /// Qualitative tag for the total.
    pub qualifier: Qualifier,
}

/// Calculates the value and classification of a hand.
///
/// Every ace is first counted as 11. If that busts the hand and an ace is
/// present, a single ace is re-counted as 1; the correction is applied at
/// most once, so a hand with three or more aces can stay bust.
///
/// ```
/// use pontoon::{Qualifier, hand_value, parse_cards};
///
/// let hand = parse_cards(["AH", "5C", "7D"]).unwrap();
/// let value = hand_value(&hand);
/// assert_eq!(value.total, 13);
/// assert_eq!(value.qualifier, Qualifier::Hard);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> HandValue {
    let mut total: u8 = 0;
    let mut has_ace = false;

    for card in cards {
        if card.rank == Rank::Ace {
            has_ace = true;
        }
        total = total.saturating_add(card.rank.value());
    }

    let qualifier = if total > 21 {
        Qualifier::Bust
    } else if total == 21 && cards.len() == 2 {
        Qualifier::Blackjack
    } else if has_ace {
        Qualifier::Soft
    } else {
        Qualifier::None
    };

    // Only one ace is ever stepped down from 11 to 1.
    if has_ace && qualifier == Qualifier::Bust {
        let total = total - 10;
        let qualifier = if total > 21 {
            Qualifier::Bust
        } else {
            Qualifier::Hard
        };
        return HandValue { total, qualifier };
    }

    HandValue { total, qualifier }
}
