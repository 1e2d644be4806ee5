//! Fresh deck construction.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Builds the full ordered 52-card deck.
///
/// Suits run in the outer loop and ranks in the inner loop, so the order
/// is deterministic and reproducible: `2H` through `AH`, then clubs,
/// diamonds, spades. Shuffling is the caller's concern.
///
/// ```
/// use pontoon::fresh_deck;
///
/// let deck = fresh_deck();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck[0].to_string(), "2H");
/// ```
#[must_use]
pub fn fresh_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }

    cards
}
