//! The opening deal and the resulting table state.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::fresh_deck;
use crate::shuffle::Shuffle;

/// State of the table immediately after the opening deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Cards remaining in the deck, in draw order.
    pub deck: Vec<Card>,
    /// The dealer's hand.
    pub dealer: Vec<Card>,
    /// The player's hand.
    pub player: Vec<Card>,
}

/// Shuffles a fresh deck and deals the opening two-card hands.
///
/// The top four cards go out alternately: first and third to the player,
/// second and fourth to the dealer. The remaining 48 cards keep their
/// shuffled order.
///
/// ```
/// use pontoon::{IdentityShuffle, deal, fresh_deck};
///
/// let state = deal(&mut IdentityShuffle);
/// let deck = fresh_deck();
/// assert_eq!(state.player, [deck[0], deck[2]]);
/// assert_eq!(state.dealer, [deck[1], deck[3]]);
/// assert_eq!(state.deck.len(), 48);
/// ```
#[must_use]
pub fn deal<S: Shuffle>(shuffle: &mut S) -> GameState {
    let mut top = fresh_deck();
    shuffle.shuffle(&mut top);

    // `top` holds the four dealt cards after the split.
    let deck = top.split_off(4);
    let player = alloc::vec![top[0], top[2]];
    let dealer = alloc::vec![top[1], top[3]];

    GameState {
        deck,
        dealer,
        player,
    }
}
