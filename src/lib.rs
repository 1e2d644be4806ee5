//! Blackjack foundations with optional `no_std` support.
//!
//! The crate models cards and decks, values hands (soft/hard/bust/
//! blackjack classification), deals the opening two-card hands from a
//! shuffled deck, and renders the table as text. There is no betting,
//! player decision loop, or dealer play here; every operation is a pure
//! function over immutable values, and the only non-determinism is the
//! injected [`Shuffle`] strategy.
//!
//! # Example
//!
//! ```
//! use pontoon::{RandomShuffle, deal, render};
//!
//! let mut shuffle = RandomShuffle::seeded(42);
//! let state = deal(&mut shuffle);
//! println!("{}", render(&state));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod render;
pub mod shuffle;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, parse_cards};
pub use deck::fresh_deck;
pub use error::CardError;
pub use hand::{HandValue, Qualifier, hand_value};
pub use render::{
    FACE_DOWN, card_glyph, render, render_card, render_dealer_hand, render_player_hand,
};
pub use shuffle::{IdentityShuffle, RandomShuffle, Shuffle};
pub use table::{GameState, deal};
