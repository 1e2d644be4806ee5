//! Text rendering of table state.
//!
//! Cards render as glyphs from the Unicode Playing Cards block. Each
//! suit's row sits at a fixed offset from the spades row, and the card
//! back at the base of the block serves as the face-down placeholder.

use alloc::format;
use alloc::string::String;

use crate::card::{Card, Rank, Suit};
use crate::hand::{Qualifier, hand_value};
use crate::table::GameState;

/// Glyph for a face-down card (the card back, `U+1F0A0`).
pub const FACE_DOWN: char = '\u{1F0A0}';

const GLYPH_BASE: u32 = 0x1F0A0;

const fn suit_offset(suit: Suit) -> u32 {
    match suit {
        Suit::Spades => 0x00,
        Suit::Hearts => 0x10,
        Suit::Diamonds => 0x20,
        Suit::Clubs => 0x30,
    }
}

const fn rank_offset(rank: Rank) -> u32 {
    match rank {
        Rank::Ace => 0x1,
        Rank::Two => 0x2,
        Rank::Three => 0x3,
        Rank::Four => 0x4,
        Rank::Five => 0x5,
        Rank::Six => 0x6,
        Rank::Seven => 0x7,
        Rank::Eight => 0x8,
        Rank::Nine => 0x9,
        Rank::Ten => 0xA,
        Rank::Jack => 0xB,
        // 0xC is the knight, which a 52-card deck does not carry.
        Rank::Queen => 0xD,
        Rank::King => 0xE,
    }
}

/// Returns the playing-card glyph for a card.
#[must_use]
pub fn card_glyph(card: Card) -> char {
    let point = GLYPH_BASE + suit_offset(card.suit) + rank_offset(card.rank);
    // Every suit/rank offset lands on an assigned code point, so the
    // fallback never fires.
    char::from_u32(point).unwrap_or(FACE_DOWN)
}

/// Renders a single card followed by a trailing space.
///
/// `None` renders the face-down placeholder.
#[must_use]
pub fn render_card(card: Option<Card>) -> String {
    match card {
        Some(card) => format!("{} ", card_glyph(card)),
        None => format!("{FACE_DOWN} "),
    }
}

/// Renders the dealer's hand with the first card face down.
#[must_use]
pub fn render_dealer_hand(cards: &[Card]) -> String {
    let mut out = String::new();
    for (index, card) in cards.iter().enumerate() {
        let shown = if index == 0 { None } else { Some(*card) };
        out.push_str(&render_card(shown));
    }
    out
}

/// Renders the player's hand face up, annotated with its value.
///
/// The annotation is `Blackjack!` for a blackjack, `<qualifier> <total>`
/// for soft, hard, and bust hands, and the bare total otherwise.
#[must_use]
pub fn render_player_hand(cards: &[Card]) -> String {
    let mut out = String::new();
    for card in cards {
        out.push_str(&render_card(Some(*card)));
    }

    let value = hand_value(cards);
    match value.qualifier {
        Qualifier::Blackjack => out.push_str("Blackjack!"),
        Qualifier::None => out.push_str(&format!("{}", value.total)),
        qualifier => out.push_str(&format!("{qualifier} {}", value.total)),
    }
    out
}

/// Renders the whole table as two lines of text.
///
/// Pure formatting; printing the result is the caller's concern.
///
/// ```
/// use pontoon::{IdentityShuffle, deal, render};
///
/// let state = deal(&mut IdentityShuffle);
/// let text = render(&state);
/// assert!(text.starts_with("Dealer: "));
/// assert!(text.contains("\nPlayer: "));
/// ```
#[must_use]
pub fn render(state: &GameState) -> String {
    format!(
        "Dealer: {}\nPlayer: {}",
        render_dealer_hand(&state.dealer),
        render_player_hand(&state.player)
    )
}
