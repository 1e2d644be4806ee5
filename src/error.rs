//! Error types for card construction.

use thiserror::Error;

/// Errors that can occur when constructing cards from text codes.
///
/// Construction is all-or-nothing: a failed parse never produces a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank token is not one of `2`-`10`, `J`, `Q`, `K`, `A`.
    #[error("invalid rank")]
    InvalidRank,
    /// Suit letter is not one of `H`, `C`, `D`, `S`.
    #[error("invalid suit")]
    InvalidSuit,
    /// Code is too short to hold a rank token and a suit letter.
    #[error("malformed card code")]
    Malformed,
}
