//! Shuffle strategies.
//!
//! Dealing takes its shuffle as an injected dependency so that tests can
//! substitute a deterministic arrangement for the fair random one.

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;

/// A strategy that permutes a deck in place.
pub trait Shuffle {
    /// Permutes `cards`.
    fn shuffle(&mut self, cards: &mut [Card]);
}

/// Fair random shuffle backed by a seedable RNG.
pub struct RandomShuffle<R = ChaCha8Rng> {
    rng: R,
}

impl RandomShuffle<ChaCha8Rng> {
    /// Creates a shuffle seeded with the given value.
    ///
    /// The same seed always produces the same sequence of permutations.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomShuffle<R> {
    /// Creates a shuffle driven by the given RNG.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Shuffle for RandomShuffle<R> {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
}

/// Leaves the deck in its current order. Intended for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityShuffle;

impl Shuffle for IdentityShuffle {
    fn shuffle(&mut self, _cards: &mut [Card]) {}
}
