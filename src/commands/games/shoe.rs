//! Card sources for blackjack.
//!
//! The table plays from an infinite deck: every draw is independent, so the
//! same card can come up any number of times in one round.

use super::card::Card;
use rand::Rng;

pub trait Shoe {
    fn draw(&mut self) -> Card;
}

/// Draws with replacement from a fresh 52-card deck every time.
pub struct InfiniteShoe<R> {
    rng: R,
}

impl<R: Rng> InfiniteShoe<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Shoe for InfiniteShoe<R> {
    fn draw(&mut self) -> Card {
        Card::random(&mut self.rng)
    }
}

/// Deals a fixed sequence of cards in order, then falls back to `fallback`.
/// Used to replay specific hands.
pub struct StackedShoe {
    cards: std::vec::IntoIter<Card>,
    fallback: Card,
}

impl StackedShoe {
    pub fn new(cards: Vec<Card>, fallback: Card) -> Self {
        Self {
            cards: cards.into_iter(),
            fallback,
        }
    }
}

impl Shoe for StackedShoe {
    fn draw(&mut self) -> Card {
        self.cards.next().unwrap_or(self.fallback)
    }
}
