use super::card::Card;
use super::hand::Hand;
use rand::Rng;

/// Deck extends much of Hand functionality, with ability to remove cards from itself.
/// Only used to deal fixtures: the solver itself never draws.
#[derive(Debug, Clone, Copy)]
pub struct Deck(Hand);

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

impl Deck {
    pub fn new() -> Self {
        Self(Hand::from((1u64 << 52) - 1))
    }

    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// remove a specific card from the deck
    pub fn remove(&mut self, card: Card) {
        self.0.remove(card);
    }

    /// remove a random card from the deck
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Card {
        assert!(self.size() > 0, "empty deck");
        let n = rng.random_range(0..self.size());
        let mut cards = self.0;
        let card = cards.nth(n).expect("n < deck size");
        self.remove(card);
        card
    }

    /// deal n random cards in draw order
    pub fn deal<R: Rng>(&mut self, n: usize, rng: &mut R) -> Vec<Card> {
        (0..n).map(|_| self.draw(rng)).collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
