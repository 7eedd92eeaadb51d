use crate::cards::Card;
use crate::cards::Hand;

/// A set of positions into the dealt cards, one bit per position.
///
/// This is what the search deals in: candidate rows, residual card sets
/// and the memo key are all Slots. Being a plain bitmask it is
/// order-independent, so two pairs leaving the same cards behind land on
/// the same key however they were built.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Slots(u32);

impl Slots {
    /// the first n positions
    pub fn all(n: usize) -> Self {
        assert!(n <= 32);
        Self(((1u64 << n) - 1) as u32)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, position: usize) -> bool {
        self.0 & (1 << position) != 0
    }
    pub fn disjoint(&self, other: &Self) -> bool {
        self.0 & other.0 == 0
    }
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0 | other.0)
    }
    pub fn minus(&self, other: &Self) -> Self {
        Self(self.0 & !other.0)
    }
    /// the cards at these positions, as a set
    pub fn hand(&self, cards: &[Card]) -> Hand {
        Hand::from(self.cards(cards))
    }
    /// the cards at these positions, in position order
    pub fn cards(&self, cards: &[Card]) -> Vec<Card> {
        let slots = *self;
        slots.map(|i| cards[i]).collect()
    }
}

/// positions come out lowest first
impl Iterator for Slots {
    type Item = usize;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let position = self.0.trailing_zeros() as usize;
            self.0 &= self.0 - 1;
            Some(position)
        }
    }
}

/// u32 isomorphism
impl From<u32> for Slots {
    fn from(n: u32) -> Self {
        Self(n)
    }
}
impl From<Slots> for u32 {
    fn from(s: Slots) -> Self {
        s.0
    }
}

impl From<&[usize]> for Slots {
    fn from(positions: &[usize]) -> Self {
        Self(positions.iter().fold(0u32, |a, p| a | (1 << p)))
    }
}

impl std::fmt::Display for Slots {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let slots = *self;
        let positions = slots.map(|p| p.to_string()).collect::<Vec<_>>();
        write!(f, "{{{}}}", positions.join(","))
    }
}
