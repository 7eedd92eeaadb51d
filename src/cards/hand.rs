use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// Hand represents an unordered set of Cards, stored as a u64 whose 52 LSBs
/// each stand for one card. Besides avoiding allocation for the tiny sets the
/// solver juggles, it makes rank and suit questions a matter of masking.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    /// inserts a card, reporting whether it was absent
    pub fn insert(&mut self, card: Card) -> bool {
        let fresh = !self.contains(&card);
        self.0 |= u64::from(card);
        fresh
    }
    /// the cards of this Hand that belong to a single suit
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }
    /// how many cards of this rank the Hand holds
    pub fn tally(&self, rank: Rank) -> usize {
        (self.0 & u64::from(rank)).count_ones() as usize
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }

    const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
/// we SUM/OR the cards to get the bitstring
/// [2c, Ts, Jc, Js]
/// xxxxxxxxxxxx 0000000010010000100000000000000000000000000000000001
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Self(
            cards
                .iter()
                .map(|c| u64::from(*c))
                .fold(0u64, |a, b| a | b),
        )
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::from(cards.as_slice())
    }
}

/// one-way conversion to u16 Rank masks
/// zero-allocation, zero iteration. just shredding bits
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = u64::from(h);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        let mut y = u64::default();
        y |= (x >> 0) & 0x0001;
        y |= (x >> 3) & 0x0002;
        y |= (x >> 6) & 0x0004;
        y |= (x >> 9) & 0x0008;
        y |= (x >> 12) & 0x0010;
        y |= (x >> 15) & 0x0020;
        y |= (x >> 18) & 0x0040;
        y |= (x >> 21) & 0x0080;
        y |= (x >> 24) & 0x0100;
        y |= (x >> 27) & 0x0200;
        y |= (x >> 30) & 0x0400;
        y |= (x >> 33) & 0x0800;
        y |= (x >> 36) & 0x1000;
        y as u16
    }
}

/// str isomorphism
/// this follows from Vec<Card> isomorphism
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s).map(Self::from)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = Vec::<Card>::from(*self);
        let cards = cards.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}
