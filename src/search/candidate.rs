use super::slots::Slots;
use crate::Points;
use crate::cards::Card;
use crate::cards::Strength;
use crate::scoring::Tier;

/// A 5-card subset of the deal, evaluated once and reused as either a
/// back or a middle row. Royalties differ by row so both are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    slots: Slots,
    strength: Strength,
    back: Points,
    middle: Points,
}

impl Candidate {
    pub fn slots(&self) -> Slots {
        self.slots
    }
    pub fn strength(&self) -> Strength {
        self.strength
    }
    /// royalty when played as the back row
    pub fn back(&self) -> Points {
        self.back
    }
    /// royalty when played as the middle row
    pub fn middle(&self) -> Points {
        self.middle
    }
    /// the order candidates are searched in, strongest first
    pub fn key(&self) -> (Points, Strength) {
        (self.back, self.strength)
    }
}

impl From<(Slots, &[Card])> for Candidate {
    fn from((slots, cards): (Slots, &[Card])) -> Self {
        let strength = Strength::from(slots.hand(cards));
        Self {
            slots,
            strength,
            back: Tier::Back.royalty(&strength),
            middle: Tier::Middle.royalty(&strength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Ranking;
    use crate::cards::Rank;

    #[test]
    fn royalties_per_row() {
        let cards = Card::parse("Kc Kd Kh 4s 4d 2c").unwrap();
        let candidate = Candidate::from((Slots::all(5), cards.as_slice()));
        assert_eq!(candidate.strength().ranking(), Ranking::FullHouse(Rank::King, Rank::Four));
        assert_eq!(candidate.back(), 6);
        assert_eq!(candidate.middle(), 12);
        assert_eq!(candidate.key(), (6, candidate.strength()));
    }
}
