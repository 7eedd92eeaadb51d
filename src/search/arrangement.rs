use super::candidate::Candidate;
use super::ladder::Front;
use super::slots::Slots;
use crate::Points;
use crate::cards::Strength;
use crate::scoring::Tier;

/// Back, middle and front rows over disjoint positions of the deal.
///
/// Only legal (non-fouled) arrangements are ever built by the search:
/// back >= middle >= front under the total strength order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrangement {
    back: Candidate,
    middle: Candidate,
    front: Front,
}

impl Arrangement {
    pub fn slots(&self, tier: Tier) -> Slots {
        match tier {
            Tier::Back => self.back.slots(),
            Tier::Middle => self.middle.slots(),
            Tier::Front => self.front.slots(),
        }
    }
    pub fn strength(&self, tier: Tier) -> Strength {
        match tier {
            Tier::Back => self.back.strength(),
            Tier::Middle => self.middle.strength(),
            Tier::Front => self.front.strength(),
        }
    }
    pub fn royalty(&self, tier: Tier) -> Points {
        match tier {
            Tier::Back => self.back.back(),
            Tier::Middle => self.middle.middle(),
            Tier::Front => self.front.royalty(),
        }
    }
    pub fn points(&self) -> Points {
        Tier::all().iter().map(|&t| self.royalty(t)).sum()
    }
    /// positions of the n dealt cards left out of all three rows
    pub fn discards(&self, n: usize) -> Slots {
        Tier::all()
            .iter()
            .fold(Slots::all(n), |left, &t| left.minus(&self.slots(t)))
    }
    pub fn is_legal(&self) -> bool {
        self.back.strength() >= self.middle.strength()
            && self.middle.strength() >= self.front.strength()
            && self.back.slots().disjoint(&self.middle.slots())
            && self.back.slots().disjoint(&self.front.slots())
            && self.middle.slots().disjoint(&self.front.slots())
    }
    /// quads or better in back, full house or better in middle,
    /// or trips in front keep the player in Fantasyland
    pub fn repeats(&self) -> bool {
        self.back.strength().category() >= 7
            || self.middle.strength().category() >= 6
            || self.front.strength().category() == 3
    }
    /// points first, then front, middle and back strength
    pub fn key(&self) -> (Points, Strength, Strength, Strength) {
        (
            self.points(),
            self.front.strength(),
            self.middle.strength(),
            self.back.strength(),
        )
    }
    pub fn beats(&self, other: &Self) -> bool {
        self.key() > other.key()
    }
}

impl From<(Candidate, Candidate, Front)> for Arrangement {
    fn from((back, middle, front): (Candidate, Candidate, Front)) -> Self {
        let arrangement = Self {
            back,
            middle,
            front,
        };
        debug_assert!(arrangement.is_legal());
        arrangement
    }
}

impl std::fmt::Display for Arrangement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {} ({} pts)",
            self.strength(Tier::Back),
            self.strength(Tier::Middle),
            self.strength(Tier::Front),
            self.points()
        )
    }
}
