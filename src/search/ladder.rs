use super::combinations::Combinations;
use super::slots::Slots;
use crate::Points;
use crate::cards::Card;
use crate::cards::Strength;
use crate::scoring::Tier;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// A 3-card front row drawn from a residual card set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Front {
    slots: Slots,
    strength: Strength,
    royalty: Points,
}

impl Front {
    pub fn slots(&self) -> Slots {
        self.slots
    }
    pub fn strength(&self) -> Strength {
        self.strength
    }
    pub fn royalty(&self) -> Points {
        self.royalty
    }
    fn key(&self) -> (Points, Strength) {
        (self.royalty, self.strength)
    }
}

impl From<(Slots, &[Card])> for Front {
    fn from((slots, cards): (Slots, &[Card])) -> Self {
        let strength = Strength::from(slots.hand(cards));
        Self {
            slots,
            strength,
            royalty: Tier::Front.royalty(&strength),
        }
    }
}

/// Every front row worth considering for one residual card set.
///
/// Fronts are ranked by royalty, then strength, best first. An entry is
/// kept only if it is strictly weaker than everything ranked above it, so
/// strengths fall monotonically down the ladder. Whatever the middle row,
/// the best front that does not foul it is the first rung at or below its
/// strength, and no discarded entry could ever be that rung.
#[derive(Debug, Clone, Default)]
pub struct Ladder(Vec<Front>);

impl Ladder {
    /// highest royalty and strength, ignoring the middle row
    pub fn best(&self) -> Option<&Front> {
        self.0.first()
    }
    /// most front royalty this residual can pay
    pub fn ceiling(&self) -> Points {
        self.best().map(Front::royalty).unwrap_or_default()
    }
    /// best front that does not outrank the middle row
    pub fn under(&self, middle: &Strength) -> Option<Front> {
        let rung = self.0.partition_point(|f| f.strength > *middle);
        self.0.get(rung).copied()
    }
    pub fn rungs(&self) -> &[Front] {
        &self.0
    }
}

impl From<(Slots, &[Card])> for Ladder {
    fn from((residual, cards): (Slots, &[Card])) -> Self {
        let mut fronts = Combinations::from((Tier::Front.size(), residual))
            .map(|slots| Front::from((slots, cards)))
            .collect::<Vec<Front>>();
        fronts.sort_by(|a, b| b.key().cmp(&a.key()));
        let mut floor = None::<Strength>;
        fronts.retain(|front| match floor {
            Some(strength) if front.strength >= strength => false,
            _ => {
                floor = Some(front.strength);
                true
            }
        });
        Self(fronts)
    }
}

/// Memo of ladders keyed by residual Slots.
///
/// Lives for one search only. With more than 13 cards many back/middle
/// pairs leave the same cards behind, and each of those ladders is built
/// exactly once.
pub struct Fronts<'a> {
    cards: &'a [Card],
    memo: FxHashMap<Slots, Ladder>,
    hits: u64,
}

impl<'a> From<&'a [Card]> for Fronts<'a> {
    fn from(cards: &'a [Card]) -> Self {
        Self {
            cards,
            memo: FxHashMap::default(),
            hits: 0,
        }
    }
}

impl Fronts<'_> {
    pub fn ladder(&mut self, residual: Slots) -> &Ladder {
        let cards = self.cards;
        match self.memo.entry(residual) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(Ladder::from((residual, cards))),
        }
    }
    /// lookups answered from the memo
    pub fn hits(&self) -> u64 {
        self.hits
    }
    /// distinct residual sets seen
    pub fn len(&self) -> usize {
        self.memo.len()
    }
    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hand;
    use crate::cards::Rank;
    use crate::cards::Ranking;

    fn strength(s: &str) -> Strength {
        Strength::from(Hand::try_from(s).unwrap())
    }

    #[test]
    fn best_front_maximizes_royalty() {
        let cards = Card::parse("Qs Qh Qd 9c 9d 4s 3h").unwrap();
        let ladder = Ladder::from((Slots::all(7), cards.as_slice()));
        let best = ladder.best().unwrap();
        assert_eq!(best.strength().ranking(), Ranking::ThreeOAK(Rank::Queen));
        assert_eq!(best.royalty(), 20);
        assert_eq!(ladder.ceiling(), 20);
    }

    #[test]
    fn strengths_strictly_fall() {
        let cards = Card::parse("Ks Kh 8d 8c 6d 6s 5h Ac 2d").unwrap();
        let ladder = Ladder::from((Slots::all(9), cards.as_slice()));
        for pair in ladder.rungs().windows(2) {
            assert!(pair[0].strength() > pair[1].strength());
            assert!(pair[0].royalty() >= pair[1].royalty());
        }
    }

    #[test]
    fn falls_back_below_the_middle() {
        let cards = Card::parse("Qs Qh Qd 9c 9d 4s 3h").unwrap();
        let ladder = Ladder::from((Slots::all(7), cards.as_slice()));
        // two pair in the middle cannot sit over trips, but a pair of queens can
        let front = ladder.under(&strength("Ac Ad Kh Kc 2d")).unwrap();
        assert_eq!(front.strength().ranking(), Ranking::OnePair(Rank::Queen));
        assert_eq!(front.royalty(), 7);
        // a high-card middle only tolerates a weaker high-card front
        let front = ladder.under(&strength("Kc Jd 8h 7c 2d")).unwrap();
        assert_eq!(front.strength().ranking(), Ranking::HighCard(Rank::Queen));
        // nothing fits under a seven-high middle
        assert_eq!(ladder.under(&strength("7c 6d 5h 3c 2d")), None);
    }

    #[test]
    fn memo_builds_each_residual_once() {
        let cards = Card::parse("As Kd 7h 2c 9s Th 4d 5c").unwrap();
        let mut fronts = Fronts::from(cards.as_slice());
        let a = Slots::from([0, 1, 2, 3].as_slice());
        let b = Slots::from([4, 5, 6, 7].as_slice());
        fronts.ladder(a);
        fronts.ladder(b);
        fronts.ladder(a);
        fronts.ladder(a);
        assert_eq!(fronts.len(), 2);
        assert_eq!(fronts.hits(), 2);
    }
}
