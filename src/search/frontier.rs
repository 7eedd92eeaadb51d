use super::arrangement::Arrangement;
use crate::Points;
use crate::Utility;
use crate::solver::SolveError;

/// The two running bests of a search: the highest scoring legal
/// arrangement overall, and the highest scoring one that also repeats
/// Fantasyland.
#[derive(Debug, Clone, Copy, Default)]
pub struct Frontier {
    overall: Option<Arrangement>,
    repeat: Option<Arrangement>,
}

/// The arrangement a search settles on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choice {
    pub arrangement: Arrangement,
    pub repeat: bool,
    pub value: Utility,
}

impl Frontier {
    pub fn overall(&self) -> Option<&Arrangement> {
        self.overall.as_ref()
    }
    pub fn repeat(&self) -> Option<&Arrangement> {
        self.repeat.as_ref()
    }

    /// keep whichever of the incumbent and challenger sorts higher;
    /// a full tie keeps the incumbent
    pub fn offer(&mut self, arrangement: Arrangement) {
        if self.overall.is_none_or(|best| arrangement.beats(&best)) {
            self.overall = Some(arrangement);
        }
        if arrangement.repeats() && self.repeat.is_none_or(|best| arrangement.beats(&best)) {
            self.repeat = Some(arrangement);
        }
    }

    /// can anything scoring at most `bound` still change the selection?
    pub fn hopeless(&self, bound: Points, bonus: Utility) -> bool {
        match self.overall {
            None => false,
            Some(overall) if bound >= overall.points() => false,
            Some(overall) => {
                bound as Utility + bonus <= overall.points() as Utility
                    || self.repeat.is_some_and(|r| bound < r.points())
            }
        }
    }

    /// take the repeat best only when its points plus the bonus
    /// strictly exceed the overall best
    pub fn select(&self, bonus: Utility) -> Result<Choice, SolveError> {
        let plain = |arrangement: Arrangement| Choice {
            arrangement,
            repeat: false,
            value: arrangement.points() as Utility,
        };
        let repeat = |arrangement: Arrangement| Choice {
            arrangement,
            repeat: true,
            value: arrangement.points() as Utility + bonus,
        };
        match (self.overall, self.repeat) {
            (None, None) => Err(SolveError::NoLegalArrangement),
            (None, Some(r)) => Ok(repeat(r)),
            (Some(o), Some(r)) if r.points() as Utility + bonus > o.points() as Utility => {
                Ok(repeat(r))
            }
            (Some(o), _) => Ok(plain(o)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::REPEAT_BONUS;
    use crate::cards::Card;
    use crate::search::Candidate;
    use crate::search::Front;
    use crate::search::Slots;

    /// back 0..5, middle 5..10, front 10..13
    fn arrangement(s: &str) -> Arrangement {
        let cards = Card::parse(s).unwrap();
        let back = Slots::from([0, 1, 2, 3, 4].as_slice());
        let middle = Slots::from([5, 6, 7, 8, 9].as_slice());
        let front = Slots::from([10, 11, 12].as_slice());
        Arrangement::from((
            Candidate::from((back, cards.as_slice())),
            Candidate::from((middle, cards.as_slice())),
            Front::from((front, cards.as_slice())),
        ))
    }

    /// flush back, straight middle, queens up front: 4 + 4 + 7 = 15, no repeat
    fn fifteen() -> Arrangement {
        arrangement("Ac Kc Qc Jc 9c 9d Th Js Qd Kd Qh Qs 2c")
    }
    /// flush back, full house middle, nothing up front: 4 + 12 = 16, repeats
    fn sixteen() -> Arrangement {
        arrangement("Ac Kc Qc Jc 9c 7d 7h 7s 4c 4d Ah Qs 2c")
    }
    /// flush back, two pair middle, nothing up front: 4, repeats nothing
    fn four() -> Arrangement {
        arrangement("Ac Kc Qc Jc 9c Ad Ah Kh Kd 3s Qh Jh 2c")
    }
    /// straight flush back, nothing else: 15, repeats
    fn steel() -> Arrangement {
        arrangement("5d 6d 7d 8d 9d Ac Kh Qs Jc 3d Ah Qh 2c")
    }

    #[test]
    fn empty_frontier_fails() {
        let frontier = Frontier::default();
        assert_eq!(frontier.select(REPEAT_BONUS), Err(SolveError::NoLegalArrangement));
        assert!(!frontier.hopeless(0, REPEAT_BONUS));
    }

    #[test]
    fn keeps_strictly_better() {
        let mut frontier = Frontier::default();
        frontier.offer(four());
        frontier.offer(fifteen());
        frontier.offer(four());
        assert_eq!(frontier.overall(), Some(&fifteen()));
        assert_eq!(frontier.repeat(), None);
        frontier.offer(sixteen());
        assert_eq!(frontier.overall(), Some(&sixteen()));
        assert_eq!(frontier.repeat(), Some(&sixteen()));
    }

    #[test]
    fn repeat_wins_with_bonus() {
        let mut frontier = Frontier::default();
        frontier.offer(fifteen());
        frontier.offer(steel());
        assert_eq!(frontier.overall(), Some(&fifteen()));
        let choice = frontier.select(REPEAT_BONUS).unwrap();
        assert!(choice.repeat);
        assert_eq!(choice.arrangement, steel());
        assert_eq!(choice.value, 15.0 + REPEAT_BONUS);
    }

    #[test]
    fn bonus_must_strictly_exceed() {
        let mut frontier = Frontier::default();
        frontier.offer(sixteen());
        let choice = frontier.select(0.0).unwrap();
        assert!(!choice.repeat);
        assert_eq!(choice.arrangement, sixteen());
        assert_eq!(choice.value, 16.0);
        let choice = frontier.select(REPEAT_BONUS).unwrap();
        assert!(choice.repeat);
        assert_eq!(choice.value, 16.0 + REPEAT_BONUS);
    }

    #[test]
    fn repeat_only() {
        let frontier = Frontier {
            overall: None,
            repeat: Some(steel()),
        };
        let choice = frontier.select(REPEAT_BONUS).unwrap();
        assert!(choice.repeat);
        assert_eq!(choice.value, 15.0 + REPEAT_BONUS);
    }

    #[test]
    fn hopeless_respects_the_repeat_choice() {
        let mut frontier = Frontier::default();
        frontier.offer(fifteen());
        // could still beat or tie the overall best
        assert!(!frontier.hopeless(15, REPEAT_BONUS));
        // below the overall best, but a repeat this good would win on bonus
        assert!(!frontier.hopeless(10, REPEAT_BONUS));
        // below the overall best even with the bonus
        assert!(frontier.hopeless(6, REPEAT_BONUS));
        assert!(frontier.hopeless(14, 0.0));
        // once a repeat best exists, anything below it is out
        frontier.offer(steel());
        assert!(frontier.hopeless(14, REPEAT_BONUS));
        assert!(!frontier.hopeless(15, REPEAT_BONUS));
    }
}
