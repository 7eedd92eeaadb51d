use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;

/// A hand's strength.
///
/// This will always be constructed from a Hand, which is an unordered
/// set of Cards. The strength is determined by the Hand's ranking, and the
/// kicker cards are used to break ties. The derived order is the one every
/// fouling check and tie-break in the solver relies on.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
    pub fn category(&self) -> u8 {
        self.value.category()
    }
    /// the full tie-break sequence: defining ranks, then kickers
    pub fn ranks(&self) -> Vec<Rank> {
        let mut ranks = self.value.ranks();
        ranks.extend(Vec::<Rank>::from(self.kicks));
        ranks
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let value = evaluator.find_ranking();
        let kicks = evaluator.find_kickers(value);
        Self { value, kicks }
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{}", self.value.to_string(), self.kicks)
    }
}
