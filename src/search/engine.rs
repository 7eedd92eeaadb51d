use super::arrangement::Arrangement;
use super::candidate::Candidate;
use super::combinations::Combinations;
use super::frontier::Frontier;
use super::ladder::Fronts;
use super::slots::Slots;
use super::stats::Stats;
use crate::MAX_FRONT_ROYALTY;
use crate::Utility;
use crate::cards::Card;
use crate::scoring::Tier;

/// Exhaustive branch-and-bound search over every legal way to set the
/// dealt cards into back, middle and front rows.
///
/// Candidates are visited strongest first, so the middle royalty of the
/// inner loop can only fall as it advances. That lets a single failed
/// bound check end the inner loop outright, and a failed check with
/// back == middle end the whole search.
pub struct Engine<'a> {
    cards: &'a [Card],
}

impl<'a> From<&'a [Card]> for Engine<'a> {
    fn from(cards: &'a [Card]) -> Self {
        Self { cards }
    }
}

impl Engine<'_> {
    /// every 5-card subset, strongest first
    fn candidates(&self) -> Vec<Candidate> {
        let mut candidates = Combinations::from((Tier::Back.size(), self.everything()))
            .map(|slots| Candidate::from((slots, self.cards)))
            .collect::<Vec<Candidate>>();
        candidates.sort_by(|a, b| b.key().cmp(&a.key()));
        candidates
    }

    fn everything(&self) -> Slots {
        Slots::all(self.cards.len())
    }

    pub fn run(&self, bonus: Utility) -> (Frontier, Stats) {
        let candidates = self.candidates();
        let everything = self.everything();
        let mut fronts = Fronts::from(self.cards);
        let mut frontier = Frontier::default();
        let mut stats = Stats {
            candidates: candidates.len(),
            ..Stats::default()
        };
        log::debug!("{:<32}{:<32}", "evaluated candidates", candidates.len());
        'backs: for (i, back) in candidates.iter().enumerate() {
            for (j, middle) in candidates.iter().enumerate().skip(i) {
                stats.pairs += 1;
                let bound = back.back() + middle.middle() + MAX_FRONT_ROYALTY;
                if frontier.hopeless(bound, bonus) {
                    stats.pruned += 1;
                    if i == j {
                        break 'backs;
                    } else {
                        break;
                    }
                }
                if back.strength() < middle.strength() {
                    continue;
                }
                if !back.slots().disjoint(&middle.slots()) {
                    stats.overlaps += 1;
                    continue;
                }
                let residual = everything.minus(&back.slots()).minus(&middle.slots());
                let ladder = fronts.ladder(residual);
                let bound = back.back() + middle.middle() + ladder.ceiling();
                if frontier.hopeless(bound, bonus) {
                    stats.pruned += 1;
                    continue;
                }
                match ladder.under(&middle.strength()) {
                    None => stats.fouls += 1,
                    Some(front) => {
                        stats.legal += 1;
                        frontier.offer(Arrangement::from((*back, *middle, front)));
                    }
                }
            }
        }
        stats.residuals = fronts.len();
        stats.hits = fronts.hits();
        log::debug!("{:<32}{:<32}", "visited pairs", stats.pairs);
        log::debug!("{:<32}{:<32}", "pruned pairs", stats.pruned);
        log::debug!("{:<32}{:<32}", "residual ladders", stats.residuals);
        (frontier, stats)
    }
}
