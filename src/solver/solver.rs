use super::error::SolveError;
use super::solution::Solution;
use crate::MAX_CARDS;
use crate::MIN_CARDS;
use crate::REPEAT_BONUS;
use crate::Utility;
use crate::cards::Card;
use crate::cards::Hand;
use crate::search::Engine;

/// Finds the arrangement of a Fantasyland deal with the highest value.
///
/// Value is total royalty points, plus `bonus` when the arrangement also
/// qualifies to repeat Fantasyland. The bonus prices the next bonus round
/// and is a game-economics parameter rather than something derived here.
#[derive(Debug, Clone, Copy)]
pub struct Solver {
    bonus: Utility,
}

impl Default for Solver {
    fn default() -> Self {
        Self::with_bonus(REPEAT_BONUS)
    }
}

impl Solver {
    pub fn with_bonus(bonus: Utility) -> Self {
        Self { bonus }
    }
    pub fn bonus(&self) -> Utility {
        self.bonus
    }

    pub fn solve(&self, cards: &[Card]) -> Result<Solution, SolveError> {
        let start = std::time::Instant::now();
        let cards = Self::canonical(cards)?;
        let (frontier, stats) = Engine::from(cards.as_slice()).run(self.bonus);
        let choice = frontier.select(self.bonus)?;
        let solution = Solution::from((cards.as_slice(), choice, stats));
        log::info!(
            "{:<32}{:<32}",
            format!("solved {} cards", cards.len()),
            format!("{:.2} in {:?}", solution.value, start.elapsed())
        );
        Ok(solution)
    }

    /// validated and sorted highest first, so that any ordering
    /// of the same cards searches identically
    fn canonical(cards: &[Card]) -> Result<Vec<Card>, SolveError> {
        match cards.len() {
            n if n < MIN_CARDS => Err(SolveError::InsufficientCards(n)),
            n if n > MAX_CARDS => Err(SolveError::ExcessCards(n)),
            _ => {
                let mut seen = Hand::empty();
                if let Some(&card) = cards.iter().find(|&&card| !seen.insert(card)) {
                    return Err(SolveError::DuplicateCard(card));
                }
                let mut cards = cards.to_vec();
                cards.sort_by(|a, b| b.cmp(a));
                Ok(cards)
            }
        }
    }
}

/// solve with the default repeat bonus
pub fn solve(cards: &[Card]) -> Result<Solution, SolveError> {
    Solver::default().solve(cards)
}
