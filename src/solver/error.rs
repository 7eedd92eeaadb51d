use crate::cards::Card;

/// Why a hand could not be solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// fewer cards than the three rows hold
    InsufficientCards(usize),
    /// more cards than a Fantasyland deal
    ExcessCards(usize),
    /// the same card dealt twice
    DuplicateCard(Card),
    /// every way of setting the cards fouls
    NoLegalArrangement,
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SolveError::InsufficientCards(n) => {
                write!(f, "need at least {} cards, got {}", crate::MIN_CARDS, n)
            }
            SolveError::ExcessCards(n) => {
                write!(f, "need at most {} cards, got {}", crate::MAX_CARDS, n)
            }
            SolveError::DuplicateCard(card) => write!(f, "duplicate card {}", card),
            SolveError::NoLegalArrangement => write!(f, "no legal arrangement"),
        }
    }
}

impl std::error::Error for SolveError {}
