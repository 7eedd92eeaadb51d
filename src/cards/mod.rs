//! Card representation and hand evaluation.
//!
//! - [`Card`]: a `(Rank, Suit)` pair encoded in one byte
//! - [`Hand`]: an unordered set of cards as a 64-bit bitmask
//! - [`Deck`]: the remaining cards, for dealing fixtures
//! - [`Evaluator`]: bitwise 3- and 5-card classifier
//! - [`Strength`]: [`Ranking`] plus [`Kickers`], totally ordered
pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod kicks;
pub use kicks::*;

pub mod rank;
pub use rank::*;

pub mod ranking;
pub use ranking::*;

pub mod strength;
pub use strength::*;

pub mod suit;
pub use suit::*;
