//! Fantasyland solver for Open-Face Chinese Poker.
//!
//! Given the 13 to 17 cards dealt in a Fantasyland round, pick the 13 to
//! set into back, middle and front rows so that no row outranks the one
//! below it, maximizing royalties plus the value of repeating Fantasyland.
pub mod cards;
pub mod scoring;
pub mod search;
pub mod solver;

pub use solver::SolveError;
pub use solver::Solution;
pub use solver::Solver;
pub use solver::solve;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Royalty points.
pub type Points = u32;
/// Points plus any repeat bonus.
pub type Utility = f32;

// ============================================================================
// GAME CONSTANTS
// ============================================================================
/// Value of re-entering Fantasyland next hand, added when the chosen
/// arrangement qualifies. Treated as an external parameter; see `Solver::with_bonus`.
pub const REPEAT_BONUS: Utility = 8.25;
/// Front royalty for A-A-A, the most any front row pays.
pub const MAX_FRONT_ROYALTY: Points = 22;
/// Cards needed to fill all three rows.
pub const MIN_CARDS: usize = 13;
/// Largest Fantasyland deal.
pub const MAX_CARDS: usize = 17;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr, leaving stdout to the results.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
