//! Input validation, search and result assembly.
pub mod error;
pub mod solution;
pub mod solver;

pub use error::*;
pub use solution::*;
pub use solver::*;
