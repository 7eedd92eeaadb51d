//! Royalty scoring per row.
pub mod tier;
pub use tier::*;
