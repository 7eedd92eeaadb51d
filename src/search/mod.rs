//! Branch-and-bound search over row assignments.
pub mod arrangement;
pub mod candidate;
pub mod combinations;
pub mod engine;
pub mod frontier;
pub mod ladder;
pub mod slots;
pub mod stats;

pub use arrangement::*;
pub use candidate::*;
pub use combinations::*;
pub use engine::*;
pub use frontier::*;
pub use ladder::*;
pub use slots::*;
pub use stats::*;
