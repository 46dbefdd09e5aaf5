//! Shared data structures for efficiency computations
//!
//! - Skill and boss identifiers
//! - Experience and kill-count snapshots
//! - Player classification and algorithm variants
//! - Rate-table records (training methods, bonuses, boss rates)

mod metric;
mod player;
mod rates;
mod snapshot;

pub use metric::*;
pub use player::*;
pub use rates::*;
pub use snapshot::*;
