pub mod cutoff;
pub mod error;
pub mod pruner;

pub use cutoff::{Cutoff, compute_cutoff, compute_cutoff_at, parse_date};
pub use error::{PruneError, Result};
pub use pruner::{PruneSummary, RetentionPruner};
