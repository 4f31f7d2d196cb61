use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the database.
///
/// Returned by [`PopulationDb::stats`](crate::PopulationDb::stats). Counts are
/// distinct keys, so duplicate codes in the source collapse to one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub alpha_2: usize,
    pub alpha_3: usize,
}
