//! Counters collected during a search.

use serde::{Deserialize, Serialize};

/// Node counts for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, terminal ones included.
    pub nodes: u64,
    /// Terminal positions scored.
    pub leaves: u64,
    /// Times the remaining siblings were skipped.
    pub cutoffs: u64,
    /// Deepest ply reached below the searched position.
    pub max_depth: u8,
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "nodes={} leaves={} cutoffs={} max_depth={}",
            self.nodes, self.leaves, self.cutoffs, self.max_depth
        )
    }
}
