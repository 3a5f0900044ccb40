//! Search mode selection.

use serde::{Deserialize, Serialize};

/// How the tree walk treats sibling moves.
///
/// Both modes return identical values for every position; only the number
/// of nodes visited differs.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SearchMode {
    /// Visit every node of the game tree.
    Minimax,
    /// Skip siblings once `alpha >= beta`.
    #[default]
    AlphaBeta,
}

impl SearchMode {
    /// True if this mode cuts off provably irrelevant siblings.
    pub fn prunes(self) -> bool {
        matches!(self, SearchMode::AlphaBeta)
    }
}
