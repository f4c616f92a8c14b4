//! Structural errors raised when a chain is assembled from a raw arena.
use thiserror::Error;

use crate::handle::NodeHandle;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// Non-empty arena without a head
    #[error("chain has {total} nodes but no head")]
    MissingHead { total: usize },

    /// Head given for an arena with no nodes
    #[error("head {head} given for an empty chain")]
    HeadOnEmpty { head: NodeHandle },

    /// Head index outside the arena
    #[error("head {head} is outside the arena of {total} nodes")]
    DanglingHead { head: NodeHandle, total: usize },

    /// A `next` link names an index outside the arena
    #[error("link {from} -> {to} points outside the arena of {total} nodes")]
    DanglingLink {
        from: NodeHandle,
        to: NodeHandle,
        total: usize,
    },

    /// Traversal from the head came back to an already visited node
    #[error("cyclic structure detected at {node}")]
    CycleDetected { node: NodeHandle },

    /// A node has more than one predecessor, or the head has one
    #[error("node {node} is the successor of more than one link")]
    SharedSuccessor { node: NodeHandle },

    /// Some nodes cannot be reached from the head
    #[error("only {reachable} of {total} nodes are reachable from the head")]
    Unreachable { reachable: usize, total: usize },
}
