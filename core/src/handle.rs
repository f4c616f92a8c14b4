use core::fmt;

use serde::{Deserialize, Serialize};

/// Index of a node inside the arena of the [`Chain`](crate::prim::chain::Chain)
/// that owns it.
///
/// A handle is only meaningful for the chain it was issued by. The tail of a
/// chain is expressed as `Option::<NodeHandle>::None`, there is no sentinel
/// index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeHandle(usize);

impl NodeHandle {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
