use core::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ChainError;
use crate::handle::NodeHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub value: i32,
    pub next: Option<NodeHandle>,
}

/// A singly linked chain whose nodes are all owned by one arena.
///
/// Every node is reachable from `head` exactly once, and following `next`
/// from the head always ends at a node whose `next` is `None`. Chains built
/// through [`Chain::from_values`] hold this by construction; chains built from
/// a raw arena go through [`Chain::from_parts`], which rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawChain")]
pub struct Chain {
    head: Option<NodeHandle>,
    nodes: Vec<Node>,
}

#[derive(Deserialize)]
struct RawChain {
    head: Option<NodeHandle>,
    nodes: Vec<Node>,
}

impl TryFrom<RawChain> for Chain {
    type Error = ChainError;

    fn try_from(raw: RawChain) -> Result<Self, Self::Error> {
        Chain::from_parts(raw.head, raw.nodes)
    }
}

impl Chain {
    pub fn new() -> Self {
        Self {
            head: None,
            nodes: Vec::new(),
        }
    }

    /// Builds a chain whose traversal order is the iteration order of `values`.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        let values: Vec<i32> = values.into_iter().collect();
        let mut nodes = Vec::with_capacity(values.len());
        let mut head = None;

        // prepend from the back so each node links to the previous head
        for &value in values.iter().rev() {
            let handle = NodeHandle::new(nodes.len());
            nodes.push(Node { value, next: head });
            head = Some(handle);
        }

        Self { head, nodes }
    }

    /// Assembles a chain from a raw arena, checking that it forms one simple
    /// acyclic chain covering every node.
    pub fn from_parts(head: Option<NodeHandle>, nodes: Vec<Node>) -> Result<Self, ChainError> {
        match validate(head, &nodes) {
            Ok(()) => Ok(Self { head, nodes }),
            Err(err) => {
                debug!(%err, nodes = nodes.len(), "rejected chain arena");
                Err(err)
            }
        }
    }

    pub fn head(&self) -> Option<NodeHandle> {
        self.head
    }

    pub fn get(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle.index())
    }

    /// Number of nodes owned by the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Values in traversal order, starting at the head.
    pub fn values(&self) -> Values<'_> {
        Values {
            chain: self,
            cursor: self.head,
        }
    }

    /// Points `handle` at `next` and returns the link it held before.
    pub(crate) fn relink(
        &mut self,
        handle: NodeHandle,
        next: Option<NodeHandle>,
    ) -> Option<NodeHandle> {
        let node = &mut self.nodes[handle.index()];
        core::mem::replace(&mut node.next, next)
    }

    pub(crate) fn set_head(&mut self, head: Option<NodeHandle>) {
        self.head = head;
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<i32> for Chain {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.values() {
            write!(f, "{value} -> ")?;
        }
        write!(f, "null")
    }
}

/// Lazy walk over the values of a chain. A clone continues from the same
/// position; [`Chain::values`] starts a fresh walk from the head.
#[derive(Debug, Clone)]
pub struct Values<'a> {
    chain: &'a Chain,
    cursor: Option<NodeHandle>,
}

impl Iterator for Values<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let handle = self.cursor?;
        let node = &self.chain.nodes[handle.index()];
        self.cursor = node.next;
        Some(node.value)
    }
}

impl core::iter::FusedIterator for Values<'_> {}

fn validate(head: Option<NodeHandle>, nodes: &[Node]) -> Result<(), ChainError> {
    let total = nodes.len();
    let head = match (head, total) {
        (None, 0) => return Ok(()),
        (None, _) => return Err(ChainError::MissingHead { total }),
        (Some(head), 0) => return Err(ChainError::HeadOnEmpty { head }),
        (Some(head), _) => head,
    };

    if head.index() >= total {
        return Err(ChainError::DanglingHead { head, total });
    }

    for (index, node) in nodes.iter().enumerate() {
        if let Some(to) = node.next {
            if to.index() >= total {
                return Err(ChainError::DanglingLink {
                    from: NodeHandle::new(index),
                    to,
                    total,
                });
            }
        }
    }

    let mut visited = vec![false; total];
    let mut reachable = 0;
    let mut cursor = Some(head);

    while let Some(handle) = cursor {
        if visited[handle.index()] {
            return Err(ChainError::CycleDetected { node: handle });
        }
        visited[handle.index()] = true;
        reachable += 1;
        cursor = nodes[handle.index()].next;
    }

    if reachable == total {
        return Ok(());
    }

    // an orphan either hangs off the chain or sits in a separate fragment
    let mut predecessors = vec![0usize; total];
    predecessors[head.index()] = 1;
    for next in nodes.iter().filter_map(|node| node.next) {
        predecessors[next.index()] += 1;
        if predecessors[next.index()] > 1 {
            return Err(ChainError::SharedSuccessor { node: next });
        }
    }

    Err(ChainError::Unreachable { reachable, total })
}
