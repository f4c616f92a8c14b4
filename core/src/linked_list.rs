//! In-place reversal of a [`Chain`] and the traversal helpers used to check
//! the result.
use tracing::{debug, trace};

use crate::handle::NodeHandle;
use crate::prim::chain::{Chain, Values};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn sentinel(self) -> i32 {
        match self {
            Direction::Ascending => i32::MIN,
            Direction::Descending => i32::MAX,
        }
    }

    // non-strict: equal neighbours never violate either direction
    fn violated_by(self, last: i32, current: i32) -> bool {
        match self {
            Direction::Ascending => last > current,
            Direction::Descending => last < current,
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

/// Reverses `chain` in place and returns the new head, which was the tail.
///
/// Every `next` link is re-pointed at the previously visited node; no node is
/// allocated or dropped. The handle that used to be the head is now the tail.
pub fn reverse(chain: &mut Chain) -> Option<NodeHandle> {
    let mut rev_head = None;
    let mut head = chain.head();
    let mut relinked = 0usize;

    while let Some(curr) = head {
        let next = chain.relink(curr, rev_head);
        trace!(node = %curr, "relinked");
        rev_head = Some(curr);
        head = next;
        relinked += 1;
    }

    chain.set_head(rev_head);
    debug!(nodes = relinked, "reversed chain");

    rev_head
}

/// True when every adjacent pair satisfies the non-strict ordering of
/// `direction`. Empty and single-node chains are trivially monotonic.
pub fn is_monotonic(chain: &Chain, direction: Direction) -> bool {
    let mut last = direction.sentinel();

    for value in chain.values() {
        if direction.violated_by(last, value) {
            return false;
        }
        last = value;
    }

    true
}

/// Number of nodes reachable from the head.
pub fn length(chain: &Chain) -> usize {
    let count = chain.values().count();
    debug_assert_eq!(count, chain.len());
    count
}

pub fn render(chain: &Chain) -> Values<'_> {
    chain.values()
}

impl Chain {
    /// By-value form of [`reverse`]: the old chain is moved in, so its head
    /// cannot be used afterwards.
    pub fn reversed(mut self) -> Self {
        reverse(&mut self);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_ascending_fixture() {
        let mut chain = Chain::from_values(1..=10);
        assert!(is_monotonic(&chain, Direction::Ascending));
        assert_eq!(length(&chain), 10);

        let old_head = chain.head();
        let mut old_tail = old_head.unwrap();
        while let Some(next) = chain.get(old_tail).unwrap().next {
            old_tail = next;
        }

        let new_head = reverse(&mut chain);

        assert_eq!(new_head, Some(old_tail));
        assert_eq!(chain.head(), new_head);
        assert_eq!(chain.get(old_head.unwrap()).unwrap().next, None);
        assert!(is_monotonic(&chain, Direction::Descending));
        assert_eq!(length(&chain), 10);
        assert_eq!(
            render(&chain).collect::<Vec<_>>(),
            (1..=10).rev().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_reverse_single() {
        let mut chain = Chain::from_values([5]);
        let head = chain.head();

        assert_eq!(reverse(&mut chain), head);
        assert_eq!(render(&chain).collect::<Vec<_>>(), vec![5]);
        assert_eq!(length(&chain), 1);
        assert_eq!(chain.get(head.unwrap()).unwrap().next, None);
    }

    #[test]
    fn test_reverse_empty() {
        let mut chain = Chain::from_values([]);

        assert_eq!(length(&chain), 0);
        assert!(reverse(&mut chain).is_none());
        assert_eq!(render(&chain).count(), 0);
    }

    #[test]
    fn test_reversed_by_value() {
        let chain = Chain::from_values([3, 1, 2]).reversed();
        assert_eq!(chain.to_string(), "2 -> 1 -> 3 -> null");
    }

    #[test]
    fn test_monotonic_allows_equal_neighbours() {
        let flat = Chain::from_values([4, 4, 4]);
        assert!(is_monotonic(&flat, Direction::Ascending));
        assert!(is_monotonic(&flat, Direction::Descending));

        let steps = Chain::from_values([1, 2, 2, 3]);
        assert!(is_monotonic(&steps, Direction::Ascending));
        assert!(!is_monotonic(&steps, Direction::Descending));
    }

    #[test]
    fn test_monotonic_sentinel_bounds() {
        let low = Chain::from_values([i32::MIN, i32::MIN]);
        assert!(is_monotonic(&low, Direction::Ascending));

        let high = Chain::from_values([i32::MAX, 0, i32::MIN]);
        assert!(is_monotonic(&high, Direction::Descending));
        assert!(!is_monotonic(&high, Direction::Ascending));
    }

    #[test]
    fn test_monotonic_detects_violation() {
        let chain = Chain::from_values([1, 3, 2]);
        assert!(!is_monotonic(&chain, Direction::Ascending));
        assert!(!is_monotonic(&chain, Direction::Descending));
    }

    #[test]
    fn test_flip() {
        assert_eq!(Direction::Ascending.flip(), Direction::Descending);
        assert_eq!(Direction::Descending.flip(), Direction::Ascending);
    }
}
