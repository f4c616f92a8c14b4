//! Arena-backed singly linked chains and the in-place reversal routine that
//! operates on them.
//!
//! Nodes live in a `Vec` owned by their [`Chain`]; `next` links are
//! [`NodeHandle`] indices into that vector. Reversal re-points indices, so no
//! node is ever allocated, freed or aliased during the operation.

pub mod error;
pub mod handle;
pub mod linked_list;
pub mod prim;

pub use error::ChainError;
pub use handle::NodeHandle;
pub use linked_list::{Direction, is_monotonic, length, render, reverse};
pub use prim::chain::{Chain, Node, Values};
