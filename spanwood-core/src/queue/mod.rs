//! Binary min-heaps used by the spanning forest algorithms.
//!
//! - [`MinPriorityQueue`] is a plain heap over `Ord` items. Kruskal seeds it
//!   with every edge in linear time and lazy Prim keeps crossing edges in it.
//! - [`IndexMinPriorityQueue`] associates a key with each external index in
//!   `[0, capacity)` and supports decrease-key. Eager Prim keys it by the
//!   best known connecting weight of each fringe vertex.
//!
//! Both use 0-based array heaps: the children of slot `k` live at `2k + 1`
//! and `2k + 2`.

mod indexed;
mod min;

pub use self::{indexed::IndexMinPriorityQueue, min::MinPriorityQueue};

const fn parent(slot: usize) -> usize {
    (slot - 1) / 2
}

const fn left_child(slot: usize) -> usize {
    2 * slot + 1
}
