//! A double-ended priority queue backed by a min-max heap.
//!
//! [`MinMaxHeap`] stores (value, priority) pairs in one flat vector that
//! encodes a complete binary tree whose levels alternate between a min
//! ordering and a max ordering. Both `pop_min` and `pop_max` run in
//! O(log n); `peek_min` and `peek_max` are O(1).
//!
//! The structure is not thread safe. Callers that need shared mutation must
//! wrap the heap behind a lock or funnel all operations through one owner.

mod core;
mod index;

pub mod heap;

pub use heap::MinMaxHeap;

#[cfg(test)]
mod tests;
