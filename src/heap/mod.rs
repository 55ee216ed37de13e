//! The min-max heap itself.

use std::cmp::Ordering;

/// One stored element. Entries are never mutated in place; restoring the
/// heap property only ever repositions whole entries.
pub(crate) struct Entry<T> {
    pub(crate) value: T,
    pub(crate) priority: i32,
}

/// A double-ended priority queue over values of type `T`.
///
/// The backing vector encodes a complete binary tree whose even levels
/// (root included) hold the minimum of their subtree and whose odd levels
/// hold the maximum. The root is therefore the global minimum and the
/// global maximum sits at the root or one of its children.
///
/// Priorities may repeat; the order in which equal priorities come back
/// out is unspecified.
pub struct MinMaxHeap<T> {
    pub(crate) storage: Vec<Entry<T>>,
}

mod construct;
mod pop;
mod property;
mod push;
mod view;

impl<T> MinMaxHeap<T> {
    pub(crate) fn priority(&self, index: usize) -> i32 {
        self.storage[index].priority
    }

    /// Whether the entry at `a` should sit above the entry at `b` on an
    /// `IS_MIN` chain. Equal priorities never win, so ties never swap.
    pub(crate) fn beats<const IS_MIN: bool>(&self, a: usize, b: usize) -> bool {
        match Ord::cmp(&self.priority(a), &self.priority(b)) {
            Ordering::Less => IS_MIN,
            Ordering::Greater => !IS_MIN,
            Ordering::Equal => false,
        }
    }

    /// The slot holding the maximum priority. With one or two entries that
    /// is the last slot; otherwise it is the larger of the root's children,
    /// since level 1 is a max level.
    pub(crate) fn max_slot(&self) -> Option<usize> {
        match self.storage.len() {
            0 => None,
            1 | 2 => Some(self.storage.len() - 1),
            _ => Some(if self.beats::<false>(2, 1) { 2 } else { 1 }),
        }
    }
}
