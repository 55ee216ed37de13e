use crate::index::{self, Level};

use super::{Entry, MinMaxHeap};

impl<T> MinMaxHeap<T> {
    /// Insert `value` with the given priority.
    ///
    /// The entry lands at the next free leaf and bubbles up until the
    /// min-max property holds again. O(log n).
    pub fn push(&mut self, value: T, priority: i32) {
        self.storage.push(Entry { value, priority });
        self.bubble_up(self.storage.len() - 1);
    }

    fn bubble_up(&mut self, index: usize) {
        if index == 0 {
            return;
        }
        let parent = index::parent(index);
        match index::level_of(index) {
            Level::Min => {
                if self.beats::<false>(index, parent) {
                    // Larger than a max-level parent: the entry belongs on
                    // the max chain above it.
                    self.storage.swap(index, parent);
                    self.bubble_up_chain::<false>(parent);
                } else {
                    self.bubble_up_chain::<true>(index);
                }
            }
            Level::Max => {
                if self.beats::<true>(index, parent) {
                    self.storage.swap(index, parent);
                    self.bubble_up_chain::<true>(parent);
                } else {
                    self.bubble_up_chain::<false>(index);
                }
            }
        }
    }

    /// Climb the grandparent chain of one parity, swapping while the entry
    /// still beats its grandparent. Parents are never compared here; within
    /// one parity class the relevant ancestor is two levels up.
    fn bubble_up_chain<const IS_MIN: bool>(&mut self, mut index: usize) {
        while index::has_grandparent(index) {
            let grandparent = index::grandparent(index);
            if !self.beats::<IS_MIN>(index, grandparent) {
                break;
            }
            self.storage.swap(index, grandparent);
            index = grandparent;
        }
    }
}
