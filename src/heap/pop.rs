use crate::index;

use super::MinMaxHeap;

impl<T> MinMaxHeap<T> {
    /// Remove and return the minimum-priority value, or `None` when empty.
    ///
    /// The last entry moves into the vacated root slot and trickles down.
    /// O(log n).
    pub fn pop_min(&mut self) -> Option<T> {
        if self.storage.is_empty() {
            return None;
        }
        let entry = self.storage.swap_remove(0);
        if !self.storage.is_empty() {
            self.trickle_down::<true>(0);
        }
        Some(entry.value)
    }

    /// Remove and return the maximum-priority value, or `None` when empty.
    /// O(log n).
    pub fn pop_max(&mut self) -> Option<T> {
        let slot = self.max_slot()?;
        let entry = self.storage.swap_remove(slot);
        // With one or two entries the max was the last slot and nothing
        // moved; otherwise the displaced entry trickles down from `slot`.
        if slot < self.storage.len() {
            self.trickle_down::<false>(slot);
        }
        Some(entry.value)
    }

    /// Push the entry at `index` down its parity chain until every node in
    /// the two-level window below it respects the min-max property.
    ///
    /// Each round scans the children and grandchildren that exist and takes
    /// the one that most strongly beats on the `IS_MIN` ordering. A winning
    /// grandchild swaps in, then the intervening parent is re-checked (the
    /// moved entry may invert against it) and descent continues from the
    /// grandchild slot. A winning child swaps in and ends the descent: a
    /// child only wins the window when it has no smaller (resp. larger)
    /// grandchildren below it.
    fn trickle_down<const IS_MIN: bool>(&mut self, mut index: usize) {
        loop {
            let left = index::left_child(index);
            if left >= self.storage.len() {
                break;
            }
            let first_grandchild = index::first_grandchild(index);
            let mut best = left;
            let window = [
                index::right_child(index),
                first_grandchild,
                first_grandchild + 1,
                first_grandchild + 2,
                first_grandchild + 3,
            ];
            for candidate in window {
                if candidate >= self.storage.len() {
                    break;
                }
                if self.beats::<IS_MIN>(candidate, best) {
                    best = candidate;
                }
            }
            if !self.beats::<IS_MIN>(best, index) {
                break;
            }
            self.storage.swap(best, index);
            if best < first_grandchild {
                break;
            }
            let parent = index::parent(best);
            if self.beats::<IS_MIN>(parent, best) {
                self.storage.swap(parent, best);
            }
            index = best;
        }
    }
}
