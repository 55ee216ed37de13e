use crate::index::{self, Level};
use crate::MinMaxHeap;

mod fuzz;

/// Walk the whole tree: every entry must respect every ancestor, min-level
/// ancestors from below and max-level ancestors from above.
fn assert_min_max<T>(heap: &MinMaxHeap<T>) {
    for index in 1..heap.storage.len() {
        let mut ancestor = index;
        while ancestor > 0 {
            ancestor = index::parent(ancestor);
            let above = heap.storage[ancestor].priority;
            let below = heap.storage[index].priority;
            match index::level_of(ancestor) {
                Level::Min => assert!(
                    above <= below,
                    "min-level node {} ({}) exceeds descendant {} ({})",
                    ancestor,
                    above,
                    index,
                    below
                ),
                Level::Max => assert!(
                    above >= below,
                    "max-level node {} ({}) must dominate descendant {} ({})",
                    ancestor,
                    above,
                    index,
                    below
                ),
            }
        }
    }
}
