use super::MinMaxHeap;

impl<T> MinMaxHeap<T> {
    /// The minimum-priority value, without removing it.
    pub fn peek_min(&self) -> Option<&T> {
        self.storage.first().map(|entry| &entry.value)
    }

    /// The maximum-priority value, without removing it.
    pub fn peek_max(&self) -> Option<&T> {
        let slot = self.max_slot()?;
        Some(&self.storage[slot].value)
    }
}

impl<T> MinMaxHeap<T> {
    /// Visit every (value, priority) pair in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, i32)> {
        self.storage.iter().map(|entry| (&entry.value, entry.priority))
    }
}

#[test]
fn peek_matches_pop() {
    let mut heap = MinMaxHeap::new();
    assert_eq!(heap.peek_min(), None);
    assert_eq!(heap.peek_max(), None);
    for (value, priority) in [("a", 4), ("b", -2), ("c", 9), ("d", 0)] {
        heap.push(value, priority);
    }
    assert_eq!(heap.peek_min(), Some(&"b"));
    assert_eq!(heap.peek_max(), Some(&"c"));
    assert_eq!(heap.pop_min(), Some("b"));
    assert_eq!(heap.peek_min(), Some(&"d"));
    assert_eq!(heap.pop_max(), Some("c"));
    assert_eq!(heap.peek_max(), Some(&"a"));
}

#[test]
fn iter_sees_everything() {
    let mut heap = MinMaxHeap::new();
    for priority in [3, 1, 4, 1, 5] {
        heap.push((), priority);
    }
    let mut priorities: Vec<i32> = heap.iter().map(|(_, priority)| priority).collect();
    priorities.sort();
    assert_eq!(priorities, [1, 1, 3, 4, 5]);
}
