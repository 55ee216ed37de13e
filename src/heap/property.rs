use super::MinMaxHeap;

impl<T> MinMaxHeap<T> {
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Drop every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.storage.clear();
    }
}

#[test]
fn clear_empties() {
    let mut heap = MinMaxHeap::new();
    for priority in 0..10 {
        heap.push(priority, priority);
    }
    assert_eq!(heap.len(), 10);
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.pop_min(), None);
    heap.push(7, 7);
    assert_eq!(heap.pop_max(), Some(7));
}
