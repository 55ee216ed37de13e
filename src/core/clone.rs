use super::*;

impl<T: Clone> Clone for Entry<T> {
    fn clone(&self) -> Self {
        Entry {
            value: self.value.clone(),
            priority: self.priority,
        }
    }
}

impl<T: Clone> Clone for MinMaxHeap<T> {
    /// Cloning copies the backing vector as-is; the clone has the same
    /// layout, not just the same contents.
    fn clone(&self) -> Self {
        MinMaxHeap {
            storage: self.storage.clone(),
        }
    }
}
