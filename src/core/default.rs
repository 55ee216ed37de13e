use super::*;

impl<T> Default for MinMaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
