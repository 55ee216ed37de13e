use super::*;

impl<T> MinMaxHeap<T> {
    /// Consume the heap, returning its values in ascending priority order.
    pub fn into_vec(mut self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        while let Some(value) = self.pop_min() {
            vec.push(value);
        }
        vec
    }
}
