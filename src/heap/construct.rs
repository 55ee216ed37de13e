use super::MinMaxHeap;

impl<T> MinMaxHeap<T> {
    pub fn new() -> Self {
        MinMaxHeap {
            storage: Vec::new(),
        }
    }
}

impl<T> MinMaxHeap<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        MinMaxHeap {
            storage: Vec::with_capacity(capacity),
        }
    }
}

#[test]
fn test_new() {
    let heap: MinMaxHeap<i32> = MinMaxHeap::new();
    assert_eq!(heap.len(), 0);
    assert!(heap.is_empty());
    assert_eq!(heap.capacity(), 0);
}

#[test]
fn test_with_capacity() {
    let heap: MinMaxHeap<String> = MinMaxHeap::with_capacity(10);
    assert_eq!(heap.len(), 0);
    assert!(heap.capacity() >= 10);
}
