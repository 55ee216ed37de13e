use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Random pushes and pops checked against a plain sorted-vector model.
/// Values equal their priorities, so extremal correctness is a direct
/// equality check even though ties are unordered.
#[test]
fn random_interleaving() {
    let mut rng = StdRng::seed_from_u64(0x6d6d_6865_6170);
    for _ in 0..40 {
        let mut heap = MinMaxHeap::new();
        let mut model: Vec<i32> = Vec::new();
        let mut pushed = 0usize;
        let mut popped = 0usize;
        for step in 0..500 {
            match rng.gen_range(0..4) {
                0 | 1 => {
                    let priority = rng.gen_range(-1000..1000);
                    heap.push(priority, priority);
                    model.push(priority);
                    pushed += 1;
                }
                2 => {
                    let expected = model.iter().copied().min();
                    assert_eq!(heap.pop_min(), expected);
                    if let Some(value) = expected {
                        let at = model.iter().position(|&p| p == value).unwrap();
                        model.swap_remove(at);
                        popped += 1;
                    }
                }
                _ => {
                    let expected = model.iter().copied().max();
                    assert_eq!(heap.pop_max(), expected);
                    if let Some(value) = expected {
                        let at = model.iter().position(|&p| p == value).unwrap();
                        model.swap_remove(at);
                        popped += 1;
                    }
                }
            }
            assert_eq!(heap.len(), model.len());
            assert_eq!(heap.len(), pushed - popped);
            if step % 50 == 0 {
                assert_min_max(&heap);
            }
        }
        assert_min_max(&heap);
        // Whatever is still stored is exactly what went in minus what came
        // out, as a multiset.
        let mut left: Vec<i32> = heap.iter().map(|(_, priority)| priority).collect();
        left.sort_unstable();
        model.sort_unstable();
        assert_eq!(left, model);
        assert_eq!(heap.into_vec(), model);
    }
}

#[test]
fn random_drain_is_sorted() {
    let mut rng = StdRng::seed_from_u64(2026);
    for _ in 0..20 {
        let len = rng.gen_range(0..300);
        let mut heap = MinMaxHeap::new();
        for _ in 0..len {
            let priority = rng.gen_range(-50..50);
            heap.push(priority, priority);
        }
        assert_min_max(&heap);
        let mut low = i32::MIN;
        let mut high = i32::MAX;
        let mut drained = 0;
        while !heap.is_empty() {
            if rng.gen_bool(0.5) {
                let value = heap.pop_min().unwrap();
                assert!(value >= low);
                assert!(value <= high);
                low = value;
            } else {
                let value = heap.pop_max().unwrap();
                assert!(value <= high);
                assert!(value >= low);
                high = value;
            }
            drained += 1;
        }
        assert_eq!(drained, len);
        assert_eq!(heap.pop_min(), None);
        assert_eq!(heap.pop_max(), None);
    }
}
