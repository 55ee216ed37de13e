//! Index arithmetic for the implicit complete binary tree.
//!
//! The storage vector is zero-indexed, so the classic one-indexed relations
//! (parent = i/2, children = 2i and 2i+1, grandparent = i/4) become the
//! shifted forms below. Node 0 is the root.

/// The ordering rule a tree level enforces over its descendants.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Level {
    Min,
    Max,
}

/// Classify an index by the parity of its depth. The root is on a min
/// level; depth is the bit length of the one-based index, minus one.
pub(crate) fn level_of(index: usize) -> Level {
    let depth = usize::BITS - 1 - (index + 1).leading_zeros();
    if depth % 2 == 0 {
        Level::Min
    } else {
        Level::Max
    }
}

pub(crate) fn parent(index: usize) -> usize {
    (index - 1) / 2
}

pub(crate) fn grandparent(index: usize) -> usize {
    (index - 3) / 4
}

/// Nodes 0..=2 are the root and its children; everything deeper has a
/// grandparent.
pub(crate) fn has_grandparent(index: usize) -> bool {
    index > 2
}

pub(crate) fn left_child(index: usize) -> usize {
    2 * index + 1
}

pub(crate) fn right_child(index: usize) -> usize {
    2 * index + 2
}

pub(crate) fn first_grandchild(index: usize) -> usize {
    4 * index + 3
}

#[test]
fn level_alternates() {
    assert_eq!(level_of(0), Level::Min);
    assert_eq!(level_of(1), Level::Max);
    assert_eq!(level_of(2), Level::Max);
    assert_eq!(level_of(3), Level::Min);
    assert_eq!(level_of(6), Level::Min);
    assert_eq!(level_of(7), Level::Max);
    assert_eq!(level_of(14), Level::Max);
    assert_eq!(level_of(15), Level::Min);
}

#[test]
fn family_links() {
    assert_eq!(parent(1), 0);
    assert_eq!(parent(2), 0);
    assert_eq!(parent(5), 2);
    assert_eq!(grandparent(3), 0);
    assert_eq!(grandparent(6), 0);
    assert_eq!(grandparent(7), 1);
    assert_eq!(grandparent(10), 1);
    assert_eq!(left_child(0), 1);
    assert_eq!(right_child(0), 2);
    assert_eq!(first_grandchild(0), 3);
    assert_eq!(first_grandchild(2), 11);
    assert!(!has_grandparent(2));
    assert!(has_grandparent(3));
}

#[test]
fn links_invert() {
    for index in 3..200 {
        assert_eq!(parent(parent(index)), grandparent(index));
        assert_eq!(parent(left_child(index)), index);
        assert_eq!(parent(right_child(index)), index);
        assert_eq!(grandparent(first_grandchild(index)), index);
        assert_eq!(grandparent(first_grandchild(index) + 3), index);
    }
}
