//! Index arithmetic for the implicit min-max tree
//!
//! A sequence of length `n` is read as a complete binary tree: node `i` has
//! children `2i + 1` and `2i + 2`. Levels alternate between min levels
//! (even depth) and max levels (odd depth), so every node is also linked to
//! the four nodes two levels below it, which share its polarity. Those are the
//! *coarse* children; the inverse link is the *coarse* parent.
//!
//! | index  | level | polarity |
//! |--------|-------|----------|
//! | 0      | 0     | min      |
//! | 1, 2   | 1     | max      |
//! | 3..=6  | 2     | min      |
//! | 7..=14 | 3     | max      |
//!
//! Child functions saturate instead of overflowing, so they are total; a
//! saturated index is always past the end of any real sequence.

use crate::traits::Sequence;

/// Which extreme a node (or a sift) is ordered towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Node is no greater than its descendants
    Min,
    /// Node is no less than its descendants
    Max,
}

impl Direction {
    /// Returns the direction enforced by the node at index `i`
    #[inline]
    pub fn at(i: usize) -> Self {
        if is_min_level(i) {
            Direction::Min
        } else {
            Direction::Max
        }
    }

    /// Returns the other direction
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Min => Direction::Max,
            Direction::Max => Direction::Min,
        }
    }

    /// Returns true for [`Direction::Min`]
    #[inline]
    pub fn is_min(self) -> bool {
        self == Direction::Min
    }

    /// Returns true if `a` should move towards the root relative to `b`
    ///
    /// For [`Direction::Min`] this is `a < b`. For [`Direction::Max`] it is
    /// `!(a < b)`, so `a` also wins ties; sifts rely on this exact form.
    #[inline]
    pub fn prefers<S: Sequence + ?Sized>(self, seq: &S, a: usize, b: usize) -> bool {
        seq.less(a, b) == self.is_min()
    }
}

/// Parent of `i` in the binary tree, `None` for the root
#[inline]
pub fn heap_parent(i: usize) -> Option<usize> {
    i.checked_sub(1).map(|j| j / 2)
}

/// Left child of `i`; the right child is the next index
#[inline]
pub fn heap_left_child(i: usize) -> usize {
    i.saturating_mul(2).saturating_add(1)
}

/// Grandparent of `i`, `None` on the top two levels
#[inline]
pub fn coarse_parent(i: usize) -> Option<usize> {
    (i.saturating_add(1) / 4).checked_sub(1)
}

/// First of the four grandchildren of `i`; the other three follow it
#[inline]
pub fn coarse_left_child(i: usize) -> usize {
    i.saturating_mul(4).saturating_add(3)
}

/// Depth of `i` in the tree, with the root at level 0
#[inline]
pub fn level(i: usize) -> u32 {
    match i.checked_add(1) {
        Some(n) => n.ilog2(),
        None => usize::BITS,
    }
}

/// Returns true if `i` sits on a min level
#[inline]
pub fn is_min_level(i: usize) -> bool {
    level(i) % 2 == 0
}
