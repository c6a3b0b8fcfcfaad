//! Layout validation
//!
//! Walks every position of a sequence and checks it against its parent and
//! its grandparent. This is the oracle the tests run after every mutation, and
//! it is also useful to callers that touch the backing store directly.

use crate::index::{coarse_parent, heap_parent, Direction};
use crate::traits::{HeapError, Sequence};

/// Checks that `seq` is a valid min-max heap
///
/// For a node on a min level, its parent (a max node) must not rank before
/// it and it must not rank before its grandparent; max levels mirror this.
/// Returns the first violation found in index order.
///
/// # Example
///
/// ```rust
/// use deheap::{validate, HeapError};
///
/// assert_eq!(validate(&vec![1, 9, 8, 5]), Ok(()));
/// assert_eq!(
///     validate(&vec![1, 4, 8, 5]),
///     Err(HeapError::ParentOrder { index: 3, parent: 1 })
/// );
/// ```
pub fn validate<S: Sequence + ?Sized>(seq: &S) -> Result<(), HeapError> {
    for index in 0..seq.len() {
        let dir = Direction::at(index);
        if let Some(parent) = heap_parent(index) {
            // the parent sits on the opposite polarity and must bound `index`
            if dir.opposite().ranks_strictly_before(seq, index, parent) {
                log::warn!("min-max heap parent violation at {} (parent {})", index, parent);
                return Err(HeapError::ParentOrder { index, parent });
            }
        }
        if let Some(ancestor) = coarse_parent(index) {
            if dir.ranks_strictly_before(seq, index, ancestor) {
                log::warn!(
                    "min-max heap grandparent violation at {} (grandparent {})",
                    index,
                    ancestor
                );
                return Err(HeapError::CoarseOrder { index, ancestor });
            }
        }
    }
    Ok(())
}

impl Direction {
    /// Strict form of [`Direction::prefers`]: `a` beats `b` without a tie
    fn ranks_strictly_before<S: Sequence + ?Sized>(self, seq: &S, a: usize, b: usize) -> bool {
        match self {
            Direction::Min => seq.less(a, b),
            Direction::Max => seq.less(b, a),
        }
    }
}
