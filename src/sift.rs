//! Sift operations that restore the min-max layout after a local change
//!
//! - [`bubble_down`] pushes a value that is too large (on a min level) or too
//!   small (on a max level) towards the leaves, two levels at a time.
//! - [`bubble_up`] lifts a value that beats its ancestors towards the root.
//!
//! Both run in O(log n) comparisons and swaps.

use crate::index::{coarse_left_child, coarse_parent, heap_left_child, heap_parent, Direction};
use crate::select::{pick_among_three, pick_four_grandchildren, pick_two_children};
use crate::traits::Sequence;

/// Where a [`bubble_down`] left things
///
/// `resting` is the last slot the sifted value was swapped into. `disturbed`
/// is the opposite-polarity slot where the first grandchild swap that
/// overshot left the sifted value; it may beat that slot's own ancestors.
/// Values moved by later overshoots were already ordered against the path
/// above them. `disturbed` equals the start index when no overshoot happened.
/// Arbitrary removal has to re-check both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiftDown {
    pub resting: usize,
    pub disturbed: usize,
}

/// Sifts the value at `i` down the subtree rooted at `i`
///
/// `dir` must be the polarity of `i`'s level for the result to be a valid
/// layout. Returns immediately when `i` has no children.
pub fn bubble_down<S: Sequence + ?Sized>(seq: &mut S, dir: Direction, mut i: usize) -> SiftDown {
    let len = seq.len();
    let start = i;
    let mut outcome = SiftDown {
        resting: i,
        disturbed: i,
    };

    loop {
        let child = pick_two_children(seq, dir, heap_left_child(i));
        if child >= len {
            break;
        }
        let grandchild = pick_four_grandchildren(seq, dir, coarse_left_child(i));
        let best = pick_among_three(seq, dir, i, child, grandchild);
        if best == i {
            break;
        }

        seq.swap(best, i);
        outcome.resting = best;
        if best == child {
            // a direct child has no grandchildren below the ones already compared
            break;
        }

        // The value now at `best` may beat the opposite-polarity node between
        // it and `i`.
        if let Some(mid) = heap_parent(best) {
            if dir.prefers(seq, mid, best) {
                seq.swap(mid, best);
                if outcome.disturbed == start {
                    outcome.disturbed = mid;
                }
            }
        }
        i = best;
    }

    outcome
}

/// Sifts the value at `i` up towards the root
///
/// Climbs same-polarity ancestors in direction `dir` first. Then, with the
/// direction flipped, checks the immediate parent; if the value moves there it
/// keeps climbing that parent's same-polarity ancestors. Returns true if any
/// swap happened.
pub fn bubble_up<S: Sequence + ?Sized>(seq: &mut S, dir: Direction, mut i: usize) -> bool {
    let mut moved = false;

    while let Some(grandparent) = coarse_parent(i) {
        if !dir.prefers(seq, i, grandparent) {
            break;
        }
        seq.swap(i, grandparent);
        i = grandparent;
        moved = true;
    }

    let dir = dir.opposite();
    let mut next = heap_parent(i);
    while let Some(ancestor) = next {
        if !dir.prefers(seq, i, ancestor) {
            break;
        }
        seq.swap(i, ancestor);
        i = ancestor;
        moved = true;
        next = coarse_parent(i);
    }

    moved
}
