//! Candidate selection among siblings, grandchildren and mixed levels
//!
//! Every helper returns the index of the most extreme candidate in the given
//! [`Direction`]. Indices at or past `seq.len()` are treated as absent. The
//! first candidate passed in is the incumbent and is assumed to exist; a
//! challenger replaces it only when [`Direction::prefers`] says so, which
//! makes the comparison order part of the contract.

use crate::index::Direction;
use crate::traits::Sequence;

/// Returns `j` if it exists and is preferred over `i`, otherwise `i`
#[inline]
pub(crate) fn pick_between<S: Sequence + ?Sized>(seq: &S, dir: Direction, i: usize, j: usize) -> usize {
    if j < seq.len() && dir.prefers(seq, j, i) {
        j
    } else {
        i
    }
}

/// Picks between the two siblings starting at `first`
#[inline]
pub(crate) fn pick_two_children<S: Sequence + ?Sized>(seq: &S, dir: Direction, first: usize) -> usize {
    pick_between(seq, dir, first, first.saturating_add(1))
}

/// Picks among the four consecutive grandchildren starting at `first`
///
/// Stops at the first missing index: the tree is complete, so every
/// higher index is missing too.
#[inline]
pub(crate) fn pick_four_grandchildren<S: Sequence + ?Sized>(
    seq: &S,
    dir: Direction,
    first: usize,
) -> usize {
    let len = seq.len();
    let mut best = first;
    for candidate in first.saturating_add(1)..first.saturating_add(4) {
        if candidate >= len {
            break;
        }
        if dir.prefers(seq, candidate, best) {
            best = candidate;
        }
    }
    best
}

/// Picks among `a`, `b` and `c`, compared in that order
#[inline]
pub(crate) fn pick_among_three<S: Sequence + ?Sized>(
    seq: &S,
    dir: Direction,
    a: usize,
    b: usize,
    c: usize,
) -> usize {
    let best = pick_between(seq, dir, a, b);
    pick_between(seq, dir, best, c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::{Max, Min};

    #[test]
    fn test_pick_two_children() {
        assert_eq!(pick_two_children(&vec![10, 1], Min, 0), 1);
        assert_eq!(pick_two_children(&vec![1, 10], Min, 0), 0);
        assert_eq!(pick_two_children(&vec![1, 10], Max, 0), 1);
        // equal values: min keeps the incumbent
        assert_eq!(pick_two_children(&vec![10, 10], Min, 0), 0);
        // equal values: max takes the challenger
        assert_eq!(pick_two_children(&vec![10, 10], Max, 0), 1);
        // missing sibling
        assert_eq!(pick_two_children(&vec![1, 10], Max, 1), 1);
        // missing both: the first index comes back and callers check it
        assert_eq!(pick_two_children(&vec![1, 10], Max, 9), 9);
    }

    #[test]
    fn test_pick_four_grandchildren() {
        assert_eq!(pick_four_grandchildren(&vec![3, 1, 2, 4], Min, 0), 1);
        assert_eq!(pick_four_grandchildren(&vec![1, 3, 2, 4], Min, 0), 0);
        assert_eq!(pick_four_grandchildren(&vec![2, 3, 1, 4], Min, 0), 2);
        assert_eq!(pick_four_grandchildren(&vec![2, 3, 4, 1], Min, 0), 3);
        assert_eq!(pick_four_grandchildren(&vec![1, 1, 2, 2], Min, 0), 0);
        assert_eq!(pick_four_grandchildren(&vec![2, 2, 1, 1], Min, 0), 2);
        assert_eq!(pick_four_grandchildren(&vec![2], Min, 0), 0);
        assert_eq!(pick_four_grandchildren(&vec![2, 3, 4, 1], Max, 0), 2);
    }

    #[test]
    fn test_pick_four_grandchildren_partial() {
        // only positions 3 and 4 exist under the root
        let v = vec![0, 9, 8, 5, 4];
        assert_eq!(pick_four_grandchildren(&v, Min, 3), 4);
        assert_eq!(pick_four_grandchildren(&v, Max, 3), 3);
    }

    #[test]
    fn test_pick_among_three() {
        assert_eq!(pick_among_three(&vec![3, 1, 2], Min, 0, 1, 2), 1);
        assert_eq!(pick_among_three(&vec![1, 3, 2], Min, 0, 1, 2), 0);
        assert_eq!(pick_among_three(&vec![2, 3, 1], Min, 0, 1, 2), 2);
        assert_eq!(pick_among_three(&vec![1, 1, 2], Min, 0, 1, 2), 0);
        assert_eq!(pick_among_three(&vec![2, 1, 1], Min, 0, 1, 2), 1);
        assert_eq!(pick_among_three(&vec![2], Min, 0, 1, 2), 0);
        assert_eq!(pick_among_three(&vec![2, 3, 1], Max, 0, 1, 2), 1);
        // absent middle candidate does not hide a present last one
        assert_eq!(pick_among_three(&vec![2, 0, 1], Min, 0, 7, 1), 1);
    }
}
