//! Heap operations over any [`Sequence`]
//!
//! These free functions turn a caller-owned sequence into a double-ended
//! priority queue. Each one performs a single structural change on the
//! sequence (append, swap-to-end-and-pop) and then sifts until the min-max
//! layout holds again. They allocate nothing beyond what the sequence's own
//! `push` does.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity |
//! |------------------|------------|
//! | [`init`]         | O(n log n) |
//! | [`push`]         | O(log n)   |
//! | [`pop_min`]      | O(log n)   |
//! | [`pop_max`]      | O(log n)   |
//! | [`remove`]       | O(log n)   |
//! | [`peek_min_index`] / [`peek_max_index`] | O(1) |
//!
//! # Example
//!
//! ```rust
//! use deheap::ops;
//!
//! let mut h = vec![2, 1, 5, 6];
//! ops::init(&mut h);
//! ops::push(&mut h, 3);
//! assert_eq!(h[0], 1);
//!
//! assert_eq!(ops::pop_max(&mut h), Some(6));
//! assert_eq!(ops::pop_max(&mut h), Some(5));
//! assert_eq!(ops::pop_min(&mut h), Some(1));
//! assert_eq!(ops::pop_min(&mut h), Some(2));
//! assert_eq!(h, vec![3]);
//! ```

use crate::index::Direction;
use crate::select::pick_two_children;
use crate::sift::{bubble_down, bubble_up};
use crate::traits::Sequence;

/// Arranges an arbitrary sequence into a min-max heap
///
/// Must be called once on a non-empty sequence that was not built with
/// [`push`]. Calling it on a sequence that is already a heap leaves the
/// contents valid.
pub fn init<S: Sequence + ?Sized>(seq: &mut S) {
    let len = seq.len();
    log::debug!("building min-max heap over {} elements", len);
    for i in 0..len {
        bubble_up(seq, Direction::at(i), i);
    }
}

/// Appends `item` and restores the layout
pub fn push<S: Sequence + ?Sized>(seq: &mut S, item: S::Item) {
    seq.push(item);
    let last = seq.len() - 1;
    bubble_up(seq, Direction::at(last), last);
}

/// Removes and returns the smallest element, or `None` if empty
pub fn pop_min<S: Sequence + ?Sized>(seq: &mut S) -> Option<S::Item> {
    let last = seq.len().checked_sub(1)?;
    seq.swap(0, last);
    let item = seq.pop();
    bubble_down(seq, Direction::Min, 0);
    item
}

/// Removes and returns the largest element, or `None` if empty
pub fn pop_max<S: Sequence + ?Sized>(seq: &mut S) -> Option<S::Item> {
    let at = peek_max_index(seq)?;
    let last = seq.len() - 1;
    seq.swap(at, last);
    let item = seq.pop();
    bubble_down(seq, Direction::Max, at);
    item
}

/// Removes and returns the element at `index`, or `None` if out of range
///
/// Indices refer to the current heap layout, e.g. a position found by
/// scanning the backing store. The layout after removal is not unique when
/// values repeat; only the pop order is.
pub fn remove<S: Sequence + ?Sized>(seq: &mut S, index: usize) -> Option<S::Item> {
    let len = seq.len();
    if index >= len {
        return None;
    }
    let last = len - 1;
    log::trace!("removing index {} of {}", index, len);
    seq.swap(index, last);
    let item = seq.pop();
    if index != last {
        // The element moved into `index` may be out of place both below and
        // above; the grandchild branch of the sift can also break an ancestor
        // relation away from where the value comes to rest.
        let sifted = bubble_down(seq, Direction::at(index), index);
        bubble_up(seq, Direction::at(sifted.resting), sifted.resting);
        bubble_up(seq, Direction::at(sifted.disturbed), sifted.disturbed);
    }
    item
}

/// Index of the smallest element, `None` if empty
#[inline]
pub fn peek_min_index<S: Sequence + ?Sized>(seq: &S) -> Option<usize> {
    if seq.is_empty() {
        None
    } else {
        Some(0)
    }
}

/// Index of the largest element, `None` if empty
///
/// The maximum is the larger of the two children of the root, or the root
/// itself when it has none.
#[inline]
pub fn peek_max_index<S: Sequence + ?Sized>(seq: &S) -> Option<usize> {
    match seq.len() {
        0 => None,
        1 => Some(0),
        _ => Some(pick_two_children(seq, Direction::Max, 1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;

    fn drain_min(mut h: Vec<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        while let Some(x) = pop_min(&mut h) {
            out.push(x);
        }
        out
    }

    fn drain_max(mut h: Vec<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        while let Some(x) = pop_max(&mut h) {
            out.push(x);
        }
        out
    }

    #[test]
    fn test_empty() {
        let mut h: Vec<i32> = Vec::new();
        assert_eq!(pop_min(&mut h), None);
        assert_eq!(pop_max(&mut h), None);
        assert_eq!(remove(&mut h, 0), None);
        assert_eq!(peek_min_index(&h), None);
        assert_eq!(peek_max_index(&h), None);
        init(&mut h);
        assert!(h.is_empty());
    }

    #[test]
    fn test_single_element() {
        let mut h = vec![7];
        assert_eq!(peek_min_index(&h), Some(0));
        assert_eq!(peek_max_index(&h), Some(0));
        assert_eq!(pop_max(&mut h), Some(7));
        assert!(h.is_empty());

        let mut h = vec![7];
        assert_eq!(pop_min(&mut h), Some(7));
        assert!(h.is_empty());
    }

    #[test]
    fn test_remove_out_of_range_is_untouched() {
        let mut h = vec![1, 9, 8];
        assert_eq!(remove(&mut h, 3), None);
        assert_eq!(h, vec![1, 9, 8]);
    }

    #[test]
    fn test_init() {
        let mut h = vec![15, 1, 2, 14, 13, 12, 11, 3, 4, 5, 6, 7, 8, 9, 10];
        init(&mut h);
        assert_eq!(validate(&h), Ok(()));
        assert_eq!(h[0], 1);
        assert_eq!(h[peek_max_index(&h).unwrap()], 15);
    }

    #[test]
    fn test_push_ascending_and_descending() {
        let mut h = Vec::new();
        for i in 0..32 {
            push(&mut h, i);
        }
        assert_eq!(validate(&h), Ok(()));

        let mut h = Vec::new();
        for i in (0..=3).rev() {
            push(&mut h, i);
            assert_eq!(validate(&h), Ok(()));
        }
    }

    #[test]
    fn test_push_zigzag() {
        let mut h = Vec::new();
        for i in (0..=32).rev() {
            let k = if i % 2 == 0 { 32 - i } else { i };
            push(&mut h, k);
        }
        assert_eq!(validate(&h), Ok(()));
    }

    #[test]
    fn test_pop_tables() {
        let cases: Vec<(Vec<i32>, Vec<i32>)> = vec![
            (vec![1, 4, 3, 2, 4, 3], vec![1, 2, 3, 3, 4, 4]),
            (vec![1, 3, 2, 2, 3], vec![1, 2, 2, 3, 3]),
            (vec![1, 5, 4, 2, 3, 3], vec![1, 2, 3, 3, 4, 5]),
            (vec![1, 4, 4, 2, 3, 3], vec![1, 2, 3, 3, 4, 4]),
            (vec![1, 4, 4, 3, 3, 2], vec![1, 2, 3, 3, 4, 4]),
            (vec![1, 8, 9, 2, 3, 4, 5, 6, 7], vec![1, 2, 3, 4, 5, 6, 7, 8, 9]),
            (vec![1, 9, 5, 4, 7, 3, 2, 6, 8], vec![1, 2, 3, 4, 5, 6, 7, 8, 9]),
        ];

        for (heap, ascending) in cases {
            assert_eq!(validate(&heap), Ok(()), "{:?}", heap);
            assert_eq!(drain_min(heap.clone()), ascending);
            let mut descending = ascending.clone();
            descending.reverse();
            assert_eq!(drain_max(heap.clone()), descending);

            for k in 0..heap.len() {
                let mut h = heap.clone();
                let removed = remove(&mut h, k).unwrap();
                assert_eq!(removed, heap[k]);
                assert_eq!(validate(&h), Ok(()), "remove {} from {:?}", k, heap);

                let mut expected = ascending.clone();
                let pos = expected.binary_search(&removed).unwrap();
                expected.remove(pos);
                assert_eq!(drain_min(h), expected);
            }
        }
    }

    #[test]
    fn test_remove_last_keeps_layout() {
        let mut h = vec![0, 9, 5, 6, 1, 2, 4, 8, 7, 3];
        assert_eq!(remove(&mut h, 9), Some(3));
        assert_eq!(h, vec![0, 9, 5, 6, 1, 2, 4, 8, 7]);
        assert_eq!(remove(&mut h, 2), Some(5));
        assert_eq!(validate(&h), Ok(()));
        assert_eq!(remove(&mut h, 0), Some(0));
        assert_eq!(validate(&h), Ok(()));
        assert_eq!(drain_min(h), vec![1, 2, 4, 6, 7, 8, 9]);
    }

    #[test]
    fn test_mixed_removals() {
        let mut h = vec![1, 4, 4, 2, 3, 3];
        assert_eq!(pop_min(&mut h), Some(1));
        assert_eq!(validate(&h), Ok(()));
        assert_eq!(remove(&mut h, 1), Some(4));
        assert_eq!(pop_max(&mut h), Some(4));
        assert_eq!(pop_max(&mut h), Some(3));
        assert_eq!(pop_max(&mut h), Some(3));
        assert_eq!(pop_max(&mut h), Some(2));
        assert_eq!(pop_max(&mut h), None);
    }

    #[test]
    fn test_pop_after_min_removal() {
        let mut h = vec![1, 31, 30, 4, 3, 2, 5, 22, 17, 19, 21, 23, 25, 27, 29, 15, 10, 7, 16, 8, 18, 9,
            20, 6, 14, 11, 24, 12, 26, 13, 28];
        let first = pop_min(&mut h).unwrap();
        assert_eq!(validate(&h), Ok(()));
        let second = pop_min(&mut h).unwrap();
        assert!(second >= first);

        let mut h = vec![17, 31, 30, 20, 19, 22, 18, 24, 26, 23, 21, 28, 25, 27, 29];
        let first = pop_min(&mut h).unwrap();
        assert_eq!(validate(&h), Ok(()));
        let second = pop_min(&mut h).unwrap();
        assert!(second >= first);
    }

    #[test]
    fn test_generic_over_mut_ref() {
        fn fill<S: Sequence<Item = i32>>(mut seq: S) {
            for x in [4, 8, 1] {
                push(&mut seq, x);
            }
        }
        let mut h = Vec::new();
        fill(&mut h);
        assert_eq!(h[0], 1);
        assert_eq!(pop_max(&mut h), Some(8));
    }
}
