//! Common traits for double-ended heap storage
//!
//! This module provides the storage abstraction every algorithm in this crate
//! is written against:
//!
//! - [`Sequence`]: an ordered, indexable, resizable store of opaque elements
//! - [`HeapError`]: errors reported by layout validation and checked removal
//!
//! The algorithms never look at element values directly. They only ask the
//! sequence to compare two positions, swap two positions, and grow or shrink
//! at the end, in the same spirit as the `Len/Less/Swap/Push/Pop` contract of
//! classic binary-heap libraries. Any container that can answer those five
//! questions can be turned into a min-max heap in place.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use thiserror::Error;

/// Error type for heap layout checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The element at `index` is on the wrong side of its immediate parent
    #[error("element at index {index} violates the order of its parent at index {parent}")]
    ParentOrder { index: usize, parent: usize },
    /// The element at `index` is on the wrong side of its same-polarity ancestor
    #[error("element at index {index} violates the order of its grandparent at index {ancestor}")]
    CoarseOrder { index: usize, ancestor: usize },
    /// The requested position does not exist
    #[error("index {index} is out of bounds for a heap of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// An ordered, indexable, resizable store that a min-max heap can live in
///
/// Positions are dense and zero-based. `less` must be a strict weak
/// ordering; an inconsistent comparison silently voids every guarantee
/// the heap operations make.
///
/// # Example
///
/// ```rust
/// use deheap::Sequence;
///
/// let mut v = vec![3, 1, 2];
/// assert!(v.less(1, 0));
/// Sequence::swap(&mut v, 0, 2);
/// assert_eq!(v, vec![2, 1, 3]);
/// assert_eq!(Sequence::pop(&mut v), Some(3));
/// ```
pub trait Sequence {
    /// The element type stored in the sequence
    type Item;

    /// Returns the number of elements in the sequence
    fn len(&self) -> usize;

    /// Returns true if the sequence holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the element at `i` strictly ranks before the element at `j`
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchanges the elements at two valid positions
    fn swap(&mut self, i: usize, j: usize);

    /// Appends an element at the end, growing the length by one
    fn push(&mut self, item: Self::Item);

    /// Removes and returns the last element, or `None` if empty
    fn pop(&mut self) -> Option<Self::Item>;
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        (**self).less(i, j)
    }

    fn swap(&mut self, i: usize, j: usize) {
        (**self).swap(i, j)
    }

    fn push(&mut self, item: Self::Item) {
        (**self).push(item)
    }

    fn pop(&mut self) -> Option<Self::Item> {
        (**self).pop()
    }
}

impl<T: Ord> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j)
    }

    fn push(&mut self, item: T) {
        Vec::push(self, item)
    }

    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
}

impl<T: Ord> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    fn swap(&mut self, i: usize, j: usize) {
        VecDeque::swap(self, i, j)
    }

    fn push(&mut self, item: T) {
        self.push_back(item)
    }

    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }
}

/// A vector ordered by a caller-supplied comparator
///
/// Use this when the element type has no `Ord` implementation, or when the
/// heap should order by something other than it (a key field, a reversed
/// order, a float with a total-order wrapper, ...).
///
/// # Example
///
/// ```rust
/// use deheap::{ops, OrderedBy};
///
/// let mut by_len = OrderedBy::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// for word in ["three", "a", "fourteen", "xy"] {
///     ops::push(&mut by_len, word);
/// }
/// assert_eq!(ops::pop_max(&mut by_len), Some("fourteen"));
/// assert_eq!(ops::pop_min(&mut by_len), Some("a"));
/// ```
#[derive(Clone)]
pub struct OrderedBy<T, F> {
    data: Vec<T>,
    cmp: F,
}

impl<T, F> OrderedBy<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty sequence ordered by `cmp`
    pub fn new(cmp: F) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Wraps an existing vector without reordering it
    ///
    /// Call [`ops::init`](crate::ops::init) before using the result as a heap.
    pub fn from_vec(data: Vec<T>, cmp: F) -> Self {
        Self { data, cmp }
    }

    /// Returns the elements in their current (heap) order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the wrapper, returning the underlying vector
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T, F> Sequence for OrderedBy<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    type Item = T;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        (self.cmp)(&self.data[i], &self.data[j]) == Ordering::Less
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j)
    }

    fn push(&mut self, item: T) {
        self.data.push(item)
    }

    fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for OrderedBy<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedBy")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
