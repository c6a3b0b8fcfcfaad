//! Owned min-max heap
//!
//! [`MinMaxHeap`] keeps a `Vec<T>` in min-max layout and exposes both ends of
//! the ordering. It is meant as a drop-in alternative to
//! `std::collections::BinaryHeap` when the caller needs the smallest and the
//! largest element from one structure (bounded top-k, double-ended
//! scheduling, sliding-window extrema).
//!
//! # Time Complexity
//!
//! | Operation               | Complexity |
//! |-------------------------|------------|
//! | `push`                  | O(log n)   |
//! | `pop_min` / `pop_max`   | O(log n)   |
//! | `peek_min` / `peek_max` | O(1)       |
//! | `remove`                | O(log n)   |
//! | `From<Vec<T>>`          | O(n log n) |
//!
//! # Example
//!
//! ```rust
//! use deheap::MinMaxHeap;
//!
//! let mut heap = MinMaxHeap::new();
//! heap.push(3);
//! heap.push(1);
//! heap.push(7);
//!
//! assert_eq!(heap.peek_min(), Some(&1));
//! assert_eq!(heap.peek_max(), Some(&7));
//! assert_eq!(heap.pop_max(), Some(7));
//! assert_eq!(heap.pop_min(), Some(1));
//! assert_eq!(heap.pop_min(), Some(3));
//! assert_eq!(heap.pop_min(), None);
//! ```

use crate::ops;
use crate::traits::HeapError;
use crate::validate::validate;

/// A double-ended priority queue backed by a vector
///
/// Elements that compare equal come out in an unspecified order.
#[derive(Debug, Clone)]
pub struct MinMaxHeap<T: Ord> {
    /// Elements in min-max layout
    data: Vec<T>,
}

impl<T: Ord> MinMaxHeap<T> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inserts an element
    pub fn push(&mut self, item: T) {
        ops::push(&mut self.data, item);
        self.debug_check();
    }

    /// Returns the smallest element without removing it
    pub fn peek_min(&self) -> Option<&T> {
        ops::peek_min_index(&self.data).map(|i| &self.data[i])
    }

    /// Returns the largest element without removing it
    pub fn peek_max(&self) -> Option<&T> {
        ops::peek_max_index(&self.data).map(|i| &self.data[i])
    }

    /// Removes and returns the smallest element
    pub fn pop_min(&mut self) -> Option<T> {
        let item = ops::pop_min(&mut self.data);
        self.debug_check();
        item
    }

    /// Removes and returns the largest element
    pub fn pop_max(&mut self) -> Option<T> {
        let item = ops::pop_max(&mut self.data);
        self.debug_check();
        item
    }

    /// Removes the element at `index` of [`as_slice`](Self::as_slice)
    ///
    /// Returns `None` when `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let item = ops::remove(&mut self.data, index);
        self.debug_check();
        item
    }

    /// Like [`remove`](Self::remove), but reports a bad index as an error
    ///
    /// # Errors
    /// Returns `HeapError::IndexOutOfBounds` if `index >= self.len()`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, HeapError> {
        let len = self.data.len();
        self.remove(index)
            .ok_or(HeapError::IndexOutOfBounds { index, len })
    }

    /// Returns the elements in heap layout
    ///
    /// Index 0 holds the minimum; the maximum is at index 1 or 2 when the heap
    /// has more than one element.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap, returning the elements in heap layout
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning the elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = ops::pop_min(&mut self.data) {
            sorted.push(item);
        }
        sorted
    }

    /// Drops every element
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Checks the heap layout
    ///
    /// Always `Ok` unless an element's ordering changed while it was in the
    /// heap (e.g. through interior mutability).
    pub fn check(&self) -> Result<(), HeapError> {
        validate(&self.data)
    }

    #[inline]
    fn debug_check(&self) {
        #[cfg(feature = "check-invariants")]
        debug_assert_eq!(self.check(), Ok(()));
    }
}

impl<T: Ord> Default for MinMaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for MinMaxHeap<T> {
    fn from(mut data: Vec<T>) -> Self {
        ops::init(&mut data);
        let heap = Self { data };
        heap.debug_check();
        heap
    }
}

impl<T: Ord> From<MinMaxHeap<T>> for Vec<T> {
    fn from(heap: MinMaxHeap<T>) -> Self {
        heap.into_vec()
    }
}

impl<T: Ord> FromIterator<T> for MinMaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Ord> Extend<T> for MinMaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}
