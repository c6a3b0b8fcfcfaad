//! Double-ended priority queues for Rust
//!
//! This crate provides a min-max heap: a complete binary tree stored in a
//! sequence whose levels alternate between min order and max order. The
//! smallest element is always at index 0 and the largest at index 1 or 2, so
//! both ends of the ordering are available in O(1) and removable in O(log n)
//! from a single structure.
//!
//! The algorithm is written against the [`Sequence`] trait rather than a
//! concrete container, so any indexable, resizable store can be used in place.
//!
//! # Modules
//!
//! - [`ops`]: `init`, `push`, `pop_min`, `pop_max`, `remove` over any [`Sequence`]
//! - [`heap`]: [`MinMaxHeap`], an owned `Vec`-backed wrapper
//! - [`index`]: tree arithmetic and the [`Direction`] of each level
//! - [`sift`]: the bubble-up / bubble-down primitives
//! - [`validate`](mod@validate): the layout checker
//!
//! # Thread Safety
//!
//! Every operation is synchronous and takes `&mut` access to the sequence for
//! its whole duration. Sharing a heap across threads requires an outer lock
//! held for each call.
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
//! let mut largest = Vec::new();
//! while h.len() > 3 {
//!     largest.extend(ops::pop_max(&mut h));
//! }
//! assert_eq!(largest, vec![6, 5]);
//!
//! let mut smallest = Vec::new();
//! while h.len() > 1 {
//!     smallest.extend(ops::pop_min(&mut h));
//! }
//! assert_eq!(smallest, vec![1, 2]);
//! assert_eq!(h, vec![3]);
//! ```

pub mod heap;
pub mod index;
pub mod ops;
mod select;
pub mod sift;
pub mod traits;
pub mod validate;

// Re-export the main types for convenience
pub use heap::MinMaxHeap;
pub use index::Direction;
pub use traits::{HeapError, OrderedBy, Sequence};
pub use validate::validate;
