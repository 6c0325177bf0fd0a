#![no_std]

//! `DynArray`: a growable, contiguous array built directly on raw storage.
//!
//! `DynArray<T>` keeps two numbers apart: the *capacity*, the number of slots
//! in its heap block, and the *length*, the number of slots counted from index
//! 0 that hold a live value. Slots past the length are uninitialized memory
//! that is never read and never dropped.
//!
//! This crate is `no_std` compatible; it only needs `alloc` and uses the
//! global allocator.
//!
//! # Growth
//!
//! A new array reserves [`DynArray::DEFAULT_CAPACITY`] (16) slots. When an
//! insertion needs more room, the capacity becomes
//! `max(capacity * GROWTH_FACTOR, required)` with a growth factor of 2. The
//! live values are relocated into the new block before the old block is
//! released, so growth either succeeds completely or leaves the array as it
//! was. Capacity never shrinks: removing elements only lowers the length.
//!
//! ```
//! # use dynarray::DynArray;
//! let mut array = DynArray::new();
//! for i in 0..20 {
//!     array.push(i);
//! }
//! assert_eq!(array.len(), 20);
//! assert_eq!(array.capacity(), 32);
//! ```
//!
//! ## Time Complexity
//! - `push()`: amortized O(1)
//! - `insert(index, _)`, `remove(index)`: O(len - index)
//! - indexing, `get()`: O(1)
//! - `clone()`: O(len)
//! - `take()`, `move_from()`, `swap()`: O(1), no element is touched
//!
//! # Positional mutation
//!
//! ```
//! # use dynarray::DynArray;
//! let mut array: DynArray<i32> = (0..20).collect();
//!
//! assert_eq!(array.insert(5, 145), 5);
//! assert_eq!(array.len(), 21);
//! assert_eq!(array[5], 145);
//! assert_eq!(array[6], 5);
//!
//! assert_eq!(array.remove(2), 2);
//! assert_eq!(array[2], 3);
//! ```
//!
//! # Errors and preconditions
//!
//! Allocation failures can be handled through the `try_*` methods, which
//! return [`DynArrayError`] and leave the array untouched. The plain methods
//! hand the failure to the global allocation error handler.
//!
//! Index preconditions are checked: `insert`, `remove` and indexing panic on
//! an out-of-range index, `get` and `try_get` report it, and
//! [`DynArray::get_unchecked`] skips the check outside debug builds.
//!
//! ```
//! # use dynarray::{DynArray, DynArrayError};
//! let mut array = DynArray::new();
//! array.push("a");
//!
//! assert_eq!(array.get(3), None);
//! assert_eq!(
//!     array.try_insert(3, "b"),
//!     Err(DynArrayError::IndexOutOfBounds { index: 3, length: 1 })
//! );
//! assert!(DynArray::<u64>::try_with_capacity(usize::MAX).is_err());
//! ```
//!
//! # Ownership transfer
//!
//! `clone()` makes a deep copy with independent storage. `take()` and
//! `move_from()` transfer the block without touching any element and leave
//! the source empty, with no storage at all.
//!
//! ```
//! # use dynarray::DynArray;
//! let mut original: DynArray<i32> = [1, 2, 3].into_iter().collect();
//! let copy = original.clone();
//! original[0] = 100;
//! assert_eq!(copy[0], 1);
//!
//! let moved = original.take();
//! assert_eq!(moved, [100, 2, 3]);
//! assert_eq!(original.len(), 0);
//! assert_eq!(original.capacity(), 0);
//! ```
//!
//! # Iteration
//!
//! Standard iterators cover `for` loops in both directions:
//!
//! ```
//! # use dynarray::DynArray;
//! let array: DynArray<i32> = [1, 2, 3].into_iter().collect();
//! let sum: i32 = array.iter().sum();
//! assert_eq!(sum, 6);
//!
//! let reversed: Vec<_> = array.iter_rev().copied().collect();
//! assert_eq!(reversed, [3, 2, 1]);
//! ```
//!
//! Explicit cursors expose the position, a `has_next` check and a
//! past-the-end sentinel:
//!
//! ```
//! # use dynarray::DynArray;
//! let array: DynArray<i32> = [1, 2, 3].into_iter().collect();
//! let mut cursor = array.cursor_rev();
//! let mut visited = Vec::new();
//! loop {
//!     visited.push(*cursor.get().unwrap());
//!     if !cursor.has_next() {
//!         break;
//!     }
//!     cursor.advance();
//! }
//! assert_eq!(visited, [3, 2, 1]);
//! ```
//!
//! # Contiguous range
//!
//! The live elements are one contiguous run, available as a slice or as a
//! start/one-past-end pointer pair for range-based algorithms:
//!
//! ```
//! # use dynarray::DynArray;
//! let mut array: DynArray<i32> = [5, 3, 9, 1].into_iter().collect();
//! array.as_mut_slice().sort_unstable();
//! assert_eq!(array, [1, 3, 5, 9]);
//!
//! let range = array.as_ptr_range();
//! assert_eq!(unsafe { range.end.offset_from(range.start) }, 4);
//! ```

extern crate alloc;

#[cfg(test)]
extern crate std;

mod array;
pub mod cursor;
mod error;
mod iter;
mod raw;

// Re-export public types and traits
pub use array::DynArray;
pub use cursor::{Cursor, CursorMut, Direction};
pub use error::DynArrayError;
pub use iter::{IntoIter, Iter, IterMut};
