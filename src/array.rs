use core::fmt;
use core::mem;
use core::ops::{Index, IndexMut, Range};
use core::ptr;
use core::slice;

use crate::cursor::{Cursor, CursorMut, Direction};
use crate::error::DynArrayError;
use crate::iter::{Iter, IterMut};
use crate::raw::{handle_error, RawBuffer};

/// A growable, contiguous array that manages its own raw storage
///
/// Slots `[0, len)` hold live values, slots `[len, capacity)` are
/// uninitialized and never read or dropped.
pub struct DynArray<T> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) len: usize,
}

impl<T> DynArray<T> {
    /// Capacity reserved by [`DynArray::new`] and substituted for a zero request.
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Multiplier applied to the capacity whenever the array has to grow.
    pub const GROWTH_FACTOR: usize = 2;

    /// Creates an empty array with [`DynArray::DEFAULT_CAPACITY`] slots reserved.
    ///
    /// # Panics
    ///
    /// Calls the global allocation error handler if the block cannot be obtained.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty array with room for `capacity` elements.
    ///
    /// A `capacity` of zero is replaced by [`DynArray::DEFAULT_CAPACITY`].
    ///
    /// # Panics
    ///
    /// Panics if the capacity overflows the maximum allocation size, and calls
    /// the global allocation error handler if the block cannot be obtained.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|e| handle_error::<T>(e))
    }

    /// Creates an empty array with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::CapacityOverflow` or
    /// `DynArrayError::AllocationFailure` if the block cannot be reserved.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, DynArrayError> {
        let capacity = if capacity == 0 {
            Self::DEFAULT_CAPACITY
        } else {
            capacity
        };
        Ok(Self {
            buf: RawBuffer::try_allocate(capacity)?,
            len: 0,
        })
    }

    /// Creates an array without any storage behind it.
    ///
    /// This is the state an array is left in after its contents were taken
    /// with [`DynArray::take`] or [`DynArray::move_from`]. The first insertion
    /// allocates.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            buf: RawBuffer::empty(),
            len: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Makes sure at least `required` slots are allocated in total.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow, calls the global allocation error handler
    /// if the block cannot be obtained.
    pub fn ensure_capacity(&mut self, required: usize) {
        if let Err(e) = self.try_ensure_capacity(required) {
            handle_error::<T>(e);
        }
    }

    /// Makes sure at least `required` slots are allocated in total.
    ///
    /// Does nothing if the capacity already suffices. Otherwise the capacity
    /// grows to `max(capacity * GROWTH_FACTOR, required)` (to at least
    /// `DEFAULT_CAPACITY` when starting from no storage), the live elements
    /// are relocated into the new block and the old block is released.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::CapacityOverflow` or
    /// `DynArrayError::AllocationFailure` if the new block cannot be reserved.
    /// The array is left untouched in that case.
    pub fn try_ensure_capacity(&mut self, required: usize) -> Result<(), DynArrayError> {
        let capacity = self.buf.capacity();
        if required <= capacity {
            return Ok(());
        }

        let new_capacity = if capacity == 0 {
            required.max(Self::DEFAULT_CAPACITY)
        } else {
            capacity.saturating_mul(Self::GROWTH_FACTOR).max(required)
        };
        let new_buf = RawBuffer::try_allocate(new_capacity)?;

        // SAFETY: the new block has room for `new_capacity >= len` values and
        // does not overlap the old one. Relocation is a bitwise move, after
        // which the old slots are treated as uninitialized.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_ptr(), self.len);
        }
        // Only the old block is released here, its values now live in `new_buf`.
        drop(mem::replace(&mut self.buf, new_buf));

        log::trace!(
            "grew array of {} elements from {} to {} slots",
            self.len,
            capacity,
            new_capacity
        );
        Ok(())
    }

    /// Appends an element and returns its index.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow, calls the global allocation error handler
    /// if growing fails.
    pub fn push(&mut self, value: T) -> usize {
        self.try_push(value).unwrap_or_else(|e| handle_error::<T>(e))
    }

    /// Appends an element and returns its index.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the array had to grow and could not.
    /// The array is unchanged and `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<usize, DynArrayError> {
        self.try_ensure_capacity(self.len + 1)?;

        // SAFETY: slot `len` is allocated and uninitialized.
        unsafe {
            ptr::write(self.buf.as_ptr().add(self.len), value);
        }
        self.len += 1;
        Ok(self.len - 1)
    }

    /// Inserts an element at `index`, shifting everything after it to the right.
    ///
    /// Returns `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        assert!(
            index <= self.len,
            "insertion index (is {}) should be <= len (is {})",
            index,
            self.len
        );
        self.try_insert(index, value)
            .unwrap_or_else(|e| handle_error::<T>(e))
    }

    /// Inserts an element at `index`, shifting everything after it to the right.
    ///
    /// # Errors
    ///
    /// - `DynArrayError::IndexOutOfBounds` if `index > len`
    /// - An allocation error if the array had to grow and could not
    ///
    /// On error the array is unchanged and `value` is dropped.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize, DynArrayError> {
        if index > self.len {
            return Err(DynArrayError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        self.try_ensure_capacity(self.len + 1)?;

        // SAFETY: capacity is at least `len + 1`, so the shifted tail
        // `[index + 1, len + 1)` is in bounds. After the shift slot `index`
        // holds a stale bit copy that is overwritten without being dropped.
        unsafe {
            let slot = self.buf.as_ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            ptr::write(slot, value);
        }
        self.len += 1;
        Ok(index)
    }

    /// Removes and returns the element at `index`, shifting the tail to the left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "removal index (is {}) should be < len (is {})",
            index,
            self.len
        );
        self.remove_at(index)
    }

    /// Removes and returns the element at `index`, shifting the tail to the left.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index >= len`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, DynArrayError> {
        if index >= self.len {
            return Err(DynArrayError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        Ok(self.remove_at(index))
    }

    fn remove_at(&mut self, index: usize) -> T {
        debug_assert!(index < self.len);

        // SAFETY: `index < len`, the value is moved out before its slot is
        // overwritten by the tail `[index + 1, len)`.
        unsafe {
            let slot = self.buf.as_ptr().add(index);
            let value = ptr::read(slot);
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Removes and returns the last element, or `None` if the array is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;

        // SAFETY: slot `len` was live and is now outside the live prefix.
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.len)) })
    }

    /// Drops every element in index order. The capacity is kept.
    pub fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        // The length is reset first so a panicking destructor cannot cause a double drop.
        self.len = 0;

        // SAFETY: the slice covered the live prefix, which is no longer tracked.
        unsafe {
            ptr::drop_in_place(live);
        }
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if out of bounds.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index >= len`.
    pub fn try_get(&self, index: usize) -> Result<&T, DynArrayError> {
        let length = self.len;
        self.get(index)
            .ok_or(DynArrayError::IndexOutOfBounds { index, length })
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`. Only debug builds verify this.
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "index {index} out of bounds");
        &*self.buf.as_ptr().add(index)
    }

    /// Returns a mutable reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`. Only debug builds verify this.
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "index {index} out of bounds");
        &mut *self.buf.as_ptr().add(index)
    }

    /// The live elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is initialized, the pointer is aligned and non-null.
        unsafe {
            slice::from_raw_parts(self.buf.as_ptr(), self.len)
        }
    }

    /// The live elements as a mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for `as_slice`, and `&mut self` guarantees uniqueness.
        unsafe {
            slice::from_raw_parts_mut(self.buf.as_ptr(), self.len)
        }
    }

    /// Pointer to the first slot of the storage.
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Mutable pointer to the first slot of the storage.
    #[must_use]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_ptr()
    }

    /// Start and one-past-the-end pointers of the live elements.
    ///
    /// Invalidated by any operation that inserts, removes or grows.
    #[must_use]
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.as_slice().as_ptr_range()
    }

    /// Mutable start and one-past-the-end pointers of the live elements.
    #[must_use]
    pub fn as_mut_ptr_range(&mut self) -> Range<*mut T> {
        self.as_mut_slice().as_mut_ptr_range()
    }

    /// Exchanges storage, length and capacity with `other`. No element is touched.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.buf, &mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Takes the storage out of `self`, leaving it empty with capacity 0.
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::empty())
    }

    /// Replaces the contents of `self` with the storage of `source`.
    ///
    /// The old elements of `self` are dropped in index order and its block is
    /// released. `source` is left empty with capacity 0.
    pub fn move_from(&mut self, source: &mut Self) {
        *self = source.take();
    }

    /// Returns a cursor at the first element, walking toward the end.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), Direction::Forward)
    }

    /// Returns a cursor at the last element, walking toward index 0.
    #[must_use]
    pub fn cursor_rev(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), Direction::Reverse)
    }

    /// Returns the past-the-end cursor, for comparison only.
    #[must_use]
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::past_end(self.as_slice(), Direction::Forward)
    }

    /// Returns a mutable cursor at the first element.
    #[must_use]
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.as_mut_slice(), Direction::Forward)
    }

    /// Returns a mutable cursor at the last element.
    #[must_use]
    pub fn cursor_mut_rev(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.as_mut_slice(), Direction::Reverse)
    }

    /// Returns an iterator over the elements in index order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over the elements from the last one to index 0.
    #[must_use]
    pub fn iter_rev(&self) -> core::iter::Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    /// Returns an iterator of mutable references in index order.
    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator of mutable references from the last element to index 0.
    #[must_use]
    pub fn iter_mut_rev(&mut self) -> core::iter::Rev<IterMut<'_, T>> {
        self.iter_mut().rev()
    }
}

impl<T: Clone> DynArray<T> {
    /// Deep-copies the array into storage of the same capacity.
    ///
    /// If a `clone` panics, the copies made so far are dropped and the new
    /// block is released before the panic continues. `self` is never modified.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the storage for the copy cannot be reserved.
    pub fn try_clone(&self) -> Result<Self, DynArrayError> {
        let mut copy = Self {
            buf: RawBuffer::try_allocate(self.capacity())?,
            len: 0,
        };
        for item in self {
            let value = item.clone();
            // SAFETY: `copy` has the same capacity as `self` and `copy.len < self.len`.
            unsafe {
                ptr::write(copy.buf.as_ptr().add(copy.len), value);
            }
            copy.len += 1;
        }
        Ok(copy)
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        // SAFETY: the live prefix is dropped exactly once, in index order.
        // `buf` releases the block afterwards.
        unsafe {
            ptr::drop_in_place(self.as_mut_slice());
        }
    }
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|e| handle_error::<T>(e))
    }

    /// Copies into a temporary first and swaps it in, so a panicking
    /// `clone` leaves `self` as it was.
    fn clone_from(&mut self, source: &Self) {
        let mut fresh = source.clone();
        self.swap(&mut fresh);
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: PartialEq> PartialEq<[T]> for DynArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len, index
            ),
        }
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("index out of bounds: the len is {len} but the index is {index}"),
        }
    }
}

impl<T> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.ensure_capacity(self.len.saturating_add(lower));
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}
