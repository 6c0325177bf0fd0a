use alloc::alloc::{alloc, dealloc, handle_alloc_error};
use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use crate::error::DynArrayError;

/// Owns a block of raw, uninitialized storage for `capacity` values of `T`.
///
/// `RawBuffer` knows nothing about which slots hold live values. It never
/// reads, writes or drops elements; dropping it only releases the block.
/// Tracking the initialized prefix is the job of the owning `DynArray`.
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

// The buffer is uniquely owned, so it is as thread-safe as the values it holds.
unsafe impl<T: Send> Send for RawBuffer<T> {}
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// A buffer with no storage behind it.
    pub(crate) const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates an uninitialized block with room for exactly `capacity` values.
    ///
    /// A `capacity` of zero, or a zero-sized `T`, does not touch the allocator.
    ///
    /// # Errors
    ///
    /// - `DynArrayError::CapacityOverflow` if the block size overflows `isize::MAX`
    /// - `DynArrayError::AllocationFailure` if the allocator returns null
    pub(crate) fn try_allocate(capacity: usize) -> Result<Self, DynArrayError> {
        if capacity == 0 {
            return Ok(Self::empty());
        }
        if Self::IS_ZST {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }

        let layout = Self::layout_for(capacity)?;
        // SAFETY: `layout` has a non-zero size because both `capacity` and
        // `size_of::<T>()` are non-zero.
        let raw = unsafe { alloc(layout) };
        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => Ok(Self {
                ptr,
                capacity,
                _marker: PhantomData,
            }),
            None => {
                log::debug!(
                    "allocation of {} bytes for {} slots failed",
                    layout.size(),
                    capacity
                );
                Err(DynArrayError::AllocationFailure {
                    capacity,
                    bytes: layout.size(),
                })
            }
        }
    }

    fn layout_for(capacity: usize) -> Result<Layout, DynArrayError> {
        Layout::array::<T>(capacity).map_err(|_| DynArrayError::CapacityOverflow {
            requested: capacity,
        })
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pointer to the first slot. Dangling, but aligned, when nothing is allocated.
    #[inline]
    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if self.capacity == 0 || Self::IS_ZST {
            return;
        }
        if let Ok(layout) = Self::layout_for(self.capacity) {
            // SAFETY: the block was obtained from `alloc` with this same layout.
            unsafe {
                dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
            }
        }
    }
}

/// Reports an allocation error from an infallible operation.
///
/// Allocation failures go to the global allocation error handler, layout
/// overflows panic. Index errors never reach this point.
#[cold]
#[inline(never)]
pub(crate) fn handle_error<T>(error: DynArrayError) -> ! {
    match error {
        DynArrayError::AllocationFailure { capacity, .. } => match Layout::array::<T>(capacity) {
            Ok(layout) => handle_alloc_error(layout),
            Err(_) => panic!("capacity overflow"),
        },
        DynArrayError::CapacityOverflow { requested } => {
            panic!("capacity overflow: {requested} elements")
        }
        DynArrayError::IndexOutOfBounds { index, length } => {
            panic!("index out of bounds: the len is {length} but the index is {index}")
        }
    }
}
