use thiserror::Error;

/// Error types for `DynArray` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynArrayError {
    /// The allocator could not provide a block for the requested capacity
    #[error("Allocation failure: could not obtain {bytes} bytes for {capacity} elements")]
    AllocationFailure {
        /// Number of element slots requested
        capacity: usize,
        /// Size of the requested block in bytes
        bytes: usize,
    },
    /// The requested capacity does not fit in a valid allocation layout
    #[error("Capacity overflow: {requested} elements exceed the maximum allocation size")]
    CapacityOverflow {
        /// Number of element slots requested
        requested: usize,
    },
    /// Index is beyond the current array length
    #[error("Index out of bounds: index {index} is beyond array length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the array
        length: usize,
    },
}
