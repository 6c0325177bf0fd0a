use dynarray::{DynArray, DynArrayError};

// 2^59 u64 slots is 4 EiB, which no allocator can satisfy but still forms a valid layout.
const UNSATISFIABLE: usize = 1 << 59;

#[test]
fn test_error_capacity_overflow() {
    let result = DynArray::<u64>::try_with_capacity(usize::MAX);
    assert_eq!(
        result.unwrap_err(),
        DynArrayError::CapacityOverflow {
            requested: usize::MAX
        }
    );
}

#[test]
fn test_error_allocation_failure() {
    match DynArray::<u64>::try_with_capacity(UNSATISFIABLE).unwrap_err() {
        DynArrayError::AllocationFailure { capacity, bytes } => {
            assert_eq!(capacity, UNSATISFIABLE);
            assert_eq!(bytes, UNSATISFIABLE * 8);
        }
        other => panic!("Expected AllocationFailure error, got {other:?}"),
    }
}

#[test]
fn test_failed_growth_leaves_array_untouched() {
    let mut array: DynArray<u64> = (0..10).collect();
    let ptr = array.as_ptr();

    assert!(array.try_ensure_capacity(UNSATISFIABLE).is_err());
    assert!(array.try_ensure_capacity(usize::MAX).is_err());

    assert_eq!(array.capacity(), 16);
    assert_eq!(array.as_ptr(), ptr);
    assert!(array.iter().copied().eq(0..10));
}

#[test]
fn test_ensure_capacity_within_capacity_is_noop() {
    let mut array: DynArray<u64> = DynArray::with_capacity(8);
    let ptr = array.as_ptr();
    assert_eq!(array.try_ensure_capacity(8), Ok(()));
    assert_eq!(array.capacity(), 8);
    assert_eq!(array.as_ptr(), ptr);
}

#[test]
fn test_error_insert_out_of_bounds() {
    let mut array: DynArray<i32> = [1, 2].into_iter().collect();
    assert_eq!(
        array.try_insert(3, 0),
        Err(DynArrayError::IndexOutOfBounds {
            index: 3,
            length: 2
        })
    );
    assert_eq!(array, [1, 2]);

    assert_eq!(array.try_insert(2, 3), Ok(2));
    assert_eq!(array, [1, 2, 3]);
}

#[test]
fn test_error_remove_out_of_bounds() {
    let mut array: DynArray<i32> = DynArray::new();
    assert_eq!(
        array.try_remove(0),
        Err(DynArrayError::IndexOutOfBounds {
            index: 0,
            length: 0
        })
    );

    array.push(5);
    assert_eq!(array.try_remove(0), Ok(5));
}

#[test]
fn test_error_get_out_of_bounds() {
    let mut array = DynArray::new();
    array.push("value");

    assert_eq!(array.try_get(0), Ok(&"value"));
    assert_eq!(
        array.try_get(1),
        Err(DynArrayError::IndexOutOfBounds {
            index: 1,
            length: 1
        })
    );
}

#[test]
fn test_try_push_succeeds_with_room() {
    let mut array = DynArray::with_capacity(1);
    assert_eq!(array.try_push('a'), Ok(0));
    assert_eq!(array.try_push('b'), Ok(1));
    assert_eq!(array.capacity(), 2);
}

#[test]
fn test_try_clone() {
    let array: DynArray<i32> = [1, 2, 3].into_iter().collect();
    let copy = array.try_clone().unwrap();
    assert_eq!(copy, array);
}

#[test]
fn test_error_display() {
    let error = DynArrayError::IndexOutOfBounds {
        index: 4,
        length: 2,
    };
    assert_eq!(
        error.to_string(),
        "Index out of bounds: index 4 is beyond array length 2"
    );

    let error = DynArrayError::AllocationFailure {
        capacity: 32,
        bytes: 256,
    };
    assert_eq!(
        error.to_string(),
        "Allocation failure: could not obtain 256 bytes for 32 elements"
    );
}

#[test]
#[should_panic(expected = "insertion index (is 5) should be <= len (is 0)")]
fn test_insert_precondition_panics() {
    let mut array: DynArray<i32> = DynArray::new();
    array.insert(5, 1);
}

#[test]
#[should_panic(expected = "removal index (is 0) should be < len (is 0)")]
fn test_remove_precondition_panics() {
    let mut array: DynArray<i32> = DynArray::new();
    array.remove(0);
}

#[test]
#[should_panic(expected = "capacity overflow")]
fn test_infallible_capacity_overflow_panics() {
    let _ = DynArray::<u64>::with_capacity(usize::MAX);
}
