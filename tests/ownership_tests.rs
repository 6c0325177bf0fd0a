use dynarray::DynArray;

fn one_two_three() -> DynArray<i32> {
    [1, 2, 3].into_iter().collect()
}

#[test]
fn test_clone_is_independent() {
    let mut original = one_two_three();
    let mut copy = original.clone();
    assert_eq!(copy, [1, 2, 3]);

    original[0] = 100;
    assert_eq!(copy[0], 1);

    copy[1] = 200;
    copy.push(4);
    assert_eq!(original, [100, 2, 3]);
    assert_eq!(copy, [1, 200, 3, 4]);
}

#[test]
fn test_clone_strings_is_deep() {
    let mut original: DynArray<String> = ["one", "two", "three"].into_iter().map(String::from).collect();
    let copy = original.clone();

    original[0].push_str("_modified");
    assert_eq!(copy[0], "one");
    assert_ne!(original.as_ptr(), copy.as_ptr());
}

#[test]
fn test_clone_from_replaces_contents() {
    let source = one_two_three();
    let mut target: DynArray<i32> = (0..40).collect();

    target.clone_from(&source);
    assert_eq!(target, [1, 2, 3]);
    assert_eq!(target.capacity(), source.capacity());
    assert_eq!(source, [1, 2, 3]);
}

#[test]
fn test_clone_of_empty_state() {
    let mut array = one_two_three();
    let _ = array.take();

    let copy = array.clone();
    assert_eq!(copy.len(), 0);
    assert_eq!(copy.capacity(), 0);
}

#[test]
fn test_take_transfers_storage() {
    let mut source = one_two_three();
    let ptr = source.as_ptr();
    let capacity = source.capacity();

    let moved = source.take();
    assert_eq!(moved, [1, 2, 3]);
    assert_eq!(moved.as_ptr(), ptr);
    assert_eq!(moved.capacity(), capacity);

    assert_eq!(source.len(), 0);
    assert_eq!(source.capacity(), 0);
}

#[test]
fn test_moved_from_array_is_reusable() {
    let mut source = one_two_three();
    let _moved = source.take();

    source.push(7);
    source.insert(0, 6);
    assert_eq!(source, [6, 7]);
    assert_eq!(source.capacity(), 16);
}

#[test]
fn test_move_from_transfers_and_empties_source() {
    let long = "a".repeat(100);
    let mut source = DynArray::new();
    source.push(long.clone());

    let mut target = DynArray::new();
    target.push(String::from("replaced"));
    target.move_from(&mut source);

    assert_eq!(target.len(), 1);
    assert_eq!(target[0], long);
    assert_eq!(source.len(), 0);
    assert_eq!(source.capacity(), 0);
}

#[test]
fn test_language_move() {
    let source = one_two_three();
    let moved = source;
    assert_eq!(moved, [1, 2, 3]);
}

#[test]
fn test_swap() {
    let mut left = one_two_three();
    let mut right: DynArray<i32> = DynArray::with_capacity(64);
    right.push(9);

    left.swap(&mut right);
    assert_eq!(left, [9]);
    assert_eq!(left.capacity(), 64);
    assert_eq!(right, [1, 2, 3]);
    assert_eq!(right.capacity(), 16);
}

#[test]
fn test_self_assignment_through_clone() {
    let mut array = one_two_three();
    let snapshot = array.clone();
    array.clone_from(&snapshot);
    assert_eq!(array, [1, 2, 3]);
}
