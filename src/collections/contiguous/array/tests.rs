#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_construction() {
    let arr: FixedArray<u8> = FixedArray::new(4);
    assert_eq!(arr.len(), 4);
    assert_eq!(&*arr, &[0, 0, 0, 0], "New elements should hold the default value.");

    assert_eq!(
        FixedArray::<u8>::try_new(0),
        Err(InvalidSize { size: 0 }),
        "A FixedArray can't be created with no elements."
    );
    assert!(FixedArray::try_filled(0, 'a').is_err());
    assert!(FixedArray::<u8>::try_from_iter_sized([]).is_err());

    assert_panics!({
        FixedArray::<u8>::new(0);
    });
}

#[test]
fn test_bounds_checking() {
    let mut arr = FixedArray::filled(3, 1_i32);

    assert_eq!(arr.try_get(2), Ok(&1));
    assert_eq!(
        arr.try_get(3),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "Indexing one past the end should fail."
    );

    arr.set(0, 10);
    assert_eq!(*arr.get(0), 10);
    *arr.get_mut(1) = 20;
    assert_eq!(&*arr, &[10, 20, 1]);

    assert_eq!(
        arr.try_set(5, 50),
        Err(IndexOutOfBounds { index: 5, len: 3 })
    );
    assert_eq!(&*arr, &[10, 20, 1], "A failed set shouldn't modify the FixedArray.");

    assert_panics!({
        arr.get(usize::MAX);
    });
    assert_panics!({
        let mut arr = FixedArray::filled(1, 0_u8);
        arr.set(1, 0);
    });
}

#[test]
fn test_clear() {
    let mut arr = FixedArray::try_from_iter_sized(0..5).unwrap();
    arr.clear(9);
    assert!(arr.iter().all(|i| *i == 9), "Every element should be overwritten.");
    assert_eq!(arr.len(), 5, "Clearing shouldn't change the length.");
}

#[test]
fn test_iterators() {
    let mut arr = FixedArray::try_from_iter_sized(0_usize..5).unwrap();

    let first: Vec<_> = arr.iter().copied().collect();
    let second: Vec<_> = arr.iter().copied().collect();
    assert_eq!(first, second, "Each borrowed iterator should start from index 0.");

    let mut iter = arr.iter();
    for _ in 0..5 {
        iter.next();
    }
    assert_eq!(iter.next(), None, "An iterator should be exhausted after the last index.");
    assert_eq!(iter.next(), None);

    for i in &mut arr {
        *i *= 2;
    }
    assert_eq!(*arr, [0_usize, 2, 4, 6, 8]);

    let mut iter = arr.clone().into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = CountedDrop::new();
    let arr = FixedArray::filled(10, counter.clone());
    // The value passed to filled is dropped after cloning.
    let before = counter.drops();

    let mut iter = arr.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(
        counter.drops() - before,
        10,
        "Dropping a partially consumed owned iterator should drop all remaining elements."
    );
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let arr = FixedArray::filled(10, counter.clone());
    let before = counter.drops();

    drop(arr);

    assert_eq!(counter.drops() - before, 10, "10 elements should have been dropped.");
}

#[test]
fn test_zst_support() {
    let mut arr = FixedArray::<ZeroSizedType>::new(5);
    assert_eq!(arr[0], ZeroSizedType);
    assert_eq!(arr[4], ZeroSizedType);
    arr.set(3, ZeroSizedType);
    assert_eq!(arr.iter().count(), 5, "Should iterate over the right number of ZST instances.");
    assert_eq!(arr.into_iter().count(), 5);
}

#[test]
fn test_equality_and_hash() {
    let arr = FixedArray::try_from_iter_sized(0_usize..5).unwrap();

    assert_eq!(
        arr,
        FixedArray::try_from_fn(5, |i| i).unwrap(),
        "Different construction methods should produce equal results."
    );
    assert_ne!(arr, FixedArray::filled(5, 0));
    assert_eq!(&*arr, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_display() {
    let arr = FixedArray::try_from_iter_sized(["a", "b"]).unwrap();
    assert_eq!(arr.to_string(), "[a, b]");
}
