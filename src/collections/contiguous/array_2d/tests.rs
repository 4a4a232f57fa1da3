#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_construction() {
    let grid: FixedArray2D<i32> = FixedArray2D::new(3, 4);
    assert_eq!(grid.num_rows(), 3);
    assert_eq!(grid.num_cols(), 4);
    assert!(grid.rows().all(|row| row.len() == 4), "Every row should have num_cols elements.");

    assert_eq!(FixedArray2D::<i32>::try_new(0, 4), Err(InvalidSize { size: 0 }));
    assert_eq!(FixedArray2D::<i32>::try_new(4, 0), Err(InvalidSize { size: 0 }));
    assert_panics!({
        FixedArray2D::filled(0, 0, 'x');
    });
}

#[test]
fn test_indexing() {
    let mut grid = FixedArray2D::try_from_fn(2, 3, |row, col| row * 10 + col).unwrap();
    assert_eq!(*grid.get((0, 0)), 0);
    assert_eq!(*grid.get((1, 2)), 12);
    assert_eq!(grid[(1, 0)], 10);

    grid.set((0, 1), 99);
    grid[(1, 1)] = 77;
    assert_eq!(&**grid.row(0), &[0, 99, 2]);
    assert_eq!(&**grid.row(1), &[10, 77, 12]);

    assert_eq!(
        grid.try_get((2, 0)),
        Err(IndexOutOfBounds { index: 2, len: 2 }),
        "An invalid row should be reported against the number of rows."
    );
    assert_eq!(
        grid.try_get((0, 3)),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "An invalid column should be reported against the number of columns."
    );
    assert!(grid.try_set((5, 5), 0).is_err());
    assert_eq!(*grid.get((1, 2)), 12, "A failed set shouldn't modify anything.");

    assert_panics!({
        let _value = grid[(0, 3)];
    });
}

#[test]
fn test_clear() {
    let mut grid = FixedArray2D::try_from_fn(3, 2, |row, col| (row, col)).unwrap();
    grid.clear((7, 7));
    assert!(
        grid.rows().flat_map(|row| row.iter()).all(|item| *item == (7, 7)),
        "Clearing should propagate to every row."
    );
}

#[test]
fn test_equality_and_display() {
    let grid = FixedArray2D::filled(2, 2, 1);
    let mut other = grid.clone();
    assert_eq!(grid, other);
    other[(1, 1)] = 2;
    assert_ne!(grid, other);

    assert_eq!(other.to_string(), "[1, 1]\n[1, 2]");
    assert_eq!(
        format!("{other:?}"),
        "FixedArray2D { rows: [[1, 1], [1, 2]], num_rows: 2, num_cols: 2 }"
    );
}
