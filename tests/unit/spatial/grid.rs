//! Tests for the row-major grid container, accessors and equality

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};
    use tilegrid::{Grid, GridError};

    fn counting_grid(height: usize, width: usize) -> Grid<usize> {
        Grid::from_fn(height, width, |row, col| col + row * width + 1)
    }

    // Tests default construction fills every cell and records the shape
    #[test]
    fn test_new_default_fill() {
        let grid: Grid<u32> = Grid::new(3, 4);

        assert_eq!(grid.dimensions(), (3, 4));
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.len(), 12);
        assert!(grid.iter().all(|&value| value == 0));
    }

    // Tests explicit fill value is cloned into every cell
    #[test]
    fn test_filled() {
        let grid = Grid::filled(2, 2, "sand".to_string());
        assert_eq!(grid.len(), 4);
        assert!(grid.iter().all(|value| value == "sand"));
    }

    // Tests zero-sized shapes produce empty buffers
    #[test]
    fn test_zero_sized_grids() {
        let no_rows: Grid<u8> = Grid::new(0, 5);
        let no_cols: Grid<u8> = Grid::new(5, 0);

        assert!(no_rows.is_empty());
        assert!(no_cols.is_empty());
        assert_eq!(no_cols.rows().count(), 5);
        assert_eq!(Grid::<u8>::empty().dimensions(), (0, 0));
    }

    // Tests storage is row-major with index col + row * width
    #[test]
    fn test_row_major_layout() {
        let grid = Grid::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();

        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(*grid.get(row, col), grid.as_slice()[col + row * 3]);
            }
        }
        assert_eq!(*grid.get(1, 0), 4);
        assert_eq!(grid[(0, 2)], 3);
    }

    // Tests from_vec rejects buffers of the wrong length
    #[test]
    fn test_from_vec_shape_mismatch() {
        let error = Grid::from_vec(2, 3, vec![1, 2, 3, 4, 5]).unwrap_err();
        assert!(matches!(
            error,
            GridError::ShapeMismatch {
                height: 2,
                width: 3,
                len: 5
            }
        ));
    }

    // Tests from_vec rejects shapes whose area overflows
    #[test]
    fn test_from_vec_overflow() {
        let error = Grid::<u8>::from_vec(usize::MAX, 2, Vec::new()).unwrap_err();
        assert!(matches!(error, GridError::DimensionOverflow { .. }));
    }

    // Tests filling an overflowing shape fails fast instead of truncating the buffer
    #[test]
    #[should_panic(expected = "overflow usize")]
    fn test_filled_overflow_panics() {
        let _ = Grid::filled(3, usize::MAX / 2, ());
    }

    // Tests generated grids check their area the same way
    #[test]
    #[should_panic(expected = "overflow usize")]
    fn test_from_fn_overflow_panics() {
        let _ = Grid::from_fn(usize::MAX, 2, |_, _| ());
    }

    // Tests mutable access writes through to the buffer
    #[test]
    fn test_get_mut_and_index_mut() {
        let mut grid: Grid<i32> = Grid::new(2, 2);
        *grid.get_mut(0, 1) = 7;
        grid[(1, 0)] = -3;

        assert_eq!(grid.as_slice(), &[0, 7, -3, 0]);
        if let Some(cell) = grid.try_get_mut(1, 1) {
            *cell = 9;
        }
        assert_eq!(grid.into_vec(), vec![0, 7, -3, 9]);
    }

    // Tests checked access returns None instead of aliasing another cell
    #[test]
    fn test_try_get_out_of_range() {
        let grid = counting_grid(2, 3);

        assert_eq!(grid.try_get(1, 2), Some(&6));
        assert_eq!(grid.try_get(2, 0), None);
        // Column 3 of row 0 would alias (1, 0) without the column check
        assert_eq!(grid.try_get(0, 3), None);
    }

    // Tests out-of-range access fails fast
    #[test]
    #[should_panic(expected = "outside a 2x3 grid")]
    fn test_get_out_of_range_panics() {
        let grid = counting_grid(2, 3);
        let _ = grid.get(0, 3);
    }

    // Tests toric access wraps negative and oversized coordinates
    #[test]
    fn test_get_toric() {
        let grid = counting_grid(3, 3);

        assert_eq!(grid.get_toric(-1, -1), Some(&9));
        assert_eq!(grid.get_toric(3, 4), Some(&2));
        assert_eq!(grid.get_toric(-4, 7), Some(&8));
        assert_eq!(Grid::<u8>::empty().get_toric(0, 0), None);
    }

    // Tests equality compares dimensions before data
    #[test]
    fn test_equality_dimension_mismatch() {
        let short = Grid::from_vec(1, 2, vec![1, 2]).unwrap();
        let long = Grid::from_vec(1, 3, vec![1, 2, 3]).unwrap();
        let tall = Grid::from_vec(2, 1, vec![1, 2]).unwrap();

        assert_ne!(short, long);
        assert_ne!(short, tall);
        assert_eq!(short, Grid::from_vec(1, 2, vec![1, 2]).unwrap());
        assert_ne!(short, Grid::from_vec(1, 2, vec![2, 1]).unwrap());
    }

    // Tests row iteration yields one slice per row
    #[test]
    fn test_rows() {
        let grid = counting_grid(3, 2);
        let rows: Vec<&[usize]> = grid.rows().collect();

        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..], &[5, 6][..]]);
        assert_eq!(grid.row(3), None);
    }

    // Tests map keeps the shape and visits cells in order
    #[test]
    fn test_map() {
        let grid = counting_grid(2, 2);
        let doubled = grid.map(|value| value * 2);

        assert_eq!(doubled.dimensions(), (2, 2));
        assert_eq!(doubled.as_slice(), &[2, 4, 6, 8]);
    }

    // Tests ndarray conversions preserve logical order
    #[test]
    fn test_ndarray_round_trip() {
        let array = array![[1, 2, 3], [4, 5, 6]];
        let grid = Grid::from_array2(&array);

        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(*grid.get(1, 2), 6);

        let transposed: Array2<i32> = array.t().to_owned();
        let from_view = Grid::from_array2(&transposed);
        assert_eq!(from_view.as_slice(), &[1, 4, 2, 5, 3, 6]);

        let back = grid.into_array2().unwrap();
        assert_eq!(back, array);
    }
}
