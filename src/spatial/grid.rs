//! Fixed-size row-major grid container
//!
//! All cells live in a single contiguous buffer indexed by `col + row * width`
//! to keep row scans cache friendly. The shape is fixed at construction and
//! geometric transforms always allocate a fresh grid (see
//! [`crate::spatial::transform`]).

use std::ops::{Index, IndexMut};

use ndarray::Array2;

use crate::error::{GridError, Result, checked_area};

/// Dense 2D table of values stored in row-major order
///
/// Element access through [`Grid::get`] or indexing treats out-of-range
/// coordinates as a caller bug and panics. Use [`Grid::try_get`] when the
/// coordinates come from untrusted input.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    height: usize,
    width: usize,
    data: Vec<T>,
}

impl<T> Grid<T> {
    /// Create a grid with every cell set to `T::default()`
    ///
    /// # Panics
    ///
    /// Panics if `height * width` overflows `usize`
    #[track_caller]
    pub fn new(height: usize, width: usize) -> Self
    where
        T: Default,
    {
        Self::from_fn(height, width, |_, _| T::default())
    }

    /// Create a grid with every cell set to a clone of `value`
    ///
    /// # Panics
    ///
    /// Panics if `height * width` overflows `usize`
    #[track_caller]
    pub fn filled(height: usize, width: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            height,
            width,
            data: vec![value; area_or_abort(height, width)],
        }
    }

    /// Create a grid with zero rows and zero columns
    pub const fn empty() -> Self {
        Self {
            height: 0,
            width: 0,
            data: Vec::new(),
        }
    }

    /// Create a grid by evaluating `f(row, col)` for every cell in row-major order
    ///
    /// # Panics
    ///
    /// Panics if `height * width` overflows `usize`
    #[track_caller]
    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(area_or_abort(height, width));
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col));
            }
        }

        Self {
            height,
            width,
            data,
        }
    }

    /// Wrap an existing row-major buffer
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DimensionOverflow`] if `height * width` overflows and
    /// [`GridError::ShapeMismatch`] if `data.len()` differs from `height * width`
    pub fn from_vec(height: usize, width: usize, data: Vec<T>) -> Result<Self> {
        let area = checked_area(height, width)?;
        if data.len() != area {
            tracing::debug!(height, width, len = data.len(), "rejected grid buffer");
            return Err(GridError::ShapeMismatch {
                height,
                width,
                len: data.len(),
            });
        }

        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Copy a two-dimensional `ndarray` in logical row-major order
    pub fn from_array2(array: &Array2<T>) -> Self
    where
        T: Clone,
    {
        let (height, width) = array.dim();
        Self {
            height,
            width,
            data: array.iter().cloned().collect(),
        }
    }

    /// Convert into an `ndarray` with shape `(height, width)`
    ///
    /// # Errors
    ///
    /// Propagates the `ndarray` shape error as [`GridError::Layout`]
    pub fn into_array2(self) -> Result<Array2<T>> {
        Ok(Array2::from_shape_vec((self.height, self.width), self.data)?)
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Dimensions as `(height, width)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Total number of cells
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid has no cells
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major view of every cell
    pub const fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Consume the grid, returning its row-major buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterate over cells in row-major order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Borrow a single row, or `None` past the last row
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        self.data.get(start..start + self.width)
    }

    /// Iterate over all rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.height).filter_map(|row| self.row(row))
    }

    const fn linear_index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.height && col < self.width {
            Some(col + row * self.width)
        } else {
            None
        }
    }

    /// Borrow the cell at `(row, col)`, or `None` when out of range
    pub fn try_get(&self, row: usize, col: usize) -> Option<&T> {
        self.linear_index(row, col).and_then(|index| self.data.get(index))
    }

    /// Mutably borrow the cell at `(row, col)`, or `None` when out of range
    pub fn try_get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.linear_index(row, col).and_then(|index| self.data.get_mut(index))
    }

    /// Borrow the cell at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if `row >= height` or `col >= width`
    #[track_caller]
    pub fn get(&self, row: usize, col: usize) -> &T {
        let (height, width) = self.dimensions();
        match self.try_get(row, col) {
            Some(value) => value,
            None => out_of_bounds(row, col, height, width),
        }
    }

    /// Mutably borrow the cell at `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if `row >= height` or `col >= width`
    #[track_caller]
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        let (height, width) = self.dimensions();
        match self.try_get_mut(row, col) {
            Some(value) => value,
            None => out_of_bounds(row, col, height, width),
        }
    }

    /// Borrow a cell treating the grid as a torus
    ///
    /// Negative and oversized coordinates wrap around. Returns `None` only
    /// when the grid is empty.
    pub fn get_toric(&self, row: isize, col: isize) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let wrapped_row = row.rem_euclid(self.height as isize) as usize;
        let wrapped_col = col.rem_euclid(self.width as isize) as usize;
        self.try_get(wrapped_row, wrapped_col)
    }

    /// Apply `f` to every cell, keeping the shape
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            height: self.height,
            width: self.width,
            data: self.data.iter().map(f).collect(),
        }
    }
}

// Treated like allocation failure; zero-sized cells would otherwise get a short buffer
#[track_caller]
#[allow(clippy::panic)]
fn area_or_abort(height: usize, width: usize) -> usize {
    match checked_area(height, width) {
        Ok(area) => area,
        Err(error) => panic!("{error}"),
    }
}

#[cold]
#[track_caller]
#[allow(clippy::panic)]
fn out_of_bounds(row: usize, col: usize, height: usize, width: usize) -> ! {
    panic!("cell ({row}, {col}) is outside a {height}x{width} grid")
}

impl<T: PartialEq> PartialEq for Grid<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.height != other.height || self.width != other.width {
            return false;
        }
        self.data == other.data
    }
}

impl<T: Eq> Eq for Grid<T> {}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.get(row, col)
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.get_mut(row, col)
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
