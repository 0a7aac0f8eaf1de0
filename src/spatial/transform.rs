//! Geometric transforms over grids
//!
//! Every transform reads its source immutably and returns a freshly allocated
//! grid. Positions are permuted by fixed index mappings; each moved value then
//! passes through an orientation hook so element types that encode their own
//! orientation stay consistent with the grid-level transform.

use std::collections::HashSet;
use std::hash::Hash;

use crate::configuration::DIHEDRAL_ORDER;
use crate::spatial::grid::Grid;
use crate::symmetry::{Orientable, Orientation};

impl<T: Clone> Grid<T> {
    /// Mirror about the vertical axis, passing every moved value through `hook`
    ///
    /// Column `x` of the result holds column `width - 1 - x` of the source.
    pub fn reflected_with(&self, mut hook: impl FnMut(T) -> T) -> Self {
        let (height, width) = self.dimensions();
        Self::from_fn(height, width, |y, x| hook(self.get(y, width - 1 - x).clone()))
    }

    /// Rotate 90° anticlockwise, passing every moved value through `hook`
    ///
    /// The result is `width x height` and cell `(y, x)` holds source cell
    /// `(x, width - 1 - y)`.
    pub fn rotated_with(&self, mut hook: impl FnMut(T) -> T) -> Self {
        let (height, width) = self.dimensions();
        Self::from_fn(width, height, |y, x| hook(self.get(x, width - 1 - y).clone()))
    }

    /// Extract a `sub_height x sub_width` window starting at `(start_row, start_col)`
    ///
    /// The source is treated as a torus, so the window may start anywhere and
    /// may be larger than the source, wrapping as many times as needed.
    ///
    /// # Panics
    ///
    /// Panics if the source is empty and the requested window is not
    #[track_caller]
    pub fn get_sub_array(
        &self,
        start_row: usize,
        start_col: usize,
        sub_width: usize,
        sub_height: usize,
    ) -> Self {
        let (height, width) = self.dimensions();
        assert!(
            sub_width == 0 || sub_height == 0 || !self.is_empty(),
            "cannot take a {sub_height}x{sub_width} toric window of an empty grid"
        );

        Self::from_fn(sub_height, sub_width, |ki, kj| {
            // Reduce operands first so large starts cannot overflow
            let row = (start_row % height + ki % height) % height;
            let col = (start_col % width + kj % width) % width;
            self.get(row, col).clone()
        })
    }
}

impl<T: Orientable + Clone> Grid<T> {
    /// Mirror about the vertical axis, reflecting each value's own orientation
    pub fn reflected(&self) -> Self {
        self.reflected_with(Orientable::reflect_orientation)
    }

    /// Rotate 90° anticlockwise, rotating each value's own orientation
    pub fn rotated(&self) -> Self {
        self.rotated_with(Orientable::rotate_orientation)
    }

    /// All eight images of this grid under the symmetries of the square
    ///
    /// Entry `i` is `Orientation::ALL[i].apply(self)`.
    pub fn orientations(&self) -> [Self; DIHEDRAL_ORDER] {
        Orientation::ALL.map(|orientation| orientation.apply(self))
    }

    /// Orientations of this grid with duplicates removed
    ///
    /// Keeps the first orientation (in `Orientation::ALL` order) producing each
    /// distinct grid. A fully symmetric grid yields a single entry.
    pub fn distinct_orientations(&self) -> Vec<(Orientation, Self)>
    where
        T: Eq + Hash,
    {
        let mut seen = HashSet::new();
        let mut distinct = Vec::new();

        for (orientation, image) in Orientation::ALL.into_iter().zip(self.orientations()) {
            if seen.insert(image.clone()) {
                distinct.push((orientation, image));
            }
        }

        tracing::trace!(count = distinct.len(), "distinct orientations");
        distinct
    }
}
