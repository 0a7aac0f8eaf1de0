//! Tile references carrying a symmetry-group orientation
//!
//! Grids of [`OrientedIdentifier`] are what the generator produces: each cell
//! names a canonical tile and the orientation it was placed in. Rotating or
//! reflecting such a grid must update every orientation, otherwise expanding
//! the result back into tile contents would show mirrored or misturned tiles.

use std::fmt;

use crate::error::{GridError, Result, unknown_tile};
use crate::spatial::grid::Grid;
use crate::symmetry::dihedral::Orientation;
use crate::symmetry::orientable::Orientable;

/// Canonical tile id plus the orientation it is displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OrientedIdentifier<I = usize> {
    id: I,
    orientation: Orientation,
}

impl<I> OrientedIdentifier<I> {
    /// Reference `id` rotated `rotation` quarter turns (mod 4), then reflected if `reflected`
    pub const fn new(id: I, rotation: u8, reflected: bool) -> Self {
        Self {
            id,
            orientation: Orientation::new(rotation, reflected),
        }
    }

    /// Reference `id` in its canonical orientation
    pub const fn canonical(id: I) -> Self {
        Self::with_orientation(id, Orientation::IDENTITY)
    }

    /// Reference `id` in an explicit orientation
    pub const fn with_orientation(id: I, orientation: Orientation) -> Self {
        Self { id, orientation }
    }

    /// Canonical tile id
    pub const fn id(&self) -> &I {
        &self.id
    }

    /// Consume the reference, returning the tile id
    pub fn into_id(self) -> I {
        self.id
    }

    /// Orientation relative to the canonical tile
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Anticlockwise quarter turns, in `0..4`
    pub const fn rotation(&self) -> u8 {
        self.orientation.rotation()
    }

    /// Whether the canonical tile is mirrored after rotating
    pub const fn is_reflected(&self) -> bool {
        self.orientation.is_reflected()
    }
}

impl<I> Orientable for OrientedIdentifier<I> {
    fn rotate_orientation(self) -> Self {
        Self {
            orientation: self.orientation.then_rotate(),
            ..self
        }
    }

    fn reflect_orientation(self) -> Self {
        Self {
            orientation: self.orientation.then_reflect(),
            ..self
        }
    }
}

impl<I: fmt::Display> fmt::Display for OrientedIdentifier<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@r{}", self.id, self.rotation())?;
        if self.is_reflected() {
            write!(f, "f")?;
        }
        Ok(())
    }
}

impl<I> Grid<OrientedIdentifier<I>> {
    /// Wrap every id of a plain grid in its canonical orientation
    pub fn canonical_ids(ids: &Grid<I>) -> Self
    where
        I: Clone,
    {
        ids.map(|id| OrientedIdentifier::canonical(id.clone()))
    }

    /// Replace every cell with its canonical tile put into the cell's orientation
    ///
    /// `lookup` maps an id to its canonical `n x n` tile. The result has
    /// `height * n` rows and `width * n` columns, with the tile for cell
    /// `(r, c)` occupying the block starting at `(r * n, c * n)`.
    ///
    /// # Errors
    ///
    /// - [`GridError::UnknownTile`] if `lookup` has no tile for an id
    /// - [`GridError::TileShapeMismatch`] if a tile is not square or differs in
    ///   size from the first tile
    /// - [`GridError::DimensionOverflow`] if the expanded size overflows
    pub fn expand<'a, T, F>(&self, mut lookup: F) -> Result<Grid<T>>
    where
        I: fmt::Debug,
        T: Orientable + Clone + 'a,
        F: FnMut(&I) -> Option<&'a Grid<T>>,
    {
        let mut tile_size = None;
        let mut oriented = Vec::with_capacity(self.len());

        for cell in self {
            let Some(canonical) = lookup(cell.id()) else {
                tracing::debug!(id = ?cell.id(), "no canonical tile for id");
                return Err(unknown_tile(cell.id()));
            };

            let size = *tile_size.get_or_insert(canonical.height());
            if canonical.dimensions() != (size, size) {
                tracing::debug!(id = ?cell.id(), dimensions = ?canonical.dimensions(), "tile shape mismatch");
                return Err(GridError::TileShapeMismatch {
                    id: format!("{:?}", cell.id()),
                    expected: (size, size),
                    found: canonical.dimensions(),
                });
            }

            oriented.push(cell.orientation().apply(canonical));
        }

        let size = tile_size.unwrap_or(0);
        let (height, width) = self.dimensions();
        let overflow = || GridError::DimensionOverflow { height, width };
        let expanded_height = height.checked_mul(size).ok_or_else(overflow)?;
        let expanded_width = width.checked_mul(size).ok_or_else(overflow)?;

        let mut data = Vec::with_capacity(expanded_height.saturating_mul(expanded_width));
        for band in oriented.chunks(width.max(1)) {
            for tile_row in 0..size {
                for tile in band {
                    data.extend_from_slice(tile.row(tile_row).unwrap_or_default());
                }
            }
        }

        Grid::from_vec(expanded_height, expanded_width, data)
    }
}
