//! Toric 2D grids with dihedral-aware transforms for tile-based pattern generation
//!
//! A [`Grid`] stores cells in one row-major buffer and supports rotation,
//! reflection and wrap-around sub-window extraction. Cells holding an
//! [`OrientedIdentifier`] also have their orientation updated by every
//! transform, so a rotated grid of tile references matches rotating the
//! expanded tiles themselves.

#![forbid(unsafe_code)]

/// Algebraic constants for hashing and the symmetry group
pub mod configuration;
/// Error types for boundary operations
pub mod error;
/// Grid container, transforms and hashing
pub mod spatial;
/// Orientation algebra for grid elements
pub mod symmetry;

pub use error::{GridError, Result};
pub use spatial::Grid;
pub use symmetry::{Orientable, Orientation, OrientedIdentifier};
