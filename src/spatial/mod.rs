//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - The row-major grid container and its accessors
//! - Rotation, reflection and toric sub-window extraction
//! - Structural hashing of whole grids

/// Order-sensitive structural hash
pub mod fingerprint;
/// Row-major grid container
pub mod grid;
/// Geometric transforms producing new grids
pub mod transform;

pub use grid::Grid;
