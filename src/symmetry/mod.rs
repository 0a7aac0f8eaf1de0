//! Orientation algebra for grid elements
//!
//! This module contains:
//! - The per-element hook grid transforms apply to moved values
//! - The dihedral group D4 describing the symmetries of a square tile
//! - Oriented tile identifiers and their expansion into tile contents

/// Elements of the dihedral group D4
pub mod dihedral;
/// Per-element rotation and reflection hook
pub mod orientable;
/// Tile ids tagged with an orientation
pub mod oriented;

pub use dihedral::Orientation;
pub use orientable::Orientable;
pub use oriented::OrientedIdentifier;
