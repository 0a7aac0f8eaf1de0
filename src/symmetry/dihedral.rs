//! Elements of the dihedral group D4
//!
//! An [`Orientation`] describes how a canonical square tile was turned into
//! the variant actually placed: first `rotation` quarter turns anticlockwise,
//! then a mirror about the vertical axis if `reflected`. Mirroring reverses
//! the handedness of every later rotation, so a quarter turn applied after a
//! reflection decrements the stored rotation instead of incrementing it.

use crate::configuration::{DIHEDRAL_ORDER, ROTATION_STATES};
use crate::spatial::grid::Grid;
use crate::symmetry::orientable::Orientable;

/// One of the eight symmetries of a square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Orientation {
    rotation: u8,
    reflected: bool,
}

impl Orientation {
    /// The symmetry that leaves a tile unchanged
    pub const IDENTITY: Self = Self::new(0, false);

    /// Every group element, ordered so that `ALL[o.index()] == o`
    pub const ALL: [Self; DIHEDRAL_ORDER] = [
        Self::new(0, false),
        Self::new(1, false),
        Self::new(2, false),
        Self::new(3, false),
        Self::new(0, true),
        Self::new(1, true),
        Self::new(2, true),
        Self::new(3, true),
    ];

    /// Build an orientation, reducing `rotation` modulo 4
    pub const fn new(rotation: u8, reflected: bool) -> Self {
        Self {
            rotation: rotation % ROTATION_STATES,
            reflected,
        }
    }

    /// Anticlockwise quarter turns applied before any reflection
    pub const fn rotation(self) -> u8 {
        self.rotation
    }

    /// Whether a reflection follows the rotation
    pub const fn is_reflected(self) -> bool {
        self.reflected
    }

    /// Position of this element in [`Orientation::ALL`]
    pub const fn index(self) -> usize {
        let offset = if self.reflected {
            ROTATION_STATES as usize
        } else {
            0
        };
        self.rotation as usize + offset
    }

    /// Orientation after one further anticlockwise quarter turn
    #[must_use]
    pub const fn then_rotate(self) -> Self {
        let step = if self.reflected {
            ROTATION_STATES - 1
        } else {
            1
        };
        Self {
            rotation: (self.rotation + step) % ROTATION_STATES,
            reflected: self.reflected,
        }
    }

    /// Orientation after one further reflection
    #[must_use]
    pub const fn then_reflect(self) -> Self {
        Self {
            rotation: self.rotation,
            reflected: !self.reflected,
        }
    }

    /// Apply `self` first, then `next`
    #[must_use]
    pub const fn compose(self, next: Self) -> Self {
        let turn = if self.reflected {
            ROTATION_STATES - next.rotation
        } else {
            next.rotation
        };
        Self {
            rotation: (self.rotation + turn) % ROTATION_STATES,
            reflected: self.reflected != next.reflected,
        }
    }

    /// The orientation undoing `self`
    ///
    /// Every reflected element is its own inverse.
    #[must_use]
    pub const fn inverse(self) -> Self {
        if self.reflected {
            self
        } else {
            Self {
                rotation: (ROTATION_STATES - self.rotation) % ROTATION_STATES,
                reflected: false,
            }
        }
    }

    /// Put a canonical grid into this orientation
    ///
    /// Rotates `rotation` times and then reflects if needed, so the contents
    /// of every cell are oriented as well.
    pub fn apply<T: Orientable + Clone>(self, grid: &Grid<T>) -> Grid<T> {
        let mut result = grid.clone();
        for _ in 0..self.rotation {
            result = result.rotated();
        }
        if self.reflected {
            result = result.reflected();
        }
        result
    }
}

impl Orientable for Orientation {
    fn rotate_orientation(self) -> Self {
        self.then_rotate()
    }

    fn reflect_orientation(self) -> Self {
        self.then_reflect()
    }
}
