//! Per-element hook applied by grid rotation and reflection

use crate::spatial::grid::Grid;

/// Values that may carry their own orientation inside a grid
///
/// Grid transforms move every value to its new position and then pass it
/// through these hooks. Both default to the identity, which is correct for any
/// value whose meaning does not depend on direction.
pub trait Orientable: Sized {
    /// Value after the containing grid turns 90° anticlockwise
    #[must_use]
    fn rotate_orientation(self) -> Self {
        self
    }

    /// Value after the containing grid is mirrored about its vertical axis
    #[must_use]
    fn reflect_orientation(self) -> Self {
        self
    }
}

macro_rules! position_only {
    ($($ty:ty),* $(,)?) => {
        $(impl Orientable for $ty {})*
    };
}

position_only!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, String,
    &str, (),
);

// Pixels such as `[u8; 4]` and small records are values, not directions
impl<T, const N: usize> Orientable for [T; N] {}
impl<T> Orientable for Vec<T> {}

macro_rules! position_only_tuple {
    ($(($($name:ident),+)),* $(,)?) => {
        $(impl<$($name),+> Orientable for ($($name,)+) {})*
    };
}

position_only_tuple!((A), (A, B), (A, B, C), (A, B, C, D));

impl<T: Orientable> Orientable for Option<T> {
    fn rotate_orientation(self) -> Self {
        self.map(Orientable::rotate_orientation)
    }

    fn reflect_orientation(self) -> Self {
        self.map(Orientable::reflect_orientation)
    }
}

// Tiles stored as grids turn with the grid that contains them
impl<T: Orientable + Clone> Orientable for Grid<T> {
    fn rotate_orientation(self) -> Self {
        self.rotated()
    }

    fn reflect_orientation(self) -> Self {
        self.reflected()
    }
}
