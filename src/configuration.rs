//! Algebraic constants shared by the transforms and the structural hash

// Structural hash mixing, matching the boost-style hash_combine
/// Odd constant added to every element hash (fractional part of the golden ratio)
pub const HASH_MIX_CONSTANT: u64 = 0x9e37_79b9;
/// Left shift applied to the running seed
pub const HASH_SHIFT_LEFT: u32 = 6;
/// Right shift applied to the running seed
pub const HASH_SHIFT_RIGHT: u32 = 2;

// Dihedral group D4 acting on a square tile
/// Number of distinct quarter-turn rotations
pub const ROTATION_STATES: u8 = 4;
/// Number of reflection states (plain, mirrored)
pub const REFLECTION_STATES: u8 = 2;
/// Order of the symmetry group of a square
pub const DIHEDRAL_ORDER: usize = (ROTATION_STATES * REFLECTION_STATES) as usize;
