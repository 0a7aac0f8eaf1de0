//! Order-sensitive structural hash over whole grids
//!
//! Lets grids key hash maps for deduplication. Equal grids always produce the
//! same fingerprint; distinct grids usually differ, but collisions are possible
//! and nothing here is cryptographic.

use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher, Hash, Hasher};

use crate::configuration::{HASH_MIX_CONSTANT, HASH_SHIFT_LEFT, HASH_SHIFT_RIGHT};
use crate::spatial::grid::Grid;

/// Deterministic element hasher used by [`Grid::fingerprint`]
pub type DefaultElementHasher = BuildHasherDefault<DefaultHasher>;

/// Fold one element hash into the running seed
pub const fn combine(seed: u64, element_hash: u64) -> u64 {
    seed ^ element_hash
        .wrapping_add(HASH_MIX_CONSTANT)
        .wrapping_add(seed << HASH_SHIFT_LEFT)
        .wrapping_add(seed >> HASH_SHIFT_RIGHT)
}

impl<T: Hash> Grid<T> {
    /// Fingerprint using a caller-chosen hasher for individual elements
    ///
    /// The seed starts at the cell count and absorbs every element hash in
    /// row-major order.
    pub fn fingerprint_with<S: BuildHasher>(&self, hasher: &S) -> u64 {
        self.iter().fold(self.len() as u64, |seed, element| {
            combine(seed, hasher.hash_one(element))
        })
    }

    /// Fingerprint using [`DefaultElementHasher`]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint_with(&DefaultElementHasher::default())
    }
}

/// Feeds the dimensions and then every cell into the caller's hasher
///
/// Hash maps therefore hash each element once, with whatever hasher they were
/// built with. Use [`Grid::fingerprint`] for the standalone structural value.
impl<T: Hash> Hash for Grid<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dimensions().hash(state);
        T::hash_slice(self.as_slice(), state);
    }
}
