use std::hash::BuildHasher;

use twox_hash::XxHash64;

/// Seeded xxHash64 builder.
///
/// Unlike `RandomState` the output only depends on the seed and the hashed
/// value, so ring membership is the same across processes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StableHasher {
    seed: u64,
}

impl StableHasher {
    #[inline]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl BuildHasher for StableHasher {
    type Hasher = XxHash64;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        XxHash64::with_seed(self.seed)
    }
}
