use std::str::FromStr;

use crate::error::RingError;

/// Coordinate of a node on the ring, always in `[0, space_size)`.
pub type Position = u64;

/// Item hash already reduced modulo the space size.
pub type KeyHash = u64;

pub type RingResult<T> = Result<T, RingError>;

/// Strategy used by `Ring::build` to place the initial nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpacingMode {
    /// Position derived from the node name's hash, stepping forward on collision.
    Random,
    /// Node `i` of `n` sits at `floor(space_size / n) * i`.
    #[default]
    Equidistant,
}

impl FromStr for SpacingMode {
    type Err = RingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(SpacingMode::Random),
            "equidistant" => Ok(SpacingMode::Equidistant),
            other => Err(RingError::UnknownSpacing(other.to_string())),
        }
    }
}

/// Direction of a ring lookup when the hash falls between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Nearest position at or after the hash, wrapping to the first index.
    Successor,
    /// Nearest position at or before the hash, wrapping to the last index.
    Predecessor,
}

/// Outcome of a structural change to the ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeChange {
    pub node: String,
    pub position: Position,
    /// The successor that handed keys over (add) or absorbed them (remove).
    pub neighbour: Position,
    pub keys_moved: usize,
}

/// Arc `(start, end]` of the hash space owned by one node.
///
/// When `start >= end` the arc wraps past the top of the space; a lone node
/// has `start == end` and owns everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: Position,
    pub end: Position,
}

impl Segment {
    pub fn contains(&self, hash: KeyHash) -> bool {
        if self.start < self.end {
            self.start < hash && hash <= self.end
        } else {
            hash > self.start || hash <= self.end
        }
    }
}
