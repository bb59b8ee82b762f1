//! Consistent-hashing ring.
//!
//! Nodes sit at single positions of a bounded hash space `[0, space_size)`
//! and every data item is owned by the first node at or after its hash,
//! wrapping to the lowest position. Adding or removing a node only moves the
//! keys of one neighbour.

pub mod config;
pub mod error;
pub mod hasher;
mod placement;
pub mod ring;
pub mod types;

pub use config::RingConfig;
pub use error::RingError;
pub use hasher::StableHasher;
pub use ring::Ring;
pub use types::{KeyHash, Lookup, NodeChange, Position, RingResult, Segment, SpacingMode};
