use thiserror::Error;

use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("Hash space size must be greater than zero")]
    InvalidSpaceSize,

    #[error("Ring has no nodes")]
    EmptyRing,

    #[error("Ring is not built yet")]
    NotBuilt,

    #[error("Ring is already built")]
    AlreadyBuilt,

    #[error("Cannot space {nodes} nodes evenly over a hash space of {space_size}")]
    SpaceTooSmall { space_size: u64, nodes: usize },

    #[error("No free position left in the hash space, starting from {start}")]
    NoFreePosition { start: Position },

    #[error("Node already exists: {0}")]
    NodeExists(String),

    #[error("Position {position} is already held by node {owner}")]
    PositionTaken { position: Position, owner: String },

    #[error("Cannot remove {0}: it is the last node on the ring")]
    LastNode(String),

    #[error("Unknown spacing mode: {0}")]
    UnknownSpacing(String),
}
