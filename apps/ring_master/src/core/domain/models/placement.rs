use app_ring::{KeyHash, Position};

/// Where a data item lands on the ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub key_hash: KeyHash,
    pub position: Position,
    pub node_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLoad {
    pub node_id: String,
    pub position: Position,
    pub keys: usize,
}
