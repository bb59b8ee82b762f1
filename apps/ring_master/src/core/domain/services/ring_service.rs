use app_ring::NodeChange;

use crate::core::domain::models::{AppError, NodeLoad, Placement};

/// Shared access to one ring. Every call sees the ring as a single unit.
pub trait RingService: Send + Sync {
    fn add_node(&self, node_id: &str) -> Result<NodeChange, AppError>;

    /// `Ok(None)` when the node is not on the ring.
    fn remove_node(&self, node_id: &str) -> Result<Option<NodeChange>, AppError>;

    fn assign_data(&self, key: &str) -> Result<Placement, AppError>;

    fn locate_data(&self, key: &str) -> Result<Placement, AppError>;

    fn distribution(&self) -> Vec<NodeLoad>;
}
