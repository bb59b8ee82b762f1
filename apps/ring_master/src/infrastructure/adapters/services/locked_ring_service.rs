use app_ring::{NodeChange, Ring, RingError};
use parking_lot::RwLock;

use crate::{
    config::RingMasterConfig,
    core::domain::{
        models::{AppError, NodeLoad, Placement},
        services::RingService,
    },
};

/// Ring behind a single lock: positions and both maps change together.
pub struct LockedRingService {
    ring: RwLock<Ring>,
}

impl LockedRingService {
    pub fn new(ring: Ring) -> Self {
        Self {
            ring: RwLock::new(ring),
        }
    }

    /// Builds the configured ring, assigning the initial data.
    pub fn from_config(cfg: &RingMasterConfig) -> Result<Self, AppError> {
        let mut ring = Ring::new(cfg.nodes.iter().cloned(), cfg.data.iter(), cfg.ring.clone());
        ring.build()?;

        Ok(Self::new(ring))
    }

    #[inline]
    fn node_at(ring: &Ring, position: u64) -> Result<String, AppError> {
        ring.node_map()
            .get(&position)
            .cloned()
            .ok_or(AppError::Ring(RingError::EmptyRing))
    }
}

impl RingService for LockedRingService {
    fn add_node(&self, node_id: &str) -> Result<NodeChange, AppError> {
        Ok(self.ring.write().add_node(node_id)?)
    }

    fn remove_node(&self, node_id: &str) -> Result<Option<NodeChange>, AppError> {
        Ok(self.ring.write().remove_node(node_id)?)
    }

    fn assign_data(&self, key: &str) -> Result<Placement, AppError> {
        let mut ring = self.ring.write();
        let position = ring.assign_data(key)?;

        Ok(Placement {
            key_hash: ring.key_hash(key),
            position,
            node_id: Self::node_at(&ring, position)?,
        })
    }

    fn locate_data(&self, key: &str) -> Result<Placement, AppError> {
        let ring = self.ring.read();
        let (position, node_id) = ring.owner_of(key)?;

        Ok(Placement {
            key_hash: ring.key_hash(key),
            position,
            node_id: node_id.to_string(),
        })
    }

    fn distribution(&self) -> Vec<NodeLoad> {
        let ring = self.ring.read();

        ring.node_map()
            .iter()
            .map(|(&position, node_id)| NodeLoad {
                node_id: node_id.clone(),
                position,
                keys: ring.node_set().get(&position).map_or(0, Vec::len),
            })
            .collect()
    }
}
