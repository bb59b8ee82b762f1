use std::{
    collections::{BTreeMap, HashMap, HashSet},
    hash::{BuildHasher, Hash},
};

use tracing::{debug, trace};

use crate::{
    config::RingConfig,
    error::RingError,
    hasher::StableHasher,
    placement,
    types::{KeyHash, Lookup, NodeChange, Position, RingResult, Segment, SpacingMode},
};

/// Construction input held until `build` runs.
#[derive(Debug, Clone)]
struct Pending {
    nodes: Vec<String>,
    /// Raw item hashes, reduced modulo the space size at build time.
    data: Vec<u64>,
}

/// Consistent-hashing ring with one position per node.
///
/// `positions` is the sorted lookup sequence; `node_map` and `node_set`
/// always share its key set.
#[derive(Debug, Clone)]
pub struct Ring<S = StableHasher> {
    config: RingConfig,
    hasher: S,
    pending: Option<Pending>,
    positions: Vec<Position>,
    node_map: BTreeMap<Position, String>,
    node_set: BTreeMap<Position, Vec<KeyHash>>,
    by_name: HashMap<String, Position>,
}

impl Ring<StableHasher> {
    /// Creates an unbuilt ring hashing with the default `StableHasher`.
    pub fn new<N, D>(
        nodes: impl IntoIterator<Item = N>,
        data: impl IntoIterator<Item = D>,
        config: RingConfig,
    ) -> Self
    where
        N: Into<String>,
        D: Hash,
    {
        Self::with_hasher(nodes, data, config, StableHasher::default())
    }
}

impl<S: BuildHasher> Ring<S> {
    /// Creates an unbuilt ring. Data items are hashed right away, only their
    /// hashes are kept.
    pub fn with_hasher<N, D>(
        nodes: impl IntoIterator<Item = N>,
        data: impl IntoIterator<Item = D>,
        config: RingConfig,
        hasher: S,
    ) -> Self
    where
        N: Into<String>,
        D: Hash,
    {
        let nodes = nodes.into_iter().map(Into::into).collect();
        let data = data.into_iter().map(|item| hasher.hash_one(&item)).collect();

        Self {
            config,
            hasher,
            pending: Some(Pending { nodes, data }),
            positions: Vec::new(),
            node_map: BTreeMap::new(),
            node_set: BTreeMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Places the initial nodes and assigns the initial data in input order.
    ///
    /// Fails without touching the ring, so a rejected build can't leave half
    /// the nodes registered.
    pub fn build(&mut self) -> RingResult<()> {
        let pending = self.pending.as_ref().ok_or(RingError::AlreadyBuilt)?;
        let placed = self.place(pending)?;

        let Some(pending) = self.pending.take() else {
            return Err(RingError::AlreadyBuilt);
        };

        for (name, position) in pending.nodes.into_iter().zip(placed) {
            self.node_map.insert(position, name.clone());
            self.node_set.insert(position, Vec::new());
            self.by_name.insert(name, position);
            self.positions.push(position);
        }
        self.positions.sort_unstable();

        debug!(
            nodes = self.positions.len(),
            space_size = self.config.space_size,
            spacing = ?self.config.spacing,
            "ring built"
        );

        for raw in pending.data {
            self.place_key(raw % self.config.space_size)?;
        }

        Ok(())
    }

    fn place(&self, pending: &Pending) -> RingResult<Vec<Position>> {
        self.config.validate()?;

        if pending.nodes.is_empty() {
            return Err(RingError::EmptyRing);
        }

        let mut seen = HashSet::with_capacity(pending.nodes.len());
        if let Some(dup) = pending.nodes.iter().find(|n| !seen.insert(n.as_str())) {
            return Err(RingError::NodeExists(dup.clone()));
        }

        match self.config.spacing {
            SpacingMode::Random => placement::random(
                pending.nodes.iter().map(|n| self.hash_position(n)),
                self.config.space_size,
            ),
            SpacingMode::Equidistant => {
                placement::equidistant(pending.nodes.len(), self.config.space_size)
            }
        }
    }

    /// Assigns an item to its successor node and returns that node's position.
    pub fn assign_data<D: Hash + ?Sized>(&mut self, item: &D) -> RingResult<Position> {
        self.ensure_built()?;
        let key = self.hash_position(item);
        self.place_key(key)
    }

    fn place_key(&mut self, key: KeyHash) -> RingResult<Position> {
        let index = self.locate(key, Lookup::Successor)?;
        let position = self.positions[index];
        self.node_set.entry(position).or_default().push(key);

        trace!(key, position, "key assigned");
        Ok(position)
    }

    /// Adds a node at `hash(name) mod space_size`.
    ///
    /// The successor hands over every key `<= position`. Only the upper
    /// bound is checked: a node placed past the last position takes the
    /// first node's low keys as well. An occupied position is rejected
    /// rather than moved.
    pub fn add_node(&mut self, name: impl Into<String>) -> RingResult<NodeChange> {
        self.ensure_built()?;

        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(RingError::NodeExists(name));
        }

        let position = self.hash_position(&name);
        if let Some(owner) = self.node_map.get(&position) {
            return Err(RingError::PositionTaken {
                position,
                owner: owner.clone(),
            });
        }

        let successor = self.positions[self.locate(position, Lookup::Successor)?];
        let moved = match self.node_set.get_mut(&successor) {
            Some(keys) => {
                let (moved, kept): (Vec<_>, Vec<_>) =
                    std::mem::take(keys).into_iter().partition(|&k| k <= position);
                *keys = kept;
                moved
            }
            None => Vec::new(),
        };
        let keys_moved = moved.len();

        let index = self.positions.partition_point(|&p| p < position);
        self.positions.insert(index, position);
        self.node_map.insert(position, name.clone());
        self.node_set.insert(position, moved);
        self.by_name.insert(name.clone(), position);

        debug!(node = %name, position, successor, keys_moved, "node added");

        Ok(NodeChange {
            node: name,
            position,
            neighbour: successor,
            keys_moved,
        })
    }

    /// Removes a node, handing all its keys to the next node clockwise.
    ///
    /// Returns `Ok(None)` and leaves the ring untouched when the name is not
    /// on the ring.
    pub fn remove_node(&mut self, name: &str) -> RingResult<Option<NodeChange>> {
        self.ensure_built()?;

        let Some(&position) = self.by_name.get(name) else {
            return Ok(None);
        };

        if self.positions.len() == 1 {
            return Err(RingError::LastNode(name.to_string()));
        }

        let index = self.locate(position, Lookup::Successor)?;
        let successor = self.positions[(index + 1) % self.positions.len()];

        let keys = self.node_set.remove(&position).unwrap_or_default();
        let keys_moved = keys.len();
        self.node_set.entry(successor).or_default().extend(keys);

        self.node_map.remove(&position);
        self.by_name.remove(name);
        self.positions.remove(index);

        debug!(node = %name, position, successor, keys_moved, "node removed");

        Ok(Some(NodeChange {
            node: name.to_string(),
            position,
            neighbour: successor,
            keys_moved,
        }))
    }

    /// Index into `positions` of the node responsible for `hash`.
    pub fn locate(&self, hash: KeyHash, lookup: Lookup) -> RingResult<usize> {
        let Some(&last) = self.positions.last() else {
            return Err(RingError::EmptyRing);
        };

        if hash > last {
            return Ok(match lookup {
                Lookup::Successor => 0,
                Lookup::Predecessor => self.positions.len() - 1,
            });
        }

        Ok(match self.positions.binary_search(&hash) {
            Ok(index) => index,
            Err(insert_at) => match lookup {
                Lookup::Successor => insert_at,
                Lookup::Predecessor => insert_at
                    .checked_sub(1)
                    .unwrap_or(self.positions.len() - 1),
            },
        })
    }

    /// Name and position of the node that would own `item`. Nothing is stored.
    pub fn owner_of<D: Hash + ?Sized>(&self, item: &D) -> RingResult<(Position, &str)> {
        self.ensure_built()?;
        let index = self.locate(self.hash_position(item), Lookup::Successor)?;
        let position = self.positions[index];
        let name = self
            .node_map
            .get(&position)
            .map(String::as_str)
            .ok_or(RingError::EmptyRing)?;

        Ok((position, name))
    }

    /// Arc of the hash space a node currently answers for.
    pub fn segment_of(&self, name: &str) -> Option<Segment> {
        let &end = self.by_name.get(name)?;
        let start = match end.checked_sub(1) {
            Some(before) => self.positions[self.locate(before, Lookup::Predecessor).ok()?],
            None => *self.positions.last()?,
        };

        Some(Segment { start, end })
    }

    /// Ring-reduced hash of an item, as stored in the owned-key sets.
    #[inline]
    pub fn key_hash<D: Hash + ?Sized>(&self, item: &D) -> KeyHash {
        self.hash_position(item)
    }

    #[inline]
    fn hash_position<D: Hash + ?Sized>(&self, value: &D) -> u64 {
        // config is only validated by build
        self.hasher.hash_one(value) % self.config.space_size.max(1)
    }

    #[inline]
    fn ensure_built(&self) -> RingResult<()> {
        if self.pending.is_some() {
            return Err(RingError::NotBuilt);
        }
        Ok(())
    }

    pub fn node_map(&self) -> &BTreeMap<Position, String> {
        &self.node_map
    }

    pub fn node_set(&self) -> &BTreeMap<Position, Vec<KeyHash>> {
        &self.node_set
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn position_of(&self, name: &str) -> Option<Position> {
        self.by_name.get(name).copied()
    }

    pub fn keys_of(&self, name: &str) -> Option<&[KeyHash]> {
        let position = self.by_name.get(name)?;
        self.node_set.get(position).map(Vec::as_slice)
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Total number of assigned keys across all nodes.
    pub fn key_count(&self) -> usize {
        self.node_set.values().map(Vec::len).sum()
    }

    pub fn is_built(&self) -> bool {
        self.pending.is_none()
    }

    pub fn space_size(&self) -> u64 {
        self.config.space_size
    }

    pub fn spacing(&self) -> SpacingMode {
        self.config.spacing
    }
}
