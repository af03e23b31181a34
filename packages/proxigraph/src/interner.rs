//! Node interner storing the full node record (label + coordinate).

use indexmap::IndexMap;

use crate::core::{NodeId, Position};

/// Node record holds the user-provided key (label) and its coordinate.
#[derive(Clone, Debug)]
pub struct NodeRecord<K> {
    pub key: K,
    pub position: Position,
}

impl<K> NodeRecord<K> {
    pub fn new(key: K, position: Position) -> Self {
        Self { key, position }
    }
}

/// Interner mapping labels to dense `NodeId`s.
///
/// Duplicate keys collapse to the first record: geographic datasets commonly
/// repeat an entity once per observation date, and re-interning the same
/// label must not create a second node. The index is an `IndexMap` so that
/// node iteration follows insertion order deterministically.
#[derive(Clone, Debug)]
pub struct NodeInterner<K>
where
    K: Eq + std::hash::Hash + Clone,
{
    pub records: Vec<NodeRecord<K>>, // NodeId -> NodeRecord
    pub index: IndexMap<K, NodeId>,  // key -> NodeId
}

impl<K> NodeInterner<K>
where
    K: Eq + std::hash::Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            index: IndexMap::new(),
        }
    }

    /// Intern key + position. If the key already exists, returns the existing
    /// NodeId (does not update the position).
    pub fn intern(&mut self, key: K, position: Position) -> NodeId {
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = NodeId(self.records.len());
        self.records.push(NodeRecord::new(key.clone(), position));
        self.index.insert(key, id);
        id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: NodeId) -> &NodeRecord<K> {
        &self.records[id.0]
    }

    pub fn get_id(&self, key: &K) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NodeRecord<K>)> {
        self.records.iter().enumerate().map(|(i, r)| (NodeId(i), r))
    }
}
