pub mod factory;

pub use factory::NodeFactory;

use crate::generation::constants::{TOWN_COLOR, VILLAGE_COLOR};
use derive_more::{Display, From};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stable node identifier, assigned in placement order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize,
)]
pub struct NodeId(pub u32);

/// Settlement kind. Placement and connection treat both the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeVariant {
    Town,
    Village,
}

impl NodeVariant {
    pub fn color(self) -> [u8; 4] {
        match self {
            NodeVariant::Town => TOWN_COLOR,
            NodeVariant::Village => VILLAGE_COLOR,
        }
    }
}

/// A placed settlement in the generated graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub position: Vec2,
    pub variant: NodeVariant,
    pub max_connections: u32,
    pub connection_range: f32,
    connections: BTreeSet<NodeId>,
}

impl Node {
    pub fn new(
        id: NodeId,
        variant: NodeVariant,
        position: Vec2,
        max_connections: u32,
        connection_range: f32,
    ) -> Self {
        Self {
            id,
            position,
            variant,
            max_connections,
            connection_range,
            connections: BTreeSet::new(),
        }
    }

    pub fn connections(&self) -> &BTreeSet<NodeId> {
        &self.connections
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn is_connected(&self, other: NodeId) -> bool {
        self.connections.contains(&other)
    }

    pub fn is_full(&self) -> bool {
        self.connections.len() >= self.max_connections as usize
    }

    pub fn remaining_capacity(&self) -> usize {
        (self.max_connections as usize).saturating_sub(self.connections.len())
    }

    pub fn distance(&self, other: &Node) -> f32 {
        self.position.distance(other.position)
    }

    /// Record one side of a link. Returns false for self-links, duplicates
    /// and full nodes.
    pub(crate) fn add_connection(&mut self, other: NodeId) -> bool {
        if other == self.id || self.is_full() {
            return false;
        }
        self.connections.insert(other)
    }
}

/// Link two nodes symmetrically. Both sides are checked before either is
/// mutated, so a refused link leaves both nodes untouched.
pub fn link(nodes: &mut [Node], a: usize, b: usize) -> bool {
    if a == b || nodes[a].is_full() || nodes[b].is_full() || nodes[a].is_connected(nodes[b].id) {
        return false;
    }
    let (id_a, id_b) = (nodes[a].id, nodes[b].id);
    nodes[a].add_connection(id_b) && nodes[b].add_connection(id_a)
}
