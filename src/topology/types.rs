//! Topology type definitions.
//!
//! This file contains the node and category types plus the `Network`
//! container passed from the generator to the vault writer.

use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Node category, deciding which vault subfolder a node's note lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// The single gateway node at the top of the topology
    Router,
    /// Intermediate connector hardware (switches, hubs, extenders)
    Connector,
    /// End-user devices at the network edge
    Device,
}

impl Category {
    /// Output subfolder for this category under the vault's `Network` directory
    pub const fn subdir(&self) -> &'static str {
        match self {
            Category::Router => "Router",
            Category::Connector => "Connectors",
            Category::Device => "Devices",
        }
    }
}

/// A single named entity in the generated topology.
///
/// Names carry a per-category sequential index ("Switch 3", "Laptop 12"),
/// so they are unique across the whole network. Nodes are immutable once
/// generated.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique display name, also used as the note's file stem
    pub name: String,
    /// Hardware subtype label, e.g. "Laptop" or "Hub"
    pub node_type: &'static str,
    pub category: Category,
}

/// Symmetric adjacency relation between node names.
///
/// Ordered collections keep peer iteration lexicographically sorted and
/// registry output deterministic.
pub type Adjacency = BTreeMap<String, BTreeSet<String>>;

/// A generated topology: the node list plus the adjacency relation.
///
/// Built once by the generator, consumed read-only by the writer, and
/// discarded at the end of the run.
#[derive(Debug, Clone)]
pub struct Network {
    pub nodes: Vec<Node>,
    pub adjacency: Adjacency,
}

impl Network {
    /// Create a network over `nodes` with an empty peer set per node
    pub fn new(nodes: Vec<Node>) -> Self {
        let adjacency = nodes
            .iter()
            .map(|node| (node.name.clone(), BTreeSet::new()))
            .collect();
        Network { nodes, adjacency }
    }

    /// Record a symmetric edge between two nodes.
    ///
    /// Re-adding an existing edge is a no-op thanks to the set semantics
    /// of the adjacency map.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        debug_assert_ne!(a, b, "edges must connect two distinct nodes");
        self.adjacency
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string());
        self.adjacency
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string());
    }

    /// Sorted peer names of `name`; empty if the node has no edges
    pub fn peers_of(&self, name: &str) -> Vec<&str> {
        self.adjacency
            .get(name)
            .map(|peers| peers.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Validate structural invariants of the topology.
    ///
    /// Checks that exactly one router exists, that every adjacency entry
    /// refers to a known node, that the relation is symmetric with no
    /// self-loops, and that no non-router node is isolated.
    pub fn validate(&self) -> Result<(), TopologyError> {
        let router_count = self
            .nodes
            .iter()
            .filter(|node| node.category == Category::Router)
            .count();
        if router_count != 1 {
            return Err(TopologyError::RouterCount(router_count));
        }

        let known: BTreeSet<&str> = self.nodes.iter().map(|node| node.name.as_str()).collect();
        for (name, peers) in &self.adjacency {
            if !known.contains(name.as_str()) {
                return Err(TopologyError::UnknownNode(name.clone()));
            }
            for peer in peers {
                if !known.contains(peer.as_str()) {
                    return Err(TopologyError::UnknownNode(peer.clone()));
                }
                if peer == name {
                    return Err(TopologyError::SelfLoop(name.clone()));
                }
                let has_reverse = self
                    .adjacency
                    .get(peer)
                    .map_or(false, |reverse| reverse.contains(name));
                if !has_reverse {
                    return Err(TopologyError::AsymmetricEdge(name.clone(), peer.clone()));
                }
            }
        }

        for node in &self.nodes {
            if node.category != Category::Router && self.peers_of(&node.name).is_empty() {
                return Err(TopologyError::IsolatedNode(node.name.clone()));
            }
        }

        Ok(())
    }
}

/// Structural problems in a generated topology
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("Expected exactly one router node, found {0}")]
    RouterCount(usize),
    #[error("Adjacency refers to unknown node '{0}'")]
    UnknownNode(String),
    #[error("Edge '{0}' -> '{1}' has no reverse edge")]
    AsymmetricEdge(String, String),
    #[error("Node '{0}' is connected to itself")]
    SelfLoop(String),
    #[error("Non-router node '{0}' has no connections")]
    IsolatedNode(String),
}
