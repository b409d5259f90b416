//! Weighted graph model shared by the graph algorithms.
//!
//! Node and neighbor order is insertion order. That order is observable: it
//! breaks ties in the shortest-path minimum scan and fixes the order in
//! which neighbors are examined, so two graphs with the same edge set but a
//! different insertion order can produce different traces.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{InputError, Result};

/// Edge weight. Always positive once validated.
pub type Weight = u32;

/// Node label, e.g. `"A"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for NodeId {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An edge between two labelled nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, weight: Weight) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Reject zero-weight edges.
    pub fn validate(&self) -> Result<()> {
        if self.weight == 0 {
            return Err(InputError::ZeroWeight {
                from: self.from.clone(),
                to: self.to.clone(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Adjacency-list graph keyed by dense node indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    adjacency: Vec<Vec<(usize, Weight)>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an undirected graph from an edge list.
    pub fn undirected(edges: &[WeightedEdge]) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_undirected_edge(edge.from.clone(), edge.to.clone(), edge.weight);
        }
        graph
    }

    /// Add a node if it is not present yet and return its index.
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> usize {
        let id = id.into();
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.index.insert(id.clone(), idx);
        self.nodes.push(id);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Add or reweight a directed edge.
    ///
    /// Reweighting keeps the edge's original position in the neighbor list.
    pub fn add_edge(&mut self, from: impl Into<NodeId>, to: impl Into<NodeId>, weight: Weight) {
        let from = self.add_node(from);
        let to = self.add_node(to);
        let neighbors = &mut self.adjacency[from];
        match neighbors.iter_mut().find(|(n, _)| *n == to) {
            Some(entry) => entry.1 = weight,
            None => neighbors.push((to, weight)),
        }
    }

    /// Add an edge in both directions.
    pub fn add_undirected_edge(
        &mut self,
        a: impl Into<NodeId>,
        b: impl Into<NodeId>,
        weight: Weight,
    ) {
        let (a, b) = (a.into(), b.into());
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    pub fn index_of(&self, id: &NodeId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Label of the node at `idx`.
    pub fn node(&self, idx: usize) -> &NodeId {
        &self.nodes[idx]
    }

    /// Outgoing edges of the node at `idx`, in insertion order.
    pub fn neighbors(&self, idx: usize) -> &[(usize, Weight)] {
        &self.adjacency[idx]
    }

    /// Weight of the directed edge `from -> to`, if present.
    pub fn weight(&self, from: &NodeId, to: &NodeId) -> Option<Weight> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;
        self.adjacency[from]
            .iter()
            .find(|(n, _)| *n == to)
            .map(|&(_, w)| w)
    }

    /// Every directed adjacency entry as an edge.
    pub fn edges(&self) -> Vec<WeightedEdge> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, neighbors)| {
                neighbors.iter().map(move |&(to, weight)| WeightedEdge {
                    from: self.nodes[from].clone(),
                    to: self.nodes[to].clone(),
                    weight,
                })
            })
            .collect()
    }

    /// Resolve a label into an index, or report it as unknown.
    pub fn require(&self, id: &NodeId) -> Result<usize> {
        self.index_of(id)
            .ok_or_else(|| InputError::UnknownNode(id.clone()))
    }
}

/// Wire form of a graph as supplied by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSpec {
    /// Nodes listed up front fix the node order and allow isolated nodes.
    #[serde(default)]
    pub nodes: Vec<NodeId>,
    pub edges: Vec<WeightedEdge>,
    /// Edges are stored in both directions unless set.
    #[serde(default)]
    pub directed: bool,
}

impl GraphSpec {
    /// Validate the weights and build the graph.
    pub fn build(&self) -> Result<Graph> {
        let mut graph = Graph::new();
        for node in &self.nodes {
            graph.add_node(node.clone());
        }
        for edge in &self.edges {
            edge.validate()?;
            if self.directed {
                graph.add_edge(edge.from.clone(), edge.to.clone(), edge.weight);
            } else {
                graph.add_undirected_edge(edge.from.clone(), edge.to.clone(), edge.weight);
            }
        }
        Ok(graph)
    }
}
