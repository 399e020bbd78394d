use super::edge::{Edge, EdgeSet};
use super::node::{Node, NodeId};
use super::palette::Color;
use bevy::math::Vec3;
use std::collections::BTreeSet;

/// Nodes and adjacency constraints for one level, plus the player's coloring
///
/// Nodes live in a dense arena: a node's id is its index. Topology and positions are
/// fixed once the level is built; only colors change during play.
#[derive(Debug, Clone, Default)]
pub struct ColorGraph {
    nodes: Vec<Node>,
    edges: EdgeSet,
}

impl ColorGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node; its id is the next index
    pub fn add_node(&mut self, position: Vec3) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id, position));
        id
    }

    /// Add an adjacency constraint between two existing nodes
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Edge {
        self.assert_node(a);
        self.assert_node(b);
        let edge = Edge::new(a, b);
        self.edges.add(edge);
        edge
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> &Node {
        self.assert_node(id);
        &self.nodes[id.index()]
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn color(&self, id: NodeId) -> Option<Color> {
        self.node(id).color
    }

    pub fn position(&self, id: NodeId) -> Vec3 {
        self.node(id).position
    }

    /// Set (or clear, with `None`) a node's color
    ///
    /// No validity checking happens here; see [`super::check_coloring`].
    pub fn color_node(&mut self, id: NodeId, color: Option<Color>) {
        self.assert_node(id);
        self.nodes[id.index()].color = color;
    }

    /// Mark every node uncolored
    pub fn reset_colors(&mut self) {
        for node in &mut self.nodes {
            node.color = None;
        }
    }

    /// Nodes sharing an edge with `id`
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        self.edges
            .iter()
            .filter_map(|edge| edge.other_node(id))
            .collect()
    }

    /// Distinct colors present across all nodes
    pub fn colors_used(&self) -> BTreeSet<Color> {
        self.nodes.iter().filter_map(|node| node.color).collect()
    }

    pub fn uncolored_count(&self) -> usize {
        self.nodes.iter().filter(|node| !node.is_colored()).count()
    }

    /// True when both endpoints are colored with the same color
    pub fn is_conflict(&self, edge: &Edge) -> bool {
        match (self.color(edge.from), self.color(edge.to)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Edges currently violating the coloring rule, in authored order
    pub fn conflicting_edges(&self) -> Vec<Edge> {
        self.edges
            .iter()
            .filter(|edge| self.is_conflict(edge))
            .copied()
            .collect()
    }

    /// Mean node position (origin for an empty graph)
    pub fn centroid(&self) -> Vec3 {
        if self.nodes.is_empty() {
            return Vec3::ZERO;
        }
        let sum: Vec3 = self.nodes.iter().map(|node| node.position).sum();
        sum / self.nodes.len() as f32
    }

    fn assert_node(&self, id: NodeId) {
        assert!(
            self.contains_node(id),
            "Node {} out of range (graph has {} nodes)",
            id,
            self.nodes.len()
        );
    }
}
