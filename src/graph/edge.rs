use super::node::NodeId;

use std::collections::HashSet;

/// An adjacency constraint between two nodes
/// Invariant: always stored in canonical form with from < to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    /// Create a new edge, automatically ordering nodes
    ///
    /// Panics on a self-loop: a node can never conflict with itself.
    pub fn new(a: NodeId, b: NodeId) -> Self {
        assert_ne!(a, b, "Edge endpoints must differ (node {})", a);
        if a < b {
            Edge { from: a, to: b }
        } else {
            Edge { from: b, to: a }
        }
    }

    /// Check if this edge contains a given node
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }

    /// Get the other node in the edge
    pub fn other_node(&self, node: NodeId) -> Option<NodeId> {
        if self.from == node {
            Some(self.to)
        } else if self.to == node {
            Some(self.from)
        } else {
            None
        }
    }
}

/// A set of edges with efficient lookup
/// Keeps the authored order so validation reports conflicts deterministically
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    /// Set for O(1) edge existence checks
    edges: HashSet<Edge>,
    /// Edges in the order they were added
    ordered: Vec<Edge>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an edge to the set
    /// Returns true if the edge was newly inserted, false if it already existed
    pub fn add(&mut self, edge: Edge) -> bool {
        if self.edges.insert(edge) {
            self.ordered.push(edge);
            true
        } else {
            false
        }
    }

    /// Check if an edge exists in the set
    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Iterate edges in authored order
    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.ordered.iter()
    }

    /// Count how many edges are incident to a given node
    pub fn degree(&self, node: NodeId) -> usize {
        self.ordered
            .iter()
            .filter(|edge| edge.contains_node(node))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_canonical_form() {
        let e1 = Edge::new(NodeId(3), NodeId(0));
        let e2 = Edge::new(NodeId(0), NodeId(3));

        assert_eq!(e1, e2, "Edges should be equal regardless of order");
        assert_eq!(e1.from, NodeId(0));
        assert_eq!(e1.to, NodeId(3));
    }

    #[test]
    #[should_panic(expected = "Edge endpoints must differ")]
    fn test_self_loop_rejected() {
        Edge::new(NodeId(2), NodeId(2));
    }

    #[test]
    fn test_other_node() {
        let edge = Edge::new(NodeId(1), NodeId(4));

        assert_eq!(edge.other_node(NodeId(1)), Some(NodeId(4)));
        assert_eq!(edge.other_node(NodeId(4)), Some(NodeId(1)));
        assert_eq!(edge.other_node(NodeId(2)), None);
    }

    #[test]
    fn test_edge_set_keeps_authored_order() {
        let mut set = EdgeSet::new();

        let e1 = Edge::new(NodeId(2), NodeId(3));
        let e2 = Edge::new(NodeId(0), NodeId(1));

        assert!(set.add(e1));
        assert!(set.add(e2));
        assert!(!set.add(Edge::new(NodeId(3), NodeId(2))), "Adding duplicate should return false");

        let order: Vec<_> = set.iter().copied().collect();
        assert_eq!(order, vec![e1, e2]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&e2));
    }

    #[test]
    fn test_edge_set_degree() {
        let mut set = EdgeSet::new();

        set.add(Edge::new(NodeId(0), NodeId(4)));
        set.add(Edge::new(NodeId(1), NodeId(4)));
        set.add(Edge::new(NodeId(0), NodeId(1)));

        assert_eq!(set.degree(NodeId(4)), 2);
        assert_eq!(set.degree(NodeId(0)), 2);
        assert_eq!(set.degree(NodeId(3)), 0);
    }
}
