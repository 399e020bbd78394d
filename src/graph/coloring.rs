use super::color_graph::ColorGraph;
use super::edge::Edge;
use super::node::NodeId;
use super::palette::Color;
use std::fmt;

/// Why a coloring is not (yet) a win
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColoringError {
    /// Some node still has no color; the puzzle is incomplete, not failed
    Uncolored(NodeId),
    /// Both ends of an edge share a color
    Conflict { edge: Edge, color: Color },
}

impl fmt::Display for ColoringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColoringError::Uncolored(n) => write!(f, "Node {} is not colored yet", n),
            ColoringError::Conflict { edge, color } => write!(
                f,
                "Nodes {} and {} share color {}",
                edge.from, edge.to, color
            ),
        }
    }
}

/// Check a coloring in two phases, stopping at the first problem
///
/// Every node must be colored before any edge is examined. Edges are then checked in
/// authored order.
pub fn check_coloring(graph: &ColorGraph) -> Result<(), ColoringError> {
    if let Some(node) = graph.nodes().iter().find(|node| !node.is_colored()) {
        return Err(ColoringError::Uncolored(node.id));
    }

    for edge in graph.edges().iter() {
        if let (Some(a), Some(b)) = (graph.color(edge.from), graph.color(edge.to)) {
            if a == b {
                return Err(ColoringError::Conflict {
                    edge: *edge,
                    color: a,
                });
            }
        }
    }

    Ok(())
}

/// True only for a complete, conflict-free coloring
pub fn is_fully_and_validly_colored(graph: &ColorGraph) -> bool {
    check_coloring(graph).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec3;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn path(len: usize) -> ColorGraph {
        let mut graph = ColorGraph::new();
        for i in 0..len {
            graph.add_node(Vec3::new(i as f32, 0.0, 0.0));
        }
        for i in 1..len {
            graph.add_edge(NodeId(i - 1), NodeId(i));
        }
        graph
    }

    /// Random graph over `n` nodes with roughly half of all pairs connected
    fn random_graph(rng: &mut StdRng, n: usize) -> ColorGraph {
        let mut graph = ColorGraph::new();
        for _ in 0..n {
            graph.add_node(Vec3::ZERO);
        }
        for a in 0..n {
            for b in (a + 1)..n {
                if rng.random_bool(0.5) {
                    graph.add_edge(NodeId(a), NodeId(b));
                }
            }
        }
        graph
    }

    #[test]
    fn test_empty_graph_is_trivially_valid() {
        assert!(is_fully_and_validly_colored(&ColorGraph::new()));
    }

    #[test]
    fn test_uncolored_reported_before_conflicts() {
        let mut graph = path(3);
        graph.color_node(NodeId(0), Some(Color::Red));
        graph.color_node(NodeId(1), Some(Color::Red));

        assert_eq!(
            check_coloring(&graph),
            Err(ColoringError::Uncolored(NodeId(2)))
        );
    }

    #[test]
    fn test_conflict_detected() {
        let mut graph = path(3);
        graph.color_node(NodeId(0), Some(Color::Red));
        graph.color_node(NodeId(1), Some(Color::Blue));
        graph.color_node(NodeId(2), Some(Color::Blue));

        assert_eq!(
            check_coloring(&graph),
            Err(ColoringError::Conflict {
                edge: Edge::new(NodeId(1), NodeId(2)),
                color: Color::Blue,
            })
        );
        assert!(!is_fully_and_validly_colored(&graph));
    }

    #[test]
    fn test_alternating_path_is_valid() {
        let mut graph = path(5);
        for i in 0..5 {
            let color = if i % 2 == 0 { Color::Green } else { Color::Magenta };
            graph.color_node(NodeId(i), Some(color));
        }

        assert_eq!(check_coloring(&graph), Ok(()));
    }

    #[test]
    fn test_error_display() {
        let err = ColoringError::Conflict {
            edge: Edge::new(NodeId(3), NodeId(0)),
            color: Color::Yellow,
        };
        assert_eq!(err.to_string(), "Nodes 0 and 3 share color Yellow");
        assert_eq!(
            ColoringError::Uncolored(NodeId(4)).to_string(),
            "Node 4 is not colored yet"
        );
    }

    #[test]
    fn test_any_uncolored_node_fails_regardless_of_edges() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let n = rng.random_range(1..8);
            let mut graph = random_graph(&mut rng, n);
            for i in 0..n {
                let color = Color::from_index(rng.random_range(0..Color::ALL.len()));
                graph.color_node(NodeId(i), color);
            }
            let hole = NodeId(rng.random_range(0..n));
            graph.color_node(hole, None);

            assert!(!is_fully_and_validly_colored(&graph));
        }
    }

    #[test]
    fn test_fully_colored_fails_iff_some_edge_conflicts() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let n = rng.random_range(1..8);
            let mut graph = random_graph(&mut rng, n);
            for i in 0..n {
                // Few colors so conflicts are common
                let color = Color::from_index(rng.random_range(0..3));
                graph.color_node(NodeId(i), color);
            }

            let has_conflict = graph
                .edges()
                .iter()
                .any(|e| graph.color(e.from) == graph.color(e.to));

            assert_eq!(is_fully_and_validly_colored(&graph), !has_conflict);
        }
    }
}
