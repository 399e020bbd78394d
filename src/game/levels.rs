use crate::graph::{ColorGraph, NodeId};
use bevy::math::Vec3;

/// Number of hand-authored levels
pub const LEVEL_COUNT: usize = 2;

/// Unit-square corners, in cycle order
const SQUARE_CORNERS: [Vec3; 4] = [
    Vec3::new(-1.0, -1.0, 0.0),
    Vec3::new(1.0, -1.0, 0.0),
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(-1.0, 1.0, 0.0),
];

/// The square's corners pulled inward and raised to distinct heights
const WHEEL_RIM: [Vec3; 4] = [
    Vec3::new(-0.8, -0.8, 0.2),
    Vec3::new(0.8, -0.6, 0.4),
    Vec3::new(0.6, 0.8, 0.6),
    Vec3::new(-0.6, 0.6, 0.8),
];

const WHEEL_HUB: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Build level `index`, or `None` past the last level
///
/// Every call returns fresh storage with all nodes uncolored.
pub fn build_level(index: usize) -> Option<ColorGraph> {
    match index {
        0 => Some(square()),
        1 => Some(wheel()),
        _ => None,
    }
}

/// Level 0: the 4-cycle 0-1-2-3-0
fn square() -> ColorGraph {
    cycle(&SQUARE_CORNERS)
}

/// Level 1: the square re-posed in 3D plus a raised hub joined to every rim node (W4)
fn wheel() -> ColorGraph {
    let mut graph = cycle(&WHEEL_RIM);
    let hub = graph.add_node(WHEEL_HUB);
    for rim in 0..WHEEL_RIM.len() {
        graph.add_edge(NodeId(rim), hub);
    }
    graph
}

fn cycle(positions: &[Vec3]) -> ColorGraph {
    let mut graph = ColorGraph::new();
    for &position in positions {
        graph.add_node(position);
    }
    let n = positions.len();
    for i in 0..n {
        graph.add_edge(NodeId(i), NodeId((i + 1) % n));
    }
    graph
}

/// Immutable level templates, indexed by level number
#[derive(Debug, Clone)]
pub struct LevelCatalog {
    levels: Vec<ColorGraph>,
}

impl LevelCatalog {
    /// The fixed two-level sequence
    pub fn standard() -> Self {
        let levels = (0..LEVEL_COUNT).filter_map(build_level).collect();
        LevelCatalog { levels }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn get(&self, index: usize) -> Option<&ColorGraph> {
        self.levels.get(index)
    }

    /// Does `index` have a following level?
    pub fn has_successor(&self, index: usize) -> bool {
        index + 1 < self.levels.len()
    }

    /// Fresh, uncolored working copies of every level
    pub fn working_copies(&self) -> Vec<ColorGraph> {
        self.levels
            .iter()
            .map(|template| {
                let mut copy = template.clone();
                copy.reset_colors();
                copy
            })
            .collect()
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
