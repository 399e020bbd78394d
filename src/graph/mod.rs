mod color_graph;
mod coloring;
mod edge;
mod node;
mod palette;

pub use color_graph::ColorGraph;
pub use coloring::{ColoringError, check_coloring, is_fully_and_validly_colored};
pub use edge::{Edge, EdgeSet};
pub use node::{Node, NodeId};
pub use palette::{Color, MAX_COLORS};
