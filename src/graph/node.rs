use super::palette::Color;
use bevy::math::Vec3;
use std::fmt;

/// Node identifier, dense and 0-based within one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl NodeId {
    pub const fn new(id: usize) -> Self {
        NodeId(id)
    }

    pub const fn index(&self) -> usize {
        self.0
    }
}

/// A graph vertex: fixed position, mutable color
///
/// `color` is `None` while the node is uncolored.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub position: Vec3,
    pub color: Option<Color>,
}

impl Node {
    pub fn new(id: NodeId, position: Vec3) -> Self {
        Node {
            id,
            position,
            color: None,
        }
    }

    pub fn is_colored(&self) -> bool {
        self.color.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_starts_uncolored() {
        let node = Node::new(NodeId(3), Vec3::new(-1.0, 1.0, 0.0));

        assert_eq!(node.id.index(), 3);
        assert!(!node.is_colored());
        assert_eq!(node.color, None);
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId::new(4).to_string(), "4");
        assert!(NodeId(0) < NodeId(1));
    }
}
