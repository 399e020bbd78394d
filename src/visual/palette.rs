use crate::graph::Color as NodeColor;
use bevy::prelude::*;

/// Uncolored, unselected nodes
pub const UNCOLORED: Color = Color::WHITE;

/// Uncolored node under selection
pub const SELECTED: Color = Color::srgb(0.3, 0.3, 0.3);

pub const EDGE_NORMAL: Color = Color::WHITE;

/// Edge whose endpoints share a color
pub const EDGE_CONFLICT: Color = Color::srgb(1.0, 0.0, 0.0);

pub const HUD_TEXT: Color = Color::WHITE;

pub const VICTORY_GOLD: Color = Color::srgb(1.0, 0.843, 0.0);

pub fn palette_rgb(color: NodeColor) -> Color {
    match color {
        NodeColor::Red => Color::srgb(1.0, 0.0, 0.0),
        NodeColor::Yellow => Color::srgb(1.0, 1.0, 0.0),
        NodeColor::Green => Color::srgb(0.0, 1.0, 0.0),
        NodeColor::Cyan => Color::srgb(0.0, 1.0, 1.0),
        NodeColor::Blue => Color::srgb(0.0, 0.0, 1.0),
        NodeColor::Magenta => Color::srgb(1.0, 0.0, 1.0),
    }
}

/// A node's own color wins; selection only shows on uncolored nodes
pub fn node_display_color(color: Option<NodeColor>, selected: bool) -> Color {
    match (color, selected) {
        (Some(color), _) => palette_rgb(color),
        (None, true) => SELECTED,
        (None, false) => UNCOLORED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colored_node_ignores_selection() {
        assert_eq!(
            node_display_color(Some(NodeColor::Cyan), true),
            Color::srgb(0.0, 1.0, 1.0)
        );
    }

    #[test]
    fn test_uncolored_states() {
        assert_eq!(node_display_color(None, true), SELECTED);
        assert_eq!(node_display_color(None, false), UNCOLORED);
    }

    #[test]
    fn test_palette_colors_are_distinct() {
        for (i, a) in NodeColor::ALL.iter().enumerate() {
            for b in &NodeColor::ALL[i + 1..] {
                assert_ne!(palette_rgb(*a), palette_rgb(*b));
            }
        }
    }
}
