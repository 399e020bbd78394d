use bevy::prelude::*;

use crate::{
    game::session::GameSession,
    visual::palette::{EDGE_CONFLICT, EDGE_NORMAL, node_display_color},
};

/// System: draw edges then nodes from the session's render view
///
/// Nothing is drawn once the game is completed; the victory screen takes over.
pub fn draw_graph(session: Res<GameSession>, mut gizmos: Gizmos) {
    if session.is_completed() {
        return;
    }

    let views = session.render_nodes();
    let radius = session.config().node_radius;

    if session.edges_visible() {
        let graph = session.current_graph();
        for edge in graph.edges().iter() {
            let (Some(from), Some(to)) = (views.get(edge.from.index()), views.get(edge.to.index()))
            else {
                continue;
            };
            let color = if graph.is_conflict(edge) {
                EDGE_CONFLICT
            } else {
                EDGE_NORMAL
            };
            gizmos.line(from.position, to.position, color);
        }
    }

    for view in &views {
        gizmos.sphere(
            Isometry3d::from_translation(view.position),
            radius,
            node_display_color(view.color, view.selected),
        );
    }
}
