use bevy::prelude::*;

use crate::{
    camera::MainCamera,
    game::session::{GameSession, SessionResult},
    graph::NodeId,
    input::{PointerEvent, PointerEventType},
};

/// Distance along a normalized ray to its first hit on a sphere, if any
fn ray_sphere_distance(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let near = -b - root;
    let far = -b + root;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        // Ray starts inside the sphere
        Some(far)
    } else {
        None
    }
}

/// The node whose sphere the ray hits first
pub fn pick_node(origin: Vec3, direction: Vec3, positions: &[Vec3], radius: f32) -> Option<NodeId> {
    let direction = direction.normalize_or_zero();
    if direction == Vec3::ZERO {
        return None;
    }

    positions
        .iter()
        .enumerate()
        .filter_map(|(i, &center)| {
            ray_sphere_distance(origin, direction, center, radius).map(|t| (NodeId(i), t))
        })
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(id, _)| id)
}

/// System: select the node under a press; pressing empty space clears the selection
pub fn handle_pointer_input(
    mut pointer_events: MessageReader<PointerEvent>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut session: ResMut<GameSession>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    for event in pointer_events.read() {
        if event.event_type != PointerEventType::Down {
            continue;
        }
        let Some(ray) = event.to_ray(camera, camera_transform) else {
            continue;
        };

        let hit = pick_node(
            ray.origin,
            *ray.direction,
            &session.node_positions(),
            session.config().node_radius,
        );

        match session.select_node(hit) {
            SessionResult::Selected(Some(node)) => info!("Selected node {}", node),
            SessionResult::Selected(None) => debug!("Selection cleared"),
            SessionResult::Ignored(reason) => debug!("Pointer ignored: {:?}", reason),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EYE: Vec3 = Vec3::new(0.0, 0.0, 3.0);

    #[test]
    fn test_hits_node_straight_ahead() {
        let positions = [Vec3::new(1.0, 1.0, 0.0), Vec3::ZERO];

        assert_eq!(pick_node(EYE, Vec3::NEG_Z, &positions, 0.1), Some(NodeId(1)));
    }

    #[test]
    fn test_nearest_hit_wins() {
        // The hub sits in front of a node directly behind it
        let positions = [Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)];

        assert_eq!(pick_node(EYE, Vec3::NEG_Z, &positions, 0.1), Some(NodeId(1)));
    }

    #[test]
    fn test_miss_returns_none() {
        let positions = [Vec3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, 1.0, 0.0)];

        assert_eq!(pick_node(EYE, Vec3::NEG_Z, &positions, 0.1), None);
        assert_eq!(pick_node(EYE, Vec3::ZERO, &positions, 0.1), None);
    }

    #[test]
    fn test_ignores_spheres_behind_the_eye() {
        let positions = [Vec3::new(0.0, 0.0, 5.0)];

        assert_eq!(pick_node(EYE, Vec3::NEG_Z, &positions, 0.1), None);
    }

    #[test]
    fn test_unnormalized_direction() {
        let positions = [Vec3::new(1.0, -1.0, 0.0)];
        let direction = (positions[0] - EYE) * 7.0;

        assert_eq!(pick_node(EYE, direction, &positions, 0.1), Some(NodeId(0)));
    }

    #[test]
    fn test_grazing_ray_hits_within_radius() {
        let origin = Vec3::new(0.09, 0.0, 3.0);

        assert_eq!(pick_node(origin, Vec3::NEG_Z, &[Vec3::ZERO], 0.1), Some(NodeId(0)));
        assert_eq!(
            pick_node(Vec3::new(0.11, 0.0, 3.0), Vec3::NEG_Z, &[Vec3::ZERO], 0.1),
            None
        );
    }
}
