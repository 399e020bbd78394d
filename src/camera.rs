use crate::game::session::GameSession;
use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, follow_session_camera);
    }
}

/// Vertical field of view, in degrees
const FOV_DEGREES: f32 = 70.0;

#[derive(Component)]
pub struct MainCamera;

/// Eye on the Y rail, `distance` out along +Z, looking at the origin
///
/// ```text
///        Y (up on screen)
///        ↑
///        |
///   -----+---→ X
///       /
///      ↙ Z (towards the viewer)
/// ```
///
/// Level geometry is authored with z as elevation towards the camera.
pub fn camera_transform(camera_y: f32, distance: f32) -> Transform {
    Transform::from_xyz(0.0, camera_y, distance).looking_at(Vec3::ZERO, Vec3::Y)
}

fn setup_camera(mut commands: Commands, session: Res<GameSession>) {
    let projection = Projection::Perspective(PerspectiveProjection {
        fov: FOV_DEGREES.to_radians(),
        near: 0.1,
        far: 1000.0,
        ..default()
    });
    commands.spawn((
        Camera3d::default(),
        projection,
        camera_transform(session.camera_y(), session.config().camera_distance),
        MainCamera,
    ));
}

/// Track the session's camera rail (moves only during level transitions)
fn follow_session_camera(
    session: Res<GameSession>,
    mut cameras: Query<&mut Transform, With<MainCamera>>,
) {
    if !session.is_changed() {
        return;
    }

    let target = camera_transform(session.camera_y(), session.config().camera_distance);
    for mut transform in &mut cameras {
        if *transform != target {
            *transform = target;
        }
    }
}
