use bevy::prelude::*;
use bevy::window::WindowResolution;

use color_graph::camera::CameraPlugin;
use color_graph::input::InputPlugin;
use color_graph::visual::plugin::GamePlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "3D Color Graph Game".into(),
            resolution: WindowResolution::new(600, 600),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(GamePlugin)
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin);

    app.run();
}
