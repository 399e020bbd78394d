use crate::game::{config::GameConfig, session::GameSession};
use crate::visual::controls::{advance_session, handle_game_commands};
use crate::visual::hud::{spawn_hud, update_hud};
use crate::visual::picking::handle_pointer_input;
use crate::visual::scene::draw_graph;
use bevy::prelude::*;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        // Session must exist before any Startup system (camera, HUD) reads it
        let config = load_config();
        app.insert_resource(ClearColor(Color::BLACK))
            .insert_resource(GameSession::new(config))
            .add_systems(Startup, spawn_hud)
            .add_systems(
                Update,
                (
                    // Input
                    handle_pointer_input,
                    handle_game_commands,
                    // Animation
                    advance_session,
                    // Drawing
                    draw_graph,
                    update_hud,
                )
                    .chain(),
            );
    }
}

fn load_config() -> GameConfig {
    match GameConfig::load() {
        Ok(config) => {
            info!("✓ Game config loaded:");
            info!("  - transition: {}s", config.transition_duration);
            info!("  - frame delta: {}s", config.frame_delta);
            info!(
                "  - camera rail: {} -> {}",
                config.camera_start_y, config.camera_end_y
            );
            config
        }
        Err(e) => {
            error!("Failed to load game config: {}", e);
            panic!("Cannot continue without game config");
        }
    }
}
