use bevy::prelude::*;

use crate::{
    game::session::{GameSession, SessionResult, TickResult},
    input::GameCommand,
};

/// System: route keyboard commands into the session
pub fn handle_game_commands(
    mut commands: MessageReader<GameCommand>,
    mut session: ResMut<GameSession>,
) {
    for command in commands.read() {
        match *command {
            GameCommand::ApplyColor(color) => match session.apply_color(color) {
                SessionResult::Colored { node, color, issue } => {
                    info!("Node {} colored {} ({})", node, color, issue);
                }
                SessionResult::LevelComplete {
                    level, next_level, ..
                } => {
                    info!(
                        "🎉 Level {} completed! Score: {} - moving to level {}",
                        level + 1,
                        session.score(),
                        next_level + 1
                    );
                }
                SessionResult::GameComplete { final_score, .. } => {
                    info!("🏆 Congratulations! Final Score: {}", final_score);
                }
                SessionResult::Ignored(reason) => {
                    debug!("Color {} ignored: {:?}", color, reason);
                }
                SessionResult::Selected(_) => {}
            },
            GameCommand::Reset => {
                session.reset();
                info!("New game started");
            }
            GameCommand::DumpState => match serde_json::to_string_pretty(&session.snapshot()) {
                Ok(json) => info!("Session state:\n{}", json),
                Err(e) => error!("Failed to serialize session: {}", e),
            },
        }
    }
}

/// System: advance the session by one nominal frame
///
/// Only writes to the session while a transition is running, so change detection
/// stays quiet during normal play.
pub fn advance_session(mut session: ResMut<GameSession>) {
    if !session.is_transitioning() {
        return;
    }

    if let TickResult::LevelStarted(level) = session.tick_frame() {
        info!("Level {} ready", level + 1);
    }
}
