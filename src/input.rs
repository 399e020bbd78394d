use crate::graph::Color as NodeColor;
use bevy::app::AppExit;
use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::CursorMoved;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorPos>()
            .add_message::<PointerEvent>()
            .add_message::<GameCommand>()
            .add_systems(
                Update,
                (track_cursor_pos, collect_pointer_events, collect_key_commands),
            );
    }
}

#[derive(Message, Debug, Clone)]
pub struct PointerEvent {
    /// Window (logical) coordinates, as reported by the cursor/touch event
    pub position: Vec2,
    pub event_type: PointerEventType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventType {
    Down,
    Up,
}

impl PointerEvent {
    /// World-space ray through the pointer
    pub fn to_ray(&self, camera: &Camera, camera_transform: &GlobalTransform) -> Option<Ray3d> {
        camera.viewport_to_world(camera_transform, self.position).ok()
    }
}

/// Keyboard intent, decoupled from the physical key
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    ApplyColor(NodeColor),
    Reset,
    DumpState,
}

/// R/Y/G/C/B/M pick a color, N starts over, D dumps the session
pub fn command_for_key(key: KeyCode) -> Option<GameCommand> {
    let command = match key {
        KeyCode::KeyR => GameCommand::ApplyColor(NodeColor::Red),
        KeyCode::KeyY => GameCommand::ApplyColor(NodeColor::Yellow),
        KeyCode::KeyG => GameCommand::ApplyColor(NodeColor::Green),
        KeyCode::KeyC => GameCommand::ApplyColor(NodeColor::Cyan),
        KeyCode::KeyB => GameCommand::ApplyColor(NodeColor::Blue),
        KeyCode::KeyM => GameCommand::ApplyColor(NodeColor::Magenta),
        KeyCode::KeyN => GameCommand::Reset,
        KeyCode::KeyD => GameCommand::DumpState,
        _ => return None,
    };
    Some(command)
}

#[derive(Resource, Default, Debug, Clone, Copy)]
struct CursorPos(pub Option<Vec2>);

fn track_cursor_pos(mut ev_cursor: MessageReader<CursorMoved>, mut pos: ResMut<CursorPos>) {
    for e in ev_cursor.read() {
        // last event wins
        pos.0 = Some(e.position);
    }
}

fn collect_pointer_events(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorPos>,
    mut touch_events: MessageReader<TouchInput>,
    mut out: MessageWriter<PointerEvent>,
) {
    if let Some(p) = cursor.0 {
        if mouse_buttons.just_pressed(MouseButton::Left) {
            out.write(PointerEvent {
                position: p,
                event_type: PointerEventType::Down,
            });
        }
        if mouse_buttons.just_released(MouseButton::Left) {
            out.write(PointerEvent {
                position: p,
                event_type: PointerEventType::Up,
            });
        }
    }

    for ev in touch_events.read() {
        let event_type = match ev.phase {
            TouchPhase::Started => PointerEventType::Down,
            TouchPhase::Ended | TouchPhase::Canceled => PointerEventType::Up,
            TouchPhase::Moved => continue,
        };
        out.write(PointerEvent {
            position: ev.position,
            event_type,
        });
    }
}

fn collect_key_commands(
    keys: Res<ButtonInput<KeyCode>>,
    mut out: MessageWriter<GameCommand>,
    mut exit: MessageWriter<AppExit>,
) {
    for &key in keys.get_just_pressed() {
        if matches!(key, KeyCode::KeyQ | KeyCode::Escape) {
            exit.write(AppExit::Success);
            continue;
        }
        if let Some(command) = command_for_key(key) {
            out.write(command);
        }
    }
}
