//! Level/score overlay and the victory screen.

use bevy::prelude::*;

use crate::{
    game::session::GameSession,
    visual::palette::{HUD_TEXT, VICTORY_GOLD},
};

const VICTORY_TITLE: &str = "3D Color Graph Game";

#[derive(Component)]
pub struct HudText;

#[derive(Component)]
pub struct VictoryText;

pub fn hud_line(session: &GameSession) -> String {
    format!(
        "Level: {}\nScore: {}",
        session.current_level_index() + 1,
        session.score()
    )
}

pub fn victory_line(session: &GameSession) -> String {
    format!("{}\nFinal Score: {}", VICTORY_TITLE, session.score())
}

pub fn spawn_hud(mut commands: Commands, session: Res<GameSession>) {
    commands.spawn((
        Text::new(hud_line(&session)),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(HUD_TEXT),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        HudText,
    ));

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            Visibility::Hidden,
            VictoryText,
        ))
        .with_child((
            Text::new(victory_line(&session)),
            TextFont {
                font_size: 42.0,
                ..default()
            },
            TextColor(VICTORY_GOLD),
            TextLayout::new_with_justify(Justify::Center),
        ));
}

/// System: refresh text and toggle the victory screen when the session changes
pub fn update_hud(
    session: Res<GameSession>,
    mut hud: Query<&mut Text, With<HudText>>,
    mut victory: Query<(&mut Visibility, &Children), With<VictoryText>>,
    mut victory_text: Query<&mut Text, Without<HudText>>,
) {
    if !session.is_changed() {
        return;
    }

    let completed = session.is_completed();
    for mut text in &mut hud {
        let line = hud_line(&session);
        if text.0 != line {
            text.0 = line;
        }
    }

    for (mut visibility, children) in &mut victory {
        *visibility = if completed {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        if !completed {
            continue;
        }
        for child in children.iter() {
            if let Ok(mut text) = victory_text.get_mut(child) {
                text.0 = victory_line(&session);
            }
        }
    }
}
