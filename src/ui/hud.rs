//! HUD components and systems (scoreboard, angle readout, hints)

use bevy::prelude::*;

use crate::constants::*;
use crate::scoring::ScoreBoard;
use crate::shooting::{ShotLifecycle, ShotPhase};

/// Scoreboard line at the top of the screen
#[derive(Component)]
pub struct ScoreText;

/// Current aim readout
#[derive(Component)]
pub struct AngleText;

/// Shown while the streak is hot
#[derive(Component)]
pub struct FireIndicator;

/// Key hints, visible only while aiming
#[derive(Component)]
pub struct ControlsHint;

/// Spawn all HUD text entities. These live in render space directly;
/// they never move, so they skip the court-space sync.
pub fn spawn_hud(commands: &mut Commands) {
    commands.spawn((
        Text2d::new("Score 0  |  Streak 0  |  Best 0  |  Shots 0"),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextLayout::new_with_justify(Justify::Center),
        TextColor(TEXT_PRIMARY),
        Transform::from_xyz(0.0, COURT_HEIGHT / 2.0 - 30.0, Z_TEXT),
        ScoreText,
    ));

    commands.spawn((
        Text2d::new("Angle 315°"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextLayout::new_with_justify(Justify::Left),
        TextColor(TEXT_ACCENT),
        Transform::from_xyz(-COURT_WIDTH / 2.0 + 90.0, -COURT_HEIGHT / 2.0 + 30.0, Z_TEXT),
        AngleText,
    ));

    commands.spawn((
        Text2d::new("ON FIRE!"),
        TextFont {
            font_size: 22.0,
            ..default()
        },
        TextLayout::new_with_justify(Justify::Center),
        TextColor(Color::srgb(1.0, 0.5, 0.1)),
        Transform::from_xyz(0.0, COURT_HEIGHT / 2.0 - 60.0, Z_TEXT),
        Visibility::Hidden,
        FireIndicator,
    ));

    commands.spawn((
        Text2d::new("Up/Right & Down/Left: aim   Space: shoot   T: preview"),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextLayout::new_with_justify(Justify::Center),
        TextColor(TEXT_SECONDARY),
        Transform::from_xyz(0.0, -COURT_HEIGHT / 2.0 + 14.0, Z_TEXT),
        ControlsHint,
    ));
}

/// Refresh the scoreboard and angle lines
pub fn update_hud_text(
    scoreboard: Res<ScoreBoard>,
    lifecycle: Res<ShotLifecycle>,
    mut score_query: Query<&mut Text2d, (With<ScoreText>, Without<AngleText>)>,
    mut angle_query: Query<&mut Text2d, (With<AngleText>, Without<ScoreText>)>,
) {
    if let Ok(mut text) = score_query.single_mut() {
        text.0 = format!(
            "Score {}  |  Streak {}  |  Best {}  |  Shots {}",
            scoreboard.score(),
            scoreboard.streak(),
            scoreboard.best_score(),
            scoreboard.shots_taken(),
        );
    }
    if let Ok(mut text) = angle_query.single_mut() {
        text.0 = format!("Angle {:.0}°", lifecycle.launch_angle());
    }
}

/// Show the fire banner while the streak is hot, and the controls hint
/// only while aiming
pub fn update_hud_visibility(
    scoreboard: Res<ScoreBoard>,
    lifecycle: Res<ShotLifecycle>,
    mut fire_query: Query<&mut Visibility, (With<FireIndicator>, Without<ControlsHint>)>,
    mut hint_query: Query<&mut Visibility, (With<ControlsHint>, Without<FireIndicator>)>,
) {
    if let Ok(mut visibility) = fire_query.single_mut() {
        *visibility = if scoreboard.on_fire() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
    if let Ok(mut visibility) = hint_query.single_mut() {
        *visibility = if lifecycle.phase() == ShotPhase::Idle {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}
