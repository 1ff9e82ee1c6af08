//! Trajectory preview - dotted arc of the predicted flight
//!
//! The dots follow the predictor's output from the ball's actual
//! position, so what you see is the path the next shot flies.

use bevy::prelude::*;

use crate::ball::Ball;
use crate::constants::*;
use crate::court::CourtPos;
use crate::input::PlayerInput;
use crate::settings::CurrentSettings;
use crate::shooting::{ShotLifecycle, ShotPhase, predict};
use crate::tuning::PhysicsTweaks;

/// One dot of the preview arc; the index is the step along the path
#[derive(Component)]
pub struct TrajectoryDot(pub usize);

pub fn spawn_preview_dots(commands: &mut Commands) {
    for i in 0..TRAJECTORY_POINTS {
        commands.spawn((
            Sprite::from_color(PREVIEW_COLOR, Vec2::splat(TRAJECTORY_DOT_SIZE)),
            Transform::from_xyz(0.0, 0.0, Z_PREVIEW),
            CourtPos(BALL_SPAWN),
            Visibility::Hidden,
            TrajectoryDot(i),
        ));
    }
}

/// Flip the preview on T and remember the choice
pub fn toggle_preview(mut input: ResMut<PlayerInput>, mut settings: ResMut<CurrentSettings>) {
    if !input.preview_toggled {
        return;
    }
    input.preview_toggled = false;
    settings.settings.show_trajectory = !settings.settings.show_trajectory;
    settings.mark_dirty();
}

/// Reposition the dots along the predicted path each Idle frame;
/// hidden whenever a shot is live or the preview is switched off
pub fn update_preview(
    settings: Res<CurrentSettings>,
    lifecycle: Res<ShotLifecycle>,
    tweaks: Res<PhysicsTweaks>,
    balls: Query<&CourtPos, (With<Ball>, Without<TrajectoryDot>)>,
    mut dots: Query<(&TrajectoryDot, &mut CourtPos, &mut Visibility), Without<Ball>>,
) {
    let show = settings.settings.show_trajectory && lifecycle.phase() == ShotPhase::Idle;
    let origin = balls.single().map(|pos| pos.0);

    let points: Vec<Vec2> = match (show, origin) {
        (true, Ok(origin)) => predict(
            origin,
            lifecycle.launch_angle(),
            tweaks.launch_power,
            tweaks.gravity_per_tick,
            TRAJECTORY_POINTS as u32,
        )
        .collect(),
        _ => Vec::new(),
    };

    for (dot, mut pos, mut visibility) in &mut dots {
        match points.get(dot.0) {
            Some(point) => {
                pos.0 = *point;
                *visibility = Visibility::Visible;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}
