//! Court components: court-space positions, static geometry, and the
//! basket compound

pub mod kinematics;

use bevy::prelude::*;

use crate::constants::*;
use crate::tuning::PhysicsTweaks;
use kinematics::BasketRig;

/// Position in court space: origin at the top-left corner of the court,
/// y grows downward, units are pixels. Authoritative for the
/// simulation; mapped to the render transform once per frame by
/// [`sync_render_transforms`]. Nothing else writes `Transform`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CourtPos(pub Vec2);

/// Solid rectangle the ball bounces off
#[derive(Component)]
pub struct StaticBody {
    pub half: Vec2,
    pub restitution: f32,
}

/// Overlap-only scoring plate; reports contact, exerts no force
#[derive(Component)]
pub struct SensorPlate {
    pub half: Vec2,
}

/// Which derived body of the basket compound an entity is.
/// All four positions are recomputed from the [`BasketRig`] every tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasketPart {
    RimLeft,
    RimRight,
    Sensor,
    Backboard,
}

/// True when a circle overlaps an axis-aligned rectangle
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect_center: Vec2, half: Vec2) -> bool {
    let closest = center.clamp(rect_center - half, rect_center + half);
    center.distance_squared(closest) < radius * radius
}

/// Spawn the basket compound and the ground.
///
/// The ground is invisible (no sprite); it only exists so missed shots
/// settle at the bottom of the court until the shot clock cleans up.
pub fn spawn_court(commands: &mut Commands, rig: &BasketRig, tweaks: &PhysicsTweaks) {
    // Left rim post
    commands.spawn((
        Sprite::from_color(RIM_COLOR, RIM_POST_SIZE),
        Transform::from_xyz(0.0, 0.0, Z_COURT),
        CourtPos(rig.part_pos(BasketPart::RimLeft)),
        StaticBody {
            half: RIM_POST_SIZE / 2.0,
            restitution: 0.0,
        },
        BasketPart::RimLeft,
    ));

    // Right rim post
    commands.spawn((
        Sprite::from_color(RIM_COLOR, RIM_POST_SIZE),
        Transform::from_xyz(0.0, 0.0, Z_COURT),
        CourtPos(rig.part_pos(BasketPart::RimRight)),
        StaticBody {
            half: RIM_POST_SIZE / 2.0,
            restitution: 0.0,
        },
        BasketPart::RimRight,
    ));

    // Scoring plate between the posts - no StaticBody, overlap only
    commands.spawn((
        Sprite::from_color(SENSOR_COLOR, SENSOR_SIZE),
        Transform::from_xyz(0.0, 0.0, Z_COURT),
        CourtPos(rig.part_pos(BasketPart::Sensor)),
        SensorPlate {
            half: SENSOR_SIZE / 2.0,
        },
        BasketPart::Sensor,
    ));

    // Backboard
    commands.spawn((
        Sprite::from_color(BACKBOARD_COLOR, BACKBOARD_SIZE),
        Transform::from_xyz(0.0, 0.0, Z_COURT),
        CourtPos(rig.part_pos(BasketPart::Backboard)),
        StaticBody {
            half: BACKBOARD_SIZE / 2.0,
            restitution: tweaks.backboard_restitution,
        },
        BasketPart::Backboard,
    ));

    // Ground
    commands.spawn((
        Transform::from_xyz(0.0, 0.0, Z_COURT),
        CourtPos(GROUND_CENTER),
        StaticBody {
            half: GROUND_SIZE / 2.0,
            restitution: 0.0,
        },
    ));
}

/// Map court space to the render world: court origin is the top-left of
/// the court, Bevy's world origin is the center of the screen with y up.
pub fn sync_render_transforms(mut query: Query<(&CourtPos, &mut Transform)>) {
    for (pos, mut transform) in &mut query {
        transform.translation.x = pos.0.x - COURT_WIDTH / 2.0;
        transform.translation.y = COURT_HEIGHT / 2.0 - pos.0.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_rect_overlap() {
        let half = Vec2::new(45.0, 2.5);
        let rect = Vec2::new(850.0, 355.0);

        // Ball centered on the plate
        assert!(circle_rect_overlap(rect, 20.0, rect, half));
        // Ball hovering just above the overlap band
        assert!(!circle_rect_overlap(
            Vec2::new(850.0, 355.0 - 2.5 - 20.0 - 1.0),
            20.0,
            rect,
            half
        ));
        // Ball grazing the end of the plate from the side
        assert!(circle_rect_overlap(
            Vec2::new(850.0 + 45.0 + 15.0, 355.0),
            20.0,
            rect,
            half
        ));
    }
}
