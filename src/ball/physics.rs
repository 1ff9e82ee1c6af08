//! Ball physics systems
//!
//! The ball integrates per fixed tick in the same order the trajectory
//! preview does: position advances first, then gravity accumulates.
//! Keeping the two in lockstep is what makes the preview honest.

use bevy::prelude::*;

use crate::ball::{Ball, Velocity};
use crate::constants::*;
use crate::court::{CourtPos, StaticBody};
use crate::tuning::PhysicsTweaks;

/// Spawn a fresh ball at the spawn point
pub fn spawn_ball(commands: &mut Commands) -> Entity {
    commands
        .spawn((
            Sprite::from_color(BALL_COLOR, Vec2::splat(BALL_RADIUS * 2.0)),
            Transform::from_xyz(0.0, 0.0, Z_BALL),
            Ball,
            CourtPos(BALL_SPAWN),
            Velocity::default(),
        ))
        .id()
}

/// Per-tick integration: `pos += vel; vel.y += gravity`
pub fn integrate_ball(
    tweaks: Res<PhysicsTweaks>,
    mut query: Query<(&mut CourtPos, &mut Velocity), With<Ball>>,
) {
    for (mut pos, mut vel) in &mut query {
        pos.0 += vel.0;
        vel.0.y += tweaks.gravity_per_tick;
    }
}

/// Resolve a circle against a solid rectangle.
///
/// Returns the corrected (position, velocity) on contact, or None when
/// the shapes are separated. The normal component reflects scaled by
/// restitution (seating the ball when the rebound would be negligible),
/// the tangential component is damped by the friction fraction.
pub fn resolve_circle_rect(
    pos: Vec2,
    vel: Vec2,
    radius: f32,
    rect_center: Vec2,
    half: Vec2,
    restitution: f32,
    friction: f32,
) -> Option<(Vec2, Vec2)> {
    let min = rect_center - half;
    let max = rect_center + half;
    let closest = pos.clamp(min, max);
    let delta = pos - closest;
    let dist_sq = delta.length_squared();
    if dist_sq >= radius * radius {
        return None;
    }

    let normal = if dist_sq > f32::EPSILON {
        delta / dist_sq.sqrt()
    } else {
        // Center inside the rectangle: push out along the shallower axis
        let to_center = pos - rect_center;
        let overlap_x = half.x - to_center.x.abs();
        let overlap_y = half.y - to_center.y.abs();
        if overlap_x < overlap_y {
            Vec2::new(to_center.x.signum(), 0.0)
        } else {
            Vec2::new(0.0, to_center.y.signum())
        }
    };

    let depth = radius - dist_sq.sqrt();
    let new_pos = pos + normal * depth;

    let vn = vel.dot(normal);
    if vn >= 0.0 {
        // Already separating; only correct the penetration
        return Some((new_pos, vel));
    }

    let tangential = vel - normal * vn;
    let mut rebound = -vn * restitution;
    if rebound < BALL_REST_SPEED {
        rebound = 0.0;
    }
    let new_vel = tangential * (1.0 - friction) + normal * rebound;

    Some((new_pos, new_vel))
}

/// Bounce the ball off every solid surface it penetrates this tick.
/// Contact restitution is the greater of the ball's and the surface's,
/// so the backboard stays livelier than the rim.
pub fn ball_collisions(
    tweaks: Res<PhysicsTweaks>,
    mut balls: Query<(&mut CourtPos, &mut Velocity), With<Ball>>,
    statics: Query<(&CourtPos, &StaticBody), Without<Ball>>,
) {
    for (mut pos, mut vel) in &mut balls {
        for (body_pos, body) in &statics {
            let restitution = body.restitution.max(tweaks.ball_restitution);
            if let Some((p, v)) = resolve_circle_rect(
                pos.0,
                vel.0,
                BALL_RADIUS,
                body_pos.0,
                body.half,
                restitution,
                tweaks.ball_friction,
            ) {
                pos.0 = p;
                vel.0 = v;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUND_HALF: Vec2 = Vec2::new(500.0, 50.0);

    #[test]
    fn test_separated_ball_is_untouched() {
        let result = resolve_circle_rect(
            Vec2::new(100.0, 600.0),
            Vec2::new(0.0, 5.0),
            BALL_RADIUS,
            GROUND_CENTER,
            GROUND_HALF,
            BALL_RESTITUTION,
            BALL_FRICTION,
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_ground_bounce_reflects_with_restitution() {
        // Ball sunk 5px into the ground top, falling at 10 px/tick
        let pos = Vec2::new(100.0, GROUND_CENTER.y - GROUND_HALF.y - BALL_RADIUS + 5.0);
        let vel = Vec2::new(3.0, 10.0);
        let (new_pos, new_vel) = resolve_circle_rect(
            pos,
            vel,
            BALL_RADIUS,
            GROUND_CENTER,
            GROUND_HALF,
            BALL_RESTITUTION,
            BALL_FRICTION,
        )
        .expect("penetrating contact");

        // Pushed back to rest exactly on the surface
        assert!((new_pos.y - (GROUND_CENTER.y - GROUND_HALF.y - BALL_RADIUS)).abs() < 1e-3);
        // Normal is up (-y in court space): rebound at 70% of impact speed
        assert!((new_vel.y - (-10.0 * BALL_RESTITUTION)).abs() < 1e-3);
        // Tangential damped by friction
        assert!((new_vel.x - 3.0 * (1.0 - BALL_FRICTION)).abs() < 1e-3);
    }

    #[test]
    fn test_tiny_rebound_seats_the_ball() {
        let pos = Vec2::new(100.0, GROUND_CENTER.y - GROUND_HALF.y - BALL_RADIUS + 0.5);
        let vel = Vec2::new(0.0, 1.0);
        let (_, new_vel) = resolve_circle_rect(
            pos,
            vel,
            BALL_RADIUS,
            GROUND_CENTER,
            GROUND_HALF,
            BALL_RESTITUTION,
            BALL_FRICTION,
        )
        .expect("penetrating contact");

        // 0.7 px/tick rebound is below the rest threshold
        assert_eq!(new_vel.y, 0.0);
    }

    #[test]
    fn test_side_hit_reflects_horizontally() {
        // Ball flying right into the left face of the backboard
        let board = Vec2::new(895.0, 330.0);
        let half = BACKBOARD_SIZE / 2.0;
        let pos = Vec2::new(board.x - half.x - BALL_RADIUS + 2.0, 330.0);
        let vel = Vec2::new(12.0, 0.0);
        let (_, new_vel) = resolve_circle_rect(
            pos,
            vel,
            BALL_RADIUS,
            board,
            half,
            BACKBOARD_RESTITUTION,
            BALL_FRICTION,
        )
        .expect("penetrating contact");

        assert!(new_vel.x < 0.0);
        assert!((new_vel.x - (-12.0 * BACKBOARD_RESTITUTION)).abs() < 1e-3);
    }
}
