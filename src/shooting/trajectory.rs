//! Closed-form flight preview
//!
//! Mirrors the live ball integration exactly - same order (position
//! before gravity), same per-tick units - so the dotted preview is the
//! path the ball will actually fly.

use bevy::prelude::*;

/// Finite iterator over predicted flight points in court space.
/// Pure value type: restartable by calling [`predict`] again.
#[derive(Debug, Clone)]
pub struct Trajectory {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    gravity: f32,
    remaining: u32,
}

impl Iterator for Trajectory {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.x += self.vx;
        self.y += self.vy;
        self.vy += self.gravity;
        Some(Vec2::new(self.x, self.y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Trajectory {}

/// Predict the flight path from a launch origin.
/// Angle in degrees, y-down convention: 315 aims up-right.
pub fn predict(origin: Vec2, angle_deg: f32, power: f32, gravity_per_tick: f32, steps: u32) -> Trajectory {
    let theta = angle_deg.to_radians();
    Trajectory {
        x: origin.x,
        y: origin.y,
        vx: theta.cos() * power,
        vy: theta.sin() * power,
        gravity: gravity_per_tick,
        remaining: steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BALL_SPAWN, GRAVITY_PER_TICK, LAUNCH_POWER};

    fn assert_close(a: Vec2, b: Vec2) {
        assert!((a.x - b.x).abs() < 1e-2, "x: {} vs {}", a.x, b.x);
        assert!((a.y - b.y).abs() < 1e-2, "y: {} vs {}", a.y, b.y);
    }

    #[test]
    fn test_up_right_launch_exact_sequence() {
        // 315 degrees = 45 up-right in the y-down convention
        let points: Vec<Vec2> =
            predict(BALL_SPAWN, 315.0, LAUNCH_POWER, GRAVITY_PER_TICK, 3).collect();

        let v = 18.0 * std::f32::consts::FRAC_1_SQRT_2; // 12.727922
        assert_close(points[0], Vec2::new(100.0 + v, 600.0 - v));
        assert_close(points[1], Vec2::new(100.0 + 2.0 * v, 600.0 - v - (v - 0.8)));
        assert_close(
            points[2],
            Vec2::new(100.0 + 3.0 * v, 600.0 - v - (v - 0.8) - (v - 1.6)),
        );
    }

    #[test]
    fn test_position_advances_before_gravity() {
        // The first emitted point must use the undisturbed launch
        // velocity; gravity only shows up from the second step on.
        let mut path = predict(Vec2::ZERO, 0.0, 10.0, 0.8, 2);
        let first = path.next().unwrap();
        assert_close(first, Vec2::new(10.0, 0.0));
        let second = path.next().unwrap();
        assert_close(second, Vec2::new(20.0, 0.8));
    }

    #[test]
    fn test_prediction_is_pure() {
        let a: Vec<Vec2> = predict(BALL_SPAWN, 45.0, 18.0, 0.8, 30).collect();
        let b: Vec<Vec2> = predict(BALL_SPAWN, 45.0, 18.0, 0.8, 30).collect();
        assert_eq!(a.len(), 30);
        assert_eq!(a, b);
    }

    #[test]
    fn test_step_count_is_exact() {
        let path = predict(BALL_SPAWN, 315.0, 18.0, 0.8, 30);
        assert_eq!(path.len(), 30);
        assert_eq!(path.count(), 30);
    }
}
