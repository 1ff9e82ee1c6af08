//! Basket rig kinematics - vertical oscillation and derived body positions
//!
//! The rig's center is the single source of truth for the basket
//! compound; rim posts, scoring plate, and backboard are all recomputed
//! from it every tick.

use bevy::prelude::*;

use crate::constants::*;
use crate::court::{BasketPart, CourtPos};

/// Authoritative state of the moving basket
#[derive(Resource, Debug, Clone)]
pub struct BasketRig {
    pub center_x: f32,
    pub center_y: f32,
    /// +1 moving down the court, -1 moving up
    direction: f32,
    pub speed: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Default for BasketRig {
    fn default() -> Self {
        Self {
            center_x: BASKET_X,
            center_y: COURT_HEIGHT / 2.0,
            direction: 1.0,
            speed: BASKET_SPEED,
            y_min: BASKET_MIN_Y,
            y_max: BASKET_MAX_Y,
        }
    }
}

impl BasketRig {
    pub fn with_speed(speed: f32) -> Self {
        Self {
            speed,
            ..Self::default()
        }
    }

    /// Advance the center by one step, flipping direction on a bound
    /// crossing. Simple reflection: the center may overshoot a bound by
    /// at most one step's distance before turning around.
    pub fn advance(&mut self) {
        self.center_y += self.speed * self.direction;
        if self.center_y > self.y_max || self.center_y < self.y_min {
            self.direction = -self.direction;
        }
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x, self.center_y)
    }

    /// Derived position of a basket body, offset from the center
    pub fn part_pos(&self, part: BasketPart) -> Vec2 {
        let center = self.center();
        match part {
            BasketPart::RimLeft => center - Vec2::new(RIM_POST_OFFSET_X, 0.0),
            BasketPart::RimRight => center + Vec2::new(RIM_POST_OFFSET_X, 0.0),
            BasketPart::Sensor => center + Vec2::new(0.0, SENSOR_OFFSET_Y),
            BasketPart::Backboard => center + BACKBOARD_OFFSET,
        }
    }
}

/// Per-tick basket update: move the center, then push the derived
/// positions into every basket body. No basket body is ever positioned
/// outside this system.
pub fn advance_basket(
    mut rig: ResMut<BasketRig>,
    mut parts: Query<(&BasketPart, &mut CourtPos)>,
) {
    rig.advance();
    for (part, mut pos) in &mut parts {
        pos.0 = rig.part_pos(*part);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_stays_within_one_step_of_bounds() {
        let mut rig = BasketRig::default();
        for _ in 0..10_000 {
            rig.advance();
            assert!(rig.center_y >= rig.y_min - rig.speed);
            assert!(rig.center_y <= rig.y_max + rig.speed);
        }
    }

    #[test]
    fn test_direction_flips_exactly_on_bound_crossing() {
        let mut rig = BasketRig::default();
        rig.center_y = rig.y_max - 1.0;
        assert_eq!(rig.direction(), 1.0);

        // 599 -> 601: crosses the bound, flips
        rig.advance();
        assert_eq!(rig.center_y, rig.y_max + 1.0);
        assert_eq!(rig.direction(), -1.0);

        // Heads back down without flipping again
        rig.advance();
        assert_eq!(rig.center_y, rig.y_max - 1.0);
        assert_eq!(rig.direction(), -1.0);
    }

    #[test]
    fn test_derived_positions_track_the_center() {
        let mut rig = BasketRig::default();
        rig.advance();
        let center = rig.center();

        assert_eq!(
            rig.part_pos(BasketPart::RimLeft),
            center - Vec2::new(RIM_POST_OFFSET_X, 0.0)
        );
        assert_eq!(
            rig.part_pos(BasketPart::RimRight),
            center + Vec2::new(RIM_POST_OFFSET_X, 0.0)
        );
        assert_eq!(
            rig.part_pos(BasketPart::Sensor),
            center + Vec2::new(0.0, SENSOR_OFFSET_Y)
        );
        assert_eq!(rig.part_pos(BasketPart::Backboard), center + BACKBOARD_OFFSET);
    }
}
