//! Ball-related components

use bevy::prelude::*;

/// Marker for the live ball entity.
/// Exactly one exists; resets despawn it and spawn a fresh one.
#[derive(Component)]
pub struct Ball;

/// Velocity in court space, pixels per fixed tick (y > 0 is descending)
#[derive(Component, Default, Debug, Clone, Copy, PartialEq)]
pub struct Velocity(pub Vec2);
