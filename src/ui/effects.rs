//! Particle bursts and the backboard score flash

use bevy::prelude::*;
use rand::Rng;

use crate::constants::*;
use crate::court::CourtPos;

/// What kind of burst to scatter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstKind {
    /// Ring at the basket on a made shot
    Success,
    /// Trail at the ball when launching on a hot streak
    Fire,
    /// Small puff where a ball sailed out
    Miss,
}

/// Short-lived drifting sprite
#[derive(Component)]
pub struct Particle {
    velocity: Vec2,
    lifetime: Timer,
    color: Color,
}

/// Scatter a burst of particles around an origin in court space
pub fn spawn_burst(commands: &mut Commands, origin: Vec2, kind: BurstKind) {
    let (count, color, size) = match kind {
        BurstKind::Success => (PARTICLES_SUCCESS, Color::srgb(1.0, 0.85, 0.0), 8.0),
        BurstKind::Fire => (PARTICLES_FIRE, Color::srgb(1.0, 0.45, 0.1), 10.0),
        BurstKind::Miss => (PARTICLES_MISS, Color::srgb(0.6, 0.6, 0.65), 6.0),
    };

    let mut rng = rand::thread_rng();
    for i in 0..count {
        let angle = std::f32::consts::TAU * i as f32 / count as f32;
        let distance = rng.gen_range(PARTICLE_MIN_DISTANCE..PARTICLE_MAX_DISTANCE);
        let direction = Vec2::new(angle.cos(), angle.sin());

        commands.spawn((
            Sprite::from_color(color, Vec2::splat(size)),
            Transform::from_xyz(0.0, 0.0, Z_PARTICLES),
            CourtPos(origin),
            Particle {
                // Cover the scatter distance over one lifetime
                velocity: direction * distance / PARTICLE_LIFETIME,
                lifetime: Timer::from_seconds(PARTICLE_LIFETIME, TimerMode::Once),
                color,
            },
        ));
    }
}

/// Drift, fade, and expire particles
pub fn update_particles(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut CourtPos, &mut Sprite, &mut Particle)>,
) {
    for (entity, mut pos, mut sprite, mut particle) in &mut query {
        particle.lifetime.tick(time.delta());
        if particle.lifetime.finished() {
            commands.entity(entity).despawn();
            continue;
        }
        pos.0 += particle.velocity * time.delta_secs();
        sprite.color = particle.color.with_alpha(1.0 - particle.lifetime.fraction());
    }
}

/// Flicker animation inserted on the backboard when a shot drops
#[derive(Component)]
pub struct ScoreFlash {
    timer: f32,
    original_color: Color,
}

impl ScoreFlash {
    pub fn new(original_color: Color) -> Self {
        Self {
            timer: 0.6,
            original_color,
        }
    }
}

/// Flicker between white and the original color, then restore
pub fn animate_score_flash(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Sprite, &mut ScoreFlash)>,
) {
    for (entity, mut sprite, mut flash) in &mut query {
        flash.timer -= time.delta_secs();

        if flash.timer <= 0.0 {
            sprite.color = flash.original_color;
            commands.entity(entity).remove::<ScoreFlash>();
        } else {
            // ~4 flickers over 0.6 seconds
            let blend = ((flash.timer * 25.0).sin() + 1.0) / 2.0;
            let orig = flash.original_color.to_srgba();
            sprite.color = Color::srgb(
                orig.red + (1.0 - orig.red) * blend,
                orig.green + (1.0 - orig.green) * blend,
                orig.blue + (1.0 - orig.blue) * blend,
            );
        }
    }
}
