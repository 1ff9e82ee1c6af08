//! Shot lifecycle state machine
//!
//! Owns the single live shot: aiming, launch, the scoring decision at
//! the sensor plate, out-of-bounds misses, and the two clocks (shot
//! timeout, post-score reset delay). Exactly one of Idle / InFlight /
//! Resolving holds at any instant; sensor contact outside InFlight
//! never scores.
//!
//! Each clock carries the [`ShotId`] it was armed for and is discarded
//! silently if that shot is no longer the live one when it fires.

use bevy::prelude::*;
use std::time::Duration;
use uuid::Uuid;

use crate::ball::{Ball, Velocity, spawn_ball};
use crate::constants::*;
use crate::court::kinematics::BasketRig;
use crate::court::{BasketPart, CourtPos, SensorPlate, circle_rect_overlap};
use crate::events::{EventBus, GameEvent, MissReason};
use crate::input::PlayerInput;
use crate::scoring::ScoreBoard;
use crate::tuning::PhysicsTweaks;
use crate::ui::{BurstKind, ScoreFlash, spawn_burst};

/// Identity token for one launch attempt
pub type ShotId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShotPhase {
    /// No live shot; aiming allowed
    #[default]
    Idle,
    /// Shot airborne; aiming locked, clocks armed
    InFlight,
    /// Scored, waiting out the reset delay; contacts ignored
    Resolving,
}

/// The one launch attempt currently airborne
pub struct ActiveShot {
    pub id: ShotId,
    pub angle: f32,
    timeout: Timer,
}

struct PendingReset {
    shot: ShotId,
    delay: Timer,
}

/// A lifecycle clock expiring this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockFired {
    /// Shot clock ran out while the shot was still live
    Timeout(ShotId),
    /// Post-score delay elapsed; the ball may be reset now
    ResetDue(ShotId),
}

/// State machine resource. Transition methods return what happened so
/// the thin systems below can apply the ECS side effects.
#[derive(Resource)]
pub struct ShotLifecycle {
    phase: ShotPhase,
    launch_angle: f32,
    shot: Option<ActiveShot>,
    pending_reset: Option<PendingReset>,
    sensor_touching: bool,
}

impl Default for ShotLifecycle {
    fn default() -> Self {
        Self::new(START_ANGLE)
    }
}

impl ShotLifecycle {
    pub fn new(launch_angle: f32) -> Self {
        Self {
            phase: ShotPhase::Idle,
            launch_angle: launch_angle.rem_euclid(360.0),
            shot: None,
            pending_reset: None,
            sensor_touching: false,
        }
    }

    pub fn phase(&self) -> ShotPhase {
        self.phase
    }

    /// Aim direction in degrees, [0, 360)
    pub fn launch_angle(&self) -> f32 {
        self.launch_angle
    }

    pub fn active_shot(&self) -> Option<&ActiveShot> {
        self.shot.as_ref()
    }

    /// Adjust the aim; wraps modulo 360. Silent no-op unless Idle.
    pub fn rotate(&mut self, delta: f32) {
        if self.phase != ShotPhase::Idle {
            return;
        }
        self.launch_angle = (self.launch_angle + delta).rem_euclid(360.0);
    }

    /// Idle -> InFlight. Returns the shot id and launch velocity, or
    /// None while a shot is already live (launch is a silent no-op).
    pub fn try_launch(&mut self, power: f32, timeout: Duration) -> Option<(ShotId, Vec2)> {
        if self.phase != ShotPhase::Idle {
            return None;
        }
        debug_assert!(self.shot.is_none() && self.pending_reset.is_none());

        let id = Uuid::new_v4();
        let theta = self.launch_angle.to_radians();
        let velocity = Vec2::new(theta.cos(), theta.sin()) * power;
        self.shot = Some(ActiveShot {
            id,
            angle: self.launch_angle,
            timeout: Timer::new(timeout, TimerMode::Once),
        });
        self.phase = ShotPhase::InFlight;
        Some((id, velocity))
    }

    /// Feed this tick's sensor overlap sample. Scores on contact start
    /// while InFlight with the ball descending; releasing the shot
    /// drops its timeout clock and arms the reset delay. Contacts in
    /// any other phase, sustained contact, and ascending passes are
    /// all ignored.
    pub fn on_sensor_sample(
        &mut self,
        touching: bool,
        descending: bool,
        reset_delay: Duration,
    ) -> Option<ShotId> {
        let contact_start = touching && !self.sensor_touching;
        self.sensor_touching = touching;

        if !contact_start || !descending || self.phase != ShotPhase::InFlight {
            return None;
        }
        let shot = self.shot.take()?;
        self.pending_reset = Some(PendingReset {
            shot: shot.id,
            delay: Timer::new(reset_delay, TimerMode::Once),
        });
        self.phase = ShotPhase::Resolving;
        Some(shot.id)
    }

    /// Ball left the court. InFlight only; the caller resets the ball
    /// immediately and the machine returns to Idle.
    pub fn on_out_of_bounds(&mut self) -> Option<ShotId> {
        if self.phase != ShotPhase::InFlight {
            return None;
        }
        let shot = self.shot.take()?;
        self.sensor_touching = false;
        self.phase = ShotPhase::Idle;
        Some(shot.id)
    }

    /// Advance the owned clocks. A clock whose shot is no longer
    /// current fires as a silent no-op (stale-fire guard).
    pub fn tick_clocks(&mut self, dt: Duration) -> Vec<ClockFired> {
        let mut fired = Vec::new();

        let mut timeout_of: Option<ShotId> = None;
        if let Some(shot) = self.shot.as_mut() {
            shot.timeout.tick(dt);
            if shot.timeout.just_finished() {
                timeout_of = Some(shot.id);
            }
        }
        if let Some(id) = timeout_of {
            // Only the clock of the still-live shot may resolve it
            if self.phase == ShotPhase::InFlight
                && self.shot.as_ref().is_some_and(|s| s.id == id)
            {
                self.shot = None;
                self.sensor_touching = false;
                self.phase = ShotPhase::Idle;
                fired.push(ClockFired::Timeout(id));
            }
        }

        let mut reset_of: Option<ShotId> = None;
        if let Some(pending) = self.pending_reset.as_mut() {
            pending.delay.tick(dt);
            if pending.delay.just_finished() {
                reset_of = Some(pending.shot);
            }
        }
        if let Some(id) = reset_of {
            let live = self.phase == ShotPhase::Resolving
                && self.pending_reset.as_ref().is_some_and(|p| p.shot == id);
            self.pending_reset = None;
            if live {
                self.sensor_touching = false;
                self.phase = ShotPhase::Idle;
                fired.push(ClockFired::ResetDue(id));
            }
        }

        fired
    }
}

// ============================================================================
// Systems
// ============================================================================

/// Apply aim input and launch when requested.
/// Aiming and launching are both silent no-ops unless Idle.
pub fn apply_aim_and_launch(
    mut commands: Commands,
    mut input: ResMut<PlayerInput>,
    mut lifecycle: ResMut<ShotLifecycle>,
    mut scoreboard: ResMut<ScoreBoard>,
    mut bus: ResMut<EventBus>,
    tweaks: Res<PhysicsTweaks>,
    mut balls: Query<(&CourtPos, &mut Velocity), With<Ball>>,
) {
    if input.rotate != 0.0 {
        lifecycle.rotate(input.rotate * tweaks.angle_step);
    }

    if !input.launch_pressed {
        return;
    }
    input.launch_pressed = false;

    let Ok((pos, mut velocity)) = balls.single_mut() else {
        return;
    };
    let timeout = Duration::from_millis(tweaks.shot_timeout_ms);
    let Some((_, launch_velocity)) = lifecycle.try_launch(tweaks.launch_power, timeout) else {
        return;
    };

    velocity.0 = launch_velocity;
    scoreboard.record_launch();

    let on_fire = scoreboard.on_fire();
    if on_fire {
        spawn_burst(&mut commands, pos.0, BurstKind::Fire);
    }
    bus.emit(GameEvent::Launch {
        angle: lifecycle.launch_angle(),
        power: tweaks.launch_power,
        shots_taken: scoreboard.shots_taken(),
        on_fire,
    });
    info!(
        "shot {} launched at {:.0}°",
        scoreboard.shots_taken(),
        lifecycle.launch_angle()
    );
}

/// Sample sensor overlap and apply a score when the machine accepts it
pub fn check_scoring(
    mut commands: Commands,
    mut lifecycle: ResMut<ShotLifecycle>,
    mut scoreboard: ResMut<ScoreBoard>,
    mut bus: ResMut<EventBus>,
    tweaks: Res<PhysicsTweaks>,
    rig: Res<BasketRig>,
    balls: Query<(&CourtPos, &Velocity), With<Ball>>,
    sensors: Query<(&CourtPos, &SensorPlate), Without<Ball>>,
    backboards: Query<(Entity, &BasketPart)>,
) {
    let Ok((ball_pos, ball_velocity)) = balls.single() else {
        return;
    };
    let Ok((plate_pos, plate)) = sensors.single() else {
        return;
    };

    let touching = circle_rect_overlap(ball_pos.0, BALL_RADIUS, plate_pos.0, plate.half);
    let descending = ball_velocity.0.y > 0.0;
    let delay = Duration::from_millis(tweaks.reset_delay_ms);

    if lifecycle.on_sensor_sample(touching, descending, delay).is_none() {
        return;
    }

    scoreboard.record_score();
    bus.emit(GameEvent::Score {
        score: scoreboard.score(),
        streak: scoreboard.streak(),
        best_score: scoreboard.best_score(),
        basket_y: rig.center_y,
    });
    spawn_burst(&mut commands, rig.center(), BurstKind::Success);
    for (entity, part) in &backboards {
        if *part == BasketPart::Backboard {
            commands.entity(entity).insert(ScoreFlash::new(BACKBOARD_COLOR));
        }
    }
    info!(
        "score! {} (streak {}, best {})",
        scoreboard.score(),
        scoreboard.streak(),
        scoreboard.best_score()
    );
}

/// Rule a flying ball that left the court a miss and reset it
pub fn check_out_of_bounds(
    mut commands: Commands,
    mut lifecycle: ResMut<ShotLifecycle>,
    mut scoreboard: ResMut<ScoreBoard>,
    mut bus: ResMut<EventBus>,
    balls: Query<(Entity, &CourtPos), With<Ball>>,
) {
    let Ok((entity, pos)) = balls.single() else {
        return;
    };
    let gone = pos.0.x > COURT_WIDTH + OFFSCREEN_MARGIN
        || pos.0.x < -OFFSCREEN_MARGIN
        || pos.0.y > COURT_HEIGHT + OFFSCREEN_MARGIN;
    if !gone {
        return;
    }

    if lifecycle.on_out_of_bounds().is_none() {
        return;
    }

    scoreboard.record_miss();
    bus.emit(GameEvent::Miss {
        reason: MissReason::OutOfBounds,
        shots_taken: scoreboard.shots_taken(),
    });
    let puff_at = pos.0.clamp(Vec2::ZERO, Vec2::new(COURT_WIDTH, COURT_HEIGHT));
    spawn_burst(&mut commands, puff_at, BurstKind::Miss);

    commands.entity(entity).despawn();
    spawn_ball(&mut commands);
    bus.emit(GameEvent::BallReset);
    info!("miss: out of bounds");
}

/// Advance the shot clocks: timeouts become misses, elapsed reset
/// delays swap in a fresh ball.
pub fn tick_shot_clocks(
    mut commands: Commands,
    mut lifecycle: ResMut<ShotLifecycle>,
    mut scoreboard: ResMut<ScoreBoard>,
    mut bus: ResMut<EventBus>,
    balls: Query<Entity, With<Ball>>,
) {
    for fired in lifecycle.tick_clocks(TICK) {
        match fired {
            ClockFired::Timeout(_) => {
                scoreboard.record_miss();
                bus.emit(GameEvent::Miss {
                    reason: MissReason::Timeout,
                    shots_taken: scoreboard.shots_taken(),
                });
                for entity in &balls {
                    commands.entity(entity).despawn();
                }
                spawn_ball(&mut commands);
                bus.emit(GameEvent::BallReset);
                info!("miss: shot clock expired");
            }
            ClockFired::ResetDue(_) => {
                for entity in &balls {
                    commands.entity(entity).despawn();
                }
                spawn_ball(&mut commands);
                bus.emit(GameEvent::BallReset);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_millis(5000);
    const DELAY: Duration = Duration::from_millis(800);

    fn launched() -> (ShotLifecycle, ShotId) {
        let mut lc = ShotLifecycle::default();
        let (id, _) = lc.try_launch(LAUNCH_POWER, TIMEOUT).unwrap();
        (lc, id)
    }

    #[test]
    fn test_launch_velocity_decomposition() {
        let mut lc = ShotLifecycle::new(315.0);
        let (_, velocity) = lc.try_launch(18.0, TIMEOUT).unwrap();
        let v = 18.0 * std::f32::consts::FRAC_1_SQRT_2;
        assert!((velocity.x - v).abs() < 1e-3);
        assert!((velocity.y + v).abs() < 1e-3); // negative y = upward
        assert_eq!(lc.phase(), ShotPhase::InFlight);
    }

    #[test]
    fn test_second_launch_is_a_no_op() {
        let (mut lc, first) = launched();
        assert!(lc.try_launch(LAUNCH_POWER, TIMEOUT).is_none());
        assert_eq!(lc.phase(), ShotPhase::InFlight);
        assert_eq!(lc.active_shot().unwrap().id, first);
    }

    #[test]
    fn test_rotate_wraps_and_locks_in_flight() {
        let mut lc = ShotLifecycle::new(358.0);
        lc.rotate(4.0);
        assert_eq!(lc.launch_angle(), 2.0);
        lc.rotate(-10.0);
        assert_eq!(lc.launch_angle(), 352.0);

        lc.try_launch(LAUNCH_POWER, TIMEOUT).unwrap();
        lc.rotate(10.0);
        assert_eq!(lc.launch_angle(), 352.0);
    }

    #[test]
    fn test_sensor_contact_while_idle_is_ignored() {
        let mut lc = ShotLifecycle::default();
        assert!(lc.on_sensor_sample(true, true, DELAY).is_none());
        assert_eq!(lc.phase(), ShotPhase::Idle);
    }

    #[test]
    fn test_ascending_pass_does_not_score() {
        let (mut lc, _) = launched();
        assert!(lc.on_sensor_sample(true, false, DELAY).is_none());
        assert_eq!(lc.phase(), ShotPhase::InFlight);
    }

    #[test]
    fn test_descending_contact_start_scores_once() {
        let (mut lc, id) = launched();
        assert_eq!(lc.on_sensor_sample(true, true, DELAY), Some(id));
        assert_eq!(lc.phase(), ShotPhase::Resolving);

        // Sustained contact while resolving must not score again
        assert!(lc.on_sensor_sample(true, true, DELAY).is_none());
        assert!(lc.on_sensor_sample(false, true, DELAY).is_none());
        assert!(lc.on_sensor_sample(true, true, DELAY).is_none());
    }

    #[test]
    fn test_timeout_rules_a_miss() {
        let (mut lc, id) = launched();
        assert!(lc.tick_clocks(Duration::from_millis(4999)).is_empty());
        let fired = lc.tick_clocks(Duration::from_millis(2));
        assert_eq!(fired, vec![ClockFired::Timeout(id)]);
        assert_eq!(lc.phase(), ShotPhase::Idle);
        assert!(lc.active_shot().is_none());
    }

    #[test]
    fn test_timeout_after_score_is_stale() {
        // Timeout armed at t=0, score arrives at t=4000: the timeout
        // clock is released with the shot and never fires.
        let (mut lc, id) = launched();
        assert!(lc.tick_clocks(Duration::from_millis(4000)).is_empty());
        assert_eq!(lc.on_sensor_sample(true, true, DELAY), Some(id));

        // Past the original 5000ms mark: only the reset delay fires
        let fired = lc.tick_clocks(Duration::from_millis(1500));
        assert_eq!(fired, vec![ClockFired::ResetDue(id)]);
        assert_eq!(lc.phase(), ShotPhase::Idle);
    }

    #[test]
    fn test_reset_delay_timing() {
        let (mut lc, id) = launched();
        lc.on_sensor_sample(true, true, DELAY).unwrap();

        assert!(lc.tick_clocks(Duration::from_millis(799)).is_empty());
        assert_eq!(lc.phase(), ShotPhase::Resolving);
        assert_eq!(
            lc.tick_clocks(Duration::from_millis(1)),
            vec![ClockFired::ResetDue(id)]
        );
        assert_eq!(lc.phase(), ShotPhase::Idle);

        // Relaunching is possible again, with a fresh id
        let (next, _) = lc.try_launch(LAUNCH_POWER, TIMEOUT).unwrap();
        assert_ne!(next, id);
    }

    #[test]
    fn test_out_of_bounds_only_in_flight() {
        let mut lc = ShotLifecycle::default();
        assert!(lc.on_out_of_bounds().is_none());

        let (id, _) = lc.try_launch(LAUNCH_POWER, TIMEOUT).unwrap();
        assert_eq!(lc.on_out_of_bounds(), Some(id));
        assert_eq!(lc.phase(), ShotPhase::Idle);
        // Resolved: a second report changes nothing
        assert!(lc.on_out_of_bounds().is_none());
    }
}
