//! Headless App Builder
//!
//! Reusable builder for headless Bevy apps running the real game
//! systems without a window. Used by the simulate binary and the
//! integration tests, which drive the fixed schedule tick by tick for
//! determinism.

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use std::time::Duration;

use crate::ball::{ball_collisions, integrate_ball, spawn_ball};
use crate::constants::*;
use crate::court::kinematics::{BasketRig, advance_basket};
use crate::court::spawn_court;
use crate::events::EventBus;
use crate::input::PlayerInput;
use crate::scoring::ScoreBoard;
use crate::shooting::{
    ShotLifecycle, apply_aim_and_launch, check_out_of_bounds, check_scoring, tick_shot_clocks,
};
use crate::tuning::PhysicsTweaks;

/// Builder for creating headless game apps
pub struct HeadlessAppBuilder {
    fps: f32,
    minimal_threads: bool,
}

impl Default for HeadlessAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessAppBuilder {
    pub fn new() -> Self {
        Self {
            fps: TICK_HZ,
            minimal_threads: false,
        }
    }

    /// Set the schedule runner rate (default: the fixed tick rate)
    pub fn with_fps(mut self, fps: f32) -> Self {
        self.fps = fps;
        self
    }

    /// Reduce Bevy's internal thread pools to one thread per app.
    /// Needed when running many apps side by side to stay under OS
    /// thread limits.
    pub fn with_minimal_threads(mut self) -> Self {
        self.minimal_threads = true;
        self
    }

    /// Build the app with minimal plugins, the game resources, and the
    /// full fixed-tick system chain. The first `app.update()` runs the
    /// Startup spawn; after that, callers step
    /// `world_mut().run_schedule(FixedUpdate)` directly.
    pub fn build(self) -> App {
        let mut app = App::new();

        let runner =
            ScheduleRunnerPlugin::run_loop(Duration::from_secs_f32(1.0 / self.fps));
        if self.minimal_threads {
            app.add_plugins(MinimalPlugins.set(runner).set(TaskPoolPlugin {
                task_pool_options: TaskPoolOptions::with_num_threads(1),
            }));
        } else {
            app.add_plugins(MinimalPlugins.set(runner));
        }
        app.add_plugins(bevy::transform::TransformPlugin);

        app.insert_resource(Time::<Fixed>::from_hz(TICK_HZ as f64));
        app.init_resource::<ScoreBoard>();
        app.init_resource::<ShotLifecycle>();
        app.init_resource::<PlayerInput>();
        app.init_resource::<PhysicsTweaks>();
        app.insert_resource(BasketRig::default());
        app.insert_resource(EventBus::new());

        app.add_systems(
            Startup,
            |mut commands: Commands, rig: Res<BasketRig>, tweaks: Res<PhysicsTweaks>| {
                spawn_court(&mut commands, &rig, &tweaks);
                spawn_ball(&mut commands);
            },
        );

        app.add_systems(
            FixedUpdate,
            (
                advance_basket,
                apply_aim_and_launch,
                integrate_ball,
                ball_collisions,
                check_scoring,
                check_out_of_bounds,
                tick_shot_clocks,
            )
                .chain(),
        );

        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::Ball;

    #[test]
    fn test_builder_creates_app() {
        let mut app = HeadlessAppBuilder::new().build();
        app.update();
        assert!(app.world().contains_resource::<ScoreBoard>());
        assert!(app.world().contains_resource::<ShotLifecycle>());

        let balls = app
            .world_mut()
            .query_filtered::<(), With<Ball>>()
            .iter(app.world())
            .count();
        assert_eq!(balls, 1);
    }

    #[test]
    fn test_minimal_threads_creates_app() {
        let mut app = HeadlessAppBuilder::new().with_minimal_threads().build();
        app.update();
        assert!(app.world().contains_resource::<ScoreBoard>());
    }
}
