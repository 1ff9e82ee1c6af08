//! Input module - PlayerInput resource and capture_input system

use bevy::prelude::*;

/// Buffered input state, captured in Update and consumed by the
/// fixed-tick systems. Presses accumulate until consumed so nothing is
/// lost between frames.
#[derive(Resource, Default)]
pub struct PlayerInput {
    /// Held aim direction: +1 raises the angle, -1 lowers it, 0 idle
    pub rotate: f32,
    /// Space pressed - launch on the next fixed tick
    pub launch_pressed: bool,
    /// T pressed - flip the trajectory preview
    pub preview_toggled: bool,
}

/// Runs in Update to capture keyboard state before the fixed tick
pub fn capture_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    let mut rotate = 0.0;
    if keyboard.pressed(KeyCode::ArrowUp) || keyboard.pressed(KeyCode::ArrowRight) {
        rotate += 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowDown) || keyboard.pressed(KeyCode::ArrowLeft) {
        rotate -= 1.0;
    }
    input.rotate = rotate;

    if keyboard.just_pressed(KeyCode::Space) {
        input.launch_pressed = true;
    }
    if keyboard.just_pressed(KeyCode::KeyT) {
        input.preview_toggled = true;
    }
}
