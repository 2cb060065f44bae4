//! Viewer camera standing in for AR tracking.
//!
//! The camera's `Transform` is the pose source for taps. Arrow keys walk,
//! Q/E or a right-button drag turn.

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::constants::{
    VIEWER_DRAG_SENSITIVITY, VIEWER_EYE_HEIGHT, VIEWER_MOVE_SPEED, VIEWER_TURN_SPEED,
};

#[derive(Component)]
pub struct ViewerCamera;

pub fn spawn_viewer(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        ViewerCamera,
        Transform::from_xyz(0.0, VIEWER_EYE_HEIGHT, 3.0),
    ));
}

/// Horizontal walking direction for the pressed arrow keys, in camera space
fn walk_input(keyboard: &ButtonInput<KeyCode>) -> Vec2 {
    let mut input = Vec2::ZERO;
    if keyboard.pressed(KeyCode::ArrowUp) {
        input.y += 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowDown) {
        input.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowRight) {
        input.x += 1.0;
    }
    if keyboard.pressed(KeyCode::ArrowLeft) {
        input.x -= 1.0;
    }
    input.normalize_or_zero()
}

/// World-space step for a walk input at the given yaw (radians)
fn walk_step(input: Vec2, yaw: f32, distance: f32) -> Vec3 {
    let forward = Vec3::new(-yaw.sin(), 0.0, -yaw.cos());
    let right = Vec3::new(yaw.cos(), 0.0, -yaw.sin());
    (forward * input.y + right * input.x) * distance
}

pub fn viewer_controls(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut camera_query: Query<&mut Transform, With<ViewerCamera>>,
    mut contexts: EguiContexts,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let mut turn_degrees = 0.0;
    if mouse_button.pressed(MouseButton::Right) {
        for event in mouse_motion.read() {
            turn_degrees -= event.delta.x * VIEWER_DRAG_SENSITIVITY;
        }
    } else {
        mouse_motion.clear();
    }

    // Don't walk while typing in a text field
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        transform.rotate_y(turn_degrees.to_radians());
        return;
    }

    let dt = time.delta_secs();
    if keyboard.pressed(KeyCode::KeyQ) {
        turn_degrees += VIEWER_TURN_SPEED * dt;
    }
    if keyboard.pressed(KeyCode::KeyE) {
        turn_degrees -= VIEWER_TURN_SPEED * dt;
    }
    transform.rotate_y(turn_degrees.to_radians());

    let (yaw, _, _) = transform.rotation.to_euler(EulerRot::YXZ);
    transform.translation += walk_step(walk_input(&keyboard), yaw, VIEWER_MOVE_SPEED * dt);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Vec3, expected: Vec3) {
        assert!(
            (actual - expected).length() < 1e-5,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_walk_forward_at_zero_yaw_moves_toward_negative_z() {
        assert_close(walk_step(Vec2::Y, 0.0, 1.0), Vec3::NEG_Z);
    }

    #[test]
    fn test_walk_right_at_zero_yaw_moves_toward_positive_x() {
        assert_close(walk_step(Vec2::X, 0.0, 2.0), Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_walk_forward_matches_tap_direction() {
        // Same heading convention as CameraPose::point_ahead
        let yaw = 90f32.to_radians();
        assert_close(walk_step(Vec2::Y, yaw, 1.0), Vec3::NEG_X);
    }

    #[test]
    fn test_no_keys_no_walk() {
        let keyboard = ButtonInput::<KeyCode>::default();
        assert_eq!(walk_input(&keyboard), Vec2::ZERO);
    }

    #[test]
    fn test_diagonal_walk_is_normalized() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::ArrowUp);
        keyboard.press(KeyCode::ArrowRight);
        assert!((walk_input(&keyboard).length() - 1.0).abs() < 1e-5);
    }
}
