//! Pointer taps and keyboard shortcuts.

use bevy::input::touch::Touches;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::scene::SceneParams;
use crate::tiling::{PlacementSession, SessionCommand, SessionSet, StatusLine, TapOutcome};

/// Check if the pointer is over egui UI
fn is_pointer_over_ui(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .map(|ctx| ctx.is_pointer_over_area())
        .unwrap_or(false)
}

/// Route a left click or touch to the placement session
pub fn handle_tap(
    mouse_button: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    mut contexts: EguiContexts,
    mut session: ResMut<PlacementSession>,
    mut status: ResMut<StatusLine>,
    mut scene: SceneParams,
) {
    if !mouse_button.just_pressed(MouseButton::Left) && !touches.any_just_pressed() {
        return;
    }

    // Don't place if tapping on UI
    if is_pointer_over_ui(&mut contexts) {
        return;
    }

    match session.handle_tap(&mut scene, &mut *status) {
        Ok(TapOutcome::TilePlaced(entity)) => debug!("Spawned tile {:?}", entity),
        Ok(TapOutcome::CornerAdded { count }) => debug!("Corner {} marked", count),
        Ok(TapOutcome::Ignored) => debug!("Tap ignored, fill pending"),
        Err(e) => warn!("Tap failed: {}", e),
    }
}

/// Command bound to a key press, if any
fn shortcut_command(keyboard: &ButtonInput<KeyCode>) -> Option<SessionCommand> {
    if keyboard.just_pressed(KeyCode::KeyA) {
        Some(SessionCommand::StartAreaPlacement)
    } else if keyboard.just_pressed(KeyCode::KeyO) {
        Some(SessionCommand::ToggleOrientation)
    } else if keyboard.just_pressed(KeyCode::KeyG) {
        Some(SessionCommand::ToggleMarkers)
    } else if keyboard.just_pressed(KeyCode::Delete) {
        Some(SessionCommand::ClearAll)
    } else if keyboard.just_pressed(KeyCode::Escape) {
        Some(SessionCommand::Cancel)
    } else {
        None
    }
}

pub fn handle_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut commands: MessageWriter<SessionCommand>,
    mut contexts: EguiContexts,
) {
    // Don't trigger shortcuts while typing in a text field
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    if let Some(command) = shortcut_command(&keyboard) {
        commands.write(command);
    }
}

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (handle_tap, handle_shortcuts).in_set(SessionSet::Input),
        );
    }
}
