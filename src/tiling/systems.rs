//! Bevy systems driving the placement session.

use bevy::prelude::*;

use crate::config::{AppConfig, SaveConfigRequest};
use crate::scene::SceneParams;

use super::geometry::TileOrientation;
use super::session::PlacementSession;
use super::status::StatusLine;

/// User-facing commands from the toolbar and keyboard shortcuts
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    StartAreaPlacement,
    /// Leave corner collection without clearing tiles
    Cancel,
    ToggleOrientation,
    /// Show or hide the corner markers ("grid" in the UI)
    ToggleMarkers,
    ClearAll,
}

/// Rebuild the session from the loaded configuration
pub fn configure_session(config: Res<AppConfig>, mut session: ResMut<PlacementSession>) {
    let orientation = TileOrientation::from_vertical(config.data.start_vertical);
    let tile = config.data.tile.spec(orientation);

    info!(
        "Tile size: {:.2} x {:.2} x {:.2} mm",
        tile.width * 1000.0,
        tile.height * 1000.0,
        tile.depth * 1000.0
    );

    *session = PlacementSession::new(tile, config.data.placement.timing())
        .with_markers_visible(config.data.markers_visible);
}

pub fn apply_session_commands(
    mut events: MessageReader<SessionCommand>,
    mut session: ResMut<PlacementSession>,
    mut status: ResMut<StatusLine>,
    mut scene: SceneParams,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for command in events.read() {
        debug!("Session command: {:?}", command);
        match command {
            SessionCommand::StartAreaPlacement => session.start_area_placement(&mut *status),
            SessionCommand::Cancel => session.cancel(&mut *status),
            SessionCommand::ClearAll => session.clear_all(&mut scene, &mut *status),
            SessionCommand::ToggleOrientation => {
                let orientation = session.toggle_orientation(&mut *status);
                config.data.start_vertical = orientation.is_vertical();
                config.dirty = true;
                save_events.write(SaveConfigRequest);
            }
            SessionCommand::ToggleMarkers => {
                config.data.markers_visible = session.toggle_markers(&mut scene, &mut *status);
                config.dirty = true;
                save_events.write(SaveConfigRequest);
            }
        }
    }
}

/// Advance the session clock by the frame time
pub fn advance_session(
    time: Res<Time>,
    mut session: ResMut<PlacementSession>,
    mut status: ResMut<StatusLine>,
    mut scene: SceneParams,
) {
    session.tick(time.delta(), &mut scene, &mut *status);
}
