//! Area tiling: everything that decides where tiles go and when.
//!
//! The core types here do not touch the ECS world directly. Rendering and
//! camera tracking are reached through the [`Scene`] trait, and progress is
//! reported through [`StatusSink`]. The [`systems`] module wires the session
//! into Bevy.
//!
//! ## Module Structure
//!
//! - [`geometry`] - Corner set, bounding rectangle, and the tile grid fill
//! - [`session`] - Placement modes and the operations a user can trigger
//! - [`scheduler`] - Virtual clock for the delayed fill and staggered tiles
//! - [`status`] - Status messages and the status line resource
//! - [`collaborator`] - The scene trait implemented by the renderer

pub mod collaborator;
pub mod geometry;
pub mod scheduler;
pub mod session;
pub mod status;
pub mod systems;


pub use collaborator::Scene;
pub use geometry::{CameraPose, TileOrientation, TileSpec};
pub use session::{PlacementMode, PlacementSession, PlacementTiming, TapOutcome};
pub use status::{StatusLine, StatusMessage, StatusSink};
pub use systems::SessionCommand;

use bevy::prelude::*;

use crate::config::ConfigLoaded;

/// Ordering for the per-frame session systems
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SessionSet {
    /// Taps and shortcuts become session calls or commands
    Input,
    /// Commands are applied and the virtual clock advances
    Apply,
}

pub struct TilingPlugin;

impl Plugin for TilingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlacementSession>()
            .init_resource::<StatusLine>()
            .add_message::<SessionCommand>()
            .configure_sets(Update, (SessionSet::Input, SessionSet::Apply).chain())
            .add_systems(Startup, systems::configure_session.after(ConfigLoaded))
            .add_systems(
                Update,
                (
                    systems::apply_session_commands.run_if(on_message::<SessionCommand>),
                    systems::advance_session,
                )
                    .chain()
                    .in_set(SessionSet::Apply),
            );
    }
}
