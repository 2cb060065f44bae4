use bevy::prelude::*;

use super::geometry::{CameraPose, TileOrientation};

/// The rendering side of the placement session: camera tracking and the
/// entities that visualize tiles and corners.
pub trait Scene {
    /// Identifies a created tile
    type Handle;

    /// Current viewer pose, if tracking is available
    fn camera_pose(&self) -> Option<CameraPose>;

    fn create_tile(&mut self, center: Vec3, orientation: TileOrientation) -> Self::Handle;

    /// Visual marker for a corner, labelled with its 1-based number and
    /// spawned hidden unless `visible`
    fn create_corner_marker(&mut self, center: Vec3, label: usize, visible: bool);

    /// Remove every tile and corner marker
    fn clear_all(&mut self);

    fn set_markers_visible(&mut self, visible: bool);
}
