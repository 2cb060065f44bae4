//! Pure geometry for area fills: corner accumulation, the wall bounding
//! rectangle, and the tile grid that covers it.
//!
//! The wall is approximated as a frontal, axis-aligned rectangle: only the x/y
//! extents of the corners matter, and depth collapses to the mean corner z.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{CORNER_COUNT, TILE_DEPTH, TILE_HEIGHT, TILE_WIDTH};

/// Which of the two rotation presets new tiles are created with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TileOrientation {
    #[default]
    Vertical,
    /// Rotated 90 degrees about the viewer-facing axis
    Horizontal,
}

impl TileOrientation {
    pub fn toggled(self) -> Self {
        match self {
            TileOrientation::Vertical => TileOrientation::Horizontal,
            TileOrientation::Horizontal => TileOrientation::Vertical,
        }
    }

    pub fn is_vertical(self) -> bool {
        self == TileOrientation::Vertical
    }

    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            TileOrientation::Vertical
        } else {
            TileOrientation::Horizontal
        }
    }

    /// Rotation applied to a tile entity
    pub fn rotation(self) -> Quat {
        match self {
            TileOrientation::Vertical => Quat::IDENTITY,
            TileOrientation::Horizontal => Quat::from_rotation_z(FRAC_PI_2),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TileOrientation::Vertical => "Vertical",
            TileOrientation::Horizontal => "Horizontal",
        }
    }
}

/// Shared tile configuration: physical size plus the orientation used for
/// tiles created from now on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSpec {
    /// Thickness, in metres
    pub width: f32,
    /// Vertical extent, in metres
    pub height: f32,
    /// Extent across the wall, in metres
    pub depth: f32,
    pub orientation: TileOrientation,
}

impl Default for TileSpec {
    fn default() -> Self {
        Self {
            width: TILE_WIDTH,
            height: TILE_HEIGHT,
            depth: TILE_DEPTH,
            orientation: TileOrientation::default(),
        }
    }
}

impl TileSpec {
    /// Grid cell size: x step is the depth, y step is the height
    pub fn footprint(&self) -> Vec2 {
        Vec2::new(self.depth, self.height)
    }

    /// Mesh extents with x across the wall, y up and z as thickness
    pub fn extents(&self) -> Vec3 {
        Vec3::new(self.depth, self.height, self.width)
    }
}

/// Position and heading of the viewer at tap time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    /// Rotation about the vertical axis, in degrees
    pub yaw_degrees: f32,
}

impl CameraPose {
    /// Point `distance` units along the horizontal facing direction, shifted
    /// vertically by `vertical_offset`.
    pub fn point_ahead(&self, distance: f32, vertical_offset: f32) -> Vec3 {
        let yaw = self.yaw_degrees.to_radians();
        Vec3::new(
            self.position.x - yaw.sin() * distance,
            self.position.y + vertical_offset,
            self.position.z - yaw.cos() * distance,
        )
    }
}

/// Ordered corner accumulator, capped at four points
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CornerSet {
    corners: Vec<Vec3>,
}

impl CornerSet {
    /// Append a corner and return the new count, or `None` when already full
    pub fn push(&mut self, corner: Vec3) -> Option<usize> {
        if self.is_complete() {
            return None;
        }
        self.corners.push(corner);
        Some(self.corners.len())
    }

    pub fn len(&self) -> usize {
        self.corners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.corners.len() == CORNER_COUNT
    }

    /// Copy of the four corners, available only once the set is complete
    pub fn snapshot(&self) -> Option<[Vec3; CORNER_COUNT]> {
        <[Vec3; CORNER_COUNT]>::try_from(self.corners.as_slice()).ok()
    }

    pub fn clear(&mut self) {
        self.corners.clear();
    }
}

/// Axis-aligned bounding rectangle of the marked corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallRect {
    pub min: Vec2,
    pub max: Vec2,
    /// Mean z of the corners
    pub depth: f32,
}

impl WallRect {
    pub fn from_corners(corners: &[Vec3; CORNER_COUNT]) -> Self {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for corner in corners {
            min = min.min(corner.truncate());
            max = max.max(corner.truncate());
        }

        // Summed in sorted order so corner order never changes the result
        let mut depths = corners.map(|c| c.z);
        depths.sort_by(f32::total_cmp);
        let depth = depths.iter().sum::<f32>() / CORNER_COUNT as f32;

        Self { min, max, depth }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Result of an area fill: grid dimensions and tile centers in row-major order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileGrid {
    pub rows: usize,
    pub cols: usize,
    pub centers: Vec<Vec3>,
}

impl TileGrid {
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }
}

/// Number of cells of size `step` needed to cover `extent`. Zero, negative
/// or non-finite inputs cover nothing.
fn cells_to_cover(extent: f32, step: f32) -> usize {
    if !(extent > 0.0 && step > 0.0) {
        return 0;
    }
    let cells = (extent / step).ceil();
    if cells.is_finite() { cells as usize } else { 0 }
}

/// Rows and columns of `footprint` cells needed to cover the bounding
/// rectangle of `corners`. Either is zero for a degenerate rectangle.
pub fn grid_size(corners: &[Vec3; CORNER_COUNT], footprint: Vec2) -> (usize, usize) {
    let size = WallRect::from_corners(corners).size();
    (
        cells_to_cover(size.y, footprint.y),
        cells_to_cover(size.x, footprint.x),
    )
}

/// Compute the grid of tile centers covering the bounding rectangle of
/// `corners`, with cells of size `footprint` anchored at the rectangle's
/// minimum corner.
///
/// The last row and column may overflow the rectangle; nothing is clipped.
pub fn fill_rect(corners: &[Vec3; CORNER_COUNT], footprint: Vec2) -> TileGrid {
    let rect = WallRect::from_corners(corners);
    let (rows, cols) = grid_size(corners, footprint);
    if rows == 0 || cols == 0 {
        return TileGrid::default();
    }

    let half = footprint / 2.0;
    let mut centers = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            centers.push(Vec3::new(
                rect.min.x + col as f32 * footprint.x + half.x,
                rect.min.y + row as f32 * footprint.y + half.y,
                rect.depth,
            ));
        }
    }

    TileGrid { rows, cols, centers }
}
