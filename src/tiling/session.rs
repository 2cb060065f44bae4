//! The placement session: interaction mode, corner accumulation, and the
//! fill jobs they trigger.

use std::fmt;
use std::time::Duration;

use bevy::prelude::*;

use crate::constants::{
    CORNER_COUNT, CORNER_DISTANCE, FILL_DELAY, MAX_FILL_TILES, SINGLE_SHOT_DISTANCE,
    SINGLE_SHOT_DROP, TILE_STAGGER,
};

use super::collaborator::Scene;
use super::geometry::{fill_rect, grid_size, CornerSet, TileOrientation, TileSpec};
use super::scheduler::{Action, Scheduler, TilePlacementJob};
use super::status::{StatusMessage, StatusSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementMode {
    /// Each tap places one tile in front of the camera
    #[default]
    SingleShot,
    /// Each tap marks a corner of the area to fill
    CollectingCorners,
}

/// Distances and delays that drive tap handling and fills
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementTiming {
    pub single_shot_distance: f32,
    /// Subtracted from the camera height for single tiles
    pub single_shot_drop: f32,
    pub corner_distance: f32,
    pub stagger: Duration,
    pub fill_delay: Duration,
}

impl Default for PlacementTiming {
    fn default() -> Self {
        Self {
            single_shot_distance: SINGLE_SHOT_DISTANCE,
            single_shot_drop: SINGLE_SHOT_DROP,
            corner_distance: CORNER_DISTANCE,
            stagger: TILE_STAGGER,
            fill_delay: FILL_DELAY,
        }
    }
}

/// What a tap did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome<H> {
    TilePlaced(H),
    CornerAdded { count: usize },
    /// All corners are marked and the fill is about to start
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    PoseUnavailable,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::PoseUnavailable => write!(f, "camera pose unavailable"),
        }
    }
}

impl std::error::Error for PlacementError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillError {
    /// A fill needs exactly four corners
    WrongCornerCount(usize),
    /// The previous fill is still placing tiles
    JobInProgress,
    /// The grid would need more than `MAX_FILL_TILES` tiles
    TooManyTiles(usize),
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillError::WrongCornerCount(count) => {
                write!(f, "expected {} corners, got {}", CORNER_COUNT, count)
            }
            FillError::JobInProgress => write!(f, "a fill is already in progress"),
            FillError::TooManyTiles(tiles) => {
                write!(f, "{} tiles exceeds the limit of {}", tiles, MAX_FILL_TILES)
            }
        }
    }
}

impl std::error::Error for FillError {}

/// All mutable placement state, owned in one place
#[derive(Resource, Debug)]
pub struct PlacementSession {
    mode: PlacementMode,
    corners: CornerSet,
    tile: TileSpec,
    timing: PlacementTiming,
    markers_visible: bool,
    scheduler: Scheduler,
}

impl Default for PlacementSession {
    fn default() -> Self {
        Self::new(TileSpec::default(), PlacementTiming::default())
    }
}

impl PlacementSession {
    pub fn new(tile: TileSpec, timing: PlacementTiming) -> Self {
        Self {
            mode: PlacementMode::default(),
            corners: CornerSet::default(),
            tile,
            timing,
            markers_visible: true,
            scheduler: Scheduler::default(),
        }
    }

    pub fn with_markers_visible(mut self, visible: bool) -> Self {
        self.markers_visible = visible;
        self
    }

    pub fn mode(&self) -> PlacementMode {
        self.mode
    }

    pub fn corners(&self) -> &CornerSet {
        &self.corners
    }

    pub fn orientation(&self) -> TileOrientation {
        self.tile.orientation
    }

    pub fn markers_visible(&self) -> bool {
        self.markers_visible
    }

    /// The fill currently placing tiles, if any
    pub fn job(&self) -> Option<&TilePlacementJob> {
        self.scheduler.job()
    }

    /// Virtual time elapsed since the session started
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Enter corner collection with an empty corner set
    pub fn start_area_placement(&mut self, status: &mut impl StatusSink) {
        self.mode = PlacementMode::CollectingCorners;
        self.corners.clear();
        self.discard_corner_fill();
        status.report(StatusMessage::MarkCorners);
    }

    /// Handle a tap according to the current mode.
    ///
    /// In single-shot mode a tile is created immediately in front of the
    /// camera. While collecting corners the tap marks the next corner; the
    /// fourth one schedules the fill after the fill delay.
    pub fn handle_tap<S: Scene>(
        &mut self,
        scene: &mut S,
        status: &mut impl StatusSink,
    ) -> Result<TapOutcome<S::Handle>, PlacementError> {
        if self.mode == PlacementMode::CollectingCorners && self.corners.is_complete() {
            return Ok(TapOutcome::Ignored);
        }

        let Some(pose) = scene.camera_pose() else {
            status.report(StatusMessage::PoseUnavailable);
            return Err(PlacementError::PoseUnavailable);
        };

        match self.mode {
            PlacementMode::SingleShot => {
                let center = pose.point_ahead(
                    self.timing.single_shot_distance,
                    -self.timing.single_shot_drop,
                );
                let handle = scene.create_tile(center, self.tile.orientation);
                status.report(StatusMessage::TilePlaced);
                Ok(TapOutcome::TilePlaced(handle))
            }
            PlacementMode::CollectingCorners => {
                let corner = pose.point_ahead(self.timing.corner_distance, 0.0);
                let Some(count) = self.corners.push(corner) else {
                    return Ok(TapOutcome::Ignored);
                };
                scene.create_corner_marker(corner, count, self.markers_visible);
                status.report(StatusMessage::CornerMarked { count });

                if self.corners.is_complete() {
                    debug!("All corners marked, filling in {:?}", self.timing.fill_delay);
                    self.scheduler
                        .schedule_after(self.timing.fill_delay, Action::CompleteCorners);
                }
                Ok(TapOutcome::CornerAdded { count })
            }
        }
    }

    /// Schedule tiles covering the bounding rectangle of `corners`.
    ///
    /// Returns the number of tiles scheduled. An empty grid reports completion
    /// right away.
    pub fn fill(
        &mut self,
        corners: &[Vec3],
        status: &mut impl StatusSink,
    ) -> Result<usize, FillError> {
        let corners = <[Vec3; CORNER_COUNT]>::try_from(corners)
            .map_err(|_| FillError::WrongCornerCount(corners.len()))?;

        if self.scheduler.is_draining() {
            warn!("Fill requested while a previous fill is still placing tiles");
            return Err(FillError::JobInProgress);
        }

        let (rows, cols) = grid_size(&corners, self.tile.footprint());
        let requested = rows.saturating_mul(cols);
        if requested > MAX_FILL_TILES {
            status.report(StatusMessage::AreaTooLarge { tiles: requested });
            return Err(FillError::TooManyTiles(requested));
        }

        let grid = fill_rect(&corners, self.tile.footprint());
        let total = grid.len();
        status.report(StatusMessage::FillStarted {
            rows: grid.rows,
            cols: grid.cols,
            total,
        });

        if grid.is_empty() {
            status.report(StatusMessage::FillComplete { total: 0 });
            return Ok(0);
        }

        self.scheduler
            .begin_job(&grid, self.tile.orientation, self.timing.stagger);
        debug!(
            "Fill job of {} tiles scheduled (generation {})",
            total,
            self.scheduler.generation()
        );
        Ok(total)
    }

    /// Advance the virtual clock and run everything that became due
    pub fn tick(
        &mut self,
        elapsed: Duration,
        scene: &mut impl Scene,
        status: &mut impl StatusSink,
    ) {
        self.scheduler.advance(elapsed);
        while let Some(scheduled) = self.scheduler.pop_due() {
            match scheduled.action {
                Action::CompleteCorners => self.complete_corners(status),
                Action::PlaceTile {
                    index,
                    center,
                    orientation,
                } => {
                    scene.create_tile(center, orientation);
                    trace!("Placed tile {} at {:?}", index, center);
                    if let Some(total) = self.scheduler.record_placement() {
                        status.report(StatusMessage::FillComplete { total });
                    }
                }
            }
        }
    }

    fn complete_corners(&mut self, status: &mut impl StatusSink) {
        if self.mode != PlacementMode::CollectingCorners {
            return;
        }
        // Corner collection was restarted after the fourth corner
        let Some(corners) = self.corners.snapshot() else {
            return;
        };

        debug!("Filling marked area at {:?}", self.now());
        self.mode = PlacementMode::SingleShot;
        let result = self.fill(&corners, status);
        self.corners.clear();

        if let Err(e) = result {
            warn!("Area fill skipped: {}", e);
        }
    }

    /// Leave corner collection, keeping placed tiles
    pub fn cancel(&mut self, status: &mut impl StatusSink) {
        if self.mode != PlacementMode::CollectingCorners {
            return;
        }
        self.mode = PlacementMode::SingleShot;
        self.corners.clear();
        self.discard_corner_fill();
        status.report(StatusMessage::Cancelled);
    }

    fn discard_corner_fill(&mut self) {
        if self.scheduler.cancel_corner_fill() {
            debug!("Discarded the pending fill of the previous corners");
        }
    }

    /// Remove everything and return to single-shot mode. Pending corner
    /// fills and staggered tiles are cancelled too.
    pub fn clear_all(&mut self, scene: &mut impl Scene, status: &mut impl StatusSink) {
        self.corners.clear();
        self.mode = PlacementMode::SingleShot;
        let pending = self.scheduler.pending_len();
        self.scheduler.invalidate();
        if pending > 0 {
            debug!("Cancelled {} scheduled actions", pending);
        }
        scene.clear_all();
        status.report(StatusMessage::Cleared);
    }

    /// Flip the orientation used for tiles created from now on
    pub fn toggle_orientation(&mut self, status: &mut impl StatusSink) -> TileOrientation {
        self.tile.orientation = self.tile.orientation.toggled();
        status.report(StatusMessage::Orientation(self.tile.orientation));
        self.tile.orientation
    }

    /// Show or hide the corner markers
    pub fn toggle_markers(
        &mut self,
        scene: &mut impl Scene,
        status: &mut impl StatusSink,
    ) -> bool {
        self.markers_visible = !self.markers_visible;
        scene.set_markers_visible(self.markers_visible);
        status.report(StatusMessage::Markers {
            visible: self.markers_visible,
        });
        self.markers_visible
    }
}
