//! Centralized constants used across the application.
//!
//! Tile dimensions and placement timings here are the defaults; `config.json`
//! may override them at startup.

use std::time::Duration;

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Tile thickness in metres (25mm)
pub const TILE_WIDTH: f32 = 0.025;

/// Tile vertical extent in metres (349.14mm), also the grid row step
pub const TILE_HEIGHT: f32 = 0.34914;

/// Tile footprint across the wall in metres (150mm), also the grid column step
pub const TILE_DEPTH: f32 = 0.150;

/// How far in front of the camera a single tile is placed
pub const SINGLE_SHOT_DISTANCE: f32 = 1.5;

/// How far below the camera a single tile is placed
pub const SINGLE_SHOT_DROP: f32 = 0.5;

/// How far in front of the camera a corner is marked
pub const CORNER_DISTANCE: f32 = 2.0;

/// Number of corners that bound a fill area
pub const CORNER_COUNT: usize = 4;

/// Delay between consecutive tiles of a fill
pub const TILE_STAGGER: Duration = Duration::from_millis(50);

/// Delay after the last corner before the fill starts (lets the marker render)
pub const FILL_DELAY: Duration = Duration::from_millis(500);

/// Duration of the scale-up animation of a freshly placed tile
pub const TILE_POP_IN: Duration = Duration::from_millis(300);

/// Largest grid a single area fill may place
pub const MAX_FILL_TILES: usize = 10_000;

/// Smallest accepted tile dimension in metres (1mm)
pub const MIN_TILE_DIMENSION: f32 = 0.001;

/// Radius of the sphere marking a corner
pub const CORNER_MARKER_RADIUS: f32 = 0.05;

/// Height of a corner's number label above its marker
pub const CORNER_LABEL_LIFT: f32 = 0.1;

/// Viewer eye height above the floor at startup
pub const VIEWER_EYE_HEIGHT: f32 = 1.6;

/// Viewer walking speed in metres per second
pub const VIEWER_MOVE_SPEED: f32 = 1.5;

/// Viewer turning speed in degrees per second (keyboard)
pub const VIEWER_TURN_SPEED: f32 = 60.0;

/// Degrees of yaw per pixel of right-drag
pub const VIEWER_DRAG_SENSITIVITY: f32 = 0.2;
