//! One-way status reporting from the placement session to whatever displays it.

use std::fmt;

use bevy::prelude::*;

use crate::constants::{CORNER_COUNT, MAX_FILL_TILES};

use super::geometry::TileOrientation;

/// A human-readable report of one session transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    TilePlaced,
    MarkCorners,
    CornerMarked { count: usize },
    FillStarted { rows: usize, cols: usize, total: usize },
    FillComplete { total: usize },
    AreaTooLarge { tiles: usize },
    PoseUnavailable,
    Cancelled,
    Cleared,
    Orientation(TileOrientation),
    Markers { visible: bool },
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::TilePlaced => write!(f, "Tile placed"),
            StatusMessage::MarkCorners => {
                write!(f, "Mark the {0} corners of the wall (0/{0})", CORNER_COUNT)
            }
            StatusMessage::CornerMarked { count } => {
                write!(f, "Corner {}/{} marked", count, CORNER_COUNT)
            }
            StatusMessage::FillStarted { rows, cols, total } => {
                write!(f, "Placing {}x{} grid ({} tiles)...", rows, cols, total)
            }
            StatusMessage::FillComplete { total } => write!(f, "{} tiles placed", total),
            StatusMessage::AreaTooLarge { tiles } => write!(
                f,
                "Area too large: {} tiles (limit {})",
                tiles, MAX_FILL_TILES
            ),
            StatusMessage::PoseUnavailable => {
                write!(f, "Camera pose unavailable, nothing placed")
            }
            StatusMessage::Cancelled => write!(f, "Area placement cancelled"),
            StatusMessage::Cleared => write!(f, "All tiles cleared"),
            StatusMessage::Orientation(orientation) => {
                write!(f, "{} mode", orientation.display_name())
            }
            StatusMessage::Markers { visible: true } => write!(f, "Grid shown"),
            StatusMessage::Markers { visible: false } => write!(f, "Grid hidden"),
        }
    }
}

/// Receiver of status reports
pub trait StatusSink {
    fn report(&mut self, message: StatusMessage);
}

/// Resource holding the most recent status message for the status bar
#[derive(Resource, Default, Debug)]
pub struct StatusLine {
    current: Option<StatusMessage>,
}

impl StatusLine {
    pub fn current(&self) -> Option<StatusMessage> {
        self.current
    }
}

impl StatusSink for StatusLine {
    fn report(&mut self, message: StatusMessage) {
        info!("Status: {}", message);
        self.current = Some(message);
    }
}
