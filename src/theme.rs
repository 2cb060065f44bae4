//! Centralized color theme for the application.
//!
//! This module provides all colors used for scene rendering and the UI.
//! Modify values here to change the application's color scheme.

use bevy::prelude::Color;
use bevy_egui::egui;

// ============================================================================
// Scene Colors
// ============================================================================

/// Light ceramic color for placed tiles
pub const TILE_COLOR: Color = Color::srgb(0.86, 0.84, 0.8);

/// Bright red for corner markers
pub const CORNER_MARKER_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

/// Floor plane under the viewer
pub const FLOOR_COLOR: Color = Color::srgb(0.3, 0.32, 0.35);

/// Clear color behind the scene
pub const BACKGROUND_COLOR: Color = Color::srgb(0.12, 0.13, 0.15);

// ============================================================================
// UI Colors
// ============================================================================

/// Corner number labels drawn over the scene
pub const CORNER_LABEL: egui::Color32 = egui::Color32::WHITE;

/// Banner fill while corners are being collected
pub const PLACEMENT_BANNER_FILL: egui::Color32 = egui::Color32::from_rgb(160, 40, 40);

/// Status bar text for failures
pub const STATUS_WARNING: egui::Color32 = egui::Color32::from_rgb(255, 180, 60);

/// Status bar text for everything else
pub const STATUS_NORMAL: egui::Color32 = egui::Color32::LIGHT_GRAY;

/// Secondary hint text
pub const HINT_TEXT: egui::Color32 = egui::Color32::GRAY;
