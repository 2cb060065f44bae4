use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    CORNER_DISTANCE, FILL_DELAY, MIN_TILE_DIMENSION, SINGLE_SHOT_DISTANCE, SINGLE_SHOT_DROP,
    TILE_DEPTH, TILE_HEIGHT, TILE_STAGGER, TILE_WIDTH,
};
use crate::tiling::{PlacementTiming, TileOrientation, TileSpec};

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Physical tile size in metres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            width: TILE_WIDTH,
            height: TILE_HEIGHT,
            depth: TILE_DEPTH,
        }
    }
}

impl TileConfig {
    pub fn spec(&self, orientation: TileOrientation) -> TileSpec {
        TileSpec {
            width: self.width,
            height: self.height,
            depth: self.depth,
            orientation,
        }
    }

    /// Every dimension must be finite and at least `MIN_TILE_DIMENSION`
    pub fn validate(&self) -> Result<(), String> {
        let dimensions = [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
        ];
        for (name, value) in dimensions {
            if !(value.is_finite() && value >= MIN_TILE_DIMENSION) {
                return Err(format!(
                    "Tile {} of {} m is below the {} m minimum",
                    name, value, MIN_TILE_DIMENSION
                ));
            }
        }
        Ok(())
    }
}

/// Camera offsets (metres) and delays (milliseconds) used when placing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    pub single_shot_distance: f32,
    pub single_shot_drop: f32,
    pub corner_distance: f32,
    pub stagger_ms: u64,
    pub fill_delay_ms: u64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            single_shot_distance: SINGLE_SHOT_DISTANCE,
            single_shot_drop: SINGLE_SHOT_DROP,
            corner_distance: CORNER_DISTANCE,
            stagger_ms: TILE_STAGGER.as_millis() as u64,
            fill_delay_ms: FILL_DELAY.as_millis() as u64,
        }
    }
}

impl PlacementConfig {
    pub fn timing(&self) -> PlacementTiming {
        PlacementTiming {
            single_shot_distance: self.single_shot_distance,
            single_shot_drop: self.single_shot_drop,
            corner_distance: self.corner_distance,
            stagger: Duration::from_millis(self.stagger_ms),
            fill_delay: Duration::from_millis(self.fill_delay_ms),
        }
    }
}

/// Application configuration persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfigData {
    pub tile: TileConfig,
    pub placement: PlacementConfig,
    /// Orientation of new tiles at startup (last toggled value)
    pub start_vertical: bool,
    /// Whether corner markers are shown (last toggled value)
    pub markers_visible: bool,
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            tile: TileConfig::default(),
            placement: PlacementConfig::default(),
            start_vertical: true,
            markers_visible: true,
        }
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Parse config JSON, describing why it was rejected on failure
fn parse_config(json: &str) -> Result<AppConfigData, String> {
    let data: AppConfigData = serde_json::from_str(json)
        .map_err(|e| format!("Configuration file was corrupted: {}", e))?;
    data.tile
        .validate()
        .map_err(|e| format!("Configuration file has an invalid tile size: {}", e))?;
    Ok(data)
}

/// Load configuration from disk. Returns the data and, when the file could
/// not be used, the reason it was replaced by defaults.
fn load_config(config_path: &Path) -> (AppConfigData, Option<String>) {
    if !config_path.exists() {
        info!("No config file found, using defaults");
        return (AppConfigData::default(), None);
    }

    match std::fs::read_to_string(config_path) {
        Ok(json) => match parse_config(&json) {
            Ok(data) => {
                info!("Loaded config from {:?}", config_path);
                (data, None)
            }
            Err(reason) => {
                warn!("Failed to parse config file: {}", reason);
                (AppConfigData::default(), Some(reason))
            }
        },
        Err(e) => {
            warn!("Failed to read config file: {}", e);
            (
                AppConfigData::default(),
                Some(format!("Could not read configuration file: {}", e)),
            )
        }
    }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let (data, reset_reason) = load_config(&config.config_path);
    config.data = data;
    config.dirty = false;

    // Set notification if config was reset due to an error
    if let Some(reason) = reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                save_config_system.run_if(on_message::<SaveConfigRequest>),
            );
    }
}
