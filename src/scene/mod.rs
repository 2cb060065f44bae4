//! Rendering side of tile placement: the viewer camera, tile and corner
//! marker entities, and the Bevy implementation of [`Scene`](crate::tiling::Scene).

mod animation;
mod backend;
mod viewer;

pub use backend::SceneParams;
pub use viewer::ViewerCamera;

use bevy::prelude::*;

use crate::config::{AppConfig, ConfigLoaded};
use crate::constants::CORNER_MARKER_RADIUS;
use crate::theme;
use crate::tiling::{SessionSet, TileOrientation};

/// A tile created by a tap or an area fill
#[derive(Component, Debug)]
pub struct PlacedTile;

/// A marked corner, labelled with its 1-based number
#[derive(Component, Debug)]
pub struct CornerMarker {
    pub label: usize,
}

/// Shared meshes and materials for tiles and markers
#[derive(Resource)]
pub struct TileAssets {
    pub tile_mesh: Handle<Mesh>,
    pub tile_material: Handle<StandardMaterial>,
    pub marker_mesh: Handle<Mesh>,
    pub marker_material: Handle<StandardMaterial>,
}

/// Build tile meshes from the configured tile size
fn setup_tile_assets(
    mut commands: Commands,
    config: Res<AppConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let extents = config
        .data
        .tile
        .spec(TileOrientation::default())
        .extents();

    commands.insert_resource(TileAssets {
        tile_mesh: meshes.add(Cuboid::from_size(extents)),
        tile_material: materials.add(StandardMaterial {
            base_color: theme::TILE_COLOR,
            perceptual_roughness: 0.35,
            ..default()
        }),
        marker_mesh: meshes.add(Sphere::new(CORNER_MARKER_RADIUS)),
        marker_material: materials.add(StandardMaterial {
            base_color: theme::CORNER_MARKER_COLOR,
            unlit: true,
            ..default()
        }),
    });
}

/// Floor and lights so placed tiles have some context
fn setup_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(20.0, 20.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: theme::FLOOR_COLOR,
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::default(),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(2.0, 6.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(theme::BACKGROUND_COLOR))
            .add_systems(
                Startup,
                (
                    setup_tile_assets.after(ConfigLoaded),
                    setup_environment,
                    viewer::spawn_viewer,
                ),
            )
            .add_systems(
                Update,
                (
                    viewer::viewer_controls.before(SessionSet::Input),
                    animation::animate_pop_in,
                ),
            );
    }
}
